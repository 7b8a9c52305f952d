use serde::{Deserialize, Serialize};

use super::errors::ProductError;

/// A stocked item. Holds non-owning references to a category and a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub qtd: i32,
    pub category_id: i64,
    pub supplier_id: i64,
}

/// A product that has not been stored yet; the store assigns its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub qtd: i32,
    pub category_id: i64,
    pub supplier_id: i64,
}

pub struct NewProductProps {
    pub name: String,
    pub price: f64,
    pub qtd: i32,
    pub category_id: i64,
    pub supplier_id: i64,
}

impl NewProduct {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        check_fields(&props.name, props.price, props.qtd)?;

        Ok(Self {
            name: props.name,
            price: props.price,
            qtd: props.qtd,
            category_id: props.category_id,
            supplier_id: props.supplier_id,
        })
    }

    /// Attaches the identifier assigned by the store.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            qtd: self.qtd,
            category_id: self.category_id,
            supplier_id: self.supplier_id,
        }
    }
}

impl Product {
    /// Re-checks the field invariants, e.g. after a patch has been merged.
    pub fn validate(&self) -> Result<(), ProductError> {
        check_fields(&self.name, self.price, self.qtd)
    }
}

fn check_fields(name: &str, price: f64, qtd: i32) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::InvalidPrice);
    }
    if qtd < 0 {
        return Err(ProductError::InvalidQuantity);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str, price: f64, qtd: i32) -> NewProductProps {
        NewProductProps {
            name: name.to_string(),
            price,
            qtd,
            category_id: 1,
            supplier_id: 2,
        }
    }

    #[test]
    fn should_create_new_product_when_fields_are_valid() {
        let product = NewProduct::new(props("Mouse", 50.0, 10)).unwrap();
        assert_eq!(product.name, "Mouse");
        assert_eq!(product.qtd, 10);
    }

    #[test]
    fn should_accept_zero_price_and_zero_quantity() {
        assert!(NewProduct::new(props("Sample", 0.0, 0)).is_ok());
    }

    #[test]
    fn should_reject_blank_name() {
        let result = NewProduct::new(props("   ", 1.0, 1));
        assert!(matches!(result, Err(ProductError::NameEmpty)));
    }

    #[test]
    fn should_reject_negative_or_nan_price() {
        assert!(matches!(
            NewProduct::new(props("Mouse", -0.01, 1)),
            Err(ProductError::InvalidPrice)
        ));
        assert!(matches!(
            NewProduct::new(props("Mouse", f64::NAN, 1)),
            Err(ProductError::InvalidPrice)
        ));
    }

    #[test]
    fn should_reject_negative_quantity() {
        let result = NewProduct::new(props("Mouse", 1.0, -1));
        assert!(matches!(result, Err(ProductError::InvalidQuantity)));
    }

    #[test]
    fn should_keep_fields_when_assigning_id() {
        let new_product = NewProduct::new(props("Mouse", 50.0, 10)).unwrap();
        let product = new_product.clone().into_product(7);

        assert_eq!(product.id, 7);
        assert_eq!(product.name, new_product.name);
        assert_eq!(product.price, new_product.price);
        assert_eq!(product.category_id, 1);
        assert_eq!(product.supplier_id, 2);
    }
}
