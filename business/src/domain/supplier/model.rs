use serde::{Deserialize, Serialize};

use super::errors::SupplierError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    /// Brazilian company tax identifier, unique per supplier.
    pub cnpj: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSupplier {
    pub name: String,
    pub cnpj: String,
    pub address: String,
}

pub struct NewSupplierProps {
    pub name: String,
    pub cnpj: String,
    pub address: String,
}

impl NewSupplier {
    pub fn new(props: NewSupplierProps) -> Result<Self, SupplierError> {
        check_fields(&props.name, &props.cnpj)?;
        Ok(Self {
            name: props.name,
            cnpj: props.cnpj,
            address: props.address,
        })
    }
}

impl Supplier {
    pub fn validate(&self) -> Result<(), SupplierError> {
        check_fields(&self.name, &self.cnpj)
    }
}

fn check_fields(name: &str, cnpj: &str) -> Result<(), SupplierError> {
    if name.trim().is_empty() {
        return Err(SupplierError::NameEmpty);
    }
    if cnpj.trim().is_empty() {
        return Err(SupplierError::CnpjEmpty);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str, cnpj: &str) -> NewSupplierProps {
        NewSupplierProps {
            name: name.to_string(),
            cnpj: cnpj.to_string(),
            address: "Rua C".to_string(),
        }
    }

    #[test]
    fn should_create_supplier_when_valid() {
        let supplier = NewSupplier::new(props("Dell", "789")).unwrap();
        assert_eq!(supplier.cnpj, "789");
    }

    #[test]
    fn should_reject_blank_name_or_cnpj() {
        assert!(matches!(
            NewSupplier::new(props("", "789")),
            Err(SupplierError::NameEmpty)
        ));
        assert!(matches!(
            NewSupplier::new(props("Dell", " ")),
            Err(SupplierError::CnpjEmpty)
        ));
    }
}
