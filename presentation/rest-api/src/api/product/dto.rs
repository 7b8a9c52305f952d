use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::product::patch::ProductPatch;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Unit price (zero or greater)
    pub price: f64,
    /// Quantity in stock (zero or greater)
    pub qtd: i32,
    /// Category the product belongs to
    pub category_id: i64,
    /// Supplier of the product
    pub supplier_id: i64,
}

/// Sparse update: only the fields present in the body are changed.
#[derive(Debug, Clone, Default, Object)]
pub struct UpdateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub qtd: Option<i32>,
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<i64>,
    #[oai(skip_serializing_if_is_none)]
    pub supplier_id: Option<i64>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(body: UpdateProductRequest) -> Self {
        Self {
            name: body.name,
            price: body.price,
            qtd: body.qtd,
            category_id: body.category_id,
            supplier_id: body.supplier_id,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub qtd: i32,
    pub category_id: i64,
    pub supplier_id: i64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            qtd: product.qtd,
            category_id: product.category_id,
            supplier_id: product.supplier_id,
        }
    }
}
