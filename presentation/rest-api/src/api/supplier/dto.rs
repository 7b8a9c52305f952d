use poem_openapi::Object;

use business::domain::supplier::model::Supplier;

#[derive(Debug, Clone, Object)]
pub struct CreateSupplierRequest {
    /// Supplier name (cannot be empty)
    pub name: String,
    /// Company registration number (unique, cannot be empty)
    pub cnpj: String,
    pub address: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateSupplierRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub cnpj: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct SupplierResponse {
    pub id: i64,
    pub name: String,
    pub cnpj: String,
    pub address: String,
}

impl From<Supplier> for SupplierResponse {
    fn from(supplier: Supplier) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name,
            cnpj: supplier.cnpj,
            address: supplier.address,
        }
    }
}
