use sqlx::FromRow;

use business::domain::supplier::model::Supplier;

#[derive(Debug, FromRow)]
pub struct SupplierEntity {
    pub id: i64,
    pub name: String,
    pub cnpj: String,
    pub address: String,
}

impl SupplierEntity {
    pub fn into_domain(self) -> Supplier {
        Supplier {
            id: self.id,
            name: self.name,
            cnpj: self.cnpj,
            address: self.address,
        }
    }
}
