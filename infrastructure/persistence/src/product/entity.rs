use sqlx::FromRow;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub qtd: i32,
    pub category_id: i64,
    pub supplier_id: i64,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            price: self.price,
            qtd: self.qtd,
            category_id: self.category_id,
            supplier_id: self.supplier_id,
        }
    }
}
