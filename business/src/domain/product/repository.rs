use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};

/// Product side of the reference store.
///
/// `insert` and `update` are single atomic writes. Implementations must report a
/// missing category or supplier as `RepositoryError::ForeignKeyViolation` and
/// leave nothing behind when they do.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    /// Fails with `NotFound` when no row has `product.id`.
    async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
    /// Fails with `NotFound` when no row has `id`.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
