use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewSupplier, Supplier};

#[async_trait]
pub trait SupplierRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Supplier>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Supplier, RepositoryError>;
    async fn insert(&self, supplier: &NewSupplier) -> Result<Supplier, RepositoryError>;
    async fn update(&self, supplier: &Supplier) -> Result<Supplier, RepositoryError>;
    /// Fails with `ForeignKeyViolation` while products reference the supplier.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
