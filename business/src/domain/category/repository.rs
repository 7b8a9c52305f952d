use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Category, NewCategory};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Category, RepositoryError>;
    async fn insert(&self, category: &NewCategory) -> Result<Category, RepositoryError>;
    async fn update(&self, category: &Category) -> Result<Category, RepositoryError>;
    /// Fails with `ForeignKeyViolation` while products reference the category.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
