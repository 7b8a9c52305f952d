use std::sync::Arc;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::{ConflictReason, EntityKind, ProductError};
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;

/// Performs product writes and turns the store's foreign-key failure into
/// `ProductError::Conflict`.
///
/// Callers run `ReferenceGate` first. A write that still hits the constraint lost
/// the race against a concurrent delete; the repository has already rolled it
/// back, so it is reported and never retried here.
#[derive(Clone)]
pub struct ProductCommitter {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl ProductCommitter {
    pub fn new(repository: Arc<dyn ProductRepository>, logger: Arc<dyn Logger>) -> Self {
        Self { repository, logger }
    }

    pub async fn create(&self, product: &NewProduct) -> Result<Product, ProductError> {
        let stored = self
            .repository
            .insert(product)
            .await
            .map_err(|e| self.commit_error(e, None))?;

        self.logger
            .info(&format!("Product committed with id: {}", stored.id));
        Ok(stored)
    }

    pub async fn update(&self, product: &Product) -> Result<Product, ProductError> {
        let stored = self
            .repository
            .update(product)
            .await
            .map_err(|e| self.commit_error(e, Some(product.id)))?;

        self.logger
            .info(&format!("Product update committed: {}", stored.id));
        Ok(stored)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ProductError> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| self.commit_error(e, Some(id)))?;

        self.logger.info(&format!("Product deleted: {}", id));
        Ok(())
    }

    fn commit_error(&self, err: RepositoryError, id: Option<i64>) -> ProductError {
        match (err, id) {
            (RepositoryError::ForeignKeyViolation, _) => {
                self.logger.warn(&format!(
                    "Product write rolled back, category or supplier no longer exists (product: {:?})",
                    id
                ));
                ProductError::Conflict(ConflictReason::DanglingReference)
            }
            (RepositoryError::NotFound, Some(id)) => {
                ProductError::not_found(EntityKind::Product, id)
            }
            (other, _) => {
                self.logger
                    .error(&format!("Product write failed: {}", other));
                ProductError::Repository(other)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockProductRepo, mock_logger, mouse};

    fn new_mouse() -> NewProduct {
        NewProduct {
            name: "Mouse".to_string(),
            price: 50.0,
            qtd: 10,
            category_id: 1,
            supplier_id: 2,
        }
    }

    #[tokio::test]
    async fn should_return_stored_product_with_assigned_id() {
        let mut repo = MockProductRepo::new();
        repo.expect_insert()
            .times(1)
            .returning(|p| Ok(p.clone().into_product(42)));

        let committer = ProductCommitter::new(Arc::new(repo), mock_logger());

        let stored = committer.create(&new_mouse()).await.unwrap();

        assert_eq!(stored.id, 42);
        assert_eq!(stored.name, "Mouse");
    }

    #[tokio::test]
    async fn should_translate_foreign_key_violation_into_conflict_on_create() {
        let mut repo = MockProductRepo::new();
        repo.expect_insert()
            .returning(|_| Err(RepositoryError::ForeignKeyViolation));

        let committer = ProductCommitter::new(Arc::new(repo), mock_logger());

        let result = committer.create(&new_mouse()).await;

        assert!(matches!(
            result,
            Err(ProductError::Conflict(ConflictReason::DanglingReference))
        ));
    }

    #[tokio::test]
    async fn should_translate_foreign_key_violation_into_conflict_on_update() {
        let mut repo = MockProductRepo::new();
        repo.expect_update()
            .returning(|_| Err(RepositoryError::ForeignKeyViolation));

        let committer = ProductCommitter::new(Arc::new(repo), mock_logger());

        let result = committer.update(&mouse(3, 1, 2)).await;

        assert!(matches!(result, Err(ProductError::Conflict(_))));
    }

    #[tokio::test]
    async fn should_report_missing_product_on_update_and_delete() {
        let mut repo = MockProductRepo::new();
        repo.expect_update()
            .returning(|_| Err(RepositoryError::NotFound));
        repo.expect_delete()
            .returning(|_| Err(RepositoryError::NotFound));

        let committer = ProductCommitter::new(Arc::new(repo), mock_logger());

        assert!(matches!(
            committer.update(&mouse(3, 1, 2)).await,
            Err(ProductError::NotFound {
                entity: EntityKind::Product,
                id: 3
            })
        ));
        assert!(matches!(
            committer.delete(8).await,
            Err(ProductError::NotFound {
                entity: EntityKind::Product,
                id: 8
            })
        ));
    }

    #[tokio::test]
    async fn should_keep_other_store_failures_as_repository_errors() {
        let mut repo = MockProductRepo::new();
        repo.expect_insert()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let committer = ProductCommitter::new(Arc::new(repo), mock_logger());

        assert!(matches!(
            committer.create(&new_mouse()).await,
            Err(ProductError::Repository(RepositoryError::DatabaseError))
        ));
    }
}
