use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCategoryUseCase for DeleteCategoryUseCaseImpl {
    async fn execute(&self, params: DeleteCategoryParams) -> Result<(), CategoryError> {
        self.logger
            .info(&format!("Deleting category: {}", params.id));

        self.repository
            .delete(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CategoryError::NotFound(params.id),
                RepositoryError::ForeignKeyViolation => CategoryError::InUse,
                other => CategoryError::Repository(other),
            })?;

        self.logger
            .info(&format!("Category deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockCategoryRepo, mock_logger};

    #[tokio::test]
    async fn should_refuse_to_delete_category_in_use() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_delete()
            .returning(|_| Err(RepositoryError::ForeignKeyViolation));

        let use_case = DeleteCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteCategoryParams { id: 1 }).await;

        assert!(matches!(result, Err(CategoryError::InUse)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent_category() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_delete()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteCategoryParams { id: 1 }).await;

        assert!(matches!(result, Err(CategoryError::NotFound(1))));
    }
}
