use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::{Category, NewCategory};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct CreateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCategoryUseCase for CreateCategoryUseCaseImpl {
    async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Creating category: {}", params.name));

        let category = NewCategory::new(params.name)?;

        let stored = self
            .repository
            .insert(&category)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => CategoryError::Duplicated,
                other => CategoryError::Repository(other),
            })?;

        self.logger
            .info(&format!("Category created with id: {}", stored.id));
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockCategoryRepo, mock_logger, tech};

    #[tokio::test]
    async fn should_create_category_when_name_is_valid() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_insert().returning(|_| Ok(tech(1)));

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let category = use_case
            .execute(CreateCategoryParams {
                name: "Tech".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(category.id, 1);
        assert_eq!(category.name, "Tech");
    }

    #[tokio::test]
    async fn should_report_duplicated_name() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_insert()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCategoryParams {
                name: "Tech".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CategoryError::Duplicated)));
    }

    #[tokio::test]
    async fn should_reject_empty_name() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_insert().never();

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCategoryParams {
                name: "".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CategoryError::NameEmpty)));
    }
}
