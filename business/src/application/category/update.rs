use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCategoryUseCase for UpdateCategoryUseCaseImpl {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Updating category: {}", params.id));

        let id = params.id;
        let map_error = move |e: RepositoryError| match e {
            RepositoryError::NotFound => CategoryError::NotFound(id),
            RepositoryError::Duplicated => CategoryError::Duplicated,
            other => CategoryError::Repository(other),
        };

        let existing = self
            .repository
            .get_by_id(id)
            .await
            .map_err(map_error)?;

        let renamed = existing.rename(params.name)?;
        let stored = self.repository.update(&renamed).await.map_err(map_error)?;

        self.logger
            .info(&format!("Category updated: {}", stored.id));
        Ok(stored)
    }
}
