use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::committer::ProductCommitter;
use crate::application::product::references::ReferenceGate;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::{EntityKind, ProductError};
use crate::domain::product::model::Product;
use crate::domain::product::patch::merge;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub references: ReferenceGate,
    pub committer: ProductCommitter,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::not_found(EntityKind::Product, params.id),
                other => ProductError::Repository(other),
            })?;

        if params.patch.touches_references() {
            let (category_id, supplier_id) = params.patch.merged_references(&existing);
            self.references
                .validate_references(category_id, supplier_id)
                .await?;
        }

        let merged = merge(&existing, &params.patch);
        merged.validate()?;

        let stored = self.committer.update(&merged).await?;

        self.logger
            .info(&format!("Product updated: {}", stored.id));
        Ok(stored)
    }
}
