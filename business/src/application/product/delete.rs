use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::committer::ProductCommitter;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub committer: ProductCommitter,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // No reference checks: nothing depends on a product.
        self.committer.delete(params.id).await
    }
}
