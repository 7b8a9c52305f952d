use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::committer::ProductCommitter;
use crate::application::product::references::ReferenceGate;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, NewProductProps, Product};
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub references: ReferenceGate,
    pub committer: ProductCommitter,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = NewProduct::new(NewProductProps {
            name: params.name,
            price: params.price,
            qtd: params.qtd,
            category_id: params.category_id,
            supplier_id: params.supplier_id,
        })?;

        self.references
            .validate_references(product.category_id, product.supplier_id)
            .await?;

        let stored = self.committer.create(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", stored.id));
        Ok(stored)
    }
}
