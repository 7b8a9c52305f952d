use std::sync::Arc;

use logger::TracingLogger;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::supplier::repository::SupplierRepositoryPostgres;

use business::application::category::create::CreateCategoryUseCaseImpl;
use business::application::category::delete::DeleteCategoryUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::category::get_by_id::GetCategoryByIdUseCaseImpl;
use business::application::category::update::UpdateCategoryUseCaseImpl;
use business::application::product::committer::ProductCommitter;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::references::ReferenceGate;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::supplier::create::CreateSupplierUseCaseImpl;
use business::application::supplier::delete::DeleteSupplierUseCaseImpl;
use business::application::supplier::get_all::GetAllSuppliersUseCaseImpl;
use business::application::supplier::get_by_id::GetSupplierByIdUseCaseImpl;
use business::application::supplier::update::UpdateSupplierUseCaseImpl;
use business::domain::category::repository::CategoryRepository;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;
use business::domain::supplier::repository::SupplierRepository;

use crate::api::category::routes::CategoryApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::supplier::routes::SupplierApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub category_api: CategoryApi,
    pub supplier_api: SupplierApi,
}

impl DependencyContainer {
    /// Wires the PostgreSQL adapters.
    pub fn from_pool(pool: sqlx::PgPool) -> Self {
        Self::new(
            Arc::new(ProductRepositoryPostgres::new(pool.clone())),
            Arc::new(CategoryRepositoryPostgres::new(pool.clone())),
            Arc::new(SupplierRepositoryPostgres::new(pool)),
        )
    }

    pub fn new(
        product_repository: Arc<dyn ProductRepository>,
        category_repository: Arc<dyn CategoryRepository>,
        supplier_repository: Arc<dyn SupplierRepository>,
    ) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Shared by every product write
        let references = ReferenceGate::new(
            category_repository.clone(),
            supplier_repository.clone(),
        );
        let committer = ProductCommitter::new(product_repository.clone(), logger.clone());

        // Product use cases
        let product_api = ProductApi::new(
            Arc::new(CreateProductUseCaseImpl {
                references: references.clone(),
                committer: committer.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllProductsUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateProductUseCaseImpl {
                repository: product_repository,
                references,
                committer: committer.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl {
                committer,
                logger: logger.clone(),
            }),
        );

        // Category use cases
        let category_api = CategoryApi::new(
            Arc::new(CreateCategoryUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllCategoriesUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetCategoryByIdUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateCategoryUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteCategoryUseCaseImpl {
                repository: category_repository,
                logger: logger.clone(),
            }),
        );

        // Supplier use cases
        let supplier_api = SupplierApi::new(
            Arc::new(CreateSupplierUseCaseImpl {
                repository: supplier_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllSuppliersUseCaseImpl {
                repository: supplier_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetSupplierByIdUseCaseImpl {
                repository: supplier_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateSupplierUseCaseImpl {
                repository: supplier_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteSupplierUseCaseImpl {
                repository: supplier_repository,
                logger,
            }),
        );

        Self {
            health_api: HealthApi::new(),
            product_api,
            category_api,
            supplier_api,
        }
    }
}
