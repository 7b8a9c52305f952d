//! Mocks of the domain ports shared by the use-case tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::category::model::{Category, NewCategory};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::supplier::model::{NewSupplier, Supplier};
use crate::domain::supplier::repository::SupplierRepository;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
        async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
        async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
        async fn get_by_id(&self, id: i64) -> Result<Category, RepositoryError>;
        async fn insert(&self, category: &NewCategory) -> Result<Category, RepositoryError>;
        async fn update(&self, category: &Category) -> Result<Category, RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub SupplierRepo {}

    #[async_trait]
    impl SupplierRepository for SupplierRepo {
        async fn get_all(&self) -> Result<Vec<Supplier>, RepositoryError>;
        async fn get_by_id(&self, id: i64) -> Result<Supplier, RepositoryError>;
        async fn insert(&self, supplier: &NewSupplier) -> Result<Supplier, RepositoryError>;
        async fn update(&self, supplier: &Supplier) -> Result<Supplier, RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn tech(id: i64) -> Category {
    Category {
        id,
        name: "Tech".to_string(),
    }
}

pub fn dell(id: i64) -> Supplier {
    Supplier {
        id,
        name: "Dell".to_string(),
        cnpj: "789".to_string(),
        address: "Rua C".to_string(),
    }
}

pub fn mouse(id: i64, category_id: i64, supplier_id: i64) -> Product {
    Product {
        id,
        name: "Mouse".to_string(),
        price: 50.0,
        qtd: 10,
        category_id,
        supplier_id,
    }
}

/// Category repository that resolves every id in `existing` and nothing else.
pub fn categories_with(existing: &'static [i64]) -> MockCategoryRepo {
    let mut repo = MockCategoryRepo::new();
    repo.expect_get_by_id().returning(move |id| {
        if existing.contains(&id) {
            Ok(tech(id))
        } else {
            Err(RepositoryError::NotFound)
        }
    });
    repo
}

/// Supplier repository that resolves every id in `existing` and nothing else.
pub fn suppliers_with(existing: &'static [i64]) -> MockSupplierRepo {
    let mut repo = MockSupplierRepo::new();
    repo.expect_get_by_id().returning(move |id| {
        if existing.contains(&id) {
            Ok(dell(id))
        } else {
            Err(RepositoryError::NotFound)
        }
    });
    repo
}
