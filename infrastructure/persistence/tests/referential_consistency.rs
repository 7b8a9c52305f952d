use std::sync::Arc;

use async_trait::async_trait;

use business::application::category::delete::DeleteCategoryUseCaseImpl;
use business::application::product::committer::ProductCommitter;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::references::ReferenceGate;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::category::errors::CategoryError;
use business::domain::category::model::{Category, NewCategory};
use business::domain::category::repository::CategoryRepository;
use business::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;
use business::domain::product::errors::{ConflictReason, EntityKind, ProductError};
use business::domain::product::patch::ProductPatch;
use business::domain::product::repository::ProductRepository;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::supplier::model::NewSupplier;
use business::domain::supplier::repository::SupplierRepository;
use logger::TracingLogger;
use persistence::memory::InMemoryReferenceStore;

struct Fixture {
    store: Arc<InMemoryReferenceStore>,
    category_id: i64,
    supplier_id: i64,
}

async fn fixture() -> Fixture {
    let store = Arc::new(InMemoryReferenceStore::new());
    let category = CategoryRepository::insert(
        store.as_ref(),
        &NewCategory {
            name: "Tech".to_string(),
        },
    )
    .await
    .unwrap();
    let supplier = SupplierRepository::insert(
        store.as_ref(),
        &NewSupplier {
            name: "Dell".to_string(),
            cnpj: "789".to_string(),
            address: "Rua C".to_string(),
        },
    )
    .await
    .unwrap();

    Fixture {
        store,
        category_id: category.id,
        supplier_id: supplier.id,
    }
}

fn logger() -> Arc<dyn Logger> {
    Arc::new(TracingLogger)
}

fn committer(store: &Arc<InMemoryReferenceStore>) -> ProductCommitter {
    ProductCommitter::new(store.clone(), logger())
}

fn create_use_case(
    store: &Arc<InMemoryReferenceStore>,
    categories: Arc<dyn CategoryRepository>,
) -> CreateProductUseCaseImpl {
    CreateProductUseCaseImpl {
        references: ReferenceGate::new(categories, store.clone()),
        committer: committer(store),
        logger: logger(),
    }
}

fn mouse(category_id: i64, supplier_id: i64) -> CreateProductParams {
    CreateProductParams {
        name: "Mouse".to_string(),
        price: 50.0,
        qtd: 10,
        category_id,
        supplier_id,
    }
}

async fn assert_no_dangling_products(store: &InMemoryReferenceStore) {
    for product in ProductRepository::get_all(store).await.unwrap() {
        assert!(
            CategoryRepository::get_by_id(store, product.category_id)
                .await
                .is_ok(),
            "product {} points at a missing category",
            product.id
        );
        assert!(
            SupplierRepository::get_by_id(store, product.supplier_id)
                .await
                .is_ok(),
            "product {} points at a missing supplier",
            product.id
        );
    }
}

/// Category lookup that reports the category as present, then deletes it
/// before returning, so the following write runs against a vanished row.
struct VanishingCategories {
    store: Arc<InMemoryReferenceStore>,
}

#[async_trait]
impl CategoryRepository for VanishingCategories {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError> {
        CategoryRepository::get_all(self.store.as_ref()).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Category, RepositoryError> {
        let found = CategoryRepository::get_by_id(self.store.as_ref(), id).await?;
        CategoryRepository::delete(self.store.as_ref(), id).await?;
        Ok(found)
    }

    async fn insert(&self, category: &NewCategory) -> Result<Category, RepositoryError> {
        CategoryRepository::insert(self.store.as_ref(), category).await
    }

    async fn update(&self, category: &Category) -> Result<Category, RepositoryError> {
        CategoryRepository::update(self.store.as_ref(), category).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        CategoryRepository::delete(self.store.as_ref(), id).await
    }
}

#[tokio::test]
async fn should_create_update_and_delete_product_end_to_end() {
    let Fixture {
        store,
        category_id,
        supplier_id,
    } = fixture().await;
    let create = create_use_case(&store, store.clone());
    let update = UpdateProductUseCaseImpl {
        repository: store.clone(),
        references: ReferenceGate::new(store.clone(), store.clone()),
        committer: committer(&store),
        logger: logger(),
    };
    let get = GetProductByIdUseCaseImpl {
        repository: store.clone(),
        logger: logger(),
    };
    let delete = DeleteProductUseCaseImpl {
        committer: committer(&store),
        logger: logger(),
    };

    let created = create
        .execute(mouse(category_id, supplier_id))
        .await
        .unwrap();
    assert_eq!(created.name, "Mouse");
    assert_eq!(created.category_id, category_id);

    let updated = update
        .execute(UpdateProductParams {
            id: created.id,
            patch: ProductPatch {
                price: Some(45.0),
                ..ProductPatch::default()
            },
        })
        .await
        .unwrap();
    assert_eq!(updated.price, 45.0);
    assert_eq!(updated.name, "Mouse");
    assert_eq!(updated.qtd, 10);

    let fetched = get
        .execute(GetProductByIdParams { id: created.id })
        .await
        .unwrap();
    assert_eq!(fetched, updated);

    delete
        .execute(DeleteProductParams { id: created.id })
        .await
        .unwrap();
    let again = delete
        .execute(DeleteProductParams { id: created.id })
        .await;
    assert!(matches!(
        again,
        Err(ProductError::NotFound {
            entity: EntityKind::Product,
            ..
        })
    ));
}

#[tokio::test]
async fn should_not_persist_product_with_unknown_category() {
    let Fixture {
        store, supplier_id, ..
    } = fixture().await;
    let create = create_use_case(&store, store.clone());

    let result = create.execute(mouse(999, supplier_id)).await;

    assert!(matches!(
        result,
        Err(ProductError::NotFound {
            entity: EntityKind::Category,
            id: 999
        })
    ));
    assert!(
        ProductRepository::get_all(store.as_ref())
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn should_reject_update_to_unknown_supplier_and_keep_stored_product() {
    let Fixture {
        store,
        category_id,
        supplier_id,
    } = fixture().await;
    let created = create_use_case(&store, store.clone())
        .execute(mouse(category_id, supplier_id))
        .await
        .unwrap();
    let update = UpdateProductUseCaseImpl {
        repository: store.clone(),
        references: ReferenceGate::new(store.clone(), store.clone()),
        committer: committer(&store),
        logger: logger(),
    };

    let result = update
        .execute(UpdateProductParams {
            id: created.id,
            patch: ProductPatch {
                supplier_id: Some(999),
                ..ProductPatch::default()
            },
        })
        .await;

    assert!(matches!(
        result,
        Err(ProductError::NotFound {
            entity: EntityKind::Supplier,
            id: 999
        })
    ));
    let stored = ProductRepository::get_by_id(store.as_ref(), created.id)
        .await
        .unwrap();
    assert_eq!(stored, created);
}

#[tokio::test]
async fn should_report_conflict_when_category_vanishes_after_validation() {
    let Fixture {
        store,
        category_id,
        supplier_id,
    } = fixture().await;
    let vanishing = Arc::new(VanishingCategories {
        store: store.clone(),
    });
    let create = create_use_case(&store, vanishing);

    let result = create.execute(mouse(category_id, supplier_id)).await;

    assert!(matches!(
        result,
        Err(ProductError::Conflict(ConflictReason::DanglingReference))
    ));
    assert!(
        ProductRepository::get_all(store.as_ref())
            .await
            .unwrap()
            .is_empty()
    );
    assert_no_dangling_products(&store).await;
}

#[tokio::test]
async fn should_refuse_to_delete_category_in_use() {
    let Fixture {
        store,
        category_id,
        supplier_id,
    } = fixture().await;
    create_use_case(&store, store.clone())
        .execute(mouse(category_id, supplier_id))
        .await
        .unwrap();
    let delete = DeleteCategoryUseCaseImpl {
        repository: store.clone(),
        logger: logger(),
    };

    let result = delete.execute(DeleteCategoryParams { id: category_id }).await;

    assert!(matches!(result, Err(CategoryError::InUse)));
    assert!(
        CategoryRepository::get_by_id(store.as_ref(), category_id)
            .await
            .is_ok()
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn should_never_leave_dangling_products_under_concurrent_deletes() {
    let Fixture {
        store,
        category_id,
        supplier_id,
    } = fixture().await;
    let create = Arc::new(create_use_case(&store, store.clone()));

    let mut writers = Vec::new();
    for _ in 0..32 {
        let create = create.clone();
        writers.push(tokio::spawn(async move {
            create.execute(mouse(category_id, supplier_id)).await
        }));
    }
    let deleter = {
        let store = store.clone();
        tokio::spawn(async move {
            for _ in 0..32 {
                if CategoryRepository::delete(store.as_ref(), category_id)
                    .await
                    .is_ok()
                {
                    return true;
                }
                tokio::task::yield_now().await;
            }
            false
        })
    };

    for writer in writers {
        match writer.await.unwrap() {
            Ok(product) => assert_eq!(product.category_id, category_id),
            Err(ProductError::NotFound {
                entity: EntityKind::Category,
                ..
            })
            | Err(ProductError::Conflict(ConflictReason::DanglingReference)) => {}
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }
    let category_deleted = deleter.await.unwrap();

    let products = ProductRepository::get_all(store.as_ref()).await.unwrap();
    if category_deleted {
        assert!(products.is_empty());
    }
    assert_no_dangling_products(&store).await;
}
