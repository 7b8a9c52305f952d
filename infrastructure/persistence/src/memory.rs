//! In-memory reference store.
//!
//! Intended for tests/dev. Enforces the same rules as the PostgreSQL schema:
//! unique category names, unique supplier CNPJs, and restricting foreign keys
//! from products to categories and suppliers. A single lock covers every table,
//! so the reference check and the write of one call are atomic.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use business::domain::category::model::{Category, NewCategory};
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::supplier::model::{NewSupplier, Supplier};
use business::domain::supplier::repository::SupplierRepository;

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    suppliers: BTreeMap<i64, Supplier>,
    products: BTreeMap<i64, Product>,
    category_seq: i64,
    supplier_seq: i64,
    product_seq: i64,
}

impl Tables {
    fn check_references(&self, category_id: i64, supplier_id: i64) -> Result<(), RepositoryError> {
        if !self.categories.contains_key(&category_id)
            || !self.suppliers.contains_key(&supplier_id)
        {
            return Err(RepositoryError::ForeignKeyViolation);
        }
        Ok(())
    }

    fn category_name_taken(&self, name: &str, except: Option<i64>) -> bool {
        self.categories
            .values()
            .any(|c| c.name == name && Some(c.id) != except)
    }

    fn cnpj_taken(&self, cnpj: &str, except: Option<i64>) -> bool {
        self.suppliers
            .values()
            .any(|s| s.cnpj == cnpj && Some(s.id) != except)
    }
}

fn next_id(seq: &mut i64) -> i64 {
    *seq += 1;
    *seq
}

#[derive(Debug, Default)]
pub struct InMemoryReferenceStore {
    tables: RwLock<Tables>,
}

impl InMemoryReferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, RepositoryError> {
        self.tables.read().map_err(|_| {
            tracing::error!("in-memory store lock poisoned");
            RepositoryError::DatabaseError
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, RepositoryError> {
        self.tables.write().map_err(|_| {
            tracing::error!("in-memory store lock poisoned");
            RepositoryError::DatabaseError
        })
    }
}

#[async_trait]
impl CategoryRepository for InMemoryReferenceStore {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Category, RepositoryError> {
        self.read()?
            .categories
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, category: &NewCategory) -> Result<Category, RepositoryError> {
        let mut tables = self.write()?;
        if tables.category_name_taken(&category.name, None) {
            return Err(RepositoryError::Duplicated);
        }

        let stored = Category {
            id: next_id(&mut tables.category_seq),
            name: category.name.clone(),
        };
        tables.categories.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, category: &Category) -> Result<Category, RepositoryError> {
        let mut tables = self.write()?;
        if !tables.categories.contains_key(&category.id) {
            return Err(RepositoryError::NotFound);
        }
        if tables.category_name_taken(&category.name, Some(category.id)) {
            return Err(RepositoryError::Duplicated);
        }

        tables.categories.insert(category.id, category.clone());
        Ok(category.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tables = self.write()?;
        if !tables.categories.contains_key(&id) {
            return Err(RepositoryError::NotFound);
        }
        if tables.products.values().any(|p| p.category_id == id) {
            return Err(RepositoryError::ForeignKeyViolation);
        }

        tables.categories.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl SupplierRepository for InMemoryReferenceStore {
    async fn get_all(&self) -> Result<Vec<Supplier>, RepositoryError> {
        Ok(self.read()?.suppliers.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Supplier, RepositoryError> {
        self.read()?
            .suppliers
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, supplier: &NewSupplier) -> Result<Supplier, RepositoryError> {
        let mut tables = self.write()?;
        if tables.cnpj_taken(&supplier.cnpj, None) {
            return Err(RepositoryError::Duplicated);
        }

        let stored = Supplier {
            id: next_id(&mut tables.supplier_seq),
            name: supplier.name.clone(),
            cnpj: supplier.cnpj.clone(),
            address: supplier.address.clone(),
        };
        tables.suppliers.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, supplier: &Supplier) -> Result<Supplier, RepositoryError> {
        let mut tables = self.write()?;
        if !tables.suppliers.contains_key(&supplier.id) {
            return Err(RepositoryError::NotFound);
        }
        if tables.cnpj_taken(&supplier.cnpj, Some(supplier.id)) {
            return Err(RepositoryError::Duplicated);
        }

        tables.suppliers.insert(supplier.id, supplier.clone());
        Ok(supplier.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tables = self.write()?;
        if !tables.suppliers.contains_key(&id) {
            return Err(RepositoryError::NotFound);
        }
        if tables.products.values().any(|p| p.supplier_id == id) {
            return Err(RepositoryError::ForeignKeyViolation);
        }

        tables.suppliers.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryReferenceStore {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.read()?.products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        self.read()?
            .products
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut tables = self.write()?;
        tables.check_references(product.category_id, product.supplier_id)?;

        let stored = product.clone().into_product(next_id(&mut tables.product_seq));
        tables.products.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut tables = self.write()?;
        if !tables.products.contains_key(&product.id) {
            return Err(RepositoryError::NotFound);
        }
        tables.check_references(product.category_id, product.supplier_id)?;

        tables.products.insert(product.id, product.clone());
        Ok(product.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.write()?
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
