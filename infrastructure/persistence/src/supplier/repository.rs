use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::supplier::model::{NewSupplier, Supplier};
use business::domain::supplier::repository::SupplierRepository;

use super::entity::SupplierEntity;
use crate::errors::map_sqlx_error;

pub struct SupplierRepositoryPostgres {
    pool: PgPool,
}

impl SupplierRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SupplierRepository for SupplierRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Supplier>, RepositoryError> {
        let entities = sqlx::query_as::<_, SupplierEntity>(
            "SELECT id, name, cnpj, address FROM suppliers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_all_suppliers", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Supplier, RepositoryError> {
        let entity = sqlx::query_as::<_, SupplierEntity>(
            "SELECT id, name, cnpj, address FROM suppliers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_supplier", e))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, supplier: &NewSupplier) -> Result<Supplier, RepositoryError> {
        let entity = sqlx::query_as::<_, SupplierEntity>(
            r#"INSERT INTO suppliers (name, cnpj, address)
            VALUES ($1, $2, $3)
            RETURNING id, name, cnpj, address"#,
        )
        .bind(&supplier.name)
        .bind(&supplier.cnpj)
        .bind(&supplier.address)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert_supplier", e))?;

        Ok(entity.into_domain())
    }

    async fn update(&self, supplier: &Supplier) -> Result<Supplier, RepositoryError> {
        let entity = sqlx::query_as::<_, SupplierEntity>(
            r#"UPDATE suppliers SET name = $2, cnpj = $3, address = $4
            WHERE id = $1
            RETURNING id, name, cnpj, address"#,
        )
        .bind(supplier.id)
        .bind(&supplier.name)
        .bind(&supplier.cnpj)
        .bind(&supplier.address)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_supplier", e))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_supplier", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
