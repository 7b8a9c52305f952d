use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;
use crate::errors::map_sqlx_error;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn begin(&self) -> Result<Transaction<'static, Postgres>, RepositoryError> {
        self.pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("begin_transaction", e))
    }
}

/// Commits `tx` when the statement produced a row, rolls it back otherwise.
///
/// The foreign keys on `category_id`/`supplier_id` are checked by the statement
/// (or at commit for deferred constraints); either way a violation ends up here
/// as `ForeignKeyViolation` and nothing stays written.
async fn settle(
    tx: Transaction<'static, Postgres>,
    outcome: Result<Option<ProductEntity>, sqlx::Error>,
    operation: &str,
) -> Result<Product, RepositoryError> {
    let cause = match outcome {
        Ok(Some(entity)) => {
            tx.commit()
                .await
                .map_err(|e| map_sqlx_error("commit_transaction", e))?;
            return Ok(entity.into_domain());
        }
        Ok(None) => RepositoryError::NotFound,
        Err(err) => map_sqlx_error(operation, err),
    };

    Err(after_rollback(tx.rollback().await, cause, operation))
}

/// The statement's failure is what the caller sees, even when the rollback
/// fails too; the server drops an abandoned transaction on its own.
fn after_rollback(
    rollback: Result<(), sqlx::Error>,
    cause: RepositoryError,
    operation: &str,
) -> RepositoryError {
    if let Err(e) = rollback {
        tracing::error!(operation, error = %e, ?cause, "rollback failed");
    }
    cause
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, qtd, category_id, supplier_id FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_all_products", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, qtd, category_id, supplier_id FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_product", e))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut tx = self.begin().await?;

        let outcome = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO products (name, price, qtd, category_id, supplier_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, price, qtd, category_id, supplier_id"#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.qtd)
        .bind(product.category_id)
        .bind(product.supplier_id)
        .fetch_one(&mut *tx)
        .await
        .map(Some);

        settle(tx, outcome, "insert_product").await
    }

    async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut tx = self.begin().await?;

        let outcome = sqlx::query_as::<_, ProductEntity>(
            r#"UPDATE products SET
                name = $2,
                price = $3,
                qtd = $4,
                category_id = $5,
                supplier_id = $6
            WHERE id = $1
            RETURNING id, name, price, qtd, category_id, supplier_id"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.qtd)
        .bind(product.category_id)
        .bind(product.supplier_id)
        .fetch_optional(&mut *tx)
        .await;

        settle(tx, outcome, "update_product").await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_product", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
