//! Translation of `sqlx` failures into `RepositoryError`.
//!
//! | SQLx error | SQLSTATE | RepositoryError |
//! |---|---|---|
//! | Database (foreign key violation) | `23503` | `ForeignKeyViolation` |
//! | Database (unique violation) | `23505` | `Duplicated` |
//! | Database (other) | any | `DatabaseError` |
//! | RowNotFound | n/a | `NotFound` |
//! | anything else | n/a | `DatabaseError` |

use business::domain::errors::RepositoryError;

const FOREIGN_KEY_VIOLATION: &str = "23503";
const UNIQUE_VIOLATION: &str = "23505";

pub fn map_sqlx_error(operation: &str, err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some(FOREIGN_KEY_VIOLATION) => {
                tracing::debug!(operation, message = db_err.message(), "foreign key violation");
                RepositoryError::ForeignKeyViolation
            }
            Some(UNIQUE_VIOLATION) => {
                tracing::debug!(operation, message = db_err.message(), "unique violation");
                RepositoryError::Duplicated
            }
            code => {
                tracing::error!(operation, ?code, message = db_err.message(), "database error");
                RepositoryError::DatabaseError
            }
        },
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        _ => {
            tracing::error!(operation, error = %err, "sqlx error");
            RepositoryError::DatabaseError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::borrow::Cow;
    use std::fmt;

    /// Driver error carrying only a SQLSTATE.
    #[derive(Debug)]
    struct SqlState(&'static str);

    impl fmt::Display for SqlState {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "sqlstate {}", self.0)
        }
    }

    impl std::error::Error for SqlState {}

    impl DatabaseError for SqlState {
        fn message(&self) -> &str {
            "constraint check failed"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.0))
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    fn database_error(code: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(SqlState(code)))
    }

    #[test]
    fn should_map_foreign_key_sqlstate_to_foreign_key_violation() {
        assert_eq!(
            map_sqlx_error("insert_product", database_error("23503")),
            RepositoryError::ForeignKeyViolation
        );
    }

    #[test]
    fn should_map_unique_sqlstate_to_duplicated() {
        assert_eq!(
            map_sqlx_error("insert_category", database_error("23505")),
            RepositoryError::Duplicated
        );
    }

    #[test]
    fn should_map_other_sqlstate_to_database_error() {
        assert_eq!(
            map_sqlx_error("get_all_products", database_error("42P01")),
            RepositoryError::DatabaseError
        );
    }

    #[test]
    fn should_map_row_not_found_to_not_found() {
        assert_eq!(
            map_sqlx_error("get", sqlx::Error::RowNotFound),
            RepositoryError::NotFound
        );
    }

    #[test]
    fn should_map_pool_closed_to_database_error() {
        assert_eq!(
            map_sqlx_error("get", sqlx::Error::PoolClosed),
            RepositoryError::DatabaseError
        );
    }
}
