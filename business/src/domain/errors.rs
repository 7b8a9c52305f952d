/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    /// A write referenced a row that does not exist, or a delete would orphan
    /// rows that still reference it.
    #[error("repository.foreign_key_violation")]
    ForeignKeyViolation,
    #[error("repository.database_error")]
    DatabaseError,
}
