#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category.name_empty")]
    NameEmpty,
    #[error("category.not_found")]
    NotFound(i64),
    #[error("category.duplicated")]
    Duplicated,
    /// Products still reference the category.
    #[error("category.in_use")]
    InUse,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
