#[derive(Debug, thiserror::Error)]
pub enum SupplierError {
    #[error("supplier.name_empty")]
    NameEmpty,
    #[error("supplier.cnpj_empty")]
    CnpjEmpty,
    #[error("supplier.not_found")]
    NotFound(i64),
    #[error("supplier.duplicated_cnpj")]
    DuplicatedCnpj,
    /// Products still reference the supplier.
    #[error("supplier.in_use")]
    InUse,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
