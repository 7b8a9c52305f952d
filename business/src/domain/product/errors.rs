use crate::domain::errors::RepositoryError;

/// Entity a `NotFound` refers to: the targeted product or one of its references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Product,
    Category,
    Supplier,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Product => write!(f, "product"),
            EntityKind::Category => write!(f, "category"),
            EntityKind::Supplier => write!(f, "supplier"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictReason {
    /// A referenced category or supplier vanished between validation and commit.
    DanglingReference,
}

impl std::fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictReason::DanglingReference => write!(f, "dangling_reference"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.invalid_quantity")]
    InvalidQuantity,
    #[error("{entity}.not_found")]
    NotFound { entity: EntityKind, id: i64 },
    #[error("product.{0}")]
    Conflict(ConflictReason),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    pub fn not_found(entity: EntityKind, id: i64) -> Self {
        ProductError::NotFound { entity, id }
    }
}
