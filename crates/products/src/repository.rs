//! Product repository port.

use std::sync::Arc;

use thiserror::Error;

use crate::product::Product;

/// Failure inside a repository backend (lock poisoning, IO, ...).
///
/// A missing record is not an error: lookups return `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Keyed product storage used by the use-case layer.
pub trait ProductRepository: Send + Sync {
    /// Exact-match lookup by id.
    fn find_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError>;

    /// Every stored product. Ordering is defined by the implementation.
    fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Upsert by id: insert when absent, overwrite when present.
    fn save(&self, product: Product) -> Result<(), RepositoryError>;
}

impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    fn find_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        (**self).find_all()
    }

    fn save(&self, product: Product) -> Result<(), RepositoryError> {
        (**self).save(product)
    }
}
