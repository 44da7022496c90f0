//! Product use cases.

use std::sync::Arc;

use thiserror::Error;

use catalog_core::{Clock, DomainError, IdGenerator, SystemClock, UuidGenerator};

use crate::product::Product;
use crate::repository::{ProductRepository, RepositoryError};

/// Command: CreateProduct.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
}

/// Error surfaced by [`ProductService`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Orchestrates product lookups and creation over a [`ProductRepository`].
pub struct ProductService<R> {
    repository: R,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R, clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            repository,
            clock,
            ids,
        }
    }

    /// Wall clock time and random UUIDs.
    pub fn with_system_defaults(repository: R) -> Self {
        Self::new(repository, Arc::new(SystemClock), Arc::new(UuidGenerator))
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn get_product_by_id(&self, id: &str) -> Result<Product, ProductServiceError> {
        tracing::debug!(product_id = id, "fetching product by id");
        if id.trim().is_empty() {
            return Err(DomainError::invalid_input("product id cannot be empty").into());
        }

        match self.repository.find_by_id(id)? {
            Some(product) => Ok(product),
            None => {
                tracing::debug!(product_id = id, "product not found");
                Err(DomainError::not_found().into())
            }
        }
    }

    pub fn get_all_products(&self) -> Result<Vec<Product>, ProductServiceError> {
        tracing::debug!("fetching all products");
        Ok(self.repository.find_all()?)
    }

    pub fn create_product(&self, cmd: CreateProduct) -> Result<Product, ProductServiceError> {
        let id = self.ids.next_id();
        let now = self.clock.now();

        let product = Product::new(id, cmd.name, cmd.price, cmd.description, now, now)?;
        self.repository.save(product.clone())?;

        tracing::info!(product_id = product.id(), "product created");
        Ok(product)
    }
}
