//! Products domain module.
//!
//! This crate contains the product entity, the repository port the use cases
//! depend on, and the use-case service itself. It performs no IO: storage is
//! reached only through [`ProductRepository`] implementations supplied by callers.

pub mod product;
pub mod repository;
pub mod service;

pub use product::Product;
pub use repository::{ProductRepository, RepositoryError};
pub use service::{CreateProduct, ProductService, ProductServiceError};
