//! Infrastructure layer: storage adapters and dev scaffolding.

pub mod repository;
pub mod seed;

pub use repository::InMemoryProductRepository;
pub use seed::seed_demo_products;
