use std::sync::Arc;

use catalog_core::{SystemClock, UuidGenerator};
use catalog_infra::{seed_demo_products, InMemoryProductRepository};
use catalog_products::{ProductRepository, ProductService, ProductServiceError};

use crate::config::AppConfig;

pub type SharedRepository = Arc<dyn ProductRepository>;

/// Application services shared by all handlers.
pub struct AppServices {
    pub products: ProductService<SharedRepository>,
}

impl AppServices {
    pub fn new(products: ProductService<SharedRepository>) -> Self {
        Self { products }
    }
}

/// Wire the in-memory repository and the product use cases.
pub fn build_services(config: &AppConfig) -> Result<AppServices, ProductServiceError> {
    let repository: SharedRepository = Arc::new(InMemoryProductRepository::new());

    if config.seed_demo {
        seed_demo_products(repository.as_ref(), &SystemClock, &UuidGenerator)?;
    }

    Ok(AppServices::new(ProductService::with_system_defaults(
        repository,
    )))
}
