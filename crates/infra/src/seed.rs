//! Demo catalog data.
//!
//! Opt-in scaffolding for local runs; the service itself never seeds.

use catalog_core::{Clock, IdGenerator};
use catalog_products::{Product, ProductRepository, ProductServiceError};

const DEMO_PRODUCTS: &[(&str, f64, &str)] = &[
    ("Product 1", 100.0, "Description for product 1"),
    ("Product 2", 200.0, "Description for product 2"),
];

/// Insert the two demo products, each with a fresh id and the current time.
pub fn seed_demo_products<R>(
    repository: &R,
    clock: &dyn Clock,
    ids: &dyn IdGenerator,
) -> Result<Vec<Product>, ProductServiceError>
where
    R: ProductRepository + ?Sized,
{
    let mut seeded = Vec::with_capacity(DEMO_PRODUCTS.len());
    for (name, price, description) in DEMO_PRODUCTS {
        let now = clock.now();
        let product = Product::new(ids.next_id(), *name, *price, *description, now, now)?;
        repository.save(product.clone())?;
        seeded.push(product);
    }

    tracing::info!(count = seeded.len(), "seeded demo products");
    Ok(seeded)
}
