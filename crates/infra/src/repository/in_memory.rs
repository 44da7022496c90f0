use std::collections::HashMap;
use std::sync::RwLock;

use catalog_products::{Product, ProductRepository, RepositoryError};

/// In-memory product store for dev/tests.
///
/// Contents live only as long as the process. `find_all` returns products
/// ordered by `created_at`, ties broken by id, so listings are stable across
/// calls.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<HashMap<String, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::Storage("lock poisoned".to_string())
}

impl ProductRepository for InMemoryProductRepository {
    fn find_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let found = map.get(id).cloned();
        tracing::debug!(product_id = id, found = found.is_some(), "repository lookup");
        Ok(found)
    }

    fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let mut products: Vec<Product> = map.values().cloned().collect();
        products.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(products)
    }

    fn save(&self, product: Product) -> Result<(), RepositoryError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        tracing::debug!(product_id = product.id(), "repository save");
        map.insert(product.id().to_string(), product);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn t(offset_secs: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(offset_secs)
    }

    fn product(id: &str, name: &str, at: DateTime<Utc>) -> Product {
        Product::new(id, name, 10.0, "", at, at).unwrap()
    }

    #[test]
    fn fresh_store_is_empty() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.is_empty());
        assert!(repo.find_all().unwrap().is_empty());
        assert_eq!(repo.find_by_id("missing").unwrap(), None);
    }

    #[test]
    fn save_then_find_by_exact_id() {
        let repo = InMemoryProductRepository::new();
        let p = product("abc", "Widget", t(0));
        repo.save(p.clone()).unwrap();

        assert_eq!(repo.find_by_id("abc").unwrap(), Some(p));
        assert_eq!(repo.find_by_id("ABC").unwrap(), None);
        assert_eq!(repo.find_by_id("abc ").unwrap(), None);
    }

    #[test]
    fn save_overwrites_existing_id() {
        let repo = InMemoryProductRepository::new();
        repo.save(product("abc", "Widget", t(0))).unwrap();
        repo.save(product("abc", "Gadget", t(5))).unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find_by_id("abc").unwrap().unwrap().name(), "Gadget");
    }

    #[test]
    fn find_all_orders_by_creation_then_id() {
        let repo = InMemoryProductRepository::new();
        repo.save(product("c", "Third", t(20))).unwrap();
        repo.save(product("b", "Second-b", t(10))).unwrap();
        repo.save(product("a", "Second-a", t(10))).unwrap();
        repo.save(product("z", "First", t(0))).unwrap();

        let ids: Vec<String> = repo
            .find_all()
            .unwrap()
            .iter()
            .map(|p| p.id().to_string())
            .collect();
        assert_eq!(ids, vec!["z", "a", "b", "c"]);
        assert_eq!(repo.find_all().unwrap(), repo.find_all().unwrap());
    }

    #[test]
    fn concurrent_saves_are_all_visible() {
        let repo = Arc::new(InMemoryProductRepository::new());
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let repo = Arc::clone(&repo);
                thread::spawn(move || {
                    for i in 0..50 {
                        let id = format!("w{worker}-{i}");
                        repo.save(product(&id, "Widget", t(i))).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(repo.len(), 400);
        assert_eq!(repo.find_all().unwrap().len(), 400);
    }
}
