use chrono::{DateTime, Utc};

use catalog_core::{DomainError, DomainResult};

/// Entity: Product.
///
/// Fields are private and there are no setters, so a `Product` that exists has
/// passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a validated product.
    ///
    /// Rejects a name that is empty after trimming and any price that is not
    /// strictly positive (NaN included). The name is stored as given.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }

        // `!(price > 0.0)` also catches NaN.
        if !(price > 0.0) {
            return Err(DomainError::validation("product price must be positive"));
        }

        Ok(Self {
            id: id.into(),
            name,
            price,
            description: description.into(),
            created_at,
            updated_at,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Price after applying a percentage discount in `[0, 100]`.
    pub fn calculate_discounted_price(&self, percentage: f64) -> DomainResult<f64> {
        if !(0.0..=100.0).contains(&percentage) {
            return Err(DomainError::validation(
                "discount percentage must be between 0 and 100",
            ));
        }
        Ok(self.price * (1.0 - percentage / 100.0))
    }
}
