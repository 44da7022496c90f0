use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use catalog_products::{CreateProduct, Product};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl CreateProductRequest {
    /// Transport-level checks. The domain re-checks price (`> 0`) on construction.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("name should not be empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("price must be a number not less than 0".to_string());
        }
        Ok(())
    }

    pub fn into_command(self) -> CreateProduct {
        CreateProduct {
            name: self.name,
            price: self.price,
            description: self.description,
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

/// ISO-8601 UTC with millisecond precision, e.g. `2024-01-01T00:00:00.000Z`.
fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<&Product> for ProductResponse {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id().to_string(),
            name: p.name().to_string(),
            price: p.price(),
            description: p.description().to_string(),
            created_at: iso_timestamp(p.created_at()),
            updated_at: iso_timestamp(p.updated_at()),
        }
    }
}
