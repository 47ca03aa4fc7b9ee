//! Product entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A product listed by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Unique product identifier, assigned by the store.
    pub id: Uuid,
    /// Product title.
    pub title: String,
    /// Non-negative price.
    pub price: f64,
    /// ID of the owning user. Not enforced as a foreign key.
    pub owner_id: Uuid,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProduct {
    /// Product title.
    pub title: String,
    /// Non-negative price.
    pub price: f64,
    /// ID of the owning user.
    pub owner_id: Uuid,
}

/// Identity of a product's owner, attached on listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSummary {
    /// Owner user ID.
    pub id: Uuid,
    /// Owner email.
    pub email: String,
}

/// A product joined with its owner.
///
/// `owner` is `None` when `owner_id` does not resolve to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductWithOwner {
    /// The product row.
    #[serde(flatten)]
    pub product: Product,
    /// Owner identity.
    pub owner: Option<OwnerSummary>,
}
