//! Catalog product type.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// A purchasable product in the catalog.
///
/// Products are immutable and defined once at process start; the catalog is
/// the full ordered set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Image URI for display.
    pub image: String,
    pub category: String,
    pub description: String,
}
