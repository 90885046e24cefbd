//! Shopping Cart Domain Models
//!
//! This module contains the cart item record and the request/response shapes
//! used by the REST and MCP surfaces.

use crate::error::{CartError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// An immutable item held by the shopping cart.
///
/// Fields are private so an item cannot change once it has been built; use
/// the getters to read them.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Item {
    id: u64,
    label: String,
    cost: f64,
}

impl Item {
    /// Builds an item without any validation.
    pub fn new(id: u64, label: impl Into<String>, cost: f64) -> Self {
        Self {
            id,
            label: label.into(),
            cost,
        }
    }

    /// Builds an item, rejecting a negative or non-finite cost.
    pub fn try_new(id: u64, label: impl Into<String>, cost: f64) -> Result<Self> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(CartError::InvalidCost(cost));
        }
        Ok(Self::new(id, label, cost))
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({})", self.id, self.label, self.cost)
    }
}

/// Input for adding an item (REST body and `add_item` tool arguments)
#[derive(Debug, Deserialize)]
pub struct AddItemInput {
    /// Caller-assigned identifier
    pub id: u64,

    /// Display label of the item
    pub label: String,

    /// Cost of the item
    pub cost: f64,
}

impl AddItemInput {
    /// Converts the input into a validated [`Item`].
    pub fn into_item(self) -> Result<Item> {
        Item::try_new(self.id, self.label, self.cost)
    }
}

/// Input for the remove_item tool
#[derive(Debug, Deserialize)]
pub struct RemoveItemInput {
    /// Every item with this id is removed
    pub id: u64,
}

/// Snapshot of the cart returned by read and add operations
#[derive(Debug, Serialize)]
pub struct CartResponse {
    /// Identifier of the cart instance
    #[serde(rename = "cartId")]
    pub cart_id: Uuid,

    /// Items in insertion order
    pub items: Vec<Item>,
}

/// Response for remove operations
#[derive(Debug, Serialize)]
pub struct RemoveResponse {
    /// Identifier of the cart instance
    #[serde(rename = "cartId")]
    pub cart_id: Uuid,

    /// Number of items removed
    pub removed: usize,

    /// Items remaining, in insertion order
    pub items: Vec<Item>,
}
