//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart logic, including:
//! - Domain models (Item, inputs, responses)
//! - The shared cart container and its process-wide access point
//! - Formatting helpers
//! - Application state management
//! - REST API handlers

pub mod container;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use container::{same_instance, CartHandle, ShoppingCart};
pub use handlers::routes;
pub use models::Item;
pub use state::{AppState, SharedState};
