//! Shopping Cart State Management
//!
//! The server's composition root builds one [`AppState`] around a cart handle
//! and hands it to every route as axum state.

use super::container::{CartHandle, ShoppingCart};
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the injected cart handle
pub struct AppState {
    /// The cart every handler reads and mutates.
    pub cart: CartHandle,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ShoppingCart::shared())
    }
}

impl AppState {
    /// Creates an AppState around an existing cart handle
    pub fn new(cart: CartHandle) -> Self {
        tracing::info!("Serving cart {}", cart.id());
        Self { cart }
    }
}
