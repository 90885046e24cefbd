//! REST API handlers for shopping cart operations
//!
//! Every handler works on the cart injected through [`SharedState`], so all
//! requests see the same sequence of items.

use super::{models::*, state::SharedState};
use crate::error::CartError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(get_cart))
        .route("/cart/items", post(add_item))
        .route("/cart/items/:id", delete(remove_item))
}

/// Endpoint: GET /cart
/// Returns the current items in insertion order.
async fn get_cart(State(state): State<SharedState>) -> impl IntoResponse {
    Json(CartResponse {
        cart_id: state.cart.id(),
        items: state.cart.items(),
    })
}

/// Endpoint: POST /cart/items
/// Appends one item to the end of the cart.
async fn add_item(
    State(state): State<SharedState>,
    Json(payload): Json<AddItemInput>,
) -> Result<impl IntoResponse, CartError> {
    let item = payload.into_item()?;
    state.cart.add_item(item);

    Ok((
        StatusCode::CREATED,
        Json(CartResponse {
            cart_id: state.cart.id(),
            items: state.cart.items(),
        }),
    ))
}

/// Endpoint: DELETE /cart/items/:id
/// Removes every item with the given id.
async fn remove_item(State(state): State<SharedState>, Path(id): Path<u64>) -> impl IntoResponse {
    let removed = state.cart.remove_item_by_id(id);

    Json(RemoveResponse {
        cart_id: state.cart.id(),
        removed,
        items: state.cart.items(),
    })
}
