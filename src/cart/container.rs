//! The process-wide shopping cart
//!
//! [`ShoppingCart`] holds an ordered sequence of [`Item`]s. A cart is shared
//! through [`CartHandle`]s; every handle cloned from the same `Arc` observes
//! the same sequence. [`ShoppingCart::instance`] is the lazily initialized
//! access point for the one cart of the process.

use super::models::Item;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use uuid::Uuid;

/// Shared handle to a cart
pub type CartHandle = Arc<ShoppingCart>;

static INSTANCE: OnceLock<CartHandle> = OnceLock::new();

#[derive(Debug)]
pub struct ShoppingCart {
    id: Uuid,
    items: RwLock<Vec<Item>>,
}

impl Default for ShoppingCart {
    fn default() -> Self {
        Self::new()
    }
}

impl ShoppingCart {
    /// Creates an empty, standalone cart.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            items: RwLock::new(Vec::new()),
        }
    }

    /// Creates an empty cart and wraps it in a fresh handle.
    pub fn shared() -> CartHandle {
        Arc::new(Self::new())
    }

    /// Returns the process-wide cart, creating it on the first call.
    ///
    /// Concurrent first calls race on a single initialization; every caller
    /// receives a handle to the instance that won.
    pub fn instance() -> CartHandle {
        INSTANCE
            .get_or_init(|| {
                let cart = Self::shared();
                tracing::debug!("Created process-wide cart {}", cart.id);
                cart
            })
            .clone()
    }

    /// Identifier assigned when the cart was constructed.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Appends `item` to the end of the cart. Duplicate ids are allowed.
    pub fn add_item(&self, item: Item) {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        tracing::debug!("Cart {}: adding {}", self.id, item);
        items.push(item);
    }

    /// Removes every item whose id equals `id` and returns how many were
    /// removed. The remaining items keep their relative order.
    pub fn remove_item_by_id(&self, id: u64) -> usize {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        let before = items.len();
        items.retain(|item| item.id() != id);
        let removed = before - items.len();
        tracing::debug!("Cart {}: removed {} item(s) with id {}", self.id, removed, id);
        removed
    }

    /// Copy of the items at call time, in insertion order.
    pub fn items(&self) -> Vec<Item> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.items.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Whether two handles point at the same cart instance.
pub fn same_instance(a: &CartHandle, b: &CartHandle) -> bool {
    Arc::ptr_eq(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(cart: &ShoppingCart) -> Vec<String> {
        cart.items().iter().map(|i| i.label().to_string()).collect()
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let cart = ShoppingCart::new();
        cart.add_item(Item::new(1, "A", 3000.0));
        cart.add_item(Item::new(2, "B", 2900.0));

        let last = Item::new(3, "C", 2400.0);
        cart.add_item(last.clone());

        assert_eq!(cart.items().last(), Some(&last));
        assert_eq!(labels(&cart), vec!["A", "B", "C"]);
    }

    #[test]
    fn remove_deletes_every_match_and_keeps_order() {
        let cart = ShoppingCart::new();
        cart.add_item(Item::new(1, "A", 1.0));
        cart.add_item(Item::new(2, "B", 2.0));
        cart.add_item(Item::new(3, "C", 3.0));
        cart.add_item(Item::new(2, "B again", 2.5));
        cart.add_item(Item::new(4, "D", 4.0));

        assert_eq!(cart.remove_item_by_id(2), 2);
        assert!(cart.items().iter().all(|i| i.id() != 2));
        assert_eq!(labels(&cart), vec!["A", "C", "D"]);
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let cart = ShoppingCart::new();
        cart.add_item(Item::new(1, "A", 1.0));
        let before = cart.items();

        assert_eq!(cart.remove_item_by_id(42), 0);
        assert_eq!(cart.items(), before);
    }

    #[test]
    fn empty_cart_behaviour() {
        let cart = ShoppingCart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.remove_item_by_id(1), 0);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn handles_observe_each_others_mutations() {
        let first = ShoppingCart::shared();
        let second = Arc::clone(&first);

        first.add_item(Item::new(1, "A", 3000.0));
        second.add_item(Item::new(2, "B", 2900.0));

        assert!(same_instance(&first, &second));
        assert_eq!(first.items(), second.items());
        assert_eq!(first.id(), second.id());
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn separately_built_carts_are_independent() {
        let a = ShoppingCart::shared();
        let b = ShoppingCart::shared();
        a.add_item(Item::new(1, "A", 1.0));

        assert!(!same_instance(&a, &b));
        assert_ne!(a.id(), b.id());
        assert!(b.is_empty());
    }

    #[test]
    fn instance_always_returns_the_same_cart() {
        let first = ShoppingCart::instance();
        let second = ShoppingCart::instance();
        assert!(same_instance(&first, &second));
    }
}
