//! Process-wide access point tests
//!
//! Integration test files run in their own process, so the cart returned by
//! `ShoppingCart::instance()` starts out uninitialized here.

use futures_util::future::join_all;
use singleton_cart::cart::{same_instance, Item, ShoppingCart};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn concurrent_first_access_yields_one_instance() {
    let threads = 16;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                ShoppingCart::instance()
            })
        })
        .collect();

    let carts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let first = &carts[0];
    assert!(carts.iter().all(|cart| same_instance(first, cart)));
    assert!(same_instance(first, &ShoppingCart::instance()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_lose_no_items() {
    let cart = ShoppingCart::shared();

    let tasks = (0..100u64).map(|id| {
        let cart = Arc::clone(&cart);
        tokio::spawn(async move {
            cart.add_item(Item::new(id, format!("item-{id}"), id as f64));
        })
    });

    for result in join_all(tasks).await {
        result.unwrap();
    }

    let mut ids: Vec<u64> = cart.items().iter().map(|i| i.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..100).collect::<Vec<_>>());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_removes_leave_only_survivors() {
    let cart = ShoppingCart::shared();
    for id in 0..50u64 {
        cart.add_item(Item::new(id, "even-or-odd", 1.0));
        cart.add_item(Item::new(id, "duplicate", 2.0));
    }

    let tasks = (0..50u64).filter(|id| id % 2 == 0).map(|id| {
        let cart = Arc::clone(&cart);
        tokio::spawn(async move { cart.remove_item_by_id(id) })
    });

    let removed: usize = join_all(tasks).await.into_iter().map(|r| r.unwrap()).sum();
    assert_eq!(removed, 50);

    let ids: Vec<u64> = cart.items().iter().map(|i| i.id()).collect();
    let expected: Vec<u64> = (0..50u64)
        .filter(|id| id % 2 == 1)
        .flat_map(|id| [id, id])
        .collect();
    assert_eq!(ids, expected);
}
