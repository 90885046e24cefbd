//! Shopping Cart Formatting Helpers

use super::models::Item;

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"#1 A (3000), #3 C (2400)"`. An empty list yields
/// `"(empty)"`.
pub fn format_item_summary(items: &[Item]) -> String {
    if items.is_empty() {
        return "(empty)".to_string();
    }
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
