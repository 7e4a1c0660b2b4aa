//! Shopping List Helpers
//!
//! Small functions shared by the REST and MCP adapters.

use super::models::ShoppingItem;

/// List used when the caller does not name one
pub const DEFAULT_LIST_ID: &str = "default";

/// Returns the provided `list_id`, or [`DEFAULT_LIST_ID`] when it is missing
/// or blank.
pub fn get_or_default_list_id(list_id: Option<String>) -> String {
    match list_id {
        Some(id) if !id.trim().is_empty() => id,
        _ => DEFAULT_LIST_ID.to_string(),
    }
}

/// Produces a human-readable one-line summary for a list of items.
///
/// Example output: `"2x Milk, 1x Bread (bought)"`.
pub fn format_item_summary(items: &[ShoppingItem]) -> String {
    if items.is_empty() {
        return "List is empty.".to_string();
    }
    items
        .iter()
        .map(|i| {
            let mut line = format!("{}x {}", i.quantity, i.name);
            if i.is_purchased {
                line.push_str(" (bought)");
            }
            line
        })
        .collect::<Vec<_>>()
        .join(", ")
}
