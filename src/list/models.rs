//! Shopping List Domain Models
//!
//! This module contains the shopping item itself plus the payloads the REST
//! and MCP surfaces exchange with callers.

use serde::{Deserialize, Serialize};

// =============================================================================
// List Domain Models
// =============================================================================

/// Returns the default quantity (1) for new items
fn default_quantity() -> i32 {
    1
}

/// A single entry on a shopping list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    /// Opaque identifier assigned by the store, never changes
    pub id: String,

    /// Display name of the product
    pub name: String,

    /// How many to buy. Not validated.
    pub quantity: i32,

    /// Free-form notes, e.g. brand or variety
    pub notes: Option<String>,

    /// Set only through the toggle operation
    pub is_purchased: bool,
}

// =============================================================================
// Inputs
// =============================================================================

/// Input for adding an item (REST body and `add_item` tool)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddItemInput {
    pub name: String,

    #[serde(default = "default_quantity")]
    pub quantity: i32,

    #[serde(default)]
    pub notes: Option<String>,

    /// Optional list identifier (MCP only; REST takes it from the path)
    #[serde(default)]
    pub list_id: Option<String>,
}

/// Input for replacing an item's descriptive fields
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateItemInput {
    /// Target item (MCP only; REST takes it from the path)
    #[serde(default)]
    pub id: Option<String>,

    pub name: String,

    /// Required: an update always states the new quantity
    pub quantity: i32,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub list_id: Option<String>,
}

/// Input for tools that address a single item by id
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ItemRefInput {
    pub id: String,

    #[serde(default)]
    pub list_id: Option<String>,
}

/// Input for tools that only name a list
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListRefInput {
    #[serde(default)]
    pub list_id: Option<String>,
}

/// Search input; `q` doubles as the REST query-string parameter
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchInput {
    #[serde(default, alias = "query")]
    pub q: Option<String>,

    #[serde(default)]
    pub list_id: Option<String>,
}

/// New ordering for a whole list
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReorderInput {
    pub ids: Vec<String>,

    #[serde(default)]
    pub list_id: Option<String>,
}

// =============================================================================
// Responses
// =============================================================================

/// Response for `clear_purchased`
#[derive(Debug, Serialize)]
pub struct ClearPurchasedResponse {
    /// Number of items removed
    pub removed: usize,

    /// Items that remain, in order
    pub items: Vec<ShoppingItem>,
}
