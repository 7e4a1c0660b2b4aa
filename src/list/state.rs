//! Shopping List State Management
//!
//! This module holds every named shopping list served by the application.

use super::{models::ShoppingItem, store::ShoppingListStore};
use dashmap::DashMap;
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the shopping lists
pub struct AppState {
    /// In-memory stores keyed by list id.
    /// A store is only touched while its map entry guard is held, so each
    /// list sees one operation at a time.
    pub lists: DashMap<String, ShoppingListStore>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates an AppState with no lists
    pub fn new() -> Self {
        Self {
            lists: DashMap::new(),
        }
    }

    /// Runs `f` against an existing list. Returns `None` if the list has
    /// never been written to.
    pub fn read_list<R>(
        &self,
        list_id: &str,
        f: impl FnOnce(&ShoppingListStore) -> R,
    ) -> Option<R> {
        self.lists.get(list_id).map(|list| f(&list))
    }

    /// Runs `f` against a list, creating it empty on first use.
    pub fn write_list<R>(
        &self,
        list_id: &str,
        f: impl FnOnce(&mut ShoppingListStore) -> R,
    ) -> R {
        let mut list = self.lists.entry(list_id.to_string()).or_default();
        f(&mut list)
    }

    /// Runs `f` against an existing list without creating it. Returns `None`
    /// if the list is unknown.
    pub fn modify_list<R>(
        &self,
        list_id: &str,
        f: impl FnOnce(&mut ShoppingListStore) -> R,
    ) -> Option<R> {
        self.lists.get_mut(list_id).map(|mut list| f(&mut list))
    }

    /// Runs `f` against an existing list, or against a throwaway empty store
    /// when the list is unknown. Never creates a list.
    pub fn modify_list_or_empty<R>(
        &self,
        list_id: &str,
        f: impl FnOnce(&mut ShoppingListStore) -> R,
    ) -> R {
        match self.lists.get_mut(list_id) {
            Some(mut list) => f(&mut list),
            None => f(&mut ShoppingListStore::new()),
        }
    }

    /// Copy of a list's items in order; empty for unknown lists.
    pub fn items(&self, list_id: &str) -> Vec<ShoppingItem> {
        self.read_list(list_id, |list| list.get_all().to_vec())
            .unwrap_or_default()
    }
}
