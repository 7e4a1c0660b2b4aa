//! Shopping List Domain Module
//!
//! This module contains all shopping list business logic, including:
//! - Domain models (ShoppingItem, inputs, responses)
//! - The in-memory store and its operations
//! - Application state holding the named lists
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::ShoppingItem;
pub use state::{AppState, SharedState};
pub use store::ShoppingListStore;
