//! Shopping List Library
//!
//! This library provides an in-memory shopping list store together with
//! thin REST and MCP (Model Context Protocol) surfaces over it.

// Domain modules
pub mod list;
pub mod mcp;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
