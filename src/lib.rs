//! Singleton Cart Library
//!
//! A process-wide shopping cart shared by every caller, served over REST and
//! MCP (Model Context Protocol), plus a small HTTP adapter factory.

// Domain modules
pub mod cart;
pub mod factory;
pub mod mcp;

// Infrastructure
pub mod config;
pub mod demo;
pub mod error;
pub mod router;

pub use error::{CartError, Result};
