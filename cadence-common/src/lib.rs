//! # Cadence Common Library
//!
//! Shared code for Cadence services:
//! - Common error types
//! - Configuration loading (ENV → TOML resolution)
//! - Event types (CadenceEvent enum) and the broadcast EventBus
//! - Live-meeting wire event names

pub mod config;
pub mod error;
pub mod events;

pub use error::{Error, Result};
