//! netsearch core — error type and client configuration shared by all crates.

pub mod config;
pub mod error;

pub use config::{ClientConfig, QueryDefaults};
pub use error::{Error, Result};
