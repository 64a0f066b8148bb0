//! Shared types and utilities for the tablon client.

pub mod category;
pub mod error;
pub mod models;

pub use category::*;
pub use error::*;
pub use models::*;
