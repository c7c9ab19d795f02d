//! # CDP Common Library
//!
//! Shared code for CDP municipality adapters including:
//! - Event ingestion models consumed by the downstream pipeline
//! - Bootstrap configuration loading
//! - Logging setup
//! - Static known-persons data

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod static_data;

pub use error::{Error, Result};
pub use static_data::StaticData;
