//! Meeting video and caption lookup

pub mod cablecast_client;
pub mod locator;

pub use cablecast_client::{CablecastClient, CatalogApi, CatalogError, Show, Vod};
pub use locator::MediaLocator;
