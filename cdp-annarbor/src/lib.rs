//! cdp-annarbor - Ann Arbor municipality adapter
//!
//! Maps the city's Legistar civic-records data and Cablecast video catalog
//! into the shared CDP event ingestion models.
//!
//! Components:
//! - `normalizer`: minutes-item names
//! - `votes`: per-person vote decisions, including voice votes
//! - `minutes`: agenda item assembly and matter-status fix-up
//! - `media`: video and caption URL lookup chain
//! - `scraper`: time-bounded entry point over an injected event source

pub mod base;
pub mod error;
pub mod legistar;
pub mod media;
pub mod minutes;
pub mod municipality;
pub mod normalizer;
pub mod scraper;
pub mod votes;

pub use crate::error::{AdapterError, AdapterResult};
pub use crate::scraper::AnnArborScraper;

use chrono::{DateTime, Utc};
use cdp_common::config::TomlConfig;
use cdp_common::models::EventIngestionModel;

use crate::legistar::EventSource;
use crate::municipality::CONFIG_ENV_VAR;

/// Configuration directory name under the user config dir
const APP_NAME: &str = "cdp-annarbor";

/// All events held between `from` and `to`
///
/// Resolves bootstrap configuration (`CDP_ANNARBOR_CONFIG`, then the user
/// config dir, then defaults) and runs a freshly built adapter.
pub async fn get_events(
    source: &dyn EventSource,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> AdapterResult<Vec<EventIngestionModel>> {
    let config = TomlConfig::resolve(None, CONFIG_ENV_VAR, APP_NAME)?;
    AnnArborScraper::from_config(&config)?
        .get_events(source, from, to)
        .await
}
