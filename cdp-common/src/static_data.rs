//! Long-term static data shipped alongside an adapter
//!
//! Loaded once at startup and passed to the adapter; read-only afterwards.

use crate::models::Person;
use crate::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Static municipality data (currently only known persons)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticData {
    /// Known persons keyed by display name
    #[serde(default)]
    pub persons: HashMap<String, Person>,
}

impl StaticData {
    /// Load static data from a JSON file, or empty data when the file is absent
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_empty(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No static data file, using empty static data");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let data: StaticData = serde_json::from_str(&content)?;

        if !data.persons.is_empty() {
            let mut names: Vec<&str> = data.persons.keys().map(String::as_str).collect();
            names.sort_unstable();
            debug!("loaded static data for {}", names.join(", "));
        }

        Ok(data)
    }

    /// Known person by exact display name
    pub fn person(&self, name: &str) -> Option<&Person> {
        self.persons.get(name)
    }
}
