//! Adapter entry point
//!
//! Pulls raw events for a time window from the generic scraper's event
//! source and turns each into an `EventIngestionModel`, calling the
//! minutes-item assembler and the media locator per event.

use chrono::{DateTime, Utc};
use cdp_common::config::TomlConfig;
use cdp_common::models::{Body, EventIngestionModel, EventMinutesItem, Session};
use cdp_common::StaticData;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::base::{LegistarBase, PatternBase};
use crate::error::AdapterResult;
use crate::legistar::{EventSource, RawAgendaItem, RawEvent};
use crate::media::{CablecastClient, CatalogApi, MediaLocator};
use crate::minutes::MinutesAssembler;
use crate::municipality::{Patterns, LEGISTAR_CLIENT, MUNICIPALITY_SLUG, TIMEZONE};

/// Ann Arbor Legistar + Cablecast adapter
#[derive(Clone)]
pub struct AnnArborScraper {
    assembler: MinutesAssembler,
    locator: MediaLocator,
}

impl AnnArborScraper {
    /// Adapter over explicit collaborators
    pub fn new(base: Arc<dyn LegistarBase>, locator: MediaLocator) -> Self {
        Self {
            assembler: MinutesAssembler::new(base),
            locator,
        }
    }

    /// Adapter wired from bootstrap configuration
    ///
    /// Loads the static known-persons table once; an absent file yields an
    /// empty table.
    pub fn from_config(config: &TomlConfig) -> AdapterResult<Self> {
        let static_data = StaticData::load_or_empty(&config.static_data_path())?;
        let base = PatternBase::new(Patterns::ann_arbor()?, static_data);

        let catalog: Arc<dyn CatalogApi> = Arc::new(CablecastClient::new(&config.cablecast)?);
        let locator = MediaLocator::new(
            catalog,
            config.cablecast.saved_search_id,
            config.cablecast.max_search_candidates,
        );

        info!(
            client = LEGISTAR_CLIENT,
            municipality = MUNICIPALITY_SLUG,
            timezone = %TIMEZONE,
            catalog = %config.cablecast.base_url,
            "Ann Arbor adapter initialized"
        );

        Ok(Self::new(Arc::new(base), locator))
    }

    /// All events held between `from` and `to` that have media
    pub async fn get_events(
        &self,
        source: &dyn EventSource,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AdapterResult<Vec<EventIngestionModel>> {
        let raw_events = source.fetch_events(from, to).await?;

        let mut events = Vec::with_capacity(raw_events.len());
        for raw_event in &raw_events {
            if let Some(event) = self.get_event(raw_event).await {
                events.push(event);
            }
        }

        info!(
            fetched = raw_events.len(),
            emitted = events.len(),
            %from,
            %to,
            "Gathered Ann Arbor events"
        );
        Ok(events)
    }

    /// Ingestion model for one raw event, `None` when no media was found
    pub async fn get_event(&self, raw_event: &RawEvent) -> Option<EventIngestionModel> {
        let content_uris = self.locator.locate_media(raw_event).await;
        if content_uris.is_empty() {
            info!(event_id = raw_event.event_id, "No media for event, skipping");
            return None;
        }

        let session_datetime = raw_event.start_datetime(TIMEZONE).with_timezone(&Utc);
        let sessions = content_uris
            .into_iter()
            .enumerate()
            .map(|(session_index, uris)| Session {
                session_datetime,
                video_uri: uris.video_uri,
                session_index,
                caption_uri: Some(uris.caption_uri),
                external_source_id: Some(raw_event.event_id.to_string()),
            })
            .collect();

        Some(EventIngestionModel {
            body: Body {
                name: raw_event.body_name.trim().to_string(),
                is_active: true,
                external_source_id: raw_event.body_id.map(|id| id.to_string()),
            },
            sessions,
            event_minutes_items: self.get_event_minutes(raw_event),
            agenda_uri: non_empty(raw_event.agenda_file.as_deref()),
            minutes_uri: non_empty(raw_event.minutes_file.as_deref()),
            external_source_id: Some(raw_event.event_id.to_string()),
        })
    }

    /// Normalized agenda items; a malformed raw item is skipped on its own
    pub fn get_event_minutes(&self, raw_event: &RawEvent) -> Option<Vec<EventMinutesItem>> {
        let items: Vec<EventMinutesItem> = raw_event
            .items
            .iter()
            .filter_map(|value| match RawAgendaItem::from_value(value) {
                Ok(item) => self.assembler.assemble(&item),
                Err(e) => {
                    warn!(
                        event_id = raw_event.event_id,
                        error = %e,
                        "Skipping malformed agenda item"
                    );
                    None
                }
            })
            .collect();

        debug!(
            event_id = raw_event.event_id,
            raw = raw_event.items.len(),
            kept = items.len(),
            "Assembled minutes items"
        );
        Some(items).filter(|i| !i.is_empty())
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
