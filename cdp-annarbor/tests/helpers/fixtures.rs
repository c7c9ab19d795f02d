//! Legistar and Cablecast payload fixtures

use async_trait::async_trait;
use cdp_annarbor::legistar::{EventSource, RawEvent};
use cdp_annarbor::media::{CablecastClient, MediaLocator};
use chrono::{DateTime, Utc};
use cdp_common::config::CablecastConfig;
use serde_json::{json, Value};
use std::sync::Arc;

use super::stub_cablecast::StubResponse;

pub const SAVED_SEARCH_ID: u64 = 1187;
pub const SHOW_ID: u64 = 10571;
pub const VOD_ID: u64 = 501;
pub const VIDEO_URL: &str = "https://reflect-ctn.cablecast.tv/store-1/vod/council/video.mp4";
pub const CAPTION_URL: &str = "https://reflect-ctn.cablecast.tv/store-1/vod/council/captions.vtt";

pub fn media_url(show_id: u64) -> String {
    format!("https://reflect-ctn.cablecast.tv/internetchannel/show/{}", show_id)
}

pub fn show_json(id: u64, title: &str, vods: &[u64]) -> StubResponse {
    StubResponse::Json(json!({
        "show": { "id": id, "title": title, "vods": vods }
    }))
}

pub fn vod_json(id: u64, url: &str) -> StubResponse {
    StubResponse::Json(json!({ "vod": { "id": id, "url": url } }))
}

pub fn search_json(show_ids: &[u64]) -> StubResponse {
    StubResponse::Json(json!({ "savedShowSearch": { "results": show_ids } }))
}

/// Regular City Council meeting on 2021-06-07 with the given agenda items
pub fn council_event(event_id: i64, media: Option<&str>, items: Vec<Value>) -> RawEvent {
    serde_json::from_value(json!({
        "EventId": event_id,
        "EventBodyId": 138,
        "EventBodyName": "City Council",
        "EventDate": "2021-06-07T00:00:00",
        "EventTime": "7:00 PM",
        "EventComment": null,
        "EventMedia": media,
        "EventAgendaFile": "https://a2gov.legistar.com/View.ashx?M=A&ID=1",
        "EventMinutesFile": null,
        "EventItems": items,
    }))
    .unwrap()
}

pub fn event_with(overrides: Value) -> RawEvent {
    let mut base = json!({
        "EventId": 1,
        "EventBodyId": 138,
        "EventBodyName": "City Council",
        "EventDate": "2021-06-07T00:00:00",
        "EventTime": "7:00 PM",
    });
    if let (Some(base_map), Some(extra)) = (base.as_object_mut(), overrides.as_object()) {
        for (k, v) in extra {
            base_map.insert(k.clone(), v.clone());
        }
    }
    serde_json::from_value(base).unwrap()
}

/// Voice-voted resolution whose matter status no pattern recognizes
pub fn voice_vote_item() -> Value {
    json!({
        "EventItemId": 9001,
        "EventItemAgendaSequence": 12,
        "EventItemActionName": "Approved",
        "EventItemAgendaNumber": "DC-1",
        "EventItemTitle": "Resolution to Approve Sidewalk Gap Program",
        "EventItemMatterId": 27001,
        "EventItemMatterFile": "21-0877",
        "EventItemMatterName": "Sidewalk Gap Program",
        "EventItemMatterType": "Resolution",
        "EventItemMatterStatus": "Enacted",
        "EventItemPassedFlagName": "Pass",
        "EventItemVoteInfo": [
            { "VoteId": 1, "VotePersonId": 10, "VotePersonName": "Jane Doe",
              "VoteValueId": null, "VoteValueName": null },
            { "VoteId": 2, "VotePersonId": 11, "VotePersonName": "John Roe",
              "VoteValueId": 16, "VoteValueName": "Absent" }
        ],
        "EventItemMatterAttachments": [
            { "MatterAttachmentId": 3, "MatterAttachmentName": "Staff Memo",
              "MatterAttachmentHyperlink": "https://a2gov.legistar.com/memo.pdf" }
        ]
    })
}

pub fn locator_for(base_url: &str) -> MediaLocator {
    let config = CablecastConfig {
        base_url: base_url.to_string(),
        ..CablecastConfig::default()
    };
    MediaLocator::new(
        Arc::new(CablecastClient::new(&config).unwrap()),
        config.saved_search_id,
        config.max_search_candidates,
    )
}

/// Event source returning a fixed list of events
pub struct FixedEventSource {
    pub events: Vec<RawEvent>,
}

#[async_trait]
impl EventSource for FixedEventSource {
    async fn fetch_events(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> anyhow::Result<Vec<RawEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|e| {
                let held = e.date.and_utc();
                held >= from && held <= to
            })
            .cloned()
            .collect())
    }
}

/// Event source whose upstream is down
pub struct FailingEventSource;

#[async_trait]
impl EventSource for FailingEventSource {
    async fn fetch_events(
        &self,
        _from: DateTime<Utc>,
        _to: DateTime<Utc>,
    ) -> anyhow::Result<Vec<RawEvent>> {
        Err(anyhow::anyhow!("Legistar unavailable"))
    }
}
