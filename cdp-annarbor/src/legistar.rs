//! Raw Legistar records
//!
//! Field names mirror the Legistar Web API. Nullable fields are `Option`;
//! structural fields (ids, lists) are required and fail deserialization of
//! the single record they belong to.

use async_trait::async_trait;
use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AdapterResult;

/// Legistar Event with its agenda items attached
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "EventId")]
    pub event_id: i64,
    #[serde(rename = "EventBodyId", default)]
    pub body_id: Option<i64>,
    #[serde(rename = "EventBodyName")]
    pub body_name: String,
    /// Meeting date, midnight local time (e.g. `2021-06-07T00:00:00`)
    #[serde(rename = "EventDate")]
    pub date: NaiveDateTime,
    /// Start time as displayed (e.g. `7:00 PM`)
    #[serde(rename = "EventTime", default)]
    pub time: Option<String>,
    #[serde(rename = "EventComment", default)]
    pub comment: Option<String>,
    /// Link to the show page on the video catalog, if the clerk added one
    #[serde(rename = "EventMedia", default)]
    pub media: Option<String>,
    #[serde(rename = "EventAgendaFile", default)]
    pub agenda_file: Option<String>,
    #[serde(rename = "EventMinutesFile", default)]
    pub minutes_file: Option<String>,
    /// Agenda items, kept raw so one malformed item cannot sink the event
    #[serde(rename = "EventItems", default)]
    pub items: Vec<Value>,
}

impl RawEvent {
    /// Local wall-clock start: event date combined with the displayed time
    ///
    /// Falls back to the bare date when the time is missing or unparsable.
    pub fn local_start(&self) -> NaiveDateTime {
        self.time
            .as_deref()
            .and_then(|t| NaiveTime::parse_from_str(t.trim(), "%I:%M %p").ok())
            .map(|t| self.date.date().and_time(t))
            .unwrap_or(self.date)
    }

    /// Meeting start localized to the municipality's zone
    ///
    /// An ambiguous fall-back time resolves to its earlier instant. A time in
    /// the spring-forward gap moves one hour later.
    pub fn start_datetime(&self, tz: Tz) -> DateTime<Tz> {
        let local = self.local_start();
        match tz.from_local_datetime(&local) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(earliest, _) => earliest,
            LocalResult::None => tz
                .from_local_datetime(&(local + Duration::hours(1)))
                .earliest()
                .unwrap_or_else(|| tz.from_utc_datetime(&local)),
        }
    }
}

/// Legistar EventItem (one agenda entry)
#[derive(Debug, Clone, Deserialize)]
pub struct RawAgendaItem {
    #[serde(rename = "EventItemId")]
    pub id: i64,
    #[serde(rename = "EventItemAgendaSequence", default)]
    pub index: Option<i64>,
    #[serde(rename = "EventItemActionName", default)]
    pub action_name: Option<String>,
    #[serde(rename = "EventItemAgendaNumber", default)]
    pub agenda_number: Option<String>,
    #[serde(rename = "EventItemTitle", default)]
    pub title: Option<String>,
    #[serde(rename = "EventItemMatterId", default)]
    pub matter_id: Option<i64>,
    #[serde(rename = "EventItemMatterFile", default)]
    pub matter_file: Option<String>,
    #[serde(rename = "EventItemMatterName", default)]
    pub matter_name: Option<String>,
    #[serde(rename = "EventItemMatterType", default)]
    pub matter_type: Option<String>,
    #[serde(rename = "EventItemMatterStatus", default)]
    pub matter_status: Option<String>,
    #[serde(rename = "EventItemPassedFlagName", default)]
    pub passed_flag_name: Option<String>,
    #[serde(rename = "EventItemVoteInfo", default)]
    pub votes: Vec<RawVote>,
    #[serde(rename = "EventItemMatterAttachments", default)]
    pub attachments: Vec<RawAttachment>,
}

impl RawAgendaItem {
    /// Read one raw agenda item; failure is fatal to that item only
    pub fn from_value(value: &Value) -> AdapterResult<Self> {
        Ok(Self::deserialize(value)?)
    }

    /// True when Legistar reported a non-empty matter status
    pub fn has_matter_status(&self) -> bool {
        self.matter_status.as_deref().map_or(false, |s| !s.is_empty())
    }
}

/// Legistar Vote
#[derive(Debug, Clone, Deserialize)]
pub struct RawVote {
    #[serde(rename = "VoteId")]
    pub id: i64,
    #[serde(rename = "VotePersonId", default)]
    pub person_id: Option<i64>,
    #[serde(rename = "VotePersonName", default)]
    pub person_name: Option<String>,
    #[serde(rename = "VoteValueId", default)]
    pub value_id: Option<i64>,
    #[serde(rename = "VoteValueName", default)]
    pub value_name: Option<String>,
}

impl RawVote {
    /// Voice vote: no individual choice was recorded
    pub fn is_unrecorded(&self) -> bool {
        self.value_name.is_none() && self.value_id.is_none()
    }
}

/// Legistar MatterAttachment
#[derive(Debug, Clone, Deserialize)]
pub struct RawAttachment {
    #[serde(rename = "MatterAttachmentId", default)]
    pub id: Option<i64>,
    #[serde(rename = "MatterAttachmentName", default)]
    pub name: Option<String>,
    #[serde(rename = "MatterAttachmentHyperlink", default)]
    pub hyperlink: Option<String>,
}

/// Time-bounded raw event fetch, supplied by the generic Legistar scraper
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Events (with agenda items) held between `from` and `to`
    async fn fetch_events(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> anyhow::Result<Vec<RawEvent>>;
}
