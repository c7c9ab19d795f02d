//! Event ingestion models
//!
//! Records handed to the downstream ingestion pipeline. Every adapter builds
//! these fresh per invocation; nothing here is mutated once returned.
//!
//! Optional collections follow the pipeline convention: `None` means "nothing
//! to report", an empty `Vec` is never emitted by the adapters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Decision recorded for a single vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteDecision {
    #[serde(rename = "Approve")]
    Approve,
    #[serde(rename = "Reject")]
    Reject,
    #[serde(rename = "Abstain (Approve)")]
    AbstainApprove,
    #[serde(rename = "Abstain (Reject)")]
    AbstainReject,
    #[serde(rename = "Abstain (Non-Voting)")]
    AbstainNonVoting,
    #[serde(rename = "Absent (Approve)")]
    AbsentApprove,
    #[serde(rename = "Absent (Reject)")]
    AbsentReject,
    #[serde(rename = "Absent (Non-Voting)")]
    AbsentNonVoting,
}

/// Outcome of an agenda item as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventMinutesItemDecision {
    #[serde(rename = "Passed")]
    Passed,
    #[serde(rename = "Failed")]
    Failed,
}

/// Legislative status of a matter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatterStatusDecision {
    #[serde(rename = "Adopted")]
    Adopted,
    #[serde(rename = "Rejected")]
    Rejected,
    #[serde(rename = "In Progress")]
    InProgress,
}

/// Council member or other voting person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub router_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_source_id: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Person {
    /// Active person known only by name and source id
    pub fn new(name: impl Into<String>, external_source_id: Option<String>) -> Self {
        Self {
            name: name.into(),
            is_active: true,
            router_string: None,
            email: None,
            phone: None,
            website: None,
            picture_uri: None,
            external_source_id,
        }
    }
}

/// Legislative body holding the meeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub name: String,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_source_id: Option<String>,
}

/// Legislative item (ordinance, resolution, ...) referenced by an agenda item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matter {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matter_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_status: Option<MatterStatusDecision>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_source_id: Option<String>,
}

/// Agenda-entry-level record of what was discussed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinutesItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_source_id: Option<String>,
}

/// Document attached to an agenda item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportingFile {
    pub name: String,
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_source_id: Option<String>,
}

/// One person's vote on an agenda item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<VoteDecision>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_source_id: Option<String>,
}

impl Vote {
    /// True when the vote carries no person, decision, or source id
    pub fn is_empty(&self) -> bool {
        self.person.is_none()
            && self.decision.is_none()
            && self.external_source_id.as_deref().map_or(true, str::is_empty)
    }
}

/// Normalized agenda item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMinutesItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes_item: Option<MinutesItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matter: Option<Matter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supporting_files: Option<Vec<SupportingFile>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<EventMinutesItemDecision>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<Vec<Vote>>,
}

impl EventMinutesItem {
    /// True when nothing beyond the agenda position is known
    pub fn is_empty(&self) -> bool {
        self.minutes_item.is_none()
            && self.matter.is_none()
            && self.decision.is_none()
            && self.supporting_files.as_ref().map_or(true, Vec::is_empty)
            && self.votes.as_ref().map_or(true, Vec::is_empty)
    }
}

/// Playable media for one meeting, always produced as a complete pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentUris {
    pub video_uri: String,
    pub caption_uri: String,
}

/// One recorded sitting of a meeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Meeting start as an instant; the local zone is resolved by the adapter
    pub session_datetime: DateTime<Utc>,
    pub video_uri: String,
    pub session_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_source_id: Option<String>,
}

/// Complete meeting record handed to the ingestion pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventIngestionModel {
    pub body: Body,
    pub sessions: Vec<Session>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_minutes_items: Option<Vec<EventMinutesItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agenda_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_source_id: Option<String>,
}
