//! Generic Legistar scraper capabilities
//!
//! The assembler only depends on `LegistarBase`; `PatternBase` is the
//! regex-driven implementation configured with the municipality patterns.

use cdp_common::models::{
    EventMinutesItem, EventMinutesItemDecision, Matter, MatterStatusDecision, Person,
    SupportingFile, VoteDecision,
};
use cdp_common::StaticData;
use tracing::debug;

use crate::legistar::{RawAgendaItem, RawAttachment, RawVote};
use crate::municipality::{canonical_person_name, Patterns};
use crate::normalizer::simplified;

/// Hooks the minutes-item assembler calls back into
pub trait LegistarBase: Send + Sync {
    /// Matter referenced by the agenda item, if any
    fn get_matter(&self, item: &RawAgendaItem) -> Option<Matter>;

    /// Person who cast the vote
    fn get_person(&self, vote: &RawVote) -> Option<Person>;

    /// Drop items carrying no meaningful content
    fn filter_event_minutes(&self, item: EventMinutesItem) -> Option<EventMinutesItem>;

    /// Overall outcome from the item's passed/failed flag
    fn get_minutes_item_decision(&self, flag: Option<&str>) -> Option<EventMinutesItemDecision>;

    /// Attachments that carry both a name and a link
    fn get_event_supporting_files(&self, attachments: &[RawAttachment])
        -> Option<Vec<SupportingFile>>;

    /// Decision from the recorded vote value
    fn match_vote_value(&self, vote: &RawVote) -> Option<VoteDecision>;
}

/// Pattern-driven `LegistarBase`
pub struct PatternBase {
    patterns: Patterns,
    static_data: StaticData,
}

impl PatternBase {
    pub fn new(patterns: Patterns, static_data: StaticData) -> Self {
        Self {
            patterns,
            static_data,
        }
    }

    /// Classify a Legistar matter status string
    ///
    /// In-progress wins over rejected, which wins over adopted.
    pub fn get_matter_status(&self, status: Option<&str>) -> Option<MatterStatusDecision> {
        let status = status?;
        if self.patterns.matter_in_progress.is_match(status) {
            Some(MatterStatusDecision::InProgress)
        } else if self.patterns.matter_rejected.is_match(status) {
            Some(MatterStatusDecision::Rejected)
        } else if self.patterns.matter_adopted.is_match(status) {
            Some(MatterStatusDecision::Adopted)
        } else {
            None
        }
    }
}

impl LegistarBase for PatternBase {
    fn get_matter(&self, item: &RawAgendaItem) -> Option<Matter> {
        let matter_id = item.matter_id?;

        let name = simplified(item.matter_file.as_deref());
        let title = match simplified(item.matter_name.as_deref()) {
            t if t.is_empty() => simplified(item.title.as_deref()),
            t => t,
        };
        let matter_type = Some(simplified(item.matter_type.as_deref())).filter(|t| !t.is_empty());

        Some(Matter {
            name,
            title,
            matter_type,
            result_status: self.get_matter_status(item.matter_status.as_deref()),
            external_source_id: Some(matter_id.to_string()),
        })
    }

    fn get_person(&self, vote: &RawVote) -> Option<Person> {
        let name = simplified(vote.person_name.as_deref());
        if name.is_empty() {
            return None;
        }

        let name = canonical_person_name(&name);
        if let Some(known) = self.static_data.person(name) {
            return Some(known.clone());
        }

        Some(Person::new(name, vote.person_id.map(|id| id.to_string())))
    }

    fn filter_event_minutes(&self, item: EventMinutesItem) -> Option<EventMinutesItem> {
        let ignored = item.minutes_item.as_ref().map_or(false, |m| {
            self.patterns
                .ignore_minutes_items
                .iter()
                .any(|p| p.is_match(&m.name))
        });

        if ignored {
            debug!(index = ?item.index, "Ignoring minutes item");
            return None;
        }
        Some(item)
    }

    fn get_minutes_item_decision(&self, flag: Option<&str>) -> Option<EventMinutesItemDecision> {
        let flag = flag?;
        // "Not Passed" must not read as passed
        if self.patterns.minutes_item_failed.is_match(flag) {
            Some(EventMinutesItemDecision::Failed)
        } else if self.patterns.minutes_item_passed.is_match(flag) {
            Some(EventMinutesItemDecision::Passed)
        } else {
            None
        }
    }

    fn get_event_supporting_files(
        &self,
        attachments: &[RawAttachment],
    ) -> Option<Vec<SupportingFile>> {
        let files: Vec<SupportingFile> = attachments
            .iter()
            .filter_map(|a| {
                let name = simplified(a.name.as_deref());
                let uri = a.hyperlink.as_deref().map(str::trim).unwrap_or_default();
                if name.is_empty() || uri.is_empty() {
                    return None;
                }
                Some(SupportingFile {
                    name,
                    uri: uri.to_string(),
                    external_source_id: a.id.map(|id| id.to_string()),
                })
            })
            .collect();

        Some(files).filter(|f| !f.is_empty())
    }

    fn match_vote_value(&self, vote: &RawVote) -> Option<VoteDecision> {
        let value = vote.value_name.as_deref()?;
        let p = &self.patterns;

        let leaning = if p.vote_approve.is_match(value) {
            Some(VoteDecision::Approve)
        } else if p.vote_reject.is_match(value) {
            Some(VoteDecision::Reject)
        } else {
            None
        };

        if p.vote_abstain.is_match(value) || p.vote_nonvoting.is_match(value) {
            Some(match leaning {
                Some(VoteDecision::Approve) => VoteDecision::AbstainApprove,
                Some(VoteDecision::Reject) => VoteDecision::AbstainReject,
                _ => VoteDecision::AbstainNonVoting,
            })
        } else if p.vote_absent.is_match(value) {
            Some(match leaning {
                Some(VoteDecision::Approve) => VoteDecision::AbsentApprove,
                Some(VoteDecision::Reject) => VoteDecision::AbsentReject,
                _ => VoteDecision::AbsentNonVoting,
            })
        } else {
            leaning
        }
    }
}
