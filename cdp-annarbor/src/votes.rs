//! Per-person vote resolution
//!
//! Ann Arbor takes many votes by voice rather than roll call. Individual
//! choices then show up with neither a value name nor a value id (absent
//! members still get an explicit "Absent"). Voice votes are normally reserved
//! for unanimous actions, so an unrecorded vote is assumed to follow the
//! overall outcome. This is an approximation, not a guarantee.

use cdp_common::models::{EventMinutesItemDecision, Vote, VoteDecision};
use tracing::debug;

use crate::base::LegistarBase;
use crate::legistar::RawVote;

/// Decision for one raw vote
///
/// A recorded value always goes through the pattern matcher; only fully
/// unrecorded votes are inferred from `minutes_item_decision`.
pub fn resolve_vote(
    base: &dyn LegistarBase,
    vote: &RawVote,
    minutes_item_decision: Option<EventMinutesItemDecision>,
) -> Option<VoteDecision> {
    if vote.is_unrecorded() {
        return match minutes_item_decision {
            Some(EventMinutesItemDecision::Passed) => Some(VoteDecision::Approve),
            Some(EventMinutesItemDecision::Failed) => Some(VoteDecision::Reject),
            None => None,
        };
    }

    base.match_vote_value(vote)
}

/// Normalized votes for an agenda item, `None` when none survive
pub fn get_votes(
    base: &dyn LegistarBase,
    votes: &[RawVote],
    minutes_item_decision: Option<EventMinutesItemDecision>,
) -> Option<Vec<Vote>> {
    let votes: Vec<Vote> = votes
        .iter()
        .map(|v| Vote {
            person: base.get_person(v),
            decision: resolve_vote(base, v, minutes_item_decision),
            external_source_id: Some(v.id.to_string()),
        })
        .filter(|v| !v.is_empty())
        .collect();

    debug!(count = votes.len(), "votes: {:?}", votes);
    Some(votes).filter(|v| !v.is_empty())
}
