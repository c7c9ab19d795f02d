//! Minutes-item assembly
//!
//! Builds one `EventMinutesItem` per Legistar agenda item from the
//! normalizer, the vote resolver and the `LegistarBase` hooks, then applies
//! the matter-status fix-up.

use cdp_common::models::{EventMinutesItem, MatterStatusDecision};
use std::sync::Arc;
use tracing::debug;

use crate::base::LegistarBase;
use crate::legistar::RawAgendaItem;
use crate::normalizer::get_minutes_item;
use crate::votes::get_votes;

/// Minutes-item assembler over an injected set of scraper hooks
#[derive(Clone)]
pub struct MinutesAssembler {
    base: Arc<dyn LegistarBase>,
}

impl MinutesAssembler {
    pub fn new(base: Arc<dyn LegistarBase>) -> Self {
        Self { base }
    }

    /// Normalized agenda item, or `None` when the item carries no content
    pub fn assemble(&self, item: &RawAgendaItem) -> Option<EventMinutesItem> {
        let base = self.base.as_ref();
        let decision = base.get_minutes_item_decision(item.passed_flag_name.as_deref());

        let assembled = EventMinutesItem {
            index: item.index,
            minutes_item: get_minutes_item(item),
            votes: get_votes(base, &item.votes, decision),
            matter: base.get_matter(item),
            decision,
            supporting_files: base.get_event_supporting_files(&item.attachments),
        };

        let fixed = fix_event_minutes(base.filter_event_minutes(assembled), item)?;
        if fixed.is_empty() {
            debug!(item_id = item.id, "Agenda item has no meaningful content");
            return None;
        }
        Some(fixed)
    }
}

/// Default an unclassified matter to in progress
///
/// `matter.result_status` may stay unset only when there were no votes or
/// Legistar gave no matter status. Otherwise Legistar signalled an outcome our
/// patterns did not recognize, and the open state is the safest reading.
pub fn fix_event_minutes(
    minutes_item: Option<EventMinutesItem>,
    item: &RawAgendaItem,
) -> Option<EventMinutesItem> {
    let mut minutes_item = minutes_item?;

    let has_votes = minutes_item.votes.as_ref().map_or(false, |v| !v.is_empty());
    if let Some(matter) = minutes_item.matter.as_mut() {
        if matter.result_status.is_none() && has_votes && item.has_matter_status() {
            debug!(
                item_id = item.id,
                status = ?item.matter_status,
                "Unrecognized matter status, defaulting to in progress"
            );
            matter.result_status = Some(MatterStatusDecision::InProgress);
        }
    }

    Some(minutes_item)
}
