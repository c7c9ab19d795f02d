//! Ann Arbor constants
//!
//! Fixed per-municipality strings. Deployment settings (endpoints, static data
//! location) come from `cdp_common::config` instead.

use crate::error::AdapterResult;
use chrono_tz::Tz;
use regex::{Regex, RegexBuilder};

pub const MUNICIPALITY_SLUG: &str = "annarbor";
pub const LEGISTAR_CLIENT: &str = "a2gov";
/// Zone of the wall-clock times Legistar reports
pub const TIMEZONE: Tz = chrono_tz::America::Detroit;

/// Environment variable naming the bootstrap TOML file
pub const CONFIG_ENV_VAR: &str = "CDP_ANNARBOR_CONFIG";

pub const VOTE_APPROVE_PATTERN: &str = "approve|favor|yes|yea";
pub const VOTE_REJECT_PATTERN: &str = "reject|oppose|no|nay";
pub const VOTE_ABSTAIN_PATTERN: &str = "abstain|refuse|refrain";
pub const VOTE_ABSENT_PATTERN: &str = "absent|excused";
pub const VOTE_NONVOTING_PATTERN: &str = r"nv|(?:non.*voting)";

pub const MATTER_ADOPTED_PATTERN: &str = "approved|confirmed|passed|adopted";
pub const MATTER_IN_PROGRESS_PATTERN: &str =
    r"heard|read|filed|held|(?:in.*com+it+ee)|lay on table";
pub const MATTER_REJECTED_PATTERN: &str = "rejected|dropped|defeated";

pub const MINUTES_ITEM_PASSED_PATTERN: &str = "pass";
pub const MINUTES_ITEM_FAILED_PATTERN: &str = "not|fail";

/// Minutes items whose names match any of these are dropped
pub const IGNORE_MINUTES_ITEM_PATTERNS: &[&str] = &[];

/// Canonical person name -> alternate spellings seen in Legistar
pub const PERSON_ALIASES: &[(&str, &[&str])] = &[];

/// Compiled, case-insensitive municipality patterns
#[derive(Debug, Clone)]
pub struct Patterns {
    pub vote_approve: Regex,
    pub vote_reject: Regex,
    pub vote_abstain: Regex,
    pub vote_absent: Regex,
    pub vote_nonvoting: Regex,
    pub matter_adopted: Regex,
    pub matter_in_progress: Regex,
    pub matter_rejected: Regex,
    pub minutes_item_passed: Regex,
    pub minutes_item_failed: Regex,
    pub ignore_minutes_items: Vec<Regex>,
}

fn compile(pattern: &str) -> AdapterResult<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

impl Patterns {
    /// Compile the Ann Arbor pattern set
    pub fn ann_arbor() -> AdapterResult<Self> {
        Ok(Self {
            vote_approve: compile(VOTE_APPROVE_PATTERN)?,
            vote_reject: compile(VOTE_REJECT_PATTERN)?,
            vote_abstain: compile(VOTE_ABSTAIN_PATTERN)?,
            vote_absent: compile(VOTE_ABSENT_PATTERN)?,
            vote_nonvoting: compile(VOTE_NONVOTING_PATTERN)?,
            matter_adopted: compile(MATTER_ADOPTED_PATTERN)?,
            matter_in_progress: compile(MATTER_IN_PROGRESS_PATTERN)?,
            matter_rejected: compile(MATTER_REJECTED_PATTERN)?,
            minutes_item_passed: compile(MINUTES_ITEM_PASSED_PATTERN)?,
            minutes_item_failed: compile(MINUTES_ITEM_FAILED_PATTERN)?,
            ignore_minutes_items: IGNORE_MINUTES_ITEM_PATTERNS
                .iter()
                .map(|p| compile(p))
                .collect::<AdapterResult<_>>()?,
        })
    }
}

/// Canonical name for a possibly aliased person name
pub fn canonical_person_name(name: &str) -> &str {
    PERSON_ALIASES
        .iter()
        .find(|(_, aliases)| aliases.contains(&name))
        .map(|(canonical, _)| *canonical)
        .unwrap_or(name)
}
