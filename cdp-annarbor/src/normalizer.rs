//! Field normalization for minutes items

use cdp_common::models::MinutesItem;

use crate::legistar::RawAgendaItem;

/// Legistar past-tense actions and their present-tense form
const ACTION_TO_PRESENT_TENSE: &[(&str, &str)] = &[
    ("Approved", ""),
    ("Postponed", "Postpone"),
    ("Referred", "Refer"),
];

/// Collapse internal whitespace runs and trim; null becomes empty
pub fn simplified(value: Option<&str>) -> String {
    value
        .map(|v| v.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

/// Present-tense form of an action; unknown actions pass through unchanged
pub fn normalize_action(action: &str) -> &str {
    ACTION_TO_PRESENT_TENSE
        .iter()
        .find(|(past, _)| *past == action)
        .map(|(_, present)| *present)
        .unwrap_or(action)
}

/// Minutes-item display name: `action: agenda number: title`
///
/// Empty or whitespace-only parts are skipped. Returns `None` when nothing
/// remains.
pub fn normalize_minutes_item_name(
    action: &str,
    agenda_number: &str,
    minutes_name: &str,
) -> Option<String> {
    let action = simplified(Some(action));
    let parts = [
        simplified(Some(normalize_action(&action))),
        simplified(Some(agenda_number)),
        simplified(Some(minutes_name)),
    ];

    let name = parts
        .iter()
        .filter(|p| !p.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(": ");

    Some(name).filter(|n| !n.is_empty())
}

/// Minutes item for a raw agenda item, `None` when it would have no name
pub fn get_minutes_item(item: &RawAgendaItem) -> Option<MinutesItem> {
    let name = normalize_minutes_item_name(
        item.action_name.as_deref().unwrap_or_default(),
        item.agenda_number.as_deref().unwrap_or_default(),
        item.title.as_deref().unwrap_or_default(),
    )?;

    Some(MinutesItem {
        name,
        description: None,
        external_source_id: Some(item.id.to_string()),
    })
}
