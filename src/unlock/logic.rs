//! Unlock rule evaluation.
//!
//! Every check is an independent membership test against the current
//! selection; nothing short-circuits and an absent selection never matches.

use super::types::{FallbackConditions, MatchSet, UnlockMatch};
use crate::data::{Civilization, Era};
use crate::selection::SelectionContext;

fn contains(list: &[String], id: Option<&str>) -> bool {
    id.is_some_and(|id| list.iter().any(|entry| entry == id))
}

/// Evaluate which unlock rules `candidate` (from `era`) satisfies.
///
/// Order: Geographic, Strategic, Historic, civilization unlocks from earlier
/// eras (oldest first), leader unlock.
pub fn evaluate(context: &SelectionContext, era: Era, candidate: &Civilization) -> MatchSet {
    let mut matches = MatchSet::new();
    let leader_id = context.leader().map(|l| l.id.as_str());

    if contains(&candidate.geographic, leader_id) {
        matches.push(UnlockMatch::Geographic);
    }
    if contains(&candidate.strategic, leader_id) {
        matches.push(UnlockMatch::Strategic);
    }
    if contains(&candidate.historic, leader_id) {
        matches.push(UnlockMatch::Historic);
    }

    for (_, earlier) in context.earlier_selections(era) {
        if contains(&candidate.unlocked_by_civilizations, Some(earlier.id.as_str())) {
            matches.push(UnlockMatch::ByCivilization(earlier.name.clone()));
        }
    }

    if let Some(leader) = context.leader() {
        if contains(&candidate.unlocked_by_leader, Some(leader.id.as_str())) {
            matches.push(UnlockMatch::ByLeader(leader.name.clone()));
        }
    }

    matches
}

/// True when at least one unlock rule is satisfied.
pub fn is_unlocked(context: &SelectionContext, era: Era, candidate: &Civilization) -> bool {
    !evaluate(context, era, candidate).is_empty()
}

/// True when no unlock rule is satisfied. In that case the civilization's
/// fallback conditions are what the user needs to see.
pub fn has_no_special_rule_match(
    context: &SelectionContext,
    era: Era,
    candidate: &Civilization,
) -> bool {
    evaluate(context, era, candidate).is_empty()
}

/// The free-text unlock conditions of `candidate`, if it has any.
pub fn describe_fallback_conditions(candidate: &Civilization) -> Option<FallbackConditions> {
    if candidate.unlocked_by_conditions.is_empty() {
        return None;
    }
    Some(FallbackConditions {
        civilization: candidate.name.clone(),
        conditions: candidate.unlocked_by_conditions.clone(),
    })
}
