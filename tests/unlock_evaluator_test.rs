//! Unlock evaluator: rule matching, ordering, fallback conditions.

use civpath::data::{Civilization, Era, Leader};
use civpath::selection::SelectionContext;
use civpath::unlock::{
    describe_fallback_conditions, evaluate, has_no_special_rule_match, is_unlocked, UnlockMatch,
};
use serde_json::json;

fn leader(id: &str, name: &str) -> Leader {
    serde_json::from_value(json!({ "id": id, "name": name })).unwrap()
}

fn civ(value: serde_json::Value) -> Civilization {
    serde_json::from_value(value).unwrap()
}

fn rome() -> Civilization {
    civ(json!({
        "id": "C1", "name": "Rome",
        "geographic": ["L1"], "strategic": [], "historic": [],
        "unlockedByLeader": [], "unlockedByCivilizations": [], "unlockedByConditions": []
    }))
}

// =========================================================================
// Leader rules
// =========================================================================

#[test]
fn test_geographic_match_for_selected_leader() {
    let mut ctx = SelectionContext::new();
    ctx.select_leader(leader("L1", "Amina"));
    assert_eq!(evaluate(&ctx, Era::Antiquity, &rome()).labels(), vec!["Geographic"]);
}

#[test]
fn test_other_leader_does_not_match() {
    let mut ctx = SelectionContext::new();
    ctx.select_leader(leader("L2", "Augustus"));
    assert!(evaluate(&ctx, Era::Antiquity, &rome()).is_empty());
}

#[test]
fn test_no_leader_means_no_leader_matches() {
    let candidate = civ(json!({
        "id": "x", "name": "X",
        "geographic": ["L1"], "strategic": ["L1"], "historic": ["L1"], "unlockedByLeader": ["L1"]
    }));
    let ctx = SelectionContext::new();
    for era in Era::ALL {
        assert!(evaluate(&ctx, era, &candidate).is_empty());
    }
}

#[test]
fn test_leader_unlock_uses_leader_name() {
    let candidate = civ(json!({ "id": "egypt", "name": "Egypt", "unlockedByLeader": ["hat"] }));
    let mut ctx = SelectionContext::new();
    ctx.select_leader(leader("hat", "Hatshepsut"));
    let matches = evaluate(&ctx, Era::Antiquity, &candidate);
    assert_eq!(
        matches.iter().cloned().collect::<Vec<_>>(),
        vec![UnlockMatch::ByLeader("Hatshepsut".to_string())]
    );
    assert_eq!(matches.labels(), vec!["Unlocked by Hatshepsut"]);
}

// =========================================================================
// Civilization rules
// =========================================================================

#[test]
fn test_unlocked_by_earlier_civilization() {
    let a = civ(json!({ "id": "A_id", "name": "Aksum" }));
    let b = civ(json!({ "id": "B_id", "name": "Songhai", "unlockedByCivilizations": ["A_id"] }));
    let mut ctx = SelectionContext::new();
    ctx.select(Era::Antiquity, a);
    assert!(evaluate(&ctx, Era::Exploration, &b)
        .labels()
        .contains(&"Unlocked by Aksum".to_string()));
}

#[test]
fn test_modern_candidate_checks_both_earlier_eras_in_order() {
    let han = civ(json!({ "id": "han", "name": "Han" }));
    let ming = civ(json!({ "id": "ming", "name": "Ming" }));
    let qing = civ(json!({
        "id": "qing", "name": "Qing",
        "historic": ["conf"], "unlockedByCivilizations": ["ming", "han"]
    }));
    let mut ctx = SelectionContext::new();
    ctx.select_leader(leader("conf", "Confucius"));
    ctx.select(Era::Antiquity, han);
    ctx.select(Era::Exploration, ming);

    assert_eq!(
        evaluate(&ctx, Era::Modern, &qing).labels(),
        vec!["Historic", "Unlocked by Han", "Unlocked by Ming"]
    );
}

#[test]
fn test_full_order_geographic_strategic_historic_civ_leader() {
    let prior = civ(json!({ "id": "p", "name": "Prior" }));
    let candidate = civ(json!({
        "id": "c", "name": "Candidate",
        "historic": ["L"], "geographic": ["L"], "strategic": ["L"],
        "unlockedByLeader": ["L"], "unlockedByCivilizations": ["p"]
    }));
    let mut ctx = SelectionContext::new();
    ctx.select_leader(leader("L", "Lead"));
    ctx.select(Era::Antiquity, prior);
    assert_eq!(
        evaluate(&ctx, Era::Exploration, &candidate).labels(),
        vec![
            "Geographic",
            "Strategic",
            "Historic",
            "Unlocked by Prior",
            "Unlocked by Lead"
        ]
    );
}

// =========================================================================
// Purity and unlocked predicates
// =========================================================================

#[test]
fn test_evaluate_is_idempotent() {
    let mut ctx = SelectionContext::new();
    ctx.select_leader(leader("L1", "Amina"));
    let candidate = rome();
    let first = evaluate(&ctx, Era::Antiquity, &candidate);
    for _ in 0..5 {
        assert_eq!(evaluate(&ctx, Era::Antiquity, &candidate), first);
    }
}

#[test]
fn test_empty_rules_mean_no_special_match() {
    let candidate = civ(json!({ "id": "bare", "name": "Bare" }));
    let mut ctx = SelectionContext::new();
    ctx.select_leader(leader("L1", "Amina"));
    assert!(evaluate(&ctx, Era::Modern, &candidate).is_empty());
    assert!(has_no_special_rule_match(&ctx, Era::Modern, &candidate));
    assert!(!is_unlocked(&ctx, Era::Modern, &candidate));
}

#[test]
fn test_is_unlocked_with_match() {
    let mut ctx = SelectionContext::new();
    ctx.select_leader(leader("L1", "Amina"));
    assert!(is_unlocked(&ctx, Era::Antiquity, &rome()));
    assert!(!has_no_special_rule_match(&ctx, Era::Antiquity, &rome()));
}

// =========================================================================
// Fallback conditions
// =========================================================================

#[test]
fn test_fallback_conditions_text() {
    let candidate = civ(json!({
        "id": "C1", "name": "Rome",
        "unlockedByConditions": ["Own 3 cities", "Reach Renaissance era"]
    }));
    let fallback = describe_fallback_conditions(&candidate).unwrap();
    assert_eq!(
        fallback.to_string(),
        "Rome needs be unlocked by following condition(s): Own 3 cities / Reach Renaissance era"
    );
    assert_eq!(fallback.conditions.len(), 2);
}

#[test]
fn test_fallback_absent_without_conditions() {
    assert!(describe_fallback_conditions(&rome()).is_none());
}
