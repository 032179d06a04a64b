//! The user's current picks: a leader plus one civilization per era.

use crate::data::{Civilization, Era, Leader};

/// Current leader and per-era civilization selections.
///
/// Later eras depend on earlier ones, so picking something always clears
/// every selection after it and never one before it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionContext {
    leader: Option<Leader>,
    civilizations: [Option<Civilization>; 3],
}

impl SelectionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a leader. Clears all era selections.
    pub fn select_leader(&mut self, leader: Leader) {
        tracing::debug!(leader = %leader.id, "Leader selected");
        self.leader = Some(leader);
        self.civilizations = Default::default();
    }

    /// Pick a civilization for `era`. Clears the selections of all later eras.
    pub fn select(&mut self, era: Era, civilization: Civilization) {
        tracing::debug!(era = era.key(), civilization = %civilization.id, "Civilization selected");
        self.civilizations[era.index()] = Some(civilization);
        for later in era.later() {
            self.civilizations[later.index()] = None;
        }
    }

    /// Reset everything to no selection.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn selected(&self, era: Era) -> Option<&Civilization> {
        self.civilizations[era.index()].as_ref()
    }

    pub fn leader(&self) -> Option<&Leader> {
        self.leader.as_ref()
    }

    /// Selections made before `era`, oldest era first.
    pub fn earlier_selections(&self, era: Era) -> impl Iterator<Item = (Era, &Civilization)> + '_ {
        era.earlier()
            .iter()
            .filter_map(move |e| self.selected(*e).map(|civ| (*e, civ)))
    }

    pub fn is_empty(&self) -> bool {
        self.leader.is_none() && self.civilizations.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn civ(id: &str) -> Civilization {
        serde_json::from_value(serde_json::json!({ "id": id, "name": id })).unwrap()
    }

    fn leader(id: &str) -> Leader {
        serde_json::from_value(serde_json::json!({ "id": id, "name": id })).unwrap()
    }

    #[test]
    fn test_new_is_empty() {
        assert!(SelectionContext::new().is_empty());
    }

    #[test]
    fn test_select_leader_clears_all_eras() {
        let mut ctx = SelectionContext::new();
        ctx.select(Era::Antiquity, civ("rome"));
        ctx.select(Era::Exploration, civ("spain"));
        ctx.select_leader(leader("amina"));
        assert_eq!(ctx.leader().map(|l| l.id.as_str()), Some("amina"));
        assert!(Era::ALL.iter().all(|e| ctx.selected(*e).is_none()));
    }

    #[test]
    fn test_select_keeps_earlier_eras() {
        let mut ctx = SelectionContext::new();
        ctx.select_leader(leader("amina"));
        ctx.select(Era::Antiquity, civ("rome"));
        ctx.select(Era::Exploration, civ("spain"));
        ctx.select(Era::Modern, civ("mexico"));

        ctx.select(Era::Modern, civ("america"));
        assert_eq!(ctx.selected(Era::Exploration).unwrap().id, "spain");
        assert_eq!(ctx.selected(Era::Antiquity).unwrap().id, "rome");
        assert!(ctx.leader().is_some());
    }

    #[test]
    fn test_earlier_selections_skips_gaps() {
        let mut ctx = SelectionContext::new();
        ctx.select(Era::Exploration, civ("spain"));
        let earlier: Vec<_> = ctx
            .earlier_selections(Era::Modern)
            .map(|(era, c)| (era, c.id.clone()))
            .collect();
        assert_eq!(earlier, vec![(Era::Exploration, "spain".to_string())]);
        assert_eq!(ctx.earlier_selections(Era::Antiquity).count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut ctx = SelectionContext::new();
        ctx.select_leader(leader("amina"));
        ctx.select(Era::Antiquity, civ("rome"));
        ctx.clear();
        assert!(ctx.is_empty());
    }
}
