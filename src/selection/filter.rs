//! Trait-based filtering of the leader list.

use crate::data::{Civilization, Leader, Traits};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which leader category to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitFilter {
    #[default]
    All,
    Cultural,
    Diplomatic,
    Economic,
    Expansionist,
    Militaristic,
    Scientific,
}

/// Flag accessor for every filter value except `All`.
const TRAIT_ACCESSORS: [(TraitFilter, fn(&Traits) -> bool); 6] = [
    (TraitFilter::Cultural, cultural),
    (TraitFilter::Diplomatic, diplomatic),
    (TraitFilter::Economic, economic),
    (TraitFilter::Expansionist, expansionist),
    (TraitFilter::Militaristic, militaristic),
    (TraitFilter::Scientific, scientific),
];

fn cultural(t: &Traits) -> bool {
    t.cultural
}

fn diplomatic(t: &Traits) -> bool {
    t.diplomatic
}

fn economic(t: &Traits) -> bool {
    t.economic
}

fn expansionist(t: &Traits) -> bool {
    t.expansionist
}

fn militaristic(t: &Traits) -> bool {
    t.militaristic
}

fn scientific(t: &Traits) -> bool {
    t.scientific
}

impl TraitFilter {
    /// All recognized values in selector order
    pub const ALL: [TraitFilter; 7] = [
        TraitFilter::All,
        TraitFilter::Cultural,
        TraitFilter::Diplomatic,
        TraitFilter::Economic,
        TraitFilter::Expansionist,
        TraitFilter::Militaristic,
        TraitFilter::Scientific,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TraitFilter::All => "all",
            TraitFilter::Cultural => "cultural",
            TraitFilter::Diplomatic => "diplomatic",
            TraitFilter::Economic => "economic",
            TraitFilter::Expansionist => "expansionist",
            TraitFilter::Militaristic => "militaristic",
            TraitFilter::Scientific => "scientific",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TraitFilter::All => "All",
            TraitFilter::Cultural => "Cultural",
            TraitFilter::Diplomatic => "Diplomatic",
            TraitFilter::Economic => "Economic",
            TraitFilter::Expansionist => "Expansionist",
            TraitFilter::Militaristic => "Militaristic",
            TraitFilter::Scientific => "Scientific",
        }
    }

    /// Next value in selector order, wrapping around.
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let pos = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether a set of traits passes this filter.
    pub fn matches(self, traits: &Traits) -> bool {
        TRAIT_ACCESSORS
            .iter()
            .find(|(filter, _)| *filter == self)
            .map_or(true, |(_, has_trait)| has_trait(traits))
    }
}

impl fmt::Display for TraitFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TraitFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.key() == wanted)
            .ok_or_else(|| format!("Unknown filter '{}'", s))
    }
}

/// Leaders passing `filter`, in input order.
pub fn filter_leaders(leaders: &[Leader], filter: TraitFilter) -> Vec<Leader> {
    leaders
        .iter()
        .filter(|l| filter.matches(&l.traits))
        .cloned()
        .collect()
}

/// Civilizations passing `filter`. Only applied when explicitly enabled in config.
pub fn filter_civilizations(civilizations: &[Civilization], filter: TraitFilter) -> Vec<Civilization> {
    civilizations
        .iter()
        .filter(|c| filter.matches(&c.traits))
        .cloned()
        .collect()
}

/// Civilizations to show under `filter`. Unfiltered unless `enabled`.
pub fn visible_civilizations(
    civilizations: &[Civilization],
    filter: TraitFilter,
    enabled: bool,
) -> Vec<Civilization> {
    if enabled {
        filter_civilizations(civilizations, filter)
    } else {
        civilizations.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn civilization(id: &str, traits: Traits) -> Civilization {
        Civilization {
            id: id.to_string(),
            name: id.to_string(),
            traits,
            historic: Vec::new(),
            geographic: Vec::new(),
            strategic: Vec::new(),
            unlocked_by_leader: Vec::new(),
            unlocked_by_civilizations: Vec::new(),
            unlocked_by_conditions: Vec::new(),
        }
    }

    fn leader(id: &str, traits: Traits) -> Leader {
        Leader {
            id: id.to_string(),
            name: id.to_string(),
            traits,
        }
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(TraitFilter::All.matches(&Traits::default()));
    }

    #[test]
    fn test_each_accessor_reads_its_own_flag() {
        let only_scientific = Traits {
            scientific: true,
            ..Default::default()
        };
        for filter in TraitFilter::ALL {
            let expected = matches!(filter, TraitFilter::All | TraitFilter::Scientific);
            assert_eq!(filter.matches(&only_scientific), expected, "{:?}", filter);
        }
    }

    #[test]
    fn test_from_str_round_trip() {
        for filter in TraitFilter::ALL {
            assert_eq!(filter.key().parse::<TraitFilter>(), Ok(filter));
        }
        assert_eq!("Militaristic".parse::<TraitFilter>(), Ok(TraitFilter::Militaristic));
        assert!("religious".parse::<TraitFilter>().is_err());
    }

    #[test]
    fn test_next_and_prev_wrap() {
        assert_eq!(TraitFilter::Scientific.next(), TraitFilter::All);
        assert_eq!(TraitFilter::All.prev(), TraitFilter::Scientific);
        assert_eq!(TraitFilter::All.next(), TraitFilter::Cultural);
    }

    #[test]
    fn test_filter_leaders_militaristic() {
        let leaders = vec![
            leader(
                "a",
                Traits {
                    militaristic: true,
                    ..Default::default()
                },
            ),
            leader(
                "b",
                Traits {
                    cultural: true,
                    ..Default::default()
                },
            ),
        ];
        let filtered = filter_leaders(&leaders, TraitFilter::Militaristic);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "a");
        assert_eq!(filter_leaders(&leaders, TraitFilter::All).len(), 2);
    }

    #[test]
    fn test_visible_civilizations_only_filters_when_enabled() {
        let civs = vec![
            civilization(
                "rome",
                Traits {
                    militaristic: true,
                    ..Default::default()
                },
            ),
            civilization("egypt", Traits::default()),
        ];
        assert_eq!(visible_civilizations(&civs, TraitFilter::Militaristic, false).len(), 2);
        let shown = visible_civilizations(&civs, TraitFilter::Militaristic, true);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "rome");
        assert_eq!(visible_civilizations(&civs, TraitFilter::All, true).len(), 2);
    }
}
