//! Results produced by the unlock evaluator.

use std::fmt;

/// Separator placed between fallback conditions in plain text
pub const CONDITION_SEPARATOR: &str = " / ";

/// One satisfied unlock rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockMatch {
    Geographic,
    Strategic,
    Historic,
    /// Unlocked by an earlier-era civilization (holds its display name)
    ByCivilization(String),
    /// Unlocked by the selected leader (holds their display name)
    ByLeader(String),
}

impl UnlockMatch {
    pub fn label(&self) -> String {
        match self {
            UnlockMatch::Geographic => "Geographic".to_string(),
            UnlockMatch::Strategic => "Strategic".to_string(),
            UnlockMatch::Historic => "Historic".to_string(),
            UnlockMatch::ByCivilization(name) | UnlockMatch::ByLeader(name) => {
                format!("Unlocked by {}", name)
            }
        }
    }

    /// The name shown emphasized in the label, if any.
    pub fn unlocker(&self) -> Option<&str> {
        match self {
            UnlockMatch::ByCivilization(name) | UnlockMatch::ByLeader(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for UnlockMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Ordered list of the rules a candidate satisfies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    matches: Vec<UnlockMatch>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, m: UnlockMatch) {
        self.matches.push(m);
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UnlockMatch> {
        self.matches.iter()
    }

    pub fn labels(&self) -> Vec<String> {
        self.matches.iter().map(UnlockMatch::label).collect()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a UnlockMatch;
    type IntoIter = std::slice::Iter<'a, UnlockMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// Free-text conditions for a civilization no rule list covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackConditions {
    pub civilization: String,
    pub conditions: Vec<String>,
}

impl FallbackConditions {
    /// Text before the conditions list.
    pub fn preamble(&self) -> String {
        format!(
            "{} needs be unlocked by following condition(s): ",
            self.civilization
        )
    }
}

impl fmt::Display for FallbackConditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.preamble(),
            self.conditions.join(CONDITION_SEPARATOR)
        )
    }
}
