//! Interactive state behind the TUI: loaded lists, selection, filter, focus.
//!
//! Kept free of terminal I/O so key handling can be tested directly.

use crate::config::AppConfig;
use crate::data::{Civilization, Datasets, Era, Leader};
use crate::selection::{filter_leaders, visible_civilizations, SelectionContext, TraitFilter};
use crate::unlock::{
    describe_fallback_conditions, evaluate, FallbackConditions, MatchSet,
};
use crossterm::event::KeyCode;

/// One of the four selectable lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Leaders,
    Era(Era),
}

impl Column {
    /// Left-to-right column order
    pub const ALL: [Column; 4] = [
        Column::Leaders,
        Column::Era(Era::Antiquity),
        Column::Era(Era::Exploration),
        Column::Era(Era::Modern),
    ];

    pub fn index(self) -> usize {
        match self {
            Column::Leaders => 0,
            Column::Era(era) => era.index() + 1,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Column::Leaders => "Leaders",
            Column::Era(era) => era.name(),
        }
    }
}

/// What the detail panel shows for a civilization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CivilizationStatus {
    pub matches: MatchSet,
    /// Only present when no rule matched and the civilization lists conditions
    pub fallback: Option<FallbackConditions>,
}

impl CivilizationStatus {
    pub fn is_unlocked(&self) -> bool {
        !self.matches.is_empty()
    }
}

pub struct App {
    datasets: Datasets,
    leaders: Vec<Leader>,
    civilizations: [Vec<Civilization>; 3],
    selection: SelectionContext,
    filter: TraitFilter,
    filter_civilizations: bool,
    focus: Column,
    cursors: [usize; 4],
    pub should_quit: bool,
}

impl App {
    pub fn new(datasets: Datasets, config: &AppConfig) -> Self {
        let mut app = Self {
            datasets,
            leaders: Vec::new(),
            civilizations: Default::default(),
            selection: SelectionContext::new(),
            filter: config.default_filter,
            filter_civilizations: config.filter_civilizations,
            focus: Column::Leaders,
            cursors: [0; 4],
            should_quit: false,
        };
        app.apply_filter();
        app
    }

    pub fn selection(&self) -> &SelectionContext {
        &self.selection
    }

    pub fn filter(&self) -> TraitFilter {
        self.filter
    }

    pub fn focus(&self) -> Column {
        self.focus
    }

    pub fn cursor(&self, column: Column) -> usize {
        self.cursors[column.index()]
    }

    /// Leaders visible under the current filter.
    pub fn leaders(&self) -> &[Leader] {
        &self.leaders
    }

    /// Civilizations visible for `era`.
    pub fn civilizations(&self, era: Era) -> &[Civilization] {
        &self.civilizations[era.index()]
    }

    pub fn column_len(&self, column: Column) -> usize {
        match column {
            Column::Leaders => self.leaders.len(),
            Column::Era(era) => self.civilizations(era).len(),
        }
    }

    /// Change the leader filter. Resets all selections and cursors.
    pub fn set_filter(&mut self, filter: TraitFilter) {
        tracing::debug!(filter = filter.key(), "Filter changed");
        self.filter = filter;
        self.selection.clear();
        self.cursors = [0; 4];
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        self.leaders = filter_leaders(&self.datasets.leaders, self.filter);
        for era in Era::ALL {
            self.civilizations[era.index()] = visible_civilizations(
                self.datasets.civilizations(era),
                self.filter,
                self.filter_civilizations,
            );
        }
    }

    pub fn focus_next(&mut self) {
        let idx = (self.focus.index() + 1).min(Column::ALL.len() - 1);
        self.focus = Column::ALL[idx];
    }

    pub fn focus_prev(&mut self) {
        self.focus = Column::ALL[self.focus.index().saturating_sub(1)];
    }

    pub fn move_down(&mut self) {
        let len = self.column_len(self.focus);
        let cursor = &mut self.cursors[self.focus.index()];
        if len > 0 && *cursor + 1 < len {
            *cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        let cursor = &mut self.cursors[self.focus.index()];
        *cursor = cursor.saturating_sub(1);
    }

    /// Select the item under the cursor in the focused column, then move
    /// focus to the next column.
    pub fn select_current(&mut self) {
        let cursor = self.cursor(self.focus);
        match self.focus {
            Column::Leaders => {
                let Some(leader) = self.leaders.get(cursor).cloned() else {
                    return;
                };
                self.selection.select_leader(leader);
            }
            Column::Era(era) => {
                let Some(civ) = self.civilizations(era).get(cursor).cloned() else {
                    return;
                };
                self.selection.select(era, civ);
            }
        }
        self.focus_next();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Leader under the cursor in the leader column.
    pub fn highlighted_leader(&self) -> Option<&Leader> {
        self.leaders.get(self.cursor(Column::Leaders))
    }

    /// Civilization under the cursor of the focused era column.
    pub fn highlighted_civilization(&self) -> Option<(Era, &Civilization)> {
        match self.focus {
            Column::Leaders => None,
            Column::Era(era) => self
                .civilizations(era)
                .get(self.cursor(self.focus))
                .map(|civ| (era, civ)),
        }
    }

    /// Unlock status of `civ` under the current selection.
    pub fn status(&self, era: Era, civ: &Civilization) -> CivilizationStatus {
        let matches = evaluate(&self.selection, era, civ);
        let fallback = if matches.is_empty() {
            describe_fallback_conditions(civ)
        } else {
            None
        };
        CivilizationStatus { matches, fallback }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.focus_prev(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.focus_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select_current(),
            KeyCode::Char('f') => self.set_filter(self.filter.next()),
            KeyCode::Char('F') => self.set_filter(self.filter.prev()),
            KeyCode::Char('c') => self.clear_selection(),
            _ => {}
        }
    }
}
