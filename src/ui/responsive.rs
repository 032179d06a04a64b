//! Terminal size classification.
//!
//! A `LayoutContext` is built once per frame and decides whether all four
//! lists fit side by side or only the focused one is shown.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeTier {
    TooSmall,
    Compact, // 40x14+: focused list and detail panel
    Full,    // 100x24+: all four lists
}

const FULL_MIN_COLS: u16 = 100;
const FULL_MIN_ROWS: u16 = 24;
const COMPACT_MIN_COLS: u16 = 40;
const COMPACT_MIN_ROWS: u16 = 14;

#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub tier: SizeTier,
    pub cols: u16,
    pub rows: u16,
}

impl LayoutContext {
    pub fn from_frame(frame: &Frame) -> Self {
        let size = frame.size();
        Self::from_size(size.width, size.height)
    }

    pub fn from_size(cols: u16, rows: u16) -> Self {
        let tier = if cols >= FULL_MIN_COLS && rows >= FULL_MIN_ROWS {
            SizeTier::Full
        } else if cols >= COMPACT_MIN_COLS && rows >= COMPACT_MIN_ROWS {
            SizeTier::Compact
        } else {
            SizeTier::TooSmall
        };
        LayoutContext { tier, cols, rows }
    }
}

pub fn render_too_small(frame: &mut Frame, ctx: &LayoutContext) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Need: {}x{}   Have: {}x{}",
                COMPACT_MIN_COLS, COMPACT_MIN_ROWS, ctx.cols, ctx.rows
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
