//! Detail panel for the highlighted leader or civilization.

use crate::app::App;
use crate::data::{Leader, Traits};
use crate::selection::TraitFilter;
use crate::unlock::{UnlockMatch, CONDITION_SEPARATOR};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_detail_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = match app.highlighted_civilization() {
        Some((era, civ)) => {
            let status = app.status(era, civ);
            let mut lines = vec![
                Line::from(Span::styled(
                    civ.name.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("{} · {}", era, trait_summary(&civ.traits)),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
            ];

            if status.is_unlocked() {
                lines.extend(status.matches.iter().map(match_line));
            } else if let Some(fallback) = &status.fallback {
                let mut spans = vec![Span::raw(fallback.preamble())];
                for (i, condition) in fallback.conditions.iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw(CONDITION_SEPARATOR));
                    }
                    spans.push(Span::styled(
                        condition.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ));
                }
                lines.push(Line::from(spans));
            } else {
                lines.push(Line::from(Span::styled(
                    "No unlock rule applies to the current selection.",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines
        }
        None => match app.highlighted_leader() {
            Some(leader) => leader_lines(leader),
            None => vec![Line::from(Span::styled(
                "No data loaded. Check the log for dataset errors.",
                Style::default().fg(Color::DarkGray),
            ))],
        },
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn match_line(m: &UnlockMatch) -> Line<'static> {
    let check = Span::styled("✔ ", Style::default().fg(Color::Green));
    match m.unlocker() {
        Some(name) => Line::from(vec![
            check,
            Span::raw("Unlocked by "),
            Span::styled(
                name.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(vec![check, Span::raw(m.label())]),
    }
}

fn leader_lines(leader: &Leader) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            leader.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            trait_summary(&leader.traits),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from("Press Enter to pick this leader."),
    ]
}

/// Comma-separated labels of the traits that are set.
fn trait_summary(traits: &Traits) -> String {
    let labels: Vec<&str> = TraitFilter::ALL
        .into_iter()
        .filter(|f| *f != TraitFilter::All && f.matches(traits))
        .map(TraitFilter::label)
        .collect();
    if labels.is_empty() {
        "no traits".to_string()
    } else {
        labels.join(", ")
    }
}
