//! The leader list and the three era lists.

use crate::app::{App, Column};
use crate::data::Era;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render_column(frame: &mut Frame, area: Rect, app: &App, column: Column) {
    let focused = app.focus() == column;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = match column {
        Column::Leaders => match app.selection().leader() {
            Some(leader) => format!(" {} · {} ", column.title(), leader.name),
            None => format!(" {} ", column.title()),
        },
        Column::Era(era) => match app.selection().selected(era) {
            Some(civ) => format!(" {} · {} ", column.title(), civ.name),
            None => format!(" {} ", column.title()),
        },
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let items = match column {
        Column::Leaders => leader_items(app),
        Column::Era(era) => civilization_items(app, era),
    };

    if items.is_empty() {
        let empty = List::new(vec![ListItem::new(Span::styled(
            "  (nothing to show)",
            Style::default().fg(Color::DarkGray),
        ))])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let highlight = if focused {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol(if focused { "▶ " } else { "  " });

    let mut state = ListState::default().with_selected(Some(app.cursor(column)));
    frame.render_stateful_widget(list, area, &mut state);
}

fn leader_items(app: &App) -> Vec<ListItem<'static>> {
    let selected_id = app.selection().leader().map(|l| l.id.clone());
    app.leaders()
        .iter()
        .map(|leader| {
            let is_selected = selected_id.as_deref() == Some(leader.id.as_str());
            let style = if is_selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if is_selected { "● " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(leader.name.clone(), style),
            ]))
        })
        .collect()
}

fn civilization_items(app: &App, era: Era) -> Vec<ListItem<'static>> {
    let selected_id = app.selection().selected(era).map(|c| c.id.clone());
    app.civilizations(era)
        .iter()
        .map(|civ| {
            let unlocked = app.status(era, civ).is_unlocked();
            let is_selected = selected_id.as_deref() == Some(civ.id.as_str());

            let style = if is_selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if unlocked {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_selected {
                "● "
            } else if unlocked {
                "✔ "
            } else {
                "  "
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(civ.name.clone(), style),
            ]))
        })
        .collect()
}
