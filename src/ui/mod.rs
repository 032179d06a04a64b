mod columns;
mod detail_panel;
pub mod responsive;

use crate::app::{App, Column};
use crate::selection::TraitFilter;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use responsive::{render_too_small, LayoutContext, SizeTier};

/// Draw one frame of the picker.
pub fn draw(frame: &mut Frame, app: &App) {
    let ctx = LayoutContext::from_frame(frame);
    if ctx.tier == SizeTier::TooSmall {
        render_too_small(frame, &ctx);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Filter bar
            Constraint::Min(0),    // Lists + details
            Constraint::Length(1), // Help
        ])
        .split(frame.size());

    let title = Paragraph::new("Civilization Unlock Paths")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    render_filter_bar(frame, chunks[1], app.filter());

    match ctx.tier {
        SizeTier::Full => draw_full(frame, chunks[2], app),
        _ => draw_compact(frame, chunks[2], app),
    }

    let help = Paragraph::new(
        "[←/→] Column  [↑/↓] Move  [Enter] Pick  [f/F] Filter  [c] Clear  [q] Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_full(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);

    for (column, col_area) in Column::ALL.iter().zip(cols.iter()) {
        columns::render_column(frame, *col_area, app, *column);
    }
    detail_panel::render_detail_panel(frame, rows[1], app);
}

fn draw_compact(frame: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    columns::render_column(frame, halves[0], app, app.focus());
    detail_panel::render_detail_panel(frame, halves[1], app);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, active: TraitFilter) {
    let mut spans = vec![Span::styled("Filter: ", Style::default().fg(Color::White))];
    for filter in TraitFilter::ALL {
        let style = if filter == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
