//! Header widget: backend status, class switcher, and freshness badge.
use client_frontend_core::StandingsView;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, view: &StandingsView) {
    let mut spans = Vec::with_capacity(view.classes.len() * 2 + 3);

    for tab in &view.classes {
        spans.push(Span::styled(format!(" {} ", tab.name), Theme::tab(tab.selected)));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::raw("| "));
    spans.push(Span::styled(view.badge.label(), Theme::badge(view.badge)));

    let title = if view.status_line.is_empty() {
        " Standings ".to_string()
    } else {
        format!(" {} ", view.status_line)
    };

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(paragraph, area);
}
