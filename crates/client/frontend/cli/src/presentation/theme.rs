//! Colors and modifiers of the standings view.
use client_frontend_core::StatusBadge;
use overlay_runtime::AlertKind;
use ratatui::style::{Color, Modifier, Style};
use standings_core::{ChangeDirection, RowEmphasis};

pub struct Theme;

impl Theme {
    pub fn header() -> Style {
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn row(emphasis: RowEmphasis) -> Style {
        match emphasis {
            RowEmphasis::Normal => Style::default().fg(Color::White),
            RowEmphasis::Absent => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        }
    }

    pub fn change(direction: ChangeDirection) -> Style {
        match direction {
            ChangeDirection::Up => Style::default().fg(Color::Green),
            ChangeDirection::Down => Style::default().fg(Color::Red),
            ChangeDirection::Flat => Style::default().fg(Color::DarkGray),
        }
    }

    pub fn badge(badge: StatusBadge) -> Style {
        let color = match badge {
            StatusBadge::Live => Color::Green,
            StatusBadge::Refreshing => Color::Yellow,
            StatusBadge::Stale => Color::Red,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn tab(selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        }
    }

    pub fn alert(kind: AlertKind) -> Style {
        match kind {
            AlertKind::Success => Style::default().fg(Color::Green),
            AlertKind::Error => Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        }
    }
}
