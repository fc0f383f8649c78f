//! UI rendering entry point composing all widgets.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::presentation::{terminal::Tui, widgets};
use crate::state::AppState;
use client_frontend_core::{StandingsBody, StandingsView};

/// Rendering context containing all state needed for one frame.
pub struct RenderContext<'a> {
    pub view: &'a StandingsView,
    pub app_state: &'a AppState,
}

/// Draws the header, the selected class table, the footer, and the login
/// banner when one is pending.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| {
        let alert_height = if ctx.app_state.alert.is_some() { 3 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(alert_height),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        if let Some(alert) = &ctx.app_state.alert {
            widgets::alert::render(frame, chunks[0], alert);
        }

        widgets::header::render(frame, chunks[1], ctx.view);

        match &ctx.view.body {
            StandingsBody::Table { rows, footer } => {
                widgets::table::render(frame, chunks[2], rows);
                widgets::footer::render(frame, chunks[3], footer);
            }
            StandingsBody::Waiting => {
                widgets::placeholder::render(frame, chunks[2], "Waiting for standings...");
            }
            StandingsBody::NoClass => {
                widgets::placeholder::render(frame, chunks[2], "No standings for this class");
            }
        }
    })?;

    Ok(())
}
