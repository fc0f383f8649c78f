//! Event loop orchestrating runtime events, user input, and rendering.
//!
//! This module coordinates three concerns:
//! - Runtime event consumption and view model updates
//! - Keyboard input (class cycling, banner dismissal, quit)
//! - Rendering the current [`StandingsView`](client_frontend_core::StandingsView)

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use overlay_runtime::{Event as RuntimeEvent, RuntimeHandle};
use tokio::{
    sync::{broadcast, broadcast::error::RecvError},
    time::{self, Duration},
};

use crate::{
    input::{InputHandler, KeyAction},
    presentation::{
        terminal::Tui,
        ui::{self, RenderContext},
    },
    state::AppState,
};
use client_frontend_core::StandingsViewModel;

/// Event loop owning the view model for the lifetime of the view.
pub struct EventLoop {
    handle: RuntimeHandle,
    sync_rx: broadcast::Receiver<RuntimeEvent>,
    session_rx: broadcast::Receiver<RuntimeEvent>,
    view_model: StandingsViewModel,
    app_state: AppState,
    input: InputHandler,
    input_poll: Duration,
}

impl EventLoop {
    pub fn new(
        handle: RuntimeHandle,
        sync_rx: broadcast::Receiver<RuntimeEvent>,
        session_rx: broadcast::Receiver<RuntimeEvent>,
        view_model: StandingsViewModel,
        app_state: AppState,
        input_poll: Duration,
    ) -> Self {
        Self {
            handle,
            sync_rx,
            session_rx,
            view_model,
            app_state,
            input: InputHandler::new(),
            input_poll,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.render(terminal)?;

        loop {
            tokio::select! {
                result = self.sync_rx.recv() => {
                    if self.handle_runtime_event(result, terminal).await? {
                        break;
                    }
                }
                result = self.session_rx.recv() => {
                    if self.handle_runtime_event(result, terminal).await? {
                        break;
                    }
                }
                _ = time::sleep(self.input_poll) => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    /// Applies a runtime event to the view model. Returns true to exit.
    async fn handle_runtime_event(
        &mut self,
        result: Result<RuntimeEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                if self.view_model.apply(&event).requires_redraw {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale events, resyncing", skipped);
                self.resync().await?;
                self.render(terminal)?;
                Ok(false)
            }
        }
    }

    /// Rebuilds the view model from the authoritative state.
    async fn resync(&mut self) -> Result<()> {
        let state = self.handle.query_state().await?;
        self.view_model.resync(&state);
        Ok(())
    }

    /// Poll for keyboard input. Returns true to exit.
    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    async fn handle_key_press(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<bool> {
        match self.input.handle_key(key) {
            KeyAction::Quit => Ok(true),
            KeyAction::CycleClass => {
                // The redraw follows from the SelectionChanged event.
                match self.handle.cycle_selected_class().await {
                    Ok(selected) => {
                        tracing::debug!("Cycled to car class {}", selected);
                        Ok(false)
                    }
                    Err(e) => {
                        tracing::error!("Failed to cycle class: {}", e);
                        Ok(true)
                    }
                }
            }
            KeyAction::DismissAlert => {
                if self.app_state.dismiss_alert() {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            KeyAction::None => Ok(false),
        }
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        let view = self.view_model.view();
        ui::render(
            terminal,
            &RenderContext {
                view: &view,
                app_state: &self.app_state,
            },
        )
    }
}
