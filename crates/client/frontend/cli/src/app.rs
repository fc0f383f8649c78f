//! Glue code tying the runtime handle and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;
use overlay_runtime::{DisplayConfig, LoginState, RuntimeHandle, Topic};
use tokio::time::Duration;

use crate::event::EventLoop;
use crate::presentation::terminal;
use crate::state::AppState;
use client_frontend_core::{Frontend, FrontendConfig, StandingsViewModel};

/// Terminal frontend.
///
/// Startup flows run before the frontend exists, so their outcomes are handed
/// in here instead of being replayed from the event bus.
pub struct CliFrontend {
    config: FrontendConfig,
    login: LoginState,
    display: DisplayConfig,
}

impl CliFrontend {
    pub fn new(config: FrontendConfig) -> Self {
        Self {
            config,
            login: LoginState::default(),
            display: DisplayConfig::default(),
        }
    }

    /// Show the banner left by the startup login.
    pub fn with_login(mut self, login: LoginState) -> Self {
        self.login = login;
        self
    }

    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    async fn execute(&self, handle: RuntimeHandle) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        // Subscribe before the query.
        let sync_rx = handle.subscribe(Topic::Sync);
        let session_rx = handle.subscribe(Topic::Session);
        let initial_state = handle.query_state().await?;

        let mut view_model = StandingsViewModel::from_state(&initial_state);
        match self.config.show_top_n {
            Some(top_n) => view_model.pin_top_n(top_n),
            None => view_model.set_top_n(self.display.show_top_n),
        }

        let event_loop = EventLoop::new(
            handle,
            sync_rx,
            session_rx,
            view_model,
            AppState::from_login(&self.login),
            Duration::from_millis(self.config.input.poll_interval_ms),
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!("CLI frontend exiting");

        Ok(())
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        self.execute(handle).await
    }
}
