//! Builds the runtime and runs the startup flows used by front-ends.
use std::sync::Arc;

use anyhow::{Result, bail};
use overlay_runtime::{
    AuthProvider, ConfigSource, ConfigState, FileConfigSource, FileStandingsSource,
    FixtureStandingsSource, LoginSession, LoginState, PastResultsSource, PastResultsState,
    Runtime, StandingsSource, StaticAuthProvider, StaticConfigSource, StaticPastResults,
};

use crate::config::RuntimeConfig;

/// Builder that assembles the runtime, its collaborators, and the outcome of
/// the one-shot startup flows.
///
/// Collaborators that are not injected are derived from [`RuntimeConfig`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    standings: Option<Arc<dyn StandingsSource>>,
    auth: Option<Arc<dyn AuthProvider>>,
    display: Option<Arc<dyn ConfigSource>>,
    past_results: Option<Arc<dyn PastResultsSource>>,
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            standings: None,
            auth: None,
            display: None,
            past_results: None,
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn standings_source(mut self, source: impl StandingsSource + 'static) -> Self {
        self.standings = Some(Arc::new(source));
        self
    }

    pub fn auth_provider(mut self, auth: impl AuthProvider + 'static) -> Self {
        self.auth = Some(Arc::new(auth));
        self
    }

    pub fn config_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.display = Some(Arc::new(source));
        self
    }

    pub fn past_results_source(mut self, source: impl PastResultsSource + 'static) -> Self {
        self.past_results = Some(Arc::new(source));
        self
    }

    pub async fn build(self) -> Result<RuntimeSetup> {
        let standings = match self.standings {
            Some(source) => source,
            None => default_standings(&self.config)?,
        };
        let auth = self.auth.unwrap_or_else(|| {
            Arc::new(StaticAuthProvider::new().allow_test_user(self.config.dev_mode))
        });
        let display: Arc<dyn ConfigSource> = match (self.display, &self.config.config_path) {
            (Some(source), _) => source,
            (None, Some(path)) => Arc::new(FileConfigSource::new(path)),
            (None, None) => Arc::new(StaticConfigSource::default()),
        };
        let past_results = self
            .past_results
            .unwrap_or_else(|| Arc::new(StaticPastResults(true)));

        let runtime = Runtime::builder()
            .config(self.config.runtime_config())
            .shared_standings_source(standings)
            .build()
            .await?;
        let event_bus = runtime.event_bus();

        let mut login = LoginSession::new(auth).with_event_bus(event_bus.clone());
        match &self.config.credentials {
            Some(credentials) => {
                tracing::info!("Logging in as {}", credentials.username);
                login
                    .login(&credentials.username, &credentials.password)
                    .await;
            }
            None => tracing::info!("No credentials configured, skipping login"),
        }

        let display = ConfigState::load(display.as_ref(), Some(&event_bus)).await;
        let past_results =
            PastResultsState::load(past_results.as_ref(), login.is_logged_in(), Some(&event_bus))
                .await;

        Ok(RuntimeSetup {
            runtime,
            login: login.state().clone(),
            display,
            past_results,
        })
    }
}

fn default_standings(config: &RuntimeConfig) -> Result<Arc<dyn StandingsSource>> {
    if let Some(path) = &config.snapshot_path {
        tracing::info!("Reading standings from {}", path.display());
        return Ok(Arc::new(FileStandingsSource::new(path)));
    }

    if config.dev_mode {
        tracing::info!("Dev mode: serving fixture standings");
        return Ok(Arc::new(FixtureStandingsSource::sample()));
    }

    bail!("No standings source configured. Set OVERLAY_SNAPSHOT_PATH or OVERLAY_DEV_MODE.")
}

pub struct RuntimeSetup {
    pub runtime: Runtime,
    pub login: LoginState,
    pub display: ConfigState,
    pub past_results: PastResultsState,
}
