//! Display configuration fetched once at startup.
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::ConfigSource;
use crate::events::{Event, EventBus, SessionEvent};
use crate::state::FetchStatus;

/// Rows shown per class when the backend does not say otherwise.
pub const DEFAULT_SHOW_TOP_N: i32 = 10;

/// Settings the backend exposes to the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(rename = "show_topn", default = "default_show_top_n")]
    pub show_top_n: i32,
}

fn default_show_top_n() -> i32 {
    DEFAULT_SHOW_TOP_N
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_top_n: DEFAULT_SHOW_TOP_N,
        }
    }
}

/// Display configuration together with the status of its fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigState {
    pub config: DisplayConfig,
    pub status: FetchStatus,
}

impl ConfigState {
    /// Fetches the configuration once. A failure keeps the defaults.
    pub async fn load(source: &dyn ConfigSource, event_bus: Option<&EventBus>) -> Self {
        let mut state = Self {
            status: FetchStatus::Loading,
            ..Self::default()
        };

        let from_fallback = match source.fetch_configuration().await {
            Ok(config) => {
                info!("display config loaded: show_top_n={}", config.show_top_n);
                state.config = config;
                state.status = FetchStatus::Idle;
                false
            }
            Err(err) => {
                warn!(
                    "display config unavailable ({}), using show_top_n={}",
                    err, DEFAULT_SHOW_TOP_N
                );
                state.status = FetchStatus::Failed;
                true
            }
        };

        if let Some(bus) = event_bus {
            bus.publish(Event::Session(SessionEvent::ConfigLoaded {
                config: state.config,
                from_fallback,
            }));
        }

        state
    }
}
