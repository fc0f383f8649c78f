//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration required to bootstrap the overlay runtime.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub poll_interval: Duration,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// JSON snapshot file maintained by the standings backend.
    pub snapshot_path: Option<PathBuf>,
    /// JSON display configuration (`{"show_topn": N}`).
    pub config_path: Option<PathBuf>,
    /// Canned standings and the `test` login.
    pub dev_mode: bool,
    pub session_id: Option<String>,
    pub credentials: Option<Credentials>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        let runtime = overlay_runtime::RuntimeConfig::default();
        Self {
            poll_interval: runtime.poll_interval,
            event_buffer_size: runtime.event_buffer_size,
            command_buffer_size: runtime.command_buffer_size,
            snapshot_path: None,
            config_path: None,
            dev_mode: false,
            session_id: None,
            credentials: None,
        }
    }
}

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `OVERLAY_POLL_INTERVAL_MS` - Standings poll period (default: 3000, min: 1)
    /// - `OVERLAY_EVENT_BUFFER` - Event bus capacity per topic (default: 100)
    /// - `OVERLAY_COMMAND_BUFFER` - Sync worker queue size (default: 32)
    /// - `OVERLAY_SNAPSHOT_PATH` - Backend snapshot file
    /// - `OVERLAY_CONFIG_PATH` - Display configuration file
    /// - `OVERLAY_DEV_MODE` - Use fixture standings and accept the `test` user
    /// - `OVERLAY_SESSION_ID` - Session identifier for log files
    /// - `OVERLAY_USERNAME` / `OVERLAY_PASSWORD` - Login credentials
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("OVERLAY_POLL_INTERVAL_MS") {
            config.poll_interval = Duration::from_millis(ms.max(1));
        }
        if let Some(capacity) = read_env::<usize>("OVERLAY_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("OVERLAY_COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }

        config.snapshot_path = env::var("OVERLAY_SNAPSHOT_PATH").ok().map(PathBuf::from);
        config.config_path = env::var("OVERLAY_CONFIG_PATH").ok().map(PathBuf::from);

        if let Some(enable) = read_env_bool("OVERLAY_DEV_MODE") {
            config.dev_mode = enable;
        }

        config.session_id = env::var("OVERLAY_SESSION_ID").ok();

        if let Ok(username) = env::var("OVERLAY_USERNAME") {
            config.credentials = Some(Credentials {
                username,
                password: env::var("OVERLAY_PASSWORD").unwrap_or_default(),
            });
        }

        config
    }

    /// Settings handed to [`overlay_runtime::Runtime`].
    pub fn runtime_config(&self) -> overlay_runtime::RuntimeConfig {
        overlay_runtime::RuntimeConfig {
            poll_interval: self.poll_interval,
            event_buffer_size: self.event_buffer_size,
            command_buffer_size: self.command_buffer_size,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
