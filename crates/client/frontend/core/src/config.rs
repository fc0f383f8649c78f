//! Frontend configuration structures and loaders.
//!
//! UI-specific settings shared across frontend implementations.
use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    /// Overrides the backend's `show_topn` when set.
    pub show_top_n: Option<i32>,
    pub input: InputConfig,
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `OVERLAY_SHOW_TOP_N` - Rows per class, ignoring the fetched configuration
    /// - `OVERLAY_INPUT_POLL_MS` - Keyboard poll period (default: 16)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.show_top_n = read_env::<i32>("OVERLAY_SHOW_TOP_N");

        if let Some(ms) = read_env::<u64>("OVERLAY_INPUT_POLL_MS") {
            config.input.poll_interval_ms = ms.max(1);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct InputConfig {
    pub poll_interval_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 16,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
