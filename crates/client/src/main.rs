//! Live standings overlay binary.
//!
//! This binary is the composition root that assembles:
//! 1. Runtime (polling and sync state) via RuntimeBuilder
//! 2. Frontend (UI) - terminal for now
//!
//! # Examples
//!
//! ```bash
//! # Offline run against canned standings
//! OVERLAY_DEV_MODE=1 OVERLAY_USERNAME=test cargo run -p overlay-client
//!
//! # Against the backend's snapshot file
//! OVERLAY_SNAPSHOT_PATH=/path/to/standings.json cargo run -p overlay-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the terminal frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{RuntimeBuilder, RuntimeConfig};
    use client_frontend_cli::{CliFrontend, FrontendConfig, logging};
    use overlay_client::Client;

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(&runtime_config.session_id)?;

    tracing::info!("Starting standings overlay");
    tracing::info!("Poll interval: {:?}", runtime_config.poll_interval);
    tracing::info!("Dev mode: {}", runtime_config.dev_mode);

    // 3. Build Runtime and run the startup flows
    tracing::debug!("Building runtime...");
    let setup = RuntimeBuilder::new().config(runtime_config).build().await?;

    tracing::info!(
        "Runtime built: logged_in={} show_top_n={} past_results={}",
        setup.login.ok,
        setup.display.config.show_top_n,
        setup.past_results.got_results
    );

    // 4. Build Frontend
    let frontend = CliFrontend::new(frontend_config)
        .with_login(setup.login)
        .with_display(setup.display.config);

    // 5. Build and run
    let client = Client::builder()
        .runtime(setup.runtime)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
