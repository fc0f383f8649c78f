//! Top-level client orchestrating the runtime and a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (polling, sync state, event bus)
//!   └─→ Frontend (UI layer - terminal, GUI, etc.)
//! ```
//!
//! The client owns the polling lifecycle: polling starts when the frontend
//! mounts and stops when it returns, before the runtime shuts down.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use overlay_runtime::Runtime;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` receives an already built runtime and a frontend
/// 2. `Client::run()` starts polling
/// 3. `Client::run()` transfers control to the frontend until the user quits
/// 4. Polling is stopped and the runtime is shut down, even if the frontend
///    failed
pub struct Client {
    runtime: Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend exits.
    pub async fn run(self) -> Result<()> {
        let Client {
            mut runtime,
            mut frontend,
        } = self;

        runtime.start_polling().await?;

        let frontend_result = frontend.run(runtime.handle()).await;

        let stopped = runtime.stop_polling().await;
        let shut_down = runtime.shutdown().await;

        frontend_result?;
        stopped?;
        shut_down?;
        Ok(())
    }
}
