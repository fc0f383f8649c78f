//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use overlay_runtime::RuntimeHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends talk to the runtime through [`RuntimeHandle`] only:
/// - Subscribe to sync and session events
/// - Cycle the selected car class
/// - Query the current sync state
///
/// The owner of the runtime starts polling before handing control to the
/// frontend and stops it once [`Frontend::run`] returns.
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use overlay_runtime::{RuntimeHandle, Topic};
/// use anyhow::Result;
///
/// struct LogFrontend;
///
/// #[async_trait]
/// impl Frontend for LogFrontend {
///     async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
///         let mut events = handle.subscribe(Topic::Sync);
///
///         while let Ok(event) = events.recv().await {
///             println!("{:?}", event);
///         }
///
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}
