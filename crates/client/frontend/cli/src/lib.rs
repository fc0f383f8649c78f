//! Terminal UI frontend for the live standings overlay.
//!
//! This crate implements the `client_frontend_core::Frontend` trait with
//! ratatui and crossterm.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives a RuntimeHandle for communication
//! - Does NOT own the Runtime or the polling lifecycle
//! - Subscribes to sync/session events and cycles the selected class via the handle

mod app;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
