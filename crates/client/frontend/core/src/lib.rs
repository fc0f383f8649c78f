//! Cross-frontend primitives for presenting the live standings.
//!
//! Houses the frontend contract, event impact tracking, and the standings
//! view model that both the terminal view and future graphical clients reuse.
pub mod config;
pub mod event;
pub mod frontend;
pub mod view_model;

pub use config::{FrontendConfig, InputConfig};
pub use event::EventImpact;
pub use frontend::Frontend;
pub use view_model::{
    ClassTab, Footer, HEADER, StandingsBody, StandingsView, StandingsViewModel, StatusBadge,
    row_cells,
};
