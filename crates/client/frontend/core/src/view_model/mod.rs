//! View model for the live standings.
//!
//! [`StandingsViewModel`] is owned by a frontend's event loop and updated
//! incrementally from runtime events; [`StandingsView`] is the immutable frame
//! it produces for rendering.
mod core;
mod frame;

pub use self::core::StandingsViewModel;
pub use frame::{ClassTab, Footer, HEADER, StandingsBody, StandingsView, StatusBadge, row_cells};
