//! Widgets of the standings screen.
pub mod alert;
pub mod footer;
pub mod header;
pub mod placeholder;
pub mod table;
