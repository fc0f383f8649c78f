//! Event handling for the terminal view.
//!
//! The event loop coordinates runtime events, keyboard input, and redraws.

mod r#loop;

pub use r#loop::EventLoop;
