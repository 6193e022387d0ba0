//! Input handling for the banner strip.

pub mod strip_input_handler;

pub use strip_input_handler::{handle_strip_input, StripInputResult};
