//! View layer
//!
//! The screen the console front end draws: balance and loan lines, the six
//! controls with their enabled state, and the last message.

pub mod controls;
pub mod render;

pub use controls::Control;
pub use render::{render, Screen};
