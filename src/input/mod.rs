//! Input adapters for the fractal explorer.

#[cfg(feature = "gui")]
pub mod gui;
