pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;
pub mod storage;

pub use controllers::snapshot::render_snapshot;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
