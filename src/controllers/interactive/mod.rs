//! Interactive controller for real-time fractal rendering.
//!
//! The GUI submits one immutable [`data::frame_request::FrameRequest`]
//! snapshot per frame; a worker thread always renders the newest one and
//! abandons anything it superseded. Completed frames flow back through the
//! [`ports::presenter::RenderPresenterPort`].

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
