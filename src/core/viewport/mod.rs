mod viewport;

pub use viewport::{Viewport, ZoomDirection, HOME_ZOOM_WIDTH};
