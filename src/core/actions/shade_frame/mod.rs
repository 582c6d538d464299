pub mod ports;
pub mod shade_frame;
