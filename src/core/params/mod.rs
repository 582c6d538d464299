pub mod frame_params;
pub mod julia_constant;
