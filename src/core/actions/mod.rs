pub mod cancellation;
pub mod evaluate_frame;
pub mod shade_frame;
