use crate::core::data::pixel_rect::PixelRect;
use crate::core::params::frame_params::FrameParams;

/// One frame's render job: the target pixel rect plus the frozen parameter
/// block. `PartialEq` enables change detection so unchanged frames are not
/// re-rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRequest {
    pub pixel_rect: PixelRect,
    pub params: FrameParams,
}
