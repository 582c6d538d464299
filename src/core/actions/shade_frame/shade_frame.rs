use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::shade_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ShadeFrameError {
    Cancelled(Cancelled),
    ColourMap(Box<dyn Error>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for ShadeFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for ShadeFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourMap(err) => err.source(),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

/// Maps evaluated samples to an RGB pixel buffer.
pub fn shade_frame<T, CMap: ColourMap<T>>(
    samples: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, ShadeFrameError> {
    shade_frame_cancelable(samples, mapper, pixel_rect, &NeverCancel)
}

/// Like [`shade_frame`], but polls a cancellation token every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub fn shade_frame_cancelable<T, CMap, C>(
    samples: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
    cancel: &C,
) -> Result<PixelBuffer, ShadeFrameError>
where
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let buffer_size = (pixel_rect.size() * 3) as usize;
    let mut buffer: PixelBufferData = Vec::with_capacity(buffer_size);

    for (i, sample) in samples.into_iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(ShadeFrameError::Cancelled(Cancelled));
        }

        let Colour { r, g, b } = mapper.map(sample).map_err(ShadeFrameError::ColourMap)?;

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    PixelBuffer::from_data(pixel_rect, buffer).map_err(ShadeFrameError::PixelBuffer)
}
