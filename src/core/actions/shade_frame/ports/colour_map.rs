use crate::core::data::colour::Colour;
use std::error::Error;

/// Maps per-pixel evaluation results to display colours.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Result<Colour, Box<dyn Error>>;
}
