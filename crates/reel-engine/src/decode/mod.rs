//! `image`-crate implementations of the decoder and resize collaborators.

mod image_source;
mod resize;

pub use image_source::DecodedImage;
pub use resize::{ImageResizer, KeepSize};
