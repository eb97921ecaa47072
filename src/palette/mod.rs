//! Color helpers outside the transcoder.
//!
//! - `pixels`: decoded RGB buffers and their average color
//! - `sample`: table mapping sampled colors to resource names
//! - `chroma`: time-based rainbow colors

pub mod chroma;
pub mod pixels;
pub mod sample;

pub use chroma::{chroma_color, chroma_color_now, hsb_to_rgb, ChromaSettings};
pub use pixels::{PixelBuffer, PixelError};
pub use sample::ColorSampleTable;
