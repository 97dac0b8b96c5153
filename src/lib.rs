//! Render an SVG favicon to PNG.
//!
//! This crate reads an SVG document, rasterizes it at a list of square sizes, encodes
//! each raster as PNG in memory, and writes one of them (32×32 by default) to disk as
//! a fallback favicon for browsers that do not support SVG icons.
//!
//! The entry point is [`Converter`]:
//!
//! ```no_run
//! let conversion = favicon::Converter::new().convert()?;
//! assert_eq!(conversion.images.len(), 7);
//! # Ok::<(), favicon::ConversionError>(())
//! ```
//!
//! For finer control, load a [`SourceImage`] and render it with a [`Rasterizer`]:
//!
//! ```
//! use favicon::{Rasterizer, RenderRequest, SourceImage};
//!
//! let source = SourceImage::from_data(
//!     r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10">
//!          <rect width="10" height="10"/>
//!        </svg>"#,
//! );
//! let image = Rasterizer::new(&source)?.render(RenderRequest::new(24)?)?;
//! assert_eq!(image.dimension, 24);
//! # Ok::<(), favicon::ConversionError>(())
//! ```
//!
//! # Logging
//!
//! Set the `FAVICON_LOG` environment variable to get diagnostic messages on stdout.

#![warn(nonstandard_style, rust_2018_idioms, unused)]
#![forbid(unsafe_code)]

#[macro_use]
pub mod log;

mod convert;
mod error;
mod rasterizer;
mod source;

pub use crate::convert::{
    Conversion, Converter, DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_PATH, PERSISTED_SIZE,
};
pub use crate::error::ConversionError;
pub use crate::rasterizer::{Rasterizer, RenderRequest, RenderedImage, DEFAULT_SIZES};
pub use crate::source::SourceImage;
