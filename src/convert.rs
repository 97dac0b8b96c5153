//! The complete favicon conversion: read, render every size, write the fallback PNG.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConversionError;
use crate::rasterizer::{Rasterizer, RenderRequest, RenderedImage, DEFAULT_SIZES};
use crate::source::SourceImage;

/// Where the SVG favicon is read from, relative to the working directory.
pub const DEFAULT_SOURCE_PATH: &str = "./priv/static/images/favicon.svg";

/// Where the PNG fallback is written, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "./priv/static/favicon.png";

/// Size of the PNG fallback that gets written to disk.
pub const PERSISTED_SIZE: u32 = 32;

/// Builder for a favicon conversion.
///
/// `Converter::new()` has the fixed paths and sizes used for a web application's
/// favicon; the `with_*` methods override them.
///
/// # Example:
///
/// ```no_run
/// let conversion = favicon::Converter::new()
///     .with_source("assets/icon.svg")
///     .with_output("public/icon.png")
///     .convert()?;
///
/// for image in &conversion.images {
///     println!("{} bytes at {}px", image.png.len(), image.dimension);
/// }
/// # Ok::<(), favicon::ConversionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    source: PathBuf,
    output: PathBuf,
    sizes: Vec<u32>,
    persisted_size: u32,
}

/// The outcome of [`Converter::convert`].
#[derive(Debug)]
pub struct Conversion {
    /// One image per requested size, in request order.
    pub images: Vec<RenderedImage>,

    /// The file that was written, or `None` if the persisted size was not requested.
    pub written: Option<PathBuf>,
}

impl Default for Converter {
    fn default() -> Self {
        Converter {
            source: PathBuf::from(DEFAULT_SOURCE_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            sizes: DEFAULT_SIZES.to_vec(),
            persisted_size: PERSISTED_SIZE,
        }
    }
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = path.as_ref().to_path_buf();
        self
    }

    /// Sets the path of the PNG fallback.  An existing file there is overwritten.
    pub fn with_output<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output = path.as_ref().to_path_buf();
        self
    }

    /// Sets the sizes to render, in pixels.
    ///
    /// If the list does not contain the persisted size, the images are rendered but
    /// nothing gets written.
    pub fn with_sizes(mut self, sizes: &[u32]) -> Self {
        self.sizes = sizes.to_vec();
        self
    }

    pub fn with_persisted_size(mut self, size: u32) -> Self {
        self.persisted_size = size;
        self
    }

    pub fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Runs the whole conversion.
    ///
    /// All sizes are rendered before anything is written, so a render failure never
    /// touches the output file.
    pub fn convert(&self) -> Result<Conversion, ConversionError> {
        let requests = RenderRequest::from_sizes(&self.sizes)?;

        let source = SourceImage::read_path(&self.source)?;
        let rasterizer = Rasterizer::new(&source)?;
        let images = rasterizer.render_all(&requests)?;

        let written = self.persist(&images)?;

        Ok(Conversion { images, written })
    }

    /// Writes the image for the persisted size, if there is one.
    fn persist(&self, images: &[RenderedImage]) -> Result<Option<PathBuf>, ConversionError> {
        let image = match images.iter().find(|i| i.dimension == self.persisted_size) {
            Some(image) => image,
            None => {
                favicon_log!(
                    "{}x{} was not rendered; not writing {}",
                    self.persisted_size,
                    self.persisted_size,
                    self.output.display()
                );
                return Ok(None);
            }
        };

        fs::write(&self.output, &image.png).map_err(|source| ConversionError::Write {
            path: self.output.clone(),
            source,
        })?;

        favicon_log!("wrote {} bytes to {}", image.png.len(), self.output.display());

        Ok(Some(self.output.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Converter::new();
        assert_eq!(c.source, Path::new("./priv/static/images/favicon.svg"));
        assert_eq!(c.output(), Path::new("./priv/static/favicon.png"));
        assert_eq!(c.sizes(), &[16, 24, 32, 48, 64, 128, 256]);
        assert_eq!(c.persisted_size, 32);
    }

    #[test]
    fn bad_sizes_fail_before_reading() {
        // The source does not exist, but the request is checked first.
        let r = Converter::new()
            .with_source("tests/fixtures/does-not-exist.svg")
            .with_sizes(&[16, 0])
            .convert();
        assert!(matches!(r, Err(ConversionError::InvalidRequest(_))));

        let r = Converter::new()
            .with_source("tests/fixtures/circle.svg")
            .with_sizes(&[])
            .convert();
        assert!(matches!(r, Err(ConversionError::InvalidRequest(_))));
    }
}
