//! Rendering an SVG document to square PNG rasters.

use std::num::NonZeroU32;
use std::sync::Arc;

use once_cell::sync::Lazy;
use rayon::prelude::*;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{self, fontdb};

use crate::error::ConversionError;
use crate::source::SourceImage;

/// Sizes that a favicon is rendered at, in pixels.
pub const DEFAULT_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

// System fonts are scanned once per process and shared by every document.
static FONTS: Lazy<Arc<fontdb::Database>> = Lazy::new(|| {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    favicon_log!("loaded {} font faces", db.len());
    Arc::new(db)
});

/// A square target size for one render.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RenderRequest(NonZeroU32);

impl RenderRequest {
    /// Returns [`ConversionError::InvalidRequest`] if `dimension` is zero.
    pub fn new(dimension: u32) -> Result<Self, ConversionError> {
        NonZeroU32::new(dimension)
            .map(RenderRequest)
            .ok_or_else(|| ConversionError::InvalidRequest("size must be positive".to_string()))
    }

    /// Builds one request per size, keeping their order.
    pub fn from_sizes(sizes: &[u32]) -> Result<Vec<Self>, ConversionError> {
        sizes.iter().map(|&d| RenderRequest::new(d)).collect()
    }

    pub fn dimension(self) -> u32 {
        self.0.get()
    }
}

/// A PNG raster of `dimension × dimension` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub dimension: u32,
    pub png: Vec<u8>,
}

/// A parsed SVG document, ready to be rendered at any number of sizes.
///
/// Rendering never mutates the document, so a `Rasterizer` can render several sizes
/// in parallel; see [`Rasterizer::render_all`].
pub struct Rasterizer {
    tree: usvg::Tree,
}

impl Rasterizer {
    /// Parses the SVG document in `source`.
    ///
    /// Relative references to external images are resolved against the directory of
    /// the source file, if it came from one.
    pub fn new(source: &SourceImage) -> Result<Self, ConversionError> {
        let mut opt = usvg::Options::default();
        opt.resources_dir = source.resources_dir();
        opt.fontdb = Arc::clone(&FONTS);

        let tree = usvg::Tree::from_data(source.as_bytes(), &opt)?;

        let size = tree.size();
        favicon_log!("document size is {} x {}", size.width(), size.height());

        Ok(Rasterizer { tree })
    }

    /// Renders the document at `request`'s size and encodes it as PNG.
    pub fn render(&self, request: RenderRequest) -> Result<RenderedImage, ConversionError> {
        let dimension = request.dimension();
        let pixmap = self.render_pixmap(dimension)?;
        let png = pixmap
            .encode_png()
            .map_err(|e| ConversionError::encode(dimension, e))?;

        favicon_log!("rendered {}x{} ({} bytes)", dimension, dimension, png.len());

        Ok(RenderedImage { dimension, png })
    }

    /// Renders every request, in parallel.
    ///
    /// The returned images are in the same order as `requests`.  If any render fails,
    /// the whole call fails.
    pub fn render_all(
        &self,
        requests: &[RenderRequest],
    ) -> Result<Vec<RenderedImage>, ConversionError> {
        if requests.is_empty() {
            return Err(ConversionError::InvalidRequest(
                "no sizes were requested".to_string(),
            ));
        }

        requests.par_iter().map(|&r| self.render(r)).collect()
    }

    fn render_pixmap(&self, dimension: u32) -> Result<Pixmap, ConversionError> {
        let mut pixmap = Pixmap::new(dimension, dimension)
            .ok_or_else(|| ConversionError::encode(dimension, "cannot allocate raster"))?;

        resvg::render(
            &self.tree,
            cover_transform(self.tree.size(), dimension),
            &mut pixmap.as_mut(),
        );

        Ok(pixmap)
    }
}

/// Scales `size` uniformly so that it covers a `dimension` square, centered.
///
/// Square documents fit exactly.  For other aspect ratios, the overflow of the longer
/// side is clipped equally at both ends.
fn cover_transform(size: usvg::Size, dimension: u32) -> Transform {
    let target = dimension as f32;
    let scale = (target / size.width()).max(target / size.height());

    let dx = (target - size.width() * scale) / 2.0;
    let dy = (target - size.height() * scale) / 2.0;

    Transform::from_row(scale, 0.0, 0.0, scale, dx, dy)
}
