//! The SVG document being converted.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConversionError;

/// Raw bytes of an SVG document.
///
/// A `SourceImage` is read once and never modified afterwards.  Renders at different
/// sizes borrow it, so it can be shared across threads.
#[derive(Debug, Clone)]
pub struct SourceImage {
    data: Vec<u8>,
    path: Option<PathBuf>,
}

impl SourceImage {
    /// Reads an SVG document from `path`.
    ///
    /// Returns [`ConversionError::Read`] if the file is missing or unreadable.  The
    /// contents are not validated here; that happens in [`Rasterizer::new`].
    ///
    /// [`Rasterizer::new`]: crate::Rasterizer::new
    pub fn read_path<P: AsRef<Path>>(path: P) -> Result<Self, ConversionError> {
        let path = path.as_ref();

        let data = fs::read(path).map_err(|source| ConversionError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        favicon_log!("read {} bytes from {}", data.len(), path.display());

        Ok(SourceImage {
            data,
            path: Some(path.to_path_buf()),
        })
    }

    /// Wraps SVG data that is already in memory.
    pub fn from_data(data: impl Into<Vec<u8>>) -> Self {
        SourceImage {
            data: data.into(),
            path: None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The file this document was read from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Directory against which relative references in the document are resolved.
    pub(crate) fn resources_dir(&self) -> Option<PathBuf> {
        self.path
            .as_ref()
            .and_then(|p| fs::canonicalize(p).ok())
            .and_then(|p| p.parent().map(Path::to_path_buf))
    }
}
