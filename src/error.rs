//! Error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can happen while converting an SVG favicon.
///
/// A whole run fails with the first error that happens; there is no partial success.
/// Match on the variant to find out which stage failed.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The SVG source could not be read.
    #[error("could not read \"{}\": {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The SVG data is malformed or cannot be rasterized.
    #[error("could not decode SVG: {0}")]
    Decode(#[from] resvg::usvg::Error),

    /// A raster could not be allocated or encoded as PNG.
    #[error("could not encode {dimension}x{dimension} PNG: {reason}")]
    Encode { dimension: u32, reason: String },

    /// The PNG could not be written to its output path.
    #[error("could not write \"{}\": {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The requested sizes are not usable.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ConversionError {
    pub(crate) fn encode(dimension: u32, reason: impl ToString) -> Self {
        ConversionError::Encode {
            dimension,
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn read_error_names_the_path() {
        let e = ConversionError::Read {
            path: PathBuf::from("priv/static/images/favicon.svg"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };

        assert_eq!(
            e.to_string(),
            "could not read \"priv/static/images/favicon.svg\": No such file or directory"
        );
        assert!(e.source().is_some());
    }

    #[test]
    fn encode_error_names_the_size() {
        let e = ConversionError::encode(48, "out of memory");
        assert_eq!(e.to_string(), "could not encode 48x48 PNG: out of memory");
    }
}
