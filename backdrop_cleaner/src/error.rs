// THEORY:
// A single error enum carries every failure a cleanup run can hit. Decode failures
// abort a run before any pixel is touched. Encode and I/O failures happen after
// processing; the output file is only replaced once the encoded bytes are fully
// on disk, so the original survives either way.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CleanupError {
    /// The input file is missing, unreadable, or not a valid image.
    #[error("failed to decode {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The processed grid could not be encoded.
    #[error("failed to encode {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Writing the encoded bytes or replacing the output file failed.
    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output extension does not name a format the codec can write.
    #[error("cannot infer an image format from {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A background color override that is neither `r,g,b` nor `#rrggbb`.
    #[error("invalid color {0:?}: expected `r,g,b` or `#rrggbb`")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, CleanupError>;
