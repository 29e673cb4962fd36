//! Custom error types for region selection and image operations

use std::fmt;
use std::io;

/// cvkit error types
#[derive(Debug)]
pub enum CvKitError {
    /// I/O error
    IoError(io::Error),
    /// Error from the image crate while decoding or encoding
    ImageError(image::ImageError),
    /// Region or raster size is zero or larger than the raster allows
    InvalidSize { width: u32, height: u32, max_width: u32, max_height: u32 },
    /// Requested position lies outside the raster
    InvalidPosition { x: i64, y: i64, width: u32, height: u32 },
    /// A parameter outside its accepted range
    InvalidParameter(String),
    /// Malformed configuration
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for CvKitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CvKitError::IoError(e) => write!(f, "I/O error: {}", e),
            CvKitError::ImageError(e) => write!(f, "Image error: {}", e),
            CvKitError::InvalidSize { width, height, max_width, max_height } => write!(
                f,
                "Invalid region size {}x{} (must be non-zero and at most {}x{})",
                width, height, max_width, max_height
            ),
            CvKitError::InvalidPosition { x, y, width, height } => write!(
                f,
                "Position ({}, {}) is outside the {}x{} raster",
                x, y, width, height
            ),
            CvKitError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            CvKitError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CvKitError::GenericError(msg) => write!(f, "cvkit error: {}", msg),
        }
    }
}

impl std::error::Error for CvKitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CvKitError::IoError(e) => Some(e),
            CvKitError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CvKitError {
    fn from(error: io::Error) -> Self {
        CvKitError::IoError(error)
    }
}

impl From<image::ImageError> for CvKitError {
    fn from(error: image::ImageError) -> Self {
        CvKitError::ImageError(error)
    }
}

impl From<String> for CvKitError {
    fn from(msg: String) -> Self {
        CvKitError::GenericError(msg)
    }
}

/// Result type for cvkit operations
pub type CvKitResult<T> = Result<T, CvKitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_size_message() {
        let err = CvKitError::InvalidSize { width: 0, height: 5, max_width: 10, max_height: 10 };
        assert_eq!(
            err.to_string(),
            "Invalid region size 0x5 (must be non-zero and at most 10x10)"
        );
    }

    #[test]
    fn test_from_string() {
        let err: CvKitError = "boom".to_string().into();
        assert!(matches!(err, CvKitError::GenericError(ref m) if m == "boom"));
    }
}
