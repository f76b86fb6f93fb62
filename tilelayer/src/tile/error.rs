//! Error types for blank tile encoding.

use thiserror::Error;

use super::blank::MAX_TILE_SIZE;

/// Errors that can occur while building the blank tile payload.
#[derive(Debug, Error)]
pub enum BlankTileError {
    /// Requested edge length is zero or too large
    #[error("Invalid tile size {0}: must be between 1 and {max} pixels", max = MAX_TILE_SIZE)]
    InvalidSize(u32),

    /// PNG encoder rejected the image
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_size_display() {
        let err = BlankTileError::InvalidSize(0);
        assert_eq!(
            err.to_string(),
            "Invalid tile size 0: must be between 1 and 4096 pixels"
        );
    }

    #[test]
    fn test_error_trait() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<BlankTileError>();
    }
}
