//! # Error Types for RV32 program images

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Rv32Error {
    #[error("Empty program image")]
    EmptyImage,

    #[error("Invalid program image size: {len} bytes is not a multiple of 4")]
    InvalidImageSize { len: usize },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl Rv32Error {
    /// Check if this error was caused by the image contents rather than I/O
    pub fn is_malformed_image(&self) -> bool {
        matches!(self, Rv32Error::EmptyImage | Rv32Error::InvalidImageSize { .. })
    }
}

pub type Result<T> = std::result::Result<T, Rv32Error>;
