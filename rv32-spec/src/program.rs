//! # Program Image
//!
//! A flat binary of little-endian 32-bit instruction words. There is no
//! header and no symbol table; the first word sits at address 0.

use crate::error::{Result, Rv32Error};
use crate::INSTRUCTION_SIZE;
use std::fmt;
use std::path::Path;

/// A validated program image
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Program {
    /// Instruction words, in address order
    pub code: Vec<u32>,
}

impl Program {
    /// Create a program from instruction words
    pub fn new(code: Vec<u32>) -> Self {
        Self { code }
    }

    /// Parse a flat image.
    ///
    /// The length must be a non-zero multiple of 4. Nothing is returned for
    /// a rejected image, so a program is never partially loaded.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Rv32Error::EmptyImage);
        }
        if bytes.len() % INSTRUCTION_SIZE as usize != 0 {
            return Err(Rv32Error::InvalidImageSize { len: bytes.len() });
        }

        let code = bytes
            .chunks_exact(INSTRUCTION_SIZE as usize)
            .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Ok(Self { code })
    }

    /// Read and parse an image file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Serialize back to the flat image format
    pub fn to_bytes(&self) -> Vec<u8> {
        self.code.iter().flat_map(|word| word.to_le_bytes()).collect()
    }

    /// Number of instruction words
    #[inline]
    pub fn len(&self) -> usize {
        self.code.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Image size in bytes
    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.code.len() * INSTRUCTION_SIZE as usize
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Program ({} instructions, {} bytes)", self.len(), self.size_bytes())
    }
}
