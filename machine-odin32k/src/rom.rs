//! ROM image loading.
//!
//! Odin32K ROM banks are raw 8192-byte binaries. Short files are
//! zero-padded; oversized files are truncated. The vectors live in the
//! top six bytes of ROM0: NMI at $1FFA/$1FFB (mapped $FFFA/$FFFB), reset
//! at $1FFC/$1FFD, IRQ/BRK at $1FFE/$1FFF.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Size of one ROM bank: 8 KiB.
pub const ROM_SIZE: usize = 8192;

#[derive(Debug, Error)]
pub enum RomError {
    #[error("failed to read ROM image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One 8 KiB ROM bank.
pub struct RomImage {
    data: [u8; ROM_SIZE],
}

impl RomImage {
    /// Build an image from raw bytes, zero-padding or truncating to size.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut data = [0u8; ROM_SIZE];
        let len = bytes.len().min(ROM_SIZE);
        data[..len].copy_from_slice(&bytes[..len]);
        Self { data }
    }

    /// Load an image from a file.
    pub fn load(path: &Path) -> Result<Self, RomError> {
        let bytes = fs::read(path).map_err(|source| RomError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if bytes.len() > ROM_SIZE {
            log::warn!(
                "{}: {} bytes, truncating to {}",
                path.display(),
                bytes.len(),
                ROM_SIZE
            );
        } else if bytes.len() < ROM_SIZE {
            log::debug!(
                "{}: {} bytes, zero-padding to {}",
                path.display(),
                bytes.len(),
                ROM_SIZE
            );
        }
        Ok(Self::from_bytes(&bytes))
    }

    pub fn data(&self) -> &[u8; ROM_SIZE] {
        &self.data
    }

    /// Reset vector as it will appear at $FFFC/$FFFD.
    pub fn reset_vector(&self) -> u16 {
        u16::from_le_bytes([self.data[0x1FFC], self.data[0x1FFD]])
    }

    /// NMI vector as it will appear at $FFFA/$FFFB.
    pub fn nmi_vector(&self) -> u16 {
        u16::from_le_bytes([self.data[0x1FFA], self.data[0x1FFB]])
    }

    /// IRQ/BRK vector as it will appear at $FFFE/$FFFF.
    pub fn irq_vector(&self) -> u16 {
        u16::from_le_bytes([self.data[0x1FFE], self.data[0x1FFF]])
    }
}
