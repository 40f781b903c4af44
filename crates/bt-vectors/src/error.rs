//! Error types for vector generation and output.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum VectorError {
    #[error("Bit width {bit_width} exceeds the maximum of {max}")]
    WidthTooLarge { bit_width: u32, max: u32 },

    #[error("Invalid generator configuration: {what}")]
    InvalidConfig { what: &'static str },

    #[error("Failed to write vector file: {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Executable has no parent directory: {path}")]
    ExecutableDir { path: PathBuf },

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

pub type VectorResult<T> = Result<T, VectorError>;
