use std::path::PathBuf;

use crate::error::{VectorError, VectorResult};
use crate::sequence::{SequenceType, sample_count};

/// Widest vector accepted.
///
/// The whole sequence is held in memory before writing, so 2^20 samples
/// (8 MiB of `u64`, a file of at least 22 MB) is the ceiling.
pub const MAX_BIT_WIDTH: u32 = 20;

pub const DEFAULT_FILE_NAME: &str = "test_vectors.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Width of each vector in bits; the sequence holds `2^bit_width` samples.
    pub bit_width: u32,
    /// Times each rendered vector is repeated on its line.
    pub duplication_factor: u32,
    pub sequence_type: SequenceType,
    /// Output file, relative names resolve against the executable's directory.
    pub file_name: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            bit_width: 4,
            duplication_factor: 1,
            sequence_type: SequenceType::Count,
            file_name: PathBuf::from(DEFAULT_FILE_NAME),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> VectorResult<()> {
        sample_count(self.bit_width)?;
        if self.duplication_factor == 0 {
            return Err(VectorError::InvalidConfig {
                what: "duplication factor must be at least 1",
            });
        }
        Ok(())
    }
}
