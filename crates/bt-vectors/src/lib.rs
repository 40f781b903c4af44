//! Binary test vector generation.
//!
//! Produces text files of fixed-width binary vectors for use as stimulus in
//! digital circuit simulation and verification testbenches (for example,
//! loaded through VHDL's TEXTIO package). One vector per line, each rendered
//! `bit_width` characters wide and optionally repeated on its line.
//!
//! Stages are independent: [`generate`] builds the sequence,
//! [`render_line`] serializes one vector, and [`write_vector_file`] owns the
//! output file.

pub mod config;
pub mod error;
pub mod output;
pub mod sequence;
pub mod serialize;

pub use config::{DEFAULT_FILE_NAME, GeneratorConfig, MAX_BIT_WIDTH};
pub use error::{VectorError, VectorResult};
pub use output::{resolve_against, resolve_output_path, write_vector_file, write_vectors};
pub use sequence::{
    SequenceType, count_sequence, generate, gray_code, random_sequence, sample_count,
};
pub use serialize::{render_line, render_vector};

use std::path::Path;

use rand::Rng;

/// Validate `config`, generate its sequence and write it to `path`.
///
/// Returns the number of lines written.
pub fn generate_file<R: Rng>(
    config: &GeneratorConfig,
    path: &Path,
    rng: &mut R,
) -> VectorResult<usize> {
    config.validate()?;

    let vectors = generate(&config.sequence_type, config.bit_width, rng)?;
    if let SequenceType::Unrecognized(name) = &config.sequence_type {
        tracing::warn!(
            sequence_type = %name,
            "unrecognized sequence type, writing an empty file"
        );
    }

    write_vector_file(path, &vectors, config.bit_width, config.duplication_factor)
}
