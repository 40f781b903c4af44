//! Vector sequence generation.

use core::fmt;

use rand::Rng;

use crate::config::MAX_BIT_WIDTH;
use crate::error::{VectorError, VectorResult};

/// Ordering of the generated vectors.
///
/// Parsing never fails: names other than `count`, `random` and `gray` become
/// [`SequenceType::Unrecognized`], which generates no vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceType {
    /// `0, 1, ..., 2^n - 1`
    Count,
    /// `2^n` independent uniform draws, repeats allowed
    Random,
    /// Reflected binary Gray code
    Gray,
    Unrecognized(String),
}

impl From<&str> for SequenceType {
    fn from(name: &str) -> Self {
        match name {
            "count" => SequenceType::Count,
            "random" => SequenceType::Random,
            "gray" => SequenceType::Gray,
            other => SequenceType::Unrecognized(other.to_string()),
        }
    }
}

impl core::str::FromStr for SequenceType {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SequenceType::from(s))
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceType::Count => f.write_str("count"),
            SequenceType::Random => f.write_str("random"),
            SequenceType::Gray => f.write_str("gray"),
            SequenceType::Unrecognized(name) => f.write_str(name),
        }
    }
}

/// Number of vectors in a sequence of width `bit_width`.
///
/// Fails for widths above [`MAX_BIT_WIDTH`].
pub fn sample_count(bit_width: u32) -> VectorResult<u64> {
    if bit_width > MAX_BIT_WIDTH {
        return Err(VectorError::WidthTooLarge {
            bit_width,
            max: MAX_BIT_WIDTH,
        });
    }
    Ok(1_u64 << bit_width)
}

pub fn count_sequence(bit_width: u32) -> VectorResult<Vec<u64>> {
    Ok((0..sample_count(bit_width)?).collect())
}

/// Gray codes of width `bit_width`: `gray(i) = i ^ (i >> 1)`.
pub fn gray_code(bit_width: u32) -> VectorResult<Vec<u64>> {
    Ok((0..sample_count(bit_width)?).map(|i| i ^ (i >> 1)).collect())
}

pub fn random_sequence<R: Rng>(bit_width: u32, rng: &mut R) -> VectorResult<Vec<u64>> {
    let samples = sample_count(bit_width)?;
    Ok((0..samples).map(|_| rng.random_range(0..samples)).collect())
}

/// Builds the sequence for `kind`. `rng` is only drawn from for [`SequenceType::Random`].
///
/// The width is checked for every kind, including [`SequenceType::Unrecognized`].
pub fn generate<R: Rng>(
    kind: &SequenceType,
    bit_width: u32,
    rng: &mut R,
) -> VectorResult<Vec<u64>> {
    match kind {
        SequenceType::Count => count_sequence(bit_width),
        SequenceType::Random => random_sequence(bit_width, rng),
        SequenceType::Gray => gray_code(bit_width),
        SequenceType::Unrecognized(_) => {
            sample_count(bit_width)?;
            Ok(Vec::new())
        }
    }
}
