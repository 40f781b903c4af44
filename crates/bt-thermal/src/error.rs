//! Error types for the calculator console session.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThermalError {
    #[error("Could not parse {field} from input {input:?}")]
    Parse { field: &'static str, input: String },

    #[error("Input ended before {field} was entered")]
    UnexpectedEof { field: &'static str },

    #[error("Console I/O error")]
    Io(#[from] std::io::Error),
}

pub type ThermalResult<T> = Result<T, ThermalError>;
