//! Heat sink thermal resistance calculator.
//!
//! Given the operating junction temperature, the worst-case ambient
//! temperature, the electrical operating point and the device's datasheet
//! resistances, computes the junction-to-ambient budget and the largest
//! sink-to-ambient resistance a heat sink may have.
//!
//! ```text
//! Tj = Ta + (Rjc + Rcs + Rsa) * P
//! Rja = (Tj - Ta) / P
//! Rsa = Rja - Rjc - Rcs
//! ```

pub mod error;
pub mod heatsink;
pub mod prompt;
pub mod report;
pub mod session;

pub use error::{ThermalError, ThermalResult};
pub use heatsink::{HeatsinkInputs, HeatsinkResult, compute};
pub use prompt::{HeatsinkPreset, InputField, prompt_inputs};
pub use report::{BANNER, RESULTS_HEADER, render_report};
pub use session::run_session;
