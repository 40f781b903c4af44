use std::io::{BufRead, Write};

use crate::error::ThermalResult;
use crate::heatsink::{HeatsinkResult, compute};
use crate::prompt::{HeatsinkPreset, prompt_inputs};
use crate::report::{BANNER, RESULTS_HEADER, render_report};

/// Full console run: banner, prompts, computation, results.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    preset: &HeatsinkPreset,
) -> ThermalResult<HeatsinkResult> {
    writeln!(output, "{BANNER}")?;
    let inputs = prompt_inputs(input, output, preset)?;
    tracing::info!(?inputs, "read calculator inputs");

    let result = compute(&inputs);

    writeln!(output, "{RESULTS_HEADER}")?;
    write!(output, "{}", render_report(&result))?;
    output.flush()?;

    Ok(result)
}
