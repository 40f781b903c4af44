use std::io;
use std::process::ExitCode;

use bt_core::{as_watts, error_chain};
use bt_thermal::{HeatsinkPreset, ThermalResult, run_session};
use clap::{ArgAction, Parser};
use tracing::Level;

#[derive(Parser)]
#[command(name = "bt-heatsink")]
#[command(about = "Heat sink thermal resistance calculator", long_about = None)]
struct Cli {
    /// Operating junction temperature (°C); prompted for when omitted
    #[arg(long, allow_negative_numbers = true)]
    tj: Option<f64>,
    /// Max. ambient operating temperature (°C)
    #[arg(long, allow_negative_numbers = true)]
    ta: Option<f64>,
    /// Voltage drop across junction (V)
    #[arg(long, allow_negative_numbers = true)]
    vdrop: Option<f64>,
    /// Current at full load (A)
    #[arg(long, allow_negative_numbers = true)]
    current: Option<f64>,
    /// Junction to case thermal resistance (°C/W)
    #[arg(long, allow_negative_numbers = true)]
    rjc: Option<f64>,
    /// Case to heatsink thermal resistance (°C/W)
    #[arg(long, allow_negative_numbers = true)]
    rcs: Option<f64>,
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn preset(&self) -> HeatsinkPreset {
        HeatsinkPreset {
            temp_junction_c: self.tj,
            temp_ambient_c: self.ta,
            voltage_drop_v: self.vdrop,
            current_a: self.current,
            r_junction_case: self.rjc,
            r_case_sink: self.rcs,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", error_chain(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> ThermalResult<()> {
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let result = run_session(&mut input, &mut output, &cli.preset())?;

    if let Err(err) = result.check_finite() {
        tracing::warn!(power_w = as_watts(result.power), "{err}");
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use bt_thermal::ThermalError;

    #[test]
    fn errors_read_as_messages() {
        let err = ThermalError::Parse {
            field: "ambient temperature",
            input: "warm".to_string(),
        };
        assert_eq!(
            error_chain(&err),
            "Could not parse ambient temperature from input \"warm\""
        );

        let err = ThermalError::from(io::Error::other("broken pipe"));
        assert_eq!(error_chain(&err), "Console I/O error: broken pipe");
    }

    #[test]
    fn flags_fill_the_preset() {
        let cli = Cli::try_parse_from(["bt-heatsink", "--tj", "100", "--ta", "-20"]).unwrap();
        let preset = cli.preset();
        assert_eq!(preset.temp_junction_c, Some(100.0));
        assert_eq!(preset.temp_ambient_c, Some(-20.0));
        assert_eq!(preset.current_a, None);
    }
}
