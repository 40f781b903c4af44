use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use bt_core::error_chain;
use bt_vectors::{
    DEFAULT_FILE_NAME, GeneratorConfig, MAX_BIT_WIDTH, SequenceType, VectorResult, generate_file,
    resolve_output_path,
};
use clap::{ArgAction, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "bt-vecgen")]
#[command(about = "Binary test vector generator", long_about = None)]
struct Cli {
    /// Bit width of test vectors
    #[arg(
        short = 'n',
        long = "bit-width",
        default_value_t = 4,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_BIT_WIDTH))
    )]
    bit_width: u32,
    /// Duplication factor (also accepted as -df)
    #[arg(
        long = "df",
        visible_alias = "duplication-factor",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    duplication_factor: u32,
    /// Sequence type of test vectors: count, random or gray
    #[arg(short = 't', long = "sequence-type", default_value = "count")]
    sequence_type: String,
    /// Filename of generated text file, relative to this executable
    #[arg(short = 'f', long = "file", default_value = DEFAULT_FILE_NAME)]
    file: PathBuf,
    /// Seed for the random sequence
    #[arg(long)]
    seed: Option<u64>,
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            bit_width: self.bit_width,
            duplication_factor: self.duplication_factor,
            sequence_type: SequenceType::from(self.sequence_type.as_str()),
            file_name: self.file.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", error_chain(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> VectorResult<()> {
    let config = cli.config();
    let path = resolve_output_path(&config.file_name)?;

    let lines = match cli.seed {
        Some(seed) => generate_file(&config, &path, &mut StdRng::seed_from_u64(seed))?,
        None => generate_file(&config, &path, &mut rand::rng())?,
    };

    tracing::info!(
        path = %path.display(),
        lines,
        sequence_type = %config.sequence_type,
        "test vectors written"
    );
    Ok(())
}

/// Rewrites the single-dash `-df` flag into clap's `--df`.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args {
        if passthrough {
            out.push(arg);
            continue;
        }
        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some("-df") => Some(OsString::from("--df")),
            Some(s) if s.starts_with("-df=") => Some(OsString::from(format!("-{s}"))),
            _ => None,
        };
        out.push(rewritten.unwrap_or(arg));
    }
    out
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
