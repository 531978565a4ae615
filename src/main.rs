use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use huffenc::{EncodeOptions, OutputFormat, compress_file};
use log::{LevelFilter, error};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of the file to encode
    input: PathBuf,

    /// Path of the output file, truncated if it exists
    output: PathBuf,

    /// Output representation of the code bits
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Only print the final status line
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// One '0'/'1' character per bit
    Text,
    /// Bits packed into bytes, MSB first
    Packed,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Packed => OutputFormat::Packed,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let options = EncodeOptions {
        format: args.format.into(),
    };

    match compress_file(&args.input, &args.output, &options) {
        Ok(summary) => {
            if !args.quiet {
                println!("{}", summary.report());
            }
            println!(
                "Successfully encoded file (time elapsed: {}ms)",
                summary.elapsed.as_millis()
            );
        }
        Err(e) if e.is_io() => {
            error!("{e:?}");
            println!("Input file error");
            return Err(e).context("encoding failed");
        }
        Err(e) => return Err(e).context("encoding failed"),
    };

    Ok(())
}
