//! signrep - Binary representation tables
//!
//! Prints how the same bit pattern reads as unsigned, signed magnitude and
//! two's complement, and how signed values are encoded.

mod demo;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use common::{logging, OutputFormat, SignrepConfig};
use serde::Serialize;
use signrep_core::{
    compare_representations, encode_signed_representations, special_patterns,
    twos_complement_steps, BigInt, BitString, SignKind,
};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "signrep")]
#[command(about = "Unsigned, signed magnitude and two's complement side by side")]
#[command(long_about = "Unsigned, signed magnitude and two's complement side by side

Examples:
  signrep demo                    # Full walk-through
  signrep compare 0101 1101 1000  # Three readings of each pattern
  signrep decode 1101 --kind tc   # One reading
  signrep encode -23 --width 8    # Signed encodings of a value
  signrep range --width 8         # Representable ranges")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (toml, yaml or json)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides configuration)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full walk-through
    Demo,

    /// Read each bit pattern under all three encodings
    Compare {
        /// Bit patterns, e.g. 1101
        #[arg(required = true)]
        bits: Vec<String>,
    },

    /// Read one bit pattern
    Decode {
        bits: String,

        /// unsigned, signed-magnitude or twos-complement (default: all)
        #[arg(short, long)]
        kind: Option<SignKind>,
    },

    /// Encode a value as signed magnitude and two's complement
    Encode {
        #[arg(allow_negative_numbers = true)]
        value: BigInt,

        /// Bit width (default from configuration)
        #[arg(short, long)]
        width: Option<usize>,
    },

    /// Representable range of each encoding
    Range {
        #[arg(short, long)]
        width: Option<usize>,
    },

    /// Landmark patterns: zero, max positive, minimum, all ones
    Special {
        #[arg(short, long)]
        width: Option<usize>,
    },
}

#[derive(Serialize)]
struct RangeRow {
    kind: SignKind,
    #[serde(flatten)]
    range: signrep_core::ValueRange,
    zero_patterns: Vec<BitString>,
}

#[derive(Serialize)]
struct DecodedRow<'a> {
    binary: &'a BitString,
    kind: SignKind,
    #[serde(serialize_with = "signrep_core::serde_helpers::serialize_bigint")]
    value: BigInt,
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    text.push('\n');
    Ok(text)
}

/// Execute one command and return what goes to stdout
fn run(command: &Commands, config: &SignrepConfig) -> Result<String> {
    let json = config.format == OutputFormat::Json;
    let color = config.color;
    debug!(?config, "effective configuration");

    match command {
        Commands::Demo => {
            let demo = demo::Demo::build(config.default_width)?;
            if json {
                to_json(&demo)
            } else {
                demo.render(color)
            }
        },
        Commands::Compare { bits } => {
            let rows = bits
                .iter()
                .map(|b| {
                    compare_representations(b).with_context(|| format!("Invalid bit string '{}'", b))
                })
                .collect::<Result<Vec<_>>>()?;
            if json {
                to_json(&rows)
            } else {
                Ok(render::comparison_table(&rows, color))
            }
        },
        Commands::Decode { bits, kind } => {
            let parsed = BitString::parse(bits)
                .with_context(|| format!("Invalid bit string '{}'", bits))?;
            match kind {
                Some(kind) => {
                    let value = parsed.decode(*kind);
                    if json {
                        to_json(&DecodedRow {
                            binary: &parsed,
                            kind: *kind,
                            value,
                        })
                    } else {
                        Ok(format!("{} as {} = {}\n", parsed, kind, value))
                    }
                },
                None => {
                    let row = compare_representations(bits)?;
                    if json {
                        to_json(&row)
                    } else {
                        Ok(render::comparison_table(&[row], color))
                    }
                },
            }
        },
        Commands::Encode { value, width } => {
            let width = width.unwrap_or(config.default_width);
            let enc = encode_signed_representations(value.clone(), width)
                .with_context(|| format!("Cannot encode {} in {} bits", value, width))?;
            let steps = twos_complement_steps(value.clone(), width)?;
            if json {
                to_json(&serde_json::json!({ "encodings": enc, "steps": steps }))
            } else {
                let mut out = render::encodings(&enc);
                if let Some(steps) = &steps {
                    out.push_str(&render::steps(steps));
                }
                Ok(out)
            }
        },
        Commands::Range { width } => {
            let width = width.unwrap_or(config.default_width);
            if json {
                let rows = SignKind::ALL
                    .iter()
                    .map(|&kind| {
                        Ok(RangeRow {
                            kind,
                            range: kind.range(width)?,
                            zero_patterns: kind.zero_patterns(width)?,
                        })
                    })
                    .collect::<signrep_core::Result<Vec<_>>>()?;
                to_json(&rows)
            } else {
                render::range_table(width, color)
            }
        },
        Commands::Special { width } => {
            let width = width.unwrap_or(config.default_width);
            let rows = special_patterns(width)
                .with_context(|| format!("Special patterns need at least 2 bits, got {}", width))?;
            if json {
                to_json(&rows)
            } else {
                Ok(render::special_table(&rows, color))
            }
        },
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        common::load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.no_color {
        config.color = false;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    // Configure colored output
    if !config.color {
        colored::control::set_override(false);
    }

    let log_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    logging::init(log_level, config.color)?;

    let output = run(&cli.command, &config)?;
    print!("{}", output);
    Ok(())
}
