//! esdt-prep CLI - prepare the call-data field for ESDT NFT transactions
//!
//! Reads named transaction arguments from a JSON file and prints the
//! hex-encoded call-data string for the selected command on stdout.

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use std::path::PathBuf;

use esdt_prep::{prepare_args, ArgumentBag, Command};

/// Main CLI arguments
#[derive(Parser)]
#[command(name = "esdt-prep")]
#[command(about = "Prepare the data field for a given command from a JSON file")]
#[command(version = "0.1.0")]
struct Args {
    /// Command to prepare
    #[arg(value_enum)]
    command: Command,

    /// Path to the arguments JSON file
    tx_arguments_json: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let raw = std::fs::read_to_string(&args.tx_arguments_json).with_context(|| {
        format!(
            "Failed to read arguments file {}",
            args.tx_arguments_json.display()
        )
    })?;
    let tx_args: ArgumentBag = serde_json::from_str(&raw).with_context(|| {
        format!(
            "Failed to parse arguments file {}",
            args.tx_arguments_json.display()
        )
    })?;
    debug!("Loaded arguments from {}", args.tx_arguments_json.display());

    let tx_data = prepare_args(args.command, &tx_args)?;
    println!("{}", tx_data);

    Ok(())
}
