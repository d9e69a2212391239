use std::{path::PathBuf, time::Instant};

use anyhow::Result;
use clap::Parser;
use geocsv_application::prelude::*;

use crate::{config::Config, gateways, prompt};

#[derive(Debug, Parser)]
#[command(
    name = "geocsv",
    version,
    about = "Batch-geocode a CSV of postal addresses and compute distances from a reference point"
)]
struct Args {
    /// Input CSV file (prompted for interactively when omitted)
    input: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_deref())?;

    let input = match args.input {
        Some(path) => Some(path),
        None => prompt::select_input_file()?,
    };
    let Some(input) = input else {
        log::info!("No file selected. Exiting program.");
        return Ok(());
    };

    let start_time = Instant::now();
    log::info!("Processing {}", input.display());

    let gateway = gateways::geocoding_gateway(&cfg);
    let params = ProcessParams {
        reference_point: cfg.reference_point,
        distance_unit: cfg.distance_unit,
        address_mode: cfg.address_mode,
    };
    let output = geocode_csv_file(&gateway, &input, &params)?;

    log::info!(
        "Completed in {} seconds: {}",
        start_time.elapsed().as_secs(),
        output.display()
    );
    Ok(())
}
