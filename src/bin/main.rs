mod common;
use std::env::{set_var, var};
use std::error::Error;

use clap::Parser;
use log::{info, warn};

use common::helpers::{apply_overrides, demo_samples, load_config, AppError};
use et0::{
    modules::hargreaves::{config::HargreavesConfig, models::HargreavesModel},
    version::LONG_VERSION,
    DateInput,
};

#[derive(Parser, Debug)]
#[command(
    version,
    long_version=LONG_VERSION,
    allow_negative_numbers = true,
    about="Daily reference evapotranspiration (ET0) with the Hargreaves-Samani method",
    long_about="Estimates the daily reference evapotranspiration from minimum and maximum air temperature,
the date and the latitude. Without inputs, prints the ET0 of two sample days."
)]
struct Args {
    #[arg(help = "Minimum air temperature [°C]", index = 1)]
    tmin: Option<f64>,

    #[arg(help = "Maximum air temperature [°C]", index = 2)]
    tmax: Option<f64>,

    #[arg(help = "Date in the format YYYY-MM-DD", index = 3)]
    date: Option<String>,

    #[arg(long, help = "Latitude [°], valid between 0 and 67")]
    lat: Option<f64>,

    #[arg(long, help = "Latent heat of vaporization [MJ/kg]")]
    lam: Option<f64>,

    #[arg(long, help = "Radiation adjustment coefficient kRs")]
    krs: Option<f64>,

    #[arg(long, help = "Climate preset for kRs: interior or coastal")]
    climate: Option<String>,

    #[arg(long, help = "Path to a YAML configuration file")]
    config: Option<String>,
}

fn run(
    model: &HargreavesModel,
    tmin: Option<f64>,
    tmax: Option<f64>,
    date: &DateInput,
) -> Result<(), AppError> {
    match model.compute(tmin, tmax, date)? {
        Some(et0) => println!("{}", et0),
        None => println!("None"),
    }
    Ok(())
}

/// main function
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if var("RUST_LOG").is_err() {
        set_var("RUST_LOG", "info")
    }
    pretty_env_logger::init();

    let config = match &args.config {
        Some(path) => load_config(path).map_err(|err| format!("Failed to load config: {}", err))?,
        None => HargreavesConfig::default(),
    };
    let config = apply_overrides(
        config,
        args.lat,
        args.lam,
        args.krs,
        args.climate.as_deref(),
    )?;
    let model = HargreavesModel::try_new(config).map_err(AppError::from)?;
    info!(
        "Latitude {}, lambda {} MJ/kg, kRs {}",
        model.config.latitude,
        model.config.latent_heat,
        model.config.effective_krs()
    );

    if args.tmin.is_none() && args.tmax.is_none() && args.date.is_none() {
        for (tmin, tmax, date) in demo_samples() {
            if let Err(err) = run(&model, tmin, tmax, &date) {
                warn!("Error computing ET0: {}", err);
            }
        }
        return Ok(());
    }

    let date = DateInput::from(args.date);
    run(&model, args.tmin, args.tmax, &date)?;
    Ok(())
}
