use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use farmhaul_cli::commands::estimate::{handle_estimate_command, EstimateArgs};
use farmhaul_cli::commands::vehicles::handle_list_vehicles;
use farmhaul_cli::output::{print_footer, print_logo, OutputFormat};

#[derive(Parser, Debug)]
#[command(author, version, about = "Transport cost calculator for farm produce")]
struct Cli {
    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Suppress the banner and timing footer.
    #[arg(long, global = true)]
    no_logo: bool,

    /// Load vehicles from a CSV file instead of the built-in catalog.
    #[arg(long, global = true)]
    vehicle_data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate the cost, trips and travel time of moving a load.
    Estimate(EstimateArgs),
    /// List the vehicles available for estimates.
    Vehicles,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let decorate = !cli.no_logo && cli.format == OutputFormat::Text;
    let started = Instant::now();
    if decorate {
        print_logo();
    }

    let vehicle_data = cli.vehicle_data.as_deref();
    match &cli.command {
        Command::Estimate(args) => handle_estimate_command(vehicle_data, cli.format, args)?,
        Command::Vehicles => handle_list_vehicles(vehicle_data, cli.format)?,
    }

    if decorate {
        print_footer(started.elapsed());
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
