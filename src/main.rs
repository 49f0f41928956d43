use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use tree_carbon_forecaster::{
    config::EngineConfig,
    engine::{estimate_co2e, Forecaster},
    io,
    visualization::{print_catalog_table, print_forecast_summary, print_forecast_table},
};

#[derive(Parser)]
#[command(
    name = "carbon-forecaster",
    about = "Tree growth and carbon sequestration forecaster",
    version,
    author
)]
struct Cli {
    /// Optional TOML config overriding proxy species, default density, and
    /// curated species images
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast growth and carbon storage for a tree
    Forecast {
        /// Growth-coefficient reference table (CSV)
        #[arg(long)]
        coefficients: PathBuf,

        /// Biomass density reference table (CSV)
        #[arg(long)]
        densities: PathBuf,

        /// Species name (scientific or common, free text)
        #[arg(short, long)]
        species: String,

        /// Measured diameter at breast height in cm
        #[arg(short, long)]
        dbh: f64,

        /// Number of years to project
        #[arg(short, long, default_value = "20")]
        years: u32,

        /// Export the series to a file (.csv or .json)
        #[arg(long)]
        export: Option<PathBuf>,

        /// Pretty-print JSON export
        #[arg(long)]
        pretty: bool,
    },

    /// List the deduplicated species catalog from the reference tables
    Catalog {
        /// Growth-coefficient reference table (CSV)
        #[arg(long)]
        coefficients: PathBuf,

        /// Biomass density reference table (CSV)
        #[arg(long)]
        densities: PathBuf,

        /// Only show species whose name contains this text
        #[arg(long)]
        search: Option<String>,
    },

    /// One-shot carbon estimate for known tree dimensions
    Estimate {
        /// Diameter at breast height in cm
        #[arg(short, long)]
        dbh: f64,

        /// Total height in m
        #[arg(long)]
        height: f64,

        /// Wood density in kg/m^3
        #[arg(long, default_value = "550.0")]
        density: f64,
    },
}

fn load_config(path: &Option<PathBuf>) -> Result<EngineConfig> {
    match path {
        Some(path) => Ok(EngineConfig::from_toml_file(path)?),
        None => Ok(EngineConfig::default()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::Forecast {
            coefficients,
            densities,
            species,
            dbh,
            years,
            export,
            pretty,
        } => {
            let coefficients = io::read_growth_coefficients(&coefficients)?;
            let densities = io::read_biomass_densities(&densities)?;
            println!(
                "  Loaded {} coefficient records and {} density records",
                coefficients.len(),
                densities.len()
            );

            let forecaster = Forecaster::with_config(&densities, &coefficients, config);
            let resolved = forecaster.resolve(&species);
            let result = forecaster.forecast(&species, dbh, years);

            print_forecast_summary(&species, &resolved, &result);
            print_forecast_table(&result);

            if let Some(out) = export {
                let ext = out
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("")
                    .to_lowercase();
                match ext.as_str() {
                    "csv" => io::write_forecast_csv(&result, &out)?,
                    "json" => io::write_forecast_json(&result, &out, pretty)?,
                    _ => anyhow::bail!("Unsupported export format: .{ext}. Use .csv or .json"),
                }
                println!("{} Exported to {}", "Success:".green().bold(), out.display());
            }
        }

        Commands::Catalog {
            coefficients,
            densities,
            search,
        } => {
            let coefficients = io::read_growth_coefficients(&coefficients)?;
            let densities = io::read_biomass_densities(&densities)?;

            let forecaster = Forecaster::with_config(&densities, &coefficients, config);
            let mut catalog = forecaster.catalog();

            if let Some(query) = search {
                let query = query.to_lowercase();
                catalog.retain(|s| {
                    s.scientific_name.to_lowercase().contains(&query)
                        || s.common_name.to_lowercase().contains(&query)
                });
            }

            print_catalog_table(&catalog);
        }

        Commands::Estimate {
            dbh,
            height,
            density,
        } => {
            let co2e = estimate_co2e(dbh, height, density);
            println!("\n{}", "Carbon Estimate".bold().cyan());
            println!("{}", "=".repeat(40));
            println!("  DBH:          {dbh:.1} cm");
            println!("  Height:       {height:.1} m");
            println!("  Wood density: {density:.0} kg/m3");
            println!("  Stored:       {co2e:.2} kg CO2e");
        }
    }

    Ok(())
}
