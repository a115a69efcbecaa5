use std::path::PathBuf;

use clap::Parser;
use hohmann_calculator::config::Catalog;
use hohmann_calculator::export::{json, report};
use hohmann_calculator::transfer::plan_transfer;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Hohmann transfer calculator (coplanar, departure burn)"
)]
struct Cli {
    /// Origin body name (case-insensitive)
    #[arg(long, default_value = "Earth")]
    from: String,

    /// Target body name (case-insensitive)
    #[arg(long, default_value = "Mars")]
    to: String,

    /// Body catalog: YAML file, TOML file, or directory of TOML files (defaults to built-in)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// List catalog bodies and exit
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Write the plan as JSON to this path (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print coplanar circular two-burn Hohmann estimate (Δv, TOF)
    #[arg(long, default_value_t = false)]
    estimate_hohmann: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };
    debug!(bodies = catalog.len(), "catalog ready");

    if cli.list {
        for name in catalog.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let mut plan = plan_transfer(&catalog, &cli.from, &cli.to)?;
    if !cli.estimate_hohmann {
        plan.estimate = None;
    }

    let json_to_stdout = cli.json.as_deref() == Some(std::path::Path::new("-"));
    if !json_to_stdout {
        print!("{}", report::render(&plan.record()));
    }
    if let Some(path) = &cli.json {
        json::write_plan(path, &plan.record())?;
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
