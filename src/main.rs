use anyhow::{Context, Result};
use clap::Parser;
use filmstat::Catalog;
use filmstat::report::{self, ReportOptions};
use polars::prelude::IdxSize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// Exploratory report over a semicolon separated film catalog.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Catalog to read
    #[arg(default_value = "film.csv")]
    path: PathBuf,

    /// Rows shown by every section, instead of each section's default
    #[arg(long)]
    rows: Option<u32>,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let catalog = Catalog::load(&args.path)
        .with_context(|| format!("loading {}", args.path.display()))?;

    let options = ReportOptions {
        rows: args.rows.map(IdxSize::from),
    };
    report::run(&catalog, &options, &mut std::io::stdout().lock())?;
    info!("done");
    Ok(())
}
