use std::path::PathBuf;

use clap::Parser;
use fbdash::{
    export::materialize,
    location::{extract::estimated_locations, OnMalformed},
};
use log::info;

/// Plots the locations a Facebook data export estimated from your IP addresses.
#[derive(Parser)]
struct Opts {
    /// Root folder of the export; must contain `html/security.htm`.
    #[arg(long)]
    path: PathBuf,
    /// Folder to save `coords.csv` and `estimated_locations.html` to; created if missing.
    #[arg(long)]
    output: PathBuf,
    /// What to do with a location entry that cannot be parsed.
    #[arg(long, value_enum, default_value_t)]
    on_malformed: OnMalformed,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = Opts::parse();

    let records = estimated_locations(&opts.path, opts.on_malformed)?;
    let artifacts = materialize(&opts.output, &records)?;
    info!(
        "Done: {:?}, {:?}",
        artifacts.coords_csv(),
        artifacts.map_html()
    );
    Ok(())
}
