pub mod coords_csv;
pub mod map;

use std::path::{Path, PathBuf};

use fbdash_utils::fs_util::ensure_dir;
use getset::Getters;
use log::info;

use crate::location::LocationRecord;

pub const COORDS_CSV: &str = "coords.csv";
pub const MAP_HTML: &str = "estimated_locations.html";

#[derive(Debug, Getters)]
#[getset(get = "pub")]
pub struct Artifacts {
    coords_csv: PathBuf,
    map_html: PathBuf,
}

/// Writes `coords.csv` and `estimated_locations.html` into `output`, creating it if needed.
///
/// The CSV is written first, so it exists even when there are no records to put on a map.
pub fn materialize(output: &Path, records: &[LocationRecord]) -> anyhow::Result<Artifacts> {
    ensure_dir(output)?;

    let coords_csv = output.join(COORDS_CSV);
    coords_csv::write_coords_csv(&coords_csv, records)?;
    info!("Wrote {} rows to {coords_csv:?}", records.len());

    let map_html = output.join(MAP_HTML);
    map::write_map(&map_html, records)?;
    info!("Saved the map to {map_html:?}");

    Ok(Artifacts {
        coords_csv,
        map_html,
    })
}
