use std::{fmt::Debug, io::BufWriter, path::Path};

use anyhow::Context;
use chrono::NaiveDate;
use fs_err::File;
use serde::{Deserialize, Serialize};

use crate::location::LocationRecord;

const HEADER: [&str; 3] = ["dd", "lat", "lon"];

/// One row of `coords.csv`, keyed by the creation date.
#[derive(Debug, Serialize, Deserialize)]
struct Row {
    dd: NaiveDate,
    lat: f64,
    lon: f64,
}

pub fn write_coords_csv<P: AsRef<Path> + Debug>(
    path: P,
    records: &[LocationRecord],
) -> anyhow::Result<()> {
    let path = path.as_ref();
    (|| -> anyhow::Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(BufWriter::new(File::create(path)?));
        // Written by hand so that an empty record list still yields a header.
        writer.write_record(HEADER)?;
        for record in records {
            writer.serialize(Row {
                dd: record.created_at(),
                lat: record.latitude(),
                lon: record.longitude(),
            })?;
        }
        writer.flush()?;
        Ok(())
    })()
    .with_context(|| format!("While trying to write coordinates to {path:?}"))
}

/// Reads a file written by [`write_coords_csv`] back into records, in file order.
pub fn read_coords_csv<P: AsRef<Path> + Debug>(path: P) -> anyhow::Result<Vec<LocationRecord>> {
    let path = path.as_ref();
    (|| -> anyhow::Result<Vec<LocationRecord>> {
        csv::Reader::from_reader(File::open(path)?)
            .into_deserialize::<Row>()
            .map(|row| -> anyhow::Result<LocationRecord> {
                let row = row?;
                Ok(LocationRecord::builder()
                    .latitude(row.lat)
                    .longitude(row.lon)
                    .created_at(row.dd)
                    .build())
            })
            .collect()
    })()
    .with_context(|| format!("While trying to read coordinates from {path:?}"))
}
