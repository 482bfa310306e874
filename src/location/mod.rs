pub mod extract;
pub mod parser;

use chrono::NaiveDate;
use getset::CopyGetters;
use typed_builder::TypedBuilder;

/// One location the export estimated from an IP address, with the day it was recorded.
#[derive(Clone, Copy, PartialEq, Debug, TypedBuilder, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct LocationRecord {
    latitude: f64,
    longitude: f64,
    created_at: NaiveDate,
}

/// What to do with a list item that carries the location prefix but not the expected sentence.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, clap::ValueEnum)]
pub enum OnMalformed {
    /// Stop the whole run with the parse error.
    #[default]
    Abort,
    /// Log a warning and leave the entry out.
    Skip,
}
