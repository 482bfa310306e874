use std::{fmt::Debug, path::Path};

use anyhow::Context;
use itertools::Itertools;
use log::debug;
use serde::Serialize;

use crate::location::LocationRecord;

pub const ZOOM: u8 = 4;
pub const POPUP_DATE_FORMAT: &str = "%m/%d/%y";

struct TileLayer {
    url: &'static str,
    attribution: &'static str,
}

/// The light, label-sparse CARTO basemap also known as `cartodbpositron`.
const CARTODB_POSITRON: TileLayer = TileLayer {
    url: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
    attribution: r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors &copy; <a href="https://carto.com/attributions">CARTO</a>"#,
};

#[derive(Serialize)]
struct Marker {
    lat: f64,
    lon: f64,
    popup: String,
}

/// Midpoint of the latitude range and of the longitude range, or `None` without records.
pub fn map_center(records: &[LocationRecord]) -> Option<(f64, f64)> {
    let (lat_min, lat_max) = records
        .iter()
        .map(|r| r.latitude())
        .minmax()
        .into_option()?;
    let (lon_min, lon_max) = records
        .iter()
        .map(|r| r.longitude())
        .minmax()
        .into_option()?;
    Some(((lat_min + lat_max) / 2., (lon_min + lon_max) / 2.))
}

pub fn render_map(records: &[LocationRecord]) -> anyhow::Result<String> {
    let (lat, lon) = map_center(records)
        .context("No estimated locations were found, so there is nothing to center the map on")?;
    debug!("Map center: ({lat}, {lon})");
    let markers = records
        .iter()
        .map(|r| Marker {
            lat: r.latitude(),
            lon: r.longitude(),
            popup: r.created_at().format(POPUP_DATE_FORMAT).to_string(),
        })
        .collect_vec();
    Ok(format!(
        include_str!("map_template.html"),
        center = script_json(&[lat, lon])?,
        zoom = ZOOM,
        tile_url = script_json(CARTODB_POSITRON.url)?,
        attribution = script_json(CARTODB_POSITRON.attribution)?,
        markers = script_json(&markers)?,
    ))
}

pub fn write_map<P: AsRef<Path> + Debug>(path: P, records: &[LocationRecord]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let html = render_map(records)?;
    fs_err::write(path, html).with_context(|| format!("While trying to save the map to {path:?}"))
}

/// JSON that is safe to paste inside a `<script>` element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", r"<\/"))
}
