use std::path::{Path, PathBuf};

use anyhow::Context;
use fbdash_utils::{fs_util::read_html, selector};
use log::{info, warn};
use scraper::Html;

use super::{
    parser::{parse_entry, PREFIX},
    LocationRecord, OnMalformed,
};

pub fn security_html_path(root: &Path) -> PathBuf {
    root.join("html").join("security.htm")
}

/// Reads `<root>/html/security.htm` and extracts every estimated location in document order.
pub fn estimated_locations(
    root: &Path,
    on_malformed: OnMalformed,
) -> anyhow::Result<Vec<LocationRecord>> {
    let path = security_html_path(root);
    let html = read_html(&path)?;
    info!("Loaded {path:?}");
    extract(&html, on_malformed)
}

pub fn extract(html: &Html, on_malformed: OnMalformed) -> anyhow::Result<Vec<LocationRecord>> {
    let mut scanned = 0;
    let mut records = vec![];
    for text in list_item_texts(html) {
        scanned += 1;
        if !text.starts_with(PREFIX) {
            continue;
        }
        match parse_entry(&text) {
            Ok(record) => records.push(record),
            Err(e) => match on_malformed {
                OnMalformed::Abort => {
                    return Err(e).with_context(|| format!("While parsing list item #{scanned}"))
                }
                OnMalformed::Skip => warn!("Skipping list item #{scanned}: {e}"),
            },
        }
    }
    info!(
        "Scanned {scanned} list items, found {} estimated locations",
        records.len()
    );
    Ok(records)
}

/// Text content of each `<li>`, including that of nested elements.
fn list_item_texts(html: &Html) -> impl Iterator<Item = String> + '_ {
    html.select(selector!("li"))
        .map(|li| li.text().collect::<String>())
}
