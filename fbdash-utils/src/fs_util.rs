use std::{fmt::Debug, path::Path};

use anyhow::Context;
use scraper::Html;

pub fn read_html<P: AsRef<Path> + Debug>(path: P) -> anyhow::Result<Html> {
    let path = path.as_ref();
    let text = fs_err::read_to_string(path)
        .with_context(|| format!("While trying to read {path:?} as an HTML document"))?;
    Ok(Html::parse_document(&text))
}

/// Creates `path` and all of its parents. An existing directory is fine.
pub fn ensure_dir<P: AsRef<Path> + Debug>(path: P) -> anyhow::Result<()> {
    let path = path.as_ref();
    fs_err::create_dir_all(path)
        .with_context(|| format!("While trying to create output directory {path:?}"))
}
