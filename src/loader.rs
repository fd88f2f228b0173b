//! Authored rows from disk: either a JSON rows document or a directory of
//! images, one slide per image.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;

use crate::config::CarouselConfig;
use crate::content::{Block, Row};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

#[derive(Debug, Deserialize)]
struct RowsDocument {
    #[serde(default)]
    interval: Option<Value>,
    rows: Vec<Row>,
}

/// What a block of authored content looks like before decoration.
#[derive(Debug, Clone, PartialEq)]
pub struct Authored {
    pub rows: Vec<Row>,
    /// Interval authored alongside the rows, if any.
    pub config: Option<CarouselConfig>,
}

fn interval_config(value: &Value) -> CarouselConfig {
    match value {
        Value::Number(n) => CarouselConfig::with_interval(
            n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)).unwrap_or(0),
        ),
        Value::String(s) => CarouselConfig::from_attribute(Some(s.as_str())),
        _ => CarouselConfig::disabled(),
    }
}

pub fn load_authored(source: &Path) -> Result<Authored> {
    if source.is_dir() {
        let rows = load_sorted_image_paths(source)?.into_iter().map(image_row).collect();
        return Ok(Authored { rows, config: None });
    }

    let raw = fs::read_to_string(source).with_context(|| format!("Failed to read rows document {:?}", source))?;
    let document: RowsDocument =
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse rows document {:?}", source))?;
    Ok(Authored {
        rows: document.rows,
        config: document.interval.as_ref().map(interval_config),
    })
}

fn image_row(path: PathBuf) -> Row {
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    Row::new(vec![Block::image(path, name.clone()), Block::text(name)])
}

pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path).with_context(|| format!("Failed to read directory {:?}", dir_path))?;

    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if !path.is_file() {
            continue;
        }
        let is_image = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()));
        if is_image {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        bail!("No image files found in directory: {:?}", dir_path);
    }
    Ok(paths)
}
