//! Localized label tables ("placeholders").

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

use crate::constants::*;

pub type Labels = HashMap<String, String>;

pub trait LabelSource {
    fn fetch_labels(&self) -> Result<Labels>;
}

/// No localization available.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLabels;

impl LabelSource for NoLabels {
    fn fetch_labels(&self) -> Result<Labels> {
        Ok(Labels::new())
    }
}

#[derive(Debug, Default, Clone)]
pub struct StaticLabels(pub Labels);

impl StaticLabels {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self(pairs.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }
}

impl LabelSource for StaticLabels {
    fn fetch_labels(&self) -> Result<Labels> {
        Ok(self.0.clone())
    }
}

/// A flat JSON object of `key -> label` read from disk.
#[derive(Debug, Clone)]
pub struct JsonLabels {
    path: PathBuf,
}

impl JsonLabels {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LabelSource for JsonLabels {
    fn fetch_labels(&self) -> Result<Labels> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read labels file {:?}", self.path))?;
        let labels: Labels = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse labels file {:?}", self.path))?;
        Ok(labels)
    }
}

/// Fetches the label table, treating a failing source as an empty table.
pub fn load_labels(source: &dyn LabelSource) -> Labels {
    source.fetch_labels().unwrap_or_else(|e| {
        warn!("Could not fetch labels, falling back to defaults: {:#}", e);
        Labels::new()
    })
}

/// Accessible role description for a carousel. Falls back to the literal
/// default when the table has no usable entry.
pub fn role_description(labels: &Labels) -> String {
    labels
        .get(ROLE_DESCRIPTION_LABEL)
        .filter(|label| !label.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ROLE_DESCRIPTION.to_string())
}
