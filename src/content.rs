//! Authored content: rows as they come from the page, and the blocks a slide
//! takes ownership of.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Element attributes, ordered so markup output is stable.
pub type Attributes = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default)]
    pub label: String,
    /// `Some(-1)` removes the link from sequential keyboard navigation.
    #[serde(skip)]
    pub tab_index: Option<i32>,
}

impl Link {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self { href: href.into(), label: label.into(), tab_index: None }
    }

    pub fn is_tab_reachable(&self) -> bool {
        self.tab_index.is_none_or(|i| i >= 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Text { text: String },
    Image {
        src: PathBuf,
        #[serde(default)]
        alt: String,
    },
    Link(Link),
}

impl Block {
    pub fn text(text: impl Into<String>) -> Self {
        Block::Text { text: text.into() }
    }

    pub fn image(src: impl Into<PathBuf>, alt: impl Into<String>) -> Self {
        Block::Image { src: src.into(), alt: alt.into() }
    }

    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Block::Link(Link::new(href, label))
    }
}

/// One authored row. Becomes one slide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub attrs: Attributes,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Row {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { attrs: Attributes::new(), blocks }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Moves the content out, leaving the row empty.
    pub fn take_content(&mut self) -> Vec<Block> {
        std::mem::take(&mut self.blocks)
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Carries editor provenance from an authored element onto a generated one.
pub trait AuthoringMetadata {
    fn copy(&self, source: &Attributes, target: &mut Attributes);
}

/// Copies the Universal Editor instrumentation attributes.
#[derive(Debug, Default, Clone, Copy)]
pub struct EditorInstrumentation;

const INSTRUMENTATION_PREFIXES: [&str; 2] = ["data-aue-", "data-richtext-"];

impl AuthoringMetadata for EditorInstrumentation {
    fn copy(&self, source: &Attributes, target: &mut Attributes) {
        for (key, value) in source {
            if INSTRUMENTATION_PREFIXES.iter().any(|p| key.starts_with(p)) {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}
