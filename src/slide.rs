use crate::content::{Attributes, AuthoringMetadata, Block, Link, Row};
use crate::labels::Labels;

#[derive(Debug)]
pub struct Slide {
    pub index: usize,
    pub content: Vec<Block>,
    pub attrs: Attributes,

    // aria-hidden
    pub hidden: bool,
}

impl Slide {
    pub fn new(index: usize, content: Vec<Block>) -> Self {
        Self {
            index,
            content,
            attrs: Attributes::new(),
            hidden: false,
        }
    }

    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.content.iter().filter_map(|block| match block {
            Block::Link(link) => Some(link),
            _ => None,
        })
    }

    pub fn links_mut(&mut self) -> impl Iterator<Item = &mut Link> {
        self.content.iter_mut().filter_map(|block| match block {
            Block::Link(link) => Some(link),
            _ => None,
        })
    }

    /// Adds or removes every link of the slide from the tab order.
    pub fn set_links_reachable(&mut self, reachable: bool) {
        for link in self.links_mut() {
            link.tab_index = if reachable { None } else { Some(-1) };
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub label: String,
    pub progress_width: u8, // percent
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub label: String,
}

/// Prev/next buttons and the indicator list. Only built for two or more slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationChrome {
    pub prev: Option<Control>,
    pub next: Option<Control>,
    pub indicators: Vec<Indicator>,
}

fn label_or(labels: &Labels, key: &str, default: &str) -> String {
    labels
        .get(key)
        .filter(|l| !l.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

impl NavigationChrome {
    pub fn new(slide_count: usize, labels: &Labels) -> Option<Self> {
        if slide_count < 2 {
            return None;
        }

        let show_slide = label_or(labels, "showSlide", "Show Slide");
        let of = label_or(labels, "of", "of");
        let indicators = (0..slide_count)
            .map(|index| Indicator {
                index,
                label: format!("{} {} {} {}", show_slide, index + 1, of, slide_count),
                progress_width: 0,
                disabled: false,
            })
            .collect();

        Some(Self {
            prev: Some(Control { label: label_or(labels, "previousSlide", "Previous Slide") }),
            next: Some(Control { label: label_or(labels, "nextSlide", "Next Slide") }),
            indicators,
        })
    }
}

/// Turns authored rows into slides, moving each row's content into its slide.
/// The rows are left empty.
pub fn build_slides(rows: &mut [Row], metadata: &dyn AuthoringMetadata) -> Vec<Slide> {
    rows.iter_mut()
        .enumerate()
        .map(|(index, row)| {
            let mut slide = Slide::new(index, row.take_content());
            metadata.copy(&row.attrs, &mut slide.attrs);
            slide
        })
        .collect()
}
