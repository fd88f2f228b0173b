//! HTML snapshot of a carousel: structural classes, ARIA attributes and the
//! `data-*` runtime state that stylesheets and UI tests key off.

use std::fmt::Write;

use tracing::trace;

use crate::carousel::Carousel;
use crate::content::{Attributes, Block};

pub const CAROUSEL: &str = "carousel";
pub const SLIDES_CONTAINER: &str = "carousel-slides-container";
pub const SLIDES: &str = "carousel-slides";
pub const SLIDE: &str = "carousel-slide";
pub const NAVIGATION_BUTTONS: &str = "carousel-navigation-buttons";
pub const SLIDE_PREV: &str = "slide-prev";
pub const SLIDE_NEXT: &str = "slide-next";
pub const INDICATORS: &str = "carousel-slide-indicators";
pub const INDICATOR: &str = "carousel-slide-indicator";

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn is_attribute_name(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

fn write_attrs(out: &mut String, attrs: &Attributes) {
    for (key, value) in attrs {
        if !is_attribute_name(key) {
            trace!("Skipping malformed attribute name {:?}", key);
            continue;
        }
        let _ = write!(out, " {}=\"{}\"", key, escape(value));
    }
}

fn write_block(out: &mut String, block: &Block) {
    let _ = match block {
        Block::Text { text } => write!(out, "<p>{}</p>", escape(text)),
        Block::Image { src, alt } => write!(
            out,
            "<picture><img src=\"{}\" alt=\"{}\"></picture>",
            escape(&src.to_string_lossy()),
            escape(alt)
        ),
        Block::Link(link) => {
            let tab_index = link.tab_index.map(|i| format!(" tabindex=\"{}\"", i)).unwrap_or_default();
            write!(out, "<a href=\"{}\"{}>{}</a>", escape(&link.href), tab_index, escape(&link.label))
        }
    };
}

pub fn render(carousel: &Carousel) -> String {
    let mut out = String::new();

    let _ = write!(
        out,
        "<div class=\"{}\" id=\"{}\" role=\"{}\" aria-roledescription=\"{}\" data-active-slide=\"{}\"",
        CAROUSEL,
        carousel.id(),
        carousel.role(),
        escape(carousel.role_description()),
        carousel.active_index()
    );
    if carousel.is_interactive() {
        let _ = write!(out, " data-interval=\"{}\"", carousel.config().interval_ms);
    }
    if carousel.playback_state().has_timer() {
        let _ = write!(out, " data-state=\"{}\"", carousel.playback_state());
    }
    out.push('>');

    let _ = write!(out, "<div class=\"{}\"><ul class=\"{}\">", SLIDES_CONTAINER, SLIDES);
    for slide in carousel.slides() {
        let _ = write!(
            out,
            "<li class=\"{}\" data-slide-index=\"{}\" aria-hidden=\"{}\"",
            SLIDE, slide.index, slide.hidden
        );
        write_attrs(&mut out, &slide.attrs);
        out.push('>');
        for block in &slide.content {
            write_block(&mut out, block);
        }
        out.push_str("</li>");
    }
    out.push_str("</ul>");

    if let Some(chrome) = carousel.chrome() {
        let _ = write!(out, "<div class=\"{}\">", NAVIGATION_BUTTONS);
        if let Some(prev) = &chrome.prev {
            let _ = write!(out, "<button type=\"button\" class=\"{}\" aria-label=\"{}\"></button>", SLIDE_PREV, escape(&prev.label));
        }
        if let Some(next) = &chrome.next {
            let _ = write!(out, "<button type=\"button\" class=\"{}\" aria-label=\"{}\"></button>", SLIDE_NEXT, escape(&next.label));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");

    if let Some(chrome) = carousel.chrome() {
        let _ = write!(out, "<ol class=\"{}\">", INDICATORS);
        for indicator in &chrome.indicators {
            let _ = write!(
                out,
                "<li class=\"{}\" data-target-slide=\"{}\"><button type=\"button\" aria-label=\"{}\"{} style=\"width: {}%\"></button></li>",
                INDICATOR,
                indicator.index,
                escape(&indicator.label),
                if indicator.disabled { " disabled" } else { "" },
                indicator.progress_width
            );
        }
        out.push_str("</ol>");
    }

    out.push_str("</div>");
    out
}
