//! Presentation sync: derives every visibility, tab-order and indicator flag
//! from the active index. Calling it twice with the same target changes
//! nothing the second time.

use crate::slide::{Indicator, Slide};

pub fn sync_presentation(slides: &mut [Slide], indicators: &mut [Indicator], target: usize) {
    for slide in slides.iter_mut() {
        let active = slide.index == target;
        slide.hidden = !active;
        slide.set_links_reachable(active);
    }
    for indicator in indicators.iter_mut() {
        indicator.disabled = indicator.index == target;
    }
}
