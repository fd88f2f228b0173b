//! Keeps the active slide in step with what is actually on screen.
//!
//! A swipe or a smooth scroll passing over slides changes what the user sees
//! without going through `navigate`. Whenever a slide starts covering at least
//! half of the viewport it becomes the active slide. Progress, playback and
//! the scroll position are left alone.
//!
//! An autoplay advance and a reconciliation can both land in the same window;
//! whichever callback runs last decides the active slide.

use tracing::debug;

use crate::carousel::Carousel;

impl Carousel {
    /// Handles a visibility-gain entry for slide `index`.
    pub fn reconcile_visible(&mut self, index: usize) {
        if index >= self.slides.len() {
            return;
        }
        if index != self.active_index {
            debug!("{}: slide {} scrolled into view", self.id, index);
        }
        self.set_active(index);
    }

    /// Observes the viewport and reconciles every slide that became visible.
    pub(crate) fn observe_visibility(&mut self) {
        for index in self.observer.observe(&self.viewport) {
            self.reconcile_visible(index);
        }
    }
}
