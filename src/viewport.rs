//! Horizontal slide viewport and visibility observation.
//!
//! Slides sit side by side, each exactly one viewport wide, so slide `i`
//! starts at `i * width`. The viewport scrolls either instantly (a swipe) or
//! through a smooth scroll that the host steps frame by frame.

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq)]
struct SmoothScroll {
    from: f32,
    to: f32,
    elapsed_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    width: f32,
    slide_count: usize,
    scroll_left: f32,
    animation: Option<SmoothScroll>,
}

impl Viewport {
    pub fn new(width: f32, slide_count: usize) -> Self {
        Self {
            width: width.max(1.0),
            slide_count,
            scroll_left: 0.0,
            animation: None,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn scroll_left(&self) -> f32 {
        self.scroll_left
    }

    pub fn slide_offset(&self, index: usize) -> f32 {
        index as f32 * self.width
    }

    fn max_scroll(&self) -> f32 {
        self.slide_count.saturating_sub(1) as f32 * self.width
    }

    pub fn is_scrolling(&self) -> bool {
        self.animation.is_some()
    }

    /// Starts a smooth scroll. Returns `false` when already there.
    pub fn scroll_smooth_to(&mut self, left: f32) -> bool {
        let to = left.clamp(0.0, self.max_scroll());
        if (to - self.scroll_left).abs() < f32::EPSILON {
            self.animation = None;
            return false;
        }
        self.animation = Some(SmoothScroll { from: self.scroll_left, to, elapsed_ms: 0 });
        true
    }

    /// Jumps to `left`, interrupting any smooth scroll in flight.
    pub fn scroll_to(&mut self, left: f32) {
        self.animation = None;
        self.scroll_left = left.clamp(0.0, self.max_scroll());
    }

    /// Drops any smooth scroll in flight, keeping the current position.
    pub fn stop_scroll(&mut self) {
        self.animation = None;
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.scroll_left + delta);
    }

    /// Advances the smooth scroll. Returns `true` while it is still running.
    pub fn step(&mut self, dt_ms: u64) -> bool {
        let Some(mut animation) = self.animation else {
            return false;
        };
        animation.elapsed_ms += dt_ms;
        let t = (animation.elapsed_ms as f32 / SCROLL_DURATION_MS as f32).min(1.0);
        let eased = 1.0 - (1.0 - t).powi(3); // easeOutCubic
        self.scroll_left = animation.from + (animation.to - animation.from) * eased;

        if animation.elapsed_ms >= SCROLL_DURATION_MS {
            self.scroll_left = animation.to;
            self.animation = None;
            false
        } else {
            self.animation = Some(animation);
            true
        }
    }

    /// Keeps the same slide in view after the viewport changes size.
    pub fn resize(&mut self, width: f32, active_index: usize) {
        self.width = width.max(1.0);
        self.animation = None;
        self.scroll_left = self.slide_offset(active_index).clamp(0.0, self.max_scroll());
    }

    /// Share of the viewport covered by slide `index`, in `0.0..=1.0`.
    pub fn visible_ratio(&self, index: usize) -> f32 {
        let start = self.slide_offset(index);
        let end = start + self.width;
        let overlap = end.min(self.scroll_left + self.width) - start.max(self.scroll_left);
        (overlap / self.width).clamp(0.0, 1.0)
    }
}

/// Tracks which slides currently meet the visibility threshold and reports the
/// ones that just started to.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityObserver {
    threshold: f32,
    intersecting: Vec<bool>,
}

impl VisibilityObserver {
    pub fn new(slide_count: usize) -> Self {
        Self::with_threshold(slide_count, VISIBILITY_THRESHOLD)
    }

    pub fn with_threshold(slide_count: usize, threshold: f32) -> Self {
        Self { threshold, intersecting: vec![false; slide_count] }
    }

    /// Visibility-gain entries since the last observation, in slide order.
    /// The first call reports whatever is initially visible.
    pub fn observe(&mut self, viewport: &Viewport) -> Vec<usize> {
        let mut gained = Vec::new();
        for (index, was) in self.intersecting.iter_mut().enumerate() {
            let now = viewport.visible_ratio(index) >= self.threshold;
            if now && !*was {
                gained.push(index);
            }
            *was = now;
        }
        gained
    }

    pub fn is_intersecting(&self, index: usize) -> bool {
        self.intersecting.get(index).copied().unwrap_or(false)
    }
}
