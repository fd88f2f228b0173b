use tracing::debug;

use crate::carousel::{Carousel, EngineScheduler, Task};
use crate::constants::*;

/// Maps a requested slide index into range. Only one step past either end is
/// wrapped around; callers never ask for more than that.
pub fn normalize_index(requested: isize, len: usize) -> usize {
    if requested < 0 {
        len.saturating_sub(1)
    } else if requested as usize >= len {
        0
    } else {
        requested as usize
    }
}

impl Carousel {
    /// Makes `requested` (normalized) the active slide and scrolls it into view.
    pub fn navigate(&mut self, requested: isize, scheduler: &mut EngineScheduler) {
        if self.slides.is_empty() {
            return;
        }
        let target = normalize_index(requested, self.slides.len());
        self.navigations += 1;

        self.set_active(target);
        for indicator in self.indicators_mut() {
            indicator.progress_width = 0;
        }
        self.progress = 0;
        self.slides[target].set_links_reachable(true);

        let offset = self.viewport.slide_offset(target);
        if self.viewport.scroll_smooth_to(offset) {
            self.ensure_scroll_frames(scheduler);
        }
        scheduler.set_timeout(SETTLE_DELAY_MS, Task::SettleReset(self.id));

        debug!("{}: navigate({}) -> slide {}", self.id, requested, target);
    }

    pub fn previous(&mut self, scheduler: &mut EngineScheduler) {
        self.navigate(self.active_index as isize - 1, scheduler);
    }

    pub fn next(&mut self, scheduler: &mut EngineScheduler) {
        self.navigate(self.active_index as isize + 1, scheduler);
    }

    fn ensure_scroll_frames(&mut self, scheduler: &mut EngineScheduler) {
        let running = self.scroll_timer.is_some_and(|timer| scheduler.is_active(timer));
        if !running {
            self.scroll_timer = Some(scheduler.set_interval(SCROLL_FRAME_MS, Task::ScrollFrame(self.id)));
        }
    }

    /// One frame of smooth scrolling, followed by a visibility observation.
    pub(crate) fn scroll_frame(&mut self, scheduler: &mut EngineScheduler) {
        let running = self.viewport.step(SCROLL_FRAME_MS);
        self.observe_visibility();
        if !running {
            if let Some(timer) = self.scroll_timer.take() {
                scheduler.clear(timer);
            }
        }
    }

    /// Stops any smooth scroll where it currently is.
    pub(crate) fn cancel_scroll(&mut self, scheduler: &mut EngineScheduler) {
        if let Some(timer) = self.scroll_timer.take() {
            scheduler.clear(timer);
        }
        self.viewport.stop_scroll();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{CarouselId, CarouselOptions};
    use crate::config::CarouselConfig;
    use crate::content::{Block, EditorInstrumentation, Row};
    use crate::labels::Labels;

    fn carousel(n: usize) -> (Carousel, EngineScheduler) {
        let mut scheduler = EngineScheduler::new();
        let mut rows: Vec<Row> = (0..n)
            .map(|i| Row::new(vec![Block::link(format!("/{}", i), "Read more")]))
            .collect();
        let options = CarouselOptions { config: CarouselConfig::default(), viewport_width: 100.0 };
        let carousel = Carousel::decorate(
            CarouselId(1),
            &mut rows,
            &Labels::new(),
            &EditorInstrumentation,
            options,
            &mut scheduler,
        );
        (carousel, scheduler)
    }

    #[test]
    fn normalization_wraps_one_step() {
        assert_eq!(normalize_index(-1, 4), 3);
        assert_eq!(normalize_index(4, 4), 0);
        assert_eq!(normalize_index(2, 4), 2);
        assert_eq!(normalize_index(-1, 0), 0);
    }

    #[test]
    fn out_of_range_requests_wrap_for_every_size() {
        for n in 1..=8 {
            let (mut c, mut s) = carousel(n);
            c.navigate(-1, &mut s);
            assert_eq!(c.active_index(), n - 1);
            c.navigate(n as isize, &mut s);
            assert_eq!(c.active_index(), 0);
        }
    }

    #[test]
    fn in_range_request_disables_exactly_one_indicator() {
        let n = 5;
        for k in 0..n {
            let (mut c, mut s) = carousel(n);
            c.navigate(k as isize, &mut s);
            assert_eq!(c.active_index(), k);
            let disabled: Vec<usize> = c.indicators().iter().filter(|d| d.disabled).map(|d| d.index).collect();
            assert_eq!(disabled, vec![k]);
        }
    }

    #[test]
    fn navigate_resets_progress_and_exposes_target_links() {
        let (mut c, mut s) = carousel(3);
        for _ in 0..40 {
            c.tick(&mut s);
        }
        c.navigate(2, &mut s);
        assert_eq!(c.progress(), 0);
        assert!(c.indicators().iter().all(|d| d.progress_width == 0));
        assert!(c.slides()[2].links().all(|l| l.is_tab_reachable()));
        assert!(c.slides()[0].links().all(|l| !l.is_tab_reachable()));
        assert!(!c.slides()[2].hidden && c.slides()[0].hidden);
    }

    #[test]
    fn navigate_scrolls_and_schedules_settle_reset() {
        let (mut c, mut s) = carousel(3);
        c.next(&mut s);
        assert!(c.viewport().is_scrolling());
        // tick + scroll frames + settle reset
        assert_eq!(s.active_timers(), 3);

        while let Some((_, task)) = s.pop_due(1_000) {
            if !matches!(task, Task::Tick(_)) {
                c.run_task(task, &mut s);
            }
        }
        assert!(!c.viewport().is_scrolling());
        assert_eq!(c.viewport().scroll_left(), 100.0);
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn prev_from_first_goes_to_last() {
        let (mut c, mut s) = carousel(4);
        c.previous(&mut s);
        assert_eq!(c.active_index(), 3);
        assert_eq!(c.navigations(), 1);
    }
}
