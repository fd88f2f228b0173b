//! Autoplay: a periodic tick that fills the active indicator and advances to
//! the next slide every `PROGRESS_STEPS` ticks.
//!
//! The timer keeps firing while paused; paused ticks are simply ignored, so
//! progress picks up exactly where it stopped.

use tracing::{debug, trace};

use crate::carousel::{Carousel, EngineScheduler, Task};
use crate::constants::*;
use crate::state::PlaybackState;

impl Carousel {
    /// Acquires the tick timer and starts playing. Does nothing for static
    /// instances, when autoplay is disabled, or when already started.
    pub fn start(&mut self, scheduler: &mut EngineScheduler) {
        if self.timer.is_some() || !self.is_interactive() {
            return;
        }
        let Some(period) = self.config.tick_period_ms() else {
            debug!("{}: autoplay disabled (interval {} ms)", self.id, self.config.interval_ms);
            return;
        };

        self.progress = 0;
        self.timer = Some(scheduler.set_interval(period, Task::Tick(self.id)));
        self.playback = PlaybackState::Playing;
        debug!("{}: autoplay started, tick every {} ms", self.id, period);
    }

    /// Releases the tick timer and clears progress. Safe to call repeatedly or
    /// without a prior `start`.
    pub fn stop(&mut self, scheduler: &mut EngineScheduler) {
        if let Some(timer) = self.timer.take() {
            scheduler.clear(timer);
            debug!("{}: autoplay stopped", self.id);
        }
        self.progress = 0;
        self.playback = PlaybackState::Stopped;
    }

    pub fn pause(&mut self) {
        if self.playback == PlaybackState::Playing {
            self.playback = PlaybackState::Paused;
            debug!("{}: paused at {}%", self.id, self.progress);
        }
    }

    pub fn resume(&mut self) {
        if self.playback == PlaybackState::Paused {
            self.playback = PlaybackState::Playing;
            debug!("{}: resumed at {}%", self.id, self.progress);
        }
    }

    pub(crate) fn tick(&mut self, scheduler: &mut EngineScheduler) {
        if self.playback != PlaybackState::Playing {
            return;
        }

        let active = self.active_index;
        // Indicator gone (widget torn down mid-flight): skip this cycle.
        if self.indicators_mut().get(active).is_none() {
            trace!("{}: no indicator for slide {}, skipping tick", self.id, active);
            return;
        }

        let progress = (self.progress + 1) % PROGRESS_STEPS;
        self.progress = progress;
        for indicator in self.indicators_mut() {
            indicator.progress_width = if indicator.index == active { progress } else { 0 };
        }

        if progress == 0 {
            let next = (active + 1) % self.slides.len();
            self.navigate(next as isize, scheduler);
            if let Some(indicator) = self.indicators_mut().get_mut(active) {
                indicator.progress_width = 0;
            }
        }
    }

    /// Deferred progress reset scheduled by `navigate`. Firing late is harmless.
    pub(crate) fn settle(&mut self) {
        self.progress = 0;
    }
}
