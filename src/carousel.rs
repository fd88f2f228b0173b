//! One carousel instance and its initializer.
//!
//! The instance owns everything it needs: the slides built from authored rows,
//! the navigation chrome, the viewport, and its playback state. Timers live in
//! the page's [`Scheduler`] and are referenced by id only. The behaviour is
//! split across modules:
//!
//! - [`crate::autoplay`]: `start` / `stop` / `tick` / `pause` / `resume`
//! - [`crate::navigation`]: `navigate`
//! - [`crate::reconciler`]: visibility-driven active slide updates
//! - [`crate::events`]: bindings and UI event dispatch

use std::fmt;

use tracing::info;

use crate::config::CarouselConfig;
use crate::constants::*;
use crate::content::{AuthoringMetadata, Row};
use crate::events::{Binding, bind_events};
use crate::labels::{Labels, role_description};
use crate::slide::{Indicator, NavigationChrome, Slide, build_slides};
use crate::state::PlaybackState;
use crate::sync::sync_presentation;
use crate::timer::{Scheduler, TimerId};
use crate::viewport::{Viewport, VisibilityObserver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarouselId(pub u32);

impl fmt::Display for CarouselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "carousel-{}", self.0)
    }
}

/// Work scheduled on behalf of one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Tick(CarouselId),
    SettleReset(CarouselId),
    ScrollFrame(CarouselId),
}

impl Task {
    pub fn carousel(&self) -> CarouselId {
        match self {
            Task::Tick(id) | Task::SettleReset(id) | Task::ScrollFrame(id) => *id,
        }
    }
}

pub type EngineScheduler = Scheduler<Task>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselOptions {
    pub config: CarouselConfig,
    pub viewport_width: f32,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            config: CarouselConfig::default(),
            viewport_width: RENDER_WIDTH as f32,
        }
    }
}

#[derive(Debug)]
pub struct Carousel {
    pub(crate) id: CarouselId,
    pub(crate) role_description: String,
    pub(crate) config: CarouselConfig,

    pub(crate) slides: Vec<Slide>,
    pub(crate) chrome: Option<NavigationChrome>,
    pub(crate) bindings: Vec<Binding>,

    pub(crate) viewport: Viewport,
    pub(crate) observer: VisibilityObserver,
    pub(crate) scroll_timer: Option<TimerId>,

    pub(crate) active_index: usize,
    pub(crate) playback: PlaybackState,
    pub(crate) progress: u8,
    pub(crate) timer: Option<TimerId>,

    pub(crate) navigations: usize,
}

impl Carousel {
    /// Builds an instance from authored rows and brings it to life: slides
    /// and chrome are built, the initial visibility is observed and, for two
    /// or more slides, events are bound and autoplay starts.
    pub fn decorate(
        id: CarouselId,
        rows: &mut [Row],
        labels: &Labels,
        metadata: &dyn AuthoringMetadata,
        options: CarouselOptions,
        scheduler: &mut EngineScheduler,
    ) -> Self {
        let slides = build_slides(rows, metadata);
        let chrome = NavigationChrome::new(slides.len(), labels);
        let slide_count = slides.len();

        let mut carousel = Self {
            id,
            role_description: role_description(labels),
            config: options.config,
            slides,
            chrome,
            bindings: Vec::new(),
            viewport: Viewport::new(options.viewport_width, slide_count),
            observer: VisibilityObserver::new(slide_count),
            scroll_timer: None,
            active_index: 0,
            playback: PlaybackState::Stopped,
            progress: 0,
            timer: None,
            navigations: 0,
        };

        carousel.observe_visibility();

        if let Some(chrome) = carousel.chrome.as_ref() {
            carousel.bindings = bind_events(chrome);
            carousel.start(scheduler);
        }

        info!(
            "Decorated {} with {} slide(s), autoplay {}",
            carousel.id,
            slide_count,
            carousel.playback
        );
        carousel
    }

    /// Single write path for the active index: records it and resyncs every
    /// derived flag.
    pub(crate) fn set_active(&mut self, index: usize) {
        self.active_index = index;
        let indicators: &mut [Indicator] = match self.chrome.as_mut() {
            Some(chrome) => &mut chrome.indicators,
            None => &mut [],
        };
        sync_presentation(&mut self.slides, indicators, index);
    }

    pub(crate) fn indicators_mut(&mut self) -> &mut [Indicator] {
        match self.chrome.as_mut() {
            Some(chrome) => &mut chrome.indicators,
            None => &mut [],
        }
    }

    /// Runs one scheduled callback to completion.
    pub fn run_task(&mut self, task: Task, scheduler: &mut EngineScheduler) {
        match task {
            Task::Tick(_) => self.tick(scheduler),
            Task::SettleReset(_) => self.settle(),
            Task::ScrollFrame(_) => self.scroll_frame(scheduler),
        }
    }

    /// Releases every timer the instance holds.
    pub fn teardown(&mut self, scheduler: &mut EngineScheduler) {
        self.stop(scheduler);
        self.cancel_scroll(scheduler);
    }

    pub fn resize(&mut self, width: f32) {
        self.viewport.resize(width, self.active_index);
        self.observe_visibility();
    }

    pub fn id(&self) -> CarouselId {
        self.id
    }

    pub fn role(&self) -> &'static str {
        "region"
    }

    pub fn role_description(&self) -> &str {
        &self.role_description
    }

    pub fn config(&self) -> CarouselConfig {
        self.config
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn chrome(&self) -> Option<&NavigationChrome> {
        self.chrome.as_ref()
    }

    pub fn indicators(&self) -> &[Indicator] {
        self.chrome.as_ref().map(|c| c.indicators.as_slice()).unwrap_or(&[])
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.playback
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Number of `navigate` calls so far.
    pub fn navigations(&self) -> usize {
        self.navigations
    }

    /// Static instances (fewer than two slides) never bind events or play.
    pub fn is_interactive(&self) -> bool {
        self.chrome.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Block, EditorInstrumentation};

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| Row::new(vec![Block::text(format!("Slide {}", i)), Block::link("/x", "More")]))
            .collect()
    }

    fn decorate(n: usize, config: CarouselConfig) -> (Carousel, EngineScheduler) {
        let mut scheduler = EngineScheduler::new();
        let options = CarouselOptions { config, viewport_width: 100.0 };
        let carousel = Carousel::decorate(
            CarouselId(1),
            &mut rows(n),
            &Labels::new(),
            &EditorInstrumentation,
            options,
            &mut scheduler,
        );
        (carousel, scheduler)
    }

    #[test]
    fn id_is_formatted_for_the_page() {
        assert_eq!(CarouselId(7).to_string(), "carousel-7");
    }

    #[test]
    fn interactive_instance_starts_playing() {
        let (carousel, scheduler) = decorate(3, CarouselConfig::default());
        assert!(carousel.is_interactive());
        assert_eq!(carousel.playback_state(), PlaybackState::Playing);
        assert_eq!(scheduler.active_timers(), 1);
        assert_eq!(carousel.role(), "region");
        assert_eq!(carousel.role_description(), "Carousel");
        assert_eq!(carousel.indicators().len(), carousel.slides().len());
        assert!(carousel.indicators()[0].disabled);
        assert!(!carousel.slides()[0].hidden);
        assert!(carousel.slides()[1].hidden);
    }

    #[test]
    fn single_slide_is_static() {
        let (carousel, scheduler) = decorate(1, CarouselConfig::default());
        assert!(!carousel.is_interactive());
        assert!(carousel.bindings().is_empty());
        assert!(!carousel.has_timer());
        assert_eq!(scheduler.active_timers(), 0);
        assert_eq!(carousel.playback_state(), PlaybackState::Stopped);
        assert_eq!(carousel.navigations(), 0);
        assert!(!carousel.slides()[0].hidden);
    }

    #[test]
    fn zero_rows_are_inert() {
        let (carousel, scheduler) = decorate(0, CarouselConfig::default());
        assert!(carousel.slides().is_empty());
        assert!(carousel.indicators().is_empty());
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn disabled_interval_binds_but_never_plays() {
        let (carousel, scheduler) = decorate(3, CarouselConfig::with_interval(0));
        assert!(!carousel.bindings().is_empty());
        assert_eq!(carousel.playback_state(), PlaybackState::Stopped);
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn teardown_releases_all_timers() {
        let (mut carousel, mut scheduler) = decorate(3, CarouselConfig::default());
        carousel.navigate(2, &mut scheduler);
        assert!(scheduler.active_timers() >= 2);
        carousel.teardown(&mut scheduler);
        // The pending settle reset is left to fire harmlessly.
        assert_eq!(scheduler.active_timers(), 1);
        assert!(!carousel.has_timer());
    }

    #[test]
    fn teardown_mid_scroll_leaves_the_viewport_at_rest() {
        let (mut carousel, mut scheduler) = decorate(3, CarouselConfig::default());
        carousel.next(&mut scheduler);
        while let Some((_, task)) = scheduler.pop_due(32) {
            carousel.run_task(task, &mut scheduler);
        }
        assert!(carousel.viewport().is_scrolling());
        let left = carousel.viewport().scroll_left();

        carousel.teardown(&mut scheduler);
        assert!(!carousel.viewport().is_scrolling());
        assert_eq!(carousel.viewport().scroll_left(), left);
    }
}
