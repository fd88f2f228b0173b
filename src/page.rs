//! The hosting page: owns the event loop and every carousel decorated on it.
//!
//! Instance ids are handed out in decoration order, starting at 1, and are
//! never reused within one page.

use tracing::{debug, info};

use crate::carousel::{Carousel, CarouselId, CarouselOptions, EngineScheduler};
use crate::config::CarouselConfig;
use crate::constants::*;
use crate::content::{AuthoringMetadata, EditorInstrumentation, Row};
use crate::events::UiEvent;
use crate::labels::{LabelSource, NoLabels, load_labels};

pub struct Page {
    scheduler: EngineScheduler,
    carousels: Vec<Carousel>,
    last_id: u32,
    labels: Box<dyn LabelSource>,
    metadata: Box<dyn AuthoringMetadata>,
    viewport_width: f32,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            scheduler: EngineScheduler::new(),
            carousels: Vec::new(),
            last_id: 0,
            labels: Box::new(NoLabels),
            metadata: Box::new(EditorInstrumentation),
            viewport_width: RENDER_WIDTH as f32,
        }
    }

    pub fn with_labels(mut self, labels: impl LabelSource + 'static) -> Self {
        self.labels = Box::new(labels);
        self
    }

    pub fn with_metadata(mut self, metadata: impl AuthoringMetadata + 'static) -> Self {
        self.metadata = Box::new(metadata);
        self
    }

    pub fn with_viewport_width(mut self, width: f32) -> Self {
        self.viewport_width = width;
        self
    }

    /// Turns one block of authored rows into a live carousel.
    pub fn decorate(&mut self, rows: &mut [Row], config: CarouselConfig) -> CarouselId {
        self.last_id += 1;
        let id = CarouselId(self.last_id);
        let labels = load_labels(self.labels.as_ref());
        let options = CarouselOptions { config, viewport_width: self.viewport_width };
        let carousel = Carousel::decorate(
            id,
            rows,
            &labels,
            self.metadata.as_ref(),
            options,
            &mut self.scheduler,
        );
        self.carousels.push(carousel);
        id
    }

    /// Removes an instance and releases its timers.
    pub fn unmount(&mut self, id: CarouselId) -> Option<Carousel> {
        let position = self.carousels.iter().position(|c| c.id() == id)?;
        let mut carousel = self.carousels.remove(position);
        carousel.teardown(&mut self.scheduler);
        self.scheduler.retain(|task| task.carousel() != id);
        info!("Unmounted {}", id);
        Some(carousel)
    }

    pub fn dispatch(&mut self, id: CarouselId, event: UiEvent) -> bool {
        match self.carousels.iter_mut().find(|c| c.id() == id) {
            Some(carousel) => carousel.dispatch(event, &mut self.scheduler),
            None => false,
        }
    }

    /// Runs every callback due within the next `ms` milliseconds.
    pub fn advance(&mut self, ms: u64) {
        let until = self.scheduler.now_ms() + ms;
        self.run_until(until);
    }

    pub fn run_until(&mut self, until_ms: u64) {
        while let Some((_, task)) = self.scheduler.pop_due(until_ms) {
            let id = task.carousel();
            match self.carousels.iter_mut().find(|c| c.id() == id) {
                Some(carousel) => carousel.run_task(task, &mut self.scheduler),
                None => debug!("Dropping {:?} for unmounted {}", task, id),
            }
        }
        self.scheduler.advance_to(until_ms);
    }

    pub fn resize(&mut self, width: f32) {
        self.viewport_width = width;
        for carousel in self.carousels.iter_mut() {
            carousel.resize(width);
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    pub fn active_timers(&self) -> usize {
        self.scheduler.active_timers()
    }

    pub fn carousel(&self, id: CarouselId) -> Option<&Carousel> {
        self.carousels.iter().find(|c| c.id() == id)
    }

    pub fn carousel_mut(&mut self, id: CarouselId) -> Option<&mut Carousel> {
        self.carousels.iter_mut().find(|c| c.id() == id)
    }

    pub fn carousels(&self) -> &[Carousel] {
        &self.carousels
    }
}
