//! Auto-advancing content carousel.
//!
//! A [`Page`] decorates blocks of authored [`Row`]s into [`Carousel`]s and
//! drives them from a single cooperative timer queue. Each carousel shows one
//! slide at a time, fills the active indicator while autoplay runs, pauses on
//! hover, and keeps its ARIA and tab-order state in step with whichever slide
//! is on screen, whether it got there by navigation or by a swipe.

pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod content;
pub mod events;
pub mod labels;
pub mod loader;
pub mod markup;
pub mod navigation;
pub mod page;
pub mod reconciler;
pub mod slide;
pub mod state;
pub mod sync;
pub mod timer;
pub mod viewport;

#[cfg(feature = "viewer")]
pub mod viewer;

pub use carousel::{Carousel, CarouselId, CarouselOptions, EngineScheduler, Task};
pub use config::CarouselConfig;
pub use content::{AuthoringMetadata, Block, EditorInstrumentation, Link, Row};
pub use events::{EventTarget, UiEvent};
pub use labels::{JsonLabels, LabelSource, NoLabels, StaticLabels};
pub use page::Page;
pub use state::PlaybackState;
