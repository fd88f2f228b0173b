//! User interaction: which controls listen for what, and what they do.

use tracing::{debug, trace};

use crate::carousel::{Carousel, EngineScheduler};
use crate::slide::NavigationChrome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    Widget,
    SlideList,
    Prev,
    Next,
    Indicator(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    PointerEnter,
    PointerLeave,
    Scroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binding {
    pub kind: EventKind,
    pub target: EventTarget,
}

impl Binding {
    fn new(kind: EventKind, target: EventTarget) -> Self {
        Self { kind, target }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    Click(EventTarget),
    PointerEnter,
    PointerLeave,
    /// Manual scroll of the slide list by `delta` pixels.
    Swipe { delta: f32 },
    /// Manual scroll of the slide list to an absolute position.
    ScrollTo { left: f32 },
}

impl UiEvent {
    fn binding(&self) -> Binding {
        match self {
            UiEvent::Click(target) => Binding::new(EventKind::Click, *target),
            UiEvent::PointerEnter => Binding::new(EventKind::PointerEnter, EventTarget::Widget),
            UiEvent::PointerLeave => Binding::new(EventKind::PointerLeave, EventTarget::Widget),
            UiEvent::Swipe { .. } | UiEvent::ScrollTo { .. } => {
                Binding::new(EventKind::Scroll, EventTarget::SlideList)
            }
        }
    }
}

/// Listeners for the controls that exist. Missing controls get none.
pub fn bind_events(chrome: &NavigationChrome) -> Vec<Binding> {
    let mut bindings: Vec<Binding> = chrome
        .indicators
        .iter()
        .map(|indicator| Binding::new(EventKind::Click, EventTarget::Indicator(indicator.index)))
        .collect();

    if chrome.prev.is_some() {
        bindings.push(Binding::new(EventKind::Click, EventTarget::Prev));
    }
    if chrome.next.is_some() {
        bindings.push(Binding::new(EventKind::Click, EventTarget::Next));
    }

    bindings.push(Binding::new(EventKind::Scroll, EventTarget::SlideList));
    bindings.push(Binding::new(EventKind::PointerEnter, EventTarget::Widget));
    bindings.push(Binding::new(EventKind::PointerLeave, EventTarget::Widget));
    bindings
}

impl Carousel {
    /// Delivers a UI event. Returns `false` when nothing listens for it.
    pub fn dispatch(&mut self, event: UiEvent, scheduler: &mut EngineScheduler) -> bool {
        if !self.bindings.contains(&event.binding()) {
            trace!("{}: no listener for {:?}", self.id, event);
            return false;
        }

        match event {
            UiEvent::Click(EventTarget::Indicator(index)) => self.navigate(index as isize, scheduler),
            UiEvent::Click(EventTarget::Prev) => self.previous(scheduler),
            UiEvent::Click(EventTarget::Next) => self.next(scheduler),
            UiEvent::Click(_) => {}
            UiEvent::PointerEnter => self.pause(),
            UiEvent::PointerLeave => self.resume(),
            UiEvent::Swipe { delta } => {
                self.cancel_scroll(scheduler);
                self.viewport.scroll_by(delta);
                self.observe_visibility();
            }
            UiEvent::ScrollTo { left } => {
                self.cancel_scroll(scheduler);
                self.viewport.scroll_to(left);
                self.observe_visibility();
            }
        }
        debug!("{}: handled {:?}", self.id, event);
        true
    }
}
