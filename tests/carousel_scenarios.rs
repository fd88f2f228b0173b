use carousel::markup;
use carousel::{Block, CarouselConfig, CarouselId, EventTarget, Page, PlaybackState, Row, UiEvent};

const WIDTH: f32 = 100.0;

fn rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| Row::new(vec![Block::text(format!("Slide {}", i)), Block::link(format!("/slide/{}", i), "Details")]))
        .collect()
}

fn page_with(n: usize, interval_ms: i64) -> (Page, CarouselId) {
    let mut page = Page::new().with_viewport_width(WIDTH);
    let id = page.decorate(&mut rows(n), CarouselConfig::with_interval(interval_ms));
    (page, id)
}

fn disabled_indicators(page: &Page, id: CarouselId) -> Vec<usize> {
    page.carousel(id)
        .unwrap()
        .indicators()
        .iter()
        .filter(|d| d.disabled)
        .map(|d| d.index)
        .collect()
}

#[test]
fn hundred_ticks_advance_exactly_once() {
    let (mut page, id) = page_with(4, 5000);

    page.advance(4_999);
    let c = page.carousel(id).unwrap();
    assert_eq!(c.navigations(), 0);
    assert_eq!(c.progress(), 99);

    page.advance(1);
    let c = page.carousel(id).unwrap();
    assert_eq!(c.navigations(), 1);
    assert_eq!(c.active_index(), 1);
    assert_eq!(c.progress(), 0);
}

#[test]
fn three_slides_at_300ms_wrap_after_100_ticks() {
    let (mut page, id) = page_with(3, 300);
    page.advance(297);
    assert_eq!(page.carousel(id).unwrap().navigations(), 0);
    page.advance(3);
    let c = page.carousel(id).unwrap();
    assert_eq!(c.navigations(), 1);
    assert_eq!(c.active_index(), 1);
}

#[test]
fn hover_delays_the_wrap_by_the_paused_ticks() {
    let (mut page, id) = page_with(3, 300);

    page.advance(50 * 3);
    assert_eq!(page.carousel(id).unwrap().progress(), 50);
    assert!(page.dispatch(id, UiEvent::PointerEnter));

    page.advance(30 * 3);
    let c = page.carousel(id).unwrap();
    assert_eq!(c.playback_state(), PlaybackState::Paused);
    assert_eq!(c.progress(), 50);
    assert_eq!(c.active_index(), 0);
    assert!(page.dispatch(id, UiEvent::PointerLeave));

    page.advance(49 * 3);
    assert_eq!(page.carousel(id).unwrap().navigations(), 0);
    page.advance(3);
    assert_eq!(page.now_ms(), 130 * 3);
    let c = page.carousel(id).unwrap();
    assert_eq!(c.navigations(), 1);
    assert_eq!(c.active_index(), 1);
}

#[test]
fn non_positive_interval_never_plays() {
    for interval in [0, -5000] {
        let (mut page, id) = page_with(3, interval);
        assert_eq!(page.active_timers(), 0);
        page.advance(60_000);
        let c = page.carousel(id).unwrap();
        assert_eq!(c.playback_state(), PlaybackState::Stopped);
        assert!(!c.has_timer());
        assert_eq!(c.navigations(), 0);

        // Hover does not wake it up either.
        page.dispatch(id, UiEvent::PointerEnter);
        page.dispatch(id, UiEvent::PointerLeave);
        assert_eq!(page.carousel(id).unwrap().playback_state(), PlaybackState::Stopped);
    }
}

#[test]
fn single_slide_is_completely_static() {
    let (mut page, id) = page_with(1, 5000);
    assert_eq!(page.active_timers(), 0);
    assert!(page.carousel(id).unwrap().bindings().is_empty());

    assert!(!page.dispatch(id, UiEvent::Click(EventTarget::Next)));
    assert!(!page.dispatch(id, UiEvent::PointerEnter));
    page.advance(60_000);

    let c = page.carousel(id).unwrap();
    assert_eq!(c.navigations(), 0);
    assert_eq!(c.playback_state(), PlaybackState::Stopped);
    assert!(!c.slides()[0].hidden);
}

#[test]
fn visibility_gain_leaves_progress_and_playback_alone() {
    let (mut page, id) = page_with(3, 5000);
    page.advance(20 * 50);

    let c = page.carousel_mut(id).unwrap();
    assert_eq!(c.active_index(), 0);
    c.reconcile_visible(2);

    let c = page.carousel(id).unwrap();
    assert_eq!(c.active_index(), 2);
    assert_eq!(c.progress(), 20);
    assert_eq!(c.playback_state(), PlaybackState::Playing);
    assert_eq!(disabled_indicators(&page, id), vec![2]);
}

#[test]
fn swipe_moves_the_active_slide_without_navigation() {
    let (mut page, id) = page_with(3, 5000);
    page.advance(500);
    assert!(page.dispatch(id, UiEvent::ScrollTo { left: 2.0 * WIDTH }));

    let c = page.carousel(id).unwrap();
    assert_eq!(c.active_index(), 2);
    assert_eq!(c.navigations(), 0);
    assert_eq!(c.progress(), 10);
    assert!(c.slides()[2].links().all(|l| l.is_tab_reachable()));
    assert!(c.slides()[0].links().all(|l| !l.is_tab_reachable()));
}

#[test]
fn manual_scroll_wins_over_an_in_flight_navigation() {
    let (mut page, id) = page_with(3, 5000);
    page.dispatch(id, UiEvent::Click(EventTarget::Next));
    page.advance(32);
    page.dispatch(id, UiEvent::ScrollTo { left: 2.0 * WIDTH });
    page.advance(1_000);

    let c = page.carousel(id).unwrap();
    assert_eq!(c.active_index(), 2);
    assert_eq!(c.viewport().scroll_left(), 2.0 * WIDTH);
    assert_eq!(disabled_indicators(&page, id), vec![2]);
}

#[test]
fn wrapping_scroll_settles_on_the_first_slide() {
    let (mut page, id) = page_with(3, 300);
    page.dispatch(id, UiEvent::Click(EventTarget::Indicator(2)));

    // Settle reset at 100 ms, wrap at 399 ms, scroll back done by ~703 ms.
    page.advance(750);
    let c = page.carousel(id).unwrap();
    assert_eq!(c.navigations(), 2);
    assert_eq!(c.active_index(), 0);
    assert_eq!(c.viewport().scroll_left(), 0.0);
    assert_eq!(disabled_indicators(&page, id), vec![0]);
    assert_eq!(c.slides().iter().filter(|s| !s.hidden).count(), 1);
}

#[test]
fn controls_wrap_in_both_directions() {
    let (mut page, id) = page_with(3, 5000);
    page.dispatch(id, UiEvent::Click(EventTarget::Prev));
    assert_eq!(page.carousel(id).unwrap().active_index(), 2);
    page.dispatch(id, UiEvent::Click(EventTarget::Next));
    assert_eq!(page.carousel(id).unwrap().active_index(), 0);
    page.dispatch(id, UiEvent::Click(EventTarget::Indicator(1)));
    assert_eq!(page.carousel(id).unwrap().active_index(), 1);
    assert_eq!(disabled_indicators(&page, id), vec![1]);
}

#[test]
fn markup_reflects_runtime_state() {
    let (mut page, id) = page_with(2, 5000);
    page.advance(25 * 50);
    page.dispatch(id, UiEvent::PointerEnter);

    let html = markup::render(page.carousel(id).unwrap());
    assert!(html.contains("id=\"carousel-1\""));
    assert!(html.contains("data-state=\"paused\""));
    assert!(html.contains("style=\"width: 25%\""));
    assert!(html.contains("data-active-slide=\"0\""));
}

#[test]
fn unmount_stops_everything() {
    let (mut page, id) = page_with(3, 5000);
    page.dispatch(id, UiEvent::Click(EventTarget::Next));
    let carousel = page.unmount(id).unwrap();
    assert!(!carousel.has_timer());
    assert_eq!(carousel.playback_state(), PlaybackState::Stopped);
    assert_eq!(page.active_timers(), 0);
    page.advance(10_000);
    assert!(page.carousel(id).is_none());
}
