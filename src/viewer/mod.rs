//! raylib front end: every carousel on the page gets a horizontal band of the
//! window. The mouse drives the same UI events a browser would deliver.

mod texture_loader;

use std::collections::HashMap;
use std::path::PathBuf;

use raylib::prelude::*;
use tracing::info;

use crate::carousel::{Carousel, CarouselId};
use crate::constants::*;
use crate::content::Block;
use crate::events::{EventTarget, UiEvent};
use crate::page::Page;

use self::texture_loader::load_slide_textures;

const INDICATOR_STRIP: f32 = 36.0;
const INDICATOR_HEIGHT: f32 = 6.0;
const INDICATOR_GAP: f32 = 8.0;
const BUTTON_SIZE: f32 = 48.0;
const SWIPE_STEP: f32 = 60.0;
const TEXT_SIZE: i32 = 28;

/// Window areas of one carousel.
struct Band {
    area: Rectangle,
    slides: Rectangle,
    prev: Rectangle,
    next: Rectangle,
    indicators: Vec<Rectangle>,
}

impl Band {
    fn layout(carousel: &Carousel, position: usize, count: usize, screen_w: f32, screen_h: f32) -> Self {
        let height = screen_h / count.max(1) as f32;
        let area = Rectangle::new(0.0, position as f32 * height, screen_w, height);
        let slides = Rectangle::new(area.x, area.y, area.width, (area.height - INDICATOR_STRIP).max(1.0));

        let button_y = slides.y + (slides.height - BUTTON_SIZE) * 0.5;
        let prev = Rectangle::new(slides.x + 12.0, button_y, BUTTON_SIZE, BUTTON_SIZE);
        let next = Rectangle::new(slides.x + slides.width - BUTTON_SIZE - 12.0, button_y, BUTTON_SIZE, BUTTON_SIZE);

        let n = carousel.indicators().len();
        let strip_w = (screen_w * 0.5).min(n as f32 * 80.0);
        let each_w = if n > 0 { (strip_w - INDICATOR_GAP * (n as f32 - 1.0)) / n as f32 } else { 0.0 };
        let start_x = (screen_w - strip_w) * 0.5;
        let y = slides.y + slides.height + (INDICATOR_STRIP - INDICATOR_HEIGHT) * 0.5;
        let indicators = (0..n)
            .map(|i| Rectangle::new(start_x + i as f32 * (each_w + INDICATOR_GAP), y, each_w, INDICATOR_HEIGHT))
            .collect();

        Self { area, slides, prev, next, indicators }
    }

    /// The control under `point`, taller hit boxes for the thin indicators.
    fn hit(&self, point: Vector2) -> Option<EventTarget> {
        if self.prev.check_collision_point_rec(point) {
            return Some(EventTarget::Prev);
        }
        if self.next.check_collision_point_rec(point) {
            return Some(EventTarget::Next);
        }
        self.indicators.iter().position(|r| {
            Rectangle::new(r.x, r.y - 12.0, r.width, r.height + 24.0).check_collision_point_rec(point)
        })
        .map(EventTarget::Indicator)
    }
}

pub struct Viewer {
    textures: HashMap<PathBuf, Texture2D>,
    hovered: HashMap<CarouselId, bool>,
}

impl Viewer {
    pub fn initialize(rl: &mut RaylibHandle, thread: &RaylibThread, page: &Page) -> Self {
        let textures = load_slide_textures(rl, thread, page.carousels());
        info!("Loaded {} slide texture(s)", textures.len());
        Self { textures, hovered: HashMap::new() }
    }

    fn bands(page: &Page, screen_w: f32, screen_h: f32) -> Vec<(CarouselId, Band)> {
        let count = page.carousels().len();
        page.carousels()
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id(), Band::layout(c, i, count, screen_w, screen_h)))
            .collect()
    }

    /// Turns this frame's mouse input into UI events.
    fn handle_input(&mut self, rl: &RaylibHandle, page: &mut Page) {
        let screen_w = rl.get_screen_width() as f32;
        let screen_h = rl.get_screen_height() as f32;
        let mouse = rl.get_mouse_position();
        let clicked = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
        let wheel = rl.get_mouse_wheel_move();

        for (id, band) in Self::bands(page, screen_w, screen_h) {
            let inside = band.area.check_collision_point_rec(mouse);
            let was_inside = self.hovered.insert(id, inside).unwrap_or(false);
            if inside && !was_inside {
                page.dispatch(id, UiEvent::PointerEnter);
            } else if !inside && was_inside {
                page.dispatch(id, UiEvent::PointerLeave);
            }
            if !inside {
                continue;
            }

            if clicked {
                if let Some(target) = band.hit(mouse) {
                    page.dispatch(id, UiEvent::Click(target));
                }
            }
            if wheel != 0.0 {
                page.dispatch(id, UiEvent::Swipe { delta: -wheel * SWIPE_STEP });
            }
        }
    }

    /// Advances the page by the real frame time and draws it.
    pub fn render_frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, page: &mut Page) {
        if rl.is_window_resized() {
            page.resize(rl.get_screen_width() as f32);
        }
        self.handle_input(rl, page);

        let dt_ms = (rl.get_frame_time() * 1000.0).round() as u64;
        page.advance(dt_ms);

        let screen_w = rl.get_screen_width() as f32;
        let screen_h = rl.get_screen_height() as f32;
        let bands = Self::bands(page, screen_w, screen_h);

        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::BLACK);
        for (id, band) in bands.iter() {
            if let Some(carousel) = page.carousel(*id) {
                self.draw_carousel(&mut d, carousel, band);
            }
        }
    }

    fn draw_carousel(&self, d: &mut RaylibDrawHandle, carousel: &Carousel, band: &Band) {
        {
            let mut s = d.begin_scissor_mode(
                band.slides.x as i32,
                band.slides.y as i32,
                band.slides.width as i32,
                band.slides.height as i32,
            );
            let scroll = carousel.viewport().scroll_left();
            for slide in carousel.slides() {
                let x = band.slides.x + carousel.viewport().slide_offset(slide.index) - scroll;
                if x >= band.slides.x + band.slides.width || x + band.slides.width <= band.slides.x {
                    continue;
                }
                let frame = Rectangle::new(x, band.slides.y, band.slides.width, band.slides.height);
                self.draw_slide(&mut s, &slide.content, frame);
            }
        }

        if let Some(chrome) = carousel.chrome() {
            if chrome.prev.is_some() {
                draw_button(d, band.prev, "<");
            }
            if chrome.next.is_some() {
                draw_button(d, band.next, ">");
            }
            for (indicator, rect) in chrome.indicators.iter().zip(&band.indicators) {
                d.draw_rectangle_rec(*rect, Color::new(255, 255, 255, 60));
                let fill = Rectangle::new(rect.x, rect.y, rect.width * indicator.progress_width as f32 / 100.0, rect.height);
                d.draw_rectangle_rec(fill, Color::WHITE);
                if indicator.disabled {
                    d.draw_rectangle_lines_ex(*rect, 1.0, Color::WHITE);
                }
            }
        }

        let status = format!(
            "{}  {}  {}/{}",
            carousel.id(),
            carousel.playback_state(),
            carousel.active_index() + 1,
            carousel.slides().len()
        );
        d.draw_text(&status, band.area.x as i32 + 10, band.area.y as i32 + 10, 16, Color::LIGHTGRAY);
    }

    fn draw_slide(&self, d: &mut impl RaylibDraw, content: &[Block], frame: Rectangle) {
        d.draw_rectangle_rec(frame, Color::new(38, 26, 51, 255));

        for block in content {
            if let Block::Image { src, .. } = block {
                if let Some(texture) = self.textures.get(src) {
                    draw_contained(d, texture, frame);
                }
            }
        }

        // Captions stack upwards from the bottom edge, last block lowest.
        let mut caption_y = frame.y + frame.height - 16.0;
        for block in content.iter().rev() {
            let (text, color) = match block {
                Block::Text { text } => (text.clone(), Color::WHITE),
                Block::Link(link) => (format!("{} ->", link.label), Color::SKYBLUE),
                Block::Image { .. } => continue,
            };
            caption_y -= TEXT_SIZE as f32 + 6.0;
            d.draw_text(&text, frame.x as i32 + 80, caption_y as i32, TEXT_SIZE, color);
        }
    }
}

// Fit the whole image inside the frame, centered.
fn draw_contained(d: &mut impl RaylibDraw, texture: &Texture2D, frame: Rectangle) {
    let tex_w = texture.width() as f32;
    let tex_h = texture.height() as f32;
    if tex_w <= 0.0 || tex_h <= 0.0 {
        return;
    }
    let scale = (frame.width / tex_w).min(frame.height / tex_h);
    let w = tex_w * scale;
    let h = tex_h * scale;
    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tex_w, tex_h),
        Rectangle::new(frame.x + (frame.width - w) * 0.5, frame.y + (frame.height - h) * 0.5, w, h),
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

fn draw_button(d: &mut RaylibDrawHandle, rect: Rectangle, glyph: &str) {
    d.draw_rectangle_rec(rect, Color::new(0, 0, 0, 140));
    d.draw_rectangle_lines_ex(rect, 1.0, Color::WHITE);
    d.draw_text(glyph, (rect.x + rect.width * 0.5 - 7.0) as i32, (rect.y + rect.height * 0.5 - 12.0) as i32, 24, Color::WHITE);
}

/// Opens the window and runs the page until it is closed.
pub fn run(mut page: Page) {
    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    page.resize(rl.get_screen_width() as f32);
    let mut viewer = Viewer::initialize(&mut rl, &thread, &page);

    while !rl.window_should_close() {
        viewer.render_frame(&mut rl, &thread, &mut page);
    }
    info!("Viewer closed after {} ms", page.now_ms());
}
