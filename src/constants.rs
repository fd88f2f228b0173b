pub const CAROUSEL_TIMER: i64 = 5000;         // Default autoplay period (milliseconds)
pub const PROGRESS_STEPS: u8 = 100;           // Ticks per autoplay period
pub const SETTLE_DELAY_MS: u64 = 100;         // Delay before a navigation's deferred progress reset
pub const SCROLL_DURATION_MS: u64 = 300;      // Length of a smooth scroll
pub const SCROLL_FRAME_MS: u64 = 16;          // Time between smooth scroll frames
pub const VISIBILITY_THRESHOLD: f32 = 0.5;    // Share of the viewport a slide must cover to count as visible

pub const DEFAULT_ROLE_DESCRIPTION: &str = "Carousel";
pub const ROLE_DESCRIPTION_LABEL: &str = "carousel";

pub const RENDER_WIDTH: i32 = 1280;           // Width of the viewer window
pub const RENDER_HEIGHT: i32 = 720;           // Height of the viewer window
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME_MS: u64 = 1000 / FPS as u64; // Time per frame (milliseconds)
