//! Typed per-instance configuration.
//!
//! Authored configuration arrives as strings (`data-interval="5000"`). It is
//! parsed once here; anything that is not a positive integer disables autoplay.

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Autoplay period in milliseconds. `<= 0` disables autoplay.
    pub interval_ms: i64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { interval_ms: CAROUSEL_TIMER }
    }
}

impl CarouselConfig {
    pub fn with_interval(interval_ms: i64) -> Self {
        Self { interval_ms }
    }

    /// Autoplay is switched off entirely.
    pub fn disabled() -> Self {
        Self { interval_ms: 0 }
    }

    /// Parse an authored interval attribute. Only the leading integer counts,
    /// so `"5000ms"` is 5000 and `"300.5"` is 300. Absent, empty and
    /// non-numeric values all resolve to a disabled interval.
    pub fn from_attribute(value: Option<&str>) -> Self {
        let interval_ms = value.and_then(leading_integer).unwrap_or(0);
        Self { interval_ms }
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.interval_ms > 0
    }

    /// Time between two autoplay ticks, or `None` when autoplay is disabled.
    pub fn tick_period_ms(&self) -> Option<u64> {
        if !self.autoplay_enabled() {
            return None;
        }
        let period = self.interval_ms as u64 / PROGRESS_STEPS as u64;
        Some(period.max(1))
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let sign_len = usize::from(raw.starts_with(['-', '+']));
    let digits = raw[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    raw[..sign_len + digits].parse().ok()
}
