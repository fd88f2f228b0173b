use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum PlaybackState {
    #[default]
    Stopped, // No timer; static or autoplay disabled
    Playing, // Timer running, ticks advance progress
    Paused,  // Timer running, ticks are ignored
}

impl PlaybackState {
    /// Value advertised through `data-state`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackState::Stopped => "stopped",
            PlaybackState::Playing => "playing",
            PlaybackState::Paused => "paused",
        }
    }

    pub fn has_timer(&self) -> bool {
        !matches!(self, PlaybackState::Stopped)
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
