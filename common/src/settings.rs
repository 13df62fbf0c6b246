/// Upper bound of the whitespace slider
pub const MAX_WHITESPACE: usize = 50;

pub const DEFAULT_SHOW_VIDEO: bool = false;
pub const DEFAULT_COLOURED: bool = false;
pub const DEFAULT_REVERSED: bool = false;
pub const DEFAULT_WHITESPACE: usize = 15;

/// The four user-adjustable options. This is storage only: after any
/// mutation the caller is responsible for rebuilding the ramp and the
/// capture so the next render tick observes a consistent state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// render the raw video alongside the mosaic
    pub show_video: bool,
    /// color each glyph with its source pixel
    pub coloured: bool,
    /// run the ramp dense-to-sparse instead
    pub reversed: bool,
    /// leading blank characters in the ramp, in [0, 50]
    pub whitespace: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            show_video: DEFAULT_SHOW_VIDEO,
            coloured: DEFAULT_COLOURED,
            reversed: DEFAULT_REVERSED,
            whitespace: DEFAULT_WHITESPACE,
        }
    }
}

impl Settings {
    /// Write the slider value, clamped to the slider range
    pub fn set_whitespace(&mut self, value: usize) {
        self.whitespace = value.min(MAX_WHITESPACE);
    }

    /// Restore all four options to their defaults
    pub fn reset(&mut self) {
        *self = Settings::default();
    }
}
