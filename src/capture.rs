use common::pixel_frame::PixelFrame;
use common::settings::Settings;
use std::error::Error;
use tracing::warn;

/// A live video input: owns a stream of frames at a fixed resolution and can
/// be shown or hidden alongside the mosaic.
pub trait VideoSource {
    /// Resolution the source was opened at
    fn dimensions(&self) -> (usize, usize);

    /// Ingest any frames that arrived since the last tick
    fn poll(&mut self);

    /// Has the source delivered at least one complete frame?
    /// A denied or missing camera simply never becomes loaded.
    fn loaded(&self) -> bool;

    /// The most recent complete frame, if any
    fn latest(&self) -> Option<&PixelFrame>;

    fn set_visible(&mut self, visible: bool);

    fn visible(&self) -> bool;
}

/// Opens a capture at a requested resolution
pub type SourceFactory =
    Box<dyn Fn(usize, usize) -> Result<Box<dyn VideoSource>, Box<dyn Error>>>;

/// Owns the lifecycle of the live capture. Exactly one source is open at a
/// time; every settings change tears the old one down before opening a
/// replacement sized for the new options.
pub struct CaptureManager {
    screen_w: u32,
    screen_h: u32,
    factory: SourceFactory,
    source: Option<Box<dyn VideoSource>>,
}

impl CaptureManager {
    pub fn new(screen_w: u32, screen_h: u32, factory: SourceFactory) -> Self {
        CaptureManager {
            screen_w,
            screen_h,
            factory,
            source: None,
        }
    }

    /// Capture resolution for the given options: a tenth of the screen width
    /// by a fifteenth of its height, halved again in coloured mode to keep
    /// the per-pixel markup from swamping the page.
    pub fn requested_size(&self, settings: &Settings) -> (usize, usize) {
        let divisor = if settings.coloured { 2 } else { 1 };
        let w = (self.screen_w as usize / 10 / divisor).max(1);
        let h = (self.screen_h as usize / 15 / divisor).max(1);

        (w, h)
    }

    /// Tear down the current capture and open a new one for `settings`.
    /// An open failure leaves no source; the renderer idles until a later
    /// rebuild succeeds.
    pub fn rebuild(&mut self, settings: &Settings) {
        self.source = None;

        let (w, h) = self.requested_size(settings);
        match (self.factory)(w, h) {
            Ok(mut source) => {
                source.set_visible(settings.show_video);
                self.source = Some(source);
            }
            Err(e) => warn!("failed to open capture at {w}x{h}: {e}"),
        }
    }

    pub fn source(&self) -> Option<&dyn VideoSource> {
        self.source.as_deref()
    }

    pub fn source_mut(&mut self) -> Option<&mut (dyn VideoSource + 'static)> {
        self.source.as_deref_mut()
    }
}
