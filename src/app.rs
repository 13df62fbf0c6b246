use crate::capture::{CaptureManager, SourceFactory};
use crate::frontend::{Frontend, Input};
use crate::surface::HtmlSurface;
use common::mosaic;
use common::ramp;
use common::settings::Settings;
use std::error::Error;
use std::path::Path;
use std::time::Instant;
use tokio::time::Duration;
use tracing::{debug, info, warn};

/// interval between render ticks (roughly 30 fps)
const TICK: Duration = Duration::from_millis(33);

/// A settings mutation requested by exactly one input control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsEvent {
    ToggleShowVideo,
    ToggleColoured,
    ToggleReversed,
    SetWhitespace(usize),
    Reset,
}

/// Rolling render statistics for the status panel
#[derive(Default)]
pub struct RenderStats {
    pub frames: u64,
    pub fps: f32,
    last_tick: Option<Instant>,
}

impl RenderStats {
    fn record(&mut self) {
        self.frames += 1;

        let now = Instant::now();
        if let Some(last) = self.last_tick {
            let dt = now.duration_since(last).as_secs_f32();
            if dt > 0.0 {
                self.fps = 0.9 * self.fps + 0.1 / dt;
            }
        }
        self.last_tick = Some(now);
    }
}

/// Whole-program state: the settings record, the ramp and capture derived
/// from it, and the output surface. All mutation funnels through `apply`,
/// so a render tick never observes a half-applied change.
pub struct App {
    pub settings: Settings,
    pub ramp: Vec<char>,
    pub capture: CaptureManager,
    pub surface: HtmlSurface,
    pub stats: RenderStats,
}

impl App {
    pub fn new(
        screen_w: u32,
        screen_h: u32,
        out_dir: &Path,
        factory: SourceFactory,
    ) -> Result<Self, Box<dyn Error>> {
        let settings = Settings::default();
        let ramp = ramp::build(settings.whitespace, settings.reversed);

        let mut capture = CaptureManager::new(screen_w, screen_h, factory);
        capture.rebuild(&settings);

        let mut surface = HtmlSurface::new(out_dir)?;
        // the browser target exists before the first frame arrives
        surface.replace("", None)?;

        Ok(App {
            settings,
            ramp,
            capture,
            surface,
            stats: RenderStats::default(),
        })
    }

    /// Apply one settings mutation, then rebuild the ramp and recreate the
    /// capture so both reflect the new options before the next tick
    pub fn apply(&mut self, event: SettingsEvent) {
        match event {
            SettingsEvent::ToggleShowVideo => self.settings.show_video = !self.settings.show_video,
            SettingsEvent::ToggleColoured => self.settings.coloured = !self.settings.coloured,
            SettingsEvent::ToggleReversed => self.settings.reversed = !self.settings.reversed,
            SettingsEvent::SetWhitespace(value) => self.settings.set_whitespace(value),
            SettingsEvent::Reset => self.settings.reset(),
        }

        debug!(settings = ?self.settings, "settings changed");
        self.ramp = ramp::build(self.settings.whitespace, self.settings.reversed);
        self.capture.rebuild(&self.settings);
    }

    /// One render tick: a no-op while the capture has no frame yet,
    /// otherwise transform the newest frame and replace the page
    pub fn render_tick(&mut self) -> Result<(), Box<dyn Error>> {
        let Some(source) = self.capture.source_mut() else {
            return Ok(());
        };

        source.poll();
        if !source.loaded() {
            return Ok(());
        }

        let visible = source.visible();
        let Some(frame) = source.latest() else {
            return Ok(());
        };

        let html = mosaic::render_html(frame, &self.ramp, self.settings.coloured);
        let preview = if visible { Some(frame) } else { None };
        self.surface.replace(&html, preview)?;
        self.stats.record();

        Ok(())
    }

    pub async fn run(mut self) -> Result<(), Box<dyn Error>> {
        let mut frontend = Frontend::new()?;
        info!(
            "control panel up; open {} in a browser",
            self.surface.page_path().display()
        );

        loop {
            frontend.draw(&self)?;

            while let Some(input) = frontend.poll_input(&self.settings)? {
                match input {
                    Input::Quit => {
                        info!("shutting down");
                        return Ok(());
                    }
                    Input::Setting(event) => self.apply(event),
                }
            }

            if let Err(e) = self.render_tick() {
                warn!("render tick failed: {e}");
            }

            tokio::time::sleep(TICK).await;
        }
    }
}
