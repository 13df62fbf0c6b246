use crate::capture::VideoSource;
use clap::ValueEnum;
use common::pixel_frame::PixelFrame;
use rand::Rng;
use std::error::Error;
use std::time::{Duration, Instant};

/// Synthetic inputs for running without a camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    /// Horizontal luminance sweep, drifting one column per frame
    Gradient,
    /// Fixed color bars
    Bars,
    /// Uniform random color noise
    Noise,
}

/// Factory for "fake" frames, paced like a real capture
pub struct TestPatternSource {
    frame: PixelFrame,
    pattern: Pattern,
    /// counter to determine how the pattern should look temporally
    frame_counter: usize,
    last_frame_time: Instant,
    /// how long to wait before producing a new frame (effectively FPS)
    frame_delay: Duration,
    loaded: bool,
    visible: bool,
}

impl TestPatternSource {
    pub fn new(w: usize, h: usize, fps: u32, pattern: Pattern) -> Result<Self, Box<dyn Error>> {
        if w == 0 || h == 0 || fps < 1 {
            return Err("failed to create test pattern source".into());
        }

        Ok(TestPatternSource {
            frame: PixelFrame::new(w, h, 3)?,
            pattern,
            frame_counter: 0,
            last_frame_time: Instant::now(),
            frame_delay: Duration::from_millis((1000 / fps) as u64),
            loaded: false,
            visible: false,
        })
    }

    fn fill_gradient(&mut self) {
        let (w, h) = (self.frame.w, self.frame.h);
        let span = (w - 1).max(1);

        for y in 0..h {
            for x in 0..w {
                let v = (((x + self.frame_counter) % w) * 255 / span) as u8;
                self.frame.set_pixel(x, y, (v, v, v));
            }
        }
    }

    fn fill_bars(&mut self) {
        const BARS: [(u8, u8, u8); 8] = [
            (255, 255, 255),
            (255, 255, 0),
            (0, 255, 255),
            (0, 255, 0),
            (255, 0, 255),
            (255, 0, 0),
            (0, 0, 255),
            (0, 0, 0),
        ];

        let (w, h) = (self.frame.w, self.frame.h);
        for y in 0..h {
            for x in 0..w {
                let band = (x * BARS.len() / w).min(BARS.len() - 1);
                self.frame.set_pixel(x, y, BARS[band]);
            }
        }
    }

    fn fill_noise(&mut self) {
        let mut rng = rand::rng();
        let (w, h) = (self.frame.w, self.frame.h);

        for y in 0..h {
            for x in 0..w {
                self.frame
                    .set_pixel(x, y, (rng.random(), rng.random(), rng.random()));
            }
        }
    }
}

impl VideoSource for TestPatternSource {
    fn dimensions(&self) -> (usize, usize) {
        (self.frame.w, self.frame.h)
    }

    fn poll(&mut self) {
        // the first frame is immediate, later ones pace at the requested rate
        if self.loaded && self.last_frame_time.elapsed() < self.frame_delay {
            return;
        }
        self.last_frame_time = Instant::now();

        match self.pattern {
            Pattern::Gradient => self.fill_gradient(),
            Pattern::Bars => self.fill_bars(),
            Pattern::Noise => self.fill_noise(),
        }

        self.frame_counter += 1;
        self.loaded = true;
    }

    fn loaded(&self) -> bool {
        self.loaded
    }

    fn latest(&self) -> Option<&PixelFrame> {
        if self.loaded { Some(&self.frame) } else { None }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_parameters() {
        assert!(TestPatternSource::new(0, 4, 30, Pattern::Gradient).is_err());
        assert!(TestPatternSource::new(4, 0, 30, Pattern::Gradient).is_err());
        assert!(TestPatternSource::new(4, 4, 0, Pattern::Gradient).is_err());
    }

    #[test]
    fn not_loaded_until_first_poll() {
        let mut source = TestPatternSource::new(8, 4, 30, Pattern::Bars).unwrap();
        assert!(!source.loaded());
        assert!(source.latest().is_none());

        source.poll();
        assert!(source.loaded());
        assert_eq!(source.latest().unwrap().w, 8);
    }

    #[test]
    fn gradient_sweeps_dark_to_bright() {
        let mut source = TestPatternSource::new(16, 2, 30, Pattern::Gradient).unwrap();
        source.poll();

        let frame = source.latest().unwrap();
        assert_eq!(frame.get_pixel(0, 0), Some((0, 0, 0)));
        assert_eq!(frame.get_pixel(15, 0), Some((255, 255, 255)));
    }

    #[test]
    fn bars_cover_the_full_width() {
        let mut source = TestPatternSource::new(16, 2, 30, Pattern::Bars).unwrap();
        source.poll();

        let frame = source.latest().unwrap();
        assert_eq!(frame.get_pixel(0, 0), Some((255, 255, 255)));
        assert_eq!(frame.get_pixel(15, 1), Some((0, 0, 0)));
    }

    #[test]
    fn visibility_is_plain_state() {
        let mut source = TestPatternSource::new(4, 4, 30, Pattern::Noise).unwrap();
        assert!(!source.visible());
        source.set_visible(true);
        assert!(source.visible());
    }
}
