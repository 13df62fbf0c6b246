use crate::capture::VideoSource;
use crate::ffmpeg;
use common::pixel_frame::PixelFrame;
use std::error::Error;
use std::io::{BufReader, Read};
use std::process::Child;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task;
use tracing::{debug, warn};

const BYTES_PER_PIXEL: usize = 3;
/// a couple of frames of slack; the renderer only ever wants the newest
const FRAME_CHANNEL_CAPACITY: usize = 4;

/// Live webcam capture fed by an ffmpeg child process writing raw rgb24
/// frames to a pipe. A blocking reader task pushes complete frames into a
/// bounded channel; the render loop drains it and keeps the newest.
pub struct FfmpegSource {
    /// requested frame width
    w: usize,
    /// requested frame height
    h: usize,
    /// ffmpeg child process, this component actually feeds frames in
    process: Child,
    /// frames assembled by the reader task
    frames: mpsc::Receiver<PixelFrame>,
    /// newest complete frame seen so far
    latest: Option<PixelFrame>,
    visible: bool,
}

impl FfmpegSource {
    /// Spawn the capture pipeline scaled to `w`x`h`. Must run inside the
    /// tokio runtime: the frame reader lives on the blocking pool.
    pub fn open(w: usize, h: usize, device: Option<&str>) -> Result<Self, Box<dyn Error>> {
        if w == 0 || h == 0 {
            return Err("capture dimensions must be greater than zero".into());
        }

        let mut process = ffmpeg::spawn_scaled(w, h, device)?;
        let stdout = match process.stdout.take() {
            Some(stdout) => stdout,
            None => return Err("failed to get ffmpeg stdout".into()),
        };

        let (tx, rx) = mpsc::channel(FRAME_CHANNEL_CAPACITY);
        let buffer_size = w * h * BYTES_PER_PIXEL;
        let mut frame = PixelFrame::new(w, h, BYTES_PER_PIXEL)?;

        // detached: the task exits on its own once the pipe closes
        let _ = task::spawn_blocking(move || {
            let mut reader = BufReader::with_capacity(buffer_size, stdout);

            loop {
                if let Err(e) = reader.read_exact(frame.buffer_mut()) {
                    debug!("camera stream ended: {e}");
                    break;
                }

                // a full channel means the renderer is behind; drop the frame
                if let Err(TrySendError::Closed(_)) = tx.try_send(frame.clone()) {
                    break;
                }
            }
        });

        Ok(FfmpegSource {
            w,
            h,
            process,
            frames: rx,
            latest: None,
            visible: false,
        })
    }
}

impl VideoSource for FfmpegSource {
    fn dimensions(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    fn poll(&mut self) {
        while let Ok(frame) = self.frames.try_recv() {
            self.latest = Some(frame);
        }
    }

    fn loaded(&self) -> bool {
        self.latest.is_some()
    }

    fn latest(&self) -> Option<&PixelFrame> {
        self.latest.as_ref()
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn visible(&self) -> bool {
        self.visible
    }
}

impl Drop for FfmpegSource {
    fn drop(&mut self) {
        // kill ffmpeg when the capture is torn down; the reader task exits
        // on the next failed read
        if let Err(e) = self.process.kill() {
            warn!("failed to stop ffmpeg: {e}");
        }
    }
}
