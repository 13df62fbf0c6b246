use common::pixel_frame::PixelFrame;
use std::error::Error;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

const PAGE_FILE: &str = "index.html";
const PREVIEW_FILE: &str = "preview.png";

/// The text-output container: a self-reloading page on disk whose content is
/// replaced wholesale every tick. Pointing a browser at it is the only
/// display wiring needed.
pub struct HtmlSurface {
    page_path: PathBuf,
    page_tmp: PathBuf,
    preview_path: PathBuf,
    preview_tmp: PathBuf,
}

impl HtmlSurface {
    pub fn new(out_dir: &Path) -> Result<Self, Box<dyn Error>> {
        fs::create_dir_all(out_dir)?;

        Ok(HtmlSurface {
            page_path: out_dir.join(PAGE_FILE),
            page_tmp: out_dir.join(".index.html.tmp"),
            preview_path: out_dir.join(PREVIEW_FILE),
            preview_tmp: out_dir.join(".preview.png.tmp"),
        })
    }

    pub fn page_path(&self) -> &Path {
        &self.page_path
    }

    /// Replace the displayed text with `mosaic` and keep the raw-video
    /// preview image in step with `preview`. Both files go through a
    /// write-then-rename so a reloading browser never observes a
    /// half-written frame.
    pub fn replace(
        &mut self,
        mosaic: &str,
        preview: Option<&PixelFrame>,
    ) -> Result<(), Box<dyn Error>> {
        match preview {
            Some(frame) => self.write_preview(frame)?,
            None => self.remove_preview(),
        }

        fs::write(&self.page_tmp, self.page(mosaic, preview.is_some()))?;
        fs::rename(&self.page_tmp, &self.page_path)?;

        Ok(())
    }

    fn page(&self, mosaic: &str, preview: bool) -> String {
        let preview_tag = if preview {
            "<img src=\"preview.png\" alt=\"raw video\">\n"
        } else {
            ""
        };

        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>asciicam</title>\n\
             <style>\n\
             body {{ background-color: #000000; color: #ffffff; font-family: monospace; font-size: 8px; line-height: 8px; letter-spacing: 1px; }}\n\
             img {{ position: fixed; top: 8px; right: 8px; }}\n\
             </style>\n\
             <script>setTimeout(function () {{ location.reload(); }}, 100);</script>\n\
             </head>\n\
             <body>\n\
             {preview_tag}<div>{mosaic}</div>\n\
             </body>\n\
             </html>\n"
        )
    }

    fn write_preview(&self, frame: &PixelFrame) -> Result<(), Box<dyn Error>> {
        if frame.bytes_per_pixel != 3 {
            // every source here delivers rgb24; anything else goes unpreviewed
            return Ok(());
        }

        let pixels = frame.buffer().to_vec();
        let image = match image::RgbImage::from_raw(frame.w as u32, frame.h as u32, pixels) {
            Some(image) => image,
            None => return Err("frame buffer does not match its dimensions".into()),
        };

        image.save_with_format(&self.preview_tmp, image::ImageFormat::Png)?;
        fs::rename(&self.preview_tmp, &self.preview_path)?;

        Ok(())
    }

    fn remove_preview(&self) {
        if let Err(e) = fs::remove_file(&self.preview_path) {
            if e.kind() != ErrorKind::NotFound {
                warn!("failed to remove preview image: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_writes_the_full_page() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = HtmlSurface::new(dir.path()).unwrap();

        surface.replace("&nbsp$<br/>", None).unwrap();

        let html = fs::read_to_string(surface.page_path()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<div>&nbsp$<br/></div>"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn preview_image_tracks_the_show_video_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = HtmlSurface::new(dir.path()).unwrap();
        let frame = PixelFrame::new(4, 2, 3).unwrap();

        surface.replace("", Some(&frame)).unwrap();
        assert!(dir.path().join(PREVIEW_FILE).exists());
        let html = fs::read_to_string(surface.page_path()).unwrap();
        assert!(html.contains("<img src=\"preview.png\""));

        surface.replace("", None).unwrap();
        assert!(!dir.path().join(PREVIEW_FILE).exists());
        let html = fs::read_to_string(surface.page_path()).unwrap();
        assert!(!html.contains("<img"));
    }

    #[test]
    fn no_temp_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = HtmlSurface::new(dir.path()).unwrap();
        let frame = PixelFrame::new(2, 2, 3).unwrap();

        surface.replace("x", Some(&frame)).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.iter().all(|n| !n.ends_with(".tmp")), "{names:?}");
    }
}
