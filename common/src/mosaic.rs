use crate::escape::escape_into;
use crate::pixel_frame::PixelFrame;

/// Linearly remap `value` from `[in_min, in_max]` to `[out_min, out_max]`
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (value - in_min) / (in_max - in_min) * (out_max - out_min)
}

/// Map a luminance value in [0, 255] to an index into a ramp of `ramp_len`
/// characters, rounding to the nearest step. `ramp_len` must be non-zero.
pub fn ramp_index(luminance: f32, ramp_len: usize) -> usize {
    let last = (ramp_len - 1) as f32;
    let i = map_range(luminance, 0.0, 255.0, 0.0, last).round() as usize;

    // bounds check (e.g. floating point rounding error)
    i.min(ramp_len - 1)
}

/// Render one frame as a text mosaic: every pixel in row-major order becomes
/// one ramp character, escaped for markup, optionally wrapped in a color
/// annotation carrying the source pixel, with rows terminated by `<br/>`.
/// The previous frame's output is always discarded wholesale, never patched.
pub fn render_html(frame: &PixelFrame, ramp: &[char], coloured: bool) -> String {
    if ramp.is_empty() {
        return String::new();
    }

    // colored cells cost a span tag each, plain cells a handful of bytes
    let per_cell = if coloured { 48 } else { 3 };
    let mut out = String::with_capacity(frame.w * frame.h * per_cell);

    for y in 0..frame.h {
        for x in 0..frame.w {
            let Some((r, g, b)) = frame.get_pixel(x, y) else {
                continue;
            };

            let luminance = PixelFrame::luminance((r, g, b));
            let c = ramp[ramp_index(luminance, ramp.len())];

            if coloured {
                out.push_str(&format!("<span style=\"color: rgb({r}, {g}, {b})\">"));
                escape_into(&mut out, c);
                out.push_str("</span>");
            } else {
                escape_into(&mut out, c);
            }
        }

        out.push_str("<br/>");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::escape;
    use crate::ramp;

    fn gray_frame(values: &[u8]) -> PixelFrame {
        let mut frame = PixelFrame::new(values.len(), 1, 3).unwrap();
        for (x, &v) in values.iter().enumerate() {
            frame.set_pixel(x, 0, (v, v, v));
        }
        frame
    }

    #[test]
    fn map_range_is_linear() {
        assert_eq!(map_range(0.0, 0.0, 255.0, 0.0, 72.0), 0.0);
        assert_eq!(map_range(255.0, 0.0, 255.0, 0.0, 72.0), 72.0);
        assert!((map_range(127.5, 0.0, 255.0, 0.0, 72.0) - 36.0).abs() < 1e-4);
    }

    #[test]
    fn ramp_index_is_monotonic_in_gray_level() {
        let len = ramp::build(15, false).len();
        let mut prev = 0;
        for v in 0..=255u16 {
            let luminance = PixelFrame::luminance((v as u8, v as u8, v as u8));
            let i = ramp_index(luminance, len);
            assert!(i >= prev, "index decreased at gray level {v}");
            prev = i;
        }
        assert_eq!(prev, len - 1);
    }

    #[test]
    fn black_maps_to_first_glyph_and_white_to_last() {
        let len = 73;
        assert_eq!(ramp_index(PixelFrame::luminance((0, 0, 0)), len), 0);
        assert_eq!(ramp_index(PixelFrame::luminance((255, 255, 255)), len), len - 1);
    }

    #[test]
    fn ramp_index_clamps_out_of_range_luminance() {
        assert_eq!(ramp_index(300.0, 73), 72);
        assert_eq!(ramp_index(255.1, 73), 72);
    }

    #[test]
    fn two_pixel_frame_renders_expected_row() {
        let ramp = ramp::build(0, false);
        let frame = gray_frame(&[0, 255]);

        let expected = format!(
            "{}{}<br/>",
            escape(ramp[0]),
            escape(*ramp.last().unwrap())
        );
        assert_eq!(render_html(&frame, &ramp, false), expected);
    }

    #[test]
    fn every_row_ends_with_a_line_break() {
        let ramp = ramp::build(15, false);
        let frame = PixelFrame::new(3, 4, 3).unwrap();
        let html = render_html(&frame, &ramp, false);
        assert_eq!(html.matches("<br/>").count(), 4);
        assert!(html.ends_with("<br/>"));
    }

    #[test]
    fn coloured_mode_wraps_glyphs_with_source_pixel_color() {
        let ramp = ramp::build(0, false);
        let mut frame = PixelFrame::new(1, 1, 3).unwrap();
        frame.set_pixel(0, 0, (255, 0, 0));

        let html = render_html(&frame, &ramp, true);
        assert!(html.starts_with("<span style=\"color: rgb(255, 0, 0)\">"));
        assert!(html.ends_with("</span><br/>"));
    }

    #[test]
    fn reversed_ramp_swaps_extremes() {
        let ramp = ramp::build(0, true);
        let frame = gray_frame(&[0, 255]);

        // dark pixels now take the dense end, bright pixels the blank end
        assert_eq!(render_html(&frame, &ramp, false), "$&nbsp<br/>");
    }
}
