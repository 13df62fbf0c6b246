use common::escape::escape;
use common::mosaic::render_html;
use common::pixel_frame::PixelFrame;
use common::ramp;
use common::settings::Settings;

/// Drive the whole transform the way a render tick does: settings feed the
/// ramp builder, a frame goes through luminance mapping, escaping, and the
/// optional color wrap, and the result is one markup blob per frame.
#[test]
fn settings_to_markup_round_trip() {
    let mut settings = Settings::default();
    settings.set_whitespace(0);

    let ramp = ramp::build(settings.whitespace, settings.reversed);
    assert_eq!(ramp.len(), 73);
    assert_eq!(ramp[0], ' ');

    let mut frame = PixelFrame::new(2, 2, 3).unwrap();
    frame.set_pixel(0, 0, (0, 0, 0));
    frame.set_pixel(1, 0, (255, 255, 255));
    frame.set_pixel(0, 1, (255, 0, 0));
    frame.set_pixel(1, 1, (0, 0, 255));

    let html = render_html(&frame, &ramp, settings.coloured);
    let rows: Vec<&str> = html.split("<br/>").collect();

    // two rows plus the empty trailing split
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2], "");
    assert_eq!(rows[0], format!("{}{}", escape(ramp[0]), escape(*ramp.last().unwrap())));

    // red is perceptually brighter than blue, so it sits higher in the ramp
    assert!(PixelFrame::luminance((255, 0, 0)) > PixelFrame::luminance((0, 0, 255)));
}

#[test]
fn coloured_mode_emits_one_span_per_pixel() {
    let settings = Settings {
        coloured: true,
        ..Settings::default()
    };

    let ramp = ramp::build(settings.whitespace, settings.reversed);
    let mut frame = PixelFrame::new(3, 1, 3).unwrap();
    for x in 0..3 {
        frame.set_pixel(x, 0, (10 * x as u8, 128, 200));
    }

    let html = render_html(&frame, &ramp, settings.coloured);
    assert_eq!(html.matches("<span style=\"color: rgb(").count(), 3);
    assert_eq!(html.matches("</span>").count(), 3);
    assert!(html.contains("rgb(20, 128, 200)"));
}

#[test]
fn whitespace_padding_blanks_the_dark_end() {
    // with heavy padding, everything below the padding threshold is blank
    let ramp = ramp::build(50, false);
    let mut frame = PixelFrame::new(1, 1, 3).unwrap();
    frame.set_pixel(0, 0, (40, 40, 40));

    let html = render_html(&frame, &ramp, false);
    assert_eq!(html, "&nbsp<br/>");
}
