use std::error::Error;
use std::process::{Child, Command, Stdio};
use tracing::debug;

/// Determines if `ffmpeg` is installed, then spawns it reading the webcam
/// and writing raw frames to stdout, scaled to the requested mosaic size
pub fn spawn_scaled(w: usize, h: usize, device: Option<&str>) -> Result<Child, Box<dyn Error>> {
    match Command::new("ffmpeg").arg("-version").output() {
        Ok(output) => debug!(
            "ffmpeg found: {}",
            String::from_utf8_lossy(&output.stdout)
                .lines()
                .next()
                .unwrap_or_default()
        ),
        Err(e) => return Err(format!("ffmpeg not found or not accessible: {e}").into()),
    }

    let mut cmd = Command::new("ffmpeg");
    input_setup(&mut cmd, device)?;
    output_setup(&mut cmd, w, h);

    let child = match cmd.stdout(Stdio::piped()).stderr(Stdio::null()).spawn() {
        Ok(child) => child,
        Err(e) => return Err(format!("failed to spawn ffmpeg process: {e}").into()),
    };

    Ok(child)
}

/// Determines the OS of the current system and structures the capture side
/// of the `ffmpeg` CLI with the appropriate arguments
fn input_setup(cmd: &mut Command, device: Option<&str>) -> Result<(), Box<dyn Error>> {
    if cfg!(target_os = "macos") {
        debug!("using avfoundation capture");
        cmd.args([
            "-f",
            "avfoundation",
            "-framerate",
            "30",
            "-video_size",
            "640x480",
            "-i",
            // "<video>:none" keeps the audio side disabled
            device.unwrap_or("0:none"),
        ]);
    } else if cfg!(target_os = "linux") {
        debug!("using v4l2 capture");
        cmd.args([
            "-f",
            "v4l2",
            "-framerate",
            "30",
            "-video_size",
            "640x480",
            "-i",
            device.unwrap_or("/dev/video0"),
        ]);
    } else if cfg!(target_os = "windows") {
        debug!("using dshow capture");
        cmd.args([
            "-f",
            "dshow",
            "-framerate",
            "30",
            "-video_size",
            "640x480",
            "-i",
            device.unwrap_or("video=Integrated Camera"),
        ]);
    } else {
        return Err("current OS not supported".into());
    }

    Ok(())
}

/// Output side: scale down to the mosaic grid, raw rgb24 frames,
/// latency flags, piped to stdout
fn output_setup(cmd: &mut Command, w: usize, h: usize) {
    cmd.arg("-vf").arg(format!("scale={w}:{h}"));
    cmd.args([
        "-f",
        "rawvideo",
        "-pix_fmt",
        "rgb24",
        "-probesize",
        "32",
        "-analyzeduration",
        "0",
        "-fflags",
        "nobuffer",
        "-flags",
        "low_delay",
        "pipe:1",
    ]);
}
