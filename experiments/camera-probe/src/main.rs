use iris_camera::{
    CameraSummary, CapabilityCatalog, CaptureRequest, CaptureSession, ChannelSink, V4l2Driver,
};

const REQUESTED_WIDTH: u32 = 320;
const REQUESTED_HEIGHT: u32 = 240;
const REQUESTED_FPS: u32 = 30;
const MAX_RESULTS: usize = 4;
const FRAMES_TO_GRAB: usize = 10;
const CHANNEL_CAPACITY: usize = 4;

/// One status line per enumerated camera.
fn describe_camera(summary: &CameraSummary) -> String {
    let facing = if summary.front_facing { "front" } else { "rear" };
    format!(
        "camera {}: {facing}-facing, orientation {}°",
        summary.id, summary.orientation
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    iris_base::init_stdout_logger();

    println!("Camera Probe");
    println!(
        "Requesting: {}x{} @ {} fps",
        REQUESTED_WIDTH, REQUESTED_HEIGHT, REQUESTED_FPS
    );
    println!();

    let driver = V4l2Driver::new();
    let catalog = CapabilityCatalog::snapshot(&driver);
    let list = catalog.enumerate(MAX_RESULTS);

    println!("{} camera(s) detected", list.count);
    for summary in &list.entries {
        println!("  {}", describe_camera(summary));
    }
    if list.is_truncated() {
        println!("  (showing first {} only)", list.entries.len());
    }

    let Some(first) = list.entries.first() else {
        println!("No cameras, nothing to probe");
        return Ok(());
    };

    let request = CaptureRequest::default()
        .with_width(REQUESTED_WIDTH)
        .with_height(REQUESTED_HEIGHT)
        .with_frame_rate(REQUESTED_FPS);
    let config = catalog.negotiate(first.id, &request)?;
    println!(
        "Negotiated: {} @ {} fps on camera {}",
        config.resolution, config.frame_rate, config.camera_id
    );

    let (sink, mut frames) = ChannelSink::new(CHANNEL_CAPACITY);
    let session = CaptureSession::open(&driver, config, Box::new(sink))?;

    for i in 0..FRAMES_TO_GRAB {
        match frames.recv().await {
            Some(frame) => println!("frame {i}: {} bytes", frame.len()),
            None => {
                println!("capture ended early");
                break;
            }
        }
    }

    session.stop();
    println!("Done");
    Ok(())
}
