use crate::catalog::{CameraDescriptor, Resolution};
use crate::config::NegotiatedConfig;
use crate::error::CameraError;
use crate::traits::{CameraDriver, FrameSink};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use v4l::buffer::Type;
use v4l::frameinterval::FrameIntervalEnum;
use v4l::framesize::FrameSizeEnum;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

/// V4L2-backed camera driver.
///
/// Camera ids are V4L2 device node indexes (`/dev/videoN`). V4L2 reports
/// neither sensor orientation nor facing, so descriptors carry
/// `orientation = 0` and `front_facing = false`.
pub struct V4l2Driver {
    buffer_count: u32,
}

impl V4l2Driver {
    pub fn new() -> Self {
        Self { buffer_count: 4 }
    }

    /// Set the mmap buffer count used by capture sessions.
    pub fn with_buffer_count(mut self, buffer_count: u32) -> Self {
        self.buffer_count = buffer_count;
        self
    }
}

impl Default for V4l2Driver {
    fn default() -> Self {
        Self::new()
    }
}

/// Open capture state: the stop flag and the capture thread.
///
/// Dropping the session stops and joins the thread; the device is
/// released when the thread's stream goes away.
pub struct V4l2Session {
    stop: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
}

impl Drop for V4l2Session {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl CameraDriver for V4l2Driver {
    type Session = V4l2Session;

    fn list_cameras(&self) -> Result<Vec<CameraDescriptor>, CameraError> {
        let mut cameras = Vec::new();

        for node in v4l::context::enum_devices() {
            let index = node.index();
            let device = match Device::new(index) {
                Ok(device) => device,
                Err(err) => {
                    log::debug!("skipping {}: {err}", node.path().display());
                    continue;
                }
            };

            let Some(fourcc) = preferred_format(&device) else {
                log::debug!("skipping {}: no pixel formats", node.path().display());
                continue;
            };

            let resolutions = discrete_resolutions(&device, fourcc);
            if resolutions.is_empty() {
                log::debug!("skipping {}: no discrete frame sizes", node.path().display());
                continue;
            }

            let frame_rates = discrete_frame_rates(&device, fourcc, resolutions[0]);
            if frame_rates.is_empty() {
                log::debug!("skipping {}: no frame intervals", node.path().display());
                continue;
            }

            cameras.push(CameraDescriptor {
                id: index as u32,
                front_facing: false,
                orientation: 0,
                resolutions,
                frame_rates,
            });
        }

        Ok(cameras)
    }

    fn open_session(
        &self,
        config: &NegotiatedConfig,
        sink: Box<dyn FrameSink>,
    ) -> Result<V4l2Session, CameraError> {
        let device = Device::new(config.camera_id as usize)?;

        let fourcc = preferred_format(&device).ok_or_else(|| {
            CameraError::Device(format!(
                "camera {} reports no pixel formats",
                config.camera_id
            ))
        })?;

        let format = Format::new(config.resolution.width, config.resolution.height, fourcc);
        let format = Capture::set_format(&device, &format)?;

        // A negotiated size comes from the device's own capability list,
        // so the device must honor it.
        if format.width != config.resolution.width || format.height != config.resolution.height {
            return Err(CameraError::Device(format!(
                "device rejected negotiated size {} (offered {}x{})",
                config.resolution, format.width, format.height
            )));
        }

        let params = v4l::video::capture::Parameters::with_fps(config.frame_rate);
        Capture::set_params(&device, &params)?;

        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let buffer_count = self.buffer_count;

        let thread_handle = thread::spawn(move || {
            if let Err(err) = capture_loop(device, sink, &thread_stop, buffer_count) {
                log::warn!("capture thread exited: {err}");
            }
        });

        Ok(V4l2Session {
            stop,
            thread_handle: Some(thread_handle),
        })
    }

    fn close_session(&self, session: V4l2Session) {
        // Drop stops the thread and joins it.
        drop(session);
    }
}

/// Background thread capture loop.
///
/// Dequeues mmap buffers and hands them to the sink. The stop flag is
/// observed between frames; `next()` wakes once per delivered frame.
fn capture_loop(
    device: Device,
    mut sink: Box<dyn FrameSink>,
    stop: &AtomicBool,
    buffer_count: u32,
) -> Result<(), CameraError> {
    let mut stream = MmapStream::with_buffers(&device, Type::VideoCapture, buffer_count)
        .map_err(|err| CameraError::Stream(err.to_string()))?;

    while !stop.load(Ordering::Acquire) {
        let (frame, _metadata) = CaptureStream::next(&mut stream)
            .map_err(|err| CameraError::Stream(err.to_string()))?;

        // Buffer is only valid until the next dequeue; the sink copies
        // if it keeps the data. A false return means the consumer is
        // gone.
        if !sink.push_frame(frame) {
            break;
        }
    }

    Ok(())
}

/// Pixel format used for capability queries and capture, MJPEG preferred.
fn preferred_format(device: &Device) -> Option<FourCC> {
    let formats = device.enum_formats().unwrap_or_default();
    let mjpg = FourCC::new(b"MJPG");
    if formats.iter().any(|format| format.fourcc == mjpg) {
        return Some(mjpg);
    }
    formats.first().map(|format| format.fourcc)
}

/// Discrete frame sizes for `fourcc`, in driver order.
fn discrete_resolutions(device: &Device, fourcc: FourCC) -> Vec<Resolution> {
    let mut resolutions = Vec::new();
    for framesize in device.enum_framesizes(fourcc).unwrap_or_default() {
        if let FrameSizeEnum::Discrete(discrete) = framesize.size {
            resolutions.push(Resolution::new(discrete.width, discrete.height));
        }
    }
    resolutions
}

/// Frame rates the device advertises for `resolution`, in driver order.
///
/// Discrete intervals convert as denominator/numerator; stepwise
/// intervals report 30 fps, the conventional fallback for devices that
/// only publish a range.
fn discrete_frame_rates(device: &Device, fourcc: FourCC, resolution: Resolution) -> Vec<u32> {
    let mut rates = Vec::new();
    let intervals = device
        .enum_frameintervals(fourcc, resolution.width, resolution.height)
        .unwrap_or_default();

    for interval in intervals {
        let fps = match interval.interval {
            FrameIntervalEnum::Discrete(fraction) if fraction.numerator > 0 => {
                fraction.denominator / fraction.numerator
            }
            _ => 30,
        };
        if fps > 0 && !rates.contains(&fps) {
            rates.push(fps);
        }
    }

    rates
}
