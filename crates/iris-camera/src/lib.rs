//! Camera capability negotiation for the iris ecosystem.
//!
//! Capture hardware supports a finite, often sparse, list of resolutions
//! and frame rates. This crate snapshots the reported capability set of
//! every visible camera and selects the supported configuration nearest a
//! requested one, with an explicit tie-break policy. The physical device
//! is reached through the [`CameraDriver`] seam; raw frame buffers leave
//! through the [`FrameSink`] seam.

pub mod catalog;
pub mod config;
pub mod error;
pub mod negotiate;
pub mod session;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use catalog::{CameraDescriptor, CameraList, CameraSummary, CapabilityCatalog, Resolution};
pub use config::{CaptureRequest, NegotiatedConfig};
pub use error::CameraError;
pub use negotiate::{select_frame_rate, select_resolution};
pub use session::{CaptureSession, ChannelSink};
pub use traits::{CameraDriver, FrameSink};

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Driver;
