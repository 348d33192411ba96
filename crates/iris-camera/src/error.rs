use std::fmt;

#[derive(Debug)]
pub enum CameraError {
    /// Requested camera id is absent from the current snapshot.
    NotFound(u32),
    /// Camera descriptor carries an empty resolution or frame-rate set.
    NoCapabilities(u32),
    /// Malformed request (zero dimension or zero frame rate).
    InvalidRequest(String),
    Device(String),
    Stream(String),
    Channel(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::NotFound(id) => write!(f, "camera {id} not found"),
            CameraError::NoCapabilities(id) => write!(f, "camera {id} reports no capabilities"),
            CameraError::InvalidRequest(msg) => write!(f, "invalid request: {msg}"),
            CameraError::Device(msg) => write!(f, "device error: {msg}"),
            CameraError::Stream(msg) => write!(f, "stream error: {msg}"),
            CameraError::Channel(msg) => write!(f, "channel error: {msg}"),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        CameraError::Device(err.to_string())
    }
}
