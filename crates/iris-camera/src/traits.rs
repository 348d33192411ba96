use crate::catalog::CameraDescriptor;
use crate::config::NegotiatedConfig;
use crate::error::CameraError;

/// Device driver seam: the only path to the physical capture hardware.
///
/// The negotiation core calls `list_cameras` alone; the session layer
/// uses `open_session`/`close_session`. Implementations report cameras in
/// a stable enumeration order, since tie-breaks during matching depend
/// on it.
pub trait CameraDriver {
    /// Opaque open-capture state owned by the driver.
    type Session;

    /// Every camera currently visible, with its full capability set.
    ///
    /// A descriptor with an empty resolution or frame-rate set is a
    /// contract violation; negotiation rejects it.
    fn list_cameras(&self) -> Result<Vec<CameraDescriptor>, CameraError>;

    /// Open a capture session for a negotiated configuration. Frame
    /// buffers flow to `sink` until the session is closed or the sink
    /// reports disconnection.
    fn open_session(
        &self,
        config: &NegotiatedConfig,
        sink: Box<dyn FrameSink>,
    ) -> Result<Self::Session, CameraError>;

    /// Tear down an open session and release the device.
    fn close_session(&self, session: Self::Session);
}

/// Receives raw frame buffers from an open capture session.
///
/// Buffers are borrowed and valid only for the duration of the call; a
/// sink that keeps frame data copies it. The return value is the
/// keep-alive signal: `false` means the consumer is gone and the driver
/// stops delivering.
pub trait FrameSink: Send {
    fn push_frame(&mut self, frame: &[u8]) -> bool;
}
