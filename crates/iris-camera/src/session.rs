use crate::config::NegotiatedConfig;
use crate::error::CameraError;
use crate::traits::{CameraDriver, FrameSink};
use tokio::sync::mpsc;

/// An open capture session, closed through the driver when dropped.
///
/// Scoped acquisition with guaranteed release: every exit path, including
/// early returns and panics in the owning scope, runs `close_session`
/// exactly once. When the driver's open call itself fails, nothing was
/// acquired and nothing is released.
pub struct CaptureSession<'d, D: CameraDriver> {
    driver: &'d D,
    config: NegotiatedConfig,
    inner: Option<D::Session>,
}

impl<'d, D: CameraDriver> std::fmt::Debug for CaptureSession<'d, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureSession")
            .field("config", &self.config)
            .field("open", &self.inner.is_some())
            .finish()
    }
}

impl<'d, D: CameraDriver> CaptureSession<'d, D> {
    /// Open a session for an already-negotiated configuration.
    pub fn open(
        driver: &'d D,
        config: NegotiatedConfig,
        sink: Box<dyn FrameSink>,
    ) -> Result<Self, CameraError> {
        log::debug!(
            "opening capture session: camera {}, {} @ {} fps",
            config.camera_id,
            config.resolution,
            config.frame_rate
        );

        let inner = driver.open_session(&config, sink)?;
        Ok(Self {
            driver,
            config,
            inner: Some(inner),
        })
    }

    /// The configuration this session was opened with.
    pub fn config(&self) -> &NegotiatedConfig {
        &self.config
    }

    /// Stop the session now instead of at end of scope.
    pub fn stop(mut self) {
        self.close();
    }

    fn close(&mut self) {
        if let Some(session) = self.inner.take() {
            log::debug!("closing capture session: camera {}", self.config.camera_id);
            self.driver.close_session(session);
        }
    }
}

impl<'d, D: CameraDriver> Drop for CaptureSession<'d, D> {
    fn drop(&mut self) {
        self.close();
    }
}

/// [`FrameSink`] adapter that delivers frames to an async consumer over a
/// bounded channel.
///
/// The capture side copies each buffer and blocks when the channel is
/// full (backpressure, not frame dropping). A dropped receiver reads as
/// sink disconnection, which stops the driver's delivery loop.
pub struct ChannelSink {
    tx: mpsc::Sender<Vec<u8>>,
}

impl ChannelSink {
    /// Create a sink and its receiving end. `capacity` bounds the number
    /// of in-flight frames.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<Vec<u8>>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

impl FrameSink for ChannelSink {
    fn push_frame(&mut self, frame: &[u8]) -> bool {
        self.tx.blocking_send(frame.to_vec()).is_ok()
    }
}
