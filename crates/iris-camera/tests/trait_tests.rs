use iris_camera::{
    CameraDescriptor, CameraDriver, CameraError, CaptureSession, FrameSink, NegotiatedConfig,
    Resolution,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// Mock driver that counts open/close calls
struct CountingDriver {
    opens: Arc<AtomicUsize>,
    closes: Arc<AtomicUsize>,
    fail_open: bool,
}

impl CountingDriver {
    fn new() -> Self {
        Self {
            opens: Arc::new(AtomicUsize::new(0)),
            closes: Arc::new(AtomicUsize::new(0)),
            fail_open: false,
        }
    }

    fn failing_open() -> Self {
        Self {
            fail_open: true,
            ..Self::new()
        }
    }
}

impl CameraDriver for CountingDriver {
    type Session = u32;

    fn list_cameras(&self) -> Result<Vec<CameraDescriptor>, CameraError> {
        Ok(vec![CameraDescriptor {
            id: 0,
            front_facing: false,
            orientation: 0,
            resolutions: vec![Resolution::new(640, 480)],
            frame_rates: vec![30],
        }])
    }

    fn open_session(
        &self,
        config: &NegotiatedConfig,
        _sink: Box<dyn FrameSink>,
    ) -> Result<u32, CameraError> {
        if self.fail_open {
            return Err(CameraError::Device("open failed".to_string()));
        }
        self.opens.fetch_add(1, Ordering::SeqCst);
        Ok(config.camera_id)
    }

    fn close_session(&self, _session: u32) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

struct NullSink;

impl FrameSink for NullSink {
    fn push_frame(&mut self, _frame: &[u8]) -> bool {
        true
    }
}

fn config() -> NegotiatedConfig {
    NegotiatedConfig {
        camera_id: 0,
        resolution: Resolution::new(640, 480),
        frame_rate: 30,
    }
}

#[test]
fn test_session_closes_on_drop() {
    let driver = CountingDriver::new();

    {
        let session = CaptureSession::open(&driver, config(), Box::new(NullSink)).unwrap();
        assert_eq!(session.config().camera_id, 0);
        assert_eq!(driver.closes.load(Ordering::SeqCst), 0);
    }

    assert_eq!(driver.opens.load(Ordering::SeqCst), 1);
    assert_eq!(driver.closes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_session_explicit_stop_closes_once() {
    let driver = CountingDriver::new();

    let session = CaptureSession::open(&driver, config(), Box::new(NullSink)).unwrap();
    session.stop();

    assert_eq!(driver.closes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_failed_open_releases_nothing() {
    let driver = CountingDriver::failing_open();

    let result = CaptureSession::open(&driver, config(), Box::new(NullSink));

    match result {
        Err(CameraError::Device(_)) => {}
        other => panic!("Expected CameraError::Device, got {:?}", other),
    }
    assert_eq!(driver.opens.load(Ordering::SeqCst), 0);
    assert_eq!(driver.closes.load(Ordering::SeqCst), 0);
}

#[test]
fn test_session_config_preserved() {
    let driver = CountingDriver::new();
    let negotiated = config();

    let session = CaptureSession::open(&driver, negotiated, Box::new(NullSink)).unwrap();

    assert_eq!(*session.config(), negotiated);
}
