use crate::catalog::Resolution;

/// Desired capture configuration, before negotiation.
///
/// Carries the product-driven values a caller wants (e.g. QVGA at 30 fps);
/// these rarely coincide with hardware-native values and are matched
/// against the capability snapshot by [`CapabilityCatalog::negotiate`].
///
/// [`CapabilityCatalog::negotiate`]: crate::catalog::CapabilityCatalog::negotiate
#[derive(Clone, Debug)]
pub struct CaptureRequest {
    width: u32,
    height: u32,
    frame_rate: u32,
}

impl Default for CaptureRequest {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            frame_rate: 30,
        }
    }
}

impl CaptureRequest {
    /// Set the requested width in pixels.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the requested height in pixels.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Set the requested frame rate in frames per second.
    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    // Getters
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }
}

/// Concrete hardware-supported configuration produced by negotiation.
///
/// Consumed by [`CameraDriver::open_session`] to open a capture session.
///
/// [`CameraDriver::open_session`]: crate::traits::CameraDriver::open_session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegotiatedConfig {
    pub camera_id: u32,
    pub resolution: Resolution,
    pub frame_rate: u32,
}
