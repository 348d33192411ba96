use crate::catalog::{CapabilityCatalog, Resolution};
use crate::config::{CaptureRequest, NegotiatedConfig};
use crate::error::CameraError;

/// Select the supported resolution nearest the requested one.
///
/// The request is normalized to landscape before matching. An exact match
/// returns immediately regardless of its position in `supported`;
/// otherwise the candidate with the smallest pixel-area distance wins.
/// Equal distances keep the earliest-listed candidate, so the outcome
/// depends on the driver-reported order of `supported`.
///
/// Returns `None` only when `supported` is empty.
pub fn select_resolution(
    requested_width: u32,
    requested_height: u32,
    supported: &[Resolution],
) -> Option<Resolution> {
    let requested = Resolution::new(requested_width, requested_height).landscape();
    log::debug!(
        "select_resolution: requested {requested}, {} candidate(s)",
        supported.len()
    );

    let requested_area = requested.area();
    let mut best: Option<Resolution> = None;
    let mut best_distance = u64::MAX;

    for &candidate in supported {
        if candidate == requested {
            return Some(candidate);
        }

        let distance = requested_area.abs_diff(candidate.area());
        if distance < best_distance {
            best_distance = distance;
            best = Some(candidate);
        }
    }

    best
}

/// Select the supported frame rate nearest the requested one.
///
/// Nearest by absolute difference; equal differences keep the
/// earliest-listed candidate. No exact-match short-circuit is needed: a
/// zero difference is the global minimum and survives the strict
/// less-than comparison.
///
/// Returns `None` only when `supported` is empty.
pub fn select_frame_rate(requested: u32, supported: &[u32]) -> Option<u32> {
    let mut chosen: Option<u32> = None;
    let mut best_diff = u32::MAX;

    for &candidate in supported {
        let diff = candidate.abs_diff(requested);
        if diff < best_diff {
            best_diff = diff;
            chosen = Some(candidate);
        }
    }

    chosen
}

impl CapabilityCatalog {
    /// Negotiate a concrete `{resolution, frame rate}` configuration for
    /// `camera_id` from this snapshot.
    ///
    /// Pure over the snapshot and the request: identical inputs yield
    /// identical results, and no I/O happens here. Opening the session
    /// with the returned configuration is the driver's job.
    ///
    /// # Errors
    ///
    /// - [`CameraError::InvalidRequest`] for a zero requested dimension
    ///   or frame rate
    /// - [`CameraError::NotFound`] when the snapshot has no camera with
    ///   this id
    /// - [`CameraError::NoCapabilities`] when the descriptor carries an
    ///   empty resolution or frame-rate set
    pub fn negotiate(
        &self,
        camera_id: u32,
        request: &CaptureRequest,
    ) -> Result<NegotiatedConfig, CameraError> {
        log::debug!(
            "negotiate: camera {camera_id}, {}x{} @ {} fps",
            request.width(),
            request.height(),
            request.frame_rate()
        );

        if request.width() == 0 || request.height() == 0 {
            return Err(CameraError::InvalidRequest(format!(
                "requested size {}x{} has a zero dimension",
                request.width(),
                request.height()
            )));
        }
        if request.frame_rate() == 0 {
            return Err(CameraError::InvalidRequest(
                "requested frame rate is zero".to_string(),
            ));
        }

        let camera = self
            .get(camera_id)
            .ok_or(CameraError::NotFound(camera_id))?;

        let resolution = select_resolution(request.width(), request.height(), &camera.resolutions)
            .ok_or(CameraError::NoCapabilities(camera_id))?;
        let frame_rate = select_frame_rate(request.frame_rate(), &camera.frame_rates)
            .ok_or(CameraError::NoCapabilities(camera_id))?;

        log::debug!("negotiated camera {camera_id}: {resolution} @ {frame_rate} fps");

        Ok(NegotiatedConfig {
            camera_id,
            resolution,
            frame_rate,
        })
    }
}
