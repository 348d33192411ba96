use crate::traits::CameraDriver;
use std::fmt;

/// A capture size in pixels.
///
/// Supported entries are kept exactly as the driver reports them.
/// Requested sizes are normalized with [`Resolution::landscape`] before
/// matching, since capture hardware enumerates landscape sizes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel area, the similarity proxy used by resolution matching.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// The landscape-oriented form of this size (width >= height).
    pub fn landscape(&self) -> Self {
        if self.height > self.width {
            Self {
                width: self.height,
                height: self.width,
            }
        } else {
            *self
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Static capability record for one physical or logical camera.
///
/// Produced once per [`CapabilityCatalog::snapshot`] call and read-only
/// afterward. A conforming driver never reports empty `resolutions` or
/// `frame_rates`; negotiation rejects such a descriptor instead of
/// returning a degenerate result.
#[derive(Debug, Clone)]
pub struct CameraDescriptor {
    pub id: u32,
    pub front_facing: bool,
    /// Sensor mounting orientation in degrees.
    pub orientation: u32,
    pub resolutions: Vec<Resolution>,
    pub frame_rates: Vec<u32>,
}

/// Identity summary of one camera, as returned by bounded enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraSummary {
    pub id: u32,
    pub front_facing: bool,
    pub orientation: u32,
}

/// Result of one bounded enumeration pass.
///
/// `count` is the true total number of cameras in the snapshot; `entries`
/// holds only the first `min(count, max_results)` of them. A caller that
/// sees `count > entries.len()` re-invokes with a larger capacity to
/// observe the rest.
#[derive(Debug, Clone)]
pub struct CameraList {
    pub count: usize,
    pub entries: Vec<CameraSummary>,
}

impl CameraList {
    pub fn is_truncated(&self) -> bool {
        self.entries.len() < self.count
    }
}

/// Immutable snapshot of every camera the driver reports, with each
/// camera's supported resolutions and frame rates.
///
/// The snapshot is valid for one enumeration/negotiation pass. It is not
/// refreshed behind the caller's back; when the hardware set may have
/// changed (hot-plug), take a new snapshot rather than reuse a stale one.
#[derive(Debug, Clone, Default)]
pub struct CapabilityCatalog {
    cameras: Vec<CameraDescriptor>,
}

impl CapabilityCatalog {
    /// Query the driver and materialize the current capability set.
    ///
    /// A driver failure yields an empty snapshot, which this layer does
    /// not distinguish from "zero cameras present"; callers that must
    /// tell the two apart consult the driver directly.
    pub fn snapshot<D: CameraDriver>(driver: &D) -> Self {
        match driver.list_cameras() {
            Ok(cameras) => {
                log::debug!("capability snapshot: {} camera(s)", cameras.len());
                Self { cameras }
            }
            Err(err) => {
                log::warn!("camera enumeration failed: {err}");
                Self::default()
            }
        }
    }

    /// Build a catalog from already-materialized descriptors.
    pub fn from_cameras(cameras: Vec<CameraDescriptor>) -> Self {
        Self { cameras }
    }

    /// Descriptor for `id`, if the snapshot contains it.
    pub fn get(&self, id: u32) -> Option<&CameraDescriptor> {
        self.cameras.iter().find(|camera| camera.id == id)
    }

    /// All descriptors, in driver enumeration order.
    pub fn cameras(&self) -> &[CameraDescriptor] {
        &self.cameras
    }

    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Bounded view of the snapshot: at most `max_results` entries, in
    /// driver enumeration order, plus the true total count.
    pub fn enumerate(&self, max_results: usize) -> CameraList {
        let count = self.cameras.len();
        if count > max_results {
            log::warn!(
                "returning only the first {max_results} of {count} cameras \
                 (raise max_results to retrieve all)"
            );
        }

        let entries = self
            .cameras
            .iter()
            .take(max_results)
            .map(|camera| CameraSummary {
                id: camera.id,
                front_facing: camera.front_facing,
                orientation: camera.orientation,
            })
            .collect();

        CameraList { count, entries }
    }
}
