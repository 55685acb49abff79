//! Marker backend seam and the registry of live waypoint handles.
//!
//! The registry is the only persistent mutable state in the engine and the
//! single source of truth for what must be torn down. Hosts implement
//! `MarkerBackend`; create failures surface as `None` (the member is simply
//! skipped), destroy failures are logged and never abort teardown.

use serde::{Deserialize, Serialize};

use crate::errors::DestroyError;
use crate::ids::{MarkerHandle, PlayerId, TargetRef};

/// Trait for the host's waypoint display layer.
pub trait MarkerBackend {
    /// Create a waypoint for `target` labeled `label`.
    /// Returns `None` when the reference cannot be turned into a marker.
    fn create_marker(&mut self, target: TargetRef, label: &str) -> Option<MarkerHandle>;

    /// Destroy a previously created waypoint.
    /// Destroying an already-destroyed handle must be treated as success.
    fn destroy_marker(&mut self, marker: MarkerHandle) -> Result<(), DestroyError>;
}

/// One live waypoint and the roster identity it points at.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Marker {
    pub handle: MarkerHandle,
    pub owner: PlayerId,
    pub label: String,
}

/// Set of live markers. Insertion order is irrelevant.
#[derive(Default, Debug)]
pub struct MarkerRegistry {
    markers: Vec<Marker>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.markers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    /// Destroy every registered marker and empty the registry.
    /// Destroy is best-effort per element: a failure is logged and the
    /// remaining markers are still torn down. Safe to call when empty.
    pub fn clear(&mut self, backend: &mut dyn MarkerBackend) {
        for marker in self.markers.drain(..) {
            if let Err(err) = backend.destroy_marker(marker.handle) {
                log::warn!("waypoint teardown: {err}");
            }
        }
    }
}
