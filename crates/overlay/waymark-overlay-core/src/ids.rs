//! Identifiers for externally-issued entities.
//!
//! Unlike engine-allocated ids, every id here is minted by the host: the
//! roster provider issues player/team ids, the marker backend issues marker
//! handles. They are opaque to the engine and only compared for equality.

use serde::{Deserialize, Serialize};

/// Externally-issued player identifier; stable for the session.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

/// Externally-issued team identifier.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

/// Opaque reference usable to create a marker for one entity.
/// A roster entry without one is a valid transient state, not an error.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TargetRef(pub u32);

/// Owned handle for one on-screen waypoint, issued by the marker backend.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MarkerHandle(pub u32);
