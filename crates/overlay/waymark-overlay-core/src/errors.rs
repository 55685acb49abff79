//! Error taxonomy for the overlay engine.
//!
//! Everything here is recoverable: a failed rebuild leaves the registry
//! cleared and is retried on the next triggering event; a failed destroy is
//! logged and teardown continues. Nothing in this crate aborts the host.

use thiserror::Error;

use crate::ids::{MarkerHandle, TeamId};

/// Errors produced while rebuilding the marker set.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// The local player is not currently on any team.
    #[error("local player has no team")]
    NoLocalTeam,
    /// The roster provider could not resolve the team.
    #[error("could not resolve team {0:?}")]
    RosterUnavailable(TeamId),
}

/// A marker backend failed to destroy a handle.
#[derive(Debug, Error)]
#[error("failed to destroy marker {0:?}")]
pub struct DestroyError(pub MarkerHandle);
