//! Roster snapshot types and the provider seam.
//!
//! The roster is owned and mutated by the host; the engine only ever sees
//! point-in-time snapshots. A snapshot is stale the moment it is returned
//! and must never be cached beyond one reconciliation pass.

use serde::{Deserialize, Serialize};

use crate::ids::{PlayerId, TargetRef, TeamId};

/// One roster entry at snapshot time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: PlayerId,
    /// Display name; may be empty, in which case a placeholder label is used.
    #[serde(default)]
    pub name: String,
    /// Markable reference for this member, if the host has resolved one.
    #[serde(default)]
    pub target: Option<TargetRef>,
}

/// Ordered point-in-time view of one team's membership.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TeamSnapshot {
    pub team: TeamId,
    pub members: Vec<TeamMember>,
}

/// Trait for querying the externally-owned roster.
/// Hosts implement this and pass it into Bridge::dispatch() per event.
pub trait RosterProvider {
    /// Resolve a team into a fresh snapshot, or `None` if unknown.
    fn resolve_team(&self, team: TeamId) -> Option<TeamSnapshot>;
    /// Identity of the local player.
    fn local_identity(&self) -> PlayerId;
    /// Team the local player currently belongs to, if any.
    fn local_team(&self) -> Option<TeamId>;
}
