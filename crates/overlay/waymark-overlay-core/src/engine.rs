//! Engine: marker-set reconciliation against a live roster.
//!
//! Policy is full rebuild, not incremental diff: rosters are small (bounded
//! by the host display capacity) and rebuilds are infrequent, so each pass
//! clears the registry and recreates the desired set from a fresh snapshot.
//! Both `rebuild` and `teardown` are idempotent and safe back-to-back.

use crate::config::Config;
use crate::errors::OverlayError;
use crate::markers::{Marker, MarkerBackend, MarkerRegistry};
use crate::roster::RosterProvider;

/// Synchronization engine owning the marker registry.
#[derive(Debug)]
pub struct Engine {
    cfg: Config,
    registry: MarkerRegistry,
}

impl Engine {
    /// Create a new engine with the given config.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            registry: MarkerRegistry::new(),
        }
    }

    /// Number of markers currently registered.
    #[inline]
    pub fn marker_count(&self) -> usize {
        self.registry.count()
    }

    /// Live markers, for host-side introspection.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.registry.iter()
    }

    /// Full rebuild of the marker set.
    ///
    /// Clears every registered marker, fetches a fresh snapshot of the
    /// local player's team, and creates one marker per member with a valid
    /// target, excluding the local player. Members are processed in
    /// snapshot order; empty display names fall back to a placeholder
    /// whose ordinal is the number of markers created so far in this pass.
    ///
    /// On failure the registry stays cleared and the error is returned;
    /// the next triggering event retries. Returns markers created.
    pub fn rebuild(
        &mut self,
        roster: &dyn RosterProvider,
        backend: &mut dyn MarkerBackend,
    ) -> Result<usize, OverlayError> {
        // 1) Clear any existing markers first; a failed resolve must not
        //    leave stale markers behind.
        self.registry.clear(backend);

        // 2) Fresh snapshot of the local team.
        let team = roster.local_team().ok_or(OverlayError::NoLocalTeam)?;
        let snapshot = roster
            .resolve_team(team)
            .ok_or(OverlayError::RosterUnavailable(team))?;
        let me = roster.local_identity();

        // 3) Recreate the desired set in snapshot order.
        let mut created = 0usize;
        for member in &snapshot.members {
            if created >= self.cfg.max_markers {
                log::debug!(
                    "marker capacity {} reached, truncating team {:?}",
                    self.cfg.max_markers,
                    team
                );
                break;
            }
            if member.id == me {
                continue;
            }
            let Some(target) = member.target else {
                continue;
            };
            let label = if member.name.is_empty() {
                format!("{} {}", self.cfg.placeholder_prefix, created)
            } else {
                member.name.clone()
            };
            // Create failure skips the member; the pass continues.
            let Some(handle) = backend.create_marker(target, &label) else {
                continue;
            };
            self.registry.add(Marker {
                handle,
                owner: member.id,
                label,
            });
            created += 1;
        }
        Ok(created)
    }

    /// Destroy every registered marker. Safe to call when none exist.
    pub fn teardown(&mut self, backend: &mut dyn MarkerBackend) {
        self.registry.clear(backend);
    }
}
