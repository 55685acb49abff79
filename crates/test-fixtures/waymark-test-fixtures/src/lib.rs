//! Fake host collaborators shared by the overlay test suites.
//!
//! Each fake implements one of the core seams with full call accounting so
//! tests can assert create/destroy symmetry, persistence writes, and
//! registration idempotency without a live game host.

use waymark_overlay_core::{
    ActionBinder, DestroyError, MarkerBackend, MarkerHandle, PlayerId, Prefs, PrefsStore,
    RosterProvider, TargetRef, TeamId, TeamMember, TeamSnapshot,
};

/// Build one roster entry. `target: None` models a not-yet-resolved member.
pub fn member(id: u32, name: &str, target: Option<u32>) -> TeamMember {
    TeamMember {
        id: PlayerId(id),
        name: name.to_string(),
        target: target.map(TargetRef),
    }
}

/// Mutable in-memory roster standing in for the host's identity provider.
pub struct FakeRoster {
    pub me: PlayerId,
    pub my_team: Option<TeamId>,
    pub teams: Vec<(TeamId, Vec<TeamMember>)>,
}

impl FakeRoster {
    pub fn new(me: u32, my_team: u32) -> Self {
        Self {
            me: PlayerId(me),
            my_team: Some(TeamId(my_team)),
            teams: Vec::new(),
        }
    }

    /// A roster whose local player has no team at all.
    pub fn teamless(me: u32) -> Self {
        Self {
            me: PlayerId(me),
            my_team: None,
            teams: Vec::new(),
        }
    }

    pub fn with_team(mut self, team: u32, members: Vec<TeamMember>) -> Self {
        self.teams.push((TeamId(team), members));
        self
    }

    /// Replace a team's membership, as the host would on a roster delta.
    pub fn set_team(&mut self, team: u32, members: Vec<TeamMember>) {
        let team = TeamId(team);
        if let Some(entry) = self.teams.iter_mut().find(|(t, _)| *t == team) {
            entry.1 = members;
        } else {
            self.teams.push((team, members));
        }
    }
}

impl RosterProvider for FakeRoster {
    fn resolve_team(&self, team: TeamId) -> Option<TeamSnapshot> {
        self.teams
            .iter()
            .find(|(t, _)| *t == team)
            .map(|(t, members)| TeamSnapshot {
                team: *t,
                members: members.clone(),
            })
    }

    fn local_identity(&self) -> PlayerId {
        self.me
    }

    fn local_team(&self) -> Option<TeamId> {
        self.my_team
    }
}

/// Marker backend with monotonic handles and create/destroy accounting.
#[derive(Default)]
pub struct FakeMarkerBackend {
    next: u32,
    /// Handles created and not yet destroyed.
    pub live: Vec<MarkerHandle>,
    /// Labels in creation order, for naming-rule assertions.
    pub labels: Vec<String>,
    /// Total create calls that succeeded.
    pub created: usize,
    /// Total destroy calls issued (including repeats and failures).
    pub destroy_calls: usize,
    /// Targets whose creation the backend rejects.
    pub reject: Vec<TargetRef>,
    /// Handles whose destruction reports failure.
    pub fail_destroy: Vec<MarkerHandle>,
}

impl FakeMarkerBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject_target(&mut self, target: u32) {
        self.reject.push(TargetRef(target));
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl MarkerBackend for FakeMarkerBackend {
    fn create_marker(&mut self, target: TargetRef, label: &str) -> Option<MarkerHandle> {
        if self.reject.contains(&target) {
            return None;
        }
        let handle = MarkerHandle(self.next);
        self.next = self.next.wrapping_add(1);
        self.live.push(handle);
        self.labels.push(label.to_string());
        self.created += 1;
        Some(handle)
    }

    fn destroy_marker(&mut self, marker: MarkerHandle) -> Result<(), DestroyError> {
        self.destroy_calls += 1;
        if self.fail_destroy.contains(&marker) {
            return Err(DestroyError(marker));
        }
        // Destroying an already-destroyed handle is success.
        self.live.retain(|h| *h != marker);
        Ok(())
    }
}

/// In-memory preference store with write accounting.
#[derive(Default)]
pub struct MemoryPrefs {
    pub stored: Prefs,
    pub saves: usize,
}

impl PrefsStore for MemoryPrefs {
    fn load(&self) -> Prefs {
        self.stored
    }

    fn save(&mut self, prefs: Prefs) {
        self.stored = prefs;
        self.saves += 1;
    }
}

/// Records every action name the bridge registers.
#[derive(Default)]
pub struct RecordingBinder {
    pub actions: Vec<String>,
}

impl ActionBinder for RecordingBinder {
    fn register_action(&mut self, name: &str) {
        self.actions.push(name.to_string());
    }
}
