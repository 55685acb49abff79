//! Event bridge: translates host notifications into engine transitions.
//!
//! The bridge owns the engine, the activation state, and the per-dispatch
//! output buffer. Hosts call `dispatch` once per notification; each call
//! runs to completion before the next (single-threaded, cooperative), and
//! the returned outputs are valid until the next dispatch.

use crate::activation::ActivationState;
use crate::config::Config;
use crate::engine::Engine;
use crate::ids::{PlayerId, TeamId};
use crate::inputs::HostEvent;
use crate::markers::MarkerBackend;
use crate::outputs::{Outputs, OverlayEvent};
use crate::prefs::{Prefs, PrefsStore};
use crate::roster::RosterProvider;

/// Bindable action name exposed to the host's input-remap UI.
pub const TOGGLE_ACTION: &str = "Toggle Friendly Waypoints";

/// Host input-remap UI seam: receives the bindable action name.
pub trait ActionBinder {
    fn register_action(&mut self, name: &str);
}

/// Process-scoped context wiring host events to the engine.
#[derive(Debug)]
pub struct Bridge {
    engine: Engine,
    state: ActivationState,
    outputs: Outputs,
    action_registered: bool,
}

impl Bridge {
    pub fn new(cfg: Config) -> Self {
        Self {
            engine: Engine::new(cfg),
            state: ActivationState::Disabled,
            outputs: Outputs::default(),
            action_registered: false,
        }
    }

    #[inline]
    pub fn state(&self) -> ActivationState {
        self.state
    }

    #[inline]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Read persisted prefs once at process start and adopt the stored
    /// activation state. No markers are created here; while enabled, the
    /// first matching roster event rebuilds.
    pub fn restore(&mut self, prefs: &dyn PrefsStore) {
        self.state = if prefs.load().active {
            ActivationState::Enabled
        } else {
            ActivationState::Disabled
        };
    }

    /// Expose the bindable toggle action to the host remap UI.
    /// Registers at most once per process lifetime, so re-initialization
    /// never produces duplicate UI entries.
    pub fn register_action(&mut self, binder: &mut dyn ActionBinder) {
        if self.action_registered {
            return;
        }
        binder.register_action(TOGGLE_ACTION);
        self.action_registered = true;
    }

    /// Handle one host event to completion.
    /// Returns the events for the host to apply to its HUD.
    pub fn dispatch(
        &mut self,
        event: HostEvent,
        roster: &dyn RosterProvider,
        backend: &mut dyn MarkerBackend,
        prefs: &mut dyn PrefsStore,
    ) -> &Outputs {
        self.outputs.clear();
        match event {
            // Edge trigger: only the press acts, never the release.
            HostEvent::Toggle { pressed: false } => {}
            HostEvent::Toggle { pressed: true } => self.toggle(roster, backend, prefs),
            HostEvent::RosterChanged { team, member } => {
                self.roster_changed(team, member, roster, backend)
            }
            // Unconditional, regardless of activation state: no marker may
            // outlive the session.
            HostEvent::SessionEnded => {
                self.engine.teardown(backend);
                self.outputs.push_event(OverlayEvent::Cleared);
            }
        }
        &self.outputs
    }

    fn toggle(
        &mut self,
        roster: &dyn RosterProvider,
        backend: &mut dyn MarkerBackend,
        prefs: &mut dyn PrefsStore,
    ) {
        match self.state.toggle() {
            ActivationState::Enabled => {
                self.rebuild(roster, backend);
                self.status("Friendly Waypoints: Enabled");
            }
            ActivationState::Disabled => {
                self.engine.teardown(backend);
                self.outputs.push_event(OverlayEvent::Cleared);
                self.status("Friendly Waypoints: Disabled");
            }
        }
        prefs.save(Prefs {
            active: self.state.is_enabled(),
        });
    }

    fn roster_changed(
        &mut self,
        team: TeamId,
        member: PlayerId,
        roster: &dyn RosterProvider,
        backend: &mut dyn MarkerBackend,
    ) {
        if !self.state.is_enabled() {
            return;
        }
        let Some(my_team) = roster.local_team() else {
            return;
        };
        // A single membership delta can change which team the local player
        // belongs to, so any matching event invalidates the whole snapshot.
        if team == my_team || member == roster.local_identity() {
            self.rebuild(roster, backend);
        }
    }

    fn rebuild(&mut self, roster: &dyn RosterProvider, backend: &mut dyn MarkerBackend) {
        match self.engine.rebuild(roster, backend) {
            Ok(markers) => self.outputs.push_event(OverlayEvent::Rebuilt { markers }),
            Err(err) => {
                log::warn!("waypoint rebuild aborted: {err}");
                self.status("Could not find your team.");
            }
        }
    }

    fn status(&mut self, line: &str) {
        self.outputs.push_event(OverlayEvent::Status {
            line: line.to_string(),
        });
    }
}
