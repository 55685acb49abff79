//! Input contracts: notifications delivered by the host.
//!
//! Hosts translate their native callbacks (key binding, roster callback,
//! session teardown) into these events and pass them into
//! Bridge::dispatch() one at a time, each handled to completion.

use serde::{Deserialize, Serialize};

use crate::ids::{PlayerId, TeamId};

/// One host notification.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum HostEvent {
    /// Raw toggle signal. `pressed` is false on key release; only the
    /// press edge acts, so holding the key never repeats the toggle.
    Toggle { pressed: bool },
    /// Membership of `team` changed because of `member`.
    RosterChanged { team: TeamId, member: PlayerId },
    /// The session is being torn down.
    SessionEnded,
}
