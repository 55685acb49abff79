//! Waymark Overlay Core (host-agnostic)
//!
//! Engine that keeps a set of on-screen waypoint markers in sync with the
//! local player's team roster. Hosts translate their native callbacks into
//! [`HostEvent`]s, hand them to [`Bridge::dispatch`] together with the
//! roster/marker/preference seams, and drain the returned [`Outputs`].
//! The crate defines the id and snapshot contracts, the marker registry,
//! the activation state machine, and the reconciliation engine.

pub mod activation;
pub mod bridge;
pub mod config;
pub mod engine;
pub mod errors;
pub mod ids;
pub mod inputs;
pub mod markers;
pub mod outputs;
pub mod prefs;
pub mod roster;

// Re-exports for consumers (host adapters)
pub use activation::ActivationState;
pub use bridge::{ActionBinder, Bridge, TOGGLE_ACTION};
pub use config::Config;
pub use engine::Engine;
pub use errors::{DestroyError, OverlayError};
pub use ids::{MarkerHandle, PlayerId, TargetRef, TeamId};
pub use inputs::HostEvent;
pub use markers::{Marker, MarkerBackend, MarkerRegistry};
pub use outputs::{Outputs, OverlayEvent};
pub use prefs::{JsonFilePrefs, Prefs, PrefsStore};
pub use roster::{RosterProvider, TeamMember, TeamSnapshot};
