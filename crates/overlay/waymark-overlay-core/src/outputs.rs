//! Output contracts from the overlay engine.
//!
//! Outputs carry the status lines and semantic signals produced while
//! handling one host event. Hosts drain them after each dispatch and apply
//! them to their HUD.

use serde::{Deserialize, Serialize};

/// Discrete signals emitted during one dispatch.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[non_exhaustive]
pub enum OverlayEvent {
    /// One-line status message for the HUD message area.
    Status { line: String },
    /// A rebuild pass completed and registered this many markers.
    Rebuilt { markers: usize },
    /// Teardown emptied the registry.
    Cleared,
}

/// Outputs returned by Bridge::dispatch().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub events: Vec<OverlayEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: OverlayEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Status lines only, in emission order.
    pub fn status_lines(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                OverlayEvent::Status { line } => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }
}
