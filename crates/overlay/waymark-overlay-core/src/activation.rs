//! Activation state machine driven by the user toggle.

use serde::{Deserialize, Serialize};

/// Whether the overlay is currently showing markers.
///
/// The only transition is the edge-triggered user toggle; the bridge acts
/// on the new state (rebuild on `Enabled`, teardown on `Disabled`).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum ActivationState {
    #[default]
    Disabled,
    Enabled,
}

impl ActivationState {
    #[inline]
    pub fn is_enabled(self) -> bool {
        matches!(self, ActivationState::Enabled)
    }

    /// Flip the state, returning the new value.
    pub fn toggle(&mut self) -> ActivationState {
        *self = match *self {
            ActivationState::Disabled => ActivationState::Enabled,
            ActivationState::Enabled => ActivationState::Disabled,
        };
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates() {
        let mut state = ActivationState::default();
        assert!(!state.is_enabled());
        assert_eq!(state.toggle(), ActivationState::Enabled);
        assert_eq!(state.toggle(), ActivationState::Disabled);
        assert_eq!(state.toggle(), ActivationState::Enabled);
    }
}
