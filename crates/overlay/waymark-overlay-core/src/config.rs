//! Core configuration for waymark-overlay-core.

use serde::{Deserialize, Serialize};

/// Configuration for overlay sizing and labels.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Hard display-capacity limit of the host waypoint array.
    /// Creation stops silently once this many markers are registered.
    pub max_markers: usize,

    /// Label prefix for members without a display name ("Friendly 0", ...).
    pub placeholder_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_markers: 16,
            placeholder_prefix: "Friendly".to_string(),
        }
    }
}
