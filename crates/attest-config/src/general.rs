//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_seed_on_startup() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Populate the store with the built-in checklists when the server starts.
    #[serde(default = "default_seed_on_startup")]
    pub seed_on_startup: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            seed_on_startup: default_seed_on_startup(),
        }
    }
}
