//! Pruner configuration
//!
//! The naming convention defaults to `net_weights_epoch_<epoch>_<timestamp>.pth`
//! and can be overridden from a TOML file:
//!
//! ```toml
//! [naming]
//! prefix = "net_weights"
//! marker = "epoch"
//! extension = "pth"
//! ```

use serde::{Deserialize, Serialize};

pub mod loader;

pub use crate::prune::pattern::NamingConvention;
pub use loader::{ConfigLoader, CONFIG_ENV_VAR};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrunerConfig {
    pub naming: NamingConvention,
}

impl PrunerConfig {
    pub fn validate(&self) -> crate::error::Result<()> {
        self.naming.validate()
    }
}
