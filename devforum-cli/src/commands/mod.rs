//! Command implementations for the devforum CLI

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use devforum_server::{ConfigError, ForumConfig};

/// Build the forum config, letting flag values win over the environment.
pub(crate) fn resolve_config(
    overrides: &[(&str, Option<String>)],
    env: impl Fn(&str) -> Option<String>,
) -> Result<ForumConfig, ConfigError> {
    ForumConfig::from_lookup(|var| {
        overrides
            .iter()
            .find(|(name, _)| *name == var)
            .and_then(|(_, value)| value.clone())
            .or_else(|| env(var))
    })
}
