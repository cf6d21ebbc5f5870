//! Command implementations for the Sweet Words CLI

pub mod config;
pub mod generate;
pub mod models;

pub use self::config::ConfigCommand;
pub use self::generate::GenerateArgs;

use crate::AppContext;
use anyhow::{Context, Result};
use sweetwords_core::config::{load_deployment, ConfigStore, DeploymentConfig};

/// Deployment defaults for this invocation
pub(crate) fn deployment(ctx: &AppContext) -> Result<DeploymentConfig> {
    load_deployment(ctx.deployment.as_deref()).context("Failed to load deployment defaults")
}

pub(crate) fn store(ctx: &AppContext) -> ConfigStore {
    ConfigStore::new(&ctx.config_dir)
}
