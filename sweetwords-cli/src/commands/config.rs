//! Provider settings commands
//!
//! Commands: show, set, clear

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use sweetwords_core::config::{ProviderConfig, ProviderKind, SecretString};
use sweetwords_core::Language;

use crate::AppContext;

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the saved settings (API key redacted)
    Show,

    /// Update and save the settings
    Set {
        /// Provider (google, openai, anthropic, custom)
        #[arg(long)]
        provider: Option<ProviderKind>,

        /// API base URL (custom providers only)
        #[arg(long)]
        base_url: Option<String>,

        /// API key
        #[arg(long, env = "SWEETWORDS_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Model identifier
        #[arg(long)]
        model: Option<String>,

        /// Minimum message length
        #[arg(long)]
        min_length: Option<u32>,

        /// Maximum message length
        #[arg(long)]
        max_length: Option<u32>,

        /// Output language (zh or en)
        #[arg(long)]
        language: Option<Language>,
    },

    /// Delete the saved settings
    Clear,
}

/// Field updates requested by `config set`
#[derive(Default)]
struct SettingsUpdate {
    provider: Option<ProviderKind>,
    base_url: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
    min_length: Option<u32>,
    max_length: Option<u32>,
    language: Option<Language>,
}

impl SettingsUpdate {
    fn apply(self, mut config: ProviderConfig) -> ProviderConfig {
        if let Some(provider) = self.provider {
            config = config.with_provider(provider);
        }
        if let Some(base_url) = self.base_url {
            config.base_url = base_url.trim().to_string();
        }
        if let Some(api_key) = self.api_key {
            config.api_key = SecretString::new(api_key.trim());
        }
        if let Some(model) = self.model {
            config.model = model.trim().to_string();
        }
        if let Some(min_length) = self.min_length {
            config.min_length = min_length;
        }
        if let Some(max_length) = self.max_length {
            config.max_length = max_length;
        }
        if let Some(language) = self.language {
            config.language = language;
        }
        config
    }
}

pub fn handle_command(command: ConfigCommand, ctx: &AppContext) -> Result<()> {
    match command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Set {
            provider,
            base_url,
            api_key,
            model,
            min_length,
            max_length,
            language,
        } => set(
            ctx,
            SettingsUpdate {
                provider,
                base_url,
                api_key,
                model,
                min_length,
                max_length,
                language,
            },
        ),
        ConfigCommand::Clear => clear(ctx),
    }
}

fn show(ctx: &AppContext) -> Result<()> {
    let deployment = super::deployment(ctx)?;
    let store = super::store(ctx);
    let saved = store.load().context("Failed to load saved settings")?;

    println!("{} {}", "Settings file:".bold(), store.path().display());
    let config = match saved {
        Some(config) => config,
        None => {
            println!("{}", "(nothing saved yet, showing defaults)".dimmed());
            ProviderConfig::default_for(&deployment)
        }
    };
    println!();

    let base_url = if config.provider == ProviderKind::Custom {
        config.base_url.clone()
    } else {
        deployment
            .default_base_url(config.provider)
            .unwrap_or_default()
            .to_string()
    };
    let api_key = if config.api_key.is_empty() && deployment.default_api_key(config.provider).is_some() {
        "(deployment default)".to_string()
    } else {
        config.api_key.partial_redact()
    };

    println!("  Provider:   {}", config.provider_name());
    println!("  Base URL:   {}", base_url);
    println!("  API key:    {}", api_key);
    println!("  Model:      {}", config.model);
    println!("  Length:     {} to {}", config.min_length, config.max_length);
    println!("  Language:   {}", config.language);

    Ok(())
}

fn set(ctx: &AppContext, update: SettingsUpdate) -> Result<()> {
    let deployment = super::deployment(ctx)?;
    let store = super::store(ctx);
    let current = store
        .load_or_default(&deployment)
        .context("Failed to load saved settings")?;

    let config = update.apply(current);
    store
        .save(&config, &deployment)
        .context("Settings were not saved")?;

    println!("{} Settings saved to {}", "✓".green(), store.path().display());
    Ok(())
}

fn clear(ctx: &AppContext) -> Result<()> {
    let store = super::store(ctx);
    if store.clear().context("Failed to clear settings")? {
        println!("{} Settings cleared", "✓".green());
    } else {
        println!("{}", "No saved settings".dimmed());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweetwords_core::config::DeploymentConfig;

    #[test]
    fn test_update_switches_provider_and_model() {
        let config = ProviderConfig::default_for(&DeploymentConfig::default());
        let updated = SettingsUpdate {
            provider: Some(ProviderKind::OpenAI),
            api_key: Some(" sk-new ".to_string()),
            ..Default::default()
        }
        .apply(config);

        assert_eq!(updated.provider, ProviderKind::OpenAI);
        assert_eq!(updated.model, "gpt-4o-latest");
        assert_eq!(updated.api_key.expose_secret(), "sk-new");
    }

    #[test]
    fn test_update_keeps_untouched_fields() {
        let config = ProviderConfig::default_for(&DeploymentConfig::default());
        let updated = SettingsUpdate {
            max_length: Some(80),
            ..Default::default()
        }
        .apply(config.clone());

        assert_eq!(updated.max_length, 80);
        assert_eq!(updated.model, config.model);
        assert_eq!(updated.min_length, config.min_length);
    }
}
