//! Message generation command

use anyhow::{Context, Result};
use clap::Args;
use std::process::ExitCode;
use sweetwords_core::config::{ConfigError, SafeLogging};
use sweetwords_core::protocol::keywords_from_input;
use sweetwords_core::{GenerationRequest, Generator, Language};
use tracing::{debug, warn};

use crate::AppContext;

#[derive(Args)]
pub struct GenerateArgs {
    /// Recipient's name
    #[arg(long)]
    pub name: String,

    /// Tone of the message (default depends on the language)
    #[arg(long)]
    pub style: Option<String>,

    /// Situation the message is for (default depends on the language)
    #[arg(long)]
    pub scene: Option<String>,

    /// Comma-separated inspiration keywords
    #[arg(long)]
    pub keywords: Option<String>,

    /// Output language, overriding the saved setting (zh or en)
    #[arg(long)]
    pub language: Option<Language>,
}

pub async fn execute(args: GenerateArgs, ctx: &AppContext) -> Result<ExitCode> {
    let deployment = super::deployment(ctx)?;
    let config = super::store(ctx)
        .load_or_default(&deployment)
        .context("Failed to load saved settings")?;
    debug!("Using settings: {}", config.safe_for_logging());

    let language = args.language.unwrap_or(config.language);
    let request = GenerationRequest::builder()
        .name(args.name)
        .style(args.style.unwrap_or_else(|| language.default_style().to_string()))
        .scene(args.scene.unwrap_or_else(|| language.default_scene().to_string()))
        .keywords(keywords_from_input(args.keywords.as_deref().unwrap_or_default()))
        .lengths(config.min_length, config.max_length)
        .language(language)
        .build()
        .map_err(ConfigError::from)
        .context("Invalid generation request")?;

    let generator = Generator::new(deployment).context("Failed to initialize HTTP client")?;
    let result = generator
        .generate(&config, &request)
        .await
        .context("Provider settings are incomplete; run `sweetwords config set`")?;

    match result.error {
        None => {
            println!("{}", result.content);
            Ok(ExitCode::SUCCESS)
        }
        Some(error) => {
            warn!("Generation failed: {}", error);
            eprintln!("{}", language.failure_message());
            Ok(ExitCode::FAILURE)
        }
    }
}
