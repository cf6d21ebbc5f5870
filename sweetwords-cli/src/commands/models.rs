//! Model catalog listing

use anyhow::Result;
use colored::Colorize;
use sweetwords_core::catalog;
use sweetwords_core::config::ProviderKind;

pub fn execute(provider: Option<&str>) -> Result<()> {
    let providers = match provider {
        Some(raw) => vec![raw.parse::<ProviderKind>()?],
        None => ProviderKind::ALL.to_vec(),
    };

    for provider in providers {
        println!("{}", provider.to_string().bold());
        for option in catalog::available_models(provider) {
            println!(
                "  {:<24} {:<32} {:>8} tokens",
                option.id, option.name, option.max_tokens
            );
        }
        println!();
    }

    Ok(())
}
