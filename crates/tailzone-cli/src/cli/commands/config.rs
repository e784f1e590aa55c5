//! `tailzone config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::{mask_secret, Config};

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show { json } => show_config(ctx, json),
        ConfigCommands::Set { key, value } => set_config(ctx, &key, &value),
        ConfigCommands::Path => {
            println!("{}", ctx.config_path.display());
            Ok(())
        }
    }
}

fn show_config(ctx: &Context, json: bool) -> Result<()> {
    let config = Config {
        api_key: ctx.config.api_key.as_deref().map(mask_secret),
        ..ctx.config.clone()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let unset = || "(not set)".dimmed().to_string();

    println!("{}", "Current Configuration:".bold());
    println!();
    println!("  {} {}", "api_key:".bold(), config.api_key.unwrap_or_else(unset));
    println!("  {} {}", "tailnet:".bold(), config.tailnet.unwrap_or_else(unset));
    println!("  {} {}", "domain:".bold(), config.domain.unwrap_or_else(unset));
    println!(
        "  {} {}",
        "output_dir:".bold(),
        config
            .output_dir
            .map_or_else(unset, |p| p.display().to_string())
    );

    Ok(())
}

fn set_config(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut config = ctx.config.clone();
    config.set(key, value)?;
    config.save(&ctx.config_path)?;

    let shown = if matches!(key, "api_key" | "key") {
        mask_secret(value)
    } else {
        value.to_string()
    };
    println!("{} {} set to {}.", "Success:".green().bold(), key, shown.cyan());

    Ok(())
}
