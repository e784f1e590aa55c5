//! Configuration management.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration, the lowest-precedence source of settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tailscale API key.
    pub api_key: Option<String>,

    /// Tailnet name.
    pub tailnet: Option<String>,

    /// Zone domain name.
    pub domain: Option<String>,

    /// Directory that receives `db.<domain>` (default: current directory).
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("net", "tailzone", "tailzone")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolve an explicit path or fall back to the default one.
    pub fn path(explicit: Option<&Path>) -> Result<PathBuf> {
        explicit.map_or_else(Self::default_path, |p| Ok(p.to_path_buf()))
    }

    /// Load configuration from file, returning defaults if it doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config file {}", path.display()))?;

        Ok(())
    }

    /// Set a value by key name, as used by `tailzone config set`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_key" | "key" => self.api_key = Some(value.to_string()),
            "tailnet" => self.tailnet = Some(value.to_string()),
            "domain" | "domain_name" => self.domain = Some(value.to_string()),
            "output_dir" => self.output_dir = Some(PathBuf::from(value)),
            _ => anyhow::bail!(
                "Unknown config key: {key}\n\n\
                 Available keys:\n  \
                 api_key     - Your Tailscale API key\n  \
                 tailnet     - Tailnet name (\"-\" for the key's default)\n  \
                 domain      - Domain name for the zone file\n  \
                 output_dir  - Directory that receives db.<domain>"
            ),
        }
        Ok(())
    }
}

/// Mask a secret for display, keeping a short prefix and suffix.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 12 {
        let head: String = chars[..8].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "****".to_string()
    }
}
