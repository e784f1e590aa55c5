//! Command implementations.

pub mod config;
pub mod generate;

use std::path::PathBuf;

use crate::config::Config;

/// Shared context for all commands.
///
/// Flag and environment values come from clap; the config file fills in
/// whatever is still missing.
#[derive(Debug, Clone)]
pub struct Context {
    /// API key from `--key` / `TS_KEY`
    pub api_key: Option<String>,

    /// Tailnet from `--tailnet` / `TAILNET`
    pub tailnet: Option<String>,

    /// Domain from `--domain` / `DOMAIN_NAME`
    pub domain: Option<String>,

    /// Loaded config file
    pub config: Config,

    /// Where the config file lives
    pub config_path: PathBuf,
}

impl Context {
    /// Get the API key, returning an error if not set.
    pub fn require_api_key(&self) -> anyhow::Result<&str> {
        resolve(self.api_key.as_deref(), self.config.api_key.as_deref()).ok_or_else(|| {
            anyhow::anyhow!(
                "TS_KEY is not set: pass --key, export TS_KEY, \
                 or run `tailzone config set api_key <KEY>`"
            )
        })
    }

    /// Get the tailnet, returning an error if not set.
    pub fn require_tailnet(&self) -> anyhow::Result<&str> {
        resolve(self.tailnet.as_deref(), self.config.tailnet.as_deref()).ok_or_else(|| {
            anyhow::anyhow!(
                "TAILNET is not set: pass --tailnet, export TAILNET, \
                 or run `tailzone config set tailnet <NAME>`"
            )
        })
    }

    /// Get the zone domain, returning an error if not set.
    pub fn require_domain(&self) -> anyhow::Result<&str> {
        resolve(self.domain.as_deref(), self.config.domain.as_deref()).ok_or_else(|| {
            anyhow::anyhow!(
                "DOMAIN_NAME is not set: pass --domain, export DOMAIN_NAME, \
                 or run `tailzone config set domain <DOMAIN>`"
            )
        })
    }

    /// Directory that receives the zone file.
    pub fn output_dir(&self) -> PathBuf {
        self.config
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// First non-blank value, flag/env before config file.
fn resolve<'a>(explicit: Option<&'a str>, configured: Option<&'a str>) -> Option<&'a str> {
    [explicit, configured]
        .into_iter()
        .flatten()
        .find(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(domain: Option<&str>, configured: Option<&str>) -> Context {
        Context {
            api_key: None,
            tailnet: Some("example.com".into()),
            domain: domain.map(String::from),
            config: Config {
                domain: configured.map(String::from),
                ..Config::default()
            },
            config_path: PathBuf::from("config.toml"),
        }
    }

    #[test]
    fn test_explicit_value_beats_config_file() {
        let ctx = context(Some("flag.ts.net"), Some("file.ts.net"));
        assert_eq!(ctx.require_domain().unwrap(), "flag.ts.net");
    }

    #[test]
    fn test_config_file_fills_gap() {
        let ctx = context(None, Some("file.ts.net"));
        assert_eq!(ctx.require_domain().unwrap(), "file.ts.net");
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let ctx = context(Some("  "), None);
        let err = ctx.require_domain().unwrap_err();
        assert!(err.to_string().starts_with("DOMAIN_NAME is not set"));
    }

    #[test]
    fn test_missing_api_key_names_variable() {
        let ctx = context(None, None);
        assert!(ctx
            .require_api_key()
            .unwrap_err()
            .to_string()
            .contains("TS_KEY"));
        assert_eq!(ctx.require_tailnet().unwrap(), "example.com");
        assert_eq!(ctx.output_dir(), PathBuf::from("."));
    }
}
