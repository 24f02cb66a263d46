use contracts::shared::client_config::ClientConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `webhook.url`
pub const WEBHOOK_URL_ENV: &str = "CONTENT_WEBHOOK_URL";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub webhook: WebhookConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WebhookConfig {
    pub url: String,
}

fn default_port() -> u16 {
    3000
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
dist_dir = "dist"

[webhook]
url = "https://n8n.tu-instancia.com/webhook/content-creator"
"#;

impl Config {
    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Replace the webhook URL when an override is present and non-blank
    pub fn with_webhook_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.webhook.url = url.trim().to_string();
        }
        self
    }

    /// What the browser gets from `GET /api/config`
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::or_default_url(Some(&self.webhook.url))
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current working directory (for `cargo run`)
/// 3. Falls back to embedded default config
///
/// `CONTENT_WEBHOOK_URL` is applied on top of whichever source won.
pub fn load_config() -> anyhow::Result<Config> {
    let config = match find_config_file() {
        Some(config_path) => {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            Config::parse(&contents)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            Config::parse(DEFAULT_CONFIG)?
        }
    };

    let env_url = std::env::var(WEBHOOK_URL_ENV).ok();
    if env_url.is_some() {
        tracing::info!("Webhook URL overridden by {}", WEBHOOK_URL_ENV);
    }
    Ok(config.with_webhook_override(env_url))
}

fn find_config_file() -> Option<PathBuf> {
    let exe_candidate = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("config.toml")));

    for candidate in exe_candidate
        .into_iter()
        .chain(std::iter::once(PathBuf::from("config.toml")))
    {
        if candidate.exists() {
            return Some(candidate);
        }
        tracing::warn!("config.toml not found at: {}", candidate.display());
    }
    None
}

/// Get the directory with the built frontend
/// Relative paths are tried next to the executable first, then the working directory
pub fn get_dist_path(config: &Config) -> PathBuf {
    let dist = Path::new(&config.server.dist_dir);

    if dist.is_absolute() {
        return dist.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved_path = exe_dir.join(dist);
            if resolved_path.is_dir() {
                return resolved_path;
            }
        }
    }

    dist.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.dist_dir, "dist");
        assert_eq!(
            config.webhook.url,
            contracts::shared::client_config::DEFAULT_WEBHOOK_URL
        );
    }

    #[test]
    fn test_server_section_is_optional() {
        let config = Config::parse(
            r#"
            [webhook]
            url = "http://localhost:5678/webhook/content"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.dist_dir, "dist");
    }

    #[test]
    fn test_missing_webhook_section_is_an_error() {
        assert!(Config::parse("[server]\nport = 8080\n").is_err());
    }

    #[test]
    fn test_env_override() {
        let config = Config::parse(DEFAULT_CONFIG)
            .unwrap()
            .with_webhook_override(Some(" https://hooks.example.com/gen ".to_string()));
        assert_eq!(config.webhook.url, "https://hooks.example.com/gen");

        let config = config.with_webhook_override(Some("   ".to_string()));
        assert_eq!(config.webhook.url, "https://hooks.example.com/gen");

        let config = config.with_webhook_override(None);
        assert_eq!(config.webhook.url, "https://hooks.example.com/gen");
    }

    #[test]
    fn test_client_config_falls_back_on_blank_url() {
        let config = Config::parse("[webhook]\nurl = \"\"\n").unwrap();
        assert_eq!(config.client_config(), ClientConfig::default());
    }

    #[test]
    fn test_absolute_dist_path_kept() {
        let mut config = Config::parse(DEFAULT_CONFIG).unwrap();
        let absolute = std::env::temp_dir().join("content-creator-dist");
        config.server.dist_dir = absolute.to_string_lossy().into_owned();
        assert_eq!(get_dist_path(&config), absolute);
    }
}
