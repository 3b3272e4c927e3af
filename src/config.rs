use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ForgeError, Result};

/// Default synchronous generation endpoint. The `fal.run` host blocks until
/// the final images are ready, so no queue polling is needed on our side.
pub const DEFAULT_FAL_BASE_URL: &str = "https://fal.run";
pub const DEFAULT_FAL_MODEL: &str = "fal-ai/flux-pro/v1.1";

pub const DEFAULT_OUTPUT_DIR: &str = "brand-assets";
pub const DEFAULT_PACE_SECS: u64 = 2;

#[derive(Debug, Clone)]
pub struct FalConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Default for FalConfig {
    fn default() -> Self {
        FalConfig {
            api_key: None,
            base_url: DEFAULT_FAL_BASE_URL.to_string(),
            model: DEFAULT_FAL_MODEL.to_string(),
        }
    }
}

impl FalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("FAL_KEY").ok();
        let base_url =
            env::var("FAL_BASE_URL").unwrap_or_else(|_| DEFAULT_FAL_BASE_URL.to_string());
        let model = env::var("FAL_MODEL").unwrap_or_else(|_| DEFAULT_FAL_MODEL.to_string());

        FalConfig {
            api_key,
            base_url,
            model,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ForgeError::ConfigError("FAL_KEY is not set".into()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
}

impl TelegramConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let bot_token = env::var("TELEGRAM_BOT_TOKEN").ok();
        let chat_id = env::var("TELEGRAM_CHAT_ID").ok();

        TelegramConfig { bot_token, chat_id }
    }

    pub fn with_credentials(
        mut self,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        self.bot_token = Some(bot_token.into());
        self.chat_id = Some(chat_id.into());
        self
    }

    pub fn bot_token(&self) -> Result<&str> {
        self.bot_token
            .as_deref()
            .ok_or_else(|| ForgeError::ConfigError("TELEGRAM_BOT_TOKEN is not set".into()))
    }

    pub fn chat_id(&self) -> Result<&str> {
        self.chat_id
            .as_deref()
            .ok_or_else(|| ForgeError::ConfigError("TELEGRAM_CHAT_ID is not set".into()))
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub fal: FalConfig,
    pub telegram: TelegramConfig,
    pub output_dir: PathBuf,
    pub pace_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fal: FalConfig::default(),
            telegram: TelegramConfig::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            pace_interval: Duration::from_secs(DEFAULT_PACE_SECS),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let output_dir = env::var("BRANDFORGE_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR));
        let pace_interval = env::var("BRANDFORGE_PACE_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_PACE_SECS));

        Config {
            fal: FalConfig::from_env(),
            telegram: TelegramConfig::from_env(),
            output_dir,
            pace_interval,
        }
    }

    pub fn with_fal(mut self, config: FalConfig) -> Self {
        self.fal = config;
        self
    }

    pub fn with_telegram(mut self, config: TelegramConfig) -> Self {
        self.telegram = config;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_pace_interval(mut self, interval: Duration) -> Self {
        self.pace_interval = interval;
        self
    }

    /// Fails fast when any provider credential is missing, so the run never
    /// starts half-configured.
    pub fn validate(&self) -> Result<()> {
        self.fal.api_key()?;
        self.telegram.bot_token()?;
        self.telegram.chat_id()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let config = Config::new()
            .with_fal(FalConfig::new().with_api_key("key"))
            .with_telegram(TelegramConfig::new().with_credentials("token", "42"))
            .with_output_dir("out")
            .with_pace_interval(Duration::from_secs(5));

        assert!(config.validate().is_ok());
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.pace_interval, Duration::from_secs(5));
        assert_eq!(config.fal.model, DEFAULT_FAL_MODEL);
    }

    #[test]
    fn test_validate_missing_credentials() {
        let config = Config::new();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ForgeError::ConfigError(_)));
    }

    #[test]
    fn test_telegram_accessors() {
        let tg = TelegramConfig::new().with_credentials("token", "42");
        assert_eq!(tg.bot_token().unwrap(), "token");
        assert_eq!(tg.chat_id().unwrap(), "42");

        let empty = TelegramConfig::new();
        assert!(empty.bot_token().is_err());
    }
}
