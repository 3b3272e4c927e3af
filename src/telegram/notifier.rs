use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::{
    config::TelegramConfig,
    error::{ForgeError, Result},
    models::{media_group_descriptors, ApiReply},
};

use super::Notify;

const API_BASE: &str = "https://api.telegram.org";

#[derive(Clone)]
pub struct TelegramNotifier {
    http: reqwest::Client,
    config: TelegramConfig,
}

impl TelegramNotifier {
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn method_url(&self, method: &str) -> Result<String> {
        Ok(format!(
            "{}/bot{}/{}",
            API_BASE,
            self.config.bot_token()?,
            method
        ))
    }

    /// Reads the file into an owned multipart part, so nothing holds the
    /// file open once the request future completes.
    fn file_part(path: &Path) -> Result<Part> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo.png".to_string());
        Ok(Part::bytes(bytes).file_name(file_name))
    }

    async fn check_reply(response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ForgeError::NotifyError(format!(
                "telegram returned {}: {}",
                status, body
            )));
        }

        let reply: ApiReply = response
            .json()
            .await
            .map_err(|e| ForgeError::NotifyError(e.to_string()))?;
        if !reply.ok {
            return Err(ForgeError::NotifyError(
                reply.description.unwrap_or_else(|| "ok=false".to_string()),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl Notify for TelegramNotifier {
    async fn send_text(&self, text: &str) -> Result<()> {
        let url = self.method_url("sendMessage")?;
        let chat_id = self.config.chat_id()?;

        let response = self
            .http
            .post(url)
            .form(&[("chat_id", chat_id), ("text", text), ("parse_mode", "HTML")])
            .send()
            .await
            .map_err(|e| ForgeError::NotifyError(e.to_string()))?;

        Self::check_reply(response).await
    }

    async fn send_photo(&self, path: &Path, caption: &str) -> Result<()> {
        let url = self.method_url("sendPhoto")?;
        let chat_id = self.config.chat_id()?.to_string();

        let form = Form::new()
            .text("chat_id", chat_id)
            .text("caption", caption.to_string())
            .part("photo", Self::file_part(path)?);

        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ForgeError::NotifyError(e.to_string()))?;

        Self::check_reply(response).await
    }

    async fn send_photo_group(&self, paths: &[PathBuf], caption: &str) -> Result<()> {
        let url = self.method_url("sendMediaGroup")?;
        let chat_id = self.config.chat_id()?.to_string();

        let media = media_group_descriptors(paths.len(), caption);
        let media_json = serde_json::to_string(&media)
            .map_err(|e| ForgeError::SerializationError(e.to_string()))?;

        let mut form = Form::new().text("chat_id", chat_id).text("media", media_json);
        for (i, path) in paths.iter().enumerate() {
            form = form.part(format!("photo{}", i), Self::file_part(path)?);
        }

        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ForgeError::NotifyError(e.to_string()))?;

        Self::check_reply(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_url() {
        let notifier =
            TelegramNotifier::new(TelegramConfig::new().with_credentials("abc:123", "42"));
        assert_eq!(
            notifier.method_url("sendMessage").unwrap(),
            "https://api.telegram.org/botabc:123/sendMessage"
        );
    }

    #[test]
    fn test_method_url_requires_token() {
        let notifier = TelegramNotifier::new(TelegramConfig::new());
        assert!(notifier.method_url("sendMessage").is_err());
    }

    #[test]
    fn test_file_part_missing_file() {
        let err = TelegramNotifier::file_part(Path::new("/nonexistent/photo.png")).unwrap_err();
        assert!(matches!(err, ForgeError::IoError(_)));
    }
}
