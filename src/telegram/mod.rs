pub mod notifier;

use std::path::Path;

use crate::error::Result;
use async_trait::async_trait;

pub use notifier::TelegramNotifier;

/// Seam over the review channel. Every operation targets the one configured
/// chat; callers treat all three as best-effort.
#[async_trait]
pub trait Notify: Send + Sync {
    /// Posts an HTML-formatted text message.
    async fn send_text(&self, text: &str) -> Result<()>;

    /// Uploads a single local file as a photo.
    async fn send_photo(&self, path: &Path, caption: &str) -> Result<()>;

    /// Uploads several local files as one grouped message; the caption lands
    /// on the first item only.
    async fn send_photo_group(&self, paths: &[std::path::PathBuf], caption: &str) -> Result<()>;
}
