pub mod catalog;
pub mod config;
pub mod download;
pub mod error;
pub mod fal;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod pacing;
pub mod telegram;

pub use catalog::{brand_catalog, AssetSpec, ImageSize};
pub use config::{Config, FalConfig, TelegramConfig};
pub use download::{Downloader, FetchBytes};
pub use error::{ForgeError, Result};
pub use fal::{GenerateImages, ImageClient};
pub use orchestrator::{Orchestrator, RunSummary};
pub use pacing::PacingPolicy;
pub use telegram::{Notify, TelegramNotifier};
