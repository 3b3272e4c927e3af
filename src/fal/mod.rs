pub mod image_client;

use crate::{error::Result, models::ImageGenerationRequest};
use async_trait::async_trait;

pub use image_client::ImageClient;

/// Seam over the generation provider so the orchestrator can be driven by
/// stubs in tests.
#[async_trait]
pub trait GenerateImages: Send + Sync {
    /// One synchronous generation call; resolves to the variant URLs in
    /// provider order, exactly `num_images` of them on success.
    async fn generate(&self, request: ImageGenerationRequest) -> Result<Vec<String>>;
}
