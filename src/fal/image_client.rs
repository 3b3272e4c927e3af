use crate::{
    config::FalConfig,
    error::{ForgeError, Result},
    models::{FluxResponse, ImageGenerationRequest},
};
use async_trait::async_trait;
use serde_json::json;

use super::GenerateImages;

// Fixed generation parameters, tuned once for the brand style.
const NUM_INFERENCE_STEPS: u32 = 28;
const GUIDANCE_SCALE: f64 = 3.5;
const SAFETY_TOLERANCE: &str = "5";

#[derive(Clone)]
pub struct ImageClient {
    http: reqwest::Client,
    config: FalConfig,
}

impl ImageClient {
    pub fn new(config: FalConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

/// Request body with the fixed parameters baked in.
pub(crate) fn request_payload(request: &ImageGenerationRequest) -> serde_json::Value {
    json!({
        "prompt": request.prompt,
        "negative_prompt": request.negative_prompt,
        "image_size": request.image_size,
        "num_inference_steps": NUM_INFERENCE_STEPS,
        "guidance_scale": GUIDANCE_SCALE,
        "num_images": request.num_images,
        "safety_tolerance": SAFETY_TOLERANCE,
    })
}

#[async_trait]
impl GenerateImages for ImageClient {
    async fn generate(&self, request: ImageGenerationRequest) -> Result<Vec<String>> {
        let api_key = self.config.api_key()?;
        let payload = request_payload(&request);

        log::info!(
            "Requesting {} image(s) from {}",
            request.num_images,
            self.config.model
        );
        log::debug!("Generation request payload: {}", payload);

        // The fal.run host answers only once the images are final, so a
        // single request covers the whole generation, however long it takes.
        let response = self
            .http
            .post(self.endpoint())
            .header("Authorization", format!("Key {}", api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| ForgeError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ForgeError::ResponseError(format!(
                "provider returned {}: {}",
                status, body
            )));
        }

        let flux: FluxResponse = response
            .json()
            .await
            .map_err(|e| ForgeError::ResponseError(e.to_string()))?;

        if flux.images.is_empty() {
            return Err(ForgeError::ResponseError("No images generated".into()));
        }

        Ok(flux.images.into_iter().map(|img| img.url).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ImageSize;

    fn sample_request() -> ImageGenerationRequest {
        ImageGenerationRequest {
            prompt: "a steel vault".into(),
            negative_prompt: "blurry".into(),
            image_size: ImageSize::SquareHd,
            num_images: 4,
        }
    }

    #[test]
    fn test_payload_carries_fixed_parameters() {
        let payload = request_payload(&sample_request());
        assert_eq!(payload["num_inference_steps"], 28);
        assert_eq!(payload["guidance_scale"], 3.5);
        assert_eq!(payload["safety_tolerance"], "5");
        assert_eq!(payload["num_images"], 4);
        assert_eq!(payload["image_size"], "square_hd");
        assert_eq!(payload["prompt"], "a steel vault");
        assert_eq!(payload["negative_prompt"], "blurry");
    }

    #[test]
    fn test_endpoint_joins_base_and_model() {
        let client = ImageClient::new(
            FalConfig::new()
                .with_api_key("k")
                .with_base_url("https://fal.run/"),
        );
        assert_eq!(client.endpoint(), "https://fal.run/fal-ai/flux-pro/v1.1");
    }
}
