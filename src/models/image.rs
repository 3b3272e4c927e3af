use serde::{Deserialize, Serialize};

use crate::catalog::ImageSize;

#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    pub negative_prompt: String,
    pub image_size: ImageSize,
    pub num_images: u32,
}

/// One generated image in the provider response. Only the URL is consumed;
/// the rest is kept for debug logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FluxImage {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FluxResponse {
    pub images: Vec<FluxImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserializes_minimal_payload() {
        let body = r#"{"images":[{"url":"https://cdn.example/a.png"},{"url":"https://cdn.example/b.png"}]}"#;
        let response: FluxResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.images.len(), 2);
        assert_eq!(response.images[0].url, "https://cdn.example/a.png");
        assert!(response.seed.is_none());
    }

    #[test]
    fn test_response_keeps_extra_image_fields() {
        let body = r#"{"images":[{"url":"u","width":1024,"height":1024,"content_type":"image/png"}],"seed":7}"#;
        let response: FluxResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.images[0].width, Some(1024));
        assert_eq!(response.seed, Some(7));
    }
}
