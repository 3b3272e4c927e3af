//! The static brand asset catalog: one spec per deliverable, shared style
//! constants, and the resolution presets the generation provider accepts.

use serde::{Deserialize, Serialize};

/// Tag prepended to every review-channel caption and announcement.
pub const BRAND_TAG: &str = "FYRST";

/// Shared negative prompt applied to every asset.
pub const NEGATIVE_PROMPT: &str = "cute, kawaii, hyper-realistic, photorealistic, cartoon, anime, childish, \
     bright colors, white background, neon, cyberpunk, text, watermark, signature, \
     blurry, low quality, anthropomorphic, clothing on animal, standing upright";

/// Shared style prefix; every asset prompt starts with this.
pub const STYLE_PREFIX: &str = "minimalist vector style, flat design with subtle shadows, high quality, \
     professional brand design, dark background #0F172A, \
     steel blue #2563EB accent lighting, amber gold #D97706 secondary accents";

/// Resolution presets accepted by the provider's `image_size` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "square_hd")]
    SquareHd,
    #[serde(rename = "square")]
    Square,
    #[serde(rename = "portrait_4_3")]
    Portrait43,
    #[serde(rename = "portrait_16_9")]
    Portrait169,
    #[serde(rename = "landscape_4_3")]
    Landscape43,
    #[serde(rename = "landscape_16_9")]
    Landscape169,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::SquareHd => "square_hd",
            ImageSize::Square => "square",
            ImageSize::Portrait43 => "portrait_4_3",
            ImageSize::Portrait169 => "portrait_16_9",
            ImageSize::Landscape43 => "landscape_4_3",
            ImageSize::Landscape169 => "landscape_16_9",
        }
    }
}

/// One named image deliverable. Built once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct AssetSpec {
    pub name: &'static str,
    /// Canonical output filename the chosen variant ends up under.
    pub filename: &'static str,
    pub prompt: String,
    pub size: ImageSize,
    /// Number of candidate variants to request, always >= 1.
    pub num_images: u32,
}

impl AssetSpec {
    fn new(
        name: &'static str,
        filename: &'static str,
        prompt_body: &str,
        size: ImageSize,
        num_images: u32,
    ) -> Self {
        AssetSpec {
            name,
            filename,
            prompt: format!("{}, {}", STYLE_PREFIX, prompt_body),
            size,
            num_images,
        }
    }
}

/// The full catalog in processing order.
pub fn brand_catalog() -> Vec<AssetSpec> {
    vec![
        AssetSpec::new(
            "logo",
            "logo.png",
            "steel-gray doberman pinscher guard dog, sitting pose facing forward, \
             alert and watchful expression, one ear folded, subtle blue glow in eyes, \
             $FYRST tag collar around neck, metallic steel-gray blue skin tone, \
             centered composition, icon design, clean lines, \
             dark charcoal navy background, suitable as app icon and brand logo",
            ImageSize::SquareHd,
            4,
        ),
        AssetSpec::new(
            "twitter-profile",
            "twitter-profile.png",
            "steel-gray doberman guard dog head portrait, \
             alert intense expression, one ear folded, blue glowing eyes, \
             $FYRST tag collar, metallic steel texture, \
             centered close-up, circular crop friendly composition, \
             dark charcoal navy #0F172A background",
            ImageSize::SquareHd,
            3,
        ),
        AssetSpec::new(
            "twitter-banner",
            "twitter-banner.png",
            "wide panoramic banner, steel vault door partially open with light leaking out, \
             steel-gray doberman guard dog sitting beside the vault, vigilant pose, \
             blueprint grid pattern in background, brushed metal texture, \
             subtle gear and bolt details on vault surface, \
             cinematic wide composition, dark atmosphere, \
             institutional and fortified aesthetic, 3:1 aspect ratio",
            ImageSize::Landscape169,
            3,
        ),
        AssetSpec::new(
            "github-banner",
            "github-banner.png",
            "wide banner design, steel vault with shield emblem, \
             steel-gray doberman guard dog in corner, watchful pose, \
             text area on right side, blueprint grid subtle background, \
             metallic textures, institutional design, \
             dark charcoal navy background, 2:1 aspect ratio",
            ImageSize::Landscape169,
            3,
        ),
        AssetSpec::new(
            "community-banner",
            "community-banner.png",
            "community banner illustration, \
             steel fortress wall with open gate, warm amber gold light from inside, \
             steel-gray doberman guard dog at the gate entrance, welcoming but vigilant, \
             blueprint grid background, dark atmosphere with inviting warmth, \
             institutional yet approachable design",
            ImageSize::Landscape169,
            3,
        ),
        AssetSpec::new(
            "article-banner-1",
            "article-banner-1.png",
            "article header illustration, \
             steel shield protecting a glowing token/coin, \
             defense and protection theme, geometric formations, \
             steel-gray doberman silhouette in background, \
             dark charcoal navy background, cinematic lighting",
            ImageSize::Landscape169,
            2,
        ),
        AssetSpec::new(
            "article-banner-2",
            "article-banner-2.png",
            "article header illustration, \
             abstract representation of blockchain trust and security, \
             steel vault door mechanism with intricate gears, \
             data visualization overlay, amber gold accent highlights, \
             dark charcoal navy background, institutional aesthetic",
            ImageSize::Landscape169,
            2,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_shape() {
        let catalog = brand_catalog();
        assert_eq!(catalog.len(), 7);

        let names: HashSet<_> = catalog.iter().map(|a| a.name).collect();
        let files: HashSet<_> = catalog.iter().map(|a| a.filename).collect();
        assert_eq!(names.len(), catalog.len());
        assert_eq!(files.len(), catalog.len());

        for asset in &catalog {
            assert!(asset.num_images >= 1, "{} has zero variants", asset.name);
            assert!(asset.prompt.starts_with(STYLE_PREFIX));
            assert!(asset.filename.ends_with(".png"));
        }
    }

    #[test]
    fn test_size_wire_names() {
        assert_eq!(ImageSize::SquareHd.as_str(), "square_hd");
        assert_eq!(ImageSize::Landscape169.as_str(), "landscape_16_9");

        let json = serde_json::to_string(&ImageSize::SquareHd).unwrap();
        assert_eq!(json, "\"square_hd\"");
        let json = serde_json::to_string(&ImageSize::Landscape169).unwrap();
        assert_eq!(json, "\"landscape_16_9\"");
    }
}
