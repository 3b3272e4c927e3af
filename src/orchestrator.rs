use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::{
    catalog::{AssetSpec, BRAND_TAG, NEGATIVE_PROMPT},
    download::FetchBytes,
    error::Result,
    fal::GenerateImages,
    logger,
    models::ImageGenerationRequest,
    pacing::PacingPolicy,
    telegram::Notify,
};

const ERROR_TEXT_LIMIT: usize = 200;

/// Variant paths per asset, accumulated over the run. Only assets whose
/// every variant landed on disk appear here.
#[derive(Debug, Default)]
pub struct RunSummary {
    results: BTreeMap<String, Vec<PathBuf>>,
}

impl RunSummary {
    pub fn record(&mut self, name: &str, paths: Vec<PathBuf>) {
        self.results.insert(name.to_string(), paths);
    }

    pub fn variants(&self, name: &str) -> Option<&[PathBuf]> {
        self.results.get(name).map(|p| p.as_slice())
    }

    pub fn asset_count(&self) -> usize {
        self.results.len()
    }

    pub fn image_count(&self) -> usize {
        self.results.values().map(|p| p.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<PathBuf>)> {
        self.results.iter()
    }
}

/// Destination for variant `index` (zero-based, generation order) of `asset`.
/// Single-variant assets go straight to the canonical filename.
pub fn variant_path(output_dir: &Path, asset: &AssetSpec, index: usize) -> PathBuf {
    if asset.num_images > 1 {
        output_dir.join(format!("{}_v{}.png", asset.name, index + 1))
    } else {
        output_dir.join(asset.filename)
    }
}

fn truncated(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// Drives the whole batch: announce, generate + download + notify per asset
/// with isolated failures, summarize, then promote one canonical variant per
/// asset. Strictly sequential throughout.
pub struct Orchestrator<G, F, N> {
    catalog: Vec<AssetSpec>,
    output_dir: PathBuf,
    pacing: PacingPolicy,
    generator: G,
    downloader: F,
    notifier: N,
}

impl<G, F, N> Orchestrator<G, F, N>
where
    G: GenerateImages,
    F: FetchBytes,
    N: Notify,
{
    pub fn new(
        catalog: Vec<AssetSpec>,
        output_dir: impl Into<PathBuf>,
        pacing: PacingPolicy,
        generator: G,
        downloader: F,
        notifier: N,
    ) -> Self {
        Self {
            catalog,
            output_dir: output_dir.into(),
            pacing,
            generator,
            downloader,
            notifier,
        }
    }

    /// Best-effort text to the review chat; a failed send never fails the run.
    async fn announce(&self, text: &str) {
        if let Err(e) = self.notifier.send_text(text).await {
            log::warn!("Announcement not delivered: {}", e);
        }
    }

    async fn process_asset(&self, asset: &AssetSpec) -> Result<Vec<PathBuf>> {
        let request = ImageGenerationRequest {
            prompt: asset.prompt.clone(),
            negative_prompt: NEGATIVE_PROMPT.to_string(),
            image_size: asset.size,
            num_images: asset.num_images,
        };

        let urls = self.generator.generate(request).await?;

        let mut paths = Vec::with_capacity(urls.len());
        for (i, url) in urls.iter().enumerate() {
            let path = variant_path(&self.output_dir, asset, i);
            self.downloader.fetch(url, &path).await?;
            paths.push(path);
        }

        Ok(paths)
    }

    async fn notify_variants(&self, asset: &AssetSpec, paths: &[PathBuf]) {
        let caption = format!("[{}] {} ({} variants)", BRAND_TAG, asset.name, paths.len());
        let sent = if let [single] = paths {
            self.notifier.send_photo(single, &caption).await
        } else {
            self.notifier.send_photo_group(paths, &caption).await
        };
        match sent {
            Ok(()) => log::info!("Sent to review chat: {}", asset.name),
            Err(e) => log::warn!("Review upload failed for {}: {}", asset.name, e),
        }
    }

    /// Copies each multi-variant asset's first variant onto its canonical
    /// filename. Assets that failed never made it into the summary, so they
    /// are skipped naturally.
    fn select_canonicals(&self, summary: &RunSummary) -> Result<()> {
        for asset in &self.catalog {
            let paths = match summary.variants(asset.name) {
                Some(paths) if paths.len() > 1 => paths,
                _ => continue,
            };
            let src = &paths[0];
            let dst = self.output_dir.join(asset.filename);
            if *src != dst {
                std::fs::copy(src, &dst)?;
                log::info!("Selected: {} (from v1)", asset.filename);
            }
        }
        Ok(())
    }

    pub async fn run(&self) -> Result<RunSummary> {
        std::fs::create_dir_all(&self.output_dir)?;

        self.announce(&format!(
            "<b>[{}] Image Generation Started</b>\n\n\
             Generating brand assets from the catalog.\n\
             Each asset will be sent here for review.\n\
             Reply with feedback or 'OK' to confirm.",
            BRAND_TAG
        ))
        .await;

        let mut summary = RunSummary::default();
        let total = self.catalog.len();

        for (index, asset) in self.catalog.iter().enumerate() {
            log::info!("--- Generating: {} ---", asset.name);
            let timer = logger::timer(asset.name);

            match self.process_asset(asset).await {
                Ok(paths) => {
                    summary.record(asset.name, paths);
                    let paths = summary.variants(asset.name).unwrap_or_default();
                    self.notify_variants(asset, paths).await;
                }
                Err(e) => {
                    log::error!("Failed to generate {}: {}", asset.name, e);
                    self.announce(&format!(
                        "[{}] Error generating {}: {}",
                        BRAND_TAG,
                        asset.name,
                        truncated(&e.to_string(), ERROR_TEXT_LIMIT)
                    ))
                    .await;
                }
            }
            timer.stop();

            let delay = self.pacing.delay_after(index, total);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        self.announce(&format!(
            "<b>[{}] Image Generation Complete</b>\n\n\
             Generated {} images across {} assets.\n\
             All images saved to {}.\n\n\
             Please review the images above and reply with:\n\
             - 'OK' to confirm all\n\
             - Specific feedback for changes",
            BRAND_TAG,
            summary.image_count(),
            summary.asset_count(),
            self.output_dir.display()
        ))
        .await;

        log::info!(
            "Generation complete: {} images across {} assets",
            summary.image_count(),
            summary.asset_count()
        );
        for (name, paths) in summary.iter() {
            log::info!("  {}: {} variants", name, paths.len());
        }

        self.select_canonicals(&summary)?;

        Ok(summary)
    }
}
