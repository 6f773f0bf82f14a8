use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use ratatui::style::Color;
use reqwest::Client;
use std::collections::HashMap;

/// Thumbnail footprint in terminal cells (each cell holds two pixels, stacked).
pub const THUMB_COLS: u16 = 4;
pub const THUMB_ROWS: u16 = 2;

/// Half-block rendition of a cover: one `(top, bottom)` colour pair per cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub rows: Vec<Vec<(Color, Color)>>,
}

impl Thumbnail {
    pub fn from_image(img: &DynamicImage, cols: u16, rows: u16) -> Self {
        let w = u32::from(cols.max(1));
        let h = u32::from(rows.max(1)) * 2;
        let resized = img.resize_exact(w, h, FilterType::Triangle);

        let rows = (0..h)
            .step_by(2)
            .map(|y| {
                (0..w)
                    .map(|x| {
                        let top = resized.get_pixel(x, y);
                        let bottom = resized.get_pixel(x, (y + 1).min(h - 1));
                        (
                            Color::Rgb(top[0], top[1], top[2]),
                            Color::Rgb(bottom[0], bottom[1], bottom[2]),
                        )
                    })
                    .collect()
            })
            .collect();

        Self { rows }
    }
}

pub enum ArtworkState {
    Loading,
    Loaded(Thumbnail),
    Failed,
}

/// Covers keyed by URI. Failed lookups are remembered so they are not retried every frame.
#[derive(Default)]
pub struct ArtworkCache {
    entries: HashMap<String, ArtworkState>,
}

impl ArtworkCache {
    pub fn get(&self, uri: &str) -> Option<&ArtworkState> {
        self.entries.get(uri)
    }

    /// Marks `uri` as loading. Returns false when it is already known.
    pub fn begin(&mut self, uri: &str) -> bool {
        if self.entries.contains_key(uri) {
            return false;
        }
        self.entries.insert(uri.to_string(), ArtworkState::Loading);
        true
    }

    pub fn insert(&mut self, uri: String, state: ArtworkState) {
        self.entries.insert(uri, state);
    }

    pub fn thumbnail(&self, uri: &str) -> Option<&Thumbnail> {
        match self.entries.get(uri) {
            Some(ArtworkState::Loaded(thumb)) => Some(thumb),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct ArtworkLoader {
    client: Client,
}

impl ArtworkLoader {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch `uri` over http(s), or read it from disk (plain path or `file://`).
    pub async fn fetch_image(&self, uri: &str) -> Result<DynamicImage> {
        let bytes = if uri.starts_with("http://") || uri.starts_with("https://") {
            self.client
                .get(uri)
                .send()
                .await?
                .error_for_status()?
                .bytes()
                .await?
                .to_vec()
        } else {
            let path = uri.strip_prefix("file://").unwrap_or(uri);
            tokio::fs::read(path)
                .await
                .with_context(|| format!("reading cover {}", path))?
        };
        let img = image::load_from_memory(&bytes).with_context(|| format!("decoding cover {}", uri))?;
        Ok(img)
    }

    pub async fn load(&self, uri: &str) -> ArtworkState {
        match self.fetch_image(uri).await {
            Ok(img) => ArtworkState::Loaded(Thumbnail::from_image(&img, THUMB_COLS, THUMB_ROWS)),
            Err(e) => {
                tracing::warn!(uri, error = %e, "cover art unavailable");
                ArtworkState::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_thumbnail_stacks_pixel_pairs() {
        // First pixel row red, the rest blue.
        let img = RgbImage::from_fn(4, 4, |_, y| if y == 0 { Rgb([255, 0, 0]) } else { Rgb([0, 0, 255]) });
        let thumb = Thumbnail::from_image(&DynamicImage::ImageRgb8(img), 4, 2);

        assert_eq!(thumb.rows.len(), 2);
        assert_eq!(thumb.rows[0].len(), 4);
        assert_eq!(thumb.rows[0][0], (Color::Rgb(255, 0, 0), Color::Rgb(0, 0, 255)));
        assert_eq!(thumb.rows[1][3], (Color::Rgb(0, 0, 255), Color::Rgb(0, 0, 255)));
    }

    #[test]
    fn test_cache_begin_once() {
        let mut cache = ArtworkCache::default();
        assert!(cache.begin("a.png"));
        assert!(!cache.begin("a.png"));
        assert!(cache.thumbnail("a.png").is_none());

        cache.insert("a.png".to_string(), ArtworkState::Failed);
        assert!(!cache.begin("a.png"));
        assert!(matches!(cache.get("a.png"), Some(ArtworkState::Failed)));
    }

    #[tokio::test]
    async fn test_missing_file_fails_softly() {
        let loader = ArtworkLoader::new(Client::new());
        let state = loader.load("/no/such/cover.png").await;
        assert!(matches!(state, ArtworkState::Failed));
    }
}
