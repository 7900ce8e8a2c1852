use crate::mime;
use anyhow::{Context, Result};
use base64::{engine::general_purpose, Engine as _};
use std::fs;
use std::path::Path;

/// Images the bundled page expects, in the order they are processed.
pub const DEFAULT_IMAGES: &[&str] = &[
    "study-area.jpeg",
    "sentinel1-floodmaps.jpeg",
    "figure9c.jpeg",
    "figure9a.jpeg",
    "figure10a.jpeg",
];

/// One listed image and the data URI it was turned into.
/// `data_uri` is empty when the file was missing or could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedImage {
    pub filename: String,
    pub data_uri: String,
}

impl EmbeddedImage {
    pub fn is_embedded(&self) -> bool {
        !self.data_uri.is_empty()
    }
}

pub fn encode_data_uri(path: &Path) -> Result<String> {
    let mime = mime::mime_for_path(path);
    let data = fs::read(path)
        .with_context(|| format!("Failed to read image: {}", path.display()))?;

    Ok(format!(
        "data:{};base64,{}",
        mime,
        general_purpose::STANDARD.encode(data)
    ))
}

/// Like [`encode_data_uri`], but a failure is logged and turned into an
/// empty string so one bad image never stops the batch.
pub fn encode_or_empty(path: &Path) -> String {
    match encode_data_uri(path) {
        Ok(uri) => uri,
        Err(e) => {
            log::error!("Error encoding {}: {:#}", path.display(), e);
            String::new()
        }
    }
}

pub fn collect_images(dir: &Path, filenames: &[String]) -> Vec<EmbeddedImage> {
    let mut images = Vec::with_capacity(filenames.len());

    for filename in filenames {
        let path = dir.join(filename);

        let data_uri = if path.exists() {
            log::info!("Encoding {}...", filename);
            encode_or_empty(&path)
        } else {
            log::warn!("{} not found - using placeholder", filename);
            String::new()
        };

        images.push(EmbeddedImage {
            filename: filename.clone(),
            data_uri,
        });
    }

    images
}
