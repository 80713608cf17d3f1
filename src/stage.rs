/// Staging candidate images from disk
/// Only the image header is decoded; pixels are loaded later by the view
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::{Error, Result};
use crate::state::StagedImage;

/// Probe every file and return the ones that could be read, in order.
/// Unreadable files are logged and skipped.
pub async fn stage_files(paths: Vec<PathBuf>) -> Vec<StagedImage> {
    // Header decoding is blocking I/O, keep it off the UI executor
    let result = tokio::task::spawn_blocking(move || probe_all(paths)).await;

    match result {
        Ok(images) => images,
        Err(err) => {
            warn!("⚠️  {}", Error::from(err));
            Vec::new()
        }
    }
}

/// Blocking version of staging
fn probe_all(paths: Vec<PathBuf>) -> Vec<StagedImage> {
    let total = paths.len();
    let mut staged = Vec::with_capacity(total);

    for path in paths {
        match probe(&path) {
            Ok(image) => staged.push(image),
            Err(err) => warn!("⚠️  Skipping {}", err),
        }
    }

    info!("🖼️  Staged {} of {} files", staged.len(), total);
    staged
}

/// Read the dimensions of a single image
pub fn probe(path: &Path) -> Result<StagedImage> {
    let (width, height) = image::image_dimensions(path).map_err(|source| Error::ImageProbe {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(StagedImage::new(path, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_reads_dimensions() {
        let dir = std::env::temp_dir().join(format!("canvas-staging-probe-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("candidate.png");
        image::RgbaImage::new(40, 30).save(&path).unwrap();

        let staged = probe(&path).unwrap();
        assert_eq!((staged.width, staged.height), (40, 30));
        assert_eq!(staged.filename(), "candidate.png");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unreadable_files_are_skipped() {
        let dir = std::env::temp_dir().join(format!("canvas-staging-skip-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let good = dir.join("good.png");
        let bad = dir.join("bad.png");
        image::RgbaImage::new(8, 8).save(&good).unwrap();
        std::fs::write(&bad, b"not an image").unwrap();

        let staged = probe_all(vec![bad, dir.join("missing.png"), good.clone()]);
        assert_eq!(staged.len(), 1);
        assert_eq!(staged[0].path, good);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
