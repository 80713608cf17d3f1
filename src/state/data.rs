/// Shared data structures for the canvas state
/// 
/// These structs represent the data model that flows between
/// the store and the UI layer.

use std::path::PathBuf;

/// A candidate image waiting in the staging area
#[derive(Debug, Clone, PartialEq)]
pub struct StagedImage {
    /// Where the image was loaded from
    pub path: PathBuf,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
}

impl StagedImage {
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }

    /// File name for display (e.g., "candidate_03.png")
    pub fn filename(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }

    /// Width divided by height, 1.0 for degenerate images
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }
}

/// Ordered candidates plus the one currently shown on the canvas
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StagingArea {
    pub images: Vec<StagedImage>,
    /// Index into `images`; meaningless while `images` is empty
    pub selected_index: usize,
}

impl StagingArea {
    pub fn selected(&self) -> Option<&StagedImage> {
        self.images.get(self.selected_index)
    }
}
