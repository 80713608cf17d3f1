/// The canvas slice and its reducer
///
/// Everything the staging toolbar can change goes through `CanvasAction`.
/// The reducer never fails: actions that make no sense for the current
/// state (e.g. committing with nothing staged) are ignored.

use super::data::{StagedImage, StagingArea};

/// Intents dispatched against the canvas slice
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasAction {
    /// Push a new candidate and select it
    AddImageToStagingArea(StagedImage),
    /// Move the selection back one
    PrevStagingAreaImage,
    /// Move the selection forward one
    NextStagingAreaImage,
    /// Accept the selected candidate onto the base layer
    CommitStagingAreaImage,
    /// Show or hide the staged image on the canvas
    SetShouldShowStagingImage(bool),
    /// Show or hide the outline around the staged image
    SetShouldShowStagingOutline(bool),
    /// Drop every candidate
    DiscardStagedImages,
}

/// The canvas slice
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasState {
    pub staging_area: StagingArea,
    /// Images accepted onto the base layer, oldest first
    pub objects: Vec<StagedImage>,
    pub should_show_staging_image: bool,
    pub should_show_staging_outline: bool,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            staging_area: StagingArea::default(),
            objects: Vec::new(),
            should_show_staging_image: true,
            should_show_staging_outline: true,
        }
    }
}

impl CanvasState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action in place. Returns whether anything changed.
    pub fn apply(&mut self, action: CanvasAction) -> bool {
        let before = self.clone();

        match action {
            CanvasAction::AddImageToStagingArea(image) => {
                self.staging_area.images.push(image);
                self.staging_area.selected_index = self.staging_area.images.len() - 1;
            }
            CanvasAction::PrevStagingAreaImage => {
                self.staging_area.selected_index = self.staging_area.selected_index.saturating_sub(1);
            }
            CanvasAction::NextStagingAreaImage => {
                let len = self.staging_area.images.len();
                if len > 0 {
                    self.staging_area.selected_index =
                        (self.staging_area.selected_index + 1).min(len - 1);
                }
            }
            CanvasAction::CommitStagingAreaImage => {
                if let Some(image) = self.staging_area.selected().cloned() {
                    self.objects.push(image);
                    self.reset_staging();
                }
            }
            CanvasAction::SetShouldShowStagingImage(show) => {
                self.should_show_staging_image = show;
            }
            CanvasAction::SetShouldShowStagingOutline(show) => {
                self.should_show_staging_outline = show;
            }
            CanvasAction::DiscardStagedImages => {
                self.reset_staging();
            }
        }

        *self != before
    }

    /// Clear the staging area and restore both display flags
    fn reset_staging(&mut self) {
        self.staging_area = StagingArea::default();
        self.should_show_staging_image = true;
        self.should_show_staging_outline = true;
    }
}
