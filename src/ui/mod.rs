/// UI widgets
///
/// - `canvas.rs` draws the base layer and the staged candidate
/// - `staging_toolbar.rs` floats over the canvas while images are staged

pub mod canvas;
pub mod staging_toolbar;
