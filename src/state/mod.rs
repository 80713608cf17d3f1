/// State management module
/// 
/// This module holds the canvas slice the staging toolbar reads from:
/// - Shared data structures (data.rs)
/// - The canvas slice, its actions and reducer (canvas.rs)
/// - The dispatching store and memoized selectors (store.rs)

pub mod data;
pub mod canvas;
pub mod store;

pub use canvas::{CanvasAction, CanvasState};
pub use data::StagedImage;
pub use store::{Selector, Store};
