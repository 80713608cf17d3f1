use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{button, canvas, column, container, row, text, Stack};
use iced::{alignment, Element, Length, Subscription, Task, Theme};
use log::{debug, info};
use rfd::FileDialog;
use std::path::PathBuf;

mod config;
mod error;
mod stage;
mod state;
mod ui;

use config::{Position, ToolbarConfig};
use state::{CanvasAction, CanvasState, Selector, StagedImage, Store};
use ui::canvas::StagingCanvas;
use ui::staging_toolbar::{self, ToolbarModel};

/// Main application state
struct CanvasStaging {
    /// The canvas slice, only changed through `dispatch`
    store: Store,
    /// Memoized toolbar view of the store
    toolbar: Selector<ToolbarModel>,
    config: ToolbarConfig,
    /// Canvas pan offset in normalized coordinates
    offset: cgmath::Vector2<f32>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Toolbar config finished loading (defaults on failure)
    ConfigLoaded(ToolbarConfig),
    /// User clicked the "Stage Images" button
    StageFiles,
    /// Background probing finished
    FilesStaged(Vec<StagedImage>),
    /// An intent for the canvas store
    Canvas(CanvasAction),
    KeyPressed(Key, Modifiers),
    /// Drag on the canvas
    Pan(cgmath::Vector2<f32>),
    ResetView,
}

impl CanvasStaging {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let app = CanvasStaging {
            store: Store::new(CanvasState::new()),
            toolbar: Selector::new(staging_toolbar::select_toolbar),
            config: ToolbarConfig::default(),
            offset: cgmath::Vector2::new(0.0, 0.0),
        };

        let mut tasks = vec![Task::perform(
            ToolbarConfig::load_or_default(),
            Message::ConfigLoaded,
        )];

        // Files given on the command line are staged right away
        let paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
        if !paths.is_empty() {
            info!("🖼️  Staging {} files from the command line", paths.len());
            tasks.push(Task::perform(stage::stage_files(paths), Message::FilesStaged));
        }

        (app, Task::batch(tasks))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ConfigLoaded(config) => {
                debug!("toolbar config: {:?}", config);
                self.config = config;
            }
            Message::StageFiles => {
                // Show the native file picker dialog
                let files = FileDialog::new()
                    .set_title("Select Images to Stage")
                    .add_filter("Images", &["png", "jpg", "jpeg", "webp", "bmp", "tif", "tiff"])
                    .pick_files();

                if let Some(paths) = files {
                    return Task::perform(stage::stage_files(paths), Message::FilesStaged);
                }
            }
            Message::FilesStaged(images) => {
                for image in images {
                    self.store.dispatch(CanvasAction::AddImageToStagingArea(image));
                }
            }
            Message::Canvas(action) => {
                self.store.dispatch(action);
            }
            Message::KeyPressed(key, modifiers) => {
                if self.config.hotkeys {
                    let model = self.toolbar.select(&self.store);
                    if let Some(action) = staging_toolbar::hotkey(&key, modifiers, &model) {
                        self.store.dispatch(action);
                    }
                }
            }
            Message::Pan(delta) => {
                self.offset += delta;
            }
            Message::ResetView => {
                self.offset = cgmath::Vector2::new(0.0, 0.0);
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let model = self.toolbar.select(&self.store);

        let status = if model.has_images() {
            format!(
                "Staged image {} of {}",
                model.selected_index + 1,
                model.image_count
            )
        } else {
            format!("{} images on canvas", self.store.state().objects.len())
        };

        let header = row![
            button("Stage Images…").on_press(Message::StageFiles).padding(10),
            button("Reset View").on_press(Message::ResetView).padding(10),
            text(status).size(16),
        ]
        .spacing(20)
        .padding(10)
        .align_y(alignment::Vertical::Center);

        let surface = canvas(StagingCanvas {
            state: self.store.state(),
            offset: self.offset,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(surface);

        if let Some(toolbar) = staging_toolbar::view(&model, &self.config) {
            let edge = match self.config.position {
                Position::Top => alignment::Vertical::Top,
                Position::Bottom => alignment::Vertical::Bottom,
            };

            layers = layers.push(
                container(toolbar.map(Message::Canvas))
                    .center_x(Length::Fill)
                    .height(Length::Fill)
                    .align_y(edge)
                    .padding(16),
            );
        }

        column![header, layers].into()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| Some(Message::KeyPressed(key, modifiers)))
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("🎨 Canvas Staging starting");

    iced::application("Canvas Staging", CanvasStaging::update, CanvasStaging::view)
        .subscription(CanvasStaging::subscription)
        .theme(CanvasStaging::theme)
        .centered()
        .run_with(CanvasStaging::new)
}
