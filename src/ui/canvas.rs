use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Frame, Path, Program, Stroke};
use iced::{Color, Pixels, Point, Rectangle, Renderer, Size, Theme};

use crate::state::{CanvasState, StagedImage};
use crate::Message;

/// Fraction of the canvas an image may occupy
const FIT_MARGIN: f32 = 0.9;

const BASE_FILL: Color = Color::from_rgb(0.22, 0.22, 0.25);
const STAGED_FILL: Color = Color::from_rgba(0.35, 0.55, 0.95, 0.35);
const OUTLINE: Color = Color::from_rgb(0.35, 0.55, 0.95);

/// Canvas view of the base layer and the staged candidate
pub struct StagingCanvas<'a> {
    pub state: &'a CanvasState,
    /// Pan offset in normalized coordinates
    pub offset: cgmath::Vector2<f32>,
}

impl Program<Message> for StagingCanvas<'_> {
    type State = DragState;

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();

        if let Some(object) = self.state.objects.last() {
            let rect = fit_rect(object, size, self.offset);
            frame.fill_rectangle(rect.position(), rect.size(), BASE_FILL);
        }

        let staging = &self.state.staging_area;
        if let Some(image) = staging.selected() {
            let rect = fit_rect(image, size, self.offset);

            if self.state.should_show_staging_image {
                frame.fill_rectangle(rect.position(), rect.size(), STAGED_FILL);
                frame.fill_text(canvas::Text {
                    content: format!(
                        "{} ({}/{})",
                        image.filename(),
                        staging.selected_index + 1,
                        staging.images.len()
                    ),
                    position: Point::new(rect.x + 8.0, rect.y + 8.0),
                    color: Color::WHITE,
                    size: Pixels(14.0),
                    ..canvas::Text::default()
                });
            }

            if self.state.should_show_staging_outline {
                frame.stroke(
                    &Path::rectangle(rect.position(), rect.size()),
                    Stroke::default().with_color(OUTLINE).with_width(2.0),
                );
            }
        }

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            // Mouse button press - start dragging
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if cursor.is_over(bounds) {
                    state.is_dragging = true;
                    state.last_position = cursor.position();
                    return (canvas::event::Status::Captured, None);
                }
            }

            // Mouse button release - stop dragging
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.is_dragging {
                    state.is_dragging = false;
                    state.last_position = None;
                    return (canvas::event::Status::Captured, None);
                }
            }

            // Mouse move - pan if dragging
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) if state.is_dragging => {
                if let (Some(current), Some(last)) = (cursor.position(), state.last_position) {
                    state.last_position = Some(current);

                    // Normalize so panning feels the same at any canvas size
                    let delta = cgmath::Vector2::new(
                        (current.x - last.x) / bounds.width.max(1.0),
                        (current.y - last.y) / bounds.height.max(1.0),
                    );
                    return (canvas::event::Status::Captured, Some(Message::Pan(delta)));
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }
}

/// State for drag interactions
#[derive(Debug, Clone, Default)]
pub struct DragState {
    pub is_dragging: bool,
    pub last_position: Option<Point>,
}

/// Largest rectangle with the image's aspect ratio that fits the canvas,
/// centered and shifted by the normalized pan offset
pub fn fit_rect(image: &StagedImage, canvas: Size, offset: cgmath::Vector2<f32>) -> Rectangle {
    let available = Size::new(canvas.width * FIT_MARGIN, canvas.height * FIT_MARGIN);
    let aspect = image.aspect_ratio();

    let size = if available.width / aspect <= available.height {
        Size::new(available.width, available.width / aspect)
    } else {
        Size::new(available.height * aspect, available.height)
    };

    let x = (canvas.width - size.width) / 2.0 + offset.x * canvas.width;
    let y = (canvas.height - size.height) / 2.0 + offset.y * canvas.height;

    Rectangle::new(Point::new(x, y), size)
}
