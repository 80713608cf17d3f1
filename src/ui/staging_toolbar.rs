/// Floating toolbar over the canvas for the staging area
///
/// Lets the user step through staged candidates, accept one, toggle its
/// visibility or discard them all. It keeps no state: everything comes from
/// `select_toolbar` and every interaction is a `CanvasAction` for the store.
use iced::keyboard::{key, Key, Modifiers};
use iced::widget::{button, container, mouse_area, text, tooltip, Row};
use iced::{alignment, Element, Theme};

use crate::config::{Position, ToolbarConfig};
use crate::state::{CanvasAction, CanvasState};

const ICON_PREVIOUS: &str = "‹";
const ICON_NEXT: &str = "›";
const ICON_ACCEPT: &str = "✓";
const ICON_VISIBLE: &str = "◉";
const ICON_HIDDEN: &str = "○";
const ICON_DISCARD: &str = "✕";

/// What the toolbar needs from the canvas slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolbarModel {
    pub image_count: usize,
    pub selected_index: usize,
    pub should_show_staging_image: bool,
    pub should_show_staging_outline: bool,
}

impl ToolbarModel {
    pub fn has_images(&self) -> bool {
        self.image_count > 0
    }

    pub fn is_on_first_image(&self) -> bool {
        self.selected_index == 0
    }

    pub fn is_on_last_image(&self) -> bool {
        self.selected_index + 1 >= self.image_count
    }
}

/// Selector over the canvas slice
pub fn select_toolbar(state: &CanvasState) -> ToolbarModel {
    ToolbarModel {
        image_count: state.staging_area.images.len(),
        selected_index: state.staging_area.selected_index,
        should_show_staging_image: state.should_show_staging_image,
        should_show_staging_outline: state.should_show_staging_outline,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Previous,
    Next,
    Accept,
    ToggleVisibility,
    DiscardAll,
}

/// One toolbar button, as it should be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub kind: ControlKind,
    pub icon: &'static str,
    pub tooltip: &'static str,
    /// `None` renders the button disabled
    pub on_press: Option<CanvasAction>,
}

/// The buttons to render, left to right. `None` when nothing is staged.
pub fn controls(model: &ToolbarModel) -> Option<[Control; 5]> {
    if !model.has_images() {
        return None;
    }

    Some([
        Control {
            kind: ControlKind::Previous,
            icon: ICON_PREVIOUS,
            tooltip: "Previous (Left)",
            on_press: (!model.is_on_first_image()).then_some(CanvasAction::PrevStagingAreaImage),
        },
        Control {
            kind: ControlKind::Next,
            icon: ICON_NEXT,
            tooltip: "Next (Right)",
            on_press: (!model.is_on_last_image()).then_some(CanvasAction::NextStagingAreaImage),
        },
        Control {
            kind: ControlKind::Accept,
            icon: ICON_ACCEPT,
            tooltip: "Accept (Enter)",
            on_press: Some(CanvasAction::CommitStagingAreaImage),
        },
        Control {
            kind: ControlKind::ToggleVisibility,
            icon: if model.should_show_staging_image {
                ICON_VISIBLE
            } else {
                ICON_HIDDEN
            },
            tooltip: "Show/Hide",
            on_press: Some(CanvasAction::SetShouldShowStagingImage(
                !model.should_show_staging_image,
            )),
        },
        Control {
            kind: ControlKind::DiscardAll,
            icon: ICON_DISCARD,
            tooltip: "Discard All",
            on_press: Some(CanvasAction::DiscardStagedImages),
        },
    ])
}

/// Hide the outline while the pointer is over the toolbar so it doesn't
/// cover the buttons, restore it on leave.
pub fn hover_action(entered: bool) -> CanvasAction {
    CanvasAction::SetShouldShowStagingOutline(!entered)
}

/// Keyboard shortcut for an enabled control, if any
pub fn hotkey(key: &Key, modifiers: Modifiers, model: &ToolbarModel) -> Option<CanvasAction> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    let kind = match key {
        Key::Named(key::Named::ArrowLeft) => ControlKind::Previous,
        Key::Named(key::Named::ArrowRight) => ControlKind::Next,
        Key::Named(key::Named::Enter) => ControlKind::Accept,
        _ => return None,
    };

    controls(model)?
        .into_iter()
        .find(|control| control.kind == kind)?
        .on_press
}

/// Build the toolbar, or `None` when there is nothing to show
pub fn view<'a>(model: &ToolbarModel, config: &ToolbarConfig) -> Option<Element<'a, CanvasAction>> {
    let controls = controls(model)?;

    let buttons = controls
        .into_iter()
        .map(|control| control_button(control, config));

    let bar = container(
        Row::with_children(buttons)
            .spacing(config.spacing)
            .align_y(alignment::Vertical::Center),
    )
    .padding(config.padding)
    .style(container::rounded_box);

    Some(
        mouse_area(bar)
            .on_enter(hover_action(true))
            .on_exit(hover_action(false))
            .into(),
    )
}

fn control_button<'a>(control: Control, config: &ToolbarConfig) -> Element<'a, CanvasAction> {
    let style: fn(&Theme, button::Status) -> button::Style = match control.kind {
        ControlKind::Accept => button::success,
        ControlKind::DiscardAll => button::danger,
        _ => button::secondary,
    };

    // Tooltips open away from the canvas edge the toolbar sits on
    let position = match config.position {
        Position::Top => tooltip::Position::Bottom,
        Position::Bottom => tooltip::Position::Top,
    };

    let btn = button(text(control.icon).size(config.icon_size))
        .on_press_maybe(control.on_press)
        .padding(6)
        .style(style);

    tooltip(btn, text(control.tooltip).size(12), position)
        .padding(4)
        .style(container::rounded_box)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{StagedImage, Store};

    fn model(image_count: usize, selected_index: usize) -> ToolbarModel {
        ToolbarModel {
            image_count,
            selected_index,
            should_show_staging_image: true,
            should_show_staging_outline: true,
        }
    }

    fn control(model: &ToolbarModel, kind: ControlKind) -> Control {
        controls(model)
            .unwrap()
            .into_iter()
            .find(|c| c.kind == kind)
            .unwrap()
    }

    #[test]
    fn test_empty_renders_nothing() {
        let empty = model(0, 0);
        assert!(controls(&empty).is_none());
        assert!(view(&empty, &ToolbarConfig::default()).is_none());
    }

    #[test]
    fn test_first_image_disables_previous() {
        let m = model(3, 0);
        assert_eq!(control(&m, ControlKind::Previous).on_press, None);
        assert_eq!(
            control(&m, ControlKind::Next).on_press,
            Some(CanvasAction::NextStagingAreaImage)
        );
    }

    #[test]
    fn test_single_image_disables_both_directions() {
        let m = model(1, 0);
        assert_eq!(control(&m, ControlKind::Previous).on_press, None);
        assert_eq!(control(&m, ControlKind::Next).on_press, None);
    }

    #[test]
    fn test_last_image_disables_next() {
        let m = model(3, 2);
        assert_eq!(control(&m, ControlKind::Next).on_press, None);
        assert_eq!(
            control(&m, ControlKind::Previous).on_press,
            Some(CanvasAction::PrevStagingAreaImage)
        );
    }

    #[test]
    fn test_accept_and_discard_always_enabled() {
        for m in [model(1, 0), model(4, 2)] {
            assert_eq!(
                control(&m, ControlKind::Accept).on_press,
                Some(CanvasAction::CommitStagingAreaImage)
            );
            assert_eq!(
                control(&m, ControlKind::DiscardAll).on_press,
                Some(CanvasAction::DiscardStagedImages)
            );
        }
    }

    #[test]
    fn test_controls_in_fixed_order() {
        let kinds: Vec<_> = controls(&model(2, 1)).unwrap().iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            [
                ControlKind::Previous,
                ControlKind::Next,
                ControlKind::Accept,
                ControlKind::ToggleVisibility,
                ControlKind::DiscardAll,
            ]
        );
    }

    #[test]
    fn test_toggle_flips_icon_and_flag() {
        let mut store = Store::default();
        store.dispatch(CanvasAction::AddImageToStagingArea(StagedImage::new("a.png", 8, 8)));

        let visible = control(&select_toolbar(store.state()), ControlKind::ToggleVisibility);
        assert_eq!(visible.icon, ICON_VISIBLE);
        assert_eq!(
            visible.on_press,
            Some(CanvasAction::SetShouldShowStagingImage(false))
        );

        store.dispatch(visible.on_press.unwrap());

        let hidden = control(&select_toolbar(store.state()), ControlKind::ToggleVisibility);
        assert_eq!(hidden.icon, ICON_HIDDEN);
        assert_eq!(
            hidden.on_press,
            Some(CanvasAction::SetShouldShowStagingImage(true))
        );
    }

    #[test]
    fn test_discard_dispatches_once_per_click() {
        let discard = control(&model(2, 0), ControlKind::DiscardAll);
        let dispatched: Vec<_> = discard.on_press.into_iter().collect();
        assert_eq!(dispatched, [CanvasAction::DiscardStagedImages]);
    }

    #[test]
    fn test_hover_toggles_outline() {
        assert_eq!(hover_action(true), CanvasAction::SetShouldShowStagingOutline(false));
        assert_eq!(hover_action(false), CanvasAction::SetShouldShowStagingOutline(true));
    }

    #[test]
    fn test_hotkeys_follow_enabled_controls() {
        let none = Modifiers::empty();
        let left = Key::Named(key::Named::ArrowLeft);
        let right = Key::Named(key::Named::ArrowRight);
        let enter = Key::Named(key::Named::Enter);

        assert_eq!(hotkey(&left, none, &model(3, 0)), None);
        assert_eq!(
            hotkey(&right, none, &model(3, 0)),
            Some(CanvasAction::NextStagingAreaImage)
        );
        assert_eq!(
            hotkey(&enter, none, &model(3, 1)),
            Some(CanvasAction::CommitStagingAreaImage)
        );
        assert_eq!(hotkey(&enter, none, &model(0, 0)), None);
        assert_eq!(hotkey(&enter, Modifiers::CTRL, &model(3, 1)), None);
    }

    #[test]
    fn test_selector_reads_staging_area() {
        let mut store = Store::default();
        for name in ["a.png", "b.png"] {
            store.dispatch(CanvasAction::AddImageToStagingArea(StagedImage::new(name, 8, 8)));
        }
        store.dispatch(CanvasAction::SetShouldShowStagingOutline(false));

        let m = select_toolbar(store.state());
        assert_eq!(m.image_count, 2);
        assert_eq!(m.selected_index, 1);
        assert!(m.is_on_last_image());
        assert!(!m.should_show_staging_outline);
    }
}
