//! Checkbox Component
//!
//! A tri-state checkbox. The indeterminate state is used by the data table's
//! select-all header when only part of the visible page is selected.

use gpui::{
    div, px, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::GridColors;

/// Checkbox display state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    /// Some but not all of the relevant items are selected
    Indeterminate,
}

impl CheckState {
    /// The boolean a click transitions to: anything but `Checked` selects.
    pub fn toggled(&self) -> bool {
        !matches!(self, CheckState::Checked)
    }

    fn glyph(&self) -> &'static str {
        match self {
            CheckState::Unchecked => "",
            CheckState::Checked => "✓",
            CheckState::Indeterminate => "−",
        }
    }

    fn is_filled(&self) -> bool {
        !matches!(self, CheckState::Unchecked)
    }
}

/// A checkbox component
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    state: CheckState,
    label: Option<SharedString>,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            state: CheckState::Unchecked,
            label: None,
            disabled: false,
            on_change: None,
        }
    }

    /// Set the checked state from a bool
    pub fn checked(mut self, checked: bool) -> Self {
        self.state = if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        };
        self
    }

    /// Set the full tri-state
    pub fn state(mut self, state: CheckState) -> Self {
        self.state = state;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the change handler. Receives the state a click moves to.
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let state = self.state;
        let disabled = self.disabled;
        let on_change = self.on_change;

        let checkbox_bg = if state.is_filled() {
            GridColors::accent()
        } else {
            GridColors::input_bg()
        };

        let border_color = if state.is_filled() {
            GridColors::accent()
        } else {
            GridColors::input_border()
        };

        let mut checkbox = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .cursor_pointer()
            .child(
                div()
                    .size(px(18.0))
                    .rounded_sm()
                    .border_1()
                    .border_color(border_color)
                    .bg(checkbox_bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(GridColors::text_light())
                    .text_size(px(12.0))
                    .child(state.glyph()),
            );

        if let Some(label) = self.label {
            checkbox = checkbox.child(
                div()
                    .text_sm()
                    .text_color(GridColors::text_primary())
                    .child(label),
            );
        }

        if !disabled {
            if let Some(handler) = on_change {
                checkbox = checkbox.on_click(move |_event, window, cx| {
                    // Checkbox clicks must not double as row clicks.
                    cx.stop_propagation();
                    handler(state.toggled(), window, cx);
                });
            }
        } else {
            checkbox = checkbox.opacity(0.5);
        }

        checkbox
    }
}
