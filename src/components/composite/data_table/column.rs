//! Column Definition
//!
//! Defines table columns with their accessors, sort behavior, widths and
//! cell renderers.

use gpui::{div, AnyElement, IntoElement, ParentElement, SharedString, Styled};

use super::sort::CellValue;

type ValueFn<R> = Box<dyn Fn(&R) -> CellValue + Send + Sync>;
type RenderFn<R> = Box<dyn Fn(&R) -> AnyElement + Send + Sync>;

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column identifier, unique within the column set
    pub id: SharedString,
    /// Column header label
    pub label: SharedString,
    /// Accessor producing the cell value used for sorting and, unless a
    /// custom renderer is set, for display. Must be a pure function of the
    /// row.
    pub value: ValueFn<R>,
    /// Optional custom cell renderer, overriding the default text rendering
    pub render: Option<RenderFn<R>>,
    /// Whether header clicks sort by this column
    pub sortable: bool,
    /// Column width (in pixels, or flexible)
    pub width: ColumnWidth,
    /// Horizontal cell alignment
    pub align: CellAlign,
}

/// Column width specification
#[derive(Debug, Clone, Copy)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Flexible width with optional min/max
    Flex { min: Option<f32>, max: Option<f32> },
    /// Percentage of available space
    Percent(f32),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: None, max: None }
    }
}

/// Horizontal cell alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl<R: 'static> Column<R> {
    /// Create a new column. Columns are sortable by default.
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        value: impl Fn(&R) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: Box::new(value),
            render: None,
            sortable: true,
            width: ColumnWidth::default(),
            align: CellAlign::default(),
        }
    }

    /// Set a custom cell renderer
    pub fn render_with(mut self, render: impl Fn(&R) -> AnyElement + Send + Sync + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// Enable or disable sorting on this column
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with optional constraints
    pub fn flex_width(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.width = ColumnWidth::Flex { min, max };
        self
    }

    /// Set percentage width
    pub fn percent_width(mut self, percent: f32) -> Self {
        self.width = ColumnWidth::Percent(percent);
        self
    }

    /// Set the cell alignment
    pub fn align(mut self, align: CellAlign) -> Self {
        self.align = align;
        self
    }

    /// Resolve the accessor for a row
    pub fn value_of(&self, row: &R) -> CellValue {
        (self.value)(row)
    }

    /// Render a cell, falling back to the value's text form
    pub fn render_cell(&self, row: &R) -> AnyElement {
        match &self.render {
            Some(render) => render(row),
            None => div()
                .text_sm()
                .child(self.value_of(row).display())
                .into_any_element(),
        }
    }
}
