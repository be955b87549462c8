//! DataTable Component
//!
//! The table orchestrator: owns the rows, columns and view state, derives
//! the sorted order and the visible page from them, and renders the header,
//! body and pagination footer. All state transitions happen inside the
//! click handlers wired here; derived values are recomputed only when their
//! inputs change.

use std::collections::HashSet;
use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, Context, Entity, FontWeight, IntoElement, ParentElement,
    Render, SharedString, Styled, Window,
};

use super::column::{CellAlign, Column, ColumnWidth};
use super::pagination::Pagination;
use super::selection::{HeaderCheckState, RowKey};
use super::sort::{sort_order, SortDirection, SortState};
use super::state::TableViewState;
use crate::components::primitives::checkbox::{CheckState, Checkbox};
use crate::constants::{
    CHECKBOX_COLUMN_WIDTH, DATA_ROW_HEIGHT, DATA_ROW_HEIGHT_COMPACT, DEFAULT_PAGE_SIZE_OPTIONS,
    HEADER_ROW_HEIGHT, HEADER_ROW_HEIGHT_COMPACT,
};
use crate::theme::colors::GridColors;

type KeyFn<R> = Box<dyn Fn(&R) -> RowKey + Send + Sync>;
type SortHandler = Rc<dyn Fn(&SortState, &mut Window, &mut App) + 'static>;
type SelectionHandler = Rc<dyn Fn(&HashSet<RowKey>, &mut Window, &mut App) + 'static>;
type RowClickHandler<R> = Rc<dyn Fn(&R, &mut Window, &mut App) + 'static>;

/// DataTable component
pub struct DataTable<R: Clone + Send + Sync + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    key_of: KeyFn<R>,
    view: TableViewState,
    /// Row order after sorting, as indices into `rows`. Rebuilt only when
    /// the rows, the columns or the sort state change.
    order: Vec<usize>,
    sortable: bool,
    selectable: bool,
    pagination: bool,
    page_size_options: Vec<usize>,
    loading: bool,
    empty_message: SharedString,
    items_label: SharedString,
    striped: bool,
    hoverable: bool,
    compact: bool,
    on_sort: Option<SortHandler>,
    on_selection_change: Option<SelectionHandler>,
    on_row_click: Option<RowClickHandler<R>>,
}

impl<R: Clone + Send + Sync + 'static> DataTable<R> {
    /// Create a new data table. `key_of` reads each row's identity; the
    /// values it produces must be unique across the current data set.
    pub fn new(
        key_of: impl Fn(&R) -> RowKey + Send + Sync + 'static,
        _cx: &mut Context<Self>,
    ) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            key_of: Box::new(key_of),
            view: TableViewState::new(),
            order: Vec::new(),
            sortable: true,
            selectable: false,
            pagination: true,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            loading: false,
            empty_message: "No data available".into(),
            items_label: "items".into(),
            striped: true,
            hoverable: true,
            compact: false,
            on_sort: None,
            on_selection_change: None,
            on_row_click: None,
        }
    }

    /// Set the columns. An active sort referencing a removed column is
    /// tolerated and simply leaves the data unsorted.
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
        self.refresh_order();
    }

    /// Set the rows. The sort and the current page survive data changes;
    /// only the derived view is recomputed.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.refresh_order();
    }

    /// Set loading state. Sort, page and selection are untouched.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set the empty message
    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    /// Set the label shown next to the item count in the footer
    pub fn set_items_label(&mut self, label: impl Into<SharedString>) {
        self.items_label = label.into();
    }

    /// Enable or disable sorting for the whole table
    pub fn set_sortable(&mut self, sortable: bool) {
        self.sortable = sortable;
    }

    /// Apply a starting sort
    pub fn set_default_sort(&mut self, column: impl Into<SharedString>, direction: SortDirection) {
        self.view.set_sort(column, direction);
        self.refresh_order();
    }

    /// Show or hide the selection checkbox column
    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    /// Supply the caller-owned selection set (controlled mode), or `None` to
    /// let the table own its selection again.
    pub fn set_selected_rows(&mut self, selected: Option<HashSet<RowKey>>) {
        self.view.selection.set_external(selected);
    }

    /// Show or hide the pagination footer. With pagination off every row is
    /// rendered.
    pub fn set_pagination(&mut self, pagination: bool) {
        self.pagination = pagination;
    }

    /// Set the page size (resets to the first page)
    pub fn set_page_size(&mut self, page_size: usize) {
        self.view.set_page_size(page_size);
    }

    /// Set the page sizes offered in the footer
    pub fn set_page_size_options(&mut self, options: Vec<usize>) {
        self.page_size_options = options;
    }

    pub fn set_striped(&mut self, striped: bool) {
        self.striped = striped;
    }

    pub fn set_hoverable(&mut self, hoverable: bool) {
        self.hoverable = hoverable;
    }

    pub fn set_compact(&mut self, compact: bool) {
        self.compact = compact;
    }

    /// Observe sort transitions
    pub fn on_sort(&mut self, handler: impl Fn(&SortState, &mut Window, &mut App) + 'static) {
        self.on_sort = Some(Rc::new(handler));
    }

    /// Observe selection changes. Every change produces a fresh set; in
    /// controlled mode this callback is the only way the change becomes
    /// visible.
    pub fn on_selection_change(
        &mut self,
        handler: impl Fn(&HashSet<RowKey>, &mut Window, &mut App) + 'static,
    ) {
        self.on_selection_change = Some(Rc::new(handler));
    }

    /// Observe row clicks. The handler receives the row itself.
    pub fn on_row_click(&mut self, handler: impl Fn(&R, &mut Window, &mut App) + 'static) {
        self.on_row_click = Some(Rc::new(handler));
    }

    /// The current page size
    pub fn page_size(&self) -> usize {
        self.view.page_size()
    }

    /// The active sort
    pub fn sort_state(&self) -> &SortState {
        self.view.sort()
    }

    /// The active selection set
    pub fn selected_rows(&self) -> &HashSet<RowKey> {
        self.view.selection.active()
    }

    fn refresh_order(&mut self) {
        self.order = sort_order(&self.rows, &self.columns, self.view.sort());
    }

    fn row_height(&self) -> f32 {
        if self.compact {
            DATA_ROW_HEIGHT_COMPACT
        } else {
            DATA_ROW_HEIGHT
        }
    }

    fn header_height(&self) -> f32 {
        if self.compact {
            HEADER_ROW_HEIGHT_COMPACT
        } else {
            HEADER_ROW_HEIGHT
        }
    }

    /// Indices into `rows` for the visible page, in display order
    fn visible_entries(&self) -> Vec<usize> {
        let range = if self.pagination {
            self.view.visible_range(self.order.len())
        } else {
            0..self.order.len()
        };
        self.order
            .iter()
            .skip(range.start)
            .take(range.len())
            .copied()
            .collect()
    }

    /// Keys of the rows on the visible page
    fn visible_keys(&self) -> Vec<RowKey> {
        self.visible_entries()
            .into_iter()
            .filter_map(|index| self.rows.get(index))
            .map(|row| (self.key_of)(row))
            .collect()
    }

    fn handle_header_click(&mut self, col_ix: usize, window: &mut Window, cx: &mut Context<Self>) {
        if !self.sortable {
            return;
        }
        let Some(column) = self.columns.get(col_ix) else {
            return;
        };
        if !column.sortable {
            return;
        }

        let column_id = column.id.clone();
        self.view.cycle_sort(&column_id);
        self.refresh_order();

        if let Some(on_sort) = self.on_sort.clone() {
            on_sort(self.view.sort(), window, cx);
        }
        cx.notify();
    }

    fn handle_toggle_row(&mut self, key: RowKey, window: &mut Window, cx: &mut Context<Self>) {
        let next = self.view.selection.toggled(&key);
        self.view.selection.commit(next.clone());

        if let Some(on_selection_change) = self.on_selection_change.clone() {
            on_selection_change(&next, window, cx);
        }
        cx.notify();
    }

    fn handle_toggle_all(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let visible = self.visible_keys();
        let next = self.view.selection.toggled_all(&visible);
        self.view.selection.commit(next.clone());

        if let Some(on_selection_change) = self.on_selection_change.clone() {
            on_selection_change(&next, window, cx);
        }
        cx.notify();
    }

    /// Get column width style
    fn column_width_style(&self, width: &ColumnWidth) -> f32 {
        match width {
            ColumnWidth::Fixed(w) => *w,
            ColumnWidth::Flex { min, .. } => min.unwrap_or(100.0),
            ColumnWidth::Percent(p) => *p,
        }
    }

    /// Render the header row
    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let mut header = div()
            .h(px(self.header_height()))
            .w_full()
            .flex()
            .items_center()
            .bg(GridColors::table_header_bg())
            .border_b_1()
            .border_color(GridColors::border());

        if self.selectable {
            header = header.child(self.render_header_checkbox(cx));
        }

        for (col_ix, column) in self.columns.iter().enumerate() {
            let width = self.column_width_style(&column.width);
            let sortable = self.sortable && column.sortable;
            let direction = self.view.sort().direction_for(&column.id);

            let mut cell = div()
                .id(("col-header", col_ix))
                .w(px(width))
                .h_full()
                .px_3()
                .flex()
                .items_center()
                .gap_1()
                .text_sm()
                .font_weight(FontWeight::MEDIUM)
                .text_color(GridColors::text_primary())
                .child(column.label.clone());

            cell = match column.align {
                CellAlign::Left => cell.justify_start(),
                CellAlign::Center => cell.justify_center(),
                CellAlign::Right => cell.justify_end(),
            };

            if sortable {
                let indicator = match direction {
                    Some(SortDirection::Ascending) => "▲",
                    Some(SortDirection::Descending) => "▼",
                    None => "⇅",
                };
                let indicator_color = if direction.is_some() {
                    GridColors::text_primary()
                } else {
                    GridColors::text_muted()
                };
                cell = cell
                    .cursor_pointer()
                    .hover(|s| s.bg(GridColors::table_row_hover()))
                    .on_click(cx.listener(move |this, _event: &ClickEvent, window, cx| {
                        this.handle_header_click(col_ix, window, cx);
                    }))
                    .child(
                        div()
                            .text_size(px(10.0))
                            .text_color(indicator_color)
                            .child(indicator),
                    );
            }

            header = header.child(cell);
        }

        header
    }

    /// Render the select-all header checkbox, reflecting how much of the
    /// visible page is selected
    fn render_header_checkbox(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let visible = self.visible_keys();
        let state = match self.view.selection.header_state(&visible) {
            HeaderCheckState::Unchecked => CheckState::Unchecked,
            HeaderCheckState::Checked => CheckState::Checked,
            HeaderCheckState::Indeterminate => CheckState::Indeterminate,
        };
        let entity = cx.entity().clone();

        div()
            .w(px(CHECKBOX_COLUMN_WIDTH))
            .h_full()
            .flex()
            .items_center()
            .justify_center()
            .child(
                Checkbox::new("select-all")
                    .state(state)
                    .on_change(move |_next, window, cx| {
                        entity.update(cx, |table, cx| table.handle_toggle_all(window, cx));
                    }),
            )
    }

    /// Render a data row
    fn render_row(&self, row_ix: usize, visible_ix: usize, cx: &mut Context<Self>) -> impl IntoElement + use<R> {
        let bg = if self.striped && visible_ix % 2 == 1 {
            GridColors::table_row_alt()
        } else {
            GridColors::content_bg()
        };

        let mut element = div()
            .id(("row", row_ix))
            .h(px(self.row_height()))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .border_b_1()
            .border_color(GridColors::border());

        if self.hoverable {
            element = element.hover(|s| s.bg(GridColors::table_row_hover()));
        }

        if self.on_row_click.is_some() {
            element = element
                .cursor_pointer()
                .on_click(cx.listener(move |this, _event: &ClickEvent, window, cx| {
                    if let Some(on_row_click) = this.on_row_click.clone() {
                        if let Some(row) = this.rows.get(row_ix).cloned() {
                            on_row_click(&row, window, cx);
                        }
                    }
                }));
        }

        let Some(row) = self.rows.get(row_ix) else {
            return element;
        };

        if self.selectable {
            let key = (self.key_of)(row);
            let checked = self.view.selection.is_selected(&key);
            let entity = cx.entity().clone();
            element = element.child(
                div()
                    .w(px(CHECKBOX_COLUMN_WIDTH))
                    .h_full()
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        Checkbox::new(("row-check", row_ix))
                            .checked(checked)
                            .on_change(move |_next, window, cx| {
                                let key = key.clone();
                                entity.update(cx, |table, cx| {
                                    table.handle_toggle_row(key, window, cx);
                                });
                            }),
                    ),
            );
        }

        for column in &self.columns {
            let width = self.column_width_style(&column.width);
            let content = column.render_cell(row);
            let cell = div()
                .w(px(width))
                .h_full()
                .px_3()
                .flex()
                .items_center()
                .text_sm()
                .text_color(GridColors::text_primary())
                .overflow_hidden();
            let cell = match column.align {
                CellAlign::Left => cell.justify_start(),
                CellAlign::Center => cell.justify_center(),
                CellAlign::Right => cell.justify_end(),
            };
            element = element.child(cell.child(content));
        }

        element
    }

    /// Render skeleton placeholder rows while loading, one per page-size slot
    fn render_skeleton(&self) -> impl IntoElement {
        let count = self.view.page_size();
        let row_height = self.row_height();
        div().w_full().flex().flex_col().children((0..count).map(move |i| {
            div()
                .h(px(row_height))
                .w_full()
                .flex()
                .items_center()
                .px_3()
                .border_b_1()
                .border_color(GridColors::border())
                .child(
                    div()
                        .h(px(12.0))
                        .w_full()
                        .rounded_sm()
                        .bg(GridColors::skeleton())
                        .opacity(if i % 2 == 0 { 1.0 } else { 0.7 }),
                )
        }))
    }

    /// Render the empty state as a single full-width message row
    fn render_empty(&self) -> impl IntoElement {
        div()
            .w_full()
            .py_8()
            .flex()
            .items_center()
            .justify_center()
            .text_sm()
            .text_color(GridColors::text_muted())
            .child(self.empty_message.clone())
    }

    /// Render the pagination footer
    fn render_footer(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let total_items = self.rows.len();
        let total = self.view.total_pages(total_items);
        let page_entity = cx.entity().clone();
        let size_entity = cx.entity().clone();

        Pagination::new(self.view.page(), total, total_items)
            .page_size(self.view.page_size(), self.page_size_options.clone())
            .items_label(self.items_label.clone())
            .on_page_change(move |page, _window, cx| {
                page_entity.update(cx, |table, cx| {
                    table.view.set_page(page);
                    cx.notify();
                });
            })
            .on_page_size_change(move |size, _window, cx| {
                size_entity.update(cx, |table, cx| {
                    table.view.set_page_size(size);
                    cx.notify();
                });
            })
    }
}

impl<R: Clone + Send + Sync + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mut table = div()
            .size_full()
            .flex()
            .flex_col()
            .bg(GridColors::content_bg())
            .border_1()
            .border_color(GridColors::border())
            .rounded_md()
            .overflow_hidden();

        // Header
        table = table.child(self.render_header(cx));

        // Body
        if self.loading {
            table = table.child(self.render_skeleton());
        } else if self.rows.is_empty() {
            table = table.child(self.render_empty());
        } else {
            let visible = self.visible_entries();
            let rows_content = div()
                .id("data-table-rows")
                .flex_1()
                .overflow_y_scroll()
                .children(
                    visible
                        .into_iter()
                        .enumerate()
                        .map(|(visible_ix, row_ix)| self.render_row(row_ix, visible_ix, cx))
                        .collect::<Vec<_>>(),
                );
            table = table.child(rows_content);
        }

        // Footer
        if self.pagination && !self.rows.is_empty() {
            table = table.child(self.render_footer(cx));
        }

        table
    }
}

/// Helper to create a DataTable entity
pub fn data_table<R: Clone + Send + Sync + 'static, V: 'static>(
    key_of: impl Fn(&R) -> RowKey + Send + Sync + 'static,
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    cx: &mut Context<V>,
) -> Entity<DataTable<R>> {
    cx.new(|cx| {
        let mut table = DataTable::new(key_of, cx);
        table.set_columns(columns);
        table.set_rows(rows);
        table
    })
}
