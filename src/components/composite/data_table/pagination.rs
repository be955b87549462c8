//! Pagination
//!
//! Page arithmetic and the pagination footer for the DataTable.

use std::ops::Range;
use std::rc::Rc;

use gpui::{
    div, prelude::*, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window,
};

use crate::components::primitives::button::{Button, ButtonSize};
use crate::constants::PAGE_WINDOW;
use crate::theme::colors::GridColors;

/// Total number of pages for a row count. Never less than one, so an empty
/// table still has a current page.
pub fn total_pages(total_rows: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_rows.div_ceil(page_size).max(1)
}

/// The half-open index range of rows visible on `page` (1-based).
///
/// A page past the end of the data produces an empty range; the page number
/// itself is left alone so it becomes valid again when the data grows back.
pub fn page_slice(total_rows: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if page_size == 0 || start >= total_rows {
        return start..start;
    }
    start..(start + page_size).min(total_rows)
}

/// The page numbers shown in the footer: all of them when there are at most
/// `PAGE_WINDOW`, otherwise a window centered on `current` and clamped so it
/// never runs off either end.
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    if total <= PAGE_WINDOW {
        return (1..=total).collect();
    }
    let start = if current <= 3 {
        1
    } else if current + 2 >= total {
        total - (PAGE_WINDOW - 1)
    } else {
        current - 2
    };
    (start..start + PAGE_WINDOW).collect()
}

type PageHandler = Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>;

/// Pagination footer component
#[derive(IntoElement)]
pub struct Pagination {
    current_page: usize,
    total_pages: usize,
    total_items: usize,
    page_size: usize,
    page_size_options: Vec<usize>,
    items_label: SharedString,
    on_page_change: Option<PageHandler>,
    on_page_size_change: Option<PageHandler>,
}

impl Pagination {
    /// Create a new pagination footer
    pub fn new(current_page: usize, total_pages: usize, total_items: usize) -> Self {
        Self {
            current_page,
            total_pages,
            total_items,
            page_size: 0,
            page_size_options: Vec::new(),
            items_label: "items".into(),
            on_page_change: None,
            on_page_size_change: None,
        }
    }

    /// Show the page-size chooser with the given active size and options
    pub fn page_size(mut self, page_size: usize, options: Vec<usize>) -> Self {
        self.page_size = page_size;
        self.page_size_options = options;
        self
    }

    /// Set the items label
    pub fn items_label(mut self, label: impl Into<SharedString>) -> Self {
        self.items_label = label.into();
        self
    }

    /// Set the page change handler
    pub fn on_page_change(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    /// Set the page-size change handler
    pub fn on_page_size_change(
        mut self,
        handler: impl Fn(usize, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_page_size_change = Some(Rc::new(handler));
        self
    }
}

/// A small navigation button jumping to `target` when enabled
fn nav_button(
    id: &'static str,
    label: &'static str,
    target: usize,
    disabled: bool,
    handler: Option<PageHandler>,
) -> Button {
    let mut button = Button::ghost(id, label)
        .size(ButtonSize::Small)
        .disabled(disabled);
    if let Some(handler) = handler {
        if !disabled {
            button = button.on_click(move |_event, window, cx| handler(target, window, cx));
        }
    }
    button
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let current = self.current_page;
        let total = self.total_pages;
        let at_first = current <= 1;
        let at_last = current >= total;
        let on_page = self.on_page_change;
        let on_page_size = self.on_page_size_change;

        // Left side: item count plus the page-size chooser.
        let mut summary = div()
            .flex()
            .items_center()
            .gap_3()
            .child(
                div()
                    .text_sm()
                    .text_color(GridColors::text_secondary())
                    .child(format!("{} {}", self.total_items, self.items_label)),
            );

        if !self.page_size_options.is_empty() {
            let mut chooser = div().flex().items_center().gap_1();
            for size in self.page_size_options {
                let mut button = Button::ghost(("page-size", size), format!("{size}"))
                    .size(ButtonSize::Small)
                    .selected(size == self.page_size);
                if let Some(handler) = on_page_size.clone() {
                    button = button.on_click(move |_event, window, cx| handler(size, window, cx));
                }
                chooser = chooser.child(button);
            }
            summary = summary.child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .child(chooser)
                    .child(
                        div()
                            .text_sm()
                            .text_color(GridColors::text_muted())
                            .child("/ page"),
                    ),
            );
        }

        // Right side: first/prev, the page window, next/last.
        let mut nav = div()
            .flex()
            .items_center()
            .gap_1()
            .child(nav_button("page-first", "«", 1, at_first, on_page.clone()))
            .child(nav_button(
                "page-prev",
                "‹",
                current.saturating_sub(1).max(1),
                at_first,
                on_page.clone(),
            ));

        for page in page_window(current, total) {
            let mut button = Button::ghost(("page", page), format!("{page}"))
                .size(ButtonSize::Small)
                .selected(page == current);
            if let Some(handler) = on_page.clone() {
                button = button.on_click(move |_event, window, cx| handler(page, window, cx));
            }
            nav = nav.child(button);
        }

        nav = nav
            .child(nav_button(
                "page-next",
                "›",
                (current + 1).min(total),
                at_last,
                on_page.clone(),
            ))
            .child(nav_button("page-last", "»", total, at_last, on_page));

        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(GridColors::border())
            .child(summary)
            .child(nav)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(23, 25), 1);
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(100, 10), 10);
    }

    #[test]
    fn test_page_slice_last_page_is_short() {
        assert_eq!(page_slice(23, 3, 10), 20..23);
    }

    #[test]
    fn test_page_slice_past_the_end_is_empty() {
        let range = page_slice(5, 4, 10);
        assert!(range.is_empty());
    }

    #[test]
    fn test_page_window_small_totals_show_all() {
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(5, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_page_window_clamps_at_the_start() {
        assert_eq!(page_window(1, 9), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(3, 9), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_page_window_clamps_at_the_end() {
        assert_eq!(page_window(9, 9), vec![5, 6, 7, 8, 9]);
        assert_eq!(page_window(8, 9), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_page_window_centers_in_the_middle() {
        assert_eq!(page_window(5, 9), vec![3, 4, 5, 6, 7]);
    }
}
