//! Journal Page
//!
//! Displays the sample journal entries in a data table and wires every
//! table capability: sorting, pagination, selection, loading state, row
//! clicks, and caller-side persistence of the preferred page size.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Window,
};
use serde::{Deserialize, Serialize};

use crate::components::composite::data_table::column::{CellAlign, Column};
use crate::components::composite::data_table::data_table::DataTable;
use crate::components::composite::data_table::selection::RowKey;
use crate::components::composite::data_table::sort::{CellValue, SortDirection};
use crate::components::primitives::button::{Button, ButtonSize};
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::domain::entry::{sample_entries, JournalEntry};
use crate::i18n::{t, Locale};
use crate::theme::colors::GridColors;
use crate::utils::config_store;
use crate::utils::format::{format_date, format_number};

const VIEW_CONFIG_FILE: &str = "journal_view.json";

/// Persisted view preferences. Persistence lives with the caller, not the
/// table component.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ViewConfig {
    page_size: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Journal demo page component
pub struct JournalPage {
    locale: Locale,
    table: Entity<DataTable<JournalEntry>>,
    entry_count: usize,
    selected_count: usize,
    loading: bool,
}

impl JournalPage {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let config = config_store::load_config::<ViewConfig>(VIEW_CONFIG_FILE)
            .unwrap_or_else(|error| {
                tracing::warn!("failed to load view config: {error}");
                ViewConfig::default()
            });
        let locale = Locale::default();
        let entries = sample_entries();
        let entry_count = entries.len();

        let page_entity = cx.entity().clone();
        let table = cx.new(|cx| {
            let mut table =
                DataTable::new(|entry: &JournalEntry| RowKey::Int(entry.id), cx);
            table.set_columns(Self::create_columns(locale));
            table.set_rows(entries);
            table.set_selectable(true);
            table.set_page_size(config.page_size);
            table.set_items_label(t(locale, "table-items"));
            table.set_empty_message(t(locale, "table-empty"));
            table.set_default_sort("written", SortDirection::Descending);

            table.on_sort(|sort, _window, _cx| {
                tracing::debug!(
                    column = ?sort.column(),
                    direction = ?sort.direction(),
                    "sort changed"
                );
            });
            table.on_selection_change(move |selected, _window, cx| {
                let count = selected.len();
                page_entity.update(cx, |page, cx| {
                    page.selected_count = count;
                    cx.notify();
                });
            });
            table.on_row_click(|entry: &JournalEntry, _window, _cx| {
                tracing::info!(id = entry.id, title = %entry.title, "entry opened");
            });

            table
        });

        Self {
            locale,
            table,
            entry_count,
            selected_count: 0,
            loading: false,
        }
    }

    fn create_columns(locale: Locale) -> Vec<Column<JournalEntry>> {
        vec![
            Column::new("written", t(locale, "col-written"), |row: &JournalEntry| {
                CellValue::from(row.written_at)
            })
            .render_with(|row: &JournalEntry| {
                div()
                    .text_sm()
                    .text_color(GridColors::text_secondary())
                    .child(format_date(&row.written_at))
                    .into_any_element()
            })
            .fixed_width(120.0),
            Column::new("title", t(locale, "col-title"), |row: &JournalEntry| {
                CellValue::from(row.title.clone())
            })
            .fixed_width(280.0),
            Column::new("mood", t(locale, "col-mood"), |row: &JournalEntry| {
                CellValue::from(row.mood)
            })
            .render_with(|row: &JournalEntry| {
                match row.mood {
                    Some(mood) => {
                        let color = if mood >= 7 {
                            GridColors::success()
                        } else if mood <= 3 {
                            GridColors::danger()
                        } else {
                            GridColors::text_primary()
                        };
                        div()
                            .text_sm()
                            .text_color(color)
                            .child(format!("{mood}"))
                            .into_any_element()
                    }
                    None => div()
                        .text_sm()
                        .text_color(GridColors::text_muted())
                        .child("—")
                        .into_any_element(),
                }
            })
            .fixed_width(90.0)
            .align(CellAlign::Right),
            Column::new("words", t(locale, "col-words"), |row: &JournalEntry| {
                CellValue::from(row.words)
            })
            .render_with(|row: &JournalEntry| {
                div()
                    .text_sm()
                    .child(format_number(i64::from(row.words)))
                    .into_any_element()
            })
            .fixed_width(90.0)
            .align(CellAlign::Right),
            Column::new("tags", t(locale, "col-tags"), |row: &JournalEntry| {
                CellValue::from(row.tags_line())
            })
            .with_sortable(false)
            .fixed_width(200.0),
        ]
    }

    /// Re-apply locale-dependent table chrome. Column ids are stable across
    /// locales, so an active sort survives the swap.
    fn apply_locale(&mut self, cx: &mut Context<Self>) {
        let locale = self.locale;
        self.table.update(cx, |table, cx| {
            table.set_columns(Self::create_columns(locale));
            table.set_items_label(t(locale, "table-items"));
            table.set_empty_message(t(locale, "table-empty"));
            cx.notify();
        });
    }

    fn remember_view(&self, cx: &mut Context<Self>) {
        let config = ViewConfig {
            page_size: self.table.read(cx).page_size(),
        };
        match config_store::save_config(VIEW_CONFIG_FILE, &config) {
            Ok(()) => tracing::info!(page_size = config.page_size, "view config saved"),
            Err(error) => tracing::warn!("failed to save view config: {error}"),
        }
    }
}

impl Render for JournalPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.locale;

        // Title bar
        let title_bar = div()
            .w_full()
            .h(px(48.0))
            .px_4()
            .flex()
            .items_center()
            .justify_between()
            .bg(GridColors::header_bg())
            .child(
                div()
                    .text_color(GridColors::text_light())
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(t(locale, "app-title")),
            )
            .child(
                Button::ghost("locale-toggle", locale.toggled().display_name())
                    .size(ButtonSize::Small)
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.locale = this.locale.toggled();
                        this.apply_locale(cx);
                        cx.notify();
                    })),
            );

        // Page heading with the selection summary and demo controls
        let heading = div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(GridColors::text_primary())
                            .child(t(locale, "journal-heading")),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(GridColors::text_secondary())
                            .child(format!(
                                "{} {} · {} {}",
                                self.entry_count,
                                t(locale, "table-items"),
                                self.selected_count,
                                t(locale, "selected-count")
                            )),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        Button::secondary("toggle-loading", t(locale, "action-toggle-loading"))
                            .size(ButtonSize::Small)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.loading = !this.loading;
                                let loading = this.loading;
                                this.table.update(cx, |table, cx| {
                                    table.set_loading(loading);
                                    cx.notify();
                                });
                            })),
                    )
                    .child(
                        Button::secondary("remember-view", t(locale, "action-remember-view"))
                            .size(ButtonSize::Small)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.remember_view(cx);
                            })),
                    ),
            );

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(GridColors::background())
            .child(title_bar)
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .p_4()
                    .gap_4()
                    .child(heading)
                    .child(div().flex_1().child(self.table.clone())),
            )
    }
}
