//! Table View State
//!
//! The gpui-free interactive state behind `DataTable`: the active sort, the
//! current page, and the selection model. Kept separate from the entity so
//! the transition rules can be exercised without a window.
//!
//! All of this state lives and dies with the table entity; nothing survives
//! a remount. Data changes re-derive the visible view but never reset the
//! sort or the page.

use std::ops::Range;

use gpui::SharedString;

use super::pagination::{page_slice, total_pages};
use super::selection::SelectionModel;
use super::sort::{SortDirection, SortState};
use crate::constants::DEFAULT_PAGE_SIZE;

/// Sort, page and selection state for one table instance
pub struct TableViewState {
    sort: SortState,
    /// Current page, 1-based
    page: usize,
    page_size: usize,
    pub selection: SelectionModel,
}

impl TableViewState {
    pub fn new() -> Self {
        Self {
            sort: SortState::unsorted(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            selection: SelectionModel::new(),
        }
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Set the sort directly (the caller's default sort)
    pub fn set_sort(&mut self, column: impl Into<SharedString>, direction: SortDirection) {
        self.sort = SortState::by(column, direction);
    }

    /// Header-click transition. The current page is deliberately left alone:
    /// re-sorting changes what each page shows, not which page the user is
    /// on.
    pub fn cycle_sort(&mut self, column_id: &SharedString) -> &SortState {
        self.sort = self.sort.cycled(column_id);
        &self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Changing the page size always returns to the first page so the user
    /// is never stranded past the new last page. Re-applying the current
    /// size is not a change and keeps the page.
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        if page_size == self.page_size {
            return;
        }
        self.page_size = page_size;
        self.page = 1;
    }

    pub fn total_pages(&self, total_rows: usize) -> usize {
        total_pages(total_rows, self.page_size)
    }

    /// The index range of the visible page within the sorted order. A page
    /// beyond the data yields an empty range; the page number itself is not
    /// auto-corrected (see `page_slice`).
    pub fn visible_range(&self, total_rows: usize) -> Range<usize> {
        page_slice(total_rows, self.page, self.page_size)
    }
}

impl Default for TableViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::column::Column;
    use crate::components::composite::data_table::selection::{HeaderCheckState, RowKey};
    use crate::components::composite::data_table::sort::{sort_order, CellValue};

    #[test]
    fn test_page_size_change_resets_page() {
        let mut view = TableViewState::new();
        view.set_page(3);
        assert_eq!(view.total_pages(23), 3);
        assert_eq!(view.visible_range(23), 20..23);

        view.set_page_size(25);
        assert_eq!(view.page(), 1);
        assert_eq!(view.total_pages(23), 1);
        assert_eq!(view.visible_range(23), 0..23);
    }

    #[test]
    fn test_shrunken_data_leaves_page_number_alone() {
        let mut view = TableViewState::new();
        view.set_page(3);

        // Data shrinks under the current page: the slice clamps to empty but
        // the page number stays, so regrowth shows page 3 again.
        assert!(view.visible_range(5).is_empty());
        assert_eq!(view.page(), 3);
        assert_eq!(view.visible_range(23), 20..23);
    }

    struct ScoreRow {
        id: i64,
        score: Option<i64>,
    }

    fn score_rows() -> Vec<ScoreRow> {
        [
            Some(5),
            Some(3),
            None,
            Some(5),
            Some(1),
            Some(9),
            Some(2),
            Some(7),
            Some(4),
            Some(6),
            Some(8),
            None,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, score)| ScoreRow {
            id: i as i64,
            score,
        })
        .collect()
    }

    fn score_columns() -> Vec<Column<ScoreRow>> {
        vec![Column::new("score", "Score", |row: &ScoreRow| {
            CellValue::from(row.score)
        })]
    }

    /// Three header clicks on one column walk ascending, descending, and
    /// back to the original order, with stable ties and nulls at the ends,
    /// while the current page number is preserved throughout.
    #[test]
    fn test_sort_cycle_over_scored_rows() {
        let rows = score_rows();
        let columns = score_columns();
        let column_id = SharedString::from("score");

        let mut view = TableViewState::new();
        view.set_page_size(5);
        view.set_page(2);

        // First click: ascending, nulls last, the two 5s in original order.
        view.cycle_sort(&column_id);
        let order = sort_order(&rows, &columns, view.sort());
        let scores: Vec<Option<i64>> = order.iter().map(|&i| rows[i].score).collect();
        assert_eq!(
            scores,
            vec![
                Some(1),
                Some(2),
                Some(3),
                Some(4),
                Some(5),
                Some(5),
                Some(6),
                Some(7),
                Some(8),
                Some(9),
                None,
                None
            ]
        );
        let fives: Vec<i64> = order
            .iter()
            .filter(|&&i| rows[i].score == Some(5))
            .map(|&i| rows[i].id)
            .collect();
        assert_eq!(fives, vec![0, 3]);
        let nulls: Vec<i64> = order
            .iter()
            .filter(|&&i| rows[i].score.is_none())
            .map(|&i| rows[i].id)
            .collect();
        assert_eq!(nulls, vec![2, 11]);

        // Page 1 would show the first five of that order; the user's page
        // is untouched by the sort change.
        assert_eq!(view.page(), 2);
        assert_eq!(view.visible_range(rows.len()), 5..10);

        // Second click: descending, nulls first.
        view.cycle_sort(&column_id);
        let order = sort_order(&rows, &columns, view.sort());
        let scores: Vec<Option<i64>> = order.iter().map(|&i| rows[i].score).collect();
        assert_eq!(
            scores,
            vec![
                None,
                None,
                Some(9),
                Some(8),
                Some(7),
                Some(6),
                Some(5),
                Some(5),
                Some(4),
                Some(3),
                Some(2),
                Some(1)
            ]
        );

        // Third click: back to the original array order.
        view.cycle_sort(&column_id);
        assert!(view.sort().is_unsorted());
        let order = sort_order(&rows, &columns, view.sort());
        assert_eq!(order, (0..rows.len()).collect::<Vec<_>>());
        assert_eq!(view.page(), 2);
    }

    /// Select-all operates on the visible page only, and the header state on
    /// another page stays unchecked until one of its rows is selected.
    #[test]
    fn test_select_all_is_scoped_to_the_visible_page() {
        let total = 23usize;
        let all_keys: Vec<RowKey> = (0..total as i64).map(RowKey::Int).collect();

        let mut view = TableViewState::new();
        assert_eq!(view.total_pages(total), 3);

        let page_one: Vec<RowKey> = all_keys[view.visible_range(total)].to_vec();
        let next = view.selection.toggled_all(&page_one);
        assert_eq!(next.len(), 10);
        view.selection.commit(next);

        view.set_page(2);
        let page_two: Vec<RowKey> = all_keys[view.visible_range(total)].to_vec();
        assert_eq!(
            view.selection.header_state(&page_two),
            HeaderCheckState::Unchecked
        );

        // One page-2 row makes its header indeterminate, page 1 stays full.
        let next = view.selection.toggled(&page_two[0]);
        view.selection.commit(next);
        assert_eq!(
            view.selection.header_state(&page_two),
            HeaderCheckState::Indeterminate
        );
        assert_eq!(
            view.selection.header_state(&page_one),
            HeaderCheckState::Checked
        );
    }
}
