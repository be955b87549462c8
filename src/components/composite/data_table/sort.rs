//! Sorting
//!
//! The comparator engine and the sort-direction state machine.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use gpui::SharedString;
use unicase::UniCase;

use super::column::Column;
use crate::utils::format::{format_datetime, format_float};

/// A scalar cell value produced by a column accessor.
///
/// Drives both the comparator and the default cell rendering. `Null` models
/// an absent value and always sorts toward the end of an ascending read.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(f64),
    DateTime(DateTime<Utc>),
    Text(SharedString),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Rank used when two cells of different types meet under one column.
    fn type_rank(&self) -> u8 {
        match self {
            CellValue::Null => 0,
            CellValue::Bool(_) => 1,
            CellValue::Number(_) => 2,
            CellValue::DateTime(_) => 3,
            CellValue::Text(_) => 4,
        }
    }

    /// Display form used by the default cell renderer.
    pub fn display(&self) -> SharedString {
        match self {
            CellValue::Null => SharedString::default(),
            CellValue::Bool(value) => SharedString::from(if *value { "true" } else { "false" }),
            CellValue::Number(value) => format_float(*value).into(),
            CellValue::DateTime(value) => format_datetime(value).into(),
            CellValue::Text(value) => value.clone(),
        }
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        CellValue::DateTime(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(SharedString::from(value.to_string()))
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value.into())
    }
}

impl From<SharedString> for CellValue {
    fn from(value: SharedString) -> Self {
        CellValue::Text(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => CellValue::Null,
        }
    }
}

/// Sort direction for the active column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The active sort, if any. `None` keeps the data in its original order, so
/// a direction can never exist without a column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortState {
    active: Option<(SharedString, SortDirection)>,
}

impl SortState {
    /// No active sort
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Sort by the given column
    pub fn by(column: impl Into<SharedString>, direction: SortDirection) -> Self {
        Self {
            active: Some((column.into(), direction)),
        }
    }

    pub fn is_unsorted(&self) -> bool {
        self.active.is_none()
    }

    pub fn active(&self) -> Option<(&SharedString, SortDirection)> {
        self.active
            .as_ref()
            .map(|(column, direction)| (column, *direction))
    }

    pub fn column(&self) -> Option<&SharedString> {
        self.active.as_ref().map(|(column, _)| column)
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.active.as_ref().map(|(_, direction)| *direction)
    }

    /// The direction shown on the given column's header, if it is active
    pub fn direction_for(&self, column_id: &str) -> Option<SortDirection> {
        match &self.active {
            Some((column, direction)) if column.as_ref() == column_id => Some(*direction),
            _ => None,
        }
    }

    /// Header-click transition: a fresh column starts ascending, a second
    /// click flips to descending, a third returns to the unsorted state.
    pub fn cycled(&self, column_id: &SharedString) -> SortState {
        match &self.active {
            Some((column, SortDirection::Ascending)) if column == column_id => {
                SortState::by(column_id.clone(), SortDirection::Descending)
            }
            Some((column, SortDirection::Descending)) if column == column_id => {
                SortState::unsorted()
            }
            _ => SortState::by(column_id.clone(), SortDirection::Ascending),
        }
    }
}

/// Direction-adjusted comparison of two cell values.
///
/// Nulls are special-cased before the direction adjustment: a null sorts
/// last under `Ascending` and first under `Descending`, i.e. always toward
/// the end of a naturally-ascending read.
pub fn compare_cells(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => return Ordering::Equal,
        (true, false) => {
            return match direction {
                SortDirection::Ascending => Ordering::Greater,
                SortDirection::Descending => Ordering::Less,
            };
        }
        (false, true) => {
            return match direction {
                SortDirection::Ascending => Ordering::Less,
                SortDirection::Descending => Ordering::Greater,
            };
        }
        (false, false) => {}
    }

    let ordering = natural_order(a, b);
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Ascending comparison of two non-null cells. Text compares caselessly with
/// an exact tie-break; mixed types fall back to a fixed type rank.
fn natural_order(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Bool(x), CellValue::Bool(y)) => x.cmp(y),
        (CellValue::Number(x), CellValue::Number(y)) => x.total_cmp(y),
        (CellValue::DateTime(x), CellValue::DateTime(y)) => x.cmp(y),
        (CellValue::Text(x), CellValue::Text(y)) => UniCase::new(x.as_ref())
            .cmp(&UniCase::new(y.as_ref()))
            .then_with(|| x.as_ref().cmp(y.as_ref())),
        _ => a.type_rank().cmp(&b.type_rank()),
    }
}

/// Stable sorted index order for `rows` under the given sort state.
///
/// Ties keep their original relative order. Identity order is returned when
/// nothing is sorted or the sort references a column id that is no longer in
/// the column set (a stale sort after the caller removed a column).
pub fn sort_order<R: 'static>(rows: &[R], columns: &[Column<R>], sort: &SortState) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();

    let Some((column_id, direction)) = sort.active() else {
        return order;
    };
    let Some(column) = columns.iter().find(|column| &column.id == column_id) else {
        return order;
    };

    let values: Vec<CellValue> = rows.iter().map(|row| column.value_of(row)).collect();
    order.sort_by(|&a, &b| compare_cells(&values[a], &values[b], direction));
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column() -> Column<Option<i64>> {
        Column::new("v", "V", |row: &Option<i64>| CellValue::from(*row))
    }

    #[test]
    fn test_null_ordering_ascending() {
        let rows = vec![None, Some(1), Some(2)];
        let order = sort_order(
            &rows,
            &[column()],
            &SortState::by("v", SortDirection::Ascending),
        );
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_null_ordering_descending() {
        let rows = vec![None, Some(1), Some(2)];
        let order = sort_order(
            &rows,
            &[column()],
            &SortState::by("v", SortDirection::Descending),
        );
        assert_eq!(order, vec![0, 2, 1]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let rows = vec![Some(5), Some(3), Some(5), Some(3), Some(5)];
        let order = sort_order(
            &rows,
            &[column()],
            &SortState::by("v", SortDirection::Ascending),
        );
        // Ties keep original relative order.
        assert_eq!(order, vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn test_stale_column_keeps_original_order() {
        let rows = vec![Some(3), Some(1), Some(2)];
        let order = sort_order(
            &rows,
            &[column()],
            &SortState::by("removed", SortDirection::Ascending),
        );
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_unsorted_keeps_original_order() {
        let rows = vec![Some(3), Some(1), Some(2)];
        let order = sort_order(&rows, &[column()], &SortState::unsorted());
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_direction_cycling() {
        let column_id = SharedString::from("score");
        let other = SharedString::from("title");

        let first = SortState::unsorted().cycled(&column_id);
        assert_eq!(first.direction_for("score"), Some(SortDirection::Ascending));

        let second = first.cycled(&column_id);
        assert_eq!(
            second.direction_for("score"),
            Some(SortDirection::Descending)
        );

        let third = second.cycled(&column_id);
        assert!(third.is_unsorted());

        // Clicking another column while one is active always starts ascending.
        let switched = second.cycled(&other);
        assert_eq!(switched.direction_for("title"), Some(SortDirection::Ascending));
        assert_eq!(switched.direction_for("score"), None);
    }

    #[test]
    fn test_text_compares_caselessly() {
        let a = CellValue::from("apple");
        let b = CellValue::from("Banana");
        assert_eq!(
            compare_cells(&a, &b, SortDirection::Ascending),
            Ordering::Less
        );
        assert_eq!(
            compare_cells(&a, &b, SortDirection::Descending),
            Ordering::Greater
        );
    }

    #[test]
    fn test_both_null_compare_equal() {
        assert_eq!(
            compare_cells(&CellValue::Null, &CellValue::Null, SortDirection::Ascending),
            Ordering::Equal
        );
    }
}
