//! DataTable Component
//!
//! A sortable, paginated, multi-selectable data table. Decomposed bottom-up:
//! the comparator engine and sort-direction machine (`sort`), the pagination
//! calculator and footer (`pagination`), the selection tracker (`selection`),
//! the pure interactive view state composing those three (`state`), column
//! definitions (`column`), and the GPUI orchestrator (`data_table`).

pub mod column;
pub mod data_table;
pub mod pagination;
pub mod selection;
pub mod sort;
pub mod state;

pub use column::{CellAlign, Column, ColumnWidth};
pub use data_table::DataTable;
pub use pagination::Pagination;
pub use selection::{HeaderCheckState, RowKey, SelectionModel};
pub use sort::{CellValue, SortDirection, SortState};
pub use state::TableViewState;
