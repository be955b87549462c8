//! UI Constants
//!
//! Centralized UI constants for consistent layout across the crate.

/// Table header row height in pixels
pub const HEADER_ROW_HEIGHT: f32 = 40.0;
pub const HEADER_ROW_HEIGHT_COMPACT: f32 = 32.0;

/// Table data row height in pixels
pub const DATA_ROW_HEIGHT: f32 = 36.0;
pub const DATA_ROW_HEIGHT_COMPACT: f32 = 28.0;

/// Width of the selection checkbox column
pub const CHECKBOX_COLUMN_WIDTH: f32 = 36.0;

/// Pagination defaults
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Maximum number of page buttons shown in the pagination footer
pub const PAGE_WINDOW: usize = 5;

/// Default window dimensions for the demo app
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;
