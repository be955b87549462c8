//! GridView Library
//!
//! A sortable, paginated, multi-selectable data table component for GPUI,
//! along with a small demo application that exercises it against a sample
//! journal-entry dataset.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod i18n;
pub mod theme;
pub mod utils;
