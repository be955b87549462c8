//! Application Layer
//!
//! App initialization and window management for the demo.

pub mod application;
