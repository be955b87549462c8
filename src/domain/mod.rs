//! Domain Types for the Demo Application

pub mod entry;
