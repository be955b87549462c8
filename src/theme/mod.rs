//! Theme - Colors and Visual Constants

pub mod colors;
