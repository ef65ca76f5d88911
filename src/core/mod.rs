//! Core data types for band rows and the color table.

pub mod band;
pub mod color;
