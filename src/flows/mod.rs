//! Flows module - End-to-end operations
//!
//! Provides:
//! - generate: Wrap every script and render it into the SVG template

pub mod generate;
