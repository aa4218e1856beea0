//! Core module - Wrapping, templates and shared types
//!
//! This module provides:
//! - The line wrapper (character and word policies)
//! - Template loading and marker substitution
//! - Path helpers for input/output naming
//! - Typed configuration errors

pub mod error;
pub mod paths;
pub mod template;
pub mod wrap;
