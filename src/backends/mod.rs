//! Backends module - File system operations
//!
//! Provides:
//! - scan: Input discovery with the ignore walker

pub mod scan;
