//! Parser module for extracting type information from Rust AST.
//!
//! This module contains parsers for:
//! - Struct definitions
//! - Named fields
//! - Attributes

pub mod attributes;
pub mod field_parser;
pub mod struct_parser;

#[cfg(feature = "serde-compat")]
pub mod serde_compat;
