//! Rust code generation module.
//!
//! This module handles generating Rust impl blocks for the Reflect trait.

pub mod impl_block;

pub use impl_block::ImplBlockGenerator;
