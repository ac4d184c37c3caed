//! # tots-macros
//!
//! Procedural macro deriving the `tots::Reflect` trait, which describes a
//! Rust struct to the TypeScript interface converter.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tots::Reflect;
//!
//! #[derive(Reflect)]
//! #[serde(rename_all = "camelCase")]
//! struct PageParameter {
//!     page: u32,
//!
//!     /// search keyword
//!     keyword: String,
//!
//!     #[ts(optional)]
//!     page_size: Option<u32>,
//! }
//! ```
//!
//! ## Attributes
//!
//! ### Container Attributes
//!
//! - `#[ts(rename = "Name")]` - Rename the emitted interface
//! - `#[ts(rename_all = "camelCase")]` - Rename all fields (camelCase, snake_case, PascalCase, etc.)
//!
//! ### Field Attributes
//!
//! - `#[ts(rename = "name")]` - Rename this field
//! - `#[ts(skip)]` - Leave this field out
//! - `#[ts(optional)]` - Render as `name?`
//! - `#[ts(flatten)]` - Hoist the fields of a nested struct
//! - `#[ts(type = "Date")]` - Use a TypeScript type verbatim
//! - `#[ts(doc = "...")]` - Field documentation, replacing doc comments
//!
//! With the `serde-compat` feature (default), `rename`, `rename_all`,
//! `skip`, `skip_serializing`, `skip_serializing_if` and `flatten` from
//! `#[serde(...)]` are honoured as well.

use proc_macro::TokenStream;
use syn::DeriveInput;

mod codegen;
mod error;
mod ir;
mod parser;

use codegen::ImplBlockGenerator;
use parser::struct_parser::StructParser;

/// Derive macro describing a struct to the converter.
///
/// Supports structs with named fields, single-field tuple structs (described
/// as their inner type) and unit structs. Enums, unions and tuple structs
/// with several fields are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use tots::Reflect;
///
/// #[derive(Reflect)]
/// struct User {
///     name: String,
///     age: u32,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(ts, serde))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match derive_reflect_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn derive_reflect_impl(input: &DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    let ir = StructParser::parse(input).map_err(|e| e.into_syn_error(input))?;
    Ok(ImplBlockGenerator::generate(&ir))
}
