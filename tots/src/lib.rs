//! # tots
//!
//! Generate TypeScript `interface` declarations from Rust structures, so a
//! TypeScript client can mirror the data shapes a Rust server sends.
//!
//! ## Overview
//!
//! Types describe themselves through the [`Reflect`] trait, usually derived
//! with `#[derive(Reflect)]`. A [`Converter`] walks the described type graph
//! once per requested type and emits one interface per structure it reaches,
//! dependencies first. Every structure is emitted at most once per
//! conversion, so recursive and mutually-recursive types terminate.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use serde::Serialize;
//! use tots::{Converter, Reflect};
//!
//! #[derive(Serialize, Reflect)]
//! #[serde(rename_all = "camelCase")]
//! struct PageParameter {
//!     page: i32,
//!     /// search keyword
//!     keyword: String,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     page_size: Option<u32>,
//! }
//!
//! let ts = Converter::new().add::<PageParameter>().convert()?;
//! // /* Do not change, this code is generated from Rust structs */
//! //
//! // export interface PageParameter {
//! //     page: number;
//! //     /**
//! //      *
//! //      * search keyword
//! //      */
//! //     keyword: string;
//! //     pageSize?: number;
//! // }
//! ```
//!
//! ## Features
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `derive` | `#[derive(Reflect)]` macro | ✅ |
//! | `chrono` | Support for `chrono` date and time types | ❌ |
//! | `uuid` | Support for `uuid::Uuid` | ❌ |
//!
//! ## Field Attributes
//!
//! | Attribute | Effect |
//! |-----------|--------|
//! | `#[ts(rename = "name")]` / `#[serde(rename = "name")]` | Rename the field |
//! | `#[ts(skip)]` / `#[serde(skip)]` | Leave the field out |
//! | `#[ts(optional)]` / `#[serde(skip_serializing_if = "...")]` | Render as `name?` |
//! | `#[ts(type = "Date")]` | Use a TypeScript type verbatim; the field type needs no `Reflect` impl |
//! | `#[ts(doc = "...")]` / `///` comments | Documentation block above the field |
//! | `#[ts(flatten)]` / `#[serde(flatten)]` | Hoist the fields of a nested struct |
//!
//! ## Type Mappings
//!
//! | Rust Type | TypeScript |
//! |-----------|------------|
//! | `bool` | `boolean` |
//! | integers, floats | `number` |
//! | `String`, `&str` | `string` |
//! | `Option<T>` | `T` |
//! | `Vec<T>`, `[T; N]`, sets | `T[]` |
//! | `HashMap<K, V>`, `BTreeMap<K, V>` | `{[key: string]: V}` |
//! | `serde_json::Value` | generic parameter `A = any`, `B = any`, ... |
//! | structs | the struct's interface |
//!
//! `char` and `()` have no mapping; fields of those types need a
//! `ts_type` override or the conversion fails.
//!
//! ## Overrides
//!
//! Field types and docs can be overridden per structure with [`StructSpec`]
//! or globally with [`Converter::manage`]:
//!
//! ```rust,ignore
//! use tots::{union_ts_type, Converter, StructSpec, TypeOptions};
//!
//! let ts = Converter::new()
//!     .add_struct(
//!         StructSpec::of::<Order>()
//!             .with_field_opts::<Status>(TypeOptions::new().with_ts_type(union_ts_type(&["open", "closed"])?)),
//!     )
//!     .manage::<Timestamp>(TypeOptions::new().with_ts_type("string"))
//!     .convert()?;
//! ```
//!
//! A global override wins over a structure-specific one, which wins over
//! the field's own attributes.

pub mod builder;
pub mod classify;
pub mod config;
pub mod convert;
pub mod descriptor;
pub mod error;
pub mod options;
pub mod reflect;
pub mod registry;
pub mod union;

pub use config::{ConfigError, ConverterConfig};
pub use convert::{Converter, BANNER};
pub use descriptor::{FieldDescriptor, FieldTags, Kind, StructRef, TypeDescriptor, TypeKey};
pub use error::{ConvertError, ConvertResult};
pub use options::{StructSpec, TypeOptions};
pub use reflect::Reflect;
pub use union::union_ts_type;

// Re-export derive macro when available
#[cfg(feature = "derive")]
pub use tots_macros::Reflect;
