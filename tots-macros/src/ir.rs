//! Intermediate representation of a type the derive macro describes.
//!
//! The parser produces a [`ReflectIR`] from the derive input; the code
//! generator turns it into the `Reflect` impl.

use syn::{Generics, Ident, Type};

/// A parsed type ready for code generation.
#[derive(Debug, Clone)]
pub struct ReflectIR {
    /// The Rust identifier of the type
    pub ident: Ident,

    /// Generic parameters as declared
    pub generics: Generics,

    /// Display name of the emitted interface
    pub name: String,

    /// The shape of the type
    pub shape: Shape,
}

/// Supported type shapes.
#[derive(Debug, Clone)]
pub enum Shape {
    /// A struct with named fields.
    Struct(Vec<FieldIR>),

    /// A single-field tuple struct, described as a named alias of its inner type.
    Newtype(Type),

    /// A unit struct, described as a structure without fields.
    Unit,
}

/// One named field.
#[derive(Debug, Clone)]
pub struct FieldIR {
    /// Field name as written, without the raw prefix
    pub rust_name: String,

    /// Declared type
    pub ty: Type,

    /// Serialized-name tag, e.g. `"pageSize,omitempty"` or `"-"`
    pub json_tag: Option<String>,

    /// Explicit TypeScript type
    pub ts_type: Option<String>,

    /// Documentation
    pub ts_doc: Option<String>,

    /// Whether the field is flattened into its owner
    pub flatten: bool,

    /// Whether the field is left out of the interface
    pub skip: bool,
}

impl FieldIR {
    /// Create a field without tags.
    pub fn new(rust_name: impl Into<String>, ty: Type) -> Self {
        Self {
            rust_name: rust_name.into(),
            ty,
            json_tag: None,
            ts_type: None,
            ts_doc: None,
            flatten: false,
            skip: false,
        }
    }

    /// Set the serialized-name tag.
    pub fn with_json_tag(mut self, tag: Option<String>) -> Self {
        self.json_tag = tag;
        self
    }

    /// Set the explicit TypeScript type.
    pub fn with_ts_type(mut self, ts_type: Option<String>) -> Self {
        self.ts_type = ts_type;
        self
    }

    /// Set the documentation.
    pub fn with_ts_doc(mut self, doc: Option<String>) -> Self {
        self.ts_doc = doc;
        self
    }

    /// Set the flatten flag.
    pub fn with_flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    /// Set the skip flag.
    pub fn with_skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }
}
