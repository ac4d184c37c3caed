//! Field naming and override options.
//!
//! Three layers of [`TypeOptions`] can apply to one field, from lowest to
//! highest precedence:
//!
//! 1. the field's own `ts_type` / `ts_doc` tags,
//! 2. structure-specific overrides registered on a [`StructSpec`] for the
//!    field's type,
//! 3. global overrides registered on the converter for the field's type.
//!
//! A later layer only replaces a value when its own value is non-empty.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::descriptor::{
    FieldDescriptor, FieldTags, TypeDescriptor, TypeKey, JSON_TAG, TS_DOC_TAG, TS_TYPE_TAG,
};
use crate::reflect::Reflect;

/// Marker in the serialized-name tag that makes a field optional.
const OMIT_EMPTY: &str = "omitempty";

/// Override bundle for a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeOptions {
    /// Explicit TypeScript type, used verbatim.
    pub ts_type: Option<String>,

    /// Documentation rendered above the field.
    pub ts_doc: Option<String>,
}

impl TypeOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit TypeScript type.
    pub fn with_ts_type(mut self, ts_type: impl Into<String>) -> Self {
        self.ts_type = Some(ts_type.into());
        self
    }

    /// Set the documentation string.
    pub fn with_ts_doc(mut self, doc: impl Into<String>) -> Self {
        self.ts_doc = Some(doc.into());
        self
    }

    /// Options declared by a field's tags.
    pub fn from_tags(tags: &FieldTags) -> Self {
        Self {
            ts_type: tags.get(TS_TYPE_TAG).map(str::to_string),
            ts_doc: tags.get(TS_DOC_TAG).map(str::to_string),
        }
    }

    /// The explicit type, if set and non-empty.
    pub fn ts_type(&self) -> Option<&str> {
        self.ts_type.as_deref().filter(|s| !s.is_empty())
    }

    /// The documentation, if set and non-empty.
    pub fn ts_doc(&self) -> Option<&str> {
        self.ts_doc.as_deref().filter(|s| !s.is_empty())
    }

    /// Overlay `other` onto `self`; empty values in `other` are ignored.
    pub fn apply(&mut self, other: &TypeOptions) {
        if let Some(ts_type) = other.ts_type() {
            self.ts_type = Some(ts_type.to_string());
        }
        if let Some(doc) = other.ts_doc() {
            self.ts_doc = Some(doc.to_string());
        }
    }
}

/// Merge tag-declared options with override layers, applied in order.
pub fn merge_options<'a>(
    tags: &FieldTags,
    overrides: impl IntoIterator<Item = &'a TypeOptions>,
) -> TypeOptions {
    let mut opts = TypeOptions::from_tags(tags);
    for layer in overrides {
        opts.apply(layer);
    }
    opts
}

/// Compute the external (serialized) name of a field.
///
/// The first component of the `json` tag is the name; an `omitempty`
/// component appends the optional marker `?`. Untagged fields use their
/// declared name, but only when exported. Returns `None` for fields that
/// must be skipped: unexported untagged fields, and tagged fields whose name
/// is empty or `-`.
pub fn external_name(field: &FieldDescriptor) -> Option<String> {
    let Some(tag) = field.tag(JSON_TAG).filter(|tag| !tag.is_empty()) else {
        return Some(field.name())
            .filter(|name| field.is_exported() && !name.is_empty())
            .map(str::to_string);
    };

    let mut parts = tag.split(',');
    let name = parts.next().unwrap_or_default().trim();
    if name.is_empty() || name == "-" {
        return None;
    }
    let omit_empty = parts.any(|part| part.trim() == OMIT_EMPTY);

    Some(if omit_empty {
        format!("{name}?")
    } else {
        name.to_string()
    })
}

/// A requested structure type with its structure-specific field overrides.
#[derive(Debug, Clone)]
pub struct StructSpec {
    ty: TypeDescriptor,
    field_options: HashMap<TypeKey, TypeOptions>,
}

impl StructSpec {
    /// Create a spec for a described type.
    pub fn new(ty: TypeDescriptor) -> Self {
        Self {
            ty,
            field_options: HashMap::new(),
        }
    }

    /// Create a spec for a [`Reflect`] type.
    pub fn of<T: Reflect + ?Sized>() -> Self {
        Self::new(T::type_descriptor())
    }

    /// Override options for every field of type `F` in this structure.
    pub fn with_field_opts<F: Reflect + ?Sized>(self, opts: TypeOptions) -> Self {
        self.with_field_type_opts(&F::type_descriptor(), opts)
    }

    /// Override options for every field of the described type in this
    /// structure.
    pub fn with_field_type_opts(mut self, field_type: &TypeDescriptor, opts: TypeOptions) -> Self {
        self.field_options.insert(field_type.key(), opts);
        self
    }

    /// The requested type.
    pub fn ty(&self) -> &TypeDescriptor {
        &self.ty
    }

    /// The override registered for a field type, if any.
    pub fn field_options(&self, key: &TypeKey) -> Option<&TypeOptions> {
        self.field_options.get(key)
    }
}
