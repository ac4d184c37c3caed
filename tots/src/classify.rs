//! Field classification.
//!
//! Decides which rendering branch applies to a field. Branches are checked in
//! a fixed priority order: explicit override, structure, map, array, scalar,
//! then the open type.

use crate::descriptor::{FieldDescriptor, Kind, StructRef, TypeDescriptor};
use crate::error::{ConvertError, ConvertResult};
use crate::options::TypeOptions;

/// A type reference nested inside a map or array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A mapped scalar, holding its TypeScript name.
    Scalar(&'static str),
    /// A structure, rendered by interface name.
    Struct(StructRef),
    /// An element repeated with `[]` per depth level.
    Array(Box<TypeRef>, usize),
    /// A string-indexed map of the value type.
    Map(Box<TypeRef>),
    /// The open type.
    Any,
}

impl TypeRef {
    /// Structures referenced by this type, in rendering order.
    pub fn structs(&self) -> Vec<StructRef> {
        match self {
            TypeRef::Struct(s) => vec![*s],
            TypeRef::Array(element, _) => element.structs(),
            TypeRef::Map(value) => value.structs(),
            TypeRef::Scalar(_) | TypeRef::Any => Vec::new(),
        }
    }
}

/// The rendering branch of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldClass {
    /// An explicit TypeScript type, used verbatim.
    Override(String),
    /// A nested structure.
    Struct(StructRef),
    /// A map; `key` is set when the key is a structure that must be emitted.
    Map {
        key: Option<StructRef>,
        value: TypeRef,
    },
    /// An array with all nested array levels collapsed into `depth`.
    Array { element: TypeRef, depth: usize },
    /// A mapped scalar.
    Scalar(&'static str),
    /// The open type, rendered as a generic placeholder.
    Dynamic,
}

impl FieldClass {
    /// Short branch name, used in debug traces.
    pub fn label(&self) -> &'static str {
        match self {
            FieldClass::Override(_) => "override",
            FieldClass::Struct(_) => "struct",
            FieldClass::Map { .. } => "map",
            FieldClass::Array { .. } => "array",
            FieldClass::Scalar(_) => "scalar",
            FieldClass::Dynamic => "dynamic",
        }
    }

    /// Structures that must be emitted before the owning interface, in
    /// emission order.
    pub fn dependencies(&self) -> Vec<StructRef> {
        match self {
            FieldClass::Struct(s) => vec![*s],
            FieldClass::Map { key, value } => key.iter().copied().chain(value.structs()).collect(),
            FieldClass::Array { element, .. } => element.structs(),
            FieldClass::Override(_) | FieldClass::Scalar(_) | FieldClass::Dynamic => Vec::new(),
        }
    }
}

/// Classify a field of `owner`, after unwrapping one pointer level.
///
/// # Errors
///
/// Returns [`ConvertError::UnresolvedType`] when the field (or its array
/// element or map value) has no TypeScript mapping and no override.
pub fn classify(
    owner: &StructRef,
    field: &FieldDescriptor,
    opts: &TypeOptions,
) -> ConvertResult<FieldClass> {
    if let Some(ts_type) = opts.ts_type() {
        return Ok(FieldClass::Override(ts_type.to_string()));
    }

    let unresolved = |kind: Kind| ConvertError::unresolved(owner.name(), field.name(), kind);

    let class = match field.ty().deref_pointer().underlying() {
        TypeDescriptor::Struct(s) => FieldClass::Struct(*s),
        TypeDescriptor::Map { key, value } => FieldClass::Map {
            key: key.deref_pointer().as_struct().copied(),
            value: resolve(value).map_err(unresolved)?,
        },
        ty @ TypeDescriptor::Array(_) => {
            let (element, depth) = collapse_array(ty).map_err(unresolved)?;
            FieldClass::Array { element, depth }
        }
        TypeDescriptor::Dynamic => FieldClass::Dynamic,
        other => {
            let kind = other.kind();
            FieldClass::Scalar(kind.ts_name().ok_or_else(|| unresolved(kind))?)
        }
    };
    Ok(class)
}

/// Collapse consecutive array levels, unwrapping one pointer level at each.
fn collapse_array(ty: &TypeDescriptor) -> Result<(TypeRef, usize), Kind> {
    let mut depth = 0;
    let mut current = ty;
    while let TypeDescriptor::Array(element) = current.deref_pointer().underlying() {
        depth += 1;
        current = element;
    }
    Ok((resolve(current)?, depth))
}

fn resolve(ty: &TypeDescriptor) -> Result<TypeRef, Kind> {
    match ty.deref_pointer().underlying() {
        TypeDescriptor::Struct(s) => Ok(TypeRef::Struct(*s)),
        array @ TypeDescriptor::Array(_) => {
            let (element, depth) = collapse_array(array)?;
            Ok(TypeRef::Array(Box::new(element), depth))
        }
        TypeDescriptor::Map { value, .. } => Ok(TypeRef::Map(Box::new(resolve(value)?))),
        TypeDescriptor::Dynamic => Ok(TypeRef::Any),
        other => {
            let kind = other.kind();
            kind.ts_name().map(TypeRef::Scalar).ok_or(kind)
        }
    }
}
