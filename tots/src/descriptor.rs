//! Type descriptors: the reflective type model the converter walks.
//!
//! Rust has no runtime reflection, so every type that takes part in a
//! conversion is described explicitly by a [`TypeDescriptor`]. Descriptors
//! are produced by the [`Reflect`](crate::Reflect) trait (usually derived) or
//! built by hand.
//!
//! ## Overview
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | `Scalar(Kind)` | A primitive: boolean, integer, float, string, char, unit |
//! | `Named { ident, inner }` | A named type over a non-struct type (newtypes, `Uuid`) |
//! | `Struct(StructRef)` | A structure with an ordered field list |
//! | `Pointer(inner)` | One level of indirection (`Option<T>`) |
//! | `Array(element)` | Any sequence (`Vec<T>`, `[T; N]`, sets) |
//! | `Map { key, value }` | Any map (`HashMap<K, V>`, `BTreeMap<K, V>`) |
//! | `Dynamic` | An open type (`serde_json::Value`) |
//!
//! Structure field lists are evaluated lazily through a function pointer, so
//! self-referential and mutually-referential graphs can be described without
//! infinite construction.

use std::collections::HashSet;
use std::fmt;

/// Tag key holding the serialized field name, e.g. `"size,omitempty"`.
pub const JSON_TAG: &str = "json";

/// Tag key holding an explicit TypeScript type.
pub const TS_TYPE_TAG: &str = "ts_type";

/// Tag key holding a documentation string.
pub const TS_DOC_TAG: &str = "ts_doc";

/// The kind of a described type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    String,
    Char,
    Unit,
    Struct,
    Pointer,
    Array,
    Map,
    Dynamic,
}

impl Kind {
    /// The fixed kind → TypeScript name table.
    ///
    /// Returns `None` for kinds without a scalar mapping.
    pub fn ts_name(self) -> Option<&'static str> {
        match self {
            Kind::Bool => Some("boolean"),
            Kind::I8
            | Kind::I16
            | Kind::I32
            | Kind::I64
            | Kind::I128
            | Kind::Isize
            | Kind::U8
            | Kind::U16
            | Kind::U32
            | Kind::U64
            | Kind::U128
            | Kind::Usize
            | Kind::F32
            | Kind::F64 => Some("number"),
            Kind::String => Some("string"),
            _ => None,
        }
    }

    /// The lowercase name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::I128 => "i128",
            Kind::Isize => "isize",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::U128 => "u128",
            Kind::Usize => "usize",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::String => "string",
            Kind::Char => "char",
            Kind::Unit => "unit",
            Kind::Struct => "struct",
            Kind::Pointer => "pointer",
            Kind::Array => "array",
            Kind::Map => "map",
            Kind::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity used to register type overrides.
///
/// Structures and named types are keyed by their qualified identity, scalars
/// by their kind name, and composites structurally (`*T`, `[]T`,
/// `map[K]V`, `any`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey(String);

impl TypeKey {
    /// Create a key from its string form.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The string form of this key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lazily evaluated field list of a structure.
pub type FieldsFn = fn() -> Vec<FieldDescriptor>;

/// A reference to a structure type.
///
/// Two references are equal when their qualified identities are equal.
#[derive(Clone, Copy)]
pub struct StructRef {
    qualified: &'static str,
    name: &'static str,
    fields: FieldsFn,
}

impl StructRef {
    /// Create a structure reference.
    ///
    /// `qualified` must be unique per structure type (for derived types it
    /// is `std::any::type_name::<Self>()`), `name` is the display name used
    /// for the emitted interface.
    pub fn new(qualified: &'static str, name: &'static str, fields: FieldsFn) -> Self {
        Self {
            qualified,
            name,
            fields,
        }
    }

    /// The qualified identity of this structure.
    pub fn qualified(&self) -> &'static str {
        self.qualified
    }

    /// The display name of this structure.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The declared fields, in declaration order, without flattening.
    pub fn fields(&self) -> Vec<FieldDescriptor> {
        (self.fields)()
    }

    /// The fields with embedded structures hoisted in place, depth-first.
    ///
    /// An embedded field whose structure is already being flattened further
    /// up the chain is dropped, so cyclic embedding terminates.
    pub fn deep_fields(&self) -> Vec<FieldDescriptor> {
        let mut out = Vec::new();
        let mut stack = HashSet::new();
        self.collect_fields(&mut stack, &mut out);
        out
    }

    fn collect_fields(&self, stack: &mut HashSet<&'static str>, out: &mut Vec<FieldDescriptor>) {
        stack.insert(self.qualified);
        for field in self.fields() {
            if field.is_embedded() {
                if let Some(inner) = field.ty().deref_pointer().as_struct() {
                    if !stack.contains(inner.qualified) {
                        inner.collect_fields(stack, out);
                    }
                    continue;
                }
            }
            out.push(field);
        }
        stack.remove(self.qualified);
    }
}

impl PartialEq for StructRef {
    fn eq(&self, other: &Self) -> bool {
        self.qualified == other.qualified
    }
}

impl Eq for StructRef {}

impl fmt::Debug for StructRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructRef")
            .field("qualified", &self.qualified)
            .field("name", &self.name)
            .finish()
    }
}

/// Describes a type taking part in a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// A primitive type.
    Scalar(Kind),
    /// A named type over a non-struct type.
    Named {
        /// Qualified identity of the named type.
        ident: &'static str,
        /// The type it wraps.
        inner: Box<TypeDescriptor>,
    },
    /// A structure type.
    Struct(StructRef),
    /// One level of indirection.
    Pointer(Box<TypeDescriptor>),
    /// A sequence.
    Array(Box<TypeDescriptor>),
    /// A map.
    Map {
        /// Key type.
        key: Box<TypeDescriptor>,
        /// Value type.
        value: Box<TypeDescriptor>,
    },
    /// An open type whose shape is not known statically.
    Dynamic,
}

impl TypeDescriptor {
    /// A scalar of the given kind.
    pub fn scalar(kind: Kind) -> Self {
        TypeDescriptor::Scalar(kind)
    }

    /// A named type wrapping `inner`.
    pub fn named(ident: &'static str, inner: TypeDescriptor) -> Self {
        TypeDescriptor::Named {
            ident,
            inner: Box::new(inner),
        }
    }

    /// A structure type.
    pub fn structure(qualified: &'static str, name: &'static str, fields: FieldsFn) -> Self {
        TypeDescriptor::Struct(StructRef::new(qualified, name, fields))
    }

    /// A pointer to `inner`.
    pub fn pointer(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Pointer(Box::new(inner))
    }

    /// A sequence of `element`.
    pub fn array(element: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(element))
    }

    /// A map from `key` to `value`.
    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        TypeDescriptor::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// The open type.
    pub fn dynamic() -> Self {
        TypeDescriptor::Dynamic
    }

    /// The kind of this type, seeing through named types.
    pub fn kind(&self) -> Kind {
        match self {
            TypeDescriptor::Scalar(kind) => *kind,
            TypeDescriptor::Named { inner, .. } => inner.kind(),
            TypeDescriptor::Struct(_) => Kind::Struct,
            TypeDescriptor::Pointer(_) => Kind::Pointer,
            TypeDescriptor::Array(_) => Kind::Array,
            TypeDescriptor::Map { .. } => Kind::Map,
            TypeDescriptor::Dynamic => Kind::Dynamic,
        }
    }

    /// The type with any named wrappers removed.
    pub fn underlying(&self) -> &TypeDescriptor {
        match self {
            TypeDescriptor::Named { inner, .. } => inner.underlying(),
            other => other,
        }
    }

    /// The pointee if this is a pointer, otherwise `self`. Unwraps one level.
    pub fn deref_pointer(&self) -> &TypeDescriptor {
        match self.underlying() {
            TypeDescriptor::Pointer(inner) => inner.as_ref(),
            _ => self,
        }
    }

    /// The structure this type is, if any.
    pub fn as_struct(&self) -> Option<&StructRef> {
        match self.underlying() {
            TypeDescriptor::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// The override key of this type.
    pub fn key(&self) -> TypeKey {
        match self {
            TypeDescriptor::Scalar(kind) => TypeKey::new(kind.as_str()),
            TypeDescriptor::Named { ident, .. } => TypeKey::new(*ident),
            TypeDescriptor::Struct(s) => TypeKey::new(s.qualified),
            TypeDescriptor::Pointer(inner) => TypeKey::new(format!("*{}", inner.key())),
            TypeDescriptor::Array(element) => TypeKey::new(format!("[]{}", element.key())),
            TypeDescriptor::Map { key, value } => {
                TypeKey::new(format!("map[{}]{}", key.key(), value.key()))
            }
            TypeDescriptor::Dynamic => TypeKey::new("any"),
        }
    }
}

/// String-valued tags attached to a field.
///
/// Tags are looked up by the fixed keys [`JSON_TAG`], [`TS_TYPE_TAG`] and
/// [`TS_DOC_TAG`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTags {
    json: Option<String>,
    ts_type: Option<String>,
    ts_doc: Option<String>,
}

impl FieldTags {
    /// Look up a tag value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            JSON_TAG => self.json.as_deref(),
            TS_TYPE_TAG => self.ts_type.as_deref(),
            TS_DOC_TAG => self.ts_doc.as_deref(),
            _ => None,
        }
    }
}

/// One field of a structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    exported: bool,
    embedded: bool,
    ty: TypeDescriptor,
    tags: FieldTags,
}

impl FieldDescriptor {
    /// Create an exported, non-embedded field without tags.
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            exported: true,
            embedded: false,
            ty,
            tags: FieldTags::default(),
        }
    }

    /// Set the serialized-name tag, e.g. `"size,omitempty"` or `"-"`.
    pub fn with_json_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.json = Some(tag.into());
        self
    }

    /// Set the explicit TypeScript type tag.
    pub fn with_ts_type(mut self, ts_type: impl Into<String>) -> Self {
        self.tags.ts_type = Some(ts_type.into());
        self
    }

    /// Set the documentation tag.
    pub fn with_ts_doc(mut self, doc: impl Into<String>) -> Self {
        self.tags.ts_doc = Some(doc.into());
        self
    }

    /// Set whether the field is externally visible.
    pub fn with_exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Mark the field as embedded; a structure field is then flattened into
    /// its owner.
    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    /// The declared field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the field is externally visible.
    pub fn is_exported(&self) -> bool {
        self.exported
    }

    /// Whether the field is embedded.
    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// The declared type.
    pub fn ty(&self) -> &TypeDescriptor {
        &self.ty
    }

    /// All tags.
    pub fn tags(&self) -> &FieldTags {
        &self.tags
    }

    /// Look up one tag value.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key)
    }
}
