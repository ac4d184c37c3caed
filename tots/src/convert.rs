//! The schema walker.
//!
//! A [`Converter`] is configured once with builder methods and then turned
//! into TypeScript with [`Converter::convert`]. Every call builds its own
//! [`Conversion`] context, which owns the emitted-type registry for that run,
//! so a converter can be shared and converted repeatedly with identical
//! results.

use std::collections::HashMap;

use crate::builder::{InterfaceBuilder, OutputStyle};
use crate::classify::classify;
use crate::config::ConverterConfig;
use crate::descriptor::{FieldDescriptor, StructRef, TypeDescriptor, TypeKey};
use crate::error::{ConvertError, ConvertResult};
use crate::options::{external_name, merge_options, StructSpec, TypeOptions};
use crate::reflect::Reflect;
use crate::registry::EmittedRegistry;

/// First line of every generated document.
pub const BANNER: &str = "/* Do not change, this code is generated from Rust structs */";

/// Converts structure types into TypeScript interfaces.
///
/// # Example
///
/// ```rust
/// use tots::{Converter, FieldDescriptor, Kind, TypeDescriptor};
///
/// fn fields() -> Vec<FieldDescriptor> {
///     vec![
///         FieldDescriptor::new("Page", TypeDescriptor::scalar(Kind::I32)).with_json_tag("page"),
///         FieldDescriptor::new("Keyword", TypeDescriptor::scalar(Kind::String))
///             .with_json_tag("keyword")
///             .with_ts_doc("search keyword"),
///     ]
/// }
///
/// let ts = Converter::new()
///     .add_type(TypeDescriptor::structure("api::PageParameter", "PageParameter", fields))
///     .convert()
///     .unwrap();
///
/// assert!(ts.contains("export interface PageParameter {"));
/// assert!(ts.contains("    page: number;"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    style: OutputStyle,
    debug: bool,
    structs: Vec<StructSpec>,
    type_options: HashMap<TypeKey, TypeOptions>,
}

impl Converter {
    /// Create a converter with default settings: no prefix or suffix, four
    /// space indentation, exported interfaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter from loaded configuration.
    ///
    /// Global overrides in `config.types` are registered by their key string.
    pub fn from_config(config: &ConverterConfig) -> Self {
        let mut converter = Self::new()
            .with_prefix(config.prefix.as_str())
            .with_suffix(config.suffix.as_str())
            .with_indent(config.indent.as_str())
            .with_export(config.export)
            .with_debug(config.debug);
        for (key, opts) in &config.types {
            converter
                .type_options
                .insert(TypeKey::new(key.as_str()), opts.clone());
        }
        converter
    }

    /// Set the interface name prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.style.prefix = prefix.into();
        self
    }

    /// Set the interface name suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.style.suffix = suffix.into();
        self
    }

    /// Set the indentation unit of field lines.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.style.indent = indent.into();
        self
    }

    /// Set whether interfaces are declared with `export`.
    pub fn with_export(mut self, export: bool) -> Self {
        self.style.export = export;
        self
    }

    /// Enable debug tracing of the walk.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Request conversion of `T`.
    pub fn add<T: Reflect + ?Sized>(self) -> Self {
        self.add_struct(StructSpec::of::<T>())
    }

    /// Request conversion of a described type.
    pub fn add_type(self, ty: TypeDescriptor) -> Self {
        self.add_struct(StructSpec::new(ty))
    }

    /// Request conversion of a type with structure-specific field overrides.
    pub fn add_struct(mut self, spec: StructSpec) -> Self {
        self.structs.push(spec);
        self
    }

    /// Register a global override for every field of type `T`.
    pub fn manage<T: Reflect + ?Sized>(self, opts: TypeOptions) -> Self {
        self.manage_type(&T::type_descriptor(), opts)
    }

    /// Register a global override for every field of the described type.
    pub fn manage_type(mut self, ty: &TypeDescriptor, opts: TypeOptions) -> Self {
        self.type_options.insert(ty.key(), opts);
        self
    }

    /// Convert every requested type, in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::NotAStruct`] when a requested type is not a
    /// structure, and [`ConvertError::UnresolvedType`] when any reachable
    /// field has no TypeScript mapping. No partial output is returned.
    pub fn convert(&self) -> ConvertResult<String> {
        let mut conversion = Conversion::new(self);
        let mut sections = vec![BANNER.to_string()];

        for spec in &self.structs {
            let ty = spec.ty().deref_pointer();
            let owner = ty
                .as_struct()
                .ok_or_else(|| ConvertError::NotAStruct(ty.key().to_string()))?;
            let text = conversion.convert_struct(0, owner)?;
            let text = self.trim(&text);
            if !text.is_empty() {
                sections.push(text.to_string());
            }
        }

        let mut out = sections.join("\n\n");
        out.push('\n');
        Ok(out)
    }

    fn trim<'t>(&self, text: &'t str) -> &'t str {
        text.trim_matches(|c: char| {
            c == ' ' || c == '\r' || c == '\n' || self.style.indent.contains(c)
        })
    }

    /// Merged options for a field of `owner`: tags, then struct-specific
    /// overrides in registration order, then the global override.
    fn field_options(&self, owner: &StructRef, field: &FieldDescriptor) -> TypeOptions {
        let key = field.ty().deref_pointer().key();
        let specific = self
            .structs
            .iter()
            .filter(|spec| spec.ty().deref_pointer().as_struct() == Some(owner))
            .filter_map(|spec| spec.field_options(&key));
        merge_options(field.tags(), specific.chain(self.type_options.get(&key)))
    }
}

/// State of one `convert` call.
struct Conversion<'a> {
    converter: &'a Converter,
    emitted: EmittedRegistry,
}

impl<'a> Conversion<'a> {
    fn new(converter: &'a Converter) -> Self {
        Self {
            converter,
            emitted: EmittedRegistry::new(),
        }
    }

    /// Emit `owner` and every structure it depends on that was not emitted
    /// yet. Dependencies come first, separated by blank lines.
    fn convert_struct(&mut self, depth: usize, owner: &StructRef) -> ConvertResult<String> {
        if !self.emitted.mark_emitted(owner.qualified()) {
            return Ok(String::new());
        }

        let converter = self.converter;
        if converter.debug {
            tracing::debug!(depth, ty = owner.qualified(), "converting structure");
        }

        let mut chunks = Vec::new();
        let mut builder = InterfaceBuilder::new(&converter.style);

        for field in owner.deep_fields() {
            let Some(name) = external_name(&field) else {
                if converter.debug {
                    tracing::debug!(depth, field = field.name(), "skipping field");
                }
                continue;
            };

            let opts = converter.field_options(owner, &field);
            let class = classify(owner, &field, &opts)?;
            if converter.debug {
                tracing::debug!(
                    depth,
                    owner = owner.name(),
                    field = %name,
                    branch = class.label(),
                    "classified field"
                );
            }

            for dependency in class.dependencies() {
                let chunk = self.convert_struct(depth + 1, &dependency)?;
                if !chunk.is_empty() {
                    chunks.push(chunk);
                }
            }

            builder.add_class(&name, &class, opts.ts_doc());
        }

        chunks.push(builder.finish(owner.name()));
        Ok(chunks.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Kind;

    fn node_fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("Value", TypeDescriptor::scalar(Kind::I32)).with_json_tag("value"),
            FieldDescriptor::new("Next", TypeDescriptor::pointer(node())).with_json_tag("next"),
        ]
    }

    fn node() -> TypeDescriptor {
        TypeDescriptor::structure("list::Node", "Node", node_fields)
    }

    #[test]
    fn test_converter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Converter>();
    }

    #[test]
    fn test_empty_converter_is_banner_only() {
        assert_eq!(Converter::new().convert().unwrap(), format!("{BANNER}\n"));
    }

    #[test]
    fn test_self_reference_emitted_once() {
        let out = Converter::new().add_type(node()).convert().unwrap();
        assert_eq!(
            out,
            format!("{BANNER}\n\nexport interface Node {{\n    value: number;\n    next: Node;\n}}\n")
        );
    }

    #[test]
    fn test_registry_is_per_call() {
        let converter = Converter::new().add_type(node());
        assert_eq!(converter.convert().unwrap(), converter.convert().unwrap());
    }

    #[test]
    fn test_pointer_to_struct_is_accepted() {
        let out = Converter::new()
            .add_type(TypeDescriptor::pointer(node()))
            .convert()
            .unwrap();
        assert!(out.contains("export interface Node {"));
    }

    #[test]
    fn test_not_a_struct() {
        let err = Converter::new()
            .add::<Vec<u8>>()
            .convert()
            .unwrap_err();
        assert_eq!(err, ConvertError::NotAStruct("[]u8".into()));
    }

    #[test]
    fn test_trim_uses_indent_characters() {
        let converter = Converter::new().with_indent("\t");
        assert_eq!(converter.trim("\t\n interface X {\n}\r\n\t"), "interface X {\n}");
    }
}
