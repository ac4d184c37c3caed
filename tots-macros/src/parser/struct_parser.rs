//! Struct parsing logic.
//!
//! This module handles parsing Rust struct definitions into IR.
//! It supports:
//! - Named structs, described field by field
//! - Single-field tuple structs, described as their inner type
//! - Unit structs, described as empty structures

use darling::FromDeriveInput;
use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Fields, Lit, Meta};

use crate::error::DeriveError;
use crate::ir::{FieldIR, ReflectIR, Shape};
use crate::parser::attributes::{ContainerAttrs, RenameRule};
use crate::parser::field_parser::FieldParser;

#[cfg(feature = "serde-compat")]
use crate::parser::serde_compat::SerdeContainerAttrs;

/// Parses Rust struct definitions into ReflectIR.
pub struct StructParser;

impl StructParser {
    /// Parse a DeriveInput into a ReflectIR.
    pub fn parse(input: &DeriveInput) -> Result<ReflectIR, DeriveError> {
        let data_struct = match &input.data {
            Data::Struct(s) => s,
            Data::Enum(_) => return Err(DeriveError::Unsupported("enums")),
            Data::Union(_) => return Err(DeriveError::Unsupported("unions")),
        };

        let container_attrs =
            ContainerAttrs::from_derive_input(input).map_err(DeriveError::ContainerAttrs)?;

        #[cfg(feature = "serde-compat")]
        let serde_container_attrs = SerdeContainerAttrs::from_attrs(&input.attrs);

        // ts takes precedence over serde
        #[cfg(feature = "serde-compat")]
        let (rename, rename_all) = (
            container_attrs
                .rename
                .clone()
                .or_else(|| serde_container_attrs.rename.clone()),
            container_attrs
                .rename_all
                .or(serde_container_attrs.rename_all),
        );

        #[cfg(not(feature = "serde-compat"))]
        let (rename, rename_all) = (container_attrs.rename.clone(), container_attrs.rename_all);

        let shape = match &data_struct.fields {
            Fields::Named(fields) => Shape::Struct(Self::parse_named_fields(fields, rename_all)?),
            Fields::Unnamed(fields) => match fields.unnamed.first() {
                Some(field) if fields.unnamed.len() == 1 => Shape::Newtype(field.ty.clone()),
                _ => return Err(DeriveError::TupleArity(fields.unnamed.len())),
            },
            Fields::Unit => Shape::Unit,
        };

        let name = rename.unwrap_or_else(|| container_attrs.ident.unraw().to_string());

        Ok(ReflectIR {
            ident: container_attrs.ident,
            generics: container_attrs.generics,
            name,
            shape,
        })
    }

    fn parse_named_fields(
        fields: &syn::FieldsNamed,
        rename_all: Option<RenameRule>,
    ) -> Result<Vec<FieldIR>, DeriveError> {
        fields
            .named
            .iter()
            .enumerate()
            .map(|(index, field)| FieldParser::parse_named(field, index, rename_all))
            .collect()
    }
}

/// Extract doc comments from attributes.
///
/// Doc comments in Rust are represented as `#[doc = "..."]` attributes.
/// This function extracts and concatenates them into a single description string.
pub fn extract_doc_comments(attrs: &[Attribute]) -> Option<String> {
    let doc_lines: Vec<String> = attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }

            if let Meta::NameValue(meta) = &attr.meta {
                if let syn::Expr::Lit(expr_lit) = &meta.value {
                    if let Lit::Str(lit_str) = &expr_lit.lit {
                        return Some(lit_str.value());
                    }
                }
            }
            None
        })
        .collect();

    let description = doc_lines
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    if description.is_empty() {
        None
    } else {
        Some(description)
    }
}
