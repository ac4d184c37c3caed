//! Field parsing logic.
//!
//! Resolves the external name, skip, optional and flatten settings of a
//! named field from `#[ts(...)]` and, with `serde-compat`, `#[serde(...)]`,
//! and encodes them as the tags the runtime reads.

use darling::FromField;
use syn::ext::IdentExt;
use syn::Field;

use crate::error::DeriveError;
use crate::ir::FieldIR;
use crate::parser::attributes::{FieldAttrs, RenameRule};
use crate::parser::struct_parser::extract_doc_comments;

#[cfg(feature = "serde-compat")]
use crate::parser::serde_compat::SerdeFieldAttrs;

/// Tag value that leaves a field out.
const SKIP_TAG: &str = "-";

/// Tag option that marks a field optional.
const OMIT_EMPTY: &str = "omitempty";

/// Parses named struct fields into FieldIR.
pub struct FieldParser;

impl FieldParser {
    /// Parse a single named field.
    ///
    /// Name priority: `#[ts(rename)]` > `#[serde(rename)]` > `rename_all`
    /// rule > the field name itself.
    pub fn parse_named(
        field: &Field,
        index: usize,
        rename_all: Option<RenameRule>,
    ) -> Result<FieldIR, DeriveError> {
        let attrs = FieldAttrs::from_field(field).map_err(DeriveError::FieldAttrs)?;

        let rust_name = field
            .ident
            .as_ref()
            .ok_or(DeriveError::MissingFieldIdent(index))?
            .unraw()
            .to_string();

        #[cfg(feature = "serde-compat")]
        let serde = SerdeFieldAttrs::from_attrs(&field.attrs);

        #[cfg(feature = "serde-compat")]
        let (explicit_name, skip, optional, flatten) = (
            attrs.rename.clone().or_else(|| serde.rename.clone()),
            attrs.skip || serde.should_skip(),
            attrs.optional || serde.skip_serializing_if,
            attrs.flatten || serde.flatten,
        );

        #[cfg(not(feature = "serde-compat"))]
        let (explicit_name, skip, optional, flatten) = (
            attrs.rename.clone(),
            attrs.skip,
            attrs.optional,
            attrs.flatten,
        );

        let name = explicit_name.or_else(|| rename_all.map(|rule| rule.apply(&rust_name)));
        let json_tag = if skip {
            Some(SKIP_TAG.to_string())
        } else {
            json_tag(name, &rust_name, optional)
        };

        // Attribute doc overrides doc comments
        let ts_doc = attrs
            .doc
            .clone()
            .or_else(|| extract_doc_comments(&field.attrs));

        Ok(FieldIR::new(rust_name, field.ty.clone())
            .with_json_tag(json_tag)
            .with_ts_type(attrs.type_override)
            .with_ts_doc(ts_doc)
            .with_flatten(flatten)
            .with_skip(skip))
    }
}

/// An optional field always carries its name, since a tag with an empty
/// name component skips the field.
fn json_tag(name: Option<String>, rust_name: &str, optional: bool) -> Option<String> {
    match (name, optional) {
        (Some(name), true) => Some(format!("{name},{OMIT_EMPTY}")),
        (Some(name), false) => Some(name),
        (None, true) => Some(format!("{rust_name},{OMIT_EMPTY}")),
        (None, false) => None,
    }
}
