//! Attribute parsing using darling for ergonomic derive macro attributes.
//!
//! This module defines the attribute structures for `#[ts(...)]` attributes
//! on structs and their fields.

use darling::{FromDeriveInput, FromField, FromMeta};
use syn::{Generics, Ident};

/// Container-level attributes parsed from `#[ts(...)]` on the struct.
#[derive(Debug, Clone, FromDeriveInput)]
#[darling(attributes(ts), supports(struct_any))]
pub struct ContainerAttrs {
    /// The identifier of the type
    pub ident: Ident,

    /// Generic parameters of the type
    pub generics: Generics,

    /// Rename the emitted interface
    #[darling(default)]
    pub rename: Option<String>,

    /// Rename all fields using a case convention
    #[darling(default)]
    pub rename_all: Option<RenameRule>,
}

/// Field-level attributes parsed from `#[ts(...)]` on struct fields.
#[derive(Debug, Clone, FromField)]
#[darling(attributes(ts))]
pub struct FieldAttrs {
    /// Rename this field
    #[darling(default)]
    pub rename: Option<String>,

    /// Leave this field out of the interface
    #[darling(default)]
    pub skip: bool,

    /// Render the field with the optional marker
    #[darling(default)]
    pub optional: bool,

    /// Hoist the fields of a nested struct into the owner
    #[darling(default)]
    pub flatten: bool,

    /// Documentation, replacing doc comments
    #[darling(default)]
    pub doc: Option<String>,

    /// TypeScript type used verbatim
    #[darling(default, rename = "type")]
    pub type_override: Option<String>,
}

/// Rename rule for field name transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromMeta)]
pub enum RenameRule {
    /// lowercase
    #[darling(rename = "lowercase")]
    LowerCase,

    /// UPPERCASE
    #[darling(rename = "UPPERCASE")]
    UpperCase,

    /// camelCase
    #[darling(rename = "camelCase")]
    CamelCase,

    /// snake_case
    #[darling(rename = "snake_case")]
    SnakeCase,

    /// PascalCase
    #[darling(rename = "PascalCase")]
    PascalCase,

    /// SCREAMING_SNAKE_CASE
    #[darling(rename = "SCREAMING_SNAKE_CASE")]
    ScreamingSnakeCase,

    /// kebab-case
    #[darling(rename = "kebab-case")]
    KebabCase,

    /// SCREAMING-KEBAB-CASE
    #[darling(rename = "SCREAMING-KEBAB-CASE")]
    ScreamingKebabCase,
}

impl RenameRule {
    /// Parse a rule from its serde spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "lowercase" => Some(RenameRule::LowerCase),
            "UPPERCASE" => Some(RenameRule::UpperCase),
            "camelCase" => Some(RenameRule::CamelCase),
            "snake_case" => Some(RenameRule::SnakeCase),
            "PascalCase" => Some(RenameRule::PascalCase),
            "SCREAMING_SNAKE_CASE" => Some(RenameRule::ScreamingSnakeCase),
            "kebab-case" => Some(RenameRule::KebabCase),
            "SCREAMING-KEBAB-CASE" => Some(RenameRule::ScreamingKebabCase),
            _ => None,
        }
    }

    /// Apply the rename rule to a string.
    pub fn apply(&self, name: &str) -> String {
        use convert_case::{Case, Casing};

        match self {
            RenameRule::LowerCase => name.to_lowercase(),
            RenameRule::UpperCase => name.to_uppercase(),
            RenameRule::CamelCase => name.to_case(Case::Camel),
            RenameRule::SnakeCase => name.to_case(Case::Snake),
            RenameRule::PascalCase => name.to_case(Case::Pascal),
            RenameRule::ScreamingSnakeCase => name.to_case(Case::UpperSnake),
            RenameRule::KebabCase => name.to_case(Case::Kebab),
            RenameRule::ScreamingKebabCase => name.to_case(Case::Kebab).to_uppercase(),
        }
    }
}
