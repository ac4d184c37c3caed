//! Error types for the macro crate.

use syn::DeriveInput;

/// Error raised while parsing a derive input.
#[derive(Debug, thiserror::Error)]
pub enum DeriveError {
    #[error("Invalid container attributes: {0}")]
    ContainerAttrs(darling::Error),

    #[error("Invalid field attributes: {0}")]
    FieldAttrs(darling::Error),

    #[error("Reflect cannot be derived for {0}")]
    Unsupported(&'static str),

    #[error("Reflect can only be derived for tuple structs with exactly one field, found {0}")]
    TupleArity(usize),

    #[error("Field at index {0} has no identifier")]
    MissingFieldIdent(usize),
}

impl DeriveError {
    /// Convert to a `syn::Error` pointing at the type being derived.
    pub fn into_syn_error(self, input: &DeriveInput) -> syn::Error {
        syn::Error::new_spanned(&input.ident, self.to_string())
    }
}
