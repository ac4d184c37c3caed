//! Impl block generation for the Reflect trait.
//!
//! This module generates the `impl Reflect for Type` blocks that are
//! emitted by the derive macro.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Generics};

use crate::ir::{FieldIR, ReflectIR, Shape};

/// Generates the impl block for the Reflect trait.
pub struct ImplBlockGenerator;

impl ImplBlockGenerator {
    /// Generate the complete impl block for a parsed type.
    ///
    /// Field lists are emitted as non-capturing closures, which coerce to
    /// the `fn` pointer the runtime evaluates lazily.
    pub fn generate(ir: &ReflectIR) -> TokenStream {
        let ident = &ir.ident;
        let generics = Self::add_reflect_bounds(&ir.generics);
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
        let body = Self::generate_body(ir);

        quote! {
            impl #impl_generics ::tots::Reflect for #ident #ty_generics #where_clause {
                fn type_descriptor() -> ::tots::TypeDescriptor {
                    #body
                }
            }
        }
    }

    fn generate_body(ir: &ReflectIR) -> TokenStream {
        let name = &ir.name;
        match &ir.shape {
            Shape::Struct(fields) => {
                let fields = fields.iter().map(Self::generate_field);
                quote! {
                    ::tots::TypeDescriptor::structure(
                        ::std::any::type_name::<Self>(),
                        #name,
                        || ::std::vec![#(#fields),*],
                    )
                }
            }
            Shape::Newtype(inner) => quote! {
                ::tots::TypeDescriptor::named(
                    ::std::any::type_name::<Self>(),
                    <#inner as ::tots::Reflect>::type_descriptor(),
                )
            },
            Shape::Unit => quote! {
                ::tots::TypeDescriptor::structure(
                    ::std::any::type_name::<Self>(),
                    #name,
                    ::std::vec::Vec::new,
                )
            },
        }
    }

    /// Generate one `FieldDescriptor` expression.
    ///
    /// Skipped fields are described as unit, and fields with an explicit
    /// TypeScript type as an opaque named type keyed by `type_name`, so
    /// neither needs a `Reflect` impl.
    fn generate_field(field: &FieldIR) -> TokenStream {
        let rust_name = &field.rust_name;
        let ty = &field.ty;

        let descriptor = if field.skip {
            quote! { ::tots::TypeDescriptor::scalar(::tots::Kind::Unit) }
        } else if field.ts_type.is_some() {
            quote! {
                ::tots::TypeDescriptor::named(
                    ::std::any::type_name::<#ty>(),
                    ::tots::TypeDescriptor::scalar(::tots::Kind::Unit),
                )
            }
        } else {
            quote! { <#ty as ::tots::Reflect>::type_descriptor() }
        };

        let json_tag = field.json_tag.as_ref().map(|tag| quote! { .with_json_tag(#tag) });
        let ts_type = field.ts_type.as_ref().map(|ty| quote! { .with_ts_type(#ty) });
        let ts_doc = field.ts_doc.as_ref().map(|doc| quote! { .with_ts_doc(#doc) });
        let embedded = field.flatten.then(|| quote! { .embedded() });

        quote! {
            ::tots::FieldDescriptor::new(#rust_name, #descriptor)
                #json_tag
                #ts_type
                #ts_doc
                #embedded
        }
    }

    /// Add a `Reflect` bound to every type parameter.
    fn add_reflect_bounds(generics: &Generics) -> Generics {
        let mut generics = generics.clone();
        for param in generics.type_params_mut() {
            param.bounds.push(parse_quote!(::tots::Reflect));
        }
        generics
    }
}
