// Adapted from `validator_derive` (https://github.com/Keats/validator).
//
// See LICENSE for details.

#![recursion_limit = "128"]

use inflections::Inflect;
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// Derives `gltf_json::validation::Validate` by recursing into every named
/// field of a struct, in declaration order.
///
/// Entities with real semantic invariants (`Accessor`, `BufferView`,
/// `Mesh`, `Primitive`, ...) implement `Validate` by hand instead of
/// deriving it.
#[proc_macro_derive(Validate)]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    expand(&ast).into()
}

fn expand(ast: &DeriveInput) -> proc_macro2::TokenStream {
    let fields = match &ast.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => panic!("#[derive(Validate)] only supports structs with named fields"),
        },
        _ => panic!("#[derive(Validate)] only works on `struct`s"),
    };
    let ident = &ast.ident;
    let validations = fields.iter().map(|f| {
        let field_ident = f.ident.as_ref().unwrap();
        let field_name = field_ident.to_string().to_camel_case();
        quote! {
            self.#field_ident.validate(
                _root,
                || _path().field(#field_name),
                _report,
            );
        }
    });
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();
    quote! {
        impl #impl_generics crate::validation::Validate for #ident #ty_generics #where_clause {
            fn validate<R>(&self, _root: &crate::Root, _path: impl Fn() -> crate::Path, _report: &mut R)
            where
                R: FnMut(&dyn Fn() -> crate::Path, crate::Error),
            {
                #(#validations)*
            }
        }
    }
}
