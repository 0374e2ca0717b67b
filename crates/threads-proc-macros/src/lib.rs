// threads-core-client/threads-proc-macros
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Error, Fields, Ident, Meta};

/// Implements `From<&AppDependencies>` for a service struct.
///
/// Fields marked `#[inject]` are cloned from the dependency field of the same
/// name, `#[inject(other_name)]` clones `deps.other_name` instead. Every other
/// field is initialized with `Default::default()`.
#[proc_macro_derive(InjectDependencies, attributes(inject))]
pub fn inject_dependencies(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);

    match expand_inject_dependencies(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_inject_dependencies(input: &DeriveInput) -> Result<proc_macro2::TokenStream, Error> {
    let Data::Struct(struct_data) = &input.data else {
        return Err(Error::new_spanned(
            &input.ident,
            "InjectDependencies only supports structs.",
        ));
    };

    let Fields::Named(fields) = &struct_data.fields else {
        return Err(Error::new_spanned(
            &input.ident,
            "InjectDependencies only supports structs with named fields.",
        ));
    };

    let mut initializers = Vec::with_capacity(fields.named.len());

    for field in fields.named.iter() {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };

        let Some(attr) = field
            .attrs
            .iter()
            .find(|attr| attr.path().is_ident("inject"))
        else {
            initializers.push(quote! { #ident: Default::default() });
            continue;
        };

        let source: Ident = match &attr.meta {
            Meta::Path(_) => ident.clone(),
            Meta::List(_) => attr.parse_args()?,
            Meta::NameValue(meta) => {
                return Err(Error::new_spanned(
                    meta,
                    "Expected #[inject] or #[inject(dependency_name)].",
                ))
            }
        };

        initializers.push(quote! { #ident: deps.#source.clone() });
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics From<&crate::app::deps::AppDependencies> for #name #ty_generics #where_clause {
            fn from(deps: &crate::app::deps::AppDependencies) -> Self {
                Self {
                    #(#initializers,)*
                }
            }
        }
    })
}
