//! `ApiResponse` derive macro implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_quote, parse2};

/// Container options parsed from `#[api_response(...)]` attributes.
#[derive(Debug, Clone, Default)]
struct ApiResponseOptions {
    /// Schema name attached to the metadata.
    schema: Option<syn::LitStr>,
    /// Path to the crate exporting `ApiResponse` (defaults to `::jetwire`).
    krate: Option<syn::Path>,
}

/// Expand the `#[derive(ApiResponse)]` macro.
pub fn expand_api_response_derive(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let name = &input.ident;

    if let syn::Data::Union(_) = &input.data {
        return Err(syn::Error::new_spanned(
            &input,
            "ApiResponse derive only supports structs and enums",
        ));
    }

    let options = parse_api_response_options(&input.attrs)?;
    let krate = options
        .krate
        .unwrap_or_else(|| parse_quote!(::jetwire));

    let mut generics = input.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote! {
            Self: #krate::__private::DeserializeOwned
                + ::core::marker::Send
                + ::core::marker::Sync
                + 'static
        });
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let body = match options.schema {
        Some(schema) => quote! {
            #krate::TypeInfo::serde().with_schema(#schema)
        },
        None => quote! {
            ::core::result::Result::Ok(#krate::TypeInfo::serde())
        },
    };

    Ok(quote! {
        impl #impl_generics #krate::ApiResponse for #name #ty_generics #where_clause {
            fn type_info() -> ::core::result::Result<#krate::TypeInfo<Self>, #krate::MetadataError> {
                #body
            }
        }
    })
}

/// Parse container options from `#[api_response(...)]` attributes.
fn parse_api_response_options(attrs: &[syn::Attribute]) -> syn::Result<ApiResponseOptions> {
    let mut options = ApiResponseOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("api_response") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("schema") {
                options.schema = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("crate") {
                let value: syn::LitStr = meta.value()?.parse()?;
                options.krate = Some(value.parse()?);
            } else {
                return Err(meta.error("unknown api_response attribute, expected `schema` or `crate`"));
            }
            Ok(())
        })?;
    }

    Ok(options)
}
