use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{spanned::Spanned, ItemStruct, LitStr};

use crate::schema_extraction::{
    collect_doc_comments, collect_field_docs, ensure_named_struct, infer_description,
    infer_schema_name, parse_request_schema_args,
};

pub fn request_schema(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item_struct = match syn::parse::<ItemStruct>(item) {
        Ok(item_struct) => item_struct,
        Err(err) => return err.to_compile_error().into(),
    };

    expand(attr, &item_struct)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand(attr: TokenStream, item_struct: &ItemStruct) -> syn::Result<TokenStream2> {
    let args = parse_request_schema_args(attr)?;
    ensure_named_struct(item_struct)?;
    if !item_struct.generics.params.is_empty() {
        return Err(syn::Error::new(
            item_struct.generics.span(),
            "`#[request_schema]` does not support generic structs",
        ));
    }

    let name = infer_schema_name(item_struct, args.name.as_ref());
    let description = match infer_description(
        args.description.as_ref(),
        collect_doc_comments(&item_struct.attrs),
    ) {
        Some(lit) => quote! { Some(#lit) },
        None => quote! { None },
    };
    let field_docs = collect_field_docs(item_struct)?
        .into_iter()
        .map(|(field, doc)| {
            let field = LitStr::new(&field, Span::call_site());
            let doc = LitStr::new(&doc, Span::call_site());
            quote! { (#field, #doc) }
        });

    let ident = &item_struct.ident;

    Ok(quote! {
        #item_struct

        impl trip_planner_rs::schema::RequestSchema for #ident {
            fn schema() -> &'static trip_planner_rs::schema::SchemaHandle {
                static HANDLE: std::sync::OnceLock<trip_planner_rs::schema::SchemaHandle> =
                    std::sync::OnceLock::new();
                HANDLE.get_or_init(|| {
                    trip_planner_rs::schema::SchemaHandle::build::<Self>(
                        #name,
                        #description,
                        &[#(#field_docs),*],
                    )
                })
            }
        }
    })
}
