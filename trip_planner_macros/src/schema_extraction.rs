use proc_macro2::Span;
use syn::{
    meta::ParseNestedMeta, parse::Parser, punctuated::Punctuated, spanned::Spanned, Attribute,
    Expr, ExprLit, Fields, ItemStruct, Lit, LitStr, MetaNameValue, Token,
};

#[derive(Default)]
pub struct RequestSchemaArgs {
    pub name: Option<LitStr>,
    pub description: Option<LitStr>,
}

pub fn parse_request_schema_args(attr: proc_macro::TokenStream) -> syn::Result<RequestSchemaArgs> {
    if attr.is_empty() {
        return Ok(RequestSchemaArgs::default());
    }

    let parser = Punctuated::<MetaNameValue, Token![,]>::parse_terminated;
    let args = parser.parse(attr)?;

    let mut result = RequestSchemaArgs::default();

    for nested in args {
        let ident = nested
            .path
            .get_ident()
            .ok_or_else(|| syn::Error::new_spanned(&nested.path, "expected identifier"))?;

        let lit_str = match &nested.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(lit), ..
            }) => lit.clone(),
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "expected string literal value",
                ));
            }
        };

        let slot = match ident.to_string().as_str() {
            "name" => &mut result.name,
            "description" => &mut result.description,
            other => {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("unsupported argument `{other}`"),
                ));
            }
        };

        if slot.is_some() {
            return Err(syn::Error::new(
                ident.span(),
                format!("duplicate `{ident}` argument"),
            ));
        }
        *slot = Some(lit_str);
    }

    Ok(result)
}

pub fn ensure_named_struct(item: &ItemStruct) -> syn::Result<()> {
    match &item.fields {
        Fields::Named(_) => Ok(()),
        _ => Err(syn::Error::new(
            item.struct_token.span(),
            "`#[request_schema]` only supports structs with named fields",
        )),
    }
}

pub fn collect_doc_comments(attrs: &[Attribute]) -> Option<String> {
    let docs: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(MetaNameValue {
                value:
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(lit), ..
                    }),
                ..
            }) => Some(lit.value().trim().to_string()),
            _ => None,
        })
        .collect();

    if docs.is_empty() {
        None
    } else {
        Some(docs.join("\n"))
    }
}

/// Field docs keyed by the name the field has on the wire.
pub fn collect_field_docs(item: &ItemStruct) -> syn::Result<Vec<(String, String)>> {
    let rename_all = serde_string_arg(&item.attrs, "rename_all")?;
    let mut results = Vec::new();

    if let Fields::Named(fields) = &item.fields {
        for field in &fields.named {
            let Some(ident) = &field.ident else {
                continue;
            };
            let Some(doc) = collect_doc_comments(&field.attrs) else {
                continue;
            };

            let rust_name = ident.to_string();
            let rust_name = rust_name.trim_start_matches("r#");
            let wire_name = match serde_string_arg(&field.attrs, "rename")? {
                Some(explicit) => explicit,
                None => match rename_all.as_deref() {
                    Some(rule) => apply_rename_rule(rule, rust_name, ident.span())?,
                    None => rust_name.to_string(),
                },
            };

            results.push((wire_name, doc));
        }
    }

    Ok(results)
}

/// Reads `#[serde(<key> = "...")]` from a list of attributes.
fn serde_string_arg(attrs: &[Attribute], key: &str) -> syn::Result<Option<String>> {
    let mut found = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) && meta.input.peek(Token![=]) {
                let lit: LitStr = meta.value()?.parse()?;
                found = Some(lit.value());
                Ok(())
            } else {
                skip_meta_value(&meta)
            }
        })?;
    }

    Ok(found)
}

fn skip_meta_value(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        let _: Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|nested| skip_meta_value(&nested))?;
    }
    Ok(())
}

fn apply_rename_rule(rule: &str, field: &str, span: Span) -> syn::Result<String> {
    let parts = field.split('_').filter(|part| !part.is_empty());

    let renamed = match rule {
        "snake_case" => field.to_string(),
        "lowercase" => field.to_lowercase(),
        "UPPERCASE" | "SCREAMING_SNAKE_CASE" => field.to_uppercase(),
        "kebab-case" => field.replace('_', "-"),
        "SCREAMING-KEBAB-CASE" => field.replace('_', "-").to_uppercase(),
        "camelCase" => parts
            .enumerate()
            .map(|(idx, part)| if idx == 0 { part.to_string() } else { capitalize(part) })
            .collect(),
        "PascalCase" => parts.map(capitalize).collect(),
        other => {
            return Err(syn::Error::new(
                span,
                format!("unsupported serde rename rule `{other}`"),
            ))
        }
    };

    Ok(renamed)
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn infer_schema_name(item: &ItemStruct, explicit: Option<&LitStr>) -> LitStr {
    if let Some(explicit) = explicit {
        return explicit.clone();
    }

    LitStr::new(&item.ident.to_string(), Span::call_site())
}

pub fn infer_description(explicit: Option<&LitStr>, doc: Option<String>) -> Option<LitStr> {
    if let Some(explicit) = explicit {
        return Some(explicit.clone());
    }

    doc.map(|text| LitStr::new(&text, Span::call_site()))
}
