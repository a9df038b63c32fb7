//! Turning a marked declaration into a [`TypeDescriptor`].

use log::trace;
use proc_macro2::{Delimiter, Spacing, TokenStream, TokenTree};
use quote::ToTokens;
use syn::{FnArg, Ident, ImplItem, ImplItemFn, ItemEnum, Pat, ReturnType, Type, ext::IdentExt};

use crate::{
    descriptor::{ParameterDescriptor, TypeDescriptor},
    errors::InvalidArgument,
    scan::Declaration,
};

/// Builds the descriptor of a marked enum.
///
/// Returns `Ok(None)` when the declaration is not an enum; such items are
/// skipped, not reported.
pub fn extract(
    declaration: &Declaration<'_>,
) -> Result<Option<TypeDescriptor>, InvalidArgument> {
    if declaration.namespace.is_empty() {
        return Err(InvalidArgument::EmptyNamespace);
    }
    let syn::Item::Enum(item_enum) = declaration.item else {
        trace!(
            "Skipping {} ({}): not an enum",
            declaration.display_path(),
            declaration.kind()
        );
        return Ok(None);
    };
    let type_name = item_enum.ident.unraw().to_string();
    if !item_enum.generics.params.is_empty() {
        return Err(InvalidArgument::GenericType(type_name));
    }

    let constant_names = enum_constants(item_enum)?;
    let constructor_parameters = declaration
        .impls
        .iter()
        .flat_map(|item_impl| &item_impl.items)
        .filter_map(|item| match item {
            ImplItem::Fn(function) if is_constructor(function, &item_enum.ident) => Some(function),
            _ => None,
        })
        .map(|function| constructor_arguments(function, &type_name))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .flatten()
        .collect();

    Ok(Some(TypeDescriptor {
        namespace: declaration.namespace.clone(),
        type_name,
        constant_names,
        constructor_parameters,
    }))
}

fn enum_constants(item_enum: &ItemEnum) -> Result<Vec<String>, InvalidArgument> {
    item_enum
        .variants
        .iter()
        .map(|variant| {
            let name = variant.ident.unraw().to_string();
            match variant.fields {
                syn::Fields::Unit => Ok(name),
                _ => Err(InvalidArgument::NonUnitVariant {
                    type_name: item_enum.ident.unraw().to_string(),
                    variant: name,
                }),
            }
        })
        .collect()
}

/// An associated function without receiver returning `Self` or the enum.
fn is_constructor(function: &ImplItemFn, enum_ident: &Ident) -> bool {
    if function.sig.receiver().is_some() {
        return false;
    }
    match &function.sig.output {
        ReturnType::Type(_, ty) => match ty.as_ref() {
            Type::Path(type_path) if type_path.qself.is_none() => {
                type_path.path.segments.last().is_some_and(|segment| {
                    segment.arguments.is_empty()
                        && (segment.ident == "Self" || segment.ident == *enum_ident)
                })
            }
            _ => false,
        },
        ReturnType::Default => false,
    }
}

fn constructor_arguments(
    function: &ImplItemFn,
    type_name: &str,
) -> Result<Vec<ParameterDescriptor>, InvalidArgument> {
    function
        .sig
        .inputs
        .iter()
        .filter_map(|input| match input {
            FnArg::Typed(pat_type) => Some(pat_type),
            FnArg::Receiver(_) => None,
        })
        .map(|pat_type| match pat_type.pat.as_ref() {
            Pat::Ident(pat_ident) => Ok(ParameterDescriptor::new(
                pat_ident.ident.unraw().to_string(),
                type_text(&pat_type.ty),
            )),
            _ => Err(InvalidArgument::PatternParameter {
                type_name: type_name.to_string(),
                constructor: function.sig.ident.unraw().to_string(),
            }),
        })
        .collect()
}

/// Renders a type the way it would be written by hand (`&'static str`,
/// `Vec<u8>`, `fn(u8) -> bool`) instead of the spaced token output of
/// `quote!(#ty).to_string()`.
pub fn type_text(ty: &Type) -> String {
    let mut out = String::new();
    write_tokens(ty.to_token_stream(), &mut out);
    out
}

fn write_tokens(tokens: TokenStream, out: &mut String) {
    // glue: no space between the previous token and the next one.
    let mut glue = true;
    let mut after_ident = false;
    for tree in tokens {
        let (text, glue_before, glue_after) = match &tree {
            TokenTree::Ident(ident) => (ident.to_string(), false, false),
            TokenTree::Literal(literal) => (literal.to_string(), false, false),
            TokenTree::Punct(punct) => {
                let joint = punct.spacing() == Spacing::Joint;
                let (before, after) = match punct.as_char() {
                    ',' | ';' => (true, false),
                    ':' | '<' => (true, true),
                    '>' => (true, false),
                    '&' | '*' | '\'' | '?' => (false, true),
                    _ => (false, joint),
                };
                (punct.as_char().to_string(), before, after)
            }
            TokenTree::Group(group) => {
                let mut inner = String::new();
                write_tokens(group.stream(), &mut inner);
                match group.delimiter() {
                    Delimiter::Parenthesis => (format!("({inner})"), after_ident, false),
                    Delimiter::Bracket => (format!("[{inner}]"), false, false),
                    Delimiter::Brace => (format!("{{ {inner} }}"), false, false),
                    Delimiter::None => (inner, false, false),
                }
            }
        };
        if !glue && !glue_before {
            out.push(' ');
        }
        out.push_str(&text);
        glue = glue_after;
        after_ident = matches!(tree, TokenTree::Ident(_));
    }
}
