use enum_enhancer_codegen::Declaration;
use proc_macro::TokenStream;
use quote::quote;
use syn::{Item, parse_macro_input, visit_mut::VisitMut};

use crate::{
    errors::MacroError,
    parse::attributes::EnhancerArgs,
    visitors::module_visitor::{ModuleEnhancer, companion_items},
};

mod errors;
mod parse;
mod visitors;

/// Generates a companion type `<Enum>_` for C-like enums.
///
/// On an inline module, every enum inside it (nested inline modules included)
/// marked `#[enum_enhancer]` gets a companion appended to the module that
/// declares it. The companion carries:
///
/// - one `&str` constant per variant, named after it;
/// - `from<Param>(value)` for every parameter of the enum's constructors
///   (inherent associated functions returning `Self`), matching against the
///   `get<Param>()` accessor the enum must provide;
/// - `associate(transform)`, mapping every variant to a value;
/// - `enumList()`, every variant in declaration order.
///
/// ```ignore
/// use enum_enhancer::enum_enhancer;
///
/// #[enum_enhancer]
/// mod calendar {
///     #[enum_enhancer]
///     #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
///     pub enum Quarter { Q1, Q2, Q3, Q4 }
///
///     impl Quarter {
///         pub const fn new(quarter: i32) -> Self {
///             match quarter {
///                 1 => Quarter::Q1,
///                 2 => Quarter::Q2,
///                 3 => Quarter::Q3,
///                 _ => Quarter::Q4,
///             }
///         }
///
///         #[allow(non_snake_case)]
///         pub fn getQuarter(&self) -> i32 {
///             *self as i32 + 1
///         }
///     }
/// }
///
/// use calendar::{Quarter, Quarter_};
///
/// assert_eq!(Quarter_::Q3, "Q3");
/// assert_eq!(Quarter_::fromQuarter(2), Ok(Quarter::Q2));
/// assert_eq!(Quarter_::enumList().len(), 4);
/// ```
///
/// Directly on an enum the companion is emitted right after it. No
/// constructors are visible from there, so no `from<Param>` lookups are
/// generated.
///
/// # Arguments
///
/// - `namespace = "crate::calendar"` names the module path recorded in the
///   companion; defaults to the module's own name.
/// - `runtime = "::enum_enhancer"` is the path of the crate exporting
///   `NoConstantFound`.
#[proc_macro_attribute]
pub fn enum_enhancer(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut enhancer_args = EnhancerArgs::default();
    let arg_parser = syn::meta::parser(|meta| enhancer_args.parse(meta));
    parse_macro_input!(args with arg_parser);
    let item = parse_macro_input!(input as Item);

    match item {
        Item::Mod(mut module) => {
            if module.content.is_none() {
                return MacroError::OutOfLineModule(module.ident.to_string())
                    .spanned(&module)
                    .to_compile_error()
                    .into();
            }
            let mut enhancer =
                ModuleEnhancer::new(enhancer_args.generator(), enhancer_args.namespace.clone());
            enhancer.visit_item_mod_mut(&mut module);
            let errors = enhancer.errors.map(|e| e.to_compile_error());
            quote! {
                #module
                #errors
            }
            .into()
        }
        Item::Enum(_) => {
            let namespace = enhancer_args.namespace.as_deref().unwrap_or("self");
            let declaration = Declaration::new(namespace, &item);
            match companion_items(&declaration, &enhancer_args.generator()) {
                Ok(companions) => quote! {
                    #item
                    #(#companions)*
                }
                .into(),
                Err(e) => {
                    let error = e.to_compile_error();
                    quote! {
                        #item
                        #error
                    }
                    .into()
                }
            }
        }
        other => quote!(#other).into(),
    }
}

/// Marks an enum for the build-script `Builder`; expands to the item
/// unchanged.
#[proc_macro_attribute]
pub fn companion(_args: TokenStream, input: TokenStream) -> TokenStream {
    input
}
