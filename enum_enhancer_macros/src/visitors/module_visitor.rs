use enum_enhancer_codegen::{
    Companion, Declaration, Generator, INLINE_MARKER, enhance,
    scan::{annotated_declarations, strip_marker},
};
use syn::{Item, ItemMod, ext::IdentExt, visit_mut::VisitMut};

use crate::errors::{MacroError, push_error};

/// Appends a companion next to every marked enum of an inline module tree
/// and strips the markers.
///
/// Every level of nesting is handled on its own: a companion lands in the
/// module declaring its enum, so the enum and its constructors' accessors
/// resolve without imports.
pub struct ModuleEnhancer {
    generator: Generator,
    namespace: Vec<String>,
    /// A caller-supplied namespace replaces the root module's own name.
    named_root: bool,
    pub errors: Option<syn::Error>,
}

impl ModuleEnhancer {
    pub fn new(generator: Generator, namespace: Option<String>) -> Self {
        Self {
            generator,
            named_root: namespace.is_some(),
            namespace: namespace.into_iter().collect(),
            errors: None,
        }
    }

    fn companions(&mut self, items: &[Item]) -> Vec<Item> {
        let namespace = self.namespace.join("::");
        let mut companions = Vec::new();
        for declaration in annotated_declarations(items, &namespace, INLINE_MARKER) {
            match companion_items(&declaration, &self.generator) {
                Ok(parsed) => companions.extend(parsed),
                Err(e) => push_error(&mut self.errors, e),
            }
        }
        companions
    }
}

impl VisitMut for ModuleEnhancer {
    fn visit_item_mod_mut(&mut self, module: &mut ItemMod) {
        // Out-of-line children are left for the compiler to expand on their own.
        let Some((_, items)) = &mut module.content else {
            return;
        };
        let pushed = if self.named_root {
            self.named_root = false;
            false
        } else {
            self.namespace.push(module.ident.unraw().to_string());
            true
        };

        let companions = self.companions(items);
        for item in items.iter_mut() {
            strip_marker(item, INLINE_MARKER);
            if let Item::Mod(child) = item {
                self.visit_item_mod_mut(child);
            }
        }
        items.extend(companions);

        if pushed {
            self.namespace.pop();
        }
    }
}

/// Companion items of one declaration; empty for anything but an enum.
pub fn companion_items(
    declaration: &Declaration<'_>,
    generator: &Generator,
) -> syn::Result<Vec<Item>> {
    let span = declaration
        .ident()
        .map_or_else(proc_macro2::Span::call_site, syn::Ident::span);
    let companion = match enhance(declaration, generator) {
        Ok(Some(companion)) => companion,
        Ok(None) => return Ok(Vec::new()),
        Err(e) => return Err(syn::Error::new(span, MacroError::from(e))),
    };
    let Companion {
        qualified_name,
        text,
        ..
    } = companion;
    syn::parse_str::<syn::File>(text.as_str())
        .map(|file| file.items)
        .map_err(|source| {
            syn::Error::new(
                span,
                MacroError::GeneratedSource {
                    name: qualified_name,
                    source,
                },
            )
        })
}
