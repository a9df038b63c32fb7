//! Finding marked declarations in a `syn` syntax tree.

use syn::{Attribute, File, Ident, Item, ItemImpl, ItemMod, Type, ext::IdentExt, visit::Visit};

/// Marker expanded inline by the `#[enum_enhancer]` attribute macro.
pub const INLINE_MARKER: &str = "enum_enhancer";
/// Marker picked up by the build-script [`Builder`](crate::builder::Builder).
pub const BUILD_MARKER: &str = "companion";

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum DeclarationKind {
    Enum,
    Struct,
    Union,
    Trait,
    Fn,
    Mod,
    TypeAlias,
    Other,
}

impl DeclarationKind {
    pub fn of(item: &Item) -> Self {
        match item {
            Item::Enum(_) => DeclarationKind::Enum,
            Item::Struct(_) => DeclarationKind::Struct,
            Item::Union(_) => DeclarationKind::Union,
            Item::Trait(_) => DeclarationKind::Trait,
            Item::Fn(_) => DeclarationKind::Fn,
            Item::Mod(_) => DeclarationKind::Mod,
            Item::Type(_) => DeclarationKind::TypeAlias,
            _ => DeclarationKind::Other,
        }
    }
}

/// Handle to one marked item and the inherent impls declared next to it.
pub struct Declaration<'ast> {
    pub namespace: String,
    pub item: &'ast Item,
    pub impls: Vec<&'ast ItemImpl>,
}

impl<'ast> Declaration<'ast> {
    pub fn new(namespace: impl Into<String>, item: &'ast Item) -> Self {
        Self {
            namespace: namespace.into(),
            item,
            impls: Vec::new(),
        }
    }

    pub fn with_impls(mut self, impls: Vec<&'ast ItemImpl>) -> Self {
        self.impls = impls;
        self
    }

    pub fn kind(&self) -> DeclarationKind {
        DeclarationKind::of(self.item)
    }

    pub fn ident(&self) -> Option<&'ast Ident> {
        item_ident(self.item)
    }

    /// `crate::calendar::Quarter`, used in logs and reports.
    pub fn display_path(&self) -> String {
        match self.ident() {
            Some(ident) => format!("{}::{}", self.namespace, ident),
            None => format!("{}::<{}>", self.namespace, self.kind()),
        }
    }
}

pub fn item_ident(item: &Item) -> Option<&Ident> {
    match item {
        Item::Enum(i) => Some(&i.ident),
        Item::Struct(i) => Some(&i.ident),
        Item::Union(i) => Some(&i.ident),
        Item::Trait(i) => Some(&i.ident),
        Item::Fn(i) => Some(&i.sig.ident),
        Item::Mod(i) => Some(&i.ident),
        Item::Type(i) => Some(&i.ident),
        Item::Const(i) => Some(&i.ident),
        Item::Static(i) => Some(&i.ident),
        Item::TraitAlias(i) => Some(&i.ident),
        _ => None,
    }
}

pub fn item_attrs(item: &Item) -> &[Attribute] {
    match item {
        Item::Const(i) => &i.attrs,
        Item::Enum(i) => &i.attrs,
        Item::ExternCrate(i) => &i.attrs,
        Item::Fn(i) => &i.attrs,
        Item::ForeignMod(i) => &i.attrs,
        Item::Impl(i) => &i.attrs,
        Item::Macro(i) => &i.attrs,
        Item::Mod(i) => &i.attrs,
        Item::Static(i) => &i.attrs,
        Item::Struct(i) => &i.attrs,
        Item::Trait(i) => &i.attrs,
        Item::TraitAlias(i) => &i.attrs,
        Item::Type(i) => &i.attrs,
        Item::Union(i) => &i.attrs,
        Item::Use(i) => &i.attrs,
        _ => &[],
    }
}

pub fn item_attrs_mut(item: &mut Item) -> Option<&mut Vec<Attribute>> {
    match item {
        Item::Const(i) => Some(&mut i.attrs),
        Item::Enum(i) => Some(&mut i.attrs),
        Item::ExternCrate(i) => Some(&mut i.attrs),
        Item::Fn(i) => Some(&mut i.attrs),
        Item::ForeignMod(i) => Some(&mut i.attrs),
        Item::Impl(i) => Some(&mut i.attrs),
        Item::Macro(i) => Some(&mut i.attrs),
        Item::Mod(i) => Some(&mut i.attrs),
        Item::Static(i) => Some(&mut i.attrs),
        Item::Struct(i) => Some(&mut i.attrs),
        Item::Trait(i) => Some(&mut i.attrs),
        Item::TraitAlias(i) => Some(&mut i.attrs),
        Item::Type(i) => Some(&mut i.attrs),
        Item::Union(i) => Some(&mut i.attrs),
        Item::Use(i) => Some(&mut i.attrs),
        _ => None,
    }
}

/// Matches `#[marker]` as well as a path ending in it (`#[enum_enhancer::marker]`).
pub fn is_marker(attr: &Attribute, marker: &str) -> bool {
    attr.path()
        .segments
        .last()
        .is_some_and(|segment| segment.ident == marker)
}

pub fn has_marker(item: &Item, marker: &str) -> bool {
    item_attrs(item).iter().any(|attr| is_marker(attr, marker))
}

pub fn strip_marker(item: &mut Item, marker: &str) {
    if let Some(attrs) = item_attrs_mut(item) {
        attrs.retain(|attr| !is_marker(attr, marker));
    }
}

/// Inherent `impl <ident>` blocks among `items`.
pub fn inherent_impls<'ast>(items: &'ast [Item], ident: &Ident) -> Vec<&'ast ItemImpl> {
    items
        .iter()
        .filter_map(|item| match item {
            Item::Impl(item_impl) if item_impl.trait_.is_none() => Some(item_impl),
            _ => None,
        })
        .filter(|item_impl| match item_impl.self_ty.as_ref() {
            Type::Path(type_path) => {
                type_path.qself.is_none()
                    && type_path
                        .path
                        .segments
                        .last()
                        .is_some_and(|segment| segment.ident == *ident)
            }
            _ => false,
        })
        .collect()
}

/// Every item of one module level carrying `marker`, each paired with the
/// inherent impls found at the same level.
pub fn annotated_declarations<'ast>(
    items: &'ast [Item],
    namespace: &str,
    marker: &str,
) -> Vec<Declaration<'ast>> {
    items
        .iter()
        .filter(|item| has_marker(item, marker))
        .map(|item| {
            let impls = item_ident(item)
                .map(|ident| inherent_impls(items, ident))
                .unwrap_or_default();
            Declaration::new(namespace, item).with_impls(impls)
        })
        .collect()
}

/// An out-of-line `mod name;` found while scanning a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalModule {
    pub namespace: String,
    /// Inline modules between the file and the declaration.
    pub inline_path: Vec<String>,
    pub name: String,
    /// Value of a `#[path = "..."]` attribute, if any.
    pub path_attr: Option<String>,
}

/// Walks one parsed file, collecting marked declarations in every inline
/// module and the out-of-line modules it declares.
pub struct ModuleScanner<'ast> {
    marker: &'ast str,
    namespace: Vec<String>,
    inline_path: Vec<String>,
    pub declarations: Vec<Declaration<'ast>>,
    pub external_modules: Vec<ExternalModule>,
}

impl<'ast> ModuleScanner<'ast> {
    pub fn new(namespace: &str, marker: &'ast str) -> Self {
        Self {
            marker,
            namespace: namespace.split("::").map(str::to_string).collect(),
            inline_path: Vec::new(),
            declarations: Vec::new(),
            external_modules: Vec::new(),
        }
    }

    pub fn scan(mut self, file: &'ast File) -> Self {
        self.visit_file(file);
        self
    }

    fn current_namespace(&self) -> String {
        self.namespace.join("::")
    }

    fn collect_level(&mut self, items: &'ast [Item]) {
        let namespace = self.current_namespace();
        self.declarations
            .extend(annotated_declarations(items, &namespace, self.marker));
    }
}

impl<'ast> Visit<'ast> for ModuleScanner<'ast> {
    fn visit_file(&mut self, i: &'ast File) {
        self.collect_level(&i.items);
        for item in &i.items {
            if let Item::Mod(item_mod) = item {
                self.visit_item_mod(item_mod);
            }
        }
    }

    fn visit_item_mod(&mut self, i: &'ast ItemMod) {
        let name = i.ident.unraw().to_string();
        let Some((_, items)) = &i.content else {
            self.external_modules.push(ExternalModule {
                namespace: format!("{}::{}", self.current_namespace(), name),
                inline_path: self.inline_path.clone(),
                name,
                path_attr: path_attribute(&i.attrs),
            });
            return;
        };
        self.namespace.push(name.clone());
        self.inline_path.push(name);
        self.collect_level(items);
        for item in items {
            if let Item::Mod(item_mod) = item {
                self.visit_item_mod(item_mod);
            }
        }
        self.inline_path.pop();
        self.namespace.pop();
    }
}

fn path_attribute(attrs: &[Attribute]) -> Option<String> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident("path"))
        .and_then(|attr| attr.meta.require_name_value().ok())
        .and_then(|name_value| match &name_value.value {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(lit),
                ..
            }) => Some(lit.value()),
            _ => None,
        })
}
