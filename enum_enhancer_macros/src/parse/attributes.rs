//! Arguments of `#[enum_enhancer(...)]`.

use enum_enhancer_codegen::{Generator, GeneratorConfig};
use syn::{LitStr, meta::ParseNestedMeta};

/// `#[enum_enhancer(namespace = "crate::calendar", runtime = "::enum_enhancer")]`
///
/// Both keys are optional.
#[derive(Debug, Default)]
pub struct EnhancerArgs {
    pub namespace: Option<String>,
    pub runtime: Option<String>,
}

impl EnhancerArgs {
    pub fn parse(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("namespace") {
            let namespace = meta.value()?.parse::<LitStr>()?;
            if namespace.value().trim().is_empty() {
                return Err(syn::Error::new(namespace.span(), "namespace must not be empty"));
            }
            self.namespace = Some(namespace.value());
            Ok(())
        } else if meta.path.is_ident("runtime") {
            self.runtime = Some(meta.value()?.parse::<LitStr>()?.value());
            Ok(())
        } else {
            Err(meta.error("expected `namespace = \"...\"` or `runtime = \"...\"`"))
        }
    }

    pub fn generator(&self) -> Generator {
        let config = match &self.runtime {
            Some(runtime) => GeneratorConfig::builder().runtime_crate(runtime.as_str()).build(),
            None => GeneratorConfig::default(),
        };
        Generator::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse::Parser;

    fn parse(tokens: proc_macro2::TokenStream) -> syn::Result<EnhancerArgs> {
        let mut args = EnhancerArgs::default();
        syn::meta::parser(|meta| args.parse(meta)).parse2(tokens)?;
        Ok(args)
    }

    #[test]
    fn both_keys_are_optional() {
        let args = parse(quote::quote!()).unwrap();
        assert_eq!(args.namespace, None);
        assert_eq!(args.generator().config().runtime_crate, "::enum_enhancer");

        let args =
            parse(quote::quote!(namespace = "crate::calendar", runtime = "crate::rt")).unwrap();
        assert_eq!(args.namespace.as_deref(), Some("crate::calendar"));
        assert_eq!(args.generator().config().runtime_crate, "crate::rt");
    }

    #[test]
    fn rejects_unknown_keys_and_empty_namespaces() {
        assert!(parse(quote::quote!(prefix = "x")).is_err());
        assert!(parse(quote::quote!(namespace = "  ")).is_err());
        assert!(parse(quote::quote!(namespace = 3)).is_err());
    }
}
