use enum_enhancer_codegen::InvalidArgument;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MacroError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    #[error(
        "`#[enum_enhancer]` cannot see the items of `mod {0};`; give the module an inline body or generate its companions from build.rs"
    )]
    OutOfLineModule(String),
    #[error("Generated companion `{name}` does not parse: {source}")]
    GeneratedSource {
        name: String,
        #[source]
        source: syn::Error,
    },
}

impl MacroError {
    /// Compile error pointing at `tokens`.
    pub fn spanned(self, tokens: impl quote::ToTokens) -> syn::Error {
        syn::Error::new_spanned(tokens, self)
    }
}

/// Folds `error` into `errors` so every problem is reported at once.
pub fn push_error(errors: &mut Option<syn::Error>, error: syn::Error) {
    match errors {
        Some(existing) => existing.combine(error),
        None => *errors = Some(error),
    }
}
