use std::{io, path::PathBuf};

use thiserror::Error;

pub type EnhanceResult<T> = Result<T, EnhanceError>;

/// Fixed text reported through a [`DiagnosticSink`](crate::emit::DiagnosticSink)
/// when writing a companion fails.
pub const IO_ERROR_DIAGNOSTIC: &str = "An I/O error occurred";

#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    #[error("Failed to read `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },
    #[error("An I/O error occurred while emitting `{qualified_name}`")]
    Emission {
        qualified_name: String,
        #[source]
        source: io::Error,
    },
    #[error("No output directory configured and OUT_DIR is not set")]
    MissingOutDir,
}

/// A declaration or descriptor that cannot be turned into a companion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("Namespace must not be empty")]
    EmptyNamespace,
    #[error("`{0}` is not a valid identifier")]
    NotAnIdentifier(String),
    #[error("Parameter `{0}` has an empty type")]
    EmptyParameterType(String),
    #[error("`{0}` declares generic parameters; generic enums cannot be enhanced")]
    GenericType(String),
    #[error("Variant `{variant}` of `{type_name}` carries fields; only unit variants can be enhanced")]
    NonUnitVariant { type_name: String, variant: String },
    #[error("A parameter of constructor `{type_name}::{constructor}` is not a plain identifier")]
    PatternParameter {
        type_name: String,
        constructor: String,
    },
}
