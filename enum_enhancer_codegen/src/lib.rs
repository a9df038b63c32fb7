//! # enum_enhancer_codegen
//!
//! Generation core behind the `#[enum_enhancer]` attribute and the
//! build-script [`Builder`].
//!
//! The pipeline has two explicit steps:
//!
//! 1. [`extract`] reads a marked [`Declaration`] (an enum plus the inherent
//!    impls next to it) into an immutable [`TypeDescriptor`];
//! 2. [`generate`] renders the descriptor's companion type as Rust source.
//!
//! ```
//! use enum_enhancer_codegen::{ParameterDescriptor, TypeDescriptor, generate};
//!
//! let descriptor = TypeDescriptor::new("crate::calendar", "Quarter")
//!     .with_constants(["Q1", "Q2", "Q3", "Q4"])
//!     .with_parameter(ParameterDescriptor::new("quarter", "i32"));
//! let text = generate(&descriptor).unwrap();
//! assert!(text.as_str().contains("pub const Q3: &'static str = \"Q3\";"));
//! assert!(text.as_str().contains("pub fn fromQuarter(quarter: i32)"));
//! ```

pub mod builder;
pub mod descriptor;
pub mod emit;
pub mod errors;
pub mod extract;
pub mod generate;
pub mod naming;
pub mod scan;

pub use builder::{BuildReport, Builder};
pub use descriptor::{ParameterDescriptor, TypeDescriptor};
pub use emit::{CargoDiagnostics, DiagnosticSink, Emitter, FileEmitter};
pub use errors::{EnhanceError, EnhanceResult, IO_ERROR_DIAGNOSTIC, InvalidArgument};
pub use extract::extract;
pub use generate::{GeneratedText, Generator, GeneratorConfig, generate};
pub use scan::{BUILD_MARKER, Declaration, DeclarationKind, INLINE_MARKER};

/// Generated companion of one enum, ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Companion {
    pub descriptor: TypeDescriptor,
    /// `crate.calendar.Quarter_`
    pub qualified_name: String,
    pub text: GeneratedText,
}

/// Runs extract then generate for one declaration.
///
/// `Ok(None)` means the declaration is not an enum and produces nothing.
pub fn enhance(
    declaration: &Declaration<'_>,
    generator: &Generator,
) -> Result<Option<Companion>, InvalidArgument> {
    let Some(descriptor) = extract(declaration)? else {
        return Ok(None);
    };
    let text = generator.generate(&descriptor)?;
    log::debug!(
        "Generated {} for {}",
        descriptor.companion_name(),
        declaration.display_path()
    );
    Ok(Some(Companion {
        qualified_name: descriptor.qualified_name(),
        descriptor,
        text,
    }))
}
