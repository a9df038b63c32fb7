//! Build-script driver: scan a crate, write one file per companion.
//!
//! ```no_run
//! // build.rs
//! fn main() {
//!     let report = enum_enhancer_codegen::Builder::builder()
//!         .crate_root("src/lib.rs")
//!         .build()
//!         .run()
//!         .expect("crate root is readable");
//!     assert!(report.is_success());
//! }
//! ```
//!
//! Each `#[companion]` enum in `crate::calendar` then gets
//! `$OUT_DIR/crate.calendar.<Enum>_.rs`, pulled in next to the enum with
//! `include!(concat!(env!("OUT_DIR"), "/crate.calendar.Quarter_.rs"));`.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use typed_builder::TypedBuilder;

use crate::{
    Companion,
    emit::{CargoDiagnostics, DiagnosticSink, Emitter, FileEmitter},
    enhance,
    errors::{EnhanceError, EnhanceResult, IO_ERROR_DIAGNOSTIC},
    generate::{Generator, GeneratorConfig},
    scan::{BUILD_MARKER, ExternalModule, ModuleScanner},
};

#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct Builder {
    /// `src/lib.rs` or `src/main.rs` of the crate to scan.
    #[builder(setter(into))]
    pub crate_root: PathBuf,

    /// Module path of `crate_root`.
    #[builder(default = String::from("crate"), setter(into))]
    pub root_namespace: String,

    /// Where companions are written. Falls back to `$OUT_DIR`.
    #[builder(default, setter(strip_option, into))]
    pub out_dir: Option<PathBuf>,

    /// Attribute marking the enums to enhance.
    #[builder(default = String::from(BUILD_MARKER), setter(into))]
    pub marker: String,

    #[builder(default)]
    pub generator: GeneratorConfig,

    /// Print `cargo:rerun-if-changed=` for every scanned file.
    #[builder(default = true)]
    pub rerun_if_changed: bool,
}

/// Outcome of one [`Builder::run`].
#[derive(Debug, Default)]
pub struct BuildReport {
    pub generated: Vec<PathBuf>,
    /// Marked items that are not enums, by module path.
    pub skipped: Vec<String>,
    pub failures: Vec<EnhanceError>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Builder {
    /// Scans the crate and writes companions to the output directory,
    /// reporting emission failures as cargo warnings.
    pub fn run(&self) -> EnhanceResult<BuildReport> {
        let out_dir = match &self.out_dir {
            Some(out_dir) => out_dir.clone(),
            None => env::var_os("OUT_DIR")
                .map(PathBuf::from)
                .ok_or(EnhanceError::MissingOutDir)?,
        };
        self.run_with(FileEmitter::new(out_dir), CargoDiagnostics)
    }

    /// Like [`Builder::run`] with caller-provided emission and diagnostics.
    ///
    /// Only an unreadable or unparsable crate root fails the whole run; every
    /// other problem is recorded in the report and the run continues.
    pub fn run_with(
        &self,
        mut emitter: impl Emitter,
        mut diagnostics: impl DiagnosticSink,
    ) -> EnhanceResult<BuildReport> {
        let generator = Generator::new(self.generator.clone());
        let mut report = BuildReport::default();
        let mut pending = vec![(self.crate_root.clone(), self.root_namespace.clone())];
        let mut is_root = true;

        while let Some((path, namespace)) = pending.pop() {
            let file = match self.read_source(&path) {
                Ok(file) => file,
                Err(e) if is_root => return Err(e),
                Err(e) => {
                    warn!("{e}");
                    report.failures.push(e);
                    continue;
                }
            };
            is_root = false;

            let scanner = ModuleScanner::new(&namespace, &self.marker).scan(&file);
            for declaration in &scanner.declarations {
                match enhance(declaration, &generator) {
                    Ok(Some(companion)) => {
                        self.emit(companion, &mut emitter, &mut diagnostics, &mut report)
                    }
                    Ok(None) => {
                        debug!("Skipped {}", declaration.display_path());
                        report.skipped.push(declaration.display_path());
                    }
                    Err(e) => {
                        warn!("{}: {e}", declaration.display_path());
                        report.failures.push(e.into());
                    }
                }
            }

            // Reverse so modules are processed in declaration order.
            for module in scanner.external_modules.iter().rev() {
                match resolve_module(&path, module) {
                    Some(child) => pending.push((child, module.namespace.clone())),
                    None => warn!(
                        "No source file found for module `{}`; skipping it",
                        module.namespace
                    ),
                }
            }
        }

        info!(
            "Generated {} companion(s), skipped {}, {} failure(s)",
            report.generated.len(),
            report.skipped.len(),
            report.failures.len()
        );
        Ok(report)
    }

    fn read_source(&self, path: &Path) -> EnhanceResult<syn::File> {
        if self.rerun_if_changed {
            println!("cargo:rerun-if-changed={}", path.display());
        }
        let source = fs::read_to_string(path).map_err(|source| EnhanceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        syn::parse_file(&source).map_err(|source| EnhanceError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn emit(
        &self,
        companion: Companion,
        emitter: &mut impl Emitter,
        diagnostics: &mut impl DiagnosticSink,
        report: &mut BuildReport,
    ) {
        match emitter.emit(&companion.qualified_name, &companion.text) {
            Ok(path) => report.generated.push(path),
            Err(source) => {
                diagnostics.error(IO_ERROR_DIAGNOSTIC);
                report.failures.push(EnhanceError::Emission {
                    qualified_name: companion.qualified_name,
                    source,
                });
            }
        }
    }
}

/// Directory holding the children of the module defined by `file`.
fn module_dir(file: &Path) -> PathBuf {
    let parent = file.parent().unwrap_or(Path::new("")).to_path_buf();
    match file.file_name().and_then(|name| name.to_str()) {
        Some("lib.rs" | "main.rs" | "mod.rs") => parent,
        _ => match file.file_stem() {
            Some(stem) => parent.join(stem),
            None => parent,
        },
    }
}

/// Locates the file of `mod name;` declared in `file`.
fn resolve_module(file: &Path, module: &ExternalModule) -> Option<PathBuf> {
    if let Some(path_attr) = &module.path_attr {
        let base = if module.inline_path.is_empty() {
            file.parent().unwrap_or(Path::new("")).to_path_buf()
        } else {
            module.inline_path.iter().fold(module_dir(file), |dir, segment| dir.join(segment))
        };
        let candidate = base.join(path_attr);
        return candidate.is_file().then_some(candidate);
    }

    let dir = module
        .inline_path
        .iter()
        .fold(module_dir(file), |dir, segment| dir.join(segment));
    [
        dir.join(format!("{}.rs", module.name)),
        dir.join(&module.name).join("mod.rs"),
    ]
    .into_iter()
    .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_dirs_follow_the_2018_layout() {
        assert_eq!(module_dir(Path::new("src/lib.rs")), PathBuf::from("src"));
        assert_eq!(module_dir(Path::new("src/main.rs")), PathBuf::from("src"));
        assert_eq!(
            module_dir(Path::new("src/calendar/mod.rs")),
            PathBuf::from("src/calendar")
        );
        assert_eq!(
            module_dir(Path::new("src/calendar.rs")),
            PathBuf::from("src/calendar")
        );
    }

    #[test]
    fn resolves_sibling_files_nested_dirs_and_path_attributes() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("calendar/fiscal"))?;
        fs::create_dir_all(src.join("seasons"))?;
        fs::create_dir_all(src.join("gen"))?;
        fs::write(src.join("calendar.rs"), "")?;
        fs::write(src.join("calendar/fiscal/halves.rs"), "")?;
        fs::write(src.join("seasons/mod.rs"), "")?;
        fs::write(src.join("gen/weekdays.rs"), "")?;

        let module = |name: &str, inline_path: &[&str], path_attr: Option<&str>| ExternalModule {
            namespace: format!("crate::{name}"),
            inline_path: inline_path.iter().map(|s| s.to_string()).collect(),
            name: name.to_string(),
            path_attr: path_attr.map(str::to_string),
        };
        let lib = src.join("lib.rs");

        assert_eq!(
            resolve_module(&lib, &module("calendar", &[], None)),
            Some(src.join("calendar.rs"))
        );
        assert_eq!(
            resolve_module(&lib, &module("seasons", &[], None)),
            Some(src.join("seasons/mod.rs"))
        );
        assert_eq!(
            resolve_module(&src.join("calendar.rs"), &module("halves", &["fiscal"], None)),
            Some(src.join("calendar/fiscal/halves.rs"))
        );
        assert_eq!(
            resolve_module(&lib, &module("weekdays", &[], Some("gen/weekdays.rs"))),
            Some(src.join("gen/weekdays.rs"))
        );
        assert_eq!(resolve_module(&lib, &module("missing", &[], None)), None);
        Ok(())
    }

    #[test]
    fn run_without_out_dir_needs_the_environment() {
        let builder = Builder::builder()
            .crate_root("does/not/matter.rs")
            .rerun_if_changed(false)
            .build();
        if env::var_os("OUT_DIR").is_none() {
            assert!(matches!(builder.run(), Err(EnhanceError::MissingOutDir)));
        }
    }
}
