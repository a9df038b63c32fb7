//! Writing companions and reporting emission failures.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, error};

use crate::generate::GeneratedText;

/// Destination for generated companions.
pub trait Emitter {
    /// Stores `text` under `qualified_name` (`crate.calendar.Quarter_`) and
    /// returns where it went.
    fn emit(&mut self, qualified_name: &str, text: &GeneratedText) -> io::Result<PathBuf>;
}

/// Build-console sink for emission diagnostics.
pub trait DiagnosticSink {
    fn error(&mut self, message: &str);
}

/// Writes `<out_dir>/<qualified_name>.rs`.
#[derive(Debug, Clone)]
pub struct FileEmitter {
    out_dir: PathBuf,
}

impl FileEmitter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn path_for(&self, qualified_name: &str) -> PathBuf {
        self.out_dir.join(format!("{qualified_name}.rs"))
    }
}

impl Emitter for FileEmitter {
    fn emit(&mut self, qualified_name: &str, text: &GeneratedText) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.out_dir)?;
        let path = self.path_for(qualified_name);
        fs::write(&path, text.as_bytes())?;
        debug!("Wrote {}", path.display());
        Ok(path)
    }
}

/// Reports through `cargo:warning=` lines, the only diagnostic channel a
/// build script has, and mirrors each message to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct CargoDiagnostics;

impl DiagnosticSink for CargoDiagnostics {
    fn error(&mut self, message: &str) {
        error!("{message}");
        println!("cargo:warning={message}");
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn error(&mut self, message: &str) {
        (**self).error(message);
    }
}

impl<T: Emitter + ?Sized> Emitter for &mut T {
    fn emit(&mut self, qualified_name: &str, text: &GeneratedText) -> io::Result<PathBuf> {
        (**self).emit(qualified_name, text)
    }
}
