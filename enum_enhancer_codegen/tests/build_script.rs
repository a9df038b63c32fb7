use std::{fs, io, path::PathBuf};

use enum_enhancer_codegen::{
    Builder, DiagnosticSink, EnhanceError, Emitter, GeneratedText, IO_ERROR_DIAGNOSTIC,
};

const LIB_RS: &str = r#"
pub mod calendar;
mod platform;

#[companion]
pub struct NotAnEnum;
"#;

const CALENDAR_RS: &str = r#"
#[companion]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const fn new(quarter: i32) -> Self {
        match quarter {
            1 => Quarter::Q1,
            2 => Quarter::Q2,
            3 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }

    #[allow(non_snake_case)]
    pub fn getQuarter(&self) -> i32 {
        *self as i32 + 1
    }
}

pub mod fiscal;
"#;

const FISCAL_RS: &str = r#"
#[companion]
pub enum Half {
    H1,
    H2,
}

pub enum Unmarked {
    A,
}
"#;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct Crate {
    _dir: tempfile::TempDir,
    src: PathBuf,
    root: PathBuf,
    out_dir: PathBuf,
}

fn write_crate() -> anyhow::Result<Crate> {
    let dir = tempfile::tempdir()?;
    let src = dir.path().join("src");
    fs::create_dir_all(src.join("calendar"))?;
    fs::write(src.join("lib.rs"), LIB_RS)?;
    fs::write(src.join("calendar.rs"), CALENDAR_RS)?;
    fs::write(src.join("calendar/fiscal.rs"), FISCAL_RS)?;
    Ok(Crate {
        root: src.join("lib.rs"),
        out_dir: dir.path().join("out"),
        src,
        _dir: dir,
    })
}

fn builder(krate: &Crate) -> Builder {
    Builder::builder()
        .crate_root(&krate.root)
        .out_dir(&krate.out_dir)
        .rerun_if_changed(false)
        .build()
}

#[derive(Default)]
struct RecordingDiagnostics(Vec<String>);

impl DiagnosticSink for RecordingDiagnostics {
    fn error(&mut self, message: &str) {
        self.0.push(message.to_string());
    }
}

/// Fails for every qualified name containing `fail_on`, writes nothing.
struct FlakyEmitter {
    fail_on: &'static str,
    emitted: Vec<String>,
}

impl Emitter for FlakyEmitter {
    fn emit(&mut self, qualified_name: &str, _text: &GeneratedText) -> io::Result<PathBuf> {
        if qualified_name.contains(self.fail_on) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.emitted.push(qualified_name.to_string());
        Ok(PathBuf::from(qualified_name))
    }
}

#[test]
fn writes_one_file_per_marked_enum() -> anyhow::Result<()> {
    init_logging();
    let krate = write_crate()?;
    let report = builder(&krate).run()?;

    assert!(report.is_success(), "{:?}", report.failures);
    assert_eq!(
        report.generated,
        [
            krate.out_dir.join("crate.calendar.Quarter_.rs"),
            krate.out_dir.join("crate.calendar.fiscal.Half_.rs"),
        ]
    );
    assert_eq!(report.skipped, ["crate::NotAnEnum"]);

    let quarter = fs::read_to_string(krate.out_dir.join("crate.calendar.Quarter_.rs"))?;
    assert!(quarter.starts_with("// namespace crate::calendar\n\n"));
    assert!(quarter.contains("pub fn fromQuarter(quarter: i32)"));
    assert!(quarter.contains("[Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4]"));

    let half = fs::read_to_string(krate.out_dir.join("crate.calendar.fiscal.Half_.rs"))?;
    assert!(half.contains("pub const H2: &'static str = \"H2\";"));
    assert!(!half.contains("pub fn from"));
    assert!(!krate.out_dir.join("crate.calendar.fiscal.Unmarked_.rs").exists());
    Ok(())
}

#[test]
fn repeated_runs_produce_identical_files() -> anyhow::Result<()> {
    let krate = write_crate()?;
    let path = krate.out_dir.join("crate.calendar.Quarter_.rs");

    builder(&krate).run()?;
    let first = fs::read(&path)?;
    builder(&krate).run()?;
    assert_eq!(fs::read(&path)?, first);
    Ok(())
}

#[test]
fn emission_failure_is_reported_and_isolated() -> anyhow::Result<()> {
    init_logging();
    let krate = write_crate()?;
    let mut emitter = FlakyEmitter {
        fail_on: "Quarter",
        emitted: Vec::new(),
    };
    let mut diagnostics = RecordingDiagnostics::default();

    let report = builder(&krate).run_with(&mut emitter, &mut diagnostics)?;

    assert_eq!(emitter.emitted, ["crate.calendar.fiscal.Half_"]);
    assert_eq!(diagnostics.0, [IO_ERROR_DIAGNOSTIC]);
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        &report.failures[0],
        EnhanceError::Emission { qualified_name, .. } if qualified_name == "crate.calendar.Quarter_"
    ));
    Ok(())
}

#[test]
fn invalid_enums_do_not_block_their_siblings() -> anyhow::Result<()> {
    let krate = write_crate()?;
    fs::write(
        &krate.root,
        r#"
        pub mod calendar;

        #[companion]
        pub enum Shape { Point, Circle { radius: f64 } }
        "#,
    )?;

    let report = builder(&krate).run()?;

    assert_eq!(report.generated.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(report.failures[0], EnhanceError::InvalidArgument(_)));
    Ok(())
}

#[test]
fn unparsable_child_module_is_recorded() -> anyhow::Result<()> {
    let krate = write_crate()?;
    fs::write(krate.src.join("calendar/fiscal.rs"), "pub enum {")?;

    let report = builder(&krate).run()?;

    assert_eq!(
        report.generated,
        [krate.out_dir.join("crate.calendar.Quarter_.rs")]
    );
    assert!(matches!(report.failures[..], [EnhanceError::Parse { .. }]));
    Ok(())
}

#[test]
fn unreadable_crate_root_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let result = Builder::builder()
        .crate_root(dir.path().join("src/lib.rs"))
        .out_dir(dir.path().join("out"))
        .rerun_if_changed(false)
        .build()
        .run();
    assert!(matches!(result, Err(EnhanceError::Read { .. })));
}

#[test]
fn custom_marker_and_namespace() -> anyhow::Result<()> {
    let krate = write_crate()?;
    fs::write(
        &krate.root,
        r#"
        #[enhance_me]
        pub enum Weekday { Monday, Tuesday }

        #[companion]
        pub enum Ignored { A }
        "#,
    )?;

    let report = Builder::builder()
        .crate_root(&krate.root)
        .root_namespace("my_crate")
        .marker("enhance_me")
        .out_dir(&krate.out_dir)
        .rerun_if_changed(false)
        .build()
        .run()?;

    assert_eq!(report.generated, [krate.out_dir.join("my_crate.Weekday_.rs")]);
    Ok(())
}
