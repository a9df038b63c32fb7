use enum_enhancer_codegen::{Builder, EnhanceError};

fn main() -> Result<(), EnhanceError> {
    let report = Builder::builder().crate_root("src/lib.rs").build().run()?;
    if let Some(failure) = report.failures.into_iter().next() {
        return Err(failure);
    }
    Ok(())
}
