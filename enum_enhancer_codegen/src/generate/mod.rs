//! Companion-type text generation.
//!
//! For an enum `Quarter` in `crate::calendar` with a constructor parameter
//! `quarter: i32` the generator produces:
//!
//! ```text
//! // namespace crate::calendar
//!
//! #[allow(non_camel_case_types)]
//! pub struct Quarter_;
//!
//! #[allow(non_snake_case, non_upper_case_globals, dead_code, private_interfaces)]
//! impl Quarter_ {
//!     pub const Q1: &'static str = "Q1";
//!     ...
//!
//!     pub fn fromQuarter(quarter: i32) -> ::core::result::Result<Quarter, ::enum_enhancer::NoConstantFound> {
//!         ...
//!     }
//!
//!     pub fn associate<E>(...) -> ::std::collections::HashMap<Quarter, E> { ... }
//!
//!     pub fn enumList() -> ::std::vec::Vec<Quarter> { ... }
//!
//!     fn values() -> [Quarter; 4] { ... }
//! }
//! ```

mod writer;

use derive_more::{Display, Into};
use typed_builder::TypedBuilder;

use crate::{
    descriptor::{ParameterDescriptor, TypeDescriptor},
    errors::InvalidArgument,
    naming::{accessor_name, free_binding, lookup_fn_name, render_ident, uncapitalize_first},
};
use writer::SourceWriter;

const RESULT: &str = "::core::result::Result";

/// Rendered source of one companion type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Into)]
pub struct GeneratedText(String);

impl GeneratedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct GeneratorConfig {
    /// Path of the crate exporting `NoConstantFound`.
    #[builder(default = String::from("::enum_enhancer"), setter(into))]
    pub runtime_crate: String,

    /// Spaces per indentation level.
    #[builder(default = 4)]
    pub indent_width: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

/// Generates a companion with the default configuration.
pub fn generate(descriptor: &TypeDescriptor) -> Result<GeneratedText, InvalidArgument> {
    Generator::default().generate(descriptor)
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Validates `descriptor` and renders its companion. Nothing is rendered
    /// for an invalid descriptor.
    pub fn generate(&self, descriptor: &TypeDescriptor) -> Result<GeneratedText, InvalidArgument> {
        descriptor.validate()?;

        // Constants share the impl's value namespace with the helper.
        let constants = descriptor
            .constant_names
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>();
        let values = free_binding("values", &constants);

        let mut w = SourceWriter::new(self.config.indent_width);
        w.line(format!("// namespace {}", descriptor.namespace));
        w.separate();
        w.line("#[allow(non_camel_case_types)]");
        w.line(format!("pub struct {};", descriptor.companion_name()));
        w.separate();
        w.line("#[allow(non_snake_case, non_upper_case_globals, dead_code, private_interfaces)]");
        w.open_block(format!("impl {}", descriptor.companion_name()));

        for constant in &descriptor.constant_names {
            w.line(format!(
                "pub const {}: &'static str = {:?};",
                render_ident(constant),
                constant
            ));
        }
        for parameter in &descriptor.constructor_parameters {
            w.separate();
            self.write_lookup(&mut w, &descriptor.type_name, &values, parameter);
        }
        w.separate();
        write_associate(&mut w, &descriptor.type_name, &values);
        w.separate();
        write_enum_list(&mut w, &descriptor.type_name, &values);
        w.separate();
        write_values(&mut w, descriptor, &values);

        w.close_block();
        Ok(GeneratedText(w.finish()))
    }

    fn write_lookup(
        &self,
        w: &mut SourceWriter,
        type_name: &str,
        values: &str,
        parameter: &ParameterDescriptor,
    ) {
        let runtime = &self.config.runtime_crate;
        let argument = render_ident(&parameter.name);
        let binding = free_binding(&uncapitalize_first(type_name), &[parameter.name.as_str()]);

        w.open_block(format!(
            "pub fn {}({argument}: {}) -> {RESULT}<{type_name}, {runtime}::NoConstantFound>",
            lookup_fn_name(&parameter.name),
            parameter.type_name,
        ));
        w.open_block(format!("for {binding} in Self::{values}()"));
        w.open_block(format!(
            "if {binding}.{}() == {argument}",
            accessor_name(&parameter.name)
        ));
        w.line(format!("return {RESULT}::Ok({binding});"));
        w.close_block();
        w.close_block();
        w.line(format!("{RESULT}::Err({runtime}::NoConstantFound)"));
        w.close_block();
    }
}

fn write_associate(w: &mut SourceWriter, type_name: &str, values: &str) {
    let generic = free_binding("E", &[type_name]);
    let binding = free_binding(&uncapitalize_first(type_name), &["transform", "value"]);

    w.open_block(format!(
        "pub fn associate<{generic}>(mut transform: impl FnMut(&{type_name}) -> {generic}) -> ::std::collections::HashMap<{type_name}, {generic}>"
    ));
    w.line(format!("Self::{values}()"));
    w.increase_indent();
    w.line(".into_iter()");
    w.open_block(format!(".map(|{binding}|"));
    w.line(format!("let value = transform(&{binding});"));
    w.line(format!("({binding}, value)"));
    w.close_block_with("})");
    w.line(".collect()");
    w.decrease_indent();
    w.close_block();
}

fn write_enum_list(w: &mut SourceWriter, type_name: &str, values: &str) {
    w.open_block(format!("pub fn enumList() -> ::std::vec::Vec<{type_name}>"));
    w.line(format!("::std::vec::Vec::from(Self::{values}())"));
    w.close_block();
}

/// Private variant table; `values` is the first name no constant takes.
fn write_values(w: &mut SourceWriter, descriptor: &TypeDescriptor, values: &str) {
    let type_name = &descriptor.type_name;
    let variants = descriptor
        .constant_names
        .iter()
        .map(|constant| format!("{type_name}::{}", render_ident(constant)))
        .collect::<Vec<_>>()
        .join(", ");

    w.open_block(format!(
        "fn {values}() -> [{type_name}; {}]",
        descriptor.constant_names.len()
    ));
    w.line(format!("[{variants}]"));
    w.close_block();
}
