//! Host-independent description of one enhanceable enum.

use serde::{Deserialize, Serialize};

use crate::{
    errors::InvalidArgument,
    naming::{self, is_identifier, is_path_keyword},
};

/// Everything the generator needs to know about an enum.
///
/// Built once per annotated enum by [`extract`](crate::extract::extract) or
/// loaded from fixture data, then consumed by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Module path of the enum, in Rust path syntax (`crate::calendar`).
    pub namespace: String,
    pub type_name: String,
    /// Variant names in declaration order.
    pub constant_names: Vec<String>,
    /// Parameters of every constructor, flattened in declaration order.
    /// Names repeated across constructors are kept as-is.
    #[serde(default)]
    pub constructor_parameters: Vec<ParameterDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    /// Rendered text of the declared type (`i32`, `&'static str`).
    pub type_name: String,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

impl TypeDescriptor {
    pub fn new(namespace: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            type_name: type_name.into(),
            constant_names: Vec::new(),
            constructor_parameters: Vec::new(),
        }
    }

    pub fn with_constants<I, S>(mut self, constants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constant_names.extend(constants.into_iter().map(Into::into));
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.constructor_parameters.push(parameter);
        self
    }

    /// `Quarter` -> `Quarter_`
    pub fn companion_name(&self) -> String {
        naming::companion_name(&self.type_name)
    }

    /// Dot-separated location of the companion (`crate.calendar.Quarter_`).
    pub fn qualified_name(&self) -> String {
        self.namespace
            .split("::")
            .map(str::to_string)
            .chain(std::iter::once(self.companion_name()))
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn validate(&self) -> Result<(), InvalidArgument> {
        if self.namespace.is_empty() {
            return Err(InvalidArgument::EmptyNamespace);
        }
        if let Some(segment) = self.namespace.split("::").find(|s| !is_identifier(s)) {
            return Err(InvalidArgument::NotAnIdentifier(segment.to_string()));
        }
        let names = std::iter::once(&self.type_name)
            .chain(&self.constant_names)
            .chain(self.constructor_parameters.iter().map(|p| &p.name));
        // `crate`, `self`, `Self` and `super` cannot be declared, not even raw.
        for name in names {
            if !is_identifier(name) || is_path_keyword(name) {
                return Err(InvalidArgument::NotAnIdentifier(name.clone()));
            }
        }
        if let Some(parameter) = self
            .constructor_parameters
            .iter()
            .find(|p| p.type_name.trim().is_empty())
        {
            return Err(InvalidArgument::EmptyParameterType(parameter.name.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quarter() -> TypeDescriptor {
        TypeDescriptor::new("crate::calendar", "Quarter")
            .with_constants(["Q1", "Q2", "Q3", "Q4"])
            .with_parameter(ParameterDescriptor::new("quarter", "i32"))
    }

    #[test]
    fn companion_names() {
        let descriptor = quarter();
        assert_eq!(descriptor.companion_name(), "Quarter_");
        assert_eq!(descriptor.qualified_name(), "crate.calendar.Quarter_");
        assert_eq!(
            TypeDescriptor::new("self", "Season").qualified_name(),
            "self.Season_"
        );
    }

    #[test]
    fn valid_descriptor_passes() {
        assert_eq!(quarter().validate(), Ok(()));
        assert_eq!(
            TypeDescriptor::new("crate", "Empty").validate(),
            Ok(()),
            "no constants and no parameters is still valid"
        );
    }

    #[test]
    fn invalid_descriptors_are_rejected() {
        assert_eq!(
            TypeDescriptor::new("", "Quarter").validate(),
            Err(InvalidArgument::EmptyNamespace)
        );
        assert_eq!(
            TypeDescriptor::new("crate::", "Quarter").validate(),
            Err(InvalidArgument::NotAnIdentifier(String::new()))
        );
        assert_eq!(
            TypeDescriptor::new("crate", "").validate(),
            Err(InvalidArgument::NotAnIdentifier(String::new()))
        );
        assert_eq!(
            quarter().with_constants(["Q 5"]).validate(),
            Err(InvalidArgument::NotAnIdentifier("Q 5".into()))
        );
        assert_eq!(
            quarter()
                .with_parameter(ParameterDescriptor::new("year", " "))
                .validate(),
            Err(InvalidArgument::EmptyParameterType("year".into()))
        );
        assert_eq!(
            quarter().with_constants(["self"]).validate(),
            Err(InvalidArgument::NotAnIdentifier("self".into()))
        );
        assert_eq!(
            TypeDescriptor::new("crate", "Self").validate(),
            Err(InvalidArgument::NotAnIdentifier("Self".into()))
        );
    }
}
