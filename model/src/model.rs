//! Public model-description data model.
//!
//! All raw attribute values (start, min, max, nominal) are kept as the
//! strings found in the XML; interpreting them against the variable's
//! declared type is a consumer concern.

use crate::error::Error;
use crate::xml;

/// The parsed content of a `modelDescription.xml`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDescription {
    /// FMI standard version, e.g. `"2.0"`.
    pub fmi_version: String,
    /// Model name as exported by the generation tool.
    pub model_name: String,
    /// Globally unique identifier of this FMU build, possibly wrapped in
    /// braces (`{...}`) by the exporting tool.
    pub guid: String,
    /// Optional human-readable model description.
    pub description: Option<String>,
    /// Tool that generated the FMU.
    pub generation_tool: Option<String>,
    /// ISO 8601 timestamp of FMU generation.
    pub generation_date_and_time: Option<String>,
    /// `"flat"` or `"structured"` (dot-separated hierarchical names).
    pub variable_naming_convention: String,
    /// Number of event indicators exposed by the model.
    pub number_of_event_indicators: u32,
    /// Units declared inside the FMU.
    pub unit_definitions: Vec<UnitDefinition>,
    /// Simple types declared inside the FMU.
    pub type_definitions: Vec<TypeDefinition>,
    /// The flat list of model variables.
    pub model_variables: Vec<ScalarVariable>,
}

impl ModelDescription {
    /// Parses a `modelDescription.xml` document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Xml`] if the document does not deserialize, or
    /// [`Error::MissingType`] if a variable or type definition carries no
    /// typed child element.
    pub fn from_xml(source: &str) -> Result<Self, Error> {
        xml::parse(source)
    }
}

/// A `<Unit>` declared in `<UnitDefinitions>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDefinition {
    /// Unit name, unique within the FMU (e.g. `"K"`, `"m/s"`).
    pub name: String,
}

/// A `<SimpleType>` declared in `<TypeDefinitions>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
    /// Type name, unique within the FMU.
    pub name: String,
    /// Primitive type of the definition.
    pub var_type: VarType,
    /// Referenced unit name, if any.
    pub unit: Option<String>,
    /// Raw minimum value, if declared.
    pub min: Option<String>,
    /// Raw maximum value, if declared.
    pub max: Option<String>,
    /// Raw nominal value, if declared.
    pub nominal: Option<String>,
}

/// A `<ScalarVariable>` from `<ModelVariables>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarVariable {
    /// Variable name; with the `structured` naming convention this is a
    /// dot-separated hierarchical path.
    pub name: String,
    /// The variable's role in the model.
    pub causality: Causality,
    /// Primitive type of the variable.
    pub var_type: VarType,
    /// Optional human-readable description.
    pub description: Option<String>,
    /// Name of the referenced `<SimpleType>`, if any.
    pub declared_type: Option<String>,
    /// Referenced unit name, if any.
    pub unit: Option<String>,
    /// Raw start value, if declared.
    pub start: Option<String>,
    /// Raw minimum value, if declared.
    pub min: Option<String>,
    /// Raw maximum value, if declared.
    pub max: Option<String>,
    /// Raw nominal value, if declared.
    pub nominal: Option<String>,
}

/// Primitive variable types of FMI 2.0, taken from the name of the typed
/// child element of a `<ScalarVariable>` or `<SimpleType>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    /// `<Real>` — floating point.
    Real,
    /// `<Integer>` — whole number.
    Integer,
    /// `<Boolean>` — true/false.
    Boolean,
    /// `<String>` — text.
    String,
    /// `<Enumeration>` — named integer constants.
    Enumeration,
}

impl VarType {
    /// Returns the canonical FMI type tag (`"Real"`, `"Integer"`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VarType::Real => "Real",
            VarType::Integer => "Integer",
            VarType::Boolean => "Boolean",
            VarType::String => "String",
            VarType::Enumeration => "Enumeration",
        }
    }
}

/// A variable's role, per the FMI 2.0 `causality` attribute.
///
/// An absent attribute defaults to [`Causality::Local`] as the standard
/// prescribes; values outside the FMI 2.0 vocabulary map to
/// [`Causality::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Causality {
    /// Tunable value fixed before simulation start.
    Parameter,
    /// Value computed from parameters, constant during simulation.
    CalculatedParameter,
    /// Value provided to the model at every step.
    Input,
    /// Value computed by the model at every step.
    Output,
    /// Internal variable, not part of the model interface.
    Local,
    /// The independent variable (usually time).
    Independent,
    /// Unrecognized causality string.
    Unknown,
}

impl Causality {
    pub(crate) fn parse(value: Option<&str>) -> Self {
        match value {
            None => Causality::Local,
            Some("parameter") => Causality::Parameter,
            Some("calculatedParameter") => Causality::CalculatedParameter,
            Some("input") => Causality::Input,
            Some("output") => Causality::Output,
            Some("local") => Causality::Local,
            Some("independent") => Causality::Independent,
            Some(_) => Causality::Unknown,
        }
    }

    /// Returns the FMI attribute spelling of this causality.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Causality::Parameter => "parameter",
            Causality::CalculatedParameter => "calculatedParameter",
            Causality::Input => "input",
            Causality::Output => "output",
            Causality::Local => "local",
            Causality::Independent => "independent",
            Causality::Unknown => "unknown",
        }
    }
}
