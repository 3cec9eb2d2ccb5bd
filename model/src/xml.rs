//! Raw serde structs for `modelDescription.xml` and their conversion into
//! the public data model.
//!
//! The XML shape follows the FMI 2.0 schema: attributes on the root
//! element, three optional container elements, and per-variable typed
//! child elements (`<Real>`, `<Integer>`, ...) that carry the value
//! attributes. quick-xml does not support `#[serde(flatten)]`, so the
//! typed child elements are spelled out on both parents.

use serde::Deserialize;

use crate::error::Error;
use crate::model::{
    Causality, ModelDescription, ScalarVariable, TypeDefinition, UnitDefinition, VarType,
};

pub(crate) fn parse(source: &str) -> Result<ModelDescription, Error> {
    let raw: FmiModelDescriptionXml = quick_xml::de::from_str(source)?;
    raw.try_into()
}

#[derive(Debug, Deserialize)]
struct FmiModelDescriptionXml {
    #[serde(rename = "@fmiVersion")]
    fmi_version: String,
    #[serde(rename = "@modelName")]
    model_name: String,
    #[serde(rename = "@guid")]
    guid: String,
    #[serde(rename = "@description")]
    description: Option<String>,
    #[serde(rename = "@generationTool")]
    generation_tool: Option<String>,
    #[serde(rename = "@generationDateAndTime")]
    generation_date_and_time: Option<String>,
    #[serde(rename = "@variableNamingConvention")]
    variable_naming_convention: Option<String>,
    #[serde(rename = "@numberOfEventIndicators")]
    number_of_event_indicators: Option<u32>,
    #[serde(rename = "UnitDefinitions")]
    unit_definitions: Option<UnitDefinitionsXml>,
    #[serde(rename = "TypeDefinitions")]
    type_definitions: Option<TypeDefinitionsXml>,
    #[serde(rename = "ModelVariables")]
    model_variables: Option<ModelVariablesXml>,
}

#[derive(Debug, Deserialize)]
struct UnitDefinitionsXml {
    #[serde(rename = "Unit", default)]
    units: Vec<UnitXml>,
}

#[derive(Debug, Deserialize)]
struct UnitXml {
    #[serde(rename = "@name")]
    name: String,
}

#[derive(Debug, Deserialize)]
struct TypeDefinitionsXml {
    #[serde(rename = "SimpleType", default)]
    simple_types: Vec<SimpleTypeXml>,
}

#[derive(Debug, Deserialize)]
struct SimpleTypeXml {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "Real")]
    real: Option<TypedAttrsXml>,
    #[serde(rename = "Integer")]
    integer: Option<TypedAttrsXml>,
    #[serde(rename = "Boolean")]
    boolean: Option<TypedAttrsXml>,
    #[serde(rename = "String")]
    string: Option<TypedAttrsXml>,
    #[serde(rename = "Enumeration")]
    enumeration: Option<TypedAttrsXml>,
}

#[derive(Debug, Deserialize)]
struct ModelVariablesXml {
    #[serde(rename = "ScalarVariable", default)]
    variables: Vec<ScalarVariableXml>,
}

#[derive(Debug, Deserialize)]
struct ScalarVariableXml {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@causality")]
    causality: Option<String>,
    #[serde(rename = "@description")]
    description: Option<String>,
    #[serde(rename = "Real")]
    real: Option<TypedAttrsXml>,
    #[serde(rename = "Integer")]
    integer: Option<TypedAttrsXml>,
    #[serde(rename = "Boolean")]
    boolean: Option<TypedAttrsXml>,
    #[serde(rename = "String")]
    string: Option<TypedAttrsXml>,
    #[serde(rename = "Enumeration")]
    enumeration: Option<TypedAttrsXml>,
}

#[derive(Debug, Default, Deserialize)]
struct TypedAttrsXml {
    #[serde(rename = "@declaredType")]
    declared_type: Option<String>,
    #[serde(rename = "@unit")]
    unit: Option<String>,
    #[serde(rename = "@start")]
    start: Option<String>,
    #[serde(rename = "@min")]
    min: Option<String>,
    #[serde(rename = "@max")]
    max: Option<String>,
    #[serde(rename = "@nominal")]
    nominal: Option<String>,
}

/// Picks the single typed child element FMI requires per parent.
fn take_typed(
    parent: &str,
    candidates: [(VarType, Option<TypedAttrsXml>); 5],
) -> Result<(VarType, TypedAttrsXml), Error> {
    for (var_type, attrs) in candidates {
        if let Some(attrs) = attrs {
            return Ok((var_type, attrs));
        }
    }
    Err(Error::MissingType {
        name: parent.to_owned(),
    })
}

impl TryFrom<FmiModelDescriptionXml> for ModelDescription {
    type Error = Error;

    fn try_from(raw: FmiModelDescriptionXml) -> Result<Self, Error> {
        let unit_definitions = raw
            .unit_definitions
            .map(|u| u.units)
            .unwrap_or_default()
            .into_iter()
            .map(|u| UnitDefinition { name: u.name })
            .collect();

        let type_definitions = raw
            .type_definitions
            .map(|t| t.simple_types)
            .unwrap_or_default()
            .into_iter()
            .map(TypeDefinition::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let model_variables = raw
            .model_variables
            .map(|v| v.variables)
            .unwrap_or_default()
            .into_iter()
            .map(ScalarVariable::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ModelDescription {
            fmi_version: raw.fmi_version,
            model_name: raw.model_name,
            guid: raw.guid,
            description: raw.description,
            generation_tool: raw.generation_tool,
            generation_date_and_time: raw.generation_date_and_time,
            variable_naming_convention: raw
                .variable_naming_convention
                .unwrap_or_else(|| "flat".to_owned()),
            number_of_event_indicators: raw.number_of_event_indicators.unwrap_or(0),
            unit_definitions,
            type_definitions,
            model_variables,
        })
    }
}

impl TryFrom<SimpleTypeXml> for TypeDefinition {
    type Error = Error;

    fn try_from(raw: SimpleTypeXml) -> Result<Self, Error> {
        let (var_type, attrs) = take_typed(
            &raw.name,
            [
                (VarType::Real, raw.real),
                (VarType::Integer, raw.integer),
                (VarType::Boolean, raw.boolean),
                (VarType::String, raw.string),
                (VarType::Enumeration, raw.enumeration),
            ],
        )?;
        Ok(TypeDefinition {
            name: raw.name,
            var_type,
            unit: attrs.unit,
            min: attrs.min,
            max: attrs.max,
            nominal: attrs.nominal,
        })
    }
}

impl TryFrom<ScalarVariableXml> for ScalarVariable {
    type Error = Error;

    fn try_from(raw: ScalarVariableXml) -> Result<Self, Error> {
        let (var_type, attrs) = take_typed(
            &raw.name,
            [
                (VarType::Real, raw.real),
                (VarType::Integer, raw.integer),
                (VarType::Boolean, raw.boolean),
                (VarType::String, raw.string),
                (VarType::Enumeration, raw.enumeration),
            ],
        )?;
        Ok(ScalarVariable {
            name: raw.name,
            causality: Causality::parse(raw.causality.as_deref()),
            var_type,
            description: raw.description,
            declared_type: attrs.declared_type,
            unit: attrs.unit,
            start: attrs.start,
            min: attrs.min,
            max: attrs.max,
            nominal: attrs.nominal,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;

    const DESCRIPTOR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<fmiModelDescription fmiVersion="2.0" modelName="Thermostat"
    guid="{8c4e810f-3df3-4a00-8276-176fa3c9f000}"
    generationTool="TestExporter" generationDateAndTime="2021-06-01T10:00:00Z"
    variableNamingConvention="structured" numberOfEventIndicators="2">
  <UnitDefinitions>
    <Unit name="K"/>
    <Unit name="m/s"/>
  </UnitDefinitions>
  <TypeDefinitions>
    <SimpleType name="Temperature">
      <Real unit="K" min="0"/>
    </SimpleType>
  </TypeDefinitions>
  <ModelVariables>
    <ScalarVariable name="setpoint" valueReference="0" causality="parameter"
        description="Target temperature">
      <Real declaredType="Temperature" start="293.15" min="273.15" max="323.15"/>
    </ScalarVariable>
    <ScalarVariable name="room.T" valueReference="1" causality="output">
      <Real unit="K"/>
    </ScalarVariable>
    <ScalarVariable name="onOff" valueReference="2" causality="input">
      <Boolean start="false"/>
    </ScalarVariable>
    <ScalarVariable name="counter" valueReference="3">
      <Integer start="0"/>
    </ScalarVariable>
  </ModelVariables>
</fmiModelDescription>"#;

    #[test]
    fn parses_root_attributes() {
        let md = parse(DESCRIPTOR).unwrap();
        assert_eq!(md.fmi_version, "2.0");
        assert_eq!(md.model_name, "Thermostat");
        assert_eq!(md.guid, "{8c4e810f-3df3-4a00-8276-176fa3c9f000}");
        assert_eq!(md.generation_tool.as_deref(), Some("TestExporter"));
        assert_eq!(md.variable_naming_convention, "structured");
        assert_eq!(md.number_of_event_indicators, 2);
    }

    #[test]
    fn parses_units_and_types() {
        let md = parse(DESCRIPTOR).unwrap();
        assert_eq!(md.unit_definitions.len(), 2);
        assert_eq!(md.unit_definitions[1].name, "m/s");

        assert_eq!(md.type_definitions.len(), 1);
        let ty = &md.type_definitions[0];
        assert_eq!(ty.name, "Temperature");
        assert_eq!(ty.var_type, VarType::Real);
        assert_eq!(ty.unit.as_deref(), Some("K"));
        assert_eq!(ty.min.as_deref(), Some("0"));
        assert_eq!(ty.max, None);
    }

    #[test]
    fn parses_variables_with_causality() {
        let md = parse(DESCRIPTOR).unwrap();
        assert_eq!(md.model_variables.len(), 4);

        let setpoint = &md.model_variables[0];
        assert_eq!(setpoint.causality, Causality::Parameter);
        assert_eq!(setpoint.var_type, VarType::Real);
        assert_eq!(setpoint.declared_type.as_deref(), Some("Temperature"));
        assert_eq!(setpoint.start.as_deref(), Some("293.15"));
        assert_eq!(setpoint.description.as_deref(), Some("Target temperature"));

        let on_off = &md.model_variables[2];
        assert_eq!(on_off.causality, Causality::Input);
        assert_eq!(on_off.var_type, VarType::Boolean);
    }

    #[test]
    fn missing_causality_defaults_to_local() {
        let md = parse(DESCRIPTOR).unwrap();
        assert_eq!(md.model_variables[3].causality, Causality::Local);
    }

    #[test]
    fn unknown_causality_is_preserved_as_unknown() {
        let src = DESCRIPTOR.replace(r#"causality="input""#, r#"causality="structural""#);
        let md = parse(&src).unwrap();
        assert_eq!(md.model_variables[2].causality, Causality::Unknown);
    }

    #[test]
    fn untyped_variable_is_an_error() {
        let src = r#"<fmiModelDescription fmiVersion="2.0" modelName="m" guid="g">
  <ModelVariables>
    <ScalarVariable name="bad" valueReference="0"/>
  </ModelVariables>
</fmiModelDescription>"#;
        match parse(src) {
            Err(Error::MissingType { name }) => assert_eq!(name, "bad"),
            other => panic!("expected MissingType, got {other:?}"),
        }
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(matches!(parse("<fmiModelDescription"), Err(Error::Xml(_))));
    }
}
