//! Namespace and term IRIs of the output vocabulary.
//!
//! These constants fix the graph vocabulary for downstream consumers;
//! changing any of them is a breaking change to every tool that queries
//! the emitted graphs. The prefix table is likewise fixed, including the
//! `unit:` prefix that is bound as an extension point for a future
//! unit-ontology mapping without anything referencing it yet.

use sophia_api::prefix::{Prefix, PrefixMapPair};
use sophia_iri::Iri;

/// Namespace IRIs, one constant per bound prefix.
pub mod ns {
    /// `rdf:` — RDF syntax vocabulary.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// `xsd:` — XML Schema datatypes.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// `dct:` — Dublin Core terms.
    pub const DCT: &str = "http://purl.org/dc/terms/";
    /// `sh:` — SHACL.
    pub const SH: &str = "http://www.w3.org/ns/shacl#";
    /// `sosa:` — Sensor, Observation, Sample, and Actuator ontology.
    pub const SOSA: &str = "http://www.w3.org/ns/sosa/";
    /// `qudt:` — QUDT schema.
    pub const QUDT: &str = "http://qudt.org/schema/qudt/";
    /// `unit:` — QUDT unit vocabulary (extension point, unreferenced).
    pub const UNIT: &str = "http://qudt.org/vocab/unit/";
    /// `fmi:` — FMI ontology.
    pub const FMI: &str = "https://purl.org/fmi-ontology#";
    /// `sms:` — simulation-model-semantics ontology.
    pub const SMS: &str = "https://purl.org/sms-ontology#";
}

/// `rdf:` terms.
pub mod rdf {
    /// `rdf:type`.
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// `dct:` terms.
pub mod dct {
    /// `dct:description`.
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
}

/// `fmi:` ontology terms.
pub mod fmi {
    /// `fmi:FMU` class.
    pub const FMU: &str = "https://purl.org/fmi-ontology#FMU";
    /// `fmi:Unit` class.
    pub const UNIT: &str = "https://purl.org/fmi-ontology#Unit";
    /// `fmi:SimpleType` class.
    pub const SIMPLE_TYPE: &str = "https://purl.org/fmi-ontology#SimpleType";
    /// `fmi:ScalarVariable` class.
    pub const SCALAR_VARIABLE: &str = "https://purl.org/fmi-ontology#ScalarVariable";
    /// `fmi:Parameter` class.
    pub const PARAMETER: &str = "https://purl.org/fmi-ontology#Parameter";
    /// `fmi:Input` class.
    pub const INPUT: &str = "https://purl.org/fmi-ontology#Input";
    /// `fmi:Output` class.
    pub const OUTPUT: &str = "https://purl.org/fmi-ontology#Output";

    /// `fmi:fmiVersion` property.
    pub const FMI_VERSION: &str = "https://purl.org/fmi-ontology#fmiVersion";
    /// `fmi:modelName` property.
    pub const MODEL_NAME: &str = "https://purl.org/fmi-ontology#modelName";
    /// `fmi:guid` property.
    pub const GUID: &str = "https://purl.org/fmi-ontology#guid";
    /// `fmi:generationTool` property.
    pub const GENERATION_TOOL: &str = "https://purl.org/fmi-ontology#generationTool";
    /// `fmi:generationDateAndTime` property.
    pub const GENERATION_DATE_AND_TIME: &str =
        "https://purl.org/fmi-ontology#generationDateAndTime";
    /// `fmi:variableNamingConvention` property.
    pub const VARIABLE_NAMING_CONVENTION: &str =
        "https://purl.org/fmi-ontology#variableNamingConvention";
    /// `fmi:numberOfEventIndicators` property.
    pub const NUMBER_OF_EVENT_INDICATORS: &str =
        "https://purl.org/fmi-ontology#numberOfEventIndicators";

    /// `fmi:hasParameter` relation.
    pub const HAS_PARAMETER: &str = "https://purl.org/fmi-ontology#hasParameter";
    /// `fmi:hasInput` relation.
    pub const HAS_INPUT: &str = "https://purl.org/fmi-ontology#hasInput";
    /// `fmi:hasOutput` relation.
    pub const HAS_OUTPUT: &str = "https://purl.org/fmi-ontology#hasOutput";

    /// `fmi:unit` constraint property.
    pub const UNIT_PROP: &str = "https://purl.org/fmi-ontology#unit";
    /// `fmi:min` constraint property.
    pub const MIN: &str = "https://purl.org/fmi-ontology#min";
    /// `fmi:max` constraint property.
    pub const MAX: &str = "https://purl.org/fmi-ontology#max";
    /// `fmi:nominal` constraint property.
    pub const NOMINAL: &str = "https://purl.org/fmi-ontology#nominal";
    /// `fmi:start` property.
    pub const START: &str = "https://purl.org/fmi-ontology#start";
    /// `fmi:declaredType` back-reference.
    pub const DECLARED_TYPE: &str = "https://purl.org/fmi-ontology#declaredType";
}

/// `sh:` (SHACL) terms.
pub mod sh {
    /// `sh:NodeShape` class.
    pub const NODE_SHAPE: &str = "http://www.w3.org/ns/shacl#NodeShape";
    /// `sh:targetNode`.
    pub const TARGET_NODE: &str = "http://www.w3.org/ns/shacl#targetNode";
    /// `sh:property`.
    pub const PROPERTY: &str = "http://www.w3.org/ns/shacl#property";
    /// `sh:path`.
    pub const PATH: &str = "http://www.w3.org/ns/shacl#path";
    /// `sh:hasValue`.
    pub const HAS_VALUE: &str = "http://www.w3.org/ns/shacl#hasValue";
    /// `sh:node`.
    pub const NODE: &str = "http://www.w3.org/ns/shacl#node";
    /// `sh:minInclusive`.
    pub const MIN_INCLUSIVE: &str = "http://www.w3.org/ns/shacl#minInclusive";
    /// `sh:maxInclusive`.
    pub const MAX_INCLUSIVE: &str = "http://www.w3.org/ns/shacl#maxInclusive";
    /// `sh:default` — non-standard SHACL term, kept verbatim for
    /// compatibility with existing consumers of the graphs.
    pub const DEFAULT: &str = "http://www.w3.org/ns/shacl#default";
    /// `sh:minCount`.
    pub const MIN_COUNT: &str = "http://www.w3.org/ns/shacl#minCount";
    /// `sh:maxCount`.
    pub const MAX_COUNT: &str = "http://www.w3.org/ns/shacl#maxCount";
}

/// `sms:` terms.
pub mod sms {
    /// `sms:isValueFor` relation.
    pub const IS_VALUE_FOR: &str = "https://purl.org/sms-ontology#isValueFor";
    /// `sms:mappedTo` relation.
    pub const MAPPED_TO: &str = "https://purl.org/sms-ontology#mappedTo";
}

/// `sosa:` terms.
pub mod sosa {
    /// `sosa:ObservableProperty` class.
    pub const OBSERVABLE_PROPERTY: &str = "http://www.w3.org/ns/sosa/ObservableProperty";
}

/// `qudt:` terms.
pub mod qudt {
    /// `qudt:value` path.
    pub const VALUE: &str = "http://qudt.org/schema/qudt/value";
    /// `qudt:unit` path.
    pub const UNIT: &str = "http://qudt.org/schema/qudt/unit";
}

/// `xsd:` datatypes used for literals.
pub mod xsd {
    /// `xsd:string`.
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:normalizedString`.
    pub const NORMALIZED_STRING: &str = "http://www.w3.org/2001/XMLSchema#normalizedString";
    /// `xsd:dateTime`.
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    /// `xsd:unsignedInt`.
    pub const UNSIGNED_INT: &str = "http://www.w3.org/2001/XMLSchema#unsignedInt";
    /// `xsd:double`.
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    /// `xsd:integer`.
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:boolean`.
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
}

/// The prefix table bound into serialized output.
#[must_use]
pub fn prefix_map() -> Vec<PrefixMapPair> {
    [
        ("rdf", ns::RDF),
        ("xsd", ns::XSD),
        ("dct", ns::DCT),
        ("sh", ns::SH),
        ("sosa", ns::SOSA),
        ("qudt", ns::QUDT),
        ("unit", ns::UNIT),
        ("fmi", ns::FMI),
        ("sms", ns::SMS),
    ]
    .into_iter()
    .map(|(prefix, iri)| {
        (
            Prefix::new_unchecked(Box::from(prefix)),
            Iri::new_unchecked(Box::from(iri)),
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fmi_term_lives_in_the_fmi_namespace() {
        for term in [
            fmi::FMU,
            fmi::UNIT,
            fmi::SIMPLE_TYPE,
            fmi::SCALAR_VARIABLE,
            fmi::PARAMETER,
            fmi::INPUT,
            fmi::OUTPUT,
            fmi::HAS_PARAMETER,
            fmi::HAS_INPUT,
            fmi::HAS_OUTPUT,
            fmi::START,
            fmi::DECLARED_TYPE,
        ] {
            assert!(term.starts_with(ns::FMI), "misplaced term: {term}");
        }
    }

    #[test]
    fn prefix_map_binds_all_nine_prefixes() {
        assert_eq!(prefix_map().len(), 9);
    }
}
