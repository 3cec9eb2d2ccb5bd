//! SHACL shape emission for model instantiation and simulation inputs.
//!
//! Shapes are only built when requested. Two parent node shapes anchor
//! the per-variable shapes: the instantiation shape collects parameter
//! constraints, the simulation shape collects input bindings. Outputs
//! never contribute shapes.

use fmi_model::{Causality, ScalarVariable};
use sophia_api::term::SimpleTerm;

use crate::coerce::coerce;
use crate::error::Error;
use crate::graph::{iri, iri_unchecked, literal, typed_literal, GraphBuilder};
use crate::vocab;

/// The two run-level parent shapes.
#[derive(Debug)]
pub struct ParentShapes {
    /// `{fmu}#shapes-instantiation` — constrains model instantiation.
    pub instantiation: SimpleTerm<'static>,
    /// `{fmu}#shapes-simulation` — constrains simulation inputs.
    pub simulation: SimpleTerm<'static>,
}

/// Mints the two parent node shapes for a run.
///
/// # Errors
///
/// Returns [`Error::InvalidIri`] if the FMU IRI does not extend into
/// valid shape IRIs.
pub fn parent_shapes(builder: &mut GraphBuilder, fmu_iri: &str) -> Result<ParentShapes, Error> {
    let rdf_type = iri_unchecked(vocab::rdf::TYPE);
    let node_shape = iri_unchecked(vocab::sh::NODE_SHAPE);
    let target_node = iri_unchecked(vocab::sh::TARGET_NODE);

    let mut mint = |suffix: &str, builder: &mut GraphBuilder| -> Result<SimpleTerm<'static>, Error> {
        let shape = iri(&format!("{fmu_iri}#shapes-{suffix}"))?;
        builder.insert(&shape, &rdf_type, &node_shape);
        let anchor = builder.bnode();
        builder.insert(&shape, &target_node, &anchor);
        Ok(shape)
    };

    Ok(ParentShapes {
        instantiation: mint("instantiation", builder)?,
        simulation: mint("simulation", builder)?,
    })
}

/// Builds the node shape for one variable and links it into `parent`.
///
/// Parameter-family variables get a value/unit property-path shape tied to
/// the variable via `sms:isValueFor`, with min/max/nominal mapped onto
/// `sh:minInclusive`/`sh:maxInclusive`/`sh:default`. Inputs get an
/// `sosa:ObservableProperty` type assertion and an `sms:mappedTo` binding
/// for external timeseries attachment.
///
/// The link into `parent` carries `sh:path <#name>` and, unless
/// `optional`, an exact-one cardinality.
///
/// # Errors
///
/// Returns [`Error::UnexpectedCausality`] for causalities that never
/// contribute shapes (the assembler must not call this for outputs),
/// [`Error::InvalidIri`] for unusable names, or a coercion error for
/// unparsable bounds.
pub fn variable_shape(
    builder: &mut GraphBuilder,
    parent: &SimpleTerm<'_>,
    variable_node: &SimpleTerm<'_>,
    variable: &ScalarVariable,
    fmu_iri: &str,
    optional: bool,
) -> Result<(), Error> {
    let rdf_type = iri_unchecked(vocab::rdf::TYPE);
    let sh_property = iri_unchecked(vocab::sh::PROPERTY);
    let sh_path = iri_unchecked(vocab::sh::PATH);
    let sh_has_value = iri_unchecked(vocab::sh::HAS_VALUE);

    let shape = iri(&format!("{fmu_iri}#shapes-{}", variable.name))?;
    builder.insert(&shape, &rdf_type, &iri_unchecked(vocab::sh::NODE_SHAPE));

    match variable.causality {
        Causality::Parameter | Causality::CalculatedParameter | Causality::Local => {
            let value_for = builder.bnode();
            builder.insert(&shape, &sh_property, &value_for);
            builder.insert(&value_for, &sh_path, &iri_unchecked(vocab::sms::IS_VALUE_FOR));
            builder.insert(&value_for, &sh_has_value, variable_node);

            let value = builder.bnode();
            builder.insert(&shape, &sh_property, &value);
            builder.insert(&value, &sh_path, &iri_unchecked(vocab::qudt::VALUE));

            let unit = builder.bnode();
            builder.insert(&shape, &sh_property, &unit);
            builder.insert(&unit, &sh_path, &iri_unchecked(vocab::qudt::UNIT));

            let tag = Some(variable.var_type.as_str());
            for (raw, property) in [
                (variable.min.as_deref(), vocab::sh::MIN_INCLUSIVE),
                (variable.max.as_deref(), vocab::sh::MAX_INCLUSIVE),
                (variable.nominal.as_deref(), vocab::sh::DEFAULT),
            ] {
                if let Some(raw) = raw {
                    let coerced = coerce(raw, tag)?;
                    builder.insert(&value, &iri_unchecked(property), &literal(&coerced));
                }
            }
        }
        Causality::Input => {
            let kind = builder.bnode();
            builder.insert(&shape, &sh_property, &kind);
            builder.insert(&kind, &sh_path, &rdf_type);
            builder.insert(
                &kind,
                &sh_has_value,
                &iri_unchecked(vocab::sosa::OBSERVABLE_PROPERTY),
            );

            let mapped = builder.bnode();
            builder.insert(&shape, &sh_property, &mapped);
            builder.insert(&mapped, &sh_path, &iri_unchecked(vocab::sms::MAPPED_TO));
            builder.insert(&mapped, &sh_has_value, variable_node);
        }
        other => {
            return Err(Error::UnexpectedCausality {
                name: variable.name.clone(),
                causality: other.as_str(),
            })
        }
    }

    // Relative path under the instantiation/simulation document.
    let link = builder.bnode();
    builder.insert(&link, &sh_path, &iri(&format!("#{}", variable.name))?);
    if !optional {
        let one = typed_literal("1", vocab::xsd::INTEGER);
        builder.insert(&link, &iri_unchecked(vocab::sh::MIN_COUNT), &one);
        builder.insert(&link, &iri_unchecked(vocab::sh::MAX_COUNT), &one);
    }
    builder.insert(&link, &iri_unchecked(vocab::sh::NODE), &shape);
    builder.insert(parent, &sh_property, &link);

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use fmi_model::VarType;

    fn variable(name: &str, causality: Causality) -> ScalarVariable {
        ScalarVariable {
            name: name.to_owned(),
            causality,
            var_type: VarType::Real,
            description: None,
            declared_type: None,
            unit: None,
            start: None,
            min: Some("0".to_owned()),
            max: Some("10".to_owned()),
            nominal: None,
        }
    }

    const FMU: &str = "http://example.org/FMUs/abc";

    fn emit(variable_def: &ScalarVariable, optional: bool) -> String {
        let mut builder = GraphBuilder::new();
        let parents = parent_shapes(&mut builder, FMU).unwrap();
        let node = iri(&format!("{FMU}/variables#{}", variable_def.name)).unwrap();
        variable_shape(
            &mut builder,
            &parents.instantiation,
            &node,
            variable_def,
            FMU,
            optional,
        )
        .unwrap();
        builder.finish(FMU.to_owned()).to_ntriples().unwrap()
    }

    #[test]
    fn parameter_shape_constrains_value_range() {
        let nt = emit(&variable("p", Causality::Parameter), false);
        assert!(nt.contains("<http://example.org/FMUs/abc#shapes-p>"));
        assert!(nt.contains("<https://purl.org/sms-ontology#isValueFor>"));
        assert!(nt.contains("<http://www.w3.org/ns/shacl#minInclusive>"));
        assert!(nt.contains("<http://www.w3.org/ns/shacl#maxInclusive>"));
        assert!(nt.contains("<http://www.w3.org/ns/shacl#minCount>"));
    }

    #[test]
    fn optional_shape_link_has_no_cardinality() {
        let nt = emit(&variable("p", Causality::Parameter), true);
        assert!(!nt.contains("<http://www.w3.org/ns/shacl#minCount>"));
        assert!(!nt.contains("<http://www.w3.org/ns/shacl#maxCount>"));
        assert!(nt.contains("<http://www.w3.org/ns/shacl#node>"));
    }

    #[test]
    fn input_shape_binds_an_observable_property() {
        let nt = emit(&variable("u", Causality::Input), false);
        assert!(nt.contains("<http://www.w3.org/ns/sosa/ObservableProperty>"));
        assert!(nt.contains("<https://purl.org/sms-ontology#mappedTo>"));
        assert!(!nt.contains("<https://purl.org/sms-ontology#isValueFor>"));
    }

    #[test]
    fn output_causality_is_a_contract_violation() {
        let mut builder = GraphBuilder::new();
        let parents = parent_shapes(&mut builder, FMU).unwrap();
        let var = variable("y", Causality::Output);
        let node = iri(&format!("{FMU}/variables#y")).unwrap();
        let result = variable_shape(&mut builder, &parents.instantiation, &node, &var, FMU, false);
        assert!(matches!(result, Err(Error::UnexpectedCausality { .. })));
    }
}
