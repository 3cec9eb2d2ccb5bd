//! The single-pass translation from a model description to an RDF graph.

use std::collections::HashMap;
use std::path::Path;

use fmi_model::{Causality, ModelDescription, ScalarVariable, TypeDefinition};
use sophia_api::term::SimpleTerm;
use tracing::{debug, warn};

use crate::annotate::{annotate_constraints, Lookup};
use crate::coerce::coerce;
use crate::error::Error;
use crate::graph::{iri, iri_unchecked, literal, typed_literal, FmuGraph, GraphBuilder};
use crate::shapes::{self, ParentShapes};
use crate::vocab::{dct, fmi, rdf, xsd};

/// Default IRI prefix when neither the caller nor the environment supplies
/// one.
pub const DEFAULT_IRI_PREFIX: &str = "http://example.org/FMUs";

/// Knobs of one translation run.
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    /// Base IRI under which all minted IRIs are rooted.
    pub iri_prefix: String,
    /// Emit SHACL shapes for model instantiation and simulation inputs.
    pub shapes: bool,
    /// Expose only top-level parameters (names without a dot). Ignored
    /// whenever `records` is supplied.
    pub blackbox: bool,
    /// Component-name prefixes selecting which parameters to expose.
    /// Mutually exclusive with `blackbox`, which it overrides.
    pub records: Option<Vec<String>>,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            iri_prefix: DEFAULT_IRI_PREFIX.to_owned(),
            shapes: false,
            blackbox: false,
            records: None,
        }
    }
}

/// Reads the model description at `path` and assembles its graph.
///
/// # Errors
///
/// Returns [`Error::ModelDescription`] immediately if the FMU cannot be
/// read or its descriptor does not parse; otherwise as [`assemble`].
pub fn assemble_path(path: &Path, options: &AssembleOptions) -> Result<FmuGraph, Error> {
    let md = fmi_model::read_model_description(path)?;
    assemble(&md, options)
}

/// Assembles the RDF representation of one parsed model description.
///
/// The description is walked exactly once: FMU metadata, unit
/// definitions, type definitions (with their constraints), then every
/// model variable classified by causality. Unit and declared-type lookup
/// misses are logged and skipped; everything else fails the run.
///
/// # Errors
///
/// Returns [`Error::InvalidIri`] when an entity name cannot be turned
/// into an IRI, or a coercion error when a start value or bound does not
/// parse as its declared type.
pub fn assemble(md: &ModelDescription, options: &AssembleOptions) -> Result<FmuGraph, Error> {
    let mut builder = GraphBuilder::new();

    let guid = md.guid.trim_matches(['{', '}']);
    let fmu_iri = format!("{}/{guid}", options.iri_prefix);
    let fmu = iri(&fmu_iri)?;
    debug!(fmu = %fmu_iri, "assembling FMU graph");

    emit_metadata(&mut builder, &fmu, md, guid);

    let units = collect_units(&mut builder, &fmu_iri, md)?;
    let types = collect_types(&mut builder, &fmu_iri, &units, md)?;

    let parents = if options.shapes {
        Some(shapes::parent_shapes(&mut builder, &fmu_iri)?)
    } else {
        None
    };

    for variable in &md.model_variables {
        emit_variable(
            &mut builder,
            &fmu,
            &fmu_iri,
            &units,
            &types,
            parents.as_ref(),
            variable,
            options,
        )?;
    }

    Ok(builder.finish(fmu_iri))
}

/// FMU-level metadata literals, each with its fixed XSD datatype.
fn emit_metadata(builder: &mut GraphBuilder, fmu: &SimpleTerm<'_>, md: &ModelDescription, guid: &str) {
    let rdf_type = iri_unchecked(rdf::TYPE);
    builder.insert(fmu, &rdf_type, &iri_unchecked(fmi::FMU));

    let mut emit = |property: &'static str, value: &str, datatype: &'static str| {
        let p = iri_unchecked(property);
        builder.insert(fmu, &p, &typed_literal(value, datatype));
    };

    emit(fmi::FMI_VERSION, &md.fmi_version, xsd::NORMALIZED_STRING);
    emit(fmi::MODEL_NAME, &md.model_name, xsd::STRING);
    emit(fmi::GUID, guid, xsd::NORMALIZED_STRING);
    if let Some(tool) = &md.generation_tool {
        emit(fmi::GENERATION_TOOL, tool, xsd::NORMALIZED_STRING);
    }
    if let Some(timestamp) = &md.generation_date_and_time {
        emit(fmi::GENERATION_DATE_AND_TIME, timestamp, xsd::DATE_TIME);
    }
    emit(
        fmi::VARIABLE_NAMING_CONVENTION,
        &md.variable_naming_convention,
        xsd::NORMALIZED_STRING,
    );
    emit(
        fmi::NUMBER_OF_EVENT_INDICATORS,
        &md.number_of_event_indicators.to_string(),
        xsd::UNSIGNED_INT,
    );
}

/// Builds the unit-name lookup; each unit gets `a fmi:Unit`.
fn collect_units(
    builder: &mut GraphBuilder,
    fmu_iri: &str,
    md: &ModelDescription,
) -> Result<Lookup, Error> {
    let rdf_type = iri_unchecked(rdf::TYPE);
    let unit_class = iri_unchecked(fmi::UNIT);

    let mut units = Lookup::with_capacity(md.unit_definitions.len());
    for unit in &md.unit_definitions {
        debug!(unit = unit.name, "declaring unit");
        // Unit names may contain '/' (e.g. "m/s"), which cannot live in a
        // fragment-identified IRI path.
        let term = iri(&format!(
            "{fmu_iri}/units#{}",
            unit.name.replace('/', "_")
        ))?;
        builder.insert(&term, &rdf_type, &unit_class);
        units.insert(unit.name.clone(), term);
    }
    Ok(units)
}

/// Builds the type-name lookup; each type gets `a fmi:SimpleType` plus its
/// own constraint triples.
fn collect_types<'a>(
    builder: &mut GraphBuilder,
    fmu_iri: &str,
    units: &Lookup,
    md: &'a ModelDescription,
) -> Result<HashMap<&'a str, (SimpleTerm<'static>, &'a TypeDefinition)>, Error> {
    let rdf_type = iri_unchecked(rdf::TYPE);
    let type_class = iri_unchecked(fmi::SIMPLE_TYPE);

    let mut types = HashMap::with_capacity(md.type_definitions.len());
    for definition in &md.type_definitions {
        debug!(r#type = definition.name, "declaring simple type");
        let term = iri(&format!("{fmu_iri}/types#{}", definition.name))?;
        builder.insert(&term, &rdf_type, &type_class);
        annotate_constraints(builder, units, &term, definition)?;
        types.insert(definition.name.as_str(), (term, definition));
    }
    Ok(types)
}

/// Whether a parameter-family variable is exposed, per the precedence
/// records filter → blackbox → expose-all.
fn parameter_exposed(name: &str, options: &AssembleOptions) -> bool {
    if let Some(records) = &options.records {
        records.iter().any(|record| name.starts_with(record.as_str()))
    } else if options.blackbox {
        !name.contains('.')
    } else {
        true
    }
}

#[allow(clippy::too_many_arguments)]
fn emit_variable(
    builder: &mut GraphBuilder,
    fmu: &SimpleTerm<'_>,
    fmu_iri: &str,
    units: &Lookup,
    types: &HashMap<&str, (SimpleTerm<'static>, &TypeDefinition)>,
    parents: Option<&ParentShapes>,
    variable: &ScalarVariable,
    options: &AssembleOptions,
) -> Result<(), Error> {
    let rdf_type = iri_unchecked(rdf::TYPE);
    debug!(variable = variable.name, causality = variable.causality.as_str(), "parsing variable");

    let var = iri(&format!("{fmu_iri}/variables#{}", variable.name))?;

    match variable.causality {
        Causality::Parameter | Causality::CalculatedParameter | Causality::Local => {
            if !parameter_exposed(&variable.name, options) {
                return Ok(());
            }
            builder.insert(&var, &rdf_type, &iri_unchecked(fmi::PARAMETER));
            builder.insert(fmu, &iri_unchecked(fmi::HAS_PARAMETER), &var);
            if let Some(parents) = parents {
                // A declared start value makes the parameter optional at
                // instantiation time.
                let optional = variable.start.is_some();
                shapes::variable_shape(
                    builder,
                    &parents.instantiation,
                    &var,
                    variable,
                    fmu_iri,
                    optional,
                )?;
            }
        }
        Causality::Input => {
            builder.insert(&var, &rdf_type, &iri_unchecked(fmi::INPUT));
            builder.insert(fmu, &iri_unchecked(fmi::HAS_INPUT), &var);
            if let Some(parents) = parents {
                shapes::variable_shape(builder, &parents.simulation, &var, variable, fmu_iri, false)?;
            }
        }
        Causality::Output => {
            builder.insert(&var, &rdf_type, &iri_unchecked(fmi::OUTPUT));
            builder.insert(fmu, &iri_unchecked(fmi::HAS_OUTPUT), &var);
        }
        // Neither the independent variable nor unrecognized causalities
        // surface in the graph at all.
        Causality::Independent | Causality::Unknown => return Ok(()),
    }

    builder.insert(&var, &rdf_type, &iri_unchecked(fmi::SCALAR_VARIABLE));

    if let Some(description) = &variable.description {
        builder.insert(
            &var,
            &iri_unchecked(dct::DESCRIPTION),
            &typed_literal(description, xsd::STRING),
        );
    }
    if let Some(start) = &variable.start {
        let value = coerce(start, Some(variable.var_type.as_str()))?;
        builder.insert(&var, &iri_unchecked(fmi::START), &literal(&value));
    }

    annotate_constraints(builder, units, &var, variable)?;

    if let Some(declared) = &variable.declared_type {
        match types.get(declared.as_str()) {
            Some((type_term, definition)) => {
                builder.insert(&var, &iri_unchecked(fmi::DECLARED_TYPE), type_term);
                // The variable inherits its declared type's unit and
                // bounds next to its own.
                annotate_constraints(builder, units, &var, *definition)?;
            }
            None => {
                warn!(
                    r#type = declared.as_str(),
                    variable = variable.name,
                    "declared type not found in the FMU's type definitions"
                );
                return Ok(());
            }
        }
    }

    Ok(())
}
