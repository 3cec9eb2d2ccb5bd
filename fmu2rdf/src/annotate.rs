//! Constraint annotation shared by type definitions and variables.

use std::collections::HashMap;

use fmi_model::{ScalarVariable, TypeDefinition};
use sophia_api::term::SimpleTerm;
use tracing::warn;

use crate::coerce::coerce;
use crate::error::Error;
use crate::graph::{literal, GraphBuilder};
use crate::vocab;

/// Map from FMU-local name to the minted IRI term. Built once per run and
/// immutable afterwards.
pub type Lookup = HashMap<String, SimpleTerm<'static>>;

/// The capability set the annotator needs from its source: both
/// `<SimpleType>` definitions and `<ScalarVariable>`s carry an optional
/// unit plus optional min/max/nominal bounds.
pub trait Constrained {
    /// Name, for warning messages.
    fn name(&self) -> &str;
    /// Canonical FMI type tag, for coercion.
    fn type_tag(&self) -> &'static str;
    /// Referenced unit name.
    fn unit(&self) -> Option<&str>;
    /// Raw minimum.
    fn min(&self) -> Option<&str>;
    /// Raw maximum.
    fn max(&self) -> Option<&str>;
    /// Raw nominal value.
    fn nominal(&self) -> Option<&str>;
}

impl Constrained for TypeDefinition {
    fn name(&self) -> &str {
        &self.name
    }
    fn type_tag(&self) -> &'static str {
        self.var_type.as_str()
    }
    fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }
    fn min(&self) -> Option<&str> {
        self.min.as_deref()
    }
    fn max(&self) -> Option<&str> {
        self.max.as_deref()
    }
    fn nominal(&self) -> Option<&str> {
        self.nominal.as_deref()
    }
}

impl Constrained for ScalarVariable {
    fn name(&self) -> &str {
        &self.name
    }
    fn type_tag(&self) -> &'static str {
        self.var_type.as_str()
    }
    fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }
    fn min(&self) -> Option<&str> {
        self.min.as_deref()
    }
    fn max(&self) -> Option<&str> {
        self.max.as_deref()
    }
    fn nominal(&self) -> Option<&str> {
        self.nominal.as_deref()
    }
}

/// Adds `fmi:unit`/`fmi:min`/`fmi:max`/`fmi:nominal` triples for `source`
/// onto `target`. Each field is independently optional.
///
/// A unit name missing from the lookup is a recoverable condition: it is
/// logged and the `fmi:unit` triple is simply omitted.
///
/// # Errors
///
/// Returns a coercion error if a bound does not parse as the source's
/// declared type.
pub fn annotate_constraints(
    builder: &mut GraphBuilder,
    units: &Lookup,
    target: &SimpleTerm<'_>,
    source: &impl Constrained,
) -> Result<(), Error> {
    if let Some(unit) = source.unit() {
        match units.get(unit) {
            Some(unit_term) => {
                let p = crate::graph::iri_unchecked(vocab::fmi::UNIT_PROP);
                builder.insert(target, &p, unit_term);
            }
            None => warn!(
                unit,
                object = source.name(),
                "unit not found in the FMU's unit definitions"
            ),
        }
    }

    let tag = Some(source.type_tag());
    for (raw, property) in [
        (source.min(), vocab::fmi::MIN),
        (source.max(), vocab::fmi::MAX),
        (source.nominal(), vocab::fmi::NOMINAL),
    ] {
        if let Some(raw) = raw {
            let value = coerce(raw, tag)?;
            let p = crate::graph::iri_unchecked(property);
            builder.insert(target, &p, &literal(&value));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::graph::iri;
    use fmi_model::VarType;

    fn real_type(unit: Option<&str>, min: Option<&str>) -> TypeDefinition {
        TypeDefinition {
            name: "Temperature".to_owned(),
            var_type: VarType::Real,
            unit: unit.map(str::to_owned),
            min: min.map(str::to_owned),
            max: None,
            nominal: None,
        }
    }

    #[test]
    fn known_unit_produces_a_unit_triple() {
        let mut builder = GraphBuilder::new();
        let target = iri("http://example.org/t").unwrap();
        let unit_term = iri("http://example.org/units#K").unwrap();
        let units = Lookup::from([("K".to_owned(), unit_term)]);

        annotate_constraints(&mut builder, &units, &target, &real_type(Some("K"), None))
            .unwrap();

        let nt = builder
            .finish(String::new())
            .to_ntriples()
            .unwrap();
        assert!(nt.contains("<https://purl.org/fmi-ontology#unit> <http://example.org/units#K>"));
    }

    #[test]
    fn unknown_unit_is_skipped_without_error() {
        let mut builder = GraphBuilder::new();
        let target = iri("http://example.org/t").unwrap();

        annotate_constraints(
            &mut builder,
            &Lookup::new(),
            &target,
            &real_type(Some("furlong"), None),
        )
        .unwrap();

        let graph = builder.finish(String::new());
        assert_eq!(graph.triple_count(), 0);
    }

    #[test]
    fn bounds_are_coerced_to_the_declared_type() {
        let mut builder = GraphBuilder::new();
        let target = iri("http://example.org/t").unwrap();

        annotate_constraints(
            &mut builder,
            &Lookup::new(),
            &target,
            &real_type(None, Some("0")),
        )
        .unwrap();

        let nt = builder.finish(String::new()).to_ntriples().unwrap();
        assert!(nt.contains(
            "<https://purl.org/fmi-ontology#min> \"0\"^^<http://www.w3.org/2001/XMLSchema#double>"
        ));
    }

    #[test]
    fn unparsable_bound_propagates_a_coercion_error() {
        let mut builder = GraphBuilder::new();
        let target = iri("http://example.org/t").unwrap();

        let result = annotate_constraints(
            &mut builder,
            &Lookup::new(),
            &target,
            &real_type(None, Some("cold")),
        );
        assert!(matches!(result, Err(Error::InvalidValue { .. })));
    }
}
