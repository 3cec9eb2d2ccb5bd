//! Graph construction primitives and the assembled result type.
//!
//! One [`GraphBuilder`] is owned per `assemble` invocation and threaded by
//! exclusive borrow through the annotator and shape builder; there is
//! exactly one writer for the lifetime of a run. Blank-node labels are
//! minted from a per-run counter, so re-running the same translation
//! yields an identical triple set.

use sophia_api::graph::{Graph, MutableGraph};
use sophia_api::serializer::{Stringifier, TripleSerializer};
use sophia_api::term::{BnodeId, SimpleTerm};
use sophia_api::MownStr;
use sophia_inmem::graph::LightGraph;
use sophia_iri::IriRef;
use sophia_turtle::serializer::nt::NtSerializer;
use sophia_turtle::serializer::turtle::{TurtleConfig, TurtleSerializer};

use crate::coerce::TypedValue;
use crate::error::Error;
use crate::vocab;

/// Creates an IRI term, validating the input.
///
/// # Errors
///
/// Returns [`Error::InvalidIri`] if `value` is not a valid IRI reference
/// (FMU entity names become IRI fragments, and not every exporter emits
/// names that survive that).
pub fn iri(value: &str) -> Result<SimpleTerm<'static>, Error> {
    IriRef::new(MownStr::from(value.to_owned()))
        .map(SimpleTerm::Iri)
        .map_err(|_| Error::InvalidIri(value.to_owned()))
}

/// Creates an IRI term from a vocabulary constant.
///
/// Only for compile-time constants from [`crate::vocab`]; input is not
/// validated.
#[must_use]
pub fn iri_unchecked(value: &'static str) -> SimpleTerm<'static> {
    SimpleTerm::Iri(IriRef::new_unchecked(MownStr::from(value)))
}

/// Creates a literal term with an explicit XSD datatype.
#[must_use]
pub fn typed_literal(lexical: &str, datatype: &'static str) -> SimpleTerm<'static> {
    SimpleTerm::LiteralDatatype(
        MownStr::from(lexical.to_owned()),
        IriRef::new_unchecked(MownStr::from(datatype)),
    )
}

/// Creates a literal term from a coerced value, mapping the native type to
/// its XSD datatype.
#[must_use]
pub fn literal(value: &TypedValue) -> SimpleTerm<'static> {
    match value {
        TypedValue::Real(v) => typed_literal(&v.to_string(), vocab::xsd::DOUBLE),
        TypedValue::Integer(v) => typed_literal(&v.to_string(), vocab::xsd::INTEGER),
        TypedValue::Boolean(v) => typed_literal(&v.to_string(), vocab::xsd::BOOLEAN),
        TypedValue::String(v) => typed_literal(v, vocab::xsd::STRING),
    }
}

/// The single mutable accumulator for one translation run.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: LightGraph,
    bnodes: u32,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one triple. Duplicate triples collapse in the underlying
    /// graph, but callers must not rely on that to resolve conflicting
    /// statements.
    pub fn insert(&mut self, s: &SimpleTerm<'_>, p: &SimpleTerm<'_>, o: &SimpleTerm<'_>) {
        // LightGraph mutation is infallible.
        let _ = self.graph.insert(s, p, o);
    }

    /// Mints a fresh blank node with a deterministic per-run label.
    pub fn bnode(&mut self) -> SimpleTerm<'static> {
        let label = format!("b{}", self.bnodes);
        self.bnodes += 1;
        SimpleTerm::BlankNode(BnodeId::new_unchecked(MownStr::from(label)))
    }

    pub(crate) fn finish(self, fmu_iri: String) -> FmuGraph {
        FmuGraph {
            graph: self.graph,
            fmu_iri,
        }
    }
}

/// The assembled RDF representation of one FMU.
#[derive(Debug)]
pub struct FmuGraph {
    graph: LightGraph,
    fmu_iri: String,
}

impl FmuGraph {
    /// The IRI minted for the FMU node (`{prefix}/{guid}`).
    #[must_use]
    pub fn fmu_iri(&self) -> &str {
        &self.fmu_iri
    }

    /// Read access to the underlying graph, for querying.
    #[must_use]
    pub fn graph(&self) -> &LightGraph {
        &self.graph
    }

    /// Number of triples in the graph.
    #[must_use]
    pub fn triple_count(&self) -> usize {
        self.graph.triples().count()
    }

    /// Serializes the graph as pretty Turtle with the fixed prefix table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the serializer rejects the
    /// graph.
    pub fn to_turtle(&self) -> Result<String, Error> {
        let config = TurtleConfig::new()
            .with_pretty(true)
            .with_own_prefix_map(vocab::prefix_map());
        let mut serializer = TurtleSerializer::new_stringifier_with_config(config);
        serializer
            .serialize_graph(&self.graph)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        Ok(serializer.as_str().to_owned())
    }

    /// Serializes the graph as N-Triples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the serializer rejects the
    /// graph.
    pub fn to_ntriples(&self) -> Result<String, Error> {
        let mut serializer = NtSerializer::new_stringifier();
        serializer
            .serialize_graph(&self.graph)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        Ok(serializer.as_str().to_owned())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn invalid_iris_are_rejected() {
        assert!(iri("http://example.org/ok#x").is_ok());
        assert!(matches!(iri("no spaces allowed"), Err(Error::InvalidIri(_))));
    }

    #[test]
    fn blank_node_labels_are_sequential() {
        let mut builder = GraphBuilder::new();
        let b0 = builder.bnode();
        let b1 = builder.bnode();
        assert_ne!(b0, b1);
        assert!(matches!(b0, SimpleTerm::BlankNode(ref id) if id.as_str() == "b0"));
        assert!(matches!(b1, SimpleTerm::BlankNode(ref id) if id.as_str() == "b1"));
    }

    #[test]
    fn literals_carry_their_xsd_datatype() {
        let lit = literal(&TypedValue::Real(3.5));
        match lit {
            SimpleTerm::LiteralDatatype(lex, dt) => {
                assert_eq!(&*lex, "3.5");
                assert_eq!(dt.as_str(), vocab::xsd::DOUBLE);
            }
            other => panic!("unexpected term: {other:?}"),
        }
    }

    #[test]
    fn ntriples_roundtrip_contains_inserted_triple() {
        let mut builder = GraphBuilder::new();
        let s = iri("http://example.org/s").unwrap();
        let p = iri_unchecked(vocab::rdf::TYPE);
        let o = iri_unchecked(vocab::fmi::FMU);
        builder.insert(&s, &p, &o);

        let graph = builder.finish("http://example.org/s".to_owned());
        assert_eq!(graph.triple_count(), 1);
        let nt = graph.to_ntriples().unwrap();
        assert!(nt.contains("<https://purl.org/fmi-ontology#FMU>"));
    }
}
