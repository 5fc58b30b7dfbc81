//! Record → graph.

use oxigraph::model::{Literal, NamedNodeRef};

use crate::error::{MappingResult, SchemaError};
use crate::graph::{Node, Object, Triple, TripleGraph};
use crate::schema::RdfRecord;
use crate::vocab::{hsterms, rdfs};

/// Walks record trees and writes their triples into one shared graph.
///
/// Fields are emitted in declaration order, nested records right after the
/// triple that links to them, and the fixed discriminators last.
pub struct Serializer<'g> {
    graph: &'g mut TripleGraph,
    max_depth: usize,
    depth: usize,
    class_labels: bool,
}

impl<'g> Serializer<'g> {
    pub fn new(graph: &'g mut TripleGraph, max_depth: usize, class_labels: bool) -> Self {
        Self {
            graph,
            max_depth,
            depth: 0,
            class_labels,
        }
    }

    /// Serialize a top-level record.
    pub fn serialize<R: RdfRecord>(&mut self, record: &R) -> MappingResult<()> {
        R::schema()?.validated()?;
        self.record(record)
    }

    /// Serialize one record, recursing into its nested records.
    pub(crate) fn record<R: RdfRecord>(&mut self, record: &R) -> MappingResult<()> {
        let schema = R::schema()?;
        if self.depth >= self.max_depth {
            return Err(SchemaError::Cycle {
                path: format!(
                    "{} nested deeper than {} levels at {}",
                    schema.name(),
                    self.max_depth,
                    record.subject()
                ),
            }
            .into());
        }

        tracing::debug!(schema = schema.name(), subject = %record.subject(), "serializing record");
        self.depth += 1;
        let result = schema
            .bindings()
            .iter()
            .try_for_each(|binding| {
                tracing::trace!(field = binding.name(), predicate = %binding.predicate(), "writing field");
                binding.write(record, schema.defaults(), self)
            });
        self.depth -= 1;
        result?;

        let subject = record.subject();
        if let Some((predicate, class)) = schema.class_discriminator() {
            self.emit(subject, predicate, class.into());
            if self.class_labels {
                if let Some(label) = schema.label() {
                    self.emit_label(class, label);
                }
            }
        }
        if let Some((predicate, class)) = schema.secondary_discriminator() {
            self.emit(subject, predicate, class.into());
        }
        Ok(())
    }

    /// Add one triple.
    pub(crate) fn emit(&mut self, subject: &Node, predicate: NamedNodeRef<'_>, object: Object) {
        self.graph
            .add(Triple::new(subject.clone(), predicate, object));
    }

    /// Link `nested` from `subject` and serialize it into the same graph.
    pub(crate) fn link<N: RdfRecord>(
        &mut self,
        subject: &Node,
        predicate: NamedNodeRef<'_>,
        nested: &N,
    ) -> MappingResult<()> {
        self.emit(subject, predicate, nested.subject().clone().into());
        self.record(nested)
    }

    /// Describe the discriminator class itself.
    fn emit_label(&mut self, class: NamedNodeRef<'_>, label: &str) {
        let class_node = Node::from(class);
        self.emit(
            &class_node,
            rdfs::LABEL,
            Literal::new_simple_literal(label).into(),
        );
        self.emit(&class_node, rdfs::IS_DEFINED_BY, hsterms::DEFINED_BY.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MappingError, SchemaResult};
    use crate::schema::{Schema, SchemaCell};
    use crate::vocab::{dc, rdf};

    #[derive(Debug, Clone, PartialEq)]
    struct Tagged {
        subject: Node,
        title: String,
        language: String,
        keywords: Vec<String>,
    }

    impl Default for Tagged {
        fn default() -> Self {
            Self {
                subject: Node::fresh(),
                title: String::new(),
                language: "eng".into(),
                keywords: Vec::new(),
            }
        }
    }

    impl RdfRecord for Tagged {
        fn schema() -> SchemaResult<&'static Schema<Self>> {
            static SCHEMA: SchemaCell<Tagged> = SchemaCell::new();
            SCHEMA.get_or_build(|| {
                Schema::<Self>::builder("Tagged")
                    .discriminator(hsterms::FILE_SET_AGGREGATION)
                    .label("File Set Content")
                    .required("title", dc::TITLE, |r| &r.title, |r| &mut r.title)
                    .with_default("language", dc::LANGUAGE, |r| &r.language, |r| &mut r.language)
                    .many("keywords", dc::SUBJECT, |r| &r.keywords, |r| &mut r.keywords)
                    .build()
            })
        }

        fn subject(&self) -> &Node {
            &self.subject
        }

        fn subject_mut(&mut self) -> &mut Node {
            &mut self.subject
        }
    }

    fn record() -> Tagged {
        Tagged {
            title: "Logan River".into(),
            keywords: vec!["x".into(), "y".into()],
            ..Tagged::default()
        }
    }

    #[test]
    fn default_values_are_not_written() {
        let mut graph = TripleGraph::new();
        let rec = record();
        Serializer::new(&mut graph, 8, false).serialize(&rec).unwrap();

        assert_eq!(graph.objects_for(rec.subject(), dc::LANGUAGE).count(), 0);
        assert_eq!(graph.objects_for(rec.subject(), dc::TITLE).count(), 1);
        assert_eq!(graph.objects_for(rec.subject(), dc::SUBJECT).count(), 2);
    }

    #[test]
    fn discriminator_written_last() {
        let mut graph = TripleGraph::new();
        let rec = record();
        Serializer::new(&mut graph, 8, false).serialize(&rec).unwrap();

        let last = graph.triples().last().unwrap();
        assert_eq!(last.predicate.as_ref(), rdf::TYPE);
        assert_eq!(last.object, Object::from(hsterms::FILE_SET_AGGREGATION));
    }

    #[test]
    fn class_labels_are_optional() {
        let rec = record();
        let class = Node::from(hsterms::FILE_SET_AGGREGATION);

        let mut plain = TripleGraph::new();
        Serializer::new(&mut plain, 8, false).serialize(&rec).unwrap();
        assert!(!plain.has_subject(&class));

        let mut labelled = TripleGraph::new();
        Serializer::new(&mut labelled, 8, true).serialize(&rec).unwrap();
        let label: Vec<_> = labelled.objects_for(&class, rdfs::LABEL).map(|o| o.raw()).collect();
        assert_eq!(label, vec!["File Set Content"]);
    }

    #[test]
    fn serializing_twice_is_idempotent() {
        let mut graph = TripleGraph::new();
        let rec = record();
        let mut serializer = Serializer::new(&mut graph, 8, true);
        serializer.serialize(&rec).unwrap();
        serializer.serialize(&rec).unwrap();
        // title, two keywords, rdf:type, label, isDefinedBy
        assert_eq!(graph.len(), 6);
    }

    #[test]
    fn zero_depth_budget_is_a_cycle_error() {
        let mut graph = TripleGraph::new();
        let err = Serializer::new(&mut graph, 0, false)
            .serialize(&record())
            .unwrap_err();
        assert!(matches!(err, MappingError::Schema(SchemaError::Cycle { .. })));
    }
}
