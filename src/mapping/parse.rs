//! Graph → record.

use crate::error::{MappingError, MappingResult, SchemaError};
use crate::graph::{Node, Object, TripleGraph};
use crate::schema::{RdfRecord, Schema};

/// Reads record trees out of a graph.
///
/// Holds no state beyond the current nesting depth; every top-level
/// [`parse`](Self::parse) is a pure function of the graph and the subject.
pub struct Parser<'g> {
    graph: &'g TripleGraph,
    max_depth: usize,
    depth: usize,
}

impl<'g> Parser<'g> {
    pub fn new(graph: &'g TripleGraph, max_depth: usize) -> Self {
        Self {
            graph,
            max_depth,
            depth: 0,
        }
    }

    pub fn graph(&self) -> &'g TripleGraph {
        self.graph
    }

    /// Parse a top-level record.
    ///
    /// Without a subject, the node typed with the schema's discriminator is
    /// used. Once a subject is known a record is always returned, with every
    /// field missing from the graph left at its default.
    pub fn parse<R: RdfRecord>(&mut self, subject: Option<&Node>) -> MappingResult<R> {
        let schema = R::schema()?;
        schema.validated()?;
        let subject = match subject {
            Some(subject) => subject.clone(),
            None => resolve_subject(self.graph, schema)?,
        };
        match self.record::<R>(&subject)? {
            Some(record) => Ok(record),
            None => {
                tracing::debug!(schema = schema.name(), %subject, "subject has no mapped fields");
                let mut record = R::default();
                *record.subject_mut() = subject;
                Ok(record)
            }
        }
    }

    /// Parse one record at `subject`. `None` when no binding matched.
    pub(crate) fn record<R: RdfRecord>(&mut self, subject: &Node) -> MappingResult<Option<R>> {
        let schema = R::schema()?;
        if self.depth >= self.max_depth {
            return Err(SchemaError::Cycle {
                path: format!(
                    "{} nested deeper than {} levels at {subject}",
                    schema.name(),
                    self.max_depth
                ),
            }
            .into());
        }

        tracing::debug!(schema = schema.name(), %subject, "parsing record");
        let mut record = R::default();
        let mut matched = false;
        self.depth += 1;
        let result = schema.bindings().iter().try_for_each(|binding| {
            let found = binding.read(&mut record, subject, self)?;
            tracing::trace!(field = binding.name(), found, "read field");
            matched |= found;
            Ok::<_, MappingError>(())
        });
        self.depth -= 1;
        result?;

        if !matched {
            return Ok(None);
        }
        *record.subject_mut() = subject.clone();
        Ok(Some(record))
    }
}

/// The one node carrying the schema's `rdf:type` discriminator.
pub(crate) fn resolve_subject<R: RdfRecord>(
    graph: &TripleGraph,
    schema: &Schema<R>,
) -> MappingResult<Node> {
    let (predicate, class) =
        schema
            .class_discriminator()
            .ok_or_else(|| MappingError::SubjectRequired {
                schema: schema.name().to_string(),
            })?;
    graph
        .subject_for(predicate, &Object::from(class))?
        .cloned()
        .ok_or_else(|| MappingError::SubjectNotFound {
            predicate: predicate.to_string(),
            discriminator: class.to_string(),
        })
}
