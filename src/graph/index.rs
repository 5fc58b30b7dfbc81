//! In-memory triple graph with subject and object indexing.
//!
//! Uses `petgraph` for the graph structure: every distinct node or literal is a
//! graph vertex, every triple an edge carrying its predicate. A side index maps
//! terms to vertices so `(subject, predicate)` and `(predicate, object)` lookups
//! only walk the edges of one vertex.
//!
//! The graph is a set: inserting a triple that is already present is a no-op.
//! It is not designed for concurrent mutation; callers serializing several
//! record trees into one graph must order their writes.

use std::collections::HashMap;

use oxigraph::model::{Literal, NamedNode, NamedNodeRef};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::error::{GraphError, GraphResult};

use super::{Node, Object, Triple};

/// In-memory RDF graph backed by petgraph.
#[derive(Clone, Default)]
pub struct TripleGraph {
    /// Vertices are terms, edges carry predicates.
    graph: DiGraph<Object, NamedNode>,
    /// Node → vertex, for subject lookups and link objects.
    nodes: HashMap<Node, NodeIndex>,
    /// Literal → vertex.
    literals: HashMap<Literal, NodeIndex>,
}

impl TripleGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a vertex exists for the given term, returning its index.
    fn ensure_vertex(&mut self, term: &Object) -> NodeIndex {
        if let Some(idx) = self.vertex(term) {
            return idx;
        }
        let idx = self.graph.add_node(term.clone());
        match term {
            Object::Node(n) => self.nodes.insert(n.clone(), idx),
            Object::Literal(l) => self.literals.insert(l.clone(), idx),
        };
        idx
    }

    fn vertex(&self, term: &Object) -> Option<NodeIndex> {
        match term {
            Object::Node(n) => self.nodes.get(n).copied(),
            Object::Literal(l) => self.literals.get(l).copied(),
        }
    }

    /// Insert a triple. Returns `false` if it was already present.
    pub fn add(&mut self, triple: Triple) -> bool {
        let subject = Object::Node(triple.subject);
        if self.contains_parts(&subject, triple.predicate.as_ref(), &triple.object) {
            return false;
        }
        let subj_idx = self.ensure_vertex(&subject);
        let obj_idx = self.ensure_vertex(&triple.object);
        self.graph.add_edge(subj_idx, obj_idx, triple.predicate);
        true
    }

    /// Insert a triple from its parts. Returns `false` if it was already present.
    pub fn insert(
        &mut self,
        subject: impl Into<Node>,
        predicate: impl Into<NamedNode>,
        object: impl Into<Object>,
    ) -> bool {
        self.add(Triple::new(subject, predicate, object))
    }

    /// Whether the graph holds this exact triple.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.contains_parts(
            &Object::Node(triple.subject.clone()),
            triple.predicate.as_ref(),
            &triple.object,
        )
    }

    fn contains_parts(&self, subject: &Object, predicate: NamedNodeRef<'_>, object: &Object) -> bool {
        let (Some(s), Some(o)) = (self.vertex(subject), self.vertex(object)) else {
            return false;
        };
        self.graph
            .edges_connecting(s, o)
            .any(|e| e.weight().as_ref() == predicate)
    }

    /// All objects for a given subject and predicate.
    ///
    /// The sequence is lazy and is restarted by calling this again. Its order
    /// is stable for an unchanged graph but carries no meaning: callers that
    /// need an order must sort on an explicit field.
    pub fn objects_for<'a>(
        &'a self,
        subject: &Node,
        predicate: NamedNodeRef<'a>,
    ) -> impl Iterator<Item = &'a Object> + use<'a> {
        let start = self.nodes.get(subject).copied();
        start
            .into_iter()
            .flat_map(move |idx| self.graph.edges_directed(idx, Direction::Outgoing))
            .filter(move |e| e.weight().as_ref() == predicate)
            .map(move |e| &self.graph[e.target()])
    }

    /// All subjects for a given predicate and object.
    pub fn subjects_for<'a>(
        &'a self,
        predicate: NamedNodeRef<'a>,
        object: &Object,
    ) -> impl Iterator<Item = &'a Node> + use<'a> {
        let start = self.vertex(object);
        start
            .into_iter()
            .flat_map(move |idx| self.graph.edges_directed(idx, Direction::Incoming))
            .filter(move |e| e.weight().as_ref() == predicate)
            .filter_map(move |e| self.graph[e.source()].as_node())
    }

    /// The single subject for a given predicate and object.
    ///
    /// Returns `Ok(None)` when nothing matches and
    /// [`GraphError::AmbiguousSubject`] when more than one subject does.
    pub fn subject_for<'a>(
        &'a self,
        predicate: NamedNodeRef<'a>,
        object: &Object,
    ) -> GraphResult<Option<&'a Node>> {
        let mut matches = self.subjects_for(predicate, object);
        let Some(first) = matches.next() else {
            return Ok(None);
        };
        let rest = matches.filter(|n| *n != first).count();
        if rest > 0 {
            return Err(GraphError::AmbiguousSubject {
                predicate: predicate.to_string(),
                object: object.to_string(),
                count: rest + 1,
            });
        }
        Ok(Some(first))
    }

    /// All triples in insertion order.
    pub fn triples(&self) -> impl Iterator<Item = Triple> + '_ {
        self.graph.raw_edges().iter().filter_map(|edge| {
            let subject = self.graph[edge.source()].as_node()?.clone();
            Some(Triple {
                subject,
                predicate: edge.weight.clone(),
                object: self.graph[edge.target()].clone(),
            })
        })
    }

    /// All triples whose predicate matches, in insertion order.
    pub fn triples_for_predicate<'a>(
        &'a self,
        predicate: NamedNodeRef<'a>,
    ) -> impl Iterator<Item = (&'a Node, &'a Object)> + 'a {
        self.graph
            .raw_edges()
            .iter()
            .filter(move |edge| edge.weight.as_ref() == predicate)
            .filter_map(move |edge| {
                let subject = self.graph[edge.source()].as_node()?;
                Some((subject, &self.graph[edge.target()]))
            })
    }

    /// Bulk-insert triples. Returns the number that were new.
    pub fn extend_from(&mut self, triples: impl IntoIterator<Item = Triple>) -> usize {
        let mut added = 0;
        for triple in triples {
            if self.add(triple) {
                added += 1;
            }
        }
        added
    }

    /// Whether the given node appears as a subject of any triple.
    pub fn has_subject(&self, subject: &Node) -> bool {
        self.nodes
            .get(subject)
            .map(|idx| {
                self.graph
                    .edges_directed(*idx, Direction::Outgoing)
                    .next()
                    .is_some()
            })
            .unwrap_or(false)
    }

    /// Number of triples.
    pub fn len(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has no triples.
    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }

    /// Number of distinct terms (nodes and literals).
    pub fn term_count(&self) -> usize {
        self.graph.node_count()
    }
}

impl FromIterator<Triple> for TripleGraph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend_from(iter);
        graph
    }
}

impl std::fmt::Debug for TripleGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TripleGraph")
            .field("terms", &self.term_count())
            .field("triples", &self.len())
            .finish()
    }
}
