//! Triple graph: the in-memory RDF graph the mapping engine reads and writes.
//!
//! Terms reuse oxigraph's RDF model ([`NamedNode`], [`BlankNode`], [`Literal`]);
//! this module narrows them to the two positions the engine cares about:
//!
//! - [`Node`]: a graph identity, anonymous or a URI (subjects, link objects)
//! - [`Object`]: anything that may sit in object position (a node or a literal)
//!
//! The indexed store itself is [`TripleGraph`].

pub mod index;

use std::fmt;

use oxigraph::model::{BlankNode, Literal, NamedNode, NamedNodeRef, Term};

pub use index::TripleGraph;

/// A graph identity: either an anonymous local identifier or a URI.
///
/// Nodes compare by identifier, never by what they describe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// Anonymous node, unique within one graph.
    Blank(BlankNode),
    /// Globally named node.
    Iri(NamedNode),
}

impl Node {
    /// Mint a fresh anonymous node.
    pub fn fresh() -> Self {
        Node::Blank(BlankNode::default())
    }

    /// The IRI, if this is a named node.
    pub fn as_iri(&self) -> Option<NamedNodeRef<'_>> {
        match self {
            Node::Iri(iri) => Some(iri.as_ref()),
            Node::Blank(_) => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::fresh()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Blank(b) => write!(f, "{b}"),
            Node::Iri(n) => write!(f, "{n}"),
        }
    }
}

impl From<NamedNode> for Node {
    fn from(n: NamedNode) -> Self {
        Node::Iri(n)
    }
}

impl From<NamedNodeRef<'_>> for Node {
    fn from(n: NamedNodeRef<'_>) -> Self {
        Node::Iri(n.into_owned())
    }
}

impl From<BlankNode> for Node {
    fn from(b: BlankNode) -> Self {
        Node::Blank(b)
    }
}

/// A term in object position: a node or a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Object {
    Node(Node),
    Literal(Literal),
}

impl Object {
    /// The node, if this object is one.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Object::Node(n) => Some(n),
            Object::Literal(_) => None,
        }
    }

    /// The literal, if this object is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Object::Literal(l) => Some(l),
            Object::Node(_) => None,
        }
    }

    /// Raw text of the object: the lexical form of a literal, the IRI of a
    /// named node, or the label of a blank node. Used in diagnostics.
    pub fn raw(&self) -> &str {
        match self {
            Object::Literal(l) => l.value(),
            Object::Node(Node::Iri(n)) => n.as_str(),
            Object::Node(Node::Blank(b)) => b.as_str(),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Node(n) => write!(f, "{n}"),
            Object::Literal(l) => write!(f, "{l}"),
        }
    }
}

impl From<Node> for Object {
    fn from(n: Node) -> Self {
        Object::Node(n)
    }
}

impl From<NamedNode> for Object {
    fn from(n: NamedNode) -> Self {
        Object::Node(Node::Iri(n))
    }
}

impl From<NamedNodeRef<'_>> for Object {
    fn from(n: NamedNodeRef<'_>) -> Self {
        Object::Node(Node::Iri(n.into_owned()))
    }
}

impl From<BlankNode> for Object {
    fn from(b: BlankNode) -> Self {
        Object::Node(Node::Blank(b))
    }
}

impl From<Literal> for Object {
    fn from(l: Literal) -> Self {
        Object::Literal(l)
    }
}

impl From<Node> for Term {
    fn from(n: Node) -> Self {
        match n {
            Node::Blank(b) => Term::BlankNode(b),
            Node::Iri(i) => Term::NamedNode(i),
        }
    }
}

impl From<Object> for Term {
    fn from(o: Object) -> Self {
        match o {
            Object::Node(n) => n.into(),
            Object::Literal(l) => Term::Literal(l),
        }
    }
}

/// A triple (subject, predicate, object) in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// The node the statement is about.
    pub subject: Node,
    /// The relation.
    pub predicate: NamedNode,
    /// The value.
    pub object: Object,
}

impl Triple {
    pub fn new(
        subject: impl Into<Node>,
        predicate: impl Into<NamedNode>,
        object: impl Into<Object>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_nodes_are_distinct() {
        let a = Node::fresh();
        let b = Node::fresh();
        assert_ne!(a, b);
        assert!(a.is_blank());
    }

    #[test]
    fn object_raw_text() {
        let lit = Object::from(Literal::new_simple_literal("eng"));
        assert_eq!(lit.raw(), "eng");

        let iri = Object::from(NamedNode::new("http://example.org/x").unwrap());
        assert_eq!(iri.raw(), "http://example.org/x");
        assert!(iri.as_node().is_some());
        assert!(iri.as_literal().is_none());
    }

    #[test]
    fn triple_display_is_ntriples_like() {
        let t = Triple::new(
            NamedNode::new("http://example.org/s").unwrap(),
            NamedNode::new("http://example.org/p").unwrap(),
            Literal::new_simple_literal("o"),
        );
        assert_eq!(
            t.to_string(),
            "<http://example.org/s> <http://example.org/p> \"o\" ."
        );
    }
}
