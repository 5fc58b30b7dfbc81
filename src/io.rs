//! Textual RDF syntaxes: reading documents into a [`TripleGraph`] and
//! writing graphs back out, via `oxigraph::io`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use oxigraph::io::{RdfFormat, RdfParser, RdfSerializer};
use oxigraph::model::{Term, Triple as OxTriple};
use serde::{Deserialize, Serialize};

use crate::error::{SyntaxError, SyntaxResult};
use crate::graph::{Node, Object, Triple, TripleGraph};
use crate::vocab::PREFIXES;

/// A supported document syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Syntax {
    Turtle,
    /// RDF/XML, the interchange syntax of resource metadata documents.
    #[default]
    RdfXml,
    NTriples,
}

impl Syntax {
    /// Guess the syntax from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "ttl" | "turtle" => Some(Syntax::Turtle),
            "xml" | "rdf" | "owl" => Some(Syntax::RdfXml),
            "nt" => Some(Syntax::NTriples),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Syntax::Turtle => "turtle",
            Syntax::RdfXml => "rdf-xml",
            Syntax::NTriples => "n-triples",
        }
    }

    fn rdf_format(self) -> RdfFormat {
        match self {
            Syntax::Turtle => RdfFormat::Turtle,
            Syntax::RdfXml => RdfFormat::RdfXml,
            Syntax::NTriples => RdfFormat::NTriples,
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Syntax {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(Syntax::Turtle),
            "rdf-xml" | "rdfxml" | "xml" => Ok(Syntax::RdfXml),
            "n-triples" | "ntriples" | "nt" => Ok(Syntax::NTriples),
            _ => Err(SyntaxError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

/// Parse a document into a fresh graph.
///
/// Only default-graph triples are kept. Quoted triples have no place in the
/// record model and are skipped.
pub fn read_graph(text: &str, syntax: Syntax) -> SyntaxResult<TripleGraph> {
    let mut graph = TripleGraph::new();
    let mut skipped = 0usize;
    let parser = RdfParser::from_format(syntax.rdf_format()).for_reader(text.as_bytes());
    for quad in parser {
        let quad = quad.map_err(|e| SyntaxError::Parse {
            format: syntax.to_string(),
            message: e.to_string(),
        })?;
        if !quad.graph_name.is_default_graph() {
            skipped += 1;
            continue;
        }
        let subject = match Term::from(quad.subject) {
            Term::NamedNode(n) => Node::Iri(n),
            Term::BlankNode(b) => Node::Blank(b),
            _ => {
                skipped += 1;
                continue;
            }
        };
        let object = match quad.object {
            Term::NamedNode(n) => Object::from(n),
            Term::BlankNode(b) => Object::from(b),
            Term::Literal(l) => Object::from(l),
            #[allow(unreachable_patterns)]
            _ => {
                skipped += 1;
                continue;
            }
        };
        graph.add(Triple {
            subject,
            predicate: quad.predicate,
            object,
        });
    }
    if skipped > 0 {
        tracing::warn!(skipped, format = %syntax, "ignored statements outside the default graph or with quoted triples");
    }
    tracing::debug!(triples = graph.len(), format = %syntax, "read document");
    Ok(graph)
}

/// Read a document from disk. Without an explicit syntax, the file extension
/// decides.
pub fn read_file(path: &Path, syntax: Option<Syntax>) -> SyntaxResult<TripleGraph> {
    let syntax = match syntax {
        Some(syntax) => syntax,
        None => {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            Syntax::from_extension(ext).ok_or_else(|| SyntaxError::UnknownFormat {
                name: path.display().to_string(),
            })?
        }
    };
    let text = std::fs::read_to_string(path).map_err(|source| SyntaxError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_graph(&text, syntax)
}

fn to_ox(triple: Triple) -> OxTriple {
    let object = Term::from(triple.object);
    match triple.subject {
        Node::Iri(n) => OxTriple::new(n, triple.predicate, object),
        Node::Blank(b) => OxTriple::new(b, triple.predicate, object),
    }
}

/// Render a graph with the well-known prefixes bound.
pub fn write_graph(graph: &TripleGraph, syntax: Syntax) -> SyntaxResult<String> {
    let write_err = |message: String| SyntaxError::Write {
        format: syntax.to_string(),
        message,
    };

    let mut serializer = RdfSerializer::from_format(syntax.rdf_format());
    // The RDF/XML writer always declares `rdf:` itself.
    let prefixes = PREFIXES
        .iter()
        .filter(|(prefix, _)| syntax != Syntax::RdfXml || *prefix != "rdf");
    for (prefix, iri) in prefixes {
        serializer = serializer
            .with_prefix(*prefix, *iri)
            .map_err(|e| write_err(e.to_string()))?;
    }
    let mut writer = serializer.for_writer(Vec::new());
    for triple in graph.triples() {
        writer
            .serialize_triple(&to_ox(triple))
            .map_err(|e| write_err(e.to_string()))?;
    }
    let bytes = writer.finish().map_err(|e| write_err(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| write_err(e.to_string()))
}
