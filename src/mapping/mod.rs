//! Mapping facade: the top-level API for moving records in and out of graphs.
//!
//! [`Mapper`] bundles a [`MapperConfig`] with the process-wide
//! [`SchemaRegistry`]. The free functions [`serialize`] and [`parse`] use the
//! default configuration.

pub mod parse;
pub mod serialize;

pub use parse::Parser;
pub use serialize::Serializer;

use crate::config::MapperConfig;
use crate::error::{MappingResult, RdfResult};
use crate::graph::{Node, TripleGraph};
use crate::io::{self, Syntax};
use crate::schema::{Metadata, MetadataKind, RdfRecord, SchemaRegistry};

/// Serializes, parses and dispatches records with one configuration.
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    config: MapperConfig,
}

impl Mapper {
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Write `record` (and everything nested in it) into `graph`.
    pub fn serialize<R: RdfRecord>(&self, record: &R, graph: &mut TripleGraph) -> MappingResult<()> {
        Serializer::new(graph, self.config.max_depth, self.config.class_labels).serialize(record)
    }

    /// Serialize `record` into a fresh graph.
    pub fn to_graph<R: RdfRecord>(&self, record: &R) -> MappingResult<TripleGraph> {
        let mut graph = TripleGraph::new();
        self.serialize(record, &mut graph)?;
        Ok(graph)
    }

    /// Parse a record of a known type. Without a subject, the node carrying
    /// the type's discriminator is used.
    pub fn parse<R: RdfRecord>(&self, graph: &TripleGraph, subject: Option<&Node>) -> MappingResult<R> {
        Parser::new(graph, self.config.max_depth).parse(subject)
    }

    /// Which registered record type the graph describes.
    pub fn resolve(&self, graph: &TripleGraph) -> MappingResult<MetadataKind> {
        SchemaRegistry::global()?.resolve(graph)
    }

    /// Parse a graph of unknown type.
    pub fn load(&self, graph: &TripleGraph) -> MappingResult<Metadata> {
        SchemaRegistry::global()?.load(graph, self.config.max_depth)
    }

    /// Read a document and parse it as whatever record type it describes.
    pub fn load_str(&self, text: &str, syntax: Option<Syntax>) -> RdfResult<Metadata> {
        let graph = io::read_graph(text, syntax.unwrap_or(self.config.format))?;
        Ok(self.load(&graph)?)
    }

    /// Serialize `record` and render it as a document.
    pub fn to_string<R: RdfRecord>(&self, record: &R, syntax: Option<Syntax>) -> RdfResult<String> {
        let graph = self.to_graph(record)?;
        Ok(io::write_graph(&graph, syntax.unwrap_or(self.config.format))?)
    }
}

/// Serialize `record` into a fresh graph with the default configuration.
pub fn serialize<R: RdfRecord>(record: &R) -> MappingResult<TripleGraph> {
    Mapper::default().to_graph(record)
}

/// Parse a record with the default configuration.
pub fn parse<R: RdfRecord>(graph: &TripleGraph, subject: Option<&Node>) -> MappingResult<R> {
    Mapper::default().parse(graph, subject)
}
