// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # hs-rdf
//!
//! Schema-driven, bidirectional mapping between RDF graphs and typed
//! resource metadata records.
//!
//! ## Architecture
//!
//! - **Triple graph** (`graph`): in-memory petgraph-indexed triples over oxigraph terms
//! - **Value coercion** (`coerce`): literals and nodes to native scalars and closed enums
//! - **Schemas** (`schema`): explicit per-type field binding tables plus the discriminator registry
//! - **Mapping** (`mapping`): serializer, parser and the `Mapper` facade
//! - **Records** (`model`): the resource and aggregation metadata vocabulary
//! - **Syntaxes** (`io`): Turtle, N-Triples and RDF/XML via `oxigraph::io`
//!
//! ## Library usage
//!
//! ```no_run
//! use hs_rdf::mapping::{parse, serialize};
//! use hs_rdf::model::{Creator, ResourceMetadata};
//!
//! let mut resource = ResourceMetadata::new("Logan River temperature");
//! resource.creators.push(Creator::new("A", 1));
//! let graph = serialize(&resource).unwrap();
//! let back: ResourceMetadata = parse(&graph, None).unwrap();
//! assert_eq!(back.title, resource.title);
//! ```

pub mod coerce;
pub mod config;
pub mod error;
pub mod graph;
pub mod io;
pub mod mapping;
pub mod model;
pub mod schema;
pub mod vocab;

pub use config::MapperConfig;
pub use error::{RdfError, RdfResult};
pub use graph::{Node, Object, Triple, TripleGraph};
pub use mapping::Mapper;
pub use schema::{Metadata, MetadataKind, RdfRecord, Schema, SchemaRegistry};
