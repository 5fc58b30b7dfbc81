//! Closed-set dispatch from `rdf:type` discriminators to record types.
//!
//! The set of top-level record types is fixed at compile time:
//! [`MetadataKind`] names them and [`Metadata`] holds a parsed instance of
//! any of them. [`SchemaRegistry`] maps each discriminator class to its kind
//! and is built once per process.

use std::sync::OnceLock;

use oxigraph::model::{NamedNode, NamedNodeRef};

use crate::error::{MappingError, MappingResult, SchemaError, SchemaResult};
use crate::graph::{Node, TripleGraph};
use crate::mapping::{Parser, Serializer};
use crate::model::{
    Aggregation, FileSetAggregation, GeographicFeatureAggregation, GeographicRasterAggregation,
    MultidimensionalAggregation, ReferencedTimeSeriesAggregation, ResourceMap, ResourceMetadata,
    SingleFileAggregation, TimeSeriesAggregation,
};
use crate::vocab::rdf;

use super::RdfRecord;

/// Every top-level record type, in dispatch-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    ResourceMap,
    Resource,
    GeographicRaster,
    GeographicFeature,
    Multidimensional,
    ReferencedTimeSeries,
    TimeSeries,
    FileSet,
    SingleFile,
}

fn discriminator_of<R: RdfRecord>() -> SchemaResult<NamedNode> {
    let schema = R::schema()?;
    schema.validated()?;
    schema
        .class_discriminator()
        .map(|(_, class)| class.into_owned())
        .ok_or_else(|| SchemaError::MissingDiscriminator {
            schema: schema.name().to_string(),
        })
}

impl MetadataKind {
    pub const ALL: [MetadataKind; 9] = [
        MetadataKind::ResourceMap,
        MetadataKind::Resource,
        MetadataKind::GeographicRaster,
        MetadataKind::GeographicFeature,
        MetadataKind::Multidimensional,
        MetadataKind::ReferencedTimeSeries,
        MetadataKind::TimeSeries,
        MetadataKind::FileSet,
        MetadataKind::SingleFile,
    ];

    /// Name of the schema behind this kind.
    pub fn schema_name(self) -> &'static str {
        match self {
            MetadataKind::ResourceMap => "ResourceMap",
            MetadataKind::Resource => "ResourceMetadata",
            MetadataKind::GeographicRaster => "GeographicRasterAggregation",
            MetadataKind::GeographicFeature => "GeographicFeatureAggregation",
            MetadataKind::Multidimensional => "MultidimensionalAggregation",
            MetadataKind::ReferencedTimeSeries => "ReferencedTimeSeriesAggregation",
            MetadataKind::TimeSeries => "TimeSeriesAggregation",
            MetadataKind::FileSet => "FileSetAggregation",
            MetadataKind::SingleFile => "SingleFileAggregation",
        }
    }

    /// Build and validate the schema, returning its discriminator class.
    fn discriminator(self) -> SchemaResult<NamedNode> {
        match self {
            MetadataKind::ResourceMap => discriminator_of::<ResourceMap>(),
            MetadataKind::Resource => discriminator_of::<ResourceMetadata>(),
            MetadataKind::GeographicRaster => discriminator_of::<GeographicRasterAggregation>(),
            MetadataKind::GeographicFeature => discriminator_of::<GeographicFeatureAggregation>(),
            MetadataKind::Multidimensional => discriminator_of::<MultidimensionalAggregation>(),
            MetadataKind::ReferencedTimeSeries => {
                discriminator_of::<ReferencedTimeSeriesAggregation>()
            }
            MetadataKind::TimeSeries => discriminator_of::<TimeSeriesAggregation>(),
            MetadataKind::FileSet => discriminator_of::<FileSetAggregation>(),
            MetadataKind::SingleFile => discriminator_of::<SingleFileAggregation>(),
        }
    }
}

/// A parsed top-level record of any registered type.
#[derive(Debug, Clone, PartialEq)]
pub enum Metadata {
    ResourceMap(ResourceMap),
    Resource(Box<ResourceMetadata>),
    GeographicRaster(GeographicRasterAggregation),
    GeographicFeature(GeographicFeatureAggregation),
    Multidimensional(MultidimensionalAggregation),
    ReferencedTimeSeries(ReferencedTimeSeriesAggregation),
    TimeSeries(TimeSeriesAggregation),
    FileSet(FileSetAggregation),
    SingleFile(SingleFileAggregation),
}

impl Metadata {
    pub fn kind(&self) -> MetadataKind {
        match self {
            Metadata::ResourceMap(_) => MetadataKind::ResourceMap,
            Metadata::Resource(_) => MetadataKind::Resource,
            Metadata::GeographicRaster(_) => MetadataKind::GeographicRaster,
            Metadata::GeographicFeature(_) => MetadataKind::GeographicFeature,
            Metadata::Multidimensional(_) => MetadataKind::Multidimensional,
            Metadata::ReferencedTimeSeries(_) => MetadataKind::ReferencedTimeSeries,
            Metadata::TimeSeries(_) => MetadataKind::TimeSeries,
            Metadata::FileSet(_) => MetadataKind::FileSet,
            Metadata::SingleFile(_) => MetadataKind::SingleFile,
        }
    }

    pub fn subject(&self) -> &Node {
        match self {
            Metadata::ResourceMap(r) => r.subject(),
            Metadata::Resource(r) => r.subject(),
            Metadata::GeographicRaster(r) => r.subject(),
            Metadata::GeographicFeature(r) => r.subject(),
            Metadata::Multidimensional(r) => r.subject(),
            Metadata::ReferencedTimeSeries(r) => r.subject(),
            Metadata::TimeSeries(r) => r.subject(),
            Metadata::FileSet(r) => r.subject(),
            Metadata::SingleFile(r) => r.subject(),
        }
    }

    /// The record's title. A resource map reports the title of the
    /// aggregation it describes.
    pub fn title(&self) -> &str {
        match self {
            Metadata::ResourceMap(r) => &r.describes.title,
            Metadata::Resource(r) => &r.title,
            Metadata::GeographicRaster(r) => r.title(),
            Metadata::GeographicFeature(r) => r.title(),
            Metadata::Multidimensional(r) => r.title(),
            Metadata::ReferencedTimeSeries(r) => r.title(),
            Metadata::TimeSeries(r) => r.title(),
            Metadata::FileSet(r) => r.title(),
            Metadata::SingleFile(r) => r.title(),
        }
    }

    /// Write the wrapped record.
    pub fn serialize(&self, out: &mut Serializer<'_>) -> MappingResult<()> {
        match self {
            Metadata::ResourceMap(r) => out.serialize(r),
            Metadata::Resource(r) => out.serialize(r.as_ref()),
            Metadata::GeographicRaster(r) => out.serialize(r),
            Metadata::GeographicFeature(r) => out.serialize(r),
            Metadata::Multidimensional(r) => out.serialize(r),
            Metadata::ReferencedTimeSeries(r) => out.serialize(r),
            Metadata::TimeSeries(r) => out.serialize(r),
            Metadata::FileSet(r) => out.serialize(r),
            Metadata::SingleFile(r) => out.serialize(r),
        }
    }

    /// Parse a record of the given kind.
    pub fn parse(
        kind: MetadataKind,
        input: &mut Parser<'_>,
        subject: Option<&Node>,
    ) -> MappingResult<Self> {
        Ok(match kind {
            MetadataKind::ResourceMap => Metadata::ResourceMap(input.parse(subject)?),
            MetadataKind::Resource => Metadata::Resource(Box::new(input.parse(subject)?)),
            MetadataKind::GeographicRaster => Metadata::GeographicRaster(input.parse(subject)?),
            MetadataKind::GeographicFeature => Metadata::GeographicFeature(input.parse(subject)?),
            MetadataKind::Multidimensional => Metadata::Multidimensional(input.parse(subject)?),
            MetadataKind::ReferencedTimeSeries => {
                Metadata::ReferencedTimeSeries(input.parse(subject)?)
            }
            MetadataKind::TimeSeries => Metadata::TimeSeries(input.parse(subject)?),
            MetadataKind::FileSet => Metadata::FileSet(input.parse(subject)?),
            MetadataKind::SingleFile => Metadata::SingleFile(input.parse(subject)?),
        })
    }
}

/// Discriminator class → record kind.
#[derive(Debug)]
pub struct SchemaRegistry {
    entries: Vec<(NamedNode, MetadataKind)>,
}

impl SchemaRegistry {
    /// Build every registered schema, validate it and index its
    /// discriminator. Duplicate discriminators are rejected.
    pub fn build() -> SchemaResult<Self> {
        let mut entries: Vec<(NamedNode, MetadataKind)> = Vec::with_capacity(MetadataKind::ALL.len());
        for kind in MetadataKind::ALL {
            let class = kind.discriminator()?;
            if let Some((_, first)) = entries.iter().find(|(c, _)| *c == class) {
                return Err(SchemaError::DuplicateDiscriminator {
                    iri: class.as_str().to_string(),
                    first: first.schema_name().to_string(),
                    second: kind.schema_name().to_string(),
                });
            }
            entries.push((class, kind));
        }
        Ok(Self { entries })
    }

    /// The process-wide registry, built on first use.
    pub fn global() -> SchemaResult<&'static SchemaRegistry> {
        static REGISTRY: OnceLock<SchemaResult<SchemaRegistry>> = OnceLock::new();
        REGISTRY
            .get_or_init(|| {
                let registry = SchemaRegistry::build();
                if let Ok(registry) = &registry {
                    tracing::info!(schemas = registry.len(), "schema registry built");
                }
                registry
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered discriminator classes with their kinds.
    pub fn entries(&self) -> impl Iterator<Item = (NamedNodeRef<'_>, MetadataKind)> {
        self.entries.iter().map(|(class, kind)| (class.as_ref(), *kind))
    }

    pub fn kind_for(&self, class: NamedNodeRef<'_>) -> Option<MetadataKind> {
        self.entries
            .iter()
            .find(|(c, _)| c.as_ref() == class)
            .map(|(_, kind)| *kind)
    }

    pub fn discriminator_for(&self, kind: MetadataKind) -> Option<NamedNodeRef<'_>> {
        self.entries
            .iter()
            .find(|(_, k)| *k == kind)
            .map(|(class, _)| class.as_ref())
    }

    /// The kind of the first `rdf:type` object in graph order that is a
    /// registered discriminator.
    pub fn resolve(&self, graph: &TripleGraph) -> MappingResult<MetadataKind> {
        let mut found: Option<MetadataKind> = None;
        for (subject, object) in graph.triples_for_predicate(rdf::TYPE) {
            let Some(class) = object.as_node().and_then(Node::as_iri) else {
                continue;
            };
            match (self.kind_for(class), found) {
                (None, _) => {
                    tracing::debug!(%subject, %class, "ignoring unregistered rdf:type");
                }
                (Some(kind), None) => found = Some(kind),
                (Some(kind), Some(first)) if kind != first => {
                    tracing::warn!(
                        %subject,
                        %class,
                        chosen = first.schema_name(),
                        "graph carries several registered discriminators, keeping the first"
                    );
                }
                (Some(_), Some(_)) => {}
            }
        }
        found.ok_or(MappingError::SchemaNotFound {
            registered: self.len(),
        })
    }

    /// Resolve the graph's kind and parse it.
    pub fn load(&self, graph: &TripleGraph, max_depth: usize) -> MappingResult<Metadata> {
        let kind = self.resolve(graph)?;
        tracing::debug!(schema = kind.schema_name(), "dispatching graph");
        let mut parser = Parser::new(graph, max_depth);
        Metadata::parse(kind, &mut parser, None)
    }
}
