//! Resource-level records: the composite resource itself and the OAI-ORE
//! resource map that lists its files.

use std::collections::BTreeMap;

use oxigraph::model::NamedNode;

use crate::coerce::Timestamp;
use crate::error::{MappingResult, SchemaResult};
use crate::graph::Node;
use crate::schema::{RdfRecord, Schema, SchemaCell};
use crate::vocab::{citoterms, dc, hsresource, hsterms, ore};

use super::coverage::{self, PeriodCoverage, SpatialCoverage};
use super::enums::DateType;
use super::fields::{
    self, AwardInfo, Contributor, Coverage, Creator, Date, Description, ExtendedMetadata,
    Identifier, Publisher, Relation, Rights, Source,
};

/// Mint `http://www.hydroshare.org/resource/<uuid>` for a new resource.
pub fn mint_resource_id() -> Node {
    let iri = format!("{}{}", hsresource::NS, uuid::Uuid::new_v4().simple());
    Node::Iri(NamedNode::new_unchecked(iri))
}

/// Metadata of a composite resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceMetadata {
    pub subject: Node,
    pub title: String,
    pub description: Option<Description>,
    pub language: String,
    pub subjects: Vec<String>,
    pub identifier: Option<Identifier>,
    pub creators: Vec<Creator>,
    pub contributors: Vec<Contributor>,
    pub sources: Vec<Source>,
    pub relations: Vec<Relation>,
    pub extended_metadata: Vec<ExtendedMetadata>,
    pub rights: Option<Rights>,
    pub dates: Vec<Date>,
    pub award_infos: Vec<AwardInfo>,
    pub coverages: Vec<Coverage>,
    pub publisher: Option<Publisher>,
}

impl Default for ResourceMetadata {
    fn default() -> Self {
        Self {
            subject: mint_resource_id(),
            title: String::new(),
            description: None,
            language: "eng".into(),
            subjects: Vec::new(),
            identifier: None,
            creators: Vec::new(),
            contributors: Vec::new(),
            sources: Vec::new(),
            relations: Vec::new(),
            extended_metadata: Vec::new(),
            rights: None,
            dates: Vec::new(),
            award_infos: Vec::new(),
            coverages: Vec::new(),
            publisher: None,
        }
    }
}

impl RdfRecord for ResourceMetadata {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<ResourceMetadata> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("ResourceMetadata")
                .discriminator(hsterms::COMPOSITE_RESOURCE)
                .secondary_type(hsterms::COMPOSITE_RESOURCE)
                .label("Composite Resource")
                .required("title", dc::TITLE, |r| &r.title, |r| &mut r.title)
                .nested(
                    "description",
                    dc::DESCRIPTION,
                    |r| &r.description,
                    |r| &mut r.description,
                )
                .with_default("language", dc::LANGUAGE, |r| &r.language, |r| &mut r.language)
                .many("subjects", dc::SUBJECT, |r| &r.subjects, |r| &mut r.subjects)
                .nested("identifier", dc::IDENTIFIER, |r| &r.identifier, |r| &mut r.identifier)
                .nested_many("creators", dc::CREATOR, |r| &r.creators, |r| &mut r.creators)
                .nested_many(
                    "contributors",
                    dc::CONTRIBUTOR,
                    |r| &r.contributors,
                    |r| &mut r.contributors,
                )
                .nested_many("sources", dc::SOURCE, |r| &r.sources, |r| &mut r.sources)
                .nested_many("relations", dc::RELATION, |r| &r.relations, |r| &mut r.relations)
                .nested_many(
                    "extended_metadata",
                    hsterms::EXTENDED_METADATA,
                    |r| &r.extended_metadata,
                    |r| &mut r.extended_metadata,
                )
                .nested("rights", dc::RIGHTS, |r| &r.rights, |r| &mut r.rights)
                .nested_many("dates", dc::DATE, |r| &r.dates, |r| &mut r.dates)
                .nested_many(
                    "award_infos",
                    hsterms::AWARD_INFO,
                    |r| &r.award_infos,
                    |r| &mut r.award_infos,
                )
                .nested_many("coverages", dc::COVERAGE, |r| &r.coverages, |r| &mut r.coverages)
                .nested("publisher", dc::PUBLISHER, |r| &r.publisher, |r| &mut r.publisher)
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

impl ResourceMetadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// The abstract, if any.
    pub fn abstract_text(&self) -> Option<&str> {
        self.description.as_ref()?.abstract_text.as_deref()
    }

    /// Set or clear the abstract. Clearing drops the description node.
    pub fn set_abstract(&mut self, text: Option<String>) {
        let Some(text) = text else {
            self.description = None;
            return;
        };
        if let Some(description) = self.description.as_mut() {
            description.abstract_text = Some(text);
        } else {
            self.description = Some(Description {
                abstract_text: Some(text),
                ..Description::default()
            });
        }
    }

    /// Creators in `creator_order`. Ties keep their graph order.
    pub fn sorted_creators(&self) -> Vec<&Creator> {
        let mut creators: Vec<&Creator> = self.creators.iter().collect();
        creators.sort_by_key(|c| c.creator_order);
        creators
    }

    /// The first date of the given type.
    pub fn date(&self, date_type: DateType) -> Option<Timestamp> {
        self.dates
            .iter()
            .find(|d| d.date_type == date_type)
            .map(|d| d.value)
    }

    /// Replace every date of the given type.
    pub fn set_date(&mut self, date_type: DateType, value: Option<Timestamp>) {
        self.dates.retain(|d| d.date_type != date_type);
        if let Some(value) = value {
            self.dates.push(Date::new(date_type, value));
        }
    }

    pub fn created(&self) -> Option<Timestamp> {
        self.date(DateType::Created)
    }

    pub fn modified(&self) -> Option<Timestamp> {
        self.date(DateType::Modified)
    }

    pub fn published(&self) -> Option<Timestamp> {
        self.date(DateType::Published)
    }

    pub fn additional_metadata(&self) -> BTreeMap<String, String> {
        fields::extended_metadata_map(&self.extended_metadata)
    }

    pub fn set_additional_metadata(&mut self, map: &BTreeMap<String, String>) {
        fields::set_extended_metadata(&mut self.extended_metadata, map);
    }

    pub fn spatial_coverage(&self) -> MappingResult<Option<SpatialCoverage>> {
        coverage::spatial_coverage(&self.coverages)
    }

    pub fn set_spatial_coverage(&mut self, spatial: Option<&SpatialCoverage>) {
        coverage::set_spatial_coverage(&mut self.coverages, spatial);
    }

    pub fn period_coverage(&self) -> MappingResult<Option<PeriodCoverage>> {
        coverage::period_coverage(&self.coverages)
    }

    pub fn set_period_coverage(&mut self, period: Option<&PeriodCoverage>) {
        coverage::set_period_coverage(&mut self.coverages, period);
    }
}

/// The `ore:Aggregation` a resource map describes: the resource's file list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileMap {
    pub subject: Node,
    pub is_documented_by: Option<NamedNode>,
    pub files: Vec<NamedNode>,
    pub title: String,
    pub is_described_by: Option<NamedNode>,
}

impl RdfRecord for FileMap {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<FileMap> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("FileMap")
                .discriminator(ore::AGGREGATION)
                .optional(
                    "is_documented_by",
                    citoterms::IS_DOCUMENTED_BY,
                    |r| &r.is_documented_by,
                    |r| &mut r.is_documented_by,
                )
                .many("files", ore::AGGREGATES, |r| &r.files, |r| &mut r.files)
                .required("title", dc::TITLE, |r| &r.title, |r| &mut r.title)
                .optional(
                    "is_described_by",
                    ore::IS_DESCRIBED_BY,
                    |r| &r.is_described_by,
                    |r| &mut r.is_described_by,
                )
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

/// An OAI-ORE resource map document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceMap {
    pub subject: Node,
    pub describes: FileMap,
    pub identifier: Option<String>,
    pub creator: Option<String>,
}

impl RdfRecord for ResourceMap {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<ResourceMap> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("ResourceMap")
                .discriminator(ore::RESOURCE_MAP)
                .nested_required(
                    "describes",
                    ore::DESCRIBES,
                    |r| &r.describes,
                    |r| &mut r.describes,
                )
                .optional("identifier", dc::IDENTIFIER, |r| &r.identifier, |r| &mut r.identifier)
                .optional("creator", dc::CREATOR, |r| &r.creator, |r| &mut r.creator)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Object;
    use crate::mapping::{parse, serialize};
    use crate::vocab::{rdf, rdfs};
    use chrono::DateTime;

    fn sample() -> ResourceMetadata {
        let mut resource = ResourceMetadata::new("Logan River temperature");
        resource.subjects = vec!["temperature".into(), "Logan".into()];
        resource.creators = vec![Creator::new("B", 2), Creator::new("A", 1)];
        resource.set_abstract(Some("Hourly readings".into()));
        resource.set_date(
            DateType::Modified,
            Some(DateTime::parse_from_rfc3339("2020-11-13T19:40:57.276064+00:00").unwrap().into()),
        );
        resource.rights = Some(Rights {
            statement: "my statement".into(),
            url: Some(NamedNode::new("http://studio.bakajo.com").unwrap()),
            ..Rights::default()
        });
        resource
    }

    #[test]
    fn fresh_resource_mints_hydroshare_iri() {
        let resource = ResourceMetadata::default();
        let iri = resource.subject.as_iri().unwrap();
        assert!(iri.as_str().starts_with(hsresource::NS));
        assert_eq!(iri.as_str().len(), hsresource::NS.len() + 32);
        assert_ne!(ResourceMetadata::default().subject, resource.subject);
    }

    #[test]
    fn default_language_is_not_written() {
        let resource = sample();
        let graph = serialize(&resource).unwrap();
        assert_eq!(graph.objects_for(&resource.subject, dc::LANGUAGE).count(), 0);

        let back: ResourceMetadata = parse(&graph, None).unwrap();
        assert_eq!(back.language, "eng");
    }

    #[test]
    fn discriminators_and_label_are_written() {
        let resource = sample();
        let graph = serialize(&resource).unwrap();
        let class = Object::from(hsterms::COMPOSITE_RESOURCE);
        assert_eq!(graph.objects_for(&resource.subject, rdf::TYPE).next(), Some(&class));
        assert_eq!(graph.objects_for(&resource.subject, dc::TYPE).next(), Some(&class));
        let class_node = Node::from(hsterms::COMPOSITE_RESOURCE);
        let label = graph.objects_for(&class_node, rdfs::LABEL).next().unwrap();
        assert_eq!(label.raw(), "Composite Resource");
    }

    #[test]
    fn derived_views() {
        let resource = sample();
        let graph = serialize(&resource).unwrap();
        let back: ResourceMetadata = parse(&graph, None).unwrap();

        let names: Vec<_> = back
            .sorted_creators()
            .iter()
            .filter_map(|c| c.name.as_deref())
            .collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(back.abstract_text(), Some("Hourly readings"));
        assert_eq!(back.modified(), resource.modified());
        assert_eq!(back.modified().unwrap().offset().unwrap().local_minus_utc(), 0);
        assert!(back.created().is_none());
        assert_eq!(back.rights, resource.rights);
        assert_eq!(back.subject, resource.subject);
    }

    #[test]
    fn cleared_abstract_drops_the_description() {
        let mut resource = ResourceMetadata::new("abstract");
        resource.set_abstract(Some("a".into()));
        resource.set_abstract(None);
        assert!(resource.description.is_none());

        let graph = serialize(&resource).unwrap();
        assert_eq!(graph.objects_for(&resource.subject, dc::DESCRIPTION).count(), 0);
        let back: ResourceMetadata = parse(&graph, None).unwrap();
        assert_eq!(back, resource);
    }

    #[test]
    fn blank_description_is_not_linked() {
        let mut resource = ResourceMetadata::new("abstract");
        resource.description = Some(Description::default());

        let graph = serialize(&resource).unwrap();
        assert_eq!(graph.objects_for(&resource.subject, dc::DESCRIPTION).count(), 0);
        let back: ResourceMetadata = parse(&graph, None).unwrap();
        assert!(back.description.is_none());
    }

    #[test]
    fn resource_map_round_trip() {
        let files = vec![
            NamedNode::new("http://www.hydroshare.org/resource/abc/data/contents/a.csv").unwrap(),
            NamedNode::new("http://www.hydroshare.org/resource/abc/data/contents/b.csv").unwrap(),
        ];
        let map = ResourceMap {
            subject: Node::from(NamedNode::new("http://www.hydroshare.org/resource/abc/data/resourcemap.xml").unwrap()),
            describes: FileMap {
                subject: Node::from(NamedNode::new("http://www.hydroshare.org/resource/abc/data/resourcemap.xml#aggregation").unwrap()),
                files: files.clone(),
                title: "Logan River".into(),
                ..FileMap::default()
            },
            identifier: Some("abc".into()),
            creator: None,
        };
        let graph = serialize(&map).unwrap();
        let back: ResourceMap = parse(&graph, None).unwrap();
        assert_eq!(back.describes.title, "Logan River");
        let mut got = back.describes.files.clone();
        got.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        assert_eq!(got, files);
        assert_eq!(back.identifier.as_deref(), Some("abc"));
        assert_eq!(back.subject, map.subject);
    }
}
