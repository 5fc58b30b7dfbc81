//! Nested records: the anonymous nodes hanging off resource and aggregation
//! metadata. None of them declares a discriminator; they are always parsed
//! at the node a parent links to.

use std::collections::BTreeMap;

use oxigraph::model::NamedNode;

use crate::coerce::Timestamp;
use crate::error::SchemaResult;
use crate::graph::Node;
use crate::schema::{RdfRecord, Schema, SchemaCell};
use crate::vocab::{dcterms, hsterms, rdf};

use super::enums::{
    CoverageType, DateType, MultidimensionalSpatialReferenceType, SpatialReferenceType,
    VariableType,
};

/// The resource abstract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Description {
    pub subject: Node,
    pub abstract_text: Option<String>,
}

impl RdfRecord for Description {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<Description> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("Description")
                .optional(
                    "abstract",
                    dcterms::ABSTRACT,
                    |r| &r.abstract_text,
                    |r| &mut r.abstract_text,
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Identifier {
    pub subject: Node,
    pub hydroshare_identifier: Option<NamedNode>,
}

impl RdfRecord for Identifier {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<Identifier> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("Identifier")
                .optional(
                    "hydroshare_identifier",
                    hsterms::HYDROSHARE_IDENTIFIER,
                    |r| &r.hydroshare_identifier,
                    |r| &mut r.hydroshare_identifier,
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Source {
    pub subject: Node,
    pub is_derived_from: Option<String>,
}

impl RdfRecord for Source {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<Source> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("Source")
                .optional(
                    "is_derived_from",
                    hsterms::IS_DERIVED_FROM,
                    |r| &r.is_derived_from,
                    |r| &mut r.is_derived_from,
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

/// A link to another resource. Values are kept as text: documents in the
/// wild carry both URIs and free-form literals here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relation {
    pub subject: Node,
    pub is_copied_from: Option<String>,
    pub is_part_of: Option<String>,
    pub is_described_by: Option<String>,
}

impl RdfRecord for Relation {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<Relation> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("Relation")
                .optional(
                    "is_copied_from",
                    hsterms::IS_COPIED_FROM,
                    |r| &r.is_copied_from,
                    |r| &mut r.is_copied_from,
                )
                .optional("is_part_of", hsterms::IS_PART_OF, |r| &r.is_part_of, |r| &mut r.is_part_of)
                .optional(
                    "is_described_by",
                    hsterms::IS_DESCRIBED_BY,
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

/// One user-defined key/value pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtendedMetadata {
    pub subject: Node,
    pub key: String,
    pub value: String,
}

impl ExtendedMetadata {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            ..Self::default()
        }
    }
}

impl RdfRecord for ExtendedMetadata {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<ExtendedMetadata> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("ExtendedMetadata")
                .required("value", hsterms::VALUE, |r| &r.value, |r| &mut r.value)
                .required("key", hsterms::KEY, |r| &r.key, |r| &mut r.key)
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

/// Extended metadata as a sorted map. When a key repeats, the last entry wins.
pub fn extended_metadata_map(entries: &[ExtendedMetadata]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|e| (e.key.clone(), e.value.clone()))
        .collect()
}

/// Replace every entry with the pairs of `map`, in key order.
pub fn set_extended_metadata(entries: &mut Vec<ExtendedMetadata>, map: &BTreeMap<String, String>) {
    *entries = map
        .iter()
        .map(|(key, value)| ExtendedMetadata::new(key.clone(), value.clone()))
        .collect();
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellInformation {
    pub subject: Node,
    pub name: String,
    pub rows: i64,
    pub columns: i64,
    pub cell_size_x_value: f64,
    pub cell_data_type: String,
    pub cell_size_y_value: f64,
}

impl RdfRecord for CellInformation {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<CellInformation> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("CellInformation")
                .required("name", hsterms::NAME, |r| &r.name, |r| &mut r.name)
                .required("rows", hsterms::ROWS, |r| &r.rows, |r| &mut r.rows)
                .required("columns", hsterms::COLUMNS, |r| &r.columns, |r| &mut r.columns)
                .required(
                    "cell_size_x_value",
                    hsterms::CELL_SIZE_X_VALUE,
                    |r| &r.cell_size_x_value,
                    |r| &mut r.cell_size_x_value,
                )
                .required(
                    "cell_data_type",
                    hsterms::CELL_DATA_TYPE,
                    |r| &r.cell_data_type,
                    |r| &mut r.cell_data_type,
                )
                .required(
                    "cell_size_y_value",
                    hsterms::CELL_SIZE_Y_VALUE,
                    |r| &r.cell_size_y_value,
                    |r| &mut r.cell_size_y_value,
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

/// A typed date. The type is stored as the node's `rdf:type`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Date {
    pub subject: Node,
    pub date_type: DateType,
    pub value: Timestamp,
}

impl Date {
    pub fn new(date_type: DateType, value: Timestamp) -> Self {
        Self {
            subject: Node::fresh(),
            date_type,
            value,
        }
    }
}

impl RdfRecord for Date {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<Date> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("Date")
                .required("type", rdf::TYPE, |r| &r.date_type, |r| &mut r.date_type)
                .required("value", rdf::VALUE, |r| &r.value, |r| &mut r.value)
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rights {
    pub subject: Node,
    pub statement: String,
    pub url: Option<NamedNode>,
}

impl RdfRecord for Rights {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<Rights> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("Rights")
                .required(
                    "rights_statement",
                    hsterms::RIGHTS_STATEMENT,
                    |r| &r.statement,
                    |r| &mut r.statement,
                )
                .optional("url", hsterms::URL, |r| &r.url, |r| &mut r.url)
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

/// A resource author. `creator_order` is the only reliable ordering: the
/// graph does not keep list positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Creator {
    pub subject: Node,
    pub name: Option<String>,
    pub creator_order: i64,
    pub google_scholar_id: Option<NamedNode>,
    pub research_gate_id: Option<NamedNode>,
    pub phone: Option<String>,
    pub orcid: Option<NamedNode>,
    pub address: Option<String>,
    pub organization: Option<String>,
    pub email: Option<String>,
    pub homepage: Option<NamedNode>,
    pub description: Option<String>,
}

impl Creator {
    pub fn new(name: impl Into<String>, creator_order: i64) -> Self {
        Self {
            name: Some(name.into()),
            creator_order,
            ..Self::default()
        }
    }
}

impl RdfRecord for Creator {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<Creator> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("Creator")
                .optional("name", hsterms::NAME, |r| &r.name, |r| &mut r.name)
                .required(
                    "creator_order",
                    hsterms::CREATOR_ORDER,
                    |r| &r.creator_order,
                    |r| &mut r.creator_order,
                )
                .optional(
                    "google_scholar_id",
                    hsterms::GOOGLE_SCHOLAR_ID,
                    |r| &r.google_scholar_id,
                    |r| &mut r.google_scholar_id,
                )
                .optional(
                    "research_gate_id",
                    hsterms::RESEARCH_GATE_ID,
                    |r| &r.research_gate_id,
                    |r| &mut r.research_gate_id,
                )
                .optional("phone", hsterms::PHONE, |r| &r.phone, |r| &mut r.phone)
                .optional("orcid", hsterms::ORCID, |r| &r.orcid, |r| &mut r.orcid)
                .optional("address", hsterms::ADDRESS, |r| &r.address, |r| &mut r.address)
                .optional(
                    "organization",
                    hsterms::ORGANIZATION,
                    |r| &r.organization,
                    |r| &mut r.organization,
                )
                .optional("email", hsterms::EMAIL, |r| &r.email, |r| &mut r.email)
                .optional("homepage", hsterms::HOMEPAGE, |r| &r.homepage, |r| &mut r.homepage)
                .optional(
                    "description",
                    hsterms::DESCRIPTION,
                    |r| &r.description,
                    |r| &mut r.description,
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contributor {
    pub subject: Node,
    pub name: Option<String>,
    pub google_scholar_id: Option<NamedNode>,
    pub research_gate_id: Option<NamedNode>,
    pub phone: Option<String>,
    pub orcid: Option<NamedNode>,
    pub address: Option<String>,
    pub organization: Option<String>,
    pub email: Option<String>,
    pub homepage: Option<NamedNode>,
}

impl RdfRecord for Contributor {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<Contributor> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("Contributor")
                .optional("name", hsterms::NAME, |r| &r.name, |r| &mut r.name)
                .optional(
                    "google_scholar_id",
                    hsterms::GOOGLE_SCHOLAR_ID,
                    |r| &r.google_scholar_id,
                    |r| &mut r.google_scholar_id,
                )
                .optional(
                    "research_gate_id",
                    hsterms::RESEARCH_GATE_ID,
                    |r| &r.research_gate_id,
                    |r| &mut r.research_gate_id,
                )
                .optional("phone", hsterms::PHONE, |r| &r.phone, |r| &mut r.phone)
                .optional("orcid", hsterms::ORCID, |r| &r.orcid, |r| &mut r.orcid)
                .optional("address", hsterms::ADDRESS, |r| &r.address, |r| &mut r.address)
                .optional(
                    "organization",
                    hsterms::ORGANIZATION,
                    |r| &r.organization,
                    |r| &mut r.organization,
                )
                .optional("email", hsterms::EMAIL, |r| &r.email, |r| &mut r.email)
                .optional("homepage", hsterms::HOMEPAGE, |r| &r.homepage, |r| &mut r.homepage)
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

/// A funding award.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AwardInfo {
    pub subject: Node,
    pub funding_agency_name: Option<String>,
    pub award_title: Option<String>,
    pub award_number: Option<String>,
    pub funding_agency_url: Option<NamedNode>,
}

impl RdfRecord for AwardInfo {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<AwardInfo> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("AwardInfo")
                .optional(
                    "funding_agency_name",
                    hsterms::FUNDING_AGENCY_NAME,
                    |r| &r.funding_agency_name,
                    |r| &mut r.funding_agency_name,
                )
                .optional(
                    "award_title",
                    hsterms::AWARD_TITLE,
                    |r| &r.award_title,
                    |r| &mut r.award_title,
                )
                .optional(
                    "award_number",
                    hsterms::AWARD_NUMBER,
                    |r| &r.award_number,
                    |r| &mut r.award_number,
                )
                .optional(
                    "funding_agency_url",
                    hsterms::FUNDING_AGENCY_URL,
                    |r| &r.funding_agency_url,
                    |r| &mut r.funding_agency_url,
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandInformation {
    pub subject: Node,
    pub name: String,
    pub variable_name: Option<String>,
    pub variable_unit: Option<String>,
    pub no_data_value: Option<String>,
    pub maximum_value: Option<String>,
    pub comment: Option<String>,
    pub method: Option<String>,
    pub minimum_value: Option<String>,
}

impl RdfRecord for BandInformation {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<BandInformation> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("BandInformation")
                .required("name", hsterms::NAME, |r| &r.name, |r| &mut r.name)
                .optional(
                    "variable_name",
                    hsterms::VARIABLE_NAME,
                    |r| &r.variable_name,
                    |r| &mut r.variable_name,
                )
                .optional(
                    "variable_unit",
                    hsterms::VARIABLE_UNIT,
                    |r| &r.variable_unit,
                    |r| &mut r.variable_unit,
                )
                .optional(
                    "no_data_value",
                    hsterms::NO_DATA_VALUE,
                    |r| &r.no_data_value,
                    |r| &mut r.no_data_value,
                )
                .optional(
                    "maximum_value",
                    hsterms::MAXIMUM_VALUE,
                    |r| &r.maximum_value,
                    |r| &mut r.maximum_value,
                )
                .optional("comment", hsterms::COMMENT, |r| &r.comment, |r| &mut r.comment)
                .optional("method", hsterms::METHOD, |r| &r.method, |r| &mut r.method)
                .optional(
                    "minimum_value",
                    hsterms::MINIMUM_VALUE,
                    |r| &r.minimum_value,
                    |r| &mut r.minimum_value,
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

/// A spatial or temporal coverage. `value` holds DCMI `key=value;` text,
/// see [`super::coverage`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coverage {
    pub subject: Node,
    pub coverage_type: CoverageType,
    pub value: String,
}

impl RdfRecord for Coverage {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<Coverage> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("Coverage")
                .required("type", rdf::TYPE, |r| &r.coverage_type, |r| &mut r.coverage_type)
                .required("value", rdf::VALUE, |r| &r.value, |r| &mut r.value)
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpatialReference {
    pub subject: Node,
    pub reference_type: SpatialReferenceType,
    pub value: String,
}

impl RdfRecord for SpatialReference {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<SpatialReference> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("SpatialReference")
                .required("type", rdf::TYPE, |r| &r.reference_type, |r| &mut r.reference_type)
                .required("value", rdf::VALUE, |r| &r.value, |r| &mut r.value)
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultidimensionalSpatialReference {
    pub subject: Node,
    pub reference_type: MultidimensionalSpatialReferenceType,
    pub value: String,
}

impl RdfRecord for MultidimensionalSpatialReference {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<MultidimensionalSpatialReference> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("MultidimensionalSpatialReference")
                .required("type", rdf::TYPE, |r| &r.reference_type, |r| &mut r.reference_type)
                .required("value", rdf::VALUE, |r| &r.value, |r| &mut r.value)
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

/// One attribute column of a shapefile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldInformation {
    pub subject: Node,
    pub field_name: Option<String>,
    pub field_type: Option<String>,
    pub field_type_code: Option<String>,
    pub field_width: Option<i64>,
    pub field_precision: Option<i64>,
}

impl RdfRecord for FieldInformation {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<FieldInformation> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("FieldInformation")
                .optional("field_name", hsterms::FIELD_NAME, |r| &r.field_name, |r| &mut r.field_name)
                .optional("field_type", hsterms::FIELD_TYPE, |r| &r.field_type, |r| &mut r.field_type)
                .optional(
                    "field_type_code",
                    hsterms::FIELD_TYPE_CODE,
                    |r| &r.field_type_code,
                    |r| &mut r.field_type_code,
                )
                .optional(
                    "field_width",
                    hsterms::FIELD_WIDTH,
                    |r| &r.field_width,
                    |r| &mut r.field_width,
                )
                .optional(
                    "field_precision",
                    hsterms::FIELD_PRECISION,
                    |r| &r.field_precision,
                    |r| &mut r.field_precision,
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryInformation {
    pub subject: Node,
    pub feature_count: Option<i64>,
    pub geometry_type: Option<String>,
}

impl RdfRecord for GeometryInformation {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<GeometryInformation> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("GeometryInformation")
                .optional(
                    "feature_count",
                    hsterms::FEATURE_COUNT,
                    |r| &r.feature_count,
                    |r| &mut r.feature_count,
                )
                .optional(
                    "geometry_type",
                    hsterms::GEOMETRY_TYPE,
                    |r| &r.geometry_type,
                    |r| &mut r.geometry_type,
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

/// A NetCDF variable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variable {
    pub subject: Node,
    pub name: String,
    pub unit: String,
    pub variable_type: VariableType,
    pub shape: String,
    pub descriptive_name: Option<String>,
    pub method: Option<String>,
    pub missing_value: Option<String>,
}

impl RdfRecord for Variable {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<Variable> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("Variable")
                .required("name", hsterms::NAME, |r| &r.name, |r| &mut r.name)
                .required("unit", hsterms::UNIT, |r| &r.unit, |r| &mut r.unit)
                .required("type", hsterms::TYPE, |r| &r.variable_type, |r| &mut r.variable_type)
                .required("shape", hsterms::SHAPE, |r| &r.shape, |r| &mut r.shape)
                .optional(
                    "descriptive_name",
                    hsterms::DESCRIPTIVE_NAME,
                    |r| &r.descriptive_name,
                    |r| &mut r.descriptive_name,
                )
                .optional("method", hsterms::METHOD, |r| &r.method, |r| &mut r.method)
                .optional(
                    "missing_value",
                    hsterms::MISSING_VALUE,
                    |r| &r.missing_value,
                    |r| &mut r.missing_value,
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Publisher {
    pub subject: Node,
    pub name: String,
    pub url: Option<NamedNode>,
}

impl RdfRecord for Publisher {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<Publisher> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("Publisher")
                .required("name", hsterms::PUBLISHER_NAME, |r| &r.name, |r| &mut r.name)
                .optional("url", hsterms::PUBLISHER_URL, |r| &r.url, |r| &mut r.url)
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

// ---------------------------------------------------------------------------
// Time series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesVariable {
    pub subject: Node,
    pub variable_code: String,
    pub variable_name: String,
    pub variable_type: String,
    pub no_data_value: i64,
    pub variable_definition: Option<String>,
    pub speciation: Option<String>,
}

impl RdfRecord for TimeSeriesVariable {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<TimeSeriesVariable> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("TimeSeriesVariable")
                .required(
                    "variable_code",
                    hsterms::VARIABLE_CODE,
                    |r| &r.variable_code,
                    |r| &mut r.variable_code,
                )
                .required(
                    "variable_name",
                    hsterms::TS_VARIABLE_NAME,
                    |r| &r.variable_name,
                    |r| &mut r.variable_name,
                )
                .required(
                    "variable_type",
                    hsterms::VARIABLE_TYPE,
                    |r| &r.variable_type,
                    |r| &mut r.variable_type,
                )
                .required(
                    "no_data_value",
                    hsterms::TS_NO_DATA_VALUE,
                    |r| &r.no_data_value,
                    |r| &mut r.no_data_value,
                )
                .optional(
                    "variable_definition",
                    hsterms::VARIABLE_DEFINITION,
                    |r| &r.variable_definition,
                    |r| &mut r.variable_definition,
                )
                .optional("speciation", hsterms::SPECIATION, |r| &r.speciation, |r| &mut r.speciation)
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesSite {
    pub subject: Node,
    pub site_code: String,
    pub site_name: Option<String>,
    pub elevation_m: Option<f64>,
    pub elevation_datum: Option<String>,
    pub site_type: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl RdfRecord for TimeSeriesSite {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<TimeSeriesSite> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("TimeSeriesSite")
                .required("site_code", hsterms::SITE_CODE, |r| &r.site_code, |r| &mut r.site_code)
                .optional("site_name", hsterms::SITE_NAME, |r| &r.site_name, |r| &mut r.site_name)
                .optional(
                    "elevation_m",
                    hsterms::ELEVATION_M,
                    |r| &r.elevation_m,
                    |r| &mut r.elevation_m,
                )
                .optional(
                    "elevation_datum",
                    hsterms::ELEVATION_DATUM,
                    |r| &r.elevation_datum,
                    |r| &mut r.elevation_datum,
                )
                .optional("site_type", hsterms::SITE_TYPE, |r| &r.site_type, |r| &mut r.site_type)
                .optional("latitude", hsterms::LATITUDE, |r| &r.latitude, |r| &mut r.latitude)
                .optional("longitude", hsterms::LONGITUDE, |r| &r.longitude, |r| &mut r.longitude)
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesMethod {
    pub subject: Node,
    pub method_code: String,
    pub method_name: String,
    pub method_type: String,
    pub method_description: Option<String>,
    pub method_link: Option<NamedNode>,
}

impl RdfRecord for TimeSeriesMethod {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<TimeSeriesMethod> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("TimeSeriesMethod")
                .required(
                    "method_code",
                    hsterms::METHOD_CODE,
                    |r| &r.method_code,
                    |r| &mut r.method_code,
                )
                .required(
                    "method_name",
                    hsterms::METHOD_NAME,
                    |r| &r.method_name,
                    |r| &mut r.method_name,
                )
                .required(
                    "method_type",
                    hsterms::METHOD_TYPE,
                    |r| &r.method_type,
                    |r| &mut r.method_type,
                )
                .optional(
                    "method_description",
                    hsterms::METHOD_DESCRIPTION,
                    |r| &r.method_description,
                    |r| &mut r.method_description,
                )
                .optional(
                    "method_link",
                    hsterms::METHOD_LINK,
                    |r| &r.method_link,
                    |r| &mut r.method_link,
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessingLevel {
    pub subject: Node,
    pub processing_level_code: String,
    pub definition: Option<String>,
    pub explanation: Option<String>,
}

impl RdfRecord for ProcessingLevel {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<ProcessingLevel> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("ProcessingLevel")
                .required(
                    "processing_level_code",
                    hsterms::PROCESSING_LEVEL_CODE,
                    |r| &r.processing_level_code,
                    |r| &mut r.processing_level_code,
                )
                .optional("definition", hsterms::DEFINITION, |r| &r.definition, |r| &mut r.definition)
                .optional(
                    "explanation",
                    hsterms::EXPLANATION,
                    |r| &r.explanation,
                    |r| &mut r.explanation,
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Unit {
    pub subject: Node,
    pub unit_type: String,
    pub name: String,
    pub abbreviation: String,
}

impl RdfRecord for Unit {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<Unit> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("Unit")
                .required("type", hsterms::UNITS_TYPE, |r| &r.unit_type, |r| &mut r.unit_type)
                .required("name", hsterms::UNITS_NAME, |r| &r.name, |r| &mut r.name)
                .required(
                    "abbreviation",
                    hsterms::UNITS_ABBREVIATION,
                    |r| &r.abbreviation,
                    |r| &mut r.abbreviation,
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UtcOffset {
    pub subject: Node,
    pub value: String,
}

impl RdfRecord for UtcOffset {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<UtcOffset> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("UtcOffset")
                .required("value", hsterms::VALUE, |r| &r.value, |r| &mut r.value)
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

/// One series in a time series aggregation, with the site, variable, method
/// and processing level that produced it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesResult {
    pub subject: Node,
    pub series_id: String,
    pub unit: Option<Unit>,
    pub status: Option<String>,
    pub sample_medium: String,
    pub value_count: i64,
    pub aggregation_statistics: String,
    pub series_label: Option<String>,
    pub site: TimeSeriesSite,
    pub variable: TimeSeriesVariable,
    pub method: TimeSeriesMethod,
    pub processing_level: ProcessingLevel,
    pub utc_offset: Option<UtcOffset>,
}

impl RdfRecord for TimeSeriesResult {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<TimeSeriesResult> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            Schema::<Self>::builder("TimeSeriesResult")
                .required(
                    "series_id",
                    hsterms::TIME_SERIES_RESULT_UUID,
                    |r| &r.series_id,
                    |r| &mut r.series_id,
                )
                .nested("unit", hsterms::UNIT, |r| &r.unit, |r| &mut r.unit)
                .optional("status", hsterms::STATUS, |r| &r.status, |r| &mut r.status)
                .required(
                    "sample_medium",
                    hsterms::SAMPLE_MEDIUM,
                    |r| &r.sample_medium,
                    |r| &mut r.sample_medium,
                )
                .required(
                    "value_count",
                    hsterms::VALUE_COUNT,
                    |r| &r.value_count,
                    |r| &mut r.value_count,
                )
                .required(
                    "aggregation_statistics",
                    hsterms::AGGREGATION_STATISTIC,
                    |r| &r.aggregation_statistics,
                    |r| &mut r.aggregation_statistics,
                )
                .optional(
                    "series_label",
                    hsterms::SERIES_LABEL,
                    |r| &r.series_label,
                    |r| &mut r.series_label,
                )
                .nested_required("site", hsterms::SITE, |r| &r.site, |r| &mut r.site)
                .nested_required(
                    "variable",
                    hsterms::TS_VARIABLE,
                    |r| &r.variable,
                    |r| &mut r.variable,
                )
                .nested_required("method", hsterms::METHOD, |r| &r.method, |r| &mut r.method)
                .nested_required(
                    "processing_level",
                    hsterms::PROCESSING_LEVEL,
                    |r| &r.processing_level,
                    |r| &mut r.processing_level,
                )
                .nested(
                    "utc_offset",
                    hsterms::UTC_OFFSET,
                    |r| &r.utc_offset,
                    |r| &mut r.utc_offset,
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
