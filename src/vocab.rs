//! Namespaces and predicate IRIs used by the resource metadata schemas.
//!
//! `rdf`, `rdfs` and `xsd` are re-exported from oxigraph; the Dublin Core,
//! OAI-ORE, CiTO and HydroShare terms are declared here as `NamedNodeRef`
//! constants in the same style.

pub use oxigraph::model::vocab::{rdf, rdfs, xsd};

/// Prefix bindings written into serialized documents.
pub const PREFIXES: &[(&str, &str)] = &[
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("dc", dc::NS),
    ("dcterms", dcterms::NS),
    ("hsterms", hsterms::NS),
    ("ore", ore::NS),
    ("citoterms", citoterms::NS),
];

/// Dublin Core elements.
pub mod dc {
    use oxigraph::model::NamedNodeRef;

    pub const NS: &str = "http://purl.org/dc/elements/1.1/";

    pub const CONTRIBUTOR: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/contributor");
    pub const COVERAGE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/coverage");
    pub const CREATOR: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/creator");
    pub const DATE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/date");
    pub const DESCRIPTION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/description");
    pub const FORMAT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/format");
    pub const IDENTIFIER: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/identifier");
    pub const LANGUAGE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/language");
    pub const PUBLISHER: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/publisher");
    pub const RELATION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/relation");
    pub const RIGHTS: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/rights");
    pub const SOURCE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/source");
    pub const SUBJECT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/subject");
    pub const TITLE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/title");
    pub const TYPE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/type");
}

/// Dublin Core terms.
pub mod dcterms {
    use oxigraph::model::NamedNodeRef;

    pub const NS: &str = "http://purl.org/dc/terms/";

    pub const ABSTRACT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/abstract");
    pub const AVAILABLE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/available");
    pub const BOX: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/box");
    pub const CREATED: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/created");
    pub const MODIFIED: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/modified");
    pub const PERIOD: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/period");
    pub const POINT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/point");
    pub const PUBLISHED: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/published");
    pub const VALID: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/valid");
}

/// OAI-ORE resource map terms.
pub mod ore {
    use oxigraph::model::NamedNodeRef;

    pub const NS: &str = "http://www.openarchives.org/ore/terms/";

    pub const AGGREGATES: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.openarchives.org/ore/terms/aggregates");
    pub const AGGREGATION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.openarchives.org/ore/terms/Aggregation");
    pub const DESCRIBES: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.openarchives.org/ore/terms/describes");
    pub const IS_DESCRIBED_BY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.openarchives.org/ore/terms/isDescribedBy");
    pub const RESOURCE_MAP: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.openarchives.org/ore/terms/ResourceMap");
}

/// Citation typing ontology.
pub mod citoterms {
    use oxigraph::model::NamedNodeRef;

    pub const NS: &str = "http://purl.org/spar/cito/";

    pub const IS_DOCUMENTED_BY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/spar/cito/isDocumentedBy");
}

/// Resource identifiers minted by the service.
pub mod hsresource {
    pub const NS: &str = "http://www.hydroshare.org/resource/";
}

/// HydroShare terms: record classes and metadata predicates.
pub mod hsterms {
    use oxigraph::model::NamedNodeRef;

    pub const NS: &str = "http://www.hydroshare.org/terms/";

    const fn term(iri: &'static str) -> NamedNodeRef<'static> {
        NamedNodeRef::new_unchecked(iri)
    }

    /// Object of `rdfs:isDefinedBy` on every labelled record class.
    pub const DEFINED_BY: NamedNodeRef<'static> = term("https://www.hydroshare.org/terms/");

    // Record classes.
    pub const COMPOSITE_RESOURCE: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/CompositeResource");
    pub const GEOGRAPHIC_RASTER_AGGREGATION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/GeographicRasterAggregation");
    pub const GEOGRAPHIC_FEATURE_AGGREGATION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/GeographicFeatureAggregation");
    pub const MULTIDIMENSIONAL_AGGREGATION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/MultidimensionalAggregation");
    pub const REFERENCED_TIME_SERIES_AGGREGATION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/ReferencedTimeSeriesAggregation");
    pub const TIME_SERIES_AGGREGATION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/TimeSeriesAggregation");
    pub const FILE_SET_AGGREGATION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/FileSetAggregation");
    pub const SINGLE_FILE_AGGREGATION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/SingleFileAggregation");

    // Spatial reference kinds.
    pub const BOX: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/box");
    pub const POINT: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/point");

    // Resource-level predicates.
    pub const AWARD_INFO: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/awardInfo");
    pub const EXTENDED_METADATA: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/extendedMetadata");
    pub const HYDROSHARE_IDENTIFIER: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/hydroShareIdentifier");
    pub const IS_DERIVED_FROM: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/isDerivedFrom");
    pub const IS_COPIED_FROM: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/isCopiedFrom");
    pub const IS_PART_OF: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/isPartOf");
    pub const IS_DESCRIBED_BY: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/isDescribedBy");
    pub const KEY: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/key");
    pub const VALUE: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/value");
    pub const RIGHTS_STATEMENT: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/rightsStatement");
    pub const URL: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/URL");
    pub const PUBLISHER_NAME: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/publisherName");
    pub const PUBLISHER_URL: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/publisherURL");

    // People.
    pub const NAME: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/name");
    pub const CREATOR_ORDER: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/creatorOrder");
    pub const GOOGLE_SCHOLAR_ID: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/GoogleScholarID");
    pub const RESEARCH_GATE_ID: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/ResearchGateID");
    pub const PHONE: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/phone");
    pub const ORCID: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/ORCID");
    pub const ADDRESS: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/address");
    pub const ORGANIZATION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/organization");
    pub const EMAIL: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/email");
    pub const HOMEPAGE: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/homepage");
    pub const DESCRIPTION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/description");

    // Funding.
    pub const FUNDING_AGENCY_NAME: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/fundingAgencyName");
    pub const AWARD_TITLE: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/awardTitle");
    pub const AWARD_NUMBER: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/awardNumber");
    pub const FUNDING_AGENCY_URL: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/fundingAgencyURL");

    // Raster content.
    pub const BAND_INFORMATION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/BandInformation");
    pub const CELL_INFORMATION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/CellInformation");
    pub const SPATIAL_REFERENCE: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/spatialReference");
    pub const VARIABLE_NAME: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/variableName");
    pub const VARIABLE_UNIT: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/variableUnit");
    pub const NO_DATA_VALUE: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/noDataValue");
    pub const MAXIMUM_VALUE: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/maximumValue");
    pub const MINIMUM_VALUE: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/minimumValue");
    pub const COMMENT: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/comment");
    pub const METHOD: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/method");
    pub const ROWS: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/rows");
    pub const COLUMNS: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/columns");
    pub const CELL_SIZE_X_VALUE: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/cellSizeXValue");
    pub const CELL_SIZE_Y_VALUE: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/cellSizeYValue");
    pub const CELL_DATA_TYPE: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/cellDataType");

    // Feature content.
    pub const FIELD_INFORMATION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/FieldInformation");
    pub const GEOMETRY_INFORMATION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/GeometryInformation");
    pub const FIELD_NAME: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/fieldName");
    pub const FIELD_TYPE: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/fieldType");
    pub const FIELD_TYPE_CODE: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/fieldTypeCode");
    pub const FIELD_WIDTH: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/fieldWidth");
    pub const FIELD_PRECISION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/fieldPrecision");
    pub const FEATURE_COUNT: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/featureCount");
    pub const GEOMETRY_TYPE: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/geometryType");

    // Multidimensional content.
    pub const VARIABLE: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/Variable");
    pub const UNIT: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/unit");
    pub const TYPE: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/type");
    pub const SHAPE: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/shape");
    pub const DESCRIPTIVE_NAME: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/descriptive_name");
    pub const MISSING_VALUE: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/missing_value");

    // Time series content.
    pub const TIME_SERIES_RESULT: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/timeSeriesResult");
    pub const TIME_SERIES_RESULT_UUID: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/timeSeriesResultUUID");
    pub const STATUS: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/Status");
    pub const SAMPLE_MEDIUM: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/SampleMedium");
    pub const VALUE_COUNT: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/ValueCount");
    pub const AGGREGATION_STATISTIC: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/AggregationStatistic");
    pub const SERIES_LABEL: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/SeriesLabel");
    pub const SITE: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/site");
    pub const TS_VARIABLE: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/variable");
    pub const PROCESSING_LEVEL: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/processingLevel");
    pub const UTC_OFFSET: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/UTCOffSet");
    pub const SITE_CODE: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/SiteCode");
    pub const SITE_NAME: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/SiteName");
    pub const ELEVATION_M: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/Elevation_m");
    pub const ELEVATION_DATUM: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/ElevationDatum");
    pub const SITE_TYPE: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/SiteType");
    pub const LATITUDE: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/Latitude");
    pub const LONGITUDE: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/Longitude");
    pub const VARIABLE_CODE: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/VariableCode");
    pub const TS_VARIABLE_NAME: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/VariableName");
    pub const VARIABLE_TYPE: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/VariableType");
    pub const TS_NO_DATA_VALUE: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/NoDataValue");
    pub const VARIABLE_DEFINITION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/VariableDefinition");
    pub const SPECIATION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/Speciation");
    pub const METHOD_CODE: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/MethodCode");
    pub const METHOD_NAME: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/MethodName");
    pub const METHOD_TYPE: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/MethodType");
    pub const METHOD_DESCRIPTION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/MethodDescription");
    pub const METHOD_LINK: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/MethodLink");
    pub const PROCESSING_LEVEL_CODE: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/ProcessingLevelCode");
    pub const DEFINITION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/Definition");
    pub const EXPLANATION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/Explanation");
    pub const UNITS_TYPE: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/UnitsType");
    pub const UNITS_NAME: NamedNodeRef<'static> = term("http://www.hydroshare.org/terms/UnitsName");
    pub const UNITS_ABBREVIATION: NamedNodeRef<'static> =
        term("http://www.hydroshare.org/terms/UnitsAbbreviation");
}
