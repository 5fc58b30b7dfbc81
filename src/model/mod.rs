//! The resource metadata vocabulary as typed records.
//!
//! - [`resource`]: composite resource metadata and the ORE resource map
//! - [`aggregation`]: content aggregations (raster, feature, time series, ...)
//! - [`fields`]: nested records shared by both
//! - [`enums`]: closed vocabularies
//! - [`coverage`]: DCMI `key=value` coverage values

pub mod aggregation;
pub mod coverage;
pub mod enums;
pub mod fields;
pub mod resource;

pub use aggregation::{
    Aggregation, AggregationBase, FileSetAggregation, GeographicFeatureAggregation,
    GeographicRasterAggregation, MultidimensionalAggregation, ReferencedTimeSeriesAggregation,
    SingleFileAggregation, TimeSeriesAggregation,
};
pub use coverage::{BoxCoverage, PeriodCoverage, PointCoverage, SpatialCoverage};
pub use enums::{
    CoverageType, DateType, MultidimensionalSpatialReferenceType, SpatialReferenceType,
    VariableType,
};
pub use fields::{
    AwardInfo, BandInformation, CellInformation, Contributor, Coverage, Creator, Date,
    Description, ExtendedMetadata, FieldInformation, GeometryInformation, Identifier,
    MultidimensionalSpatialReference, ProcessingLevel, Publisher, Relation, Rights, Source,
    SpatialReference, TimeSeriesMethod, TimeSeriesResult, TimeSeriesSite, TimeSeriesVariable,
    Unit, UtcOffset, Variable,
};
pub use resource::{FileMap, ResourceMap, ResourceMetadata, mint_resource_id};
