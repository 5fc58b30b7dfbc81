//! Aggregation-level records.
//!
//! Every aggregation shares the same base fields ([`AggregationBase`]) and
//! adds its own content-specific ones. Each type carries a fixed `rdf:type`
//! and `dc:type` class plus a class label.

use std::collections::BTreeMap;

use oxigraph::model::NamedNodeRef;

use crate::error::{MappingResult, SchemaResult};
use crate::graph::Node;
use crate::schema::{RdfRecord, Schema, SchemaBuilder, SchemaCell};
use crate::vocab::{dc, hsterms};

use super::coverage::{self, PeriodCoverage, SpatialCoverage};
use super::fields::{
    self, BandInformation, CellInformation, Coverage, ExtendedMetadata, FieldInformation,
    GeometryInformation, MultidimensionalSpatialReference, Rights, SpatialReference,
    TimeSeriesResult, Variable,
};

/// Fields common to every aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationBase {
    pub title: String,
    pub subjects: Vec<String>,
    pub language: String,
    pub extended_metadata: Vec<ExtendedMetadata>,
    pub coverages: Vec<Coverage>,
    pub rights: Option<Rights>,
}

impl Default for AggregationBase {
    fn default() -> Self {
        Self {
            title: String::new(),
            subjects: Vec::new(),
            language: "eng".into(),
            extended_metadata: Vec::new(),
            coverages: Vec::new(),
            rights: None,
        }
    }
}

/// A record built on [`AggregationBase`].
pub trait Aggregation: RdfRecord {
    fn base(&self) -> &AggregationBase;

    fn base_mut(&mut self) -> &mut AggregationBase;

    fn title(&self) -> &str {
        &self.base().title
    }

    fn additional_metadata(&self) -> BTreeMap<String, String> {
        fields::extended_metadata_map(&self.base().extended_metadata)
    }

    fn set_additional_metadata(&mut self, map: &BTreeMap<String, String>) {
        fields::set_extended_metadata(&mut self.base_mut().extended_metadata, map);
    }

    fn spatial_coverage(&self) -> MappingResult<Option<SpatialCoverage>> {
        coverage::spatial_coverage(&self.base().coverages)
    }

    fn set_spatial_coverage(&mut self, spatial: Option<&SpatialCoverage>) {
        coverage::set_spatial_coverage(&mut self.base_mut().coverages, spatial);
    }

    fn period_coverage(&self) -> MappingResult<Option<PeriodCoverage>> {
        coverage::period_coverage(&self.base().coverages)
    }

    fn set_period_coverage(&mut self, period: Option<&PeriodCoverage>) {
        coverage::set_period_coverage(&mut self.base_mut().coverages, period);
    }
}

/// Start a schema with the class discriminators, the label and the base
/// field bindings.
fn base_schema<R: Aggregation>(
    name: &'static str,
    class: NamedNodeRef<'static>,
    label: &'static str,
) -> SchemaBuilder<R> {
    Schema::<R>::builder(name)
        .discriminator(class)
        .secondary_type(class)
        .label(label)
        .required("title", dc::TITLE, |r| &r.base().title, |r| &mut r.base_mut().title)
        .many(
            "subjects",
            dc::SUBJECT,
            |r| &r.base().subjects,
            |r| &mut r.base_mut().subjects,
        )
        .with_default(
            "language",
            dc::LANGUAGE,
            |r| &r.base().language,
            |r| &mut r.base_mut().language,
        )
        .nested_many(
            "extended_metadata",
            hsterms::EXTENDED_METADATA,
            |r| &r.base().extended_metadata,
            |r| &mut r.base_mut().extended_metadata,
        )
        .nested_many(
            "coverages",
            dc::COVERAGE,
            |r| &r.base().coverages,
            |r| &mut r.base_mut().coverages,
        )
        .nested(
            "rights",
            dc::RIGHTS,
            |r| &r.base().rights,
            |r| &mut r.base_mut().rights,
        )
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeographicRasterAggregation {
    pub subject: Node,
    pub base: AggregationBase,
    pub band_information: BandInformation,
    pub spatial_reference: Option<SpatialReference>,
    pub cell_information: CellInformation,
}

impl RdfRecord for GeographicRasterAggregation {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<GeographicRasterAggregation> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            base_schema::<Self>(
                "GeographicRasterAggregation",
                hsterms::GEOGRAPHIC_RASTER_AGGREGATION,
                "Geographic Raster Content: A geographic grid represented by a virtual raster \
                 tile (.vrt) file and one or more geotiff (.tif) files",
            )
            .nested_required(
                "band_information",
                hsterms::BAND_INFORMATION,
                |r| &r.band_information,
                |r| &mut r.band_information,
            )
            .nested(
                "spatial_reference",
                hsterms::SPATIAL_REFERENCE,
                |r| &r.spatial_reference,
                |r| &mut r.spatial_reference,
            )
            .nested_required(
                "cell_information",
                hsterms::CELL_INFORMATION,
                |r| &r.cell_information,
                |r| &mut r.cell_information,
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

impl Aggregation for GeographicRasterAggregation {
    fn base(&self) -> &AggregationBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut AggregationBase {
        &mut self.base
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeographicFeatureAggregation {
    pub subject: Node,
    pub base: AggregationBase,
    pub field_information: Vec<FieldInformation>,
    pub geometry_information: GeometryInformation,
    pub spatial_reference: Option<SpatialReference>,
}

impl RdfRecord for GeographicFeatureAggregation {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<GeographicFeatureAggregation> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            base_schema::<Self>(
                "GeographicFeatureAggregation",
                hsterms::GEOGRAPHIC_FEATURE_AGGREGATION,
                "Geographic Feature Content: The multiple files that are part of a geographic \
                 shapefile",
            )
            .nested_many(
                "field_information",
                hsterms::FIELD_INFORMATION,
                |r| &r.field_information,
                |r| &mut r.field_information,
            )
            .nested_required(
                "geometry_information",
                hsterms::GEOMETRY_INFORMATION,
                |r| &r.geometry_information,
                |r| &mut r.geometry_information,
            )
            .nested(
                "spatial_reference",
                hsterms::SPATIAL_REFERENCE,
                |r| &r.spatial_reference,
                |r| &mut r.spatial_reference,
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

impl Aggregation for GeographicFeatureAggregation {
    fn base(&self) -> &AggregationBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut AggregationBase {
        &mut self.base
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultidimensionalAggregation {
    pub subject: Node,
    pub base: AggregationBase,
    pub variables: Vec<Variable>,
    pub spatial_reference: Option<MultidimensionalSpatialReference>,
}

impl RdfRecord for MultidimensionalAggregation {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<MultidimensionalAggregation> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            base_schema::<Self>(
                "MultidimensionalAggregation",
                hsterms::MULTIDIMENSIONAL_AGGREGATION,
                "Multidimensional Content: A multidimensional dataset represented by a NetCDF \
                 file (.nc) and text file giving its NetCDF header content",
            )
            .nested_many(
                "variables",
                hsterms::VARIABLE,
                |r| &r.variables,
                |r| &mut r.variables,
            )
            .nested(
                "spatial_reference",
                hsterms::SPATIAL_REFERENCE,
                |r| &r.spatial_reference,
                |r| &mut r.spatial_reference,
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

impl Aggregation for MultidimensionalAggregation {
    fn base(&self) -> &AggregationBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut AggregationBase {
        &mut self.base
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferencedTimeSeriesAggregation {
    pub subject: Node,
    pub base: AggregationBase,
}

impl RdfRecord for ReferencedTimeSeriesAggregation {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<ReferencedTimeSeriesAggregation> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            base_schema::<Self>(
                "ReferencedTimeSeriesAggregation",
                hsterms::REFERENCED_TIME_SERIES_AGGREGATION,
                "Referenced Time Series Content: A reference to one or more time series served \
                 from HydroServers outside of HydroShare in WaterML format",
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

impl Aggregation for ReferencedTimeSeriesAggregation {
    fn base(&self) -> &AggregationBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut AggregationBase {
        &mut self.base
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesAggregation {
    pub subject: Node,
    pub base: AggregationBase,
    pub time_series_results: Vec<TimeSeriesResult>,
}

impl RdfRecord for TimeSeriesAggregation {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<TimeSeriesAggregation> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            base_schema::<Self>(
                "TimeSeriesAggregation",
                hsterms::TIME_SERIES_AGGREGATION,
                "Time Series Content: One or more time series held in an ODM2 format SQLite \
                 file and optional source comma separated (.csv) files",
            )
            .nested_many(
                "time_series_results",
                hsterms::TIME_SERIES_RESULT,
                |r| &r.time_series_results,
                |r| &mut r.time_series_results,
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

impl Aggregation for TimeSeriesAggregation {
    fn base(&self) -> &AggregationBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut AggregationBase {
        &mut self.base
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileSetAggregation {
    pub subject: Node,
    pub base: AggregationBase,
}

impl RdfRecord for FileSetAggregation {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<FileSetAggregation> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            base_schema::<Self>(
                "FileSetAggregation",
                hsterms::FILE_SET_AGGREGATION,
                "File Set Content: One or more files with specific metadata",
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

impl Aggregation for FileSetAggregation {
    fn base(&self) -> &AggregationBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut AggregationBase {
        &mut self.base
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SingleFileAggregation {
    pub subject: Node,
    pub base: AggregationBase,
}

impl RdfRecord for SingleFileAggregation {
    fn schema() -> SchemaResult<&'static Schema<Self>> {
        static SCHEMA: SchemaCell<SingleFileAggregation> = SchemaCell::new();
        SCHEMA.get_or_build(|| {
            base_schema::<Self>(
                "SingleFileAggregation",
                hsterms::SINGLE_FILE_AGGREGATION,
                "Single File Content: A single file with file specific metadata",
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

impl Aggregation for SingleFileAggregation {
    fn base(&self) -> &AggregationBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut AggregationBase {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{parse, serialize};
    use crate::model::coverage::BoxCoverage;
    use crate::model::enums::VariableType;
    use crate::vocab::rdf;

    fn raster() -> GeographicRasterAggregation {
        let mut raster = GeographicRasterAggregation {
            band_information: BandInformation {
                name: "Band_1".into(),
                no_data_value: Some("-3.40282346639e+38".into()),
                ..BandInformation::default()
            },
            cell_information: CellInformation {
                name: "logan.tif".into(),
                rows: 230,
                columns: 220,
                cell_size_x_value: 30.0,
                cell_size_y_value: 30.0,
                cell_data_type: "Float32".into(),
                ..CellInformation::default()
            },
            ..GeographicRasterAggregation::default()
        };
        raster.base.title = "logan".into();
        raster.base.subjects = vec!["DEM".into()];
        raster
    }

    #[test]
    fn raster_round_trip() {
        let raster = raster();
        let graph = serialize(&raster).unwrap();
        let back: GeographicRasterAggregation = parse(&graph, None).unwrap();
        assert_eq!(back, raster);
    }

    #[test]
    fn empty_geometry_information_keeps_its_node() {
        let mut feature = GeographicFeatureAggregation::default();
        feature.base.title = "shapes".into();
        let graph = serialize(&feature).unwrap();
        assert_eq!(
            graph
                .objects_for(&feature.subject, hsterms::GEOMETRY_INFORMATION)
                .count(),
            1
        );

        let back: GeographicFeatureAggregation = parse(&graph, None).unwrap();
        assert_eq!(back.geometry_information.subject, feature.geometry_information.subject);
        assert_eq!(back, feature);
    }

    #[test]
    fn base_fields_come_first_and_discriminators_last() {
        let schema = GeographicFeatureAggregation::schema().unwrap();
        let names: Vec<_> = schema.bindings().iter().map(|b| b.name()).collect();
        assert_eq!(
            names,
            [
                "title",
                "subjects",
                "language",
                "extended_metadata",
                "coverages",
                "rights",
                "field_information",
                "geometry_information",
                "spatial_reference",
            ]
        );
        let (predicate, class) = schema.class_discriminator().unwrap();
        assert_eq!(predicate, rdf::TYPE);
        assert_eq!(class, hsterms::GEOGRAPHIC_FEATURE_AGGREGATION);
        assert_eq!(
            schema.secondary_discriminator().unwrap().1,
            hsterms::GEOGRAPHIC_FEATURE_AGGREGATION
        );
    }

    #[test]
    fn every_aggregation_schema_validates() {
        assert!(GeographicRasterAggregation::schema().unwrap().validated().is_ok());
        assert!(GeographicFeatureAggregation::schema().unwrap().validated().is_ok());
        assert!(MultidimensionalAggregation::schema().unwrap().validated().is_ok());
        assert!(ReferencedTimeSeriesAggregation::schema().unwrap().validated().is_ok());
        assert!(TimeSeriesAggregation::schema().unwrap().validated().is_ok());
        assert!(FileSetAggregation::schema().unwrap().validated().is_ok());
        assert!(SingleFileAggregation::schema().unwrap().validated().is_ok());
    }

    #[test]
    fn multidimensional_variables_keep_their_type() {
        let mut md = MultidimensionalAggregation::default();
        md.base.title = "netcdf".into();
        md.variables = vec![
            Variable {
                name: "x".into(),
                unit: "m".into(),
                variable_type: VariableType::Float,
                shape: "x".into(),
                ..Variable::default()
            },
            Variable {
                name: "t".into(),
                unit: "s".into(),
                variable_type: VariableType::UnsignedInt64,
                shape: "t".into(),
                ..Variable::default()
            },
        ];
        let graph = serialize(&md).unwrap();
        let back: MultidimensionalAggregation = parse(&graph, None).unwrap();
        let mut types: Vec<_> = back
            .variables
            .iter()
            .map(|v| (v.name.clone(), v.variable_type))
            .collect();
        types.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            types,
            [
                ("t".to_string(), VariableType::UnsignedInt64),
                ("x".to_string(), VariableType::Float)
            ]
        );
    }

    #[test]
    fn coverage_views_through_the_trait() {
        let mut file_set = FileSetAggregation::default();
        file_set.base.title = "files".into();
        let spatial = SpatialCoverage::Box(BoxCoverage {
            northlimit: 42.0,
            eastlimit: -111.0,
            southlimit: 41.0,
            westlimit: -112.0,
            units: "Decimal degrees".into(),
            ..BoxCoverage::default()
        });
        file_set.set_spatial_coverage(Some(&spatial));
        let mut extra = BTreeMap::new();
        extra.insert("site".to_string(), "Mendon".to_string());
        file_set.set_additional_metadata(&extra);

        let graph = serialize(&file_set).unwrap();
        let back: FileSetAggregation = parse(&graph, None).unwrap();
        assert_eq!(back.title(), "files");
        assert_eq!(back.spatial_coverage().unwrap(), Some(spatial));
        assert_eq!(back.period_coverage().unwrap(), None);
        assert_eq!(back.additional_metadata(), extra);
    }
}
