//! Whole-record round trips for every registered metadata kind.
//!
//! Each record is filled in across its scalar, optional, nested and repeated
//! fields, serialized, dispatched by discriminator and parsed back. Repeated
//! fields have no meaningful graph order, so both sides are sorted before
//! they are compared.

use hs_rdf::coerce::Timestamp;
use hs_rdf::mapping::{parse, serialize};
use hs_rdf::model::coverage::{set_period_coverage, set_spatial_coverage};
use hs_rdf::model::{
    AggregationBase, AwardInfo, BoxCoverage, Contributor, Creator, Date, DateType, Description,
    ExtendedMetadata, FieldInformation, FileMap, FileSetAggregation,
    GeographicFeatureAggregation, GeometryInformation, Identifier, MultidimensionalAggregation,
    MultidimensionalSpatialReference, MultidimensionalSpatialReferenceType, PeriodCoverage,
    ProcessingLevel, Publisher, ReferencedTimeSeriesAggregation, Relation, ResourceMap,
    ResourceMetadata, Rights, SingleFileAggregation, Source, SpatialCoverage, SpatialReference,
    SpatialReferenceType, TimeSeriesAggregation, TimeSeriesMethod, TimeSeriesResult,
    TimeSeriesSite, TimeSeriesVariable, Unit, UtcOffset, Variable, VariableType,
};
use hs_rdf::{Mapper, MetadataKind, Node, RdfRecord};
use oxigraph::model::NamedNode;

fn iri(text: &str) -> NamedNode {
    NamedNode::new(text).unwrap()
}

fn ts(text: &str) -> Timestamp {
    Timestamp::parse(text).unwrap()
}

/// Serialize, check dispatch, parse back.
fn reparse<R: RdfRecord>(record: &R, kind: MetadataKind) -> R {
    let graph = serialize(record).unwrap();
    assert_eq!(Mapper::default().resolve(&graph).unwrap(), kind);
    parse(&graph, None).unwrap()
}

fn by_subject<T: RdfRecord>(items: &mut [T]) {
    items.sort_by_key(|item| item.subject().to_string());
}

fn sorted_base(base: &mut AggregationBase) {
    base.subjects.sort();
    by_subject(&mut base.extended_metadata);
    by_subject(&mut base.coverages);
}

fn rights() -> Rights {
    Rights {
        statement: "This resource is shared under the Creative Commons Attribution CC BY.".into(),
        url: Some(iri("http://creativecommons.org/licenses/by/4.0/")),
        ..Rights::default()
    }
}

fn base(title: &str) -> AggregationBase {
    let mut base = AggregationBase {
        title: title.into(),
        subjects: vec!["Logan River".into(), "water temperature".into(), "USU".into()],
        extended_metadata: vec![
            ExtendedMetadata::new("site", "Mendon Road"),
            ExtendedMetadata::new("sensor", "Hobo U22"),
        ],
        rights: Some(rights()),
        ..AggregationBase::default()
    };
    set_spatial_coverage(
        &mut base.coverages,
        Some(&SpatialCoverage::Box(BoxCoverage {
            name: Some("Logan watershed".into()),
            northlimit: 42.05,
            eastlimit: -111.5,
            southlimit: 41.6,
            westlimit: -112.0,
            units: "Decimal degrees".into(),
            projection: Some("WGS 84 EPSG:4326".into()),
            ..BoxCoverage::default()
        })),
    );
    set_period_coverage(
        &mut base.coverages,
        Some(&PeriodCoverage {
            name: Some("deployment".into()),
            start: ts("2020-06-01T00:00:00"),
            end: ts("2020-07-29T00:00:00"),
            scheme: Some("W3C-DTF".into()),
        }),
    );
    base
}

#[test]
fn geographic_feature_round_trip() {
    let mut feature = GeographicFeatureAggregation {
        base: base("watersheds"),
        field_information: vec![
            FieldInformation {
                field_name: Some("FID".into()),
                field_type: Some("Integer".into()),
                field_type_code: Some("0".into()),
                field_width: Some(10),
                field_precision: Some(0),
                ..FieldInformation::default()
            },
            FieldInformation {
                field_name: Some("AREA".into()),
                field_type: Some("Real".into()),
                field_type_code: Some("2".into()),
                field_width: Some(19),
                field_precision: Some(11),
                ..FieldInformation::default()
            },
        ],
        geometry_information: GeometryInformation {
            feature_count: Some(7),
            geometry_type: Some("MULTIPOLYGON".into()),
            ..GeometryInformation::default()
        },
        spatial_reference: Some(SpatialReference {
            reference_type: SpatialReferenceType::Box,
            value: "northlimit=42.05; eastlimit=-111.5; southlimit=41.6; westlimit=-112.0; \
                    units=Decimal degrees"
                .into(),
            ..SpatialReference::default()
        }),
        ..GeographicFeatureAggregation::default()
    };

    let mut back = reparse(&feature, MetadataKind::GeographicFeature);
    for record in [&mut feature, &mut back] {
        sorted_base(&mut record.base);
        by_subject(&mut record.field_information);
    }
    assert_eq!(back, feature);
}

#[test]
fn geographic_feature_without_geometry_details_round_trip() {
    let mut feature = GeographicFeatureAggregation::default();
    feature.base.title = "empty shapefile".into();

    let back = reparse(&feature, MetadataKind::GeographicFeature);
    assert_eq!(back.geometry_information.subject, feature.geometry_information.subject);
    assert_eq!(back, feature);
}

#[test]
fn multidimensional_round_trip() {
    let mut netcdf = MultidimensionalAggregation {
        base: base("snow water equivalent"),
        variables: vec![
            Variable {
                name: "SWE".into(),
                unit: "m".into(),
                variable_type: VariableType::Float,
                shape: "time,y,x".into(),
                descriptive_name: Some("snow water equivalent".into()),
                method: Some("model simulation of UEB model".into()),
                missing_value: Some("-9999".into()),
                ..Variable::default()
            },
            Variable {
                name: "time".into(),
                unit: "hours since 2008-10-01 00:00:00 UTC".into(),
                variable_type: VariableType::Float,
                shape: "time".into(),
                ..Variable::default()
            },
            Variable {
                name: "transverse_mercator".into(),
                unit: "Unknown".into(),
                variable_type: VariableType::Char,
                shape: "Not defined".into(),
                ..Variable::default()
            },
        ],
        spatial_reference: Some(MultidimensionalSpatialReference {
            reference_type: MultidimensionalSpatialReferenceType::Point,
            value: "east=-111.5; north=41.8; units=Decimal degrees".into(),
            ..MultidimensionalSpatialReference::default()
        }),
        ..MultidimensionalAggregation::default()
    };

    let mut back = reparse(&netcdf, MetadataKind::Multidimensional);
    for record in [&mut netcdf, &mut back] {
        sorted_base(&mut record.base);
        by_subject(&mut record.variables);
    }
    assert_eq!(back, netcdf);
}

#[test]
fn referenced_time_series_round_trip() {
    let mut referenced = ReferencedTimeSeriesAggregation {
        base: base("referenced series"),
        ..ReferencedTimeSeriesAggregation::default()
    };

    let mut back = reparse(&referenced, MetadataKind::ReferencedTimeSeries);
    sorted_base(&mut referenced.base);
    sorted_base(&mut back.base);
    assert_eq!(back, referenced);
}

fn series(site_code: &str, variable_code: &str) -> TimeSeriesResult {
    TimeSeriesResult {
        series_id: format!("{site_code}-{variable_code}"),
        unit: Some(Unit {
            unit_type: "Temperature".into(),
            name: "degree celsius".into(),
            abbreviation: "degC".into(),
            ..Unit::default()
        }),
        status: Some("Complete".into()),
        sample_medium: "Surface Water".into(),
        value_count: 1441,
        aggregation_statistics: "Average".into(),
        series_label: Some(format!("{variable_code} at {site_code}")),
        site: TimeSeriesSite {
            site_code: site_code.into(),
            site_name: Some("Logan River at Mendon Road".into()),
            elevation_m: Some(1345.0),
            elevation_datum: Some("NGVD29".into()),
            site_type: Some("Stream".into()),
            latitude: Some(41.718473),
            longitude: Some(-111.946402),
            ..TimeSeriesSite::default()
        },
        variable: TimeSeriesVariable {
            variable_code: variable_code.into(),
            variable_name: "Temperature".into(),
            variable_type: "Water Quality".into(),
            no_data_value: -9999,
            variable_definition: Some("water temperature".into()),
            speciation: Some("Not Applicable".into()),
            ..TimeSeriesVariable::default()
        },
        method: TimeSeriesMethod {
            method_code: "28".into(),
            method_name: "Quality Control Level 1".into(),
            method_type: "Instrument deployment".into(),
            method_description: Some("Quality controlled data".into()),
            method_link: Some(iri("http://www.example.com")),
            ..TimeSeriesMethod::default()
        },
        processing_level: ProcessingLevel {
            processing_level_code: "1".into(),
            definition: Some("Quality controlled data".into()),
            explanation: Some("Checked by a technician".into()),
            ..ProcessingLevel::default()
        },
        utc_offset: Some(UtcOffset {
            value: "-7.0".into(),
            ..UtcOffset::default()
        }),
        ..TimeSeriesResult::default()
    }
}

#[test]
fn time_series_round_trip() {
    let mut time_series = TimeSeriesAggregation {
        base: base("ODM2 series"),
        time_series_results: vec![
            series("USU-LBR-Mendon", "USU36"),
            series("USU-LBR-Paradise", "USU3"),
        ],
        ..TimeSeriesAggregation::default()
    };

    let mut back = reparse(&time_series, MetadataKind::TimeSeries);
    for record in [&mut time_series, &mut back] {
        sorted_base(&mut record.base);
        by_subject(&mut record.time_series_results);
    }
    assert_eq!(back, time_series);
}

#[test]
fn file_set_round_trip() {
    let mut file_set = FileSetAggregation {
        base: base("asdf"),
        ..FileSetAggregation::default()
    };

    let mut back = reparse(&file_set, MetadataKind::FileSet);
    sorted_base(&mut file_set.base);
    sorted_base(&mut back.base);
    assert_eq!(back, file_set);
}

#[test]
fn single_file_round_trip() {
    let mut single = SingleFileAggregation {
        base: base("test.xml"),
        ..SingleFileAggregation::default()
    };

    let mut back = reparse(&single, MetadataKind::SingleFile);
    sorted_base(&mut single.base);
    sorted_base(&mut back.base);
    assert_eq!(back, single);
}

#[test]
fn resource_map_round_trip() {
    let root = "http://www.hydroshare.org/resource/84805fd615a04d63b4eada65644a1e20";
    let mut map = ResourceMap {
        subject: Node::from(iri(&format!("{root}/data/resourcemap.xml"))),
        describes: FileMap {
            subject: Node::from(iri(&format!("{root}/data/resourcemap.xml#aggregation"))),
            is_documented_by: Some(iri(&format!("{root}/data/resourcemetadata.xml"))),
            files: vec![
                iri(&format!("{root}/data/contents/logan.vrt")),
                iri(&format!("{root}/data/contents/logan.tif")),
                iri(&format!("{root}/data/contents/readme.txt")),
            ],
            title: "Logan River temperature".into(),
            is_described_by: Some(iri(&format!("{root}/data/resourcemap.xml"))),
        },
        identifier: Some("84805fd615a04d63b4eada65644a1e20".into()),
        creator: Some("HydroShare".into()),
    };

    let mut back = reparse(&map, MetadataKind::ResourceMap);
    for record in [&mut map, &mut back] {
        record.describes.files.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    }
    assert_eq!(back, map);
}

fn full_resource() -> ResourceMetadata {
    let mut resource = ResourceMetadata::new("Logan River water temperature");
    resource.description = Some(Description {
        abstract_text: Some("Hourly water temperature at three sites.".into()),
        ..Description::default()
    });
    resource.subjects = vec!["temperature".into(), "Logan River".into()];
    resource.identifier = Some(Identifier {
        hydroshare_identifier: Some(iri(
            "http://www.hydroshare.org/resource/84805fd615a04d63b4eada65644a1e20",
        )),
        ..Identifier::default()
    });
    resource.creators = vec![
        Creator {
            google_scholar_id: Some(iri("https://scholar.google.com/citations?user=ScWTFoQAAAAJ")),
            research_gate_id: Some(iri("https://www.researchgate.net/profile/Scott_Black")),
            phone: Some("4357970000".into()),
            orcid: Some(iri("https://orcid.org/0000-0002-1825-0097")),
            address: Some("8200 Old Main Hill, Logan, UT".into()),
            organization: Some("Utah State University".into()),
            email: Some("scott.black@usu.edu".into()),
            homepage: Some(iri("http://usu.edu/homepage")),
            description: Some("/user/4/".into()),
            ..Creator::new("Black, Scott Steven", 1)
        },
        Creator::new("Castronova, Anthony", 2),
    ];
    resource.contributors = vec![Contributor {
        name: Some("Horsburgh, Jeffery".into()),
        organization: Some("Utah State University".into()),
        email: Some("jeff.horsburgh@usu.edu".into()),
        homepage: Some(iri("http://usu.edu/horsburgh")),
        ..Contributor::default()
    }];
    resource.sources = vec![
        Source {
            is_derived_from: Some("another resource".into()),
            ..Source::default()
        },
        Source {
            is_derived_from: Some("a field campaign".into()),
            ..Source::default()
        },
    ];
    resource.relations = vec![Relation {
        is_copied_from: Some("https://www.hydroshare.org/resource/002c56e0ac2d4c209a7a4ad2b9cbc0fb".into()),
        is_part_of: Some("Logan River Observatory".into()),
        is_described_by: Some("Jones et al. 2017".into()),
        ..Relation::default()
    }];
    resource.extended_metadata = vec![
        ExtendedMetadata::new("site", "Mendon Road"),
        ExtendedMetadata::new("sensor", "Hobo U22"),
    ];
    resource.rights = Some(rights());
    resource.dates = vec![
        Date::new(DateType::Created, ts("2020-07-09T19:12:21.354703Z")),
        Date::new(DateType::Modified, ts("2020-11-13T19:40:57.276064+00:00")),
        Date::new(DateType::Published, ts("2020-12-01T08:00:00-07:00")),
    ];
    resource.award_infos = vec![AwardInfo {
        funding_agency_name: Some("National Science Foundation".into()),
        award_title: Some("Collaborative Research".into()),
        award_number: Some("1148453".into()),
        funding_agency_url: Some(iri("https://www.nsf.gov")),
        ..AwardInfo::default()
    }];
    resource.coverages = base("coverage only").coverages;
    resource.publisher = Some(Publisher {
        name: "Consortium of Universities for the Advancement of Hydrologic Science, Inc.".into(),
        url: Some(iri("https://www.cuahsi.org")),
        ..Publisher::default()
    });
    resource
}

fn sorted_resource(resource: &mut ResourceMetadata) {
    resource.subjects.sort();
    by_subject(&mut resource.creators);
    by_subject(&mut resource.contributors);
    by_subject(&mut resource.sources);
    by_subject(&mut resource.relations);
    by_subject(&mut resource.extended_metadata);
    by_subject(&mut resource.dates);
    by_subject(&mut resource.award_infos);
    by_subject(&mut resource.coverages);
}

#[test]
fn resource_round_trip() {
    let mut resource = full_resource();

    let mut back = reparse(&resource, MetadataKind::Resource);
    sorted_resource(&mut resource);
    sorted_resource(&mut back);
    assert_eq!(back, resource);
    assert_eq!(
        back.created().map(|created| created.to_string()).as_deref(),
        Some("2020-07-09T19:12:21.354703Z")
    );
}

#[test]
fn cleared_abstract_round_trip() {
    let mut resource = ResourceMetadata::new("abstract toggled");
    resource.set_abstract(Some("a".into()));
    resource.set_abstract(None);

    let back = reparse(&resource, MetadataKind::Resource);
    assert_eq!(back, resource);
    assert!(back.abstract_text().is_none());
}
