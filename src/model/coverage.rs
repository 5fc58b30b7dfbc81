//! DCMI coverage values.
//!
//! Coverages and spatial references store their geometry as a single
//! `key=value; key=value` literal under `rdf:value`. This module parses that
//! text into typed values and formats it back. Keys it does not know are
//! kept in `extra` so a parse/format cycle loses nothing.

use std::collections::BTreeMap;
use std::fmt;

use crate::coerce::Timestamp;
use crate::error::{MappingError, MappingResult};
use crate::vocab::rdf;

use super::enums::{CoverageType, MultidimensionalSpatialReferenceType, SpatialReferenceType};
use super::fields::{Coverage, MultidimensionalSpatialReference, SpatialReference};

fn malformed(text: &str, expected: &str) -> MappingError {
    MappingError::Coercion {
        predicate: rdf::VALUE.to_string(),
        value: text.to_string(),
        expected: expected.to_string(),
    }
}

/// Split `key=value; key=value` into its pairs. Empty segments are skipped.
fn split_pairs(text: &str, expected: &str) -> MappingResult<BTreeMap<String, String>> {
    let mut pairs = BTreeMap::new();
    for segment in text.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let (key, value) = segment
            .split_once('=')
            .ok_or_else(|| malformed(text, expected))?;
        pairs.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(pairs)
}

fn take_float(
    pairs: &mut BTreeMap<String, String>,
    key: &str,
    text: &str,
    expected: &str,
) -> MappingResult<f64> {
    pairs
        .remove(key)
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| malformed(text, expected))
}

fn write_pairs<'a>(
    f: &mut fmt::Formatter<'_>,
    pairs: impl IntoIterator<Item = (&'a str, String)>,
) -> fmt::Result {
    let mut first = true;
    for (key, value) in pairs {
        if !first {
            f.write_str("; ")?;
        }
        first = false;
        write!(f, "{key}={value}")?;
    }
    Ok(())
}

/// A bounding box in the coverage's units.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxCoverage {
    pub name: Option<String>,
    pub northlimit: f64,
    pub eastlimit: f64,
    pub southlimit: f64,
    pub westlimit: f64,
    pub units: String,
    pub projection: Option<String>,
    pub extra: BTreeMap<String, String>,
}

impl BoxCoverage {
    pub fn parse(text: &str) -> MappingResult<Self> {
        const EXPECTED: &str = "box coverage";
        let mut pairs = split_pairs(text, EXPECTED)?;
        Ok(Self {
            northlimit: take_float(&mut pairs, "northlimit", text, EXPECTED)?,
            eastlimit: take_float(&mut pairs, "eastlimit", text, EXPECTED)?,
            southlimit: take_float(&mut pairs, "southlimit", text, EXPECTED)?,
            westlimit: take_float(&mut pairs, "westlimit", text, EXPECTED)?,
            name: pairs.remove("name"),
            units: pairs.remove("units").unwrap_or_default(),
            projection: pairs.remove("projection"),
            extra: pairs,
        })
    }
}

impl fmt::Display for BoxCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        pairs.push(("northlimit", self.northlimit.to_string()));
        pairs.push(("eastlimit", self.eastlimit.to_string()));
        pairs.push(("southlimit", self.southlimit.to_string()));
        pairs.push(("westlimit", self.westlimit.to_string()));
        pairs.push(("units", self.units.clone()));
        if let Some(projection) = &self.projection {
            pairs.push(("projection", projection.clone()));
        }
        pairs.extend(self.extra.iter().map(|(k, v)| (k.as_str(), v.clone())));
        write_pairs(f, pairs)
    }
}

/// A single location.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointCoverage {
    pub name: Option<String>,
    pub east: f64,
    pub north: f64,
    pub units: String,
    pub projection: Option<String>,
    pub extra: BTreeMap<String, String>,
}

impl PointCoverage {
    pub fn parse(text: &str) -> MappingResult<Self> {
        const EXPECTED: &str = "point coverage";
        let mut pairs = split_pairs(text, EXPECTED)?;
        Ok(Self {
            east: take_float(&mut pairs, "east", text, EXPECTED)?,
            north: take_float(&mut pairs, "north", text, EXPECTED)?,
            name: pairs.remove("name"),
            units: pairs.remove("units").unwrap_or_default(),
            projection: pairs.remove("projection"),
            extra: pairs,
        })
    }
}

impl fmt::Display for PointCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        pairs.push(("east", self.east.to_string()));
        pairs.push(("north", self.north.to_string()));
        pairs.push(("units", self.units.clone()));
        if let Some(projection) = &self.projection {
            pairs.push(("projection", projection.clone()));
        }
        pairs.extend(self.extra.iter().map(|(k, v)| (k.as_str(), v.clone())));
        write_pairs(f, pairs)
    }
}

/// A time interval.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PeriodCoverage {
    pub name: Option<String>,
    pub start: Timestamp,
    pub end: Timestamp,
    pub scheme: Option<String>,
}

impl PeriodCoverage {
    pub fn parse(text: &str) -> MappingResult<Self> {
        const EXPECTED: &str = "period coverage";
        let mut pairs = split_pairs(text, EXPECTED)?;
        let mut timestamp = |key: &str| {
            pairs
                .remove(key)
                .and_then(|v| Timestamp::parse(&v))
                .ok_or_else(|| malformed(text, EXPECTED))
        };
        let start = timestamp("start")?;
        let end = timestamp("end")?;
        Ok(Self {
            name: pairs.remove("name"),
            start,
            end,
            scheme: pairs.remove("scheme"),
        })
    }
}

impl fmt::Display for PeriodCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        pairs.push(("start", self.start.to_string()));
        pairs.push(("end", self.end.to_string()));
        if let Some(scheme) = &self.scheme {
            pairs.push(("scheme", scheme.clone()));
        }
        write_pairs(f, pairs)
    }
}

/// Either spatial shape.
#[derive(Debug, Clone, PartialEq)]
pub enum SpatialCoverage {
    Box(BoxCoverage),
    Point(PointCoverage),
}

impl SpatialCoverage {
    pub fn is_box(&self) -> bool {
        matches!(self, SpatialCoverage::Box(_))
    }
}

impl fmt::Display for SpatialCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpatialCoverage::Box(b) => b.fmt(f),
            SpatialCoverage::Point(p) => p.fmt(f),
        }
    }
}

impl Coverage {
    /// The spatial value, if this is a box or point coverage.
    pub fn spatial(&self) -> MappingResult<Option<SpatialCoverage>> {
        match self.coverage_type {
            CoverageType::Box => BoxCoverage::parse(&self.value).map(|b| Some(SpatialCoverage::Box(b))),
            CoverageType::Point => {
                PointCoverage::parse(&self.value).map(|p| Some(SpatialCoverage::Point(p)))
            }
            CoverageType::Period => Ok(None),
        }
    }

    /// The temporal value, if this is a period coverage.
    pub fn period(&self) -> MappingResult<Option<PeriodCoverage>> {
        match self.coverage_type {
            CoverageType::Period => PeriodCoverage::parse(&self.value).map(Some),
            CoverageType::Box | CoverageType::Point => Ok(None),
        }
    }

    pub fn from_spatial(spatial: &SpatialCoverage) -> Self {
        let coverage_type = match spatial {
            SpatialCoverage::Box(_) => CoverageType::Box,
            SpatialCoverage::Point(_) => CoverageType::Point,
        };
        Self {
            coverage_type,
            value: spatial.to_string(),
            ..Self::default()
        }
    }

    pub fn from_period(period: &PeriodCoverage) -> Self {
        Self {
            coverage_type: CoverageType::Period,
            value: period.to_string(),
            ..Self::default()
        }
    }
}

impl SpatialReference {
    pub fn parsed(&self) -> MappingResult<SpatialCoverage> {
        match self.reference_type {
            SpatialReferenceType::Box => BoxCoverage::parse(&self.value).map(SpatialCoverage::Box),
            SpatialReferenceType::Point => {
                PointCoverage::parse(&self.value).map(SpatialCoverage::Point)
            }
        }
    }

    pub fn from_spatial(spatial: &SpatialCoverage) -> Self {
        let reference_type = if spatial.is_box() {
            SpatialReferenceType::Box
        } else {
            SpatialReferenceType::Point
        };
        Self {
            reference_type,
            value: spatial.to_string(),
            ..Self::default()
        }
    }
}

impl MultidimensionalSpatialReference {
    pub fn parsed(&self) -> MappingResult<SpatialCoverage> {
        match self.reference_type {
            MultidimensionalSpatialReferenceType::Box => {
                BoxCoverage::parse(&self.value).map(SpatialCoverage::Box)
            }
            MultidimensionalSpatialReferenceType::Point => {
                PointCoverage::parse(&self.value).map(SpatialCoverage::Point)
            }
        }
    }

    pub fn from_spatial(spatial: &SpatialCoverage) -> Self {
        let reference_type = if spatial.is_box() {
            MultidimensionalSpatialReferenceType::Box
        } else {
            MultidimensionalSpatialReferenceType::Point
        };
        Self {
            reference_type,
            value: spatial.to_string(),
            ..Self::default()
        }
    }
}

/// The first box or point coverage in `coverages`.
pub fn spatial_coverage(coverages: &[Coverage]) -> MappingResult<Option<SpatialCoverage>> {
    for coverage in coverages {
        if let Some(spatial) = coverage.spatial()? {
            return Ok(Some(spatial));
        }
    }
    Ok(None)
}

/// The first period coverage in `coverages`.
pub fn period_coverage(coverages: &[Coverage]) -> MappingResult<Option<PeriodCoverage>> {
    for coverage in coverages {
        if let Some(period) = coverage.period()? {
            return Ok(Some(period));
        }
    }
    Ok(None)
}

/// Replace every box and point coverage with `spatial`.
pub fn set_spatial_coverage(coverages: &mut Vec<Coverage>, spatial: Option<&SpatialCoverage>) {
    coverages.retain(|c| c.coverage_type == CoverageType::Period);
    if let Some(spatial) = spatial {
        coverages.push(Coverage::from_spatial(spatial));
    }
}

/// Replace every period coverage with `period`.
pub fn set_period_coverage(coverages: &mut Vec<Coverage>, period: Option<&PeriodCoverage>) {
    coverages.retain(|c| c.coverage_type != CoverageType::Period);
    if let Some(period) = period {
        coverages.push(Coverage::from_period(period));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: &str = "name=asdfsadf; northlimit=42.1505; eastlimit=-84.5739; southlimit=30.282; \
                       westlimit=-104.7887; units=Decimal degrees; projection=WGS 84 EPSG:4326";

    #[test]
    fn box_value_parses_and_formats_back() {
        let parsed = BoxCoverage::parse(BOX).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("asdfsadf"));
        assert_eq!(parsed.northlimit, 42.1505);
        assert_eq!(parsed.westlimit, -104.7887);
        assert_eq!(parsed.units, "Decimal degrees");
        assert_eq!(parsed.projection.as_deref(), Some("WGS 84 EPSG:4326"));
        assert!(parsed.extra.is_empty());
        assert_eq!(parsed.to_string(), BOX);
    }

    #[test]
    fn period_value_keeps_local_times() {
        let text = "start=2020-07-10T00:00:00; end=2020-07-29T00:00:00";
        let period = PeriodCoverage::parse(text).unwrap();
        assert!(period.start.offset().is_none());
        assert_eq!(period.to_string(), text);
    }

    #[test]
    fn unknown_keys_survive() {
        let text = "east=-111.8; north=41.7; units=Decimal degrees; projection_string=GEOGCS";
        let point = PointCoverage::parse(text).unwrap();
        assert_eq!(point.extra.get("projection_string").map(String::as_str), Some("GEOGCS"));
        assert_eq!(PointCoverage::parse(&point.to_string()).unwrap(), point);
    }

    #[test]
    fn missing_limit_is_a_coercion_error() {
        let err = BoxCoverage::parse("northlimit=1; eastlimit=2; southlimit=0").unwrap_err();
        assert!(matches!(err, MappingError::Coercion { ref expected, .. } if expected == "box coverage"));
        assert!(PointCoverage::parse("east").is_err());
    }

    #[test]
    fn setters_replace_only_their_kind() {
        let period = PeriodCoverage::parse("start=2020-07-10T00:00:00; end=2020-07-29T00:00:00").unwrap();
        let mut coverages = vec![Coverage::from_period(&period)];
        let spatial = SpatialCoverage::Box(BoxCoverage::parse(BOX).unwrap());
        set_spatial_coverage(&mut coverages, Some(&spatial));
        set_spatial_coverage(&mut coverages, Some(&spatial));
        assert_eq!(coverages.len(), 2);
        assert_eq!(spatial_coverage(&coverages).unwrap(), Some(spatial));
        assert_eq!(period_coverage(&coverages).unwrap(), Some(period));

        set_period_coverage(&mut coverages, None);
        assert_eq!(coverages.len(), 1);
        assert_eq!(period_coverage(&coverages).unwrap(), None);
    }

    #[test]
    fn spatial_reference_uses_same_text() {
        let spatial = SpatialCoverage::Point(PointCoverage {
            east: 10.5,
            north: -3.25,
            units: "m".into(),
            ..PointCoverage::default()
        });
        let reference = SpatialReference::from_spatial(&spatial);
        assert_eq!(reference.reference_type, SpatialReferenceType::Point);
        assert_eq!(reference.parsed().unwrap(), spatial);

        let md = MultidimensionalSpatialReference::from_spatial(&spatial);
        assert_eq!(md.parsed().unwrap(), spatial);
    }
}
