//! Closed vocabularies used by metadata fields.

use crate::coerce::{
    enum_from_object, enum_to_object, CoercionFailure, EnumTerm, Scalar, ScalarKind, TermEnum,
};
use crate::graph::Object;

/// The role of a date attached to a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateType {
    #[default]
    Created,
    Modified,
    Valid,
    Available,
    Published,
}

impl TermEnum for DateType {
    const NAME: &'static str = "DateType";

    fn variants() -> &'static [Self] {
        &[
            DateType::Created,
            DateType::Modified,
            DateType::Valid,
            DateType::Available,
            DateType::Published,
        ]
    }

    fn term(&self) -> EnumTerm {
        EnumTerm::Iri(match self {
            DateType::Created => "http://purl.org/dc/terms/created",
            DateType::Modified => "http://purl.org/dc/terms/modified",
            DateType::Valid => "http://purl.org/dc/terms/valid",
            DateType::Available => "http://purl.org/dc/terms/available",
            DateType::Published => "http://purl.org/dc/terms/published",
        })
    }
}

impl Scalar for DateType {
    const KIND: ScalarKind = ScalarKind::Enumeration(Self::NAME);

    fn to_object(&self) -> Object {
        enum_to_object(self)
    }

    fn from_object(object: &Object) -> Result<Self, CoercionFailure> {
        enum_from_object(object)
    }
}

/// DCMI encoding of a coverage value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CoverageType {
    #[default]
    Box,
    Point,
    Period,
}

impl TermEnum for CoverageType {
    const NAME: &'static str = "CoverageType";

    fn variants() -> &'static [Self] {
        &[CoverageType::Box, CoverageType::Point, CoverageType::Period]
    }

    fn term(&self) -> EnumTerm {
        EnumTerm::Iri(match self {
            CoverageType::Box => "http://purl.org/dc/terms/box",
            CoverageType::Point => "http://purl.org/dc/terms/point",
            CoverageType::Period => "http://purl.org/dc/terms/period",
        })
    }
}

impl Scalar for CoverageType {
    const KIND: ScalarKind = ScalarKind::Enumeration(Self::NAME);

    fn to_object(&self) -> Object {
        enum_to_object(self)
    }

    fn from_object(object: &Object) -> Result<Self, CoercionFailure> {
        enum_from_object(object)
    }
}

/// Shape of a raster or feature spatial reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpatialReferenceType {
    #[default]
    Box,
    Point,
}

impl TermEnum for SpatialReferenceType {
    const NAME: &'static str = "SpatialReferenceType";

    fn variants() -> &'static [Self] {
        &[SpatialReferenceType::Box, SpatialReferenceType::Point]
    }

    fn term(&self) -> EnumTerm {
        EnumTerm::Iri(match self {
            SpatialReferenceType::Box => "http://www.hydroshare.org/terms/box",
            SpatialReferenceType::Point => "http://www.hydroshare.org/terms/point",
        })
    }
}

impl Scalar for SpatialReferenceType {
    const KIND: ScalarKind = ScalarKind::Enumeration(Self::NAME);

    fn to_object(&self) -> Object {
        enum_to_object(self)
    }

    fn from_object(object: &Object) -> Result<Self, CoercionFailure> {
        enum_from_object(object)
    }
}

/// Shape of a multidimensional dataset's spatial reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MultidimensionalSpatialReferenceType {
    #[default]
    Box,
    Point,
}

impl TermEnum for MultidimensionalSpatialReferenceType {
    const NAME: &'static str = "MultidimensionalSpatialReferenceType";

    fn variants() -> &'static [Self] {
        &[
            MultidimensionalSpatialReferenceType::Box,
            MultidimensionalSpatialReferenceType::Point,
        ]
    }

    fn term(&self) -> EnumTerm {
        EnumTerm::Iri(match self {
            MultidimensionalSpatialReferenceType::Box => "http://www.hydroshare.org/terms/box",
            MultidimensionalSpatialReferenceType::Point => "http://www.hydroshare.org/terms/point",
        })
    }
}

impl Scalar for MultidimensionalSpatialReferenceType {
    const KIND: ScalarKind = ScalarKind::Enumeration(Self::NAME);

    fn to_object(&self) -> Object {
        enum_to_object(self)
    }

    fn from_object(object: &Object) -> Result<Self, CoercionFailure> {
        enum_from_object(object)
    }
}

/// NetCDF variable data types, written as plain literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VariableType {
    Char,
    Byte,
    Short,
    Int,
    Float,
    Double,
    Int64,
    UnsignedByte,
    UnsignedShort,
    UnsignedInt,
    UnsignedInt64,
    String,
    UserDefined,
    #[default]
    Unknown,
}

impl TermEnum for VariableType {
    const NAME: &'static str = "VariableType";

    fn variants() -> &'static [Self] {
        &[
            VariableType::Char,
            VariableType::Byte,
            VariableType::Short,
            VariableType::Int,
            VariableType::Float,
            VariableType::Double,
            VariableType::Int64,
            VariableType::UnsignedByte,
            VariableType::UnsignedShort,
            VariableType::UnsignedInt,
            VariableType::UnsignedInt64,
            VariableType::String,
            VariableType::UserDefined,
            VariableType::Unknown,
        ]
    }

    fn term(&self) -> EnumTerm {
        EnumTerm::Literal(match self {
            VariableType::Char => "Char",
            VariableType::Byte => "Byte",
            VariableType::Short => "Short",
            VariableType::Int => "Int",
            VariableType::Float => "Float",
            VariableType::Double => "Double",
            VariableType::Int64 => "Int64",
            VariableType::UnsignedByte => "Unsigned Byte",
            VariableType::UnsignedShort => "Unsigned Short",
            VariableType::UnsignedInt => "Unsigned Int",
            VariableType::UnsignedInt64 => "Unsigned Int64",
            VariableType::String => "String",
            VariableType::UserDefined => "User Defined Type",
            VariableType::Unknown => "Unknown",
        })
    }
}

impl Scalar for VariableType {
    const KIND: ScalarKind = ScalarKind::Enumeration(Self::NAME);

    fn to_object(&self) -> Object {
        enum_to_object(self)
    }

    fn from_object(object: &Object) -> Result<Self, CoercionFailure> {
        enum_from_object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxigraph::model::{Literal, NamedNode};

    #[test]
    fn date_types_are_dcterms_iris() {
        let obj = DateType::Modified.to_object();
        assert_eq!(obj.raw(), "http://purl.org/dc/terms/modified");
        assert!(obj.as_node().is_some());
        assert_eq!(DateType::from_object(&obj), Ok(DateType::Modified));
    }

    #[test]
    fn variable_type_matches_spaced_literal() {
        let obj = Object::from(Literal::new_simple_literal("Unsigned Int64"));
        assert_eq!(VariableType::from_object(&obj), Ok(VariableType::UnsignedInt64));
    }

    #[test]
    fn unknown_member_is_rejected() {
        let obj = Object::from(NamedNode::new("http://purl.org/dc/terms/issued").unwrap());
        assert_eq!(
            DateType::from_object(&obj),
            Err(CoercionFailure::UnknownVariant {
                enumeration: "DateType"
            })
        );
    }

    #[test]
    fn spatial_reference_kinds_share_iris() {
        assert_eq!(
            SpatialReferenceType::Point.to_object(),
            MultidimensionalSpatialReferenceType::Point.to_object()
        );
    }
}
