//! Value coercion between graph terms and native scalar types.
//!
//! Every primitive field type implements [`Scalar`]: it knows how to render
//! itself as an [`Object`] and how to read itself back. Serialize and parse are
//! mutual inverses for every value a record can hold.
//!
//! | Native type | Graph form |
//! |---|---|
//! | `String` | untyped literal |
//! | `i64` | `xsd:integer` literal |
//! | `f64` | `xsd:double` literal |
//! | `bool` | `xsd:boolean` literal |
//! | [`Timestamp`] | `xsd:dateTime` literal, offset preserved |
//! | `NamedNode` | URI node |
//! | closed enums | URI node or literal, exact match |

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, Utc};
use oxigraph::model::{Literal, NamedNode, NamedNodeRef};

use crate::error::MappingError;
use crate::graph::{Node, Object};
use crate::vocab::xsd;

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// The native type a field binding coerces to, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
    Uri,
    /// A closed value set, named by its type.
    Enumeration(&'static str),
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::String => write!(f, "string"),
            ScalarKind::Integer => write!(f, "integer"),
            ScalarKind::Float => write!(f, "float"),
            ScalarKind::Boolean => write!(f, "boolean"),
            ScalarKind::Timestamp => write!(f, "ISO-8601 timestamp"),
            ScalarKind::Uri => write!(f, "URI node"),
            ScalarKind::Enumeration(name) => write!(f, "{name}"),
        }
    }
}

/// Why a term could not be read as a scalar.
///
/// Carries no location: the parser attaches the predicate and raw value via
/// [`CoercionFailure::at`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoercionFailure {
    /// The lexical form does not parse as the expected type.
    Malformed { expected: ScalarKind },
    /// The value is not a member of a closed enumeration.
    UnknownVariant { enumeration: &'static str },
    /// The term has the wrong kind (literal vs. node).
    WrongTermKind { expected: ScalarKind },
}

impl CoercionFailure {
    /// Attach the matched predicate and object, producing a mapping error.
    pub fn at(self, predicate: NamedNodeRef<'_>, object: &Object) -> MappingError {
        let predicate = predicate.to_string();
        let value = object.raw().to_string();
        match self {
            CoercionFailure::Malformed { expected } => MappingError::Coercion {
                predicate,
                value,
                expected: expected.to_string(),
            },
            CoercionFailure::UnknownVariant { enumeration } => MappingError::UnknownEnumValue {
                predicate,
                value,
                enumeration: enumeration.to_string(),
            },
            CoercionFailure::WrongTermKind { expected } => MappingError::TypeMismatch {
                predicate,
                value: object.to_string(),
                expected: expected.to_string(),
            },
        }
    }
}

/// A native value that maps to a single graph term.
pub trait Scalar: Sized + Clone + PartialEq + Send + Sync + 'static {
    const KIND: ScalarKind;

    /// Render as a graph term.
    fn to_object(&self) -> Object;

    /// Read back from a graph term.
    fn from_object(object: &Object) -> Result<Self, CoercionFailure>;
}

/// Lexical text of a literal or IRI. Blank nodes carry no value.
fn lexical<T: Scalar>(object: &Object) -> Result<&str, CoercionFailure> {
    match object {
        Object::Node(Node::Blank(_)) => Err(CoercionFailure::WrongTermKind { expected: T::KIND }),
        other => Ok(other.raw()),
    }
}

fn malformed<T: Scalar>() -> CoercionFailure {
    CoercionFailure::Malformed { expected: T::KIND }
}

impl Scalar for String {
    const KIND: ScalarKind = ScalarKind::String;

    fn to_object(&self) -> Object {
        Literal::new_simple_literal(self.as_str()).into()
    }

    fn from_object(object: &Object) -> Result<Self, CoercionFailure> {
        lexical::<Self>(object).map(str::to_string)
    }
}

impl Scalar for i64 {
    const KIND: ScalarKind = ScalarKind::Integer;

    fn to_object(&self) -> Object {
        Literal::new_typed_literal(self.to_string(), xsd::INTEGER).into()
    }

    fn from_object(object: &Object) -> Result<Self, CoercionFailure> {
        lexical::<Self>(object)?
            .trim()
            .parse()
            .map_err(|_| malformed::<Self>())
    }
}

impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::Float;

    fn to_object(&self) -> Object {
        let text = if self.is_infinite() {
            if self.is_sign_positive() { "INF".to_string() } else { "-INF".to_string() }
        } else {
            self.to_string()
        };
        Literal::new_typed_literal(text, xsd::DOUBLE).into()
    }

    fn from_object(object: &Object) -> Result<Self, CoercionFailure> {
        let text = lexical::<Self>(object)?.trim();
        // xsd:double spells infinity differently from Rust.
        match text {
            "INF" | "+INF" => Ok(f64::INFINITY),
            "-INF" => Ok(f64::NEG_INFINITY),
            _ => text.parse().map_err(|_| malformed::<Self>()),
        }
    }
}

impl Scalar for bool {
    const KIND: ScalarKind = ScalarKind::Boolean;

    fn to_object(&self) -> Object {
        Literal::new_typed_literal(self.to_string(), xsd::BOOLEAN).into()
    }

    fn from_object(object: &Object) -> Result<Self, CoercionFailure> {
        match lexical::<Self>(object)?.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(malformed::<Self>()),
        }
    }
}

impl Scalar for NamedNode {
    const KIND: ScalarKind = ScalarKind::Uri;

    fn to_object(&self) -> Object {
        Object::from(self.clone())
    }

    fn from_object(object: &Object) -> Result<Self, CoercionFailure> {
        match object {
            Object::Node(Node::Iri(iri)) => Ok(iri.clone()),
            _ => Err(CoercionFailure::WrongTermKind { expected: Self::KIND }),
        }
    }
}

/// An ISO-8601 point in time.
///
/// The offset found in the document is kept as-is, including whether UTC
/// was spelled `Z` or `+00:00`; timestamps without an offset stay local.
/// Nothing is normalized to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Written with a `Z` designator.
    Utc(DateTime<Utc>),
    Zoned(DateTime<FixedOffset>),
    Local(NaiveDateTime),
}

impl Timestamp {
    /// Parse ISO-8601 text, with or without an offset.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Ok(zoned) = DateTime::parse_from_rfc3339(text) {
            if text.ends_with(['Z', 'z']) {
                return Some(Timestamp::Utc(zoned.with_timezone(&Utc)));
            }
            return Some(Timestamp::Zoned(zoned));
        }
        NaiveDateTime::parse_from_str(text, NAIVE_FORMAT)
            .ok()
            .map(Timestamp::Local)
    }

    /// The offset carried by the document, if any.
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Timestamp::Utc(dt) => Some(dt.fixed_offset().timezone()),
            Timestamp::Zoned(dt) => Some(*dt.offset()),
            Timestamp::Local(_) => None,
        }
    }

    /// Wall-clock time as written.
    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            Timestamp::Utc(dt) => dt.naive_utc(),
            Timestamp::Zoned(dt) => dt.naive_local(),
            Timestamp::Local(naive) => *naive,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Utc(dt) => write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Timestamp::Zoned(dt) => write!(f, "{}", dt.to_rfc3339()),
            Timestamp::Local(naive) => write!(f, "{}", naive.format(NAIVE_FORMAT)),
        }
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::Local(NaiveDateTime::default())
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Timestamp::Zoned(dt)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp::Utc(dt)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(naive: NaiveDateTime) -> Self {
        Timestamp::Local(naive)
    }
}

impl Scalar for Timestamp {
    const KIND: ScalarKind = ScalarKind::Timestamp;

    fn to_object(&self) -> Object {
        Literal::new_typed_literal(self.to_string(), xsd::DATE_TIME).into()
    }

    fn from_object(object: &Object) -> Result<Self, CoercionFailure> {
        Timestamp::parse(lexical::<Self>(object)?).ok_or_else(malformed::<Self>)
    }
}

// ---------------------------------------------------------------------------
// Closed enumerations
// ---------------------------------------------------------------------------

/// How an enumeration member is written to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumTerm {
    /// As a URI node.
    Iri(&'static str),
    /// As an untyped literal.
    Literal(&'static str),
}

impl EnumTerm {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnumTerm::Iri(s) | EnumTerm::Literal(s) => s,
        }
    }
}

/// A closed value set whose members map one-to-one to graph terms.
///
/// Implementors get [`Scalar`] by delegating to [`enum_to_object`] and
/// [`enum_from_object`].
pub trait TermEnum: Copy + PartialEq + 'static {
    /// Type name used in diagnostics.
    const NAME: &'static str;

    /// Every member, in declaration order.
    fn variants() -> &'static [Self];

    /// The term this member is written as.
    fn term(&self) -> EnumTerm;
}

pub fn enum_to_object<E: TermEnum>(value: &E) -> Object {
    match value.term() {
        EnumTerm::Iri(iri) => Object::from(NamedNodeRef::new_unchecked(iri)),
        EnumTerm::Literal(text) => Literal::new_simple_literal(text).into(),
    }
}

/// Exact match of the object's raw text against every member's term.
pub fn enum_from_object<E: TermEnum>(object: &Object) -> Result<E, CoercionFailure> {
    if let Object::Node(Node::Blank(_)) = object {
        return Err(CoercionFailure::WrongTermKind {
            expected: ScalarKind::Enumeration(E::NAME),
        });
    }
    let raw = object.raw();
    E::variants()
        .iter()
        .copied()
        .find(|variant| variant.term().as_str() == raw)
        .ok_or(CoercionFailure::UnknownVariant {
            enumeration: E::NAME,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Object {
        Literal::new_simple_literal(s).into()
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Shade {
        Light,
        Dark,
    }

    impl TermEnum for Shade {
        const NAME: &'static str = "Shade";

        fn variants() -> &'static [Self] {
            &[Shade::Light, Shade::Dark]
        }

        fn term(&self) -> EnumTerm {
            match self {
                Shade::Light => EnumTerm::Iri("http://example.org/light"),
                Shade::Dark => EnumTerm::Literal("dark"),
            }
        }
    }

    #[test]
    fn integer_literal_is_typed() {
        let obj = 42i64.to_object();
        let literal = obj.as_literal().unwrap();
        assert_eq!(literal.value(), "42");
        assert_eq!(literal.datatype(), xsd::INTEGER);
        assert_eq!(i64::from_object(&obj), Ok(42));
    }

    #[test]
    fn non_numeric_integer_is_malformed() {
        assert_eq!(
            i64::from_object(&lit("twelve")),
            Err(CoercionFailure::Malformed {
                expected: ScalarKind::Integer
            })
        );
    }

    #[test]
    fn float_accepts_integral_text() {
        assert_eq!(f64::from_object(&lit("3")), Ok(3.0));
        assert_eq!(f64::from_object(&2.5f64.to_object()), Ok(2.5));
        assert_eq!(f64::from_object(&lit("-INF")), Ok(f64::NEG_INFINITY));
    }

    #[test]
    fn string_reads_iri_text() {
        let iri = Object::from(NamedNode::new("http://example.org/x").unwrap());
        assert_eq!(String::from_object(&iri).unwrap(), "http://example.org/x");
        assert!(String::from_object(&Object::from(Node::fresh())).is_err());
    }

    #[test]
    fn uri_field_rejects_literal() {
        let err = NamedNode::from_object(&lit("http://example.org/x")).unwrap_err();
        assert_eq!(
            err,
            CoercionFailure::WrongTermKind {
                expected: ScalarKind::Uri
            }
        );
    }

    #[test]
    fn timestamp_keeps_offset() {
        let ts = Timestamp::parse("2020-07-09T19:12:21.354703+05:30").unwrap();
        assert_eq!(ts.offset().map(|o| o.local_minus_utc()), Some(5 * 3600 + 30 * 60));

        let round = Timestamp::from_object(&ts.to_object()).unwrap();
        assert_eq!(round.offset(), ts.offset());
        assert_eq!(round.naive_local(), ts.naive_local());
    }

    #[test]
    fn timestamp_without_offset_stays_local() {
        let ts = Timestamp::parse("2020-07-09T19:12:21.354703").unwrap();
        assert!(matches!(ts, Timestamp::Local(_)));
        assert_eq!(ts.to_string(), "2020-07-09T19:12:21.354703");
        assert_eq!(Timestamp::from_object(&ts.to_object()), Ok(ts));
    }

    #[test]
    fn timestamp_keeps_utc_spelling() {
        let z = Timestamp::parse("2020-07-09T19:12:21.354703Z").unwrap();
        assert!(matches!(z, Timestamp::Utc(_)));
        assert_eq!(z.to_string(), "2020-07-09T19:12:21.354703Z");
        assert_eq!(z.offset().map(|o| o.local_minus_utc()), Some(0));
        assert_eq!(Timestamp::from_object(&z.to_object()), Ok(z));

        let numeric = Timestamp::parse("2020-07-09T19:12:21+00:00").unwrap();
        assert_eq!(numeric.to_string(), "2020-07-09T19:12:21+00:00");
        let utc = Timestamp::parse("2020-07-09T19:12:21Z").unwrap();
        assert_eq!(numeric.naive_local(), utc.naive_local());
        assert_ne!(numeric, utc);
    }

    #[test]
    fn infinite_float_uses_xsd_spelling() {
        let positive = f64::INFINITY.to_object();
        assert_eq!(positive.as_literal().unwrap().value(), "INF");
        assert_eq!(f64::from_object(&positive), Ok(f64::INFINITY));

        let negative = f64::NEG_INFINITY.to_object();
        assert_eq!(negative.as_literal().unwrap().value(), "-INF");
        assert_eq!(f64::from_object(&negative), Ok(f64::NEG_INFINITY));

        let nan = f64::NAN.to_object();
        assert_eq!(nan.as_literal().unwrap().value(), "NaN");
        assert!(f64::from_object(&nan).unwrap().is_nan());
    }

    #[test]
    fn enum_matches_iri_and_literal_exactly() {
        let light = Object::from(NamedNode::new("http://example.org/light").unwrap());
        assert_eq!(enum_from_object::<Shade>(&light), Ok(Shade::Light));
        assert_eq!(enum_from_object::<Shade>(&lit("dark")), Ok(Shade::Dark));
        assert_eq!(
            enum_from_object::<Shade>(&lit("Dark")),
            Err(CoercionFailure::UnknownVariant { enumeration: "Shade" })
        );
        assert_eq!(enum_to_object(&Shade::Light), light);
    }

    #[test]
    fn failure_carries_predicate_and_value() {
        let err = CoercionFailure::Malformed {
            expected: ScalarKind::Integer,
        }
        .at(xsd::INTEGER, &lit("abc"));
        match err {
            MappingError::Coercion { value, expected, .. } => {
                assert_eq!(value, "abc");
                assert_eq!(expected, "integer");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
