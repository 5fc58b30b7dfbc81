//! Rich diagnostic error types for the hs-rdf mapping engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so callers can tell a malformed document
//! from a broken schema declaration.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the hs-rdf crate.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text) through to the caller.
#[derive(Debug, Error, Diagnostic)]
pub enum RdfError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Schema errors
// ---------------------------------------------------------------------------

/// Errors raised while building or validating schema descriptors.
///
/// These are programmer errors: a correctly shipped schema set never produces
/// them. They are reported at start-up, before any graph is touched.
#[derive(Debug, Clone, Error, Diagnostic)]
pub enum SchemaError {
    #[error("schema {schema}: field `{field}` has no predicate")]
    #[diagnostic(
        code(hs_rdf::schema::missing_predicate),
        help(
            "Every field binding must name the predicate it maps to. \
             Pass a predicate IRI to the builder call that declares this field."
        )
    )]
    MissingPredicate { schema: String, field: String },

    #[error("schema {schema}: field `{field}` has an invalid predicate IRI \"{iri}\": {message}")]
    #[diagnostic(
        code(hs_rdf::schema::invalid_predicate),
        help("Predicates must be absolute IRIs, e.g. `http://purl.org/dc/elements/1.1/title`.")
    )]
    InvalidPredicate {
        schema: String,
        field: String,
        iri: String,
        message: String,
    },

    #[error("schema {schema}: field `{field}` is declared twice")]
    #[diagnostic(
        code(hs_rdf::schema::duplicate_field),
        help("Field names must be unique within a schema. Remove or rename one declaration.")
    )]
    DuplicateField { schema: String, field: String },

    #[error("schema cycle detected: {path}")]
    #[diagnostic(
        code(hs_rdf::schema::cycle),
        help(
            "A record type nests itself, directly or through other record types. \
             Nested schemas must form a tree; break the cycle with a URI-typed field."
        )
    )]
    Cycle { path: String },

    #[error("schema {schema} declares no rdf:type discriminator")]
    #[diagnostic(
        code(hs_rdf::schema::missing_discriminator),
        help(
            "Top-level record types must declare exactly one rdf:type discriminator \
             so that foreign documents can be dispatched to them."
        )
    )]
    MissingDiscriminator { schema: String },

    #[error("discriminator <{iri}> is registered by both {first} and {second}")]
    #[diagnostic(
        code(hs_rdf::schema::duplicate_discriminator),
        help("Each registered record type needs its own rdf:type class IRI.")
    )]
    DuplicateDiscriminator {
        iri: String,
        first: String,
        second: String,
    },
}

/// Result type for schema construction.
pub type SchemaResult<T> = std::result::Result<T, SchemaError>;

// ---------------------------------------------------------------------------
// Graph errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum GraphError {
    #[error("{count} subjects match ({predicate}, {object}); expected at most one")]
    #[diagnostic(
        code(hs_rdf::graph::ambiguous_subject),
        help(
            "The document describes several resources of the same type. \
             Pass the subject node explicitly instead of relying on the discriminator."
        )
    )]
    AmbiguousSubject {
        predicate: String,
        object: String,
        count: usize,
    },
}

/// Result type for triple graph operations.
pub type GraphResult<T> = std::result::Result<T, GraphError>;

// ---------------------------------------------------------------------------
// Mapping errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum MappingError {
    #[error("no subject found for ({predicate}, {discriminator})")]
    #[diagnostic(
        code(hs_rdf::mapping::subject_not_found),
        help(
            "The graph holds no node typed with this schema's discriminator. \
             The document may describe a different record type; try `Mapper::load`."
        )
    )]
    SubjectNotFound {
        predicate: String,
        discriminator: String,
    },

    #[error("no registered schema matches the graph ({registered} types registered)")]
    #[diagnostic(
        code(hs_rdf::mapping::schema_not_found),
        help(
            "None of the graph's rdf:type objects is a registered discriminator. \
             The document is not resource or aggregation metadata."
        )
    )]
    SchemaNotFound { registered: usize },

    #[error("schema {schema} has no discriminator; a subject must be supplied")]
    #[diagnostic(
        code(hs_rdf::mapping::subject_required),
        help("Nested record types can only be parsed at an explicit subject node.")
    )]
    SubjectRequired { schema: String },

    #[error("cannot read \"{value}\" at {predicate} as {expected}")]
    #[diagnostic(
        code(hs_rdf::mapping::coercion),
        help("The literal's lexical form does not parse as the field's declared type.")
    )]
    Coercion {
        predicate: String,
        value: String,
        expected: String,
    },

    #[error("\"{value}\" at {predicate} is not a member of {enumeration}")]
    #[diagnostic(
        code(hs_rdf::mapping::unknown_enum_value),
        help("Closed vocabularies only accept their declared values, compared exactly.")
    )]
    UnknownEnumValue {
        predicate: String,
        value: String,
        enumeration: String,
    },

    #[error("{value} at {predicate} is not a {expected}")]
    #[diagnostic(
        code(hs_rdf::mapping::type_mismatch),
        help(
            "The matched object has the wrong term kind, e.g. a literal where a \
             URI node or a nested record was expected."
        )
    )]
    TypeMismatch {
        predicate: String,
        value: String,
        expected: String,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),
}

/// Result type for serialize/parse operations.
pub type MappingResult<T> = std::result::Result<T, MappingError>;

// ---------------------------------------------------------------------------
// Syntax errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum SyntaxError {
    #[error("failed to parse {format} document: {message}")]
    #[diagnostic(
        code(hs_rdf::syntax::parse),
        help("Check that the document is well-formed and that the declared format matches its content.")
    )]
    Parse { format: String, message: String },

    #[error("failed to write {format} document: {message}")]
    #[diagnostic(
        code(hs_rdf::syntax::write),
        help("A term in the graph could not be rendered in this syntax.")
    )]
    Write { format: String, message: String },

    #[error("unknown RDF syntax \"{name}\"")]
    #[diagnostic(
        code(hs_rdf::syntax::unknown_format),
        help("Supported syntaxes: turtle (.ttl), n-triples (.nt), rdf-xml (.xml, .rdf).")
    )]
    UnknownFormat { name: String },

    #[error("failed to read {path}")]
    #[diagnostic(code(hs_rdf::syntax::io), help("Ensure the file exists and is readable."))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for textual syntax operations.
pub type SyntaxResult<T> = std::result::Result<T, SyntaxError>;

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read mapper config: {path}")]
    #[diagnostic(
        code(hs_rdf::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse mapper config: {message}")]
    #[diagnostic(
        code(hs_rdf::config::parse),
        help("Check the TOML syntax and the field names: max_depth, format, class_labels.")
    )]
    Parse { message: String },

    #[error("invalid mapper config: {message}")]
    #[diagnostic(code(hs_rdf::config::invalid))]
    Invalid { message: String },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Convenience result type using the top-level error.
pub type RdfResult<T> = std::result::Result<T, RdfError>;
