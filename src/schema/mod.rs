//! Schema descriptors: explicit, ahead-of-time tables of field bindings.
//!
//! Each record type declares one [`Schema`] through [`SchemaBuilder`]: the
//! ordered list of fields, the predicate each maps to, its cardinality and
//! value kind, plus an optional fixed `rdf:type` discriminator. Schemas are
//! built once per process and never mutated afterwards.
//!
//! Configuration mistakes (a field without a predicate, a type that nests
//! itself) are reported by [`Schema::validated`] before any graph is touched.

pub mod binding;
pub mod registry;

use std::any::TypeId;
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use oxigraph::model::{NamedNode, NamedNodeRef};

use crate::coerce::Scalar;
use crate::error::{SchemaError, SchemaResult};
use crate::graph::Node;
use crate::vocab::{dc, rdf};

pub use binding::{Cardinality, FieldBinding, NestedRef, ValueKind};
pub use registry::{Metadata, MetadataKind, SchemaRegistry};

use binding::{
    FieldCodec, ManyCodec, NestedManyCodec, NestedOptionCodec, NestedRequiredCodec, OptionCodec,
    SingleCodec,
};

/// A record type with a schema descriptor and a graph identity.
///
/// `Default` must produce a record with a freshly minted subject and every
/// field at its declared default.
pub trait RdfRecord: Clone + Default + Send + Sync + 'static {
    /// The process-wide descriptor for this type.
    fn schema() -> SchemaResult<&'static Schema<Self>>;

    /// The node this record is stored under.
    fn subject(&self) -> &Node;

    fn subject_mut(&mut self) -> &mut Node;
}

/// Lazily built, process-wide storage for one record type's schema.
///
/// A failed build is cached too, so every access reports the same error.
pub struct SchemaCell<R> {
    cell: OnceLock<SchemaResult<Schema<R>>>,
}

impl<R: RdfRecord> SchemaCell<R> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    pub fn get_or_build(
        &'static self,
        build: impl FnOnce() -> SchemaResult<Schema<R>>,
    ) -> SchemaResult<&'static Schema<R>> {
        self.cell.get_or_init(build).as_ref().map_err(Clone::clone)
    }
}

impl<R: RdfRecord> Default for SchemaCell<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// An IRI as handed to the builder, checked at [`SchemaBuilder::build`].
#[derive(Debug, Clone)]
pub enum IriSpec {
    Missing,
    Text(String),
    Node(NamedNode),
}

impl From<NamedNodeRef<'_>> for IriSpec {
    fn from(iri: NamedNodeRef<'_>) -> Self {
        IriSpec::Node(iri.into_owned())
    }
}

impl From<NamedNode> for IriSpec {
    fn from(iri: NamedNode) -> Self {
        IriSpec::Node(iri)
    }
}

impl From<Option<NamedNodeRef<'_>>> for IriSpec {
    fn from(iri: Option<NamedNodeRef<'_>>) -> Self {
        iri.map_or(IriSpec::Missing, IriSpec::from)
    }
}

impl From<&str> for IriSpec {
    fn from(iri: &str) -> Self {
        IriSpec::Text(iri.to_string())
    }
}

impl IriSpec {
    fn resolve(self, schema: &str, field: &str) -> SchemaResult<NamedNode> {
        match self {
            IriSpec::Missing => Err(SchemaError::MissingPredicate {
                schema: schema.to_string(),
                field: field.to_string(),
            }),
            IriSpec::Node(node) => Ok(node),
            IriSpec::Text(text) => {
                NamedNode::new(text.clone()).map_err(|e| SchemaError::InvalidPredicate {
                    schema: schema.to_string(),
                    field: field.to_string(),
                    iri: text,
                    message: e.to_string(),
                })
            }
        }
    }
}

/// Object-safe view of a schema, used to walk the nesting tree without
/// knowing the record types involved.
pub trait SchemaShape: Send + Sync {
    fn name(&self) -> &'static str;

    fn record_type(&self) -> TypeId;

    /// Nested record types, in binding order.
    fn nested(&self) -> Vec<NestedRef>;

    /// The `rdf:type` class, if declared.
    fn discriminator(&self) -> Option<NamedNodeRef<'_>>;
}

/// The full descriptor for one record type.
pub struct Schema<R> {
    name: &'static str,
    record_type: TypeId,
    bindings: Vec<FieldBinding<R>>,
    discriminator: Option<NamedNode>,
    secondary_type: Option<NamedNode>,
    label: Option<&'static str>,
    defaults: R,
    validated: OnceLock<SchemaResult<()>>,
}

impl<R: RdfRecord> Schema<R> {
    pub fn builder(name: &'static str) -> SchemaBuilder<R> {
        SchemaBuilder {
            name,
            pending: Vec::new(),
            discriminator: None,
            secondary_type: None,
            label: None,
            errors: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Field bindings in declaration order.
    pub fn bindings(&self) -> &[FieldBinding<R>] {
        &self.bindings
    }

    pub fn binding(&self, name: &str) -> Option<&FieldBinding<R>> {
        self.bindings.iter().find(|b| b.name() == name)
    }

    /// The fixed `(rdf:type, class)` pair, if declared.
    pub fn class_discriminator(&self) -> Option<(NamedNodeRef<'static>, NamedNodeRef<'_>)> {
        self.discriminator
            .as_ref()
            .map(|class| (rdf::TYPE, class.as_ref()))
    }

    /// The fixed `(dc:type, class)` pair, if declared.
    pub fn secondary_discriminator(&self) -> Option<(NamedNodeRef<'static>, NamedNodeRef<'_>)> {
        self.secondary_type
            .as_ref()
            .map(|class| (dc::TYPE, class.as_ref()))
    }

    /// Human-readable class label written next to the discriminator.
    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    /// A record with every field at its declared default.
    pub fn defaults(&self) -> &R {
        &self.defaults
    }

    /// Whether serializing `record` would write no field triples at all.
    pub fn is_blank(&self, record: &R) -> bool {
        self.bindings
            .iter()
            .all(|binding| binding.is_unset(record, &self.defaults))
    }

    /// Check that the nesting tree below this schema is finite and that every
    /// nested schema builds. The result is computed once and cached.
    pub fn validated(&self) -> SchemaResult<()> {
        self.validated
            .get_or_init(|| {
                let mut path = Vec::new();
                check_acyclic(self, &mut path)
            })
            .clone()
    }
}

impl<R: RdfRecord> SchemaShape for Schema<R> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn record_type(&self) -> TypeId {
        self.record_type
    }

    fn nested(&self) -> Vec<NestedRef> {
        self.bindings
            .iter()
            .filter_map(|b| match b.kind() {
                ValueKind::Nested(nested) => Some(nested),
                ValueKind::Primitive(_) => None,
            })
            .collect()
    }

    fn discriminator(&self) -> Option<NamedNodeRef<'_>> {
        self.discriminator.as_ref().map(NamedNode::as_ref)
    }
}

impl<R> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("fields", &self.bindings.len())
            .field("discriminator", &self.discriminator)
            .finish()
    }
}

/// Depth-first walk of the nesting tree; a record type reappearing on its
/// own path is a cycle.
fn check_acyclic(
    shape: &dyn SchemaShape,
    path: &mut Vec<(TypeId, &'static str)>,
) -> SchemaResult<()> {
    if path.iter().any(|(id, _)| *id == shape.record_type()) {
        let mut names: Vec<&str> = path.iter().map(|(_, name)| *name).collect();
        names.push(shape.name());
        return Err(SchemaError::Cycle {
            path: names.join(" -> "),
        });
    }
    path.push((shape.record_type(), shape.name()));
    for nested in shape.nested() {
        let child = nested.resolve()?;
        check_acyclic(child, path)?;
    }
    path.pop();
    Ok(())
}

struct PendingBinding<R> {
    name: &'static str,
    predicate: IriSpec,
    cardinality: Cardinality,
    kind: ValueKind,
    codec: Box<dyn FieldCodec<R>>,
}

/// Collects field bindings for one record type.
///
/// Predicates are checked when [`build`](Self::build) is called; the first
/// configuration error found is returned.
pub struct SchemaBuilder<R> {
    name: &'static str,
    pending: Vec<PendingBinding<R>>,
    discriminator: Option<IriSpec>,
    secondary_type: Option<IriSpec>,
    label: Option<&'static str>,
    errors: Vec<SchemaError>,
}

impl<R: RdfRecord> SchemaBuilder<R> {
    /// Declare the fixed `rdf:type` class.
    pub fn discriminator(mut self, class: impl Into<IriSpec>) -> Self {
        self.discriminator = Some(class.into());
        self
    }

    /// Declare a fixed `dc:type` class, written next to `rdf:type`.
    pub fn secondary_type(mut self, class: impl Into<IriSpec>) -> Self {
        self.secondary_type = Some(class.into());
        self
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    fn push(
        mut self,
        name: &'static str,
        predicate: IriSpec,
        cardinality: Cardinality,
        kind: ValueKind,
        codec: Box<dyn FieldCodec<R>>,
    ) -> Self {
        self.pending.push(PendingBinding {
            name,
            predicate,
            cardinality,
            kind,
            codec,
        });
        self
    }

    /// A single value that is always written.
    pub fn required<T: Scalar>(
        self,
        name: &'static str,
        predicate: impl Into<IriSpec>,
        get: fn(&R) -> &T,
        get_mut: fn(&mut R) -> &mut T,
    ) -> Self {
        let codec = SingleCodec {
            get,
            get_mut,
            suppress_default: false,
        };
        self.push(
            name,
            predicate.into(),
            Cardinality::One,
            ValueKind::Primitive(T::KIND),
            Box::new(codec),
        )
    }

    /// A single value that is omitted while it equals the record default.
    pub fn with_default<T: Scalar>(
        self,
        name: &'static str,
        predicate: impl Into<IriSpec>,
        get: fn(&R) -> &T,
        get_mut: fn(&mut R) -> &mut T,
    ) -> Self {
        let codec = SingleCodec {
            get,
            get_mut,
            suppress_default: true,
        };
        self.push(
            name,
            predicate.into(),
            Cardinality::One,
            ValueKind::Primitive(T::KIND),
            Box::new(codec),
        )
    }

    /// A single value defaulting to `None`.
    pub fn optional<T: Scalar>(
        self,
        name: &'static str,
        predicate: impl Into<IriSpec>,
        get: fn(&R) -> &Option<T>,
        get_mut: fn(&mut R) -> &mut Option<T>,
    ) -> Self {
        self.push(
            name,
            predicate.into(),
            Cardinality::One,
            ValueKind::Primitive(T::KIND),
            Box::new(OptionCodec { get, get_mut }),
        )
    }

    /// Any number of values, one triple each.
    pub fn many<T: Scalar>(
        self,
        name: &'static str,
        predicate: impl Into<IriSpec>,
        get: fn(&R) -> &Vec<T>,
        get_mut: fn(&mut R) -> &mut Vec<T>,
    ) -> Self {
        self.push(
            name,
            predicate.into(),
            Cardinality::Many,
            ValueKind::Primitive(T::KIND),
            Box::new(ManyCodec { get, get_mut }),
        )
    }

    /// Reject a record type nested directly inside itself.
    fn nested_ref<N: RdfRecord>(&mut self, field: &'static str) -> NestedRef {
        if TypeId::of::<N>() == TypeId::of::<R>() {
            self.errors.push(SchemaError::Cycle {
                path: format!("{name}.{field} -> {name}", name = self.name),
            });
        }
        NestedRef::of::<N>()
    }

    /// An optional nested record.
    pub fn nested<N: RdfRecord>(
        mut self,
        name: &'static str,
        predicate: impl Into<IriSpec>,
        get: fn(&R) -> &Option<N>,
        get_mut: fn(&mut R) -> &mut Option<N>,
    ) -> Self {
        let nested = self.nested_ref::<N>(name);
        self.push(
            name,
            predicate.into(),
            Cardinality::One,
            ValueKind::Nested(nested),
            Box::new(NestedOptionCodec { get, get_mut }),
        )
    }

    /// A nested record that is always present.
    pub fn nested_required<N: RdfRecord>(
        mut self,
        name: &'static str,
        predicate: impl Into<IriSpec>,
        get: fn(&R) -> &N,
        get_mut: fn(&mut R) -> &mut N,
    ) -> Self {
        let nested = self.nested_ref::<N>(name);
        self.push(
            name,
            predicate.into(),
            Cardinality::One,
            ValueKind::Nested(nested),
            Box::new(NestedRequiredCodec { get, get_mut }),
        )
    }

    /// A list of nested records.
    pub fn nested_many<N: RdfRecord>(
        mut self,
        name: &'static str,
        predicate: impl Into<IriSpec>,
        get: fn(&R) -> &Vec<N>,
        get_mut: fn(&mut R) -> &mut Vec<N>,
    ) -> Self {
        let nested = self.nested_ref::<N>(name);
        self.push(
            name,
            predicate.into(),
            Cardinality::Many,
            ValueKind::Nested(nested),
            Box::new(NestedManyCodec { get, get_mut }),
        )
    }

    /// Resolve every predicate and produce the descriptor.
    pub fn build(self) -> SchemaResult<Schema<R>> {
        let SchemaBuilder {
            name,
            pending,
            discriminator,
            secondary_type,
            label,
            mut errors,
        } = self;
        if !errors.is_empty() {
            return Err(errors.remove(0));
        }

        let mut seen = HashSet::new();
        let mut bindings = Vec::with_capacity(pending.len());
        for field in pending {
            if !seen.insert(field.name) {
                return Err(SchemaError::DuplicateField {
                    schema: name.to_string(),
                    field: field.name.to_string(),
                });
            }
            let predicate = field.predicate.resolve(name, field.name)?;
            bindings.push(FieldBinding::new(
                field.name,
                predicate,
                field.cardinality,
                field.kind,
                field.codec,
            ));
        }

        let discriminator = discriminator
            .map(|class| class.resolve(name, "rdf:type"))
            .transpose()?;
        let secondary_type = secondary_type
            .map(|class| class.resolve(name, "dc:type"))
            .transpose()?;

        Ok(Schema {
            name,
            record_type: TypeId::of::<R>(),
            bindings,
            discriminator,
            secondary_type,
            label,
            defaults: R::default(),
            validated: OnceLock::new(),
        })
    }
}
