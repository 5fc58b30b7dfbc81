//! Field bindings and the typed codecs behind them.
//!
//! A [`FieldBinding`] is the public, inspectable part (name, predicate,
//! cardinality, value kind). The codec it owns knows the concrete field type
//! and moves values between a record and the graph.

use std::any::type_name;
use std::fmt;

use oxigraph::model::{NamedNode, NamedNodeRef};

use crate::coerce::{Scalar, ScalarKind};
use crate::error::{MappingError, MappingResult, SchemaResult};
use crate::graph::{Node, Object};
use crate::mapping::{Parser, Serializer};

use super::{RdfRecord, SchemaShape};

/// How many values a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    One,
    Many,
}

/// A lazily resolved reference to a nested record type's schema.
#[derive(Clone, Copy)]
pub struct NestedRef {
    type_name: &'static str,
    resolve: fn() -> SchemaResult<&'static dyn SchemaShape>,
}

fn shape_of<N: RdfRecord>() -> SchemaResult<&'static dyn SchemaShape> {
    let schema = N::schema()?;
    Ok(schema)
}

impl NestedRef {
    pub fn of<N: RdfRecord>() -> Self {
        Self {
            type_name: type_name::<N>(),
            resolve: shape_of::<N>,
        }
    }

    /// Rust type name of the nested record.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Build (or fetch) the nested schema.
    pub fn resolve(&self) -> SchemaResult<&'static dyn SchemaShape> {
        (self.resolve)()
    }
}

impl fmt::Debug for NestedRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NestedRef").field(&self.type_name).finish()
    }
}

/// What a field's values are.
#[derive(Debug, Clone, Copy)]
pub enum ValueKind {
    Primitive(ScalarKind),
    Nested(NestedRef),
}

/// One field of a record mapped to one predicate.
pub struct FieldBinding<R> {
    name: &'static str,
    predicate: NamedNode,
    cardinality: Cardinality,
    kind: ValueKind,
    codec: Box<dyn FieldCodec<R>>,
}

impl<R: RdfRecord> FieldBinding<R> {
    pub(super) fn new(
        name: &'static str,
        predicate: NamedNode,
        cardinality: Cardinality,
        kind: ValueKind,
        codec: Box<dyn FieldCodec<R>>,
    ) -> Self {
        Self {
            name,
            predicate,
            cardinality,
            kind,
            codec,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn predicate(&self) -> NamedNodeRef<'_> {
        self.predicate.as_ref()
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Emit this field's triples for `record`.
    pub(crate) fn write(
        &self,
        record: &R,
        defaults: &R,
        out: &mut Serializer<'_>,
    ) -> MappingResult<()> {
        self.codec.write(record, defaults, self.predicate(), out)
    }

    /// Whether writing this field for `record` emits nothing.
    pub(crate) fn is_unset(&self, record: &R, defaults: &R) -> bool {
        self.codec.is_unset(record, defaults)
    }

    /// Fill this field from the graph. Returns whether any triple matched.
    pub(crate) fn read(
        &self,
        record: &mut R,
        subject: &Node,
        input: &mut Parser<'_>,
    ) -> MappingResult<bool> {
        self.codec.read(record, subject, self.predicate(), input)
    }
}

impl<R> fmt::Debug for FieldBinding<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("name", &self.name)
            .field("predicate", &self.predicate)
            .field("cardinality", &self.cardinality)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Type-erased access to one field.
pub(crate) trait FieldCodec<R>: Send + Sync {
    fn write(
        &self,
        record: &R,
        defaults: &R,
        predicate: NamedNodeRef<'_>,
        out: &mut Serializer<'_>,
    ) -> MappingResult<()>;

    fn is_unset(&self, record: &R, defaults: &R) -> bool;

    fn read(
        &self,
        record: &mut R,
        subject: &Node,
        predicate: NamedNodeRef<'_>,
        input: &mut Parser<'_>,
    ) -> MappingResult<bool>;
}

/// First matching object for a `one` binding; extra candidates are logged
/// and ignored.
fn first_object<'a>(
    input: &Parser<'a>,
    subject: &Node,
    predicate: NamedNodeRef<'a>,
) -> Option<&'a Object> {
    let mut objects = input.graph().objects_for(subject, predicate);
    let first = objects.next()?;
    let ignored = objects.count();
    if ignored > 0 {
        tracing::warn!(
            %subject,
            %predicate,
            ignored,
            "single-valued field has several candidates, keeping the first"
        );
    }
    Some(first)
}

fn coerce<T: Scalar>(predicate: NamedNodeRef<'_>, object: &Object) -> MappingResult<T> {
    T::from_object(object).map_err(|failure| failure.at(predicate, object))
}

/// The node a nested link points at; a literal there is a type mismatch.
fn link_target<'o, N>(predicate: NamedNodeRef<'_>, object: &'o Object) -> MappingResult<&'o Node> {
    object.as_node().ok_or_else(|| MappingError::TypeMismatch {
        predicate: predicate.to_string(),
        value: object.to_string(),
        expected: format!("nested {}", short_type_name::<N>()),
    })
}

fn short_type_name<N>() -> &'static str {
    let full = type_name::<N>();
    full.rsplit("::").next().unwrap_or(full)
}

pub(crate) struct SingleCodec<R, T> {
    pub(crate) get: fn(&R) -> &T,
    pub(crate) get_mut: fn(&mut R) -> &mut T,
    pub(crate) suppress_default: bool,
}

impl<R: RdfRecord, T: Scalar> FieldCodec<R> for SingleCodec<R, T> {
    fn write(
        &self,
        record: &R,
        defaults: &R,
        predicate: NamedNodeRef<'_>,
        out: &mut Serializer<'_>,
    ) -> MappingResult<()> {
        let value = (self.get)(record);
        if self.suppress_default && value == (self.get)(defaults) {
            return Ok(());
        }
        out.emit(record.subject(), predicate, value.to_object());
        Ok(())
    }

    fn is_unset(&self, record: &R, defaults: &R) -> bool {
        self.suppress_default && (self.get)(record) == (self.get)(defaults)
    }

    fn read(
        &self,
        record: &mut R,
        subject: &Node,
        predicate: NamedNodeRef<'_>,
        input: &mut Parser<'_>,
    ) -> MappingResult<bool> {
        let Some(object) = first_object(input, subject, predicate) else {
            return Ok(false);
        };
        *(self.get_mut)(record) = coerce(predicate, object)?;
        Ok(true)
    }
}

pub(crate) struct OptionCodec<R, T> {
    pub(crate) get: fn(&R) -> &Option<T>,
    pub(crate) get_mut: fn(&mut R) -> &mut Option<T>,
}

impl<R: RdfRecord, T: Scalar> FieldCodec<R> for OptionCodec<R, T> {
    fn write(
        &self,
        record: &R,
        defaults: &R,
        predicate: NamedNodeRef<'_>,
        out: &mut Serializer<'_>,
    ) -> MappingResult<()> {
        let value = (self.get)(record);
        if value == (self.get)(defaults) {
            return Ok(());
        }
        if let Some(value) = value {
            out.emit(record.subject(), predicate, value.to_object());
        }
        Ok(())
    }

    fn is_unset(&self, record: &R, defaults: &R) -> bool {
        let value = (self.get)(record);
        value.is_none() || value == (self.get)(defaults)
    }

    fn read(
        &self,
        record: &mut R,
        subject: &Node,
        predicate: NamedNodeRef<'_>,
        input: &mut Parser<'_>,
    ) -> MappingResult<bool> {
        let Some(object) = first_object(input, subject, predicate) else {
            return Ok(false);
        };
        *(self.get_mut)(record) = Some(coerce(predicate, object)?);
        Ok(true)
    }
}

pub(crate) struct ManyCodec<R, T> {
    pub(crate) get: fn(&R) -> &Vec<T>,
    pub(crate) get_mut: fn(&mut R) -> &mut Vec<T>,
}

impl<R: RdfRecord, T: Scalar> FieldCodec<R> for ManyCodec<R, T> {
    fn write(
        &self,
        record: &R,
        _defaults: &R,
        predicate: NamedNodeRef<'_>,
        out: &mut Serializer<'_>,
    ) -> MappingResult<()> {
        for value in (self.get)(record) {
            out.emit(record.subject(), predicate, value.to_object());
        }
        Ok(())
    }

    fn is_unset(&self, record: &R, _defaults: &R) -> bool {
        (self.get)(record).is_empty()
    }

    fn read(
        &self,
        record: &mut R,
        subject: &Node,
        predicate: NamedNodeRef<'_>,
        input: &mut Parser<'_>,
    ) -> MappingResult<bool> {
        let values = input
            .graph()
            .objects_for(subject, predicate)
            .map(|object| coerce(predicate, object))
            .collect::<MappingResult<Vec<T>>>()?;
        let matched = !values.is_empty();
        *(self.get_mut)(record) = values;
        Ok(matched)
    }
}

pub(crate) struct NestedOptionCodec<R, N> {
    pub(crate) get: fn(&R) -> &Option<N>,
    pub(crate) get_mut: fn(&mut R) -> &mut Option<N>,
}

impl<R: RdfRecord, N: RdfRecord> FieldCodec<R> for NestedOptionCodec<R, N> {
    fn write(
        &self,
        record: &R,
        _defaults: &R,
        predicate: NamedNodeRef<'_>,
        out: &mut Serializer<'_>,
    ) -> MappingResult<()> {
        match (self.get)(record) {
            // A nested record with no content of its own reads back as `None`.
            Some(nested) if !N::schema()?.is_blank(nested) => {
                out.link(record.subject(), predicate, nested)
            }
            _ => Ok(()),
        }
    }

    fn is_unset(&self, record: &R, _defaults: &R) -> bool {
        match (self.get)(record) {
            Some(nested) => N::schema().is_ok_and(|schema| schema.is_blank(nested)),
            None => true,
        }
    }

    fn read(
        &self,
        record: &mut R,
        subject: &Node,
        predicate: NamedNodeRef<'_>,
        input: &mut Parser<'_>,
    ) -> MappingResult<bool> {
        let Some(object) = first_object(input, subject, predicate) else {
            return Ok(false);
        };
        let node = link_target::<N>(predicate, object)?;
        // A nested record with nothing in it falls back to the default.
        let Some(nested) = input.record::<N>(node)? else {
            return Ok(false);
        };
        *(self.get_mut)(record) = Some(nested);
        Ok(true)
    }
}

pub(crate) struct NestedRequiredCodec<R, N> {
    pub(crate) get: fn(&R) -> &N,
    pub(crate) get_mut: fn(&mut R) -> &mut N,
}

impl<R: RdfRecord, N: RdfRecord> FieldCodec<R> for NestedRequiredCodec<R, N> {
    fn write(
        &self,
        record: &R,
        _defaults: &R,
        predicate: NamedNodeRef<'_>,
        out: &mut Serializer<'_>,
    ) -> MappingResult<()> {
        out.link(record.subject(), predicate, (self.get)(record))
    }

    fn is_unset(&self, _record: &R, _defaults: &R) -> bool {
        false
    }

    fn read(
        &self,
        record: &mut R,
        subject: &Node,
        predicate: NamedNodeRef<'_>,
        input: &mut Parser<'_>,
    ) -> MappingResult<bool> {
        let Some(object) = first_object(input, subject, predicate) else {
            return Ok(false);
        };
        let node = link_target::<N>(predicate, object)?;
        // An empty target still keeps the linked node as its identity.
        let nested = match input.record::<N>(node)? {
            Some(nested) => nested,
            None => {
                let mut nested = N::default();
                *nested.subject_mut() = node.clone();
                nested
            }
        };
        *(self.get_mut)(record) = nested;
        Ok(true)
    }
}

pub(crate) struct NestedManyCodec<R, N> {
    pub(crate) get: fn(&R) -> &Vec<N>,
    pub(crate) get_mut: fn(&mut R) -> &mut Vec<N>,
}

impl<R: RdfRecord, N: RdfRecord> FieldCodec<R> for NestedManyCodec<R, N> {
    fn write(
        &self,
        record: &R,
        _defaults: &R,
        predicate: NamedNodeRef<'_>,
        out: &mut Serializer<'_>,
    ) -> MappingResult<()> {
        for nested in (self.get)(record) {
            out.link(record.subject(), predicate, nested)?;
        }
        Ok(())
    }

    fn is_unset(&self, record: &R, _defaults: &R) -> bool {
        (self.get)(record).is_empty()
    }

    fn read(
        &self,
        record: &mut R,
        subject: &Node,
        predicate: NamedNodeRef<'_>,
        input: &mut Parser<'_>,
    ) -> MappingResult<bool> {
        let graph = input.graph();
        let mut children = Vec::new();
        for object in graph.objects_for(subject, predicate) {
            let node = link_target::<N>(predicate, object)?;
            // Empty children stay as placeholders bound to their node.
            let child = match input.record::<N>(node)? {
                Some(child) => child,
                None => {
                    let mut placeholder = N::default();
                    *placeholder.subject_mut() = node.clone();
                    placeholder
                }
            };
            children.push(child);
        }
        let matched = !children.is_empty();
        *(self.get_mut)(record) = children;
        Ok(matched)
    }
}
