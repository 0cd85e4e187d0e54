//! Record type descriptors.
//!
//! The compiler validates filter keys against the *shape* of the record type:
//! which fields exist, how they are renamed on the wire, and how containers
//! nest. [`Shape`] is that description, built once per record type — either by
//! hand with the constructor helpers or through the [`Filterable`] trait.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jsonsieve_core::schema::{Field, Filterable, Shape};
//!
//! struct Order {
//!     state: String,
//!     lines: Vec<Line>,
//! }
//!
//! impl Filterable for Order {
//!     fn shape() -> Shape {
//!         Shape::record([
//!             Field::new("state", Shape::scalar()),
//!             Field::new("lines", Shape::sequence(Line::shape())),
//!         ])
//!     }
//! }
//! ```

/// The shape of a record type, as seen by the filter compiler.
///
/// Mirrors what the serde data model can express for filterable records:
/// scalars, optionals, sequences (nested to any depth), string-keyed maps,
/// and structs with named fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A primitive leaf: string, number, or boolean.
    Scalar,
    /// An optional (`Option<T>` / nullable) wrapper.
    Optional(Box<Shape>),
    /// An ordered sequence of elements.
    Sequence(Box<Shape>),
    /// A string-keyed mapping. Filter keys address entries verbatim.
    Map(Box<Shape>),
    /// A struct with named fields.
    Record(Vec<Field>),
}

impl Shape {
    /// Creates a scalar shape.
    #[must_use]
    pub const fn scalar() -> Self {
        Self::Scalar
    }

    /// Creates an optional wrapper around `inner`.
    #[must_use]
    pub fn optional(inner: Shape) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Creates a sequence of `element` shapes.
    #[must_use]
    pub fn sequence(element: Shape) -> Self {
        Self::Sequence(Box::new(element))
    }

    /// Creates a string-keyed map with `value` shapes.
    #[must_use]
    pub fn map(value: Shape) -> Self {
        Self::Map(Box::new(value))
    }

    /// Creates a record shape from its fields.
    #[must_use]
    pub fn record<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        Self::Record(fields.into_iter().collect())
    }
}

/// A named field of a record shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    rename: Option<String>,
    shape: Shape,
}

impl Field {
    /// Creates a field from its declared name and shape.
    #[must_use]
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            rename: None,
            shape,
        }
    }

    /// Sets the serialization alias (the `#[serde(rename = ...)]` name).
    #[must_use]
    pub fn renamed(mut self, alias: impl Into<String>) -> Self {
        self.rename = Some(alias.into());
        self
    }

    /// The declared field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The serialization alias, if any.
    #[must_use]
    pub fn rename(&self) -> Option<&str> {
        self.rename.as_deref()
    }

    /// The field's shape.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The key under which this field appears in serialized records.
    #[must_use]
    pub fn wire_name(&self) -> &str {
        self.rename.as_deref().unwrap_or(&self.name)
    }
}

/// Types that can describe their own shape to the filter compiler.
///
/// The shape must agree with the type's serde serialization: a field carrying
/// `#[serde(rename = "key1")]` is declared as
/// `Field::new("Key1", ...).renamed("key1")`, so filter keys may use either
/// spelling.
pub trait Filterable {
    /// Returns the shape of this record type.
    fn shape() -> Shape;
}
