//! # `jsonsieve` Core
//!
//! Post-query filtering engine for in-memory record collections.
//!
//! `jsonsieve` applies compact, query-parameter-friendly filter expressions
//! to records already fetched from a data source: parse the expression once,
//! compile it against the record type's shape, then select the matching
//! subset of any collection of that type.
//!
//! ## Features
//!
//! - **Compact grammar**: `Key1=val1,val2:composed.SubKey=val3:total>10`,
//!   with every token configurable
//! - **Four operators**: equal (`IN`), not-equal (`NOT IN`), strict
//!   greater-than and lower-than
//! - **Deep paths**: dotted keys traverse structs, maps, optionals, and
//!   arbitrarily nested sequences, fanning out to every leaf they denote
//! - **Alias-aware**: keys match a field's serialization alias or its
//!   declared name
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jsonsieve_core::{Field, Filter, Filterable, Shape};
//!
//! impl Filterable for Order {
//!     fn shape() -> Shape {
//!         Shape::record([
//!             Field::new("state", Shape::scalar()),
//!             Field::new("total", Shape::scalar()).renamed("amount"),
//!         ])
//!     }
//! }
//!
//! let mut filter = Filter::new();
//! filter.init::<Order>("state=open,held:amount>10.5")?;
//!
//! // `orders` came from the database; keep what the caller asked for.
//! let kept = filter.apply(&orders)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod compile;
pub mod condition;
pub mod error;
pub mod filter;
pub mod options;
mod parse;
#[cfg(test)]
mod parse_tests;
mod resolve;
#[cfg(test)]
mod resolve_tests;
pub mod schema;

pub use condition::{ConditionEntry, Operator};
pub use error::{Error, Result};
pub use filter::Filter;
pub use options::FilterOptions;
pub use schema::{Field, Filterable, Shape};
