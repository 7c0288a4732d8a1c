//! Value types for code generation.
//!
//! This crate contains:
//! - Scalar kinds (`ScalarKind`): the leaf datatypes value types are built from
//! - The canonical table (`Mvt`): a closed, statically enumerated set of
//!   scalar and vector value types, including scalable vectors
//! - Extended value types (`Evt`): the canonical table plus any structural
//!   type interned in a `TypeContext`
//! - The IR type bridge: exact translation between value types and IR types
//! - Human-readable dumps and JSON summaries

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod bridge;
pub mod dump;
pub mod extended;
pub mod name;
pub mod scalar;
pub mod simple;

mod error;
mod invariants;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod scalar_tests;
#[cfg(test)]
mod simple_tests;

pub use bridge::{to_ir_type, to_value_type};
pub use dump::{Colors, TypeSummary, dump_table};
pub use error::{Result, ValueTypeError};
pub use extended::{Evt, ExtendedType};
pub use name::parse_value_type;
pub use scalar::ScalarKind;
pub use simple::{Mvt, Shape};

// Re-export the core types every caller of this crate needs.
pub use valtype_core::{ElementCount, FloatKind, IrType, IrTypeId, TypeContext, TypeSize};
