#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for valtype.
//!
//! Three layers:
//! - **Lane descriptors** (`ElementCount`): vector multiplicity, fixed or scalable
//! - **IR types** (`IrType`): the structural type representation used by mid-level IR
//! - **Type context** (`TypeContext`): per-compilation-unit arena that interns IR types
//!
//! Value types built on top of these (the canonical table and the extended
//! value type) live in `valtype-codegen`.

mod context;
mod error;
mod invariants;
mod ir;
mod lane;


pub use context::{IrTypeDisplay, IrTypeId, TypeContext};
pub use error::{LaneError, TypeError};
pub use ir::{FloatKind, IrType, MAX_INT_BITS};
pub use lane::{ElementCount, TypeSize};
