//! Errors for value-type queries, derivations, and IR translation.

use valtype_core::{LaneError, TypeError};

/// Contract violations of value-type operations.
///
/// Each variant names the offending type so the driver can report it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueTypeError {
    /// The invalid sentinel was used where a real type was required.
    #[error("invalid value type")]
    Invalid,

    /// A vector-only operation was applied to a non-vector.
    #[error("`{0}` is not a vector type")]
    NotVector(String),

    #[error("`{0}` is not an integer vector type")]
    NotIntegerVector(String),

    /// Element conversion to integer needs a numeric element.
    #[error("`{0}` has no integer counterpart")]
    NoIntegerEquivalent(String),

    #[error("`{0}` has no wider integer element type")]
    NoWiderInteger(String),

    /// The type exists structurally but not in the canonical table.
    #[error("`{0}` is not in the canonical value type table")]
    NotSimple(String),

    /// Element types must be integer or floating-point scalars.
    #[error("`{0}` cannot be a vector element")]
    InvalidElement(String),

    /// Placeholder kinds (`other`, `glue`, `untyped`) have no IR type.
    #[error("`{0}` has no IR type")]
    NoIrType(String),

    #[error("IR type `{0}` has no value type")]
    NoValueType(String),

    #[error("unknown value type name `{0}`")]
    UnknownName(String),

    #[error(transparent)]
    Lanes(#[from] LaneError),

    #[error(transparent)]
    Type(#[from] TypeError),
}

/// Result type for value-type operations.
pub type Result<T> = std::result::Result<T, ValueTypeError>;
