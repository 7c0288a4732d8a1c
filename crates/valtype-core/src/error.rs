//! Errors raised by lane arithmetic and type interning.

use crate::ElementCount;
use crate::ir::MAX_INT_BITS;

/// Lane-count arithmetic that has no exact answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LaneError {
    /// Scaling or dividing by zero.
    #[error("lane count factor must be positive")]
    ZeroFactor,

    #[error("lane count {min} overflows when scaled by {factor}")]
    Overflow { min: u32, factor: u32 },

    /// The minimum lane count is not a multiple of the divisor.
    #[error("{count} lanes cannot be divided evenly by {divisor}")]
    InexactDivision { count: ElementCount, divisor: u32 },
}

/// Structurally invalid IR type requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    #[error("integer width {bits} is out of range (1..={MAX_INT_BITS})")]
    InvalidIntegerWidth { bits: u32 },

    /// Vectors hold integers or floating-point values only.
    #[error("`{element}` is not a valid vector element type")]
    InvalidElementType { element: String },

    #[error("vector types need at least one lane")]
    ZeroLanes,

    /// A handle from another context (or a fabricated one).
    #[error("type id {0} does not belong to this context")]
    UnknownType(u32),
}
