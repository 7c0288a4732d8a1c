//! Structural IR types.
//!
//! These are the types mid-level IR values carry. Vector types refer to their
//! element through an `IrTypeId`, so an `IrType` is only meaningful together
//! with the `TypeContext` that interned the element.

use serde::{Deserialize, Serialize};

use crate::{ElementCount, IrTypeId};

/// Largest integer width the IR accepts.
pub const MAX_INT_BITS: u32 = 1 << 24;

/// Floating-point formats.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum FloatKind {
    /// IEEE binary16.
    Half,
    /// Brain float (8-bit exponent, 7-bit mantissa).
    BFloat,
    /// IEEE binary32.
    Single,
    /// IEEE binary64.
    Double,
    /// x87 80-bit extended precision.
    X86Fp80,
    /// IEEE binary128.
    Quad,
    /// PowerPC pair-of-doubles.
    PpcDoubleDouble,
}

impl FloatKind {
    pub const ALL: [FloatKind; 7] = [
        Self::Half,
        Self::BFloat,
        Self::Single,
        Self::Double,
        Self::X86Fp80,
        Self::Quad,
        Self::PpcDoubleDouble,
    ];

    pub const fn bits(self) -> u32 {
        match self {
            Self::Half | Self::BFloat => 16,
            Self::Single => 32,
            Self::Double => 64,
            Self::X86Fp80 => 80,
            Self::Quad | Self::PpcDoubleDouble => 128,
        }
    }

    /// IR spelling (`half`, `float`, `double`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Half => "half",
            Self::BFloat => "bfloat",
            Self::Single => "float",
            Self::Double => "double",
            Self::X86Fp80 => "x86_fp80",
            Self::Quad => "fp128",
            Self::PpcDoubleDouble => "ppc_fp128",
        }
    }
}

/// A structural IR type.
///
/// Interned by `TypeContext`; two structurally equal types share one `IrTypeId`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum IrType {
    Void,
    Label,
    Metadata,
    Token,
    /// Arbitrary-width integer, `1..=MAX_INT_BITS` bits.
    Integer { bits: u32 },
    Float(FloatKind),
    /// Vector of integer or floating-point lanes.
    Vector {
        element: IrTypeId,
        count: ElementCount,
    },
}

impl IrType {
    pub fn is_integer(self) -> bool {
        matches!(self, Self::Integer { .. })
    }

    pub fn is_floating_point(self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Integer or floating-point: the types a vector may hold.
    pub fn is_first_class_scalar(self) -> bool {
        self.is_integer() || self.is_floating_point()
    }

    pub fn is_vector(self) -> bool {
        matches!(self, Self::Vector { .. })
    }

    pub fn is_scalable_vector(self) -> bool {
        matches!(self, Self::Vector { count, .. } if count.is_scalable())
    }

    pub fn integer_bits(self) -> Option<u32> {
        match self {
            Self::Integer { bits } => Some(bits),
            _ => None,
        }
    }

    pub fn float_kind(self) -> Option<FloatKind> {
        match self {
            Self::Float(kind) => Some(kind),
            _ => None,
        }
    }

    /// Bit width of a scalar integer or float; `None` for everything else.
    pub fn scalar_bits(self) -> Option<u32> {
        match self {
            Self::Integer { bits } => Some(bits),
            Self::Float(kind) => Some(kind.bits()),
            _ => None,
        }
    }

    pub fn element_count(self) -> Option<ElementCount> {
        match self {
            Self::Vector { count, .. } => Some(count),
            _ => None,
        }
    }
}
