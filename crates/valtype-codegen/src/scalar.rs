//! Scalar kinds: the leaf datatypes of every value type.
//!
//! Integer kinds cover the power-of-two widths the canonical table uses.
//! Non-numeric kinds are placeholders codegen needs for chains, glue,
//! untyped registers, tokens and metadata.

use serde::Serialize;
use valtype_core::FloatKind;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    I1,
    I8,
    I16,
    I32,
    I64,
    I128,
    F16,
    BF16,
    F32,
    F64,
    F80,
    F128,
    PpcF128,
    /// Chain/ordering placeholder.
    Other,
    /// Glue between nodes that must stay adjacent.
    Glue,
    /// Produces no value.
    IsVoid,
    /// Register class with no fixed type.
    Untyped,
    Token,
    Metadata,
}

impl ScalarKind {
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::I1 | Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::I128
        )
    }

    pub const fn is_floating_point(self) -> bool {
        matches!(
            self,
            Self::F16 | Self::BF16 | Self::F32 | Self::F64 | Self::F80 | Self::F128 | Self::PpcF128
        )
    }

    /// Integer or floating-point: kinds that may fill vector lanes.
    pub const fn is_numeric(self) -> bool {
        self.is_integer() || self.is_floating_point()
    }

    /// Bit width of numeric kinds.
    pub const fn bits(self) -> Option<u32> {
        match self {
            Self::I1 => Some(1),
            Self::I8 => Some(8),
            Self::I16 | Self::F16 | Self::BF16 => Some(16),
            Self::I32 | Self::F32 => Some(32),
            Self::I64 | Self::F64 => Some(64),
            Self::F80 => Some(80),
            Self::I128 | Self::F128 | Self::PpcF128 => Some(128),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::I1 => "i1",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::F16 => "f16",
            Self::BF16 => "bf16",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::F80 => "f80",
            Self::F128 => "f128",
            Self::PpcF128 => "ppcf128",
            Self::Other => "other",
            Self::Glue => "glue",
            Self::IsVoid => "isvoid",
            Self::Untyped => "untyped",
            Self::Token => "token",
            Self::Metadata => "metadata",
        }
    }

    /// Integer kind of exactly `bits` bits.
    pub const fn integer_of_width(bits: u32) -> Option<Self> {
        match bits {
            1 => Some(Self::I1),
            8 => Some(Self::I8),
            16 => Some(Self::I16),
            32 => Some(Self::I32),
            64 => Some(Self::I64),
            128 => Some(Self::I128),
            _ => None,
        }
    }

    /// Integer kind of twice the width.
    ///
    /// `None` for non-integers and where the doubled width has no kind
    /// (`i1` would become `i2`, `i128` would become `i256`).
    pub const fn wider_integer(self) -> Option<Self> {
        if !self.is_integer() {
            return None;
        }
        match self.bits() {
            Some(bits) => Self::integer_of_width(bits * 2),
            None => None,
        }
    }

    /// Integer kind of the same width. Integers map to themselves.
    ///
    /// `None` for non-numeric kinds and for `f80`, which has no 80-bit integer kind.
    pub const fn integer_equivalent(self) -> Option<Self> {
        if self.is_integer() {
            return Some(self);
        }
        if !self.is_floating_point() {
            return None;
        }
        match self.bits() {
            Some(bits) => Self::integer_of_width(bits),
            None => None,
        }
    }

    pub const fn from_float(kind: FloatKind) -> Self {
        match kind {
            FloatKind::Half => Self::F16,
            FloatKind::BFloat => Self::BF16,
            FloatKind::Single => Self::F32,
            FloatKind::Double => Self::F64,
            FloatKind::X86Fp80 => Self::F80,
            FloatKind::Quad => Self::F128,
            FloatKind::PpcDoubleDouble => Self::PpcF128,
        }
    }

    pub const fn float_kind(self) -> Option<FloatKind> {
        match self {
            Self::F16 => Some(FloatKind::Half),
            Self::BF16 => Some(FloatKind::BFloat),
            Self::F32 => Some(FloatKind::Single),
            Self::F64 => Some(FloatKind::Double),
            Self::F80 => Some(FloatKind::X86Fp80),
            Self::F128 => Some(FloatKind::Quad),
            Self::PpcF128 => Some(FloatKind::PpcDoubleDouble),
            _ => None,
        }
    }
}
