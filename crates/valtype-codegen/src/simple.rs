//! The canonical value type table.
//!
//! Every value type codegen dispatches on is an entry of one `const` table.
//! An `Mvt` is an index into that table, so comparing, hashing and copying
//! value types are single-byte operations. The table is closed: types outside
//! it are represented by `Evt` instead.

use std::fmt;

use valtype_core::{ElementCount, TypeSize};

use crate::scalar::ScalarKind as K;
use crate::{Result, ScalarKind, ValueTypeError};

/// Structure of a table entry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Shape {
    /// The invalid sentinel at index 0.
    Invalid,
    Scalar(ScalarKind),
    Vector(ScalarKind, ElementCount),
}

impl Shape {
    pub fn scalar_kind(self) -> Option<ScalarKind> {
        match self {
            Self::Invalid => None,
            Self::Scalar(kind) | Self::Vector(kind, _) => Some(kind),
        }
    }

    pub fn element_count(self) -> Option<ElementCount> {
        match self {
            Self::Vector(_, count) => Some(count),
            _ => None,
        }
    }
}

struct Entry {
    name: &'static str,
    shape: Shape,
}

const fn scalar(kind: ScalarKind) -> Shape {
    Shape::Scalar(kind)
}

const fn fixed(kind: ScalarKind, min: u32) -> Shape {
    Shape::Vector(kind, ElementCount::fixed(min))
}

const fn scalable(kind: ScalarKind, min: u32) -> Shape {
    Shape::Vector(kind, ElementCount::scalable(min))
}

/// Machine value type: a member of the canonical table.
///
/// Constructed only through the named constants, lookups, and sequences,
/// so every `Mvt` indexes a real entry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Mvt(u8);

/// Declares the table and one named constant per entry.
///
/// Indices are written out so a reader can map a raw index back to its entry;
/// the const block below rejects any gap or reordering at compile time.
macro_rules! value_types {
    ($($index:literal $konst:ident $name:literal => $shape:expr,)*) => {
        impl Mvt {
            $(pub const $konst: Mvt = Mvt($index);)*
        }

        const TABLE: &[Entry] = &[$(Entry { name: $name, shape: $shape },)*];

        const _: () = {
            let mut position: usize = 0;
            $(
                assert!($index == position, "value type table indices must be sequential");
                position += 1;
            )*
            assert!(position == TABLE.len() && position <= 256);
        };
    };
}

value_types! {
    0   INVALID  "invalid"  => Shape::Invalid,
    1   I1       "i1"       => scalar(K::I1),
    2   I8       "i8"       => scalar(K::I8),
    3   I16      "i16"      => scalar(K::I16),
    4   I32      "i32"      => scalar(K::I32),
    5   I64      "i64"      => scalar(K::I64),
    6   I128     "i128"     => scalar(K::I128),
    7   F16      "f16"      => scalar(K::F16),
    8   BF16     "bf16"     => scalar(K::BF16),
    9   F32      "f32"      => scalar(K::F32),
    10  F64      "f64"      => scalar(K::F64),
    11  F80      "f80"      => scalar(K::F80),
    12  F128     "f128"     => scalar(K::F128),
    13  PPCF128  "ppcf128"  => scalar(K::PpcF128),
    14  OTHER    "other"    => scalar(K::Other),
    15  GLUE     "glue"     => scalar(K::Glue),
    16  IS_VOID  "isvoid"   => scalar(K::IsVoid),
    17  UNTYPED  "untyped"  => scalar(K::Untyped),
    18  TOKEN    "token"    => scalar(K::Token),
    19  METADATA "metadata" => scalar(K::Metadata),
    20  V1I1     "v1i1"     => fixed(K::I1, 1),
    21  V2I1     "v2i1"     => fixed(K::I1, 2),
    22  V4I1     "v4i1"     => fixed(K::I1, 4),
    23  V8I1     "v8i1"     => fixed(K::I1, 8),
    24  V16I1    "v16i1"    => fixed(K::I1, 16),
    25  V32I1    "v32i1"    => fixed(K::I1, 32),
    26  V64I1    "v64i1"    => fixed(K::I1, 64),
    27  V128I1   "v128i1"   => fixed(K::I1, 128),
    28  V256I1   "v256i1"   => fixed(K::I1, 256),
    29  V512I1   "v512i1"   => fixed(K::I1, 512),
    30  V1024I1  "v1024i1"  => fixed(K::I1, 1024),
    31  V1I8     "v1i8"     => fixed(K::I8, 1),
    32  V2I8     "v2i8"     => fixed(K::I8, 2),
    33  V4I8     "v4i8"     => fixed(K::I8, 4),
    34  V8I8     "v8i8"     => fixed(K::I8, 8),
    35  V16I8    "v16i8"    => fixed(K::I8, 16),
    36  V32I8    "v32i8"    => fixed(K::I8, 32),
    37  V64I8    "v64i8"    => fixed(K::I8, 64),
    38  V128I8   "v128i8"   => fixed(K::I8, 128),
    39  V256I8   "v256i8"   => fixed(K::I8, 256),
    40  V1I16    "v1i16"    => fixed(K::I16, 1),
    41  V2I16    "v2i16"    => fixed(K::I16, 2),
    42  V4I16    "v4i16"    => fixed(K::I16, 4),
    43  V8I16    "v8i16"    => fixed(K::I16, 8),
    44  V16I16   "v16i16"   => fixed(K::I16, 16),
    45  V32I16   "v32i16"   => fixed(K::I16, 32),
    46  V64I16   "v64i16"   => fixed(K::I16, 64),
    47  V128I16  "v128i16"  => fixed(K::I16, 128),
    48  V1I32    "v1i32"    => fixed(K::I32, 1),
    49  V2I32    "v2i32"    => fixed(K::I32, 2),
    50  V3I32    "v3i32"    => fixed(K::I32, 3),
    51  V4I32    "v4i32"    => fixed(K::I32, 4),
    52  V5I32    "v5i32"    => fixed(K::I32, 5),
    53  V8I32    "v8i32"    => fixed(K::I32, 8),
    54  V16I32   "v16i32"   => fixed(K::I32, 16),
    55  V32I32   "v32i32"   => fixed(K::I32, 32),
    56  V64I32   "v64i32"   => fixed(K::I32, 64),
    57  V128I32  "v128i32"  => fixed(K::I32, 128),
    58  V256I32  "v256i32"  => fixed(K::I32, 256),
    59  V512I32  "v512i32"  => fixed(K::I32, 512),
    60  V1024I32 "v1024i32" => fixed(K::I32, 1024),
    61  V2048I32 "v2048i32" => fixed(K::I32, 2048),
    62  V1I64    "v1i64"    => fixed(K::I64, 1),
    63  V2I64    "v2i64"    => fixed(K::I64, 2),
    64  V4I64    "v4i64"    => fixed(K::I64, 4),
    65  V8I64    "v8i64"    => fixed(K::I64, 8),
    66  V16I64   "v16i64"   => fixed(K::I64, 16),
    67  V32I64   "v32i64"   => fixed(K::I64, 32),
    68  V1I128   "v1i128"   => fixed(K::I128, 1),
    69  V2F16    "v2f16"    => fixed(K::F16, 2),
    70  V4F16    "v4f16"    => fixed(K::F16, 4),
    71  V8F16    "v8f16"    => fixed(K::F16, 8),
    72  V16F16   "v16f16"   => fixed(K::F16, 16),
    73  V32F16   "v32f16"   => fixed(K::F16, 32),
    74  V1F32    "v1f32"    => fixed(K::F32, 1),
    75  V2F32    "v2f32"    => fixed(K::F32, 2),
    76  V3F32    "v3f32"    => fixed(K::F32, 3),
    77  V4F32    "v4f32"    => fixed(K::F32, 4),
    78  V5F32    "v5f32"    => fixed(K::F32, 5),
    79  V8F32    "v8f32"    => fixed(K::F32, 8),
    80  V16F32   "v16f32"   => fixed(K::F32, 16),
    81  V32F32   "v32f32"   => fixed(K::F32, 32),
    82  V64F32   "v64f32"   => fixed(K::F32, 64),
    83  V128F32  "v128f32"  => fixed(K::F32, 128),
    84  V256F32  "v256f32"  => fixed(K::F32, 256),
    85  V512F32  "v512f32"  => fixed(K::F32, 512),
    86  V1024F32 "v1024f32" => fixed(K::F32, 1024),
    87  V2048F32 "v2048f32" => fixed(K::F32, 2048),
    88  V1F64    "v1f64"    => fixed(K::F64, 1),
    89  V2F64    "v2f64"    => fixed(K::F64, 2),
    90  V4F64    "v4f64"    => fixed(K::F64, 4),
    91  V8F64    "v8f64"    => fixed(K::F64, 8),
    92  V16F64   "v16f64"   => fixed(K::F64, 16),
    93  V32F64   "v32f64"   => fixed(K::F64, 32),
    94  NXV1I1   "nxv1i1"   => scalable(K::I1, 1),
    95  NXV2I1   "nxv2i1"   => scalable(K::I1, 2),
    96  NXV4I1   "nxv4i1"   => scalable(K::I1, 4),
    97  NXV8I1   "nxv8i1"   => scalable(K::I1, 8),
    98  NXV16I1  "nxv16i1"  => scalable(K::I1, 16),
    99  NXV32I1  "nxv32i1"  => scalable(K::I1, 32),
    100 NXV64I1  "nxv64i1"  => scalable(K::I1, 64),
    101 NXV1I8   "nxv1i8"   => scalable(K::I8, 1),
    102 NXV2I8   "nxv2i8"   => scalable(K::I8, 2),
    103 NXV4I8   "nxv4i8"   => scalable(K::I8, 4),
    104 NXV8I8   "nxv8i8"   => scalable(K::I8, 8),
    105 NXV16I8  "nxv16i8"  => scalable(K::I8, 16),
    106 NXV32I8  "nxv32i8"  => scalable(K::I8, 32),
    107 NXV64I8  "nxv64i8"  => scalable(K::I8, 64),
    108 NXV1I16  "nxv1i16"  => scalable(K::I16, 1),
    109 NXV2I16  "nxv2i16"  => scalable(K::I16, 2),
    110 NXV4I16  "nxv4i16"  => scalable(K::I16, 4),
    111 NXV8I16  "nxv8i16"  => scalable(K::I16, 8),
    112 NXV16I16 "nxv16i16" => scalable(K::I16, 16),
    113 NXV32I16 "nxv32i16" => scalable(K::I16, 32),
    114 NXV1I32  "nxv1i32"  => scalable(K::I32, 1),
    115 NXV2I32  "nxv2i32"  => scalable(K::I32, 2),
    116 NXV4I32  "nxv4i32"  => scalable(K::I32, 4),
    117 NXV8I32  "nxv8i32"  => scalable(K::I32, 8),
    118 NXV16I32 "nxv16i32" => scalable(K::I32, 16),
    119 NXV32I32 "nxv32i32" => scalable(K::I32, 32),
    120 NXV1I64  "nxv1i64"  => scalable(K::I64, 1),
    121 NXV2I64  "nxv2i64"  => scalable(K::I64, 2),
    122 NXV4I64  "nxv4i64"  => scalable(K::I64, 4),
    123 NXV8I64  "nxv8i64"  => scalable(K::I64, 8),
    124 NXV16I64 "nxv16i64" => scalable(K::I64, 16),
    125 NXV32I64 "nxv32i64" => scalable(K::I64, 32),
    126 NXV1F16  "nxv1f16"  => scalable(K::F16, 1),
    127 NXV2F16  "nxv2f16"  => scalable(K::F16, 2),
    128 NXV4F16  "nxv4f16"  => scalable(K::F16, 4),
    129 NXV8F16  "nxv8f16"  => scalable(K::F16, 8),
    130 NXV16F16 "nxv16f16" => scalable(K::F16, 16),
    131 NXV32F16 "nxv32f16" => scalable(K::F16, 32),
    132 NXV1BF16 "nxv1bf16" => scalable(K::BF16, 1),
    133 NXV2BF16 "nxv2bf16" => scalable(K::BF16, 2),
    134 NXV4BF16 "nxv4bf16" => scalable(K::BF16, 4),
    135 NXV8BF16 "nxv8bf16" => scalable(K::BF16, 8),
    136 NXV1F32  "nxv1f32"  => scalable(K::F32, 1),
    137 NXV2F32  "nxv2f32"  => scalable(K::F32, 2),
    138 NXV4F32  "nxv4f32"  => scalable(K::F32, 4),
    139 NXV8F32  "nxv8f32"  => scalable(K::F32, 8),
    140 NXV16F32 "nxv16f32" => scalable(K::F32, 16),
    141 NXV1F64  "nxv1f64"  => scalable(K::F64, 1),
    142 NXV2F64  "nxv2f64"  => scalable(K::F64, 2),
    143 NXV4F64  "nxv4f64"  => scalable(K::F64, 4),
    144 NXV8F64  "nxv8f64"  => scalable(K::F64, 8),
}

/// Name of a vector value type: `v8i32`, `nxv4f64`.
pub(crate) fn vector_name(count: ElementCount, element: &str) -> String {
    let prefix = if count.is_scalable() { "nxv" } else { "v" };
    format!("{prefix}{}{element}", count.min())
}

impl Mvt {
    /// Raw table index.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    pub fn from_index(index: u8) -> Option<Self> {
        ((index as usize) < TABLE.len()).then_some(Self(index))
    }

    #[inline]
    fn entry(self) -> &'static Entry {
        &TABLE[self.0 as usize]
    }

    /// Short name (`i32`, `v8i32`, `nxv4i32`).
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn shape(self) -> Shape {
        self.entry().shape
    }

    /// Table entry with exactly this shape.
    pub fn find(shape: Shape) -> Option<Self> {
        if shape == Shape::Invalid {
            return None;
        }
        Self::all().find(|vt| vt.shape() == shape)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().find(|vt| vt.name() == name)
    }

    /// The scalar entry for a kind. Every kind has one.
    pub fn scalar(kind: ScalarKind) -> Self {
        Self::ensure_scalar(kind)
    }

    /// Integer scalar of exactly `bits` bits, if the table has one.
    pub fn integer(bits: u32) -> Option<Self> {
        ScalarKind::integer_of_width(bits).map(Self::scalar)
    }

    /// Vector of `count` lanes of the scalar `element`, if the table has one.
    ///
    /// `count` is an `ElementCount` or a `(min, scalable)` pair; both spellings
    /// find the same entry.
    pub fn vector(element: Mvt, count: impl Into<ElementCount>) -> Option<Self> {
        match element.shape() {
            Shape::Scalar(kind) => Self::find(Shape::Vector(kind, count.into())),
            _ => None,
        }
    }

    pub fn is_valid(self) -> bool {
        self.shape() != Shape::Invalid
    }

    pub fn scalar_kind(self) -> Option<ScalarKind> {
        self.shape().scalar_kind()
    }

    /// Integer scalar or integer vector.
    pub fn is_integer(self) -> bool {
        self.scalar_kind().is_some_and(ScalarKind::is_integer)
    }

    /// Floating-point scalar or floating-point vector.
    pub fn is_floating_point(self) -> bool {
        self.scalar_kind().is_some_and(ScalarKind::is_floating_point)
    }

    pub fn is_vector(self) -> bool {
        matches!(self.shape(), Shape::Vector(..))
    }

    /// A vector whose lane count is a multiple of `vscale`.
    pub fn is_scalable_vector(self) -> bool {
        matches!(self.shape(), Shape::Vector(_, count) if count.is_scalable())
    }

    pub fn is_fixed_length_vector(self) -> bool {
        matches!(self.shape(), Shape::Vector(_, count) if count.is_fixed())
    }

    /// The element type of a vector, the type itself otherwise.
    pub fn scalar_type(self) -> Self {
        match self.shape() {
            Shape::Vector(kind, _) => Self::scalar(kind),
            _ => self,
        }
    }

    pub fn vector_element_type(self) -> Result<Self> {
        let (kind, _) = self.vector_parts()?;
        Ok(Self::scalar(kind))
    }

    pub fn vector_element_count(self) -> Result<ElementCount> {
        let (_, count) = self.vector_parts()?;
        Ok(count)
    }

    /// Minimum lane count (exact for fixed vectors).
    pub fn vector_num_elements(self) -> Result<u32> {
        Ok(self.vector_element_count()?.min())
    }

    pub fn scalar_size_in_bits(self) -> Option<u32> {
        self.scalar_kind()?.bits()
    }

    pub fn size_in_bits(self) -> Option<TypeSize> {
        match self.shape() {
            Shape::Invalid => None,
            Shape::Scalar(kind) => kind.bits().map(|bits| TypeSize::fixed(bits as u64)),
            Shape::Vector(kind, count) => kind.bits().map(|bits| TypeSize::of_lanes(bits, count)),
        }
    }

    /// Same lanes, elements of twice the integer width.
    ///
    /// Fails on non-integer vectors and when the result is not in the table.
    pub fn widen_integer_element(self) -> Result<Self> {
        let (kind, count) = self.vector_parts()?;
        if !kind.is_integer() {
            return Err(ValueTypeError::NotIntegerVector(self.name().to_string()));
        }
        let wider = kind
            .wider_integer()
            .ok_or_else(|| ValueTypeError::NoWiderInteger(self.name().to_string()))?;
        Self::lookup_vector(wider, count)
    }

    /// Same element, half the lanes. The lane count must be even.
    pub fn half_lanes(self) -> Result<Self> {
        let (kind, count) = self.vector_parts()?;
        Self::lookup_vector(kind, count.halve()?)
    }

    /// Same lanes, elements replaced by the integer kind of equal width.
    pub fn to_integer(self) -> Result<Self> {
        let (kind, count) = self.vector_parts()?;
        let integer = kind
            .integer_equivalent()
            .ok_or_else(|| ValueTypeError::NoIntegerEquivalent(self.name().to_string()))?;
        Self::lookup_vector(integer, count)
    }

    /// Same element (the scalar itself for scalars), new lane descriptor.
    pub fn with_element_count(self, count: impl Into<ElementCount>) -> Result<Self> {
        let kind = self.scalar_kind().ok_or(ValueTypeError::Invalid)?;
        Self::lookup_vector(kind, count.into())
    }

    fn vector_parts(self) -> Result<(ScalarKind, ElementCount)> {
        match self.shape() {
            Shape::Vector(kind, count) => Ok((kind, count)),
            Shape::Invalid => Err(ValueTypeError::Invalid),
            Shape::Scalar(_) => Err(ValueTypeError::NotVector(self.name().to_string())),
        }
    }

    fn lookup_vector(kind: ScalarKind, count: ElementCount) -> Result<Self> {
        Self::find(Shape::Vector(kind, count))
            .ok_or_else(|| ValueTypeError::NotSimple(vector_name(count, kind.name())))
    }
}

// ============================================================================
// Sequences
// ============================================================================

/// Each sequence is lazy and finite. Calling the function again walks the
/// same entries in the same (table) order.
impl Mvt {
    /// Every valid entry.
    pub fn all() -> impl Iterator<Item = Mvt> + Clone {
        (1..TABLE.len()).map(|index| Mvt(index as u8))
    }

    /// Scalar integers.
    pub fn integer_valuetypes() -> impl Iterator<Item = Mvt> + Clone {
        Self::all().filter(|vt| vt.is_integer() && !vt.is_vector())
    }

    /// Scalar floating-point types.
    pub fn fp_valuetypes() -> impl Iterator<Item = Mvt> + Clone {
        Self::all().filter(|vt| vt.is_floating_point() && !vt.is_vector())
    }

    pub fn vector_valuetypes() -> impl Iterator<Item = Mvt> + Clone {
        Self::all().filter(|vt| vt.is_vector())
    }

    pub fn fixed_vector_valuetypes() -> impl Iterator<Item = Mvt> + Clone {
        Self::all().filter(|vt| vt.is_fixed_length_vector())
    }

    pub fn scalable_vector_valuetypes() -> impl Iterator<Item = Mvt> + Clone {
        Self::all().filter(|vt| vt.is_scalable_vector())
    }

    pub fn integer_fixed_vector_valuetypes() -> impl Iterator<Item = Mvt> + Clone {
        Self::all().filter(|vt| vt.is_fixed_length_vector() && vt.is_integer())
    }

    pub fn fp_fixed_vector_valuetypes() -> impl Iterator<Item = Mvt> + Clone {
        Self::all().filter(|vt| vt.is_fixed_length_vector() && vt.is_floating_point())
    }

    pub fn integer_scalable_vector_valuetypes() -> impl Iterator<Item = Mvt> + Clone {
        Self::all().filter(|vt| vt.is_scalable_vector() && vt.is_integer())
    }

    pub fn fp_scalable_vector_valuetypes() -> impl Iterator<Item = Mvt> + Clone {
        Self::all().filter(|vt| vt.is_scalable_vector() && vt.is_floating_point())
    }
}

impl fmt::Display for Mvt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
