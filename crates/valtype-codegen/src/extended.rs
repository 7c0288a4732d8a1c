//! Extended value types.
//!
//! `Evt` covers the canonical table plus every structural type the IR can
//! express (odd integer widths, lane counts the table lacks). Canonical types
//! are always held in the `Simple` form: constructing a type that exists in
//! the table never interns anything, so equality stays a one-byte comparison
//! for the common case and never needs a deep structural walk.
//!
//! The `Extended` form borrows the `TypeContext` that interned it. The borrow
//! checker therefore rejects any use of an extended type after its context is
//! dropped.

use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::trace;
use valtype_core::{ElementCount, FloatKind, IrType, IrTypeId, TypeContext, TypeSize};

use crate::simple::vector_name;
use crate::{Mvt, Result, ScalarKind, ValueTypeError};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Evt<'ctx> {
    /// Member of the canonical table.
    Simple(Mvt),
    /// Structural type outside the table, interned in a context.
    Extended(ExtendedType<'ctx>),
}

/// Non-owning reference to a type interned in a `TypeContext`.
///
/// Only created for types the canonical table does not contain.
#[derive(Clone, Copy)]
pub struct ExtendedType<'ctx> {
    ctx: &'ctx TypeContext,
    id: IrTypeId,
}

impl<'ctx> ExtendedType<'ctx> {
    pub(crate) fn new(ctx: &'ctx TypeContext, id: IrTypeId) -> Self {
        Self { ctx, id }
    }

    pub fn context(&self) -> &'ctx TypeContext {
        self.ctx
    }

    pub fn id(&self) -> IrTypeId {
        self.id
    }

    pub fn ir_type(&self) -> IrType {
        self.ctx.get(self.id)
    }

    /// The element IR type of a vector, the type itself otherwise.
    fn scalar_ir_type(&self) -> IrType {
        match self.ir_type() {
            IrType::Vector { element, .. } => self.ctx.get(element),
            ty => ty,
        }
    }

    pub fn name(&self) -> String {
        match self.ir_type() {
            IrType::Integer { bits } => format!("i{bits}"),
            IrType::Vector { element, count } => {
                let element = Evt::canonical(self.ctx, element);
                vector_name(count, &element.to_string())
            }
            _ => self.ctx.display(self.id).to_string(),
        }
    }
}

/// Same context and same handle. The context interns, so this is structural equality.
impl PartialEq for ExtendedType<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.ctx, other.ctx) && self.id == other.id
    }
}

impl Eq for ExtendedType<'_> {}

impl Hash for ExtendedType<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.ctx, state);
        self.id.hash(state);
    }
}

impl fmt::Debug for ExtendedType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedType")
            .field("id", &self.id)
            .field("ty", &format_args!("{}", self.ctx.display(self.id)))
            .finish()
    }
}

impl From<Mvt> for Evt<'_> {
    fn from(vt: Mvt) -> Self {
        Self::Simple(vt)
    }
}

impl<'ctx> Evt<'ctx> {
    /// Integer of `bits` bits: canonical if the table has it, interned otherwise.
    pub fn integer(ctx: &'ctx TypeContext, bits: u32) -> Result<Self> {
        if let Some(vt) = Mvt::integer(bits) {
            return Ok(vt.into());
        }
        let id = ctx.int(bits)?;
        Ok(Self::Extended(ExtendedType::new(ctx, id)))
    }

    /// Every floating-point format has a canonical scalar.
    pub fn float(kind: FloatKind) -> Self {
        Mvt::scalar(ScalarKind::from_float(kind)).into()
    }

    /// Vector of `count` lanes of the scalar `element`.
    ///
    /// `count` is an `ElementCount` or a `(min, scalable)` pair. The result is
    /// the canonical entry whenever the table has one.
    pub fn vector(
        ctx: &'ctx TypeContext,
        element: impl Into<Evt<'ctx>>,
        count: impl Into<ElementCount>,
    ) -> Result<Self> {
        let element = element.into();
        let count = count.into();
        if element.is_vector() || !(element.is_integer() || element.is_floating_point()) {
            return Err(ValueTypeError::InvalidElement(element.to_string()));
        }
        if let Self::Simple(scalar) = element
            && let Some(vt) = Mvt::vector(scalar, count)
        {
            return Ok(vt.into());
        }
        let element_id = element.to_ir_type(ctx)?;
        let id = ctx.vector(element_id, count)?;
        trace!(element = %element, %count, "vector type outside the canonical table");
        Ok(Self::Extended(ExtendedType::new(ctx, id)))
    }

    /// Wrap an interned type, preferring its canonical entry.
    pub(crate) fn canonical(ctx: &'ctx TypeContext, id: IrTypeId) -> Self {
        match Mvt::from_ir_type(ctx, id) {
            Ok(vt) => vt.into(),
            Err(_) => Self::Extended(ExtendedType::new(ctx, id)),
        }
    }

    pub fn is_simple(&self) -> bool {
        matches!(self, Self::Simple(_))
    }

    pub fn is_extended(&self) -> bool {
        matches!(self, Self::Extended(_))
    }

    pub fn simple(&self) -> Option<Mvt> {
        match self {
            Self::Simple(vt) => Some(*vt),
            Self::Extended(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Self::Simple(vt) => vt.is_valid(),
            Self::Extended(_) => true,
        }
    }

    pub fn is_integer(&self) -> bool {
        match self {
            Self::Simple(vt) => vt.is_integer(),
            Self::Extended(ext) => ext.scalar_ir_type().is_integer(),
        }
    }

    pub fn is_floating_point(&self) -> bool {
        match self {
            Self::Simple(vt) => vt.is_floating_point(),
            Self::Extended(ext) => ext.scalar_ir_type().is_floating_point(),
        }
    }

    pub fn is_vector(&self) -> bool {
        match self {
            Self::Simple(vt) => vt.is_vector(),
            Self::Extended(ext) => ext.ir_type().is_vector(),
        }
    }

    pub fn is_scalable_vector(&self) -> bool {
        match self {
            Self::Simple(vt) => vt.is_scalable_vector(),
            Self::Extended(ext) => ext.ir_type().is_scalable_vector(),
        }
    }

    pub fn is_fixed_length_vector(&self) -> bool {
        self.is_vector() && !self.is_scalable_vector()
    }

    /// The element type of a vector, the type itself otherwise.
    pub fn scalar_type(&self) -> Self {
        match self {
            Self::Simple(vt) => vt.scalar_type().into(),
            Self::Extended(ext) => match ext.ir_type() {
                IrType::Vector { element, .. } => Self::canonical(ext.ctx, element),
                _ => *self,
            },
        }
    }

    pub fn vector_element_type(&self) -> Result<Self> {
        if !self.is_vector() {
            return Err(self.not_vector());
        }
        Ok(self.scalar_type())
    }

    pub fn vector_element_count(&self) -> Result<ElementCount> {
        match self {
            Self::Simple(vt) => vt.vector_element_count(),
            Self::Extended(ext) => ext
                .ir_type()
                .element_count()
                .ok_or_else(|| self.not_vector()),
        }
    }

    pub fn vector_num_elements(&self) -> Result<u32> {
        Ok(self.vector_element_count()?.min())
    }

    pub fn scalar_size_in_bits(&self) -> Option<u32> {
        match self {
            Self::Simple(vt) => vt.scalar_size_in_bits(),
            Self::Extended(ext) => ext.scalar_ir_type().scalar_bits(),
        }
    }

    pub fn size_in_bits(&self) -> Option<TypeSize> {
        let bits = self.scalar_size_in_bits()?;
        Some(match self.vector_element_count() {
            Ok(count) => TypeSize::of_lanes(bits, count),
            Err(_) => TypeSize::fixed(bits as u64),
        })
    }

    /// Same lanes, elements of twice the integer width.
    pub fn widen_integer_element(&self, ctx: &'ctx TypeContext) -> Result<Self> {
        self.check_context(ctx);
        if let Self::Simple(vt) = self
            && let Ok(wider) = vt.widen_integer_element()
        {
            return Ok(wider.into());
        }
        let count = self.vector_element_count()?;
        let bits = match self.scalar_size_in_bits() {
            Some(bits) if self.is_integer() => bits,
            _ => return Err(ValueTypeError::NotIntegerVector(self.to_string())),
        };
        let element = Self::integer(ctx, bits * 2)?;
        Self::vector(ctx, element, count)
    }

    /// Same element, half the lanes. The lane count must be even.
    pub fn half_lanes(&self, ctx: &'ctx TypeContext) -> Result<Self> {
        self.check_context(ctx);
        if let Self::Simple(vt) = self
            && let Ok(half) = vt.half_lanes()
        {
            return Ok(half.into());
        }
        let count = self.vector_element_count()?.halve()?;
        Self::vector(ctx, self.scalar_type(), count)
    }

    /// Same lanes, elements replaced by the integer type of equal width.
    ///
    /// Integer vectors are returned unchanged.
    pub fn to_integer(&self, ctx: &'ctx TypeContext) -> Result<Self> {
        self.check_context(ctx);
        if let Self::Simple(vt) = self
            && let Ok(integer) = vt.to_integer()
        {
            return Ok(integer.into());
        }
        let count = self.vector_element_count()?;
        if self.is_integer() {
            return Ok(*self);
        }
        let bits = match self.scalar_size_in_bits() {
            Some(bits) if self.is_floating_point() => bits,
            _ => return Err(ValueTypeError::NoIntegerEquivalent(self.to_string())),
        };
        let element = Self::integer(ctx, bits)?;
        Self::vector(ctx, element, count)
    }

    /// Same element (the scalar itself for scalars), new lane descriptor.
    pub fn with_element_count(
        &self,
        ctx: &'ctx TypeContext,
        count: impl Into<ElementCount>,
    ) -> Result<Self> {
        self.check_context(ctx);
        if !self.is_valid() {
            return Err(ValueTypeError::Invalid);
        }
        Self::vector(ctx, self.scalar_type(), count)
    }

    /// Same lane descriptor, new element type.
    pub fn with_element_type(
        &self,
        ctx: &'ctx TypeContext,
        element: impl Into<Evt<'ctx>>,
    ) -> Result<Self> {
        self.check_context(ctx);
        let count = self.vector_element_count()?;
        Self::vector(ctx, element, count)
    }

    fn check_context(&self, ctx: &TypeContext) {
        if let Self::Extended(ext) = self {
            ext.ensure_context(ctx);
        }
    }

    fn not_vector(&self) -> ValueTypeError {
        match self {
            Self::Simple(vt) if !vt.is_valid() => ValueTypeError::Invalid,
            _ => ValueTypeError::NotVector(self.to_string()),
        }
    }
}

impl fmt::Display for Evt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(vt) => f.write_str(vt.name()),
            Self::Extended(ext) => f.write_str(&ext.name()),
        }
    }
}
