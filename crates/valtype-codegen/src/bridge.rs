//! IR type bridge.
//!
//! Lowering maps IR types to value types; passes that rebuild IR values map
//! value types back. Both directions are exact:
//! - a vector's lane descriptor (minimum and scalable flag) is carried unchanged
//! - the element maps the same way the element type maps on its own
//! - `to_ir_type` then `to_value_type` (and the reverse) is the identity,
//!   up to interning in the context

use tracing::debug;
use valtype_core::{IrType, IrTypeId, TypeContext, TypeError};

use crate::extended::ExtendedType;
use crate::{Evt, Mvt, Result, ScalarKind, Shape, ValueTypeError};

/// Scalar kind of a leaf IR type, if the table has one.
fn scalar_kind_of(ty: IrType) -> Option<ScalarKind> {
    match ty {
        IrType::Void => Some(ScalarKind::IsVoid),
        IrType::Metadata => Some(ScalarKind::Metadata),
        IrType::Token => Some(ScalarKind::Token),
        IrType::Integer { bits } => ScalarKind::integer_of_width(bits),
        IrType::Float(kind) => Some(ScalarKind::from_float(kind)),
        IrType::Label | IrType::Vector { .. } => None,
    }
}

/// IR type of a scalar kind. Codegen-only placeholders have none.
fn scalar_ir_type(ctx: &TypeContext, kind: ScalarKind) -> Option<IrTypeId> {
    match kind {
        ScalarKind::IsVoid => Some(IrTypeId::VOID),
        ScalarKind::Token => Some(IrTypeId::TOKEN),
        ScalarKind::Metadata => Some(IrTypeId::METADATA),
        ScalarKind::Other | ScalarKind::Glue | ScalarKind::Untyped => None,
        kind => match kind.float_kind() {
            Some(float) => Some(ctx.float(float)),
            None => kind.bits().and_then(|bits| ctx.int(bits).ok()),
        },
    }
}

impl Mvt {
    /// Canonical value type of an IR type.
    ///
    /// Fails with `NotSimple` for types outside the table; use
    /// `Evt::from_ir_type` to accept those too.
    pub fn from_ir_type(ctx: &TypeContext, id: IrTypeId) -> Result<Self> {
        let ty = ctx
            .try_get(id)
            .ok_or(TypeError::UnknownType(id.as_u32()))?;
        let not_simple = || ValueTypeError::NotSimple(ctx.display(id).to_string());

        let shape = match ty {
            IrType::Label => {
                return Err(ValueTypeError::NoValueType(ctx.display(id).to_string()));
            }
            IrType::Vector { element, count } => {
                let kind = ctx
                    .try_get(element)
                    .and_then(scalar_kind_of)
                    .ok_or_else(not_simple)?;
                Shape::Vector(kind, count)
            }
            leaf => Shape::Scalar(scalar_kind_of(leaf).ok_or_else(not_simple)?),
        };
        Self::find(shape).ok_or_else(not_simple)
    }

    /// IR type of a canonical value type, interned in `ctx`.
    pub fn to_ir_type(self, ctx: &TypeContext) -> Result<IrTypeId> {
        let no_ir_type = || ValueTypeError::NoIrType(self.name().to_string());
        match self.shape() {
            Shape::Invalid => Err(ValueTypeError::Invalid),
            Shape::Scalar(kind) => scalar_ir_type(ctx, kind).ok_or_else(no_ir_type),
            Shape::Vector(kind, count) => {
                let element = scalar_ir_type(ctx, kind).ok_or_else(no_ir_type)?;
                Ok(ctx.vector(element, count)?)
            }
        }
    }
}

impl<'ctx> Evt<'ctx> {
    /// Value type of any IR type with a value-type meaning.
    ///
    /// Canonical whenever the table has the type; otherwise the interned
    /// type itself is wrapped, without copying.
    pub fn from_ir_type(ctx: &'ctx TypeContext, id: IrTypeId) -> Result<Self> {
        match Mvt::from_ir_type(ctx, id) {
            Ok(vt) => {
                debug!(ir = %ctx.display(id), vt = vt.name(), "IR type maps to a canonical value type");
                Ok(vt.into())
            }
            Err(ValueTypeError::NotSimple(_)) => {
                debug!(ir = %ctx.display(id), "IR type maps to an extended value type");
                Ok(Self::Extended(ExtendedType::new(ctx, id)))
            }
            Err(err) => Err(err),
        }
    }

    /// IR type of this value type.
    ///
    /// Extended types already are IR types and return their own handle.
    pub fn to_ir_type(&self, ctx: &TypeContext) -> Result<IrTypeId> {
        match self {
            Self::Simple(vt) => vt.to_ir_type(ctx),
            Self::Extended(ext) => {
                ext.ensure_context(ctx);
                Ok(ext.id())
            }
        }
    }
}

/// Lowering direction: IR type to value type.
pub fn to_value_type(ctx: &TypeContext, id: IrTypeId) -> Result<Evt<'_>> {
    Evt::from_ir_type(ctx, id)
}

/// Materialization direction: value type to IR type.
pub fn to_ir_type(vt: &Evt<'_>, ctx: &TypeContext) -> Result<IrTypeId> {
    vt.to_ir_type(ctx)
}
