//! Type context: the interning arena for structural IR types.
//!
//! Converts structural type descriptions into cheap integer handles (`IrTypeId`).
//! Two requests for the same structure return the same handle, so comparing
//! handles is comparing structure.
//!
//! One context lives per compilation unit. Interning goes through `&self`
//! (the arena sits behind a `RefCell`), which lets value types borrow the
//! context while new types are still being interned. The context is `Send`
//! but not `Sync`: callers that intern from several threads must put it
//! behind a `Mutex` themselves.

use std::cell::RefCell;
use std::fmt;

use indexmap::IndexSet;
use tracing::trace;

use crate::{ElementCount, FloatKind, IrType, MAX_INT_BITS, TypeError};

/// Handle to a type interned in a `TypeContext`.
///
/// Only meaningful for the context that produced it. Handles are ordered by
/// insertion; the common leaf types occupy the reserved low indices.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct IrTypeId(u32);

impl IrTypeId {
    pub const VOID: Self = Self(0);
    pub const I1: Self = Self(1);
    pub const I8: Self = Self(2);
    pub const I16: Self = Self(3);
    pub const I32: Self = Self(4);
    pub const I64: Self = Self(5);
    pub const I128: Self = Self(6);
    pub const F16: Self = Self(7);
    pub const BF16: Self = Self(8);
    pub const F32: Self = Self(9);
    pub const F64: Self = Self(10);
    pub const F80: Self = Self(11);
    pub const F128: Self = Self(12);
    pub const PPC_F128: Self = Self(13);
    pub const LABEL: Self = Self(14);
    pub const METADATA: Self = Self(15);
    pub const TOKEN: Self = Self(16);

    /// Types every context interns on creation, in handle order.
    const RESERVED: [IrType; 17] = [
        IrType::Void,
        IrType::Integer { bits: 1 },
        IrType::Integer { bits: 8 },
        IrType::Integer { bits: 16 },
        IrType::Integer { bits: 32 },
        IrType::Integer { bits: 64 },
        IrType::Integer { bits: 128 },
        IrType::Float(FloatKind::Half),
        IrType::Float(FloatKind::BFloat),
        IrType::Float(FloatKind::Single),
        IrType::Float(FloatKind::Double),
        IrType::Float(FloatKind::X86Fp80),
        IrType::Float(FloatKind::Quad),
        IrType::Float(FloatKind::PpcDoubleDouble),
        IrType::Label,
        IrType::Metadata,
        IrType::Token,
    ];

    /// Raw index for serialization/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Create a handle from a raw index. Use only for deserialization.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

/// Owner of every interned IR type of one compilation unit.
#[derive(Debug)]
pub struct TypeContext {
    /// Insertion-ordered set: the position of a type is its `IrTypeId`.
    types: RefCell<IndexSet<IrType>>,
}

impl Default for TypeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeContext {
    pub fn new() -> Self {
        Self {
            types: RefCell::new(IrTypeId::RESERVED.into_iter().collect()),
        }
    }

    /// Intern a type, validating its structure first.
    ///
    /// Returns the existing handle if the same structure was interned before.
    pub fn intern(&self, ty: IrType) -> Result<IrTypeId, TypeError> {
        self.validate(ty)?;
        Ok(self.insert(ty))
    }

    /// Integer of the given width.
    pub fn int(&self, bits: u32) -> Result<IrTypeId, TypeError> {
        self.intern(IrType::Integer { bits })
    }

    pub fn float(&self, kind: FloatKind) -> IrTypeId {
        self.insert(IrType::Float(kind))
    }

    /// Vector of `count` lanes of `element`.
    pub fn vector(
        &self,
        element: IrTypeId,
        count: impl Into<ElementCount>,
    ) -> Result<IrTypeId, TypeError> {
        self.intern(IrType::Vector {
            element,
            count: count.into(),
        })
    }

    /// Resolve a handle.
    ///
    /// # Panics
    /// Panics if the handle was not created by this context.
    #[inline]
    pub fn get(&self, id: IrTypeId) -> IrType {
        self.ensure_type(id)
    }

    /// Try to resolve a handle, returning `None` if it is foreign.
    #[inline]
    pub fn try_get(&self, id: IrTypeId) -> Option<IrType> {
        self.types.borrow().get_index(id.0 as usize).copied()
    }

    /// Handle of an already-interned type, without interning it.
    pub fn lookup(&self, ty: &IrType) -> Option<IrTypeId> {
        self.types
            .borrow()
            .get_index_of(ty)
            .map(|index| IrTypeId(index as u32))
    }

    /// Element type of a vector type.
    pub fn element_type(&self, id: IrTypeId) -> Option<IrTypeId> {
        match self.try_get(id)? {
            IrType::Vector { element, .. } => Some(element),
            _ => None,
        }
    }

    /// Lane descriptor of a vector type.
    pub fn element_count(&self, id: IrTypeId) -> Option<ElementCount> {
        self.try_get(id)?.element_count()
    }

    /// Number of interned types (reserved ones included).
    #[inline]
    pub fn len(&self) -> usize {
        self.types.borrow().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.borrow().is_empty()
    }

    /// Snapshot of all interned types with their handles, in insertion order.
    pub fn types(&self) -> Vec<(IrTypeId, IrType)> {
        self.types
            .borrow()
            .iter()
            .enumerate()
            .map(|(i, ty)| (IrTypeId(i as u32), *ty))
            .collect()
    }

    /// Render a type in IR syntax (`i32`, `double`, `<vscale x 4 x i32>`).
    pub fn display(&self, id: IrTypeId) -> IrTypeDisplay<'_> {
        IrTypeDisplay { ctx: self, id }
    }

    fn validate(&self, ty: IrType) -> Result<(), TypeError> {
        match ty {
            IrType::Integer { bits } if bits == 0 || bits > MAX_INT_BITS => {
                Err(TypeError::InvalidIntegerWidth { bits })
            }
            IrType::Vector { element, count } => {
                let element_ty = self
                    .try_get(element)
                    .ok_or(TypeError::UnknownType(element.0))?;
                if !element_ty.is_first_class_scalar() {
                    return Err(TypeError::InvalidElementType {
                        element: self.display(element).to_string(),
                    });
                }
                if !count.is_vector() {
                    return Err(TypeError::ZeroLanes);
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn insert(&self, ty: IrType) -> IrTypeId {
        let (index, inserted) = self.types.borrow_mut().insert_full(ty);
        if inserted {
            trace!(id = index, ?ty, "interned IR type");
        }
        IrTypeId(index as u32)
    }
}

/// IR-syntax rendering of an interned type.
pub struct IrTypeDisplay<'a> {
    ctx: &'a TypeContext,
    id: IrTypeId,
}

impl fmt::Display for IrTypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(ty) = self.ctx.try_get(self.id) else {
            return write!(f, "<unknown type #{}>", self.id.0);
        };
        match ty {
            IrType::Void => f.write_str("void"),
            IrType::Label => f.write_str("label"),
            IrType::Metadata => f.write_str("metadata"),
            IrType::Token => f.write_str("token"),
            IrType::Integer { bits } => write!(f, "i{bits}"),
            IrType::Float(kind) => f.write_str(kind.name()),
            IrType::Vector { element, count } => {
                write!(f, "<{count} x {}>", self.ctx.display(element))
            }
        }
    }
}
