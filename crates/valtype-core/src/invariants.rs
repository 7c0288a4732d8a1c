//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{ElementCount, IrType, IrTypeId, TypeContext};

impl ElementCount {
    pub(crate) fn ensure_mul(self, factor: u32) -> Self {
        self.checked_mul(factor)
            .unwrap_or_else(|err| panic!("ElementCount: {err}"))
    }

    pub(crate) fn ensure_div(self, divisor: u32) -> Self {
        self.checked_div(divisor)
            .unwrap_or_else(|err| panic!("ElementCount: {err}"))
    }
}

impl TypeContext {
    pub(crate) fn ensure_type(&self, id: IrTypeId) -> IrType {
        self.try_get(id).unwrap_or_else(|| {
            panic!(
                "TypeContext: type id {} not found \
                 (handles must come from the context that resolves them)",
                id.as_u32()
            )
        })
    }
}
