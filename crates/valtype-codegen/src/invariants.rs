//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use valtype_core::TypeContext;

use crate::{ExtendedType, Mvt, ScalarKind, Shape};

impl Mvt {
    pub(crate) fn ensure_scalar(kind: ScalarKind) -> Self {
        Self::find(Shape::Scalar(kind)).unwrap_or_else(|| {
            panic!(
                "Mvt: scalar kind `{}` missing from the canonical table",
                kind.name()
            )
        })
    }
}

impl ExtendedType<'_> {
    pub(crate) fn ensure_context(&self, ctx: &TypeContext) {
        if !std::ptr::eq(self.context(), ctx) {
            panic!(
                "Evt: extended type `{}` used with a TypeContext that did not intern it",
                self.name()
            );
        }
    }
}
