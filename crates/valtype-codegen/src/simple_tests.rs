use valtype_core::{ElementCount, LaneError, TypeSize};

use crate::{Mvt, ScalarKind, Shape, ValueTypeError};

#[test]
fn integer_scalable_vectors_are_well_formed() {
    let types: Vec<Mvt> = Mvt::integer_scalable_vector_valuetypes().collect();
    assert_eq!(types.len(), 32);
    for vt in types {
        assert!(vt.is_valid(), "{vt}");
        assert!(vt.is_integer(), "{vt}");
        assert!(vt.is_vector(), "{vt}");
        assert!(vt.is_scalable_vector(), "{vt}");
        assert!(!vt.is_floating_point(), "{vt}");
        assert!(vt.scalar_type().is_valid(), "{vt}");
    }
}

#[test]
fn fp_scalable_vectors_are_well_formed() {
    let types: Vec<Mvt> = Mvt::fp_scalable_vector_valuetypes().collect();
    assert_eq!(types.len(), 19);
    for vt in types {
        assert!(vt.is_valid(), "{vt}");
        assert!(vt.is_floating_point(), "{vt}");
        assert!(vt.is_vector(), "{vt}");
        assert!(vt.is_scalable_vector(), "{vt}");
        assert!(!vt.is_integer(), "{vt}");
        assert!(vt.scalar_type().is_valid(), "{vt}");
    }
}

#[test]
fn sequences_restart() {
    let first: Vec<Mvt> = Mvt::fp_scalable_vector_valuetypes().collect();
    let second: Vec<Mvt> = Mvt::fp_scalable_vector_valuetypes().collect();
    assert_eq!(first, second);

    let seq = Mvt::integer_scalable_vector_valuetypes();
    assert_eq!(seq.clone().count(), seq.count());
}

#[test]
fn sequences_partition_the_table() {
    assert_eq!(Mvt::all().count(), 144);
    assert_eq!(Mvt::vector_valuetypes().count(), 125);
    assert_eq!(Mvt::fixed_vector_valuetypes().count(), 74);
    assert_eq!(Mvt::scalable_vector_valuetypes().count(), 51);
    assert_eq!(
        Mvt::integer_fixed_vector_valuetypes().count() + Mvt::fp_fixed_vector_valuetypes().count(),
        74
    );
    assert_eq!(Mvt::integer_valuetypes().count(), 6);
    assert_eq!(Mvt::fp_valuetypes().count(), 7);
    assert!(Mvt::all().all(|vt| vt.is_valid()));
    assert!(!Mvt::INVALID.is_valid());
}

#[test]
fn fixed_vectors_are_never_scalable() {
    for vt in Mvt::fixed_vector_valuetypes() {
        assert!(!vt.is_scalable_vector(), "{vt}");
        assert!(vt.is_fixed_length_vector(), "{vt}");
    }
    assert!(!Mvt::V8I32.is_scalable_vector());
    assert_eq!(Mvt::V8I32.vector_element_count(), Ok(ElementCount::fixed(8)));
    assert_eq!(
        Mvt::vector(Mvt::F64, ElementCount::fixed(4)),
        Some(Mvt::V4F64)
    );
    assert!(!Mvt::V4F64.is_scalable_vector());
}

#[test]
fn construction_by_pair_matches_descriptor() {
    let by_pair = Mvt::vector(Mvt::I32, (4, true));
    let by_descriptor = Mvt::vector(Mvt::I32, ElementCount::scalable(4));
    assert_eq!(by_pair, Some(Mvt::NXV4I32));
    assert_eq!(by_descriptor, Some(Mvt::NXV4I32));
    assert_eq!(Mvt::vector(Mvt::I32, (4, false)), Some(Mvt::V4I32));
}

#[test]
fn descriptor_arithmetic_as_vector_types() {
    let two = ElementCount::scalable(2);
    assert_eq!(two * 2, ElementCount::scalable(4));
    assert_eq!(two / 2, ElementCount::scalable(1));
    assert_eq!(Mvt::vector(Mvt::I64, two * 2), Some(Mvt::NXV4I64));
    assert_eq!(Mvt::vector(Mvt::I64, two / 2), Some(Mvt::NXV1I64));
}

#[test]
fn derived_scalable_types() {
    assert_eq!(Mvt::NXV4I32.widen_integer_element(), Ok(Mvt::NXV4I64));
    assert_eq!(Mvt::NXV4I32.half_lanes(), Ok(Mvt::NXV2I32));
    assert_eq!(Mvt::NXV2F64.to_integer(), Ok(Mvt::NXV2I64));
    assert_eq!(Mvt::NXV4BF16.to_integer(), Ok(Mvt::NXV4I16));
    assert_eq!(Mvt::V4F32.to_integer(), Ok(Mvt::V4I32));
    assert_eq!(Mvt::V8I16.to_integer(), Ok(Mvt::V8I16));
    assert_eq!(
        Mvt::NXV2I32.with_element_count((8, false)),
        Ok(Mvt::V8I32)
    );
}

#[test]
fn halving_undoes_scaling() {
    for vt in Mvt::scalable_vector_valuetypes() {
        let count = vt.vector_element_count().unwrap();
        let Some(doubled) = Mvt::vector(vt.scalar_type(), count * 2) else {
            continue;
        };
        assert!(doubled.is_scalable_vector(), "{doubled}");
        assert_eq!(doubled.half_lanes(), Ok(vt), "{doubled}");
    }
}

#[test]
fn vector_only_operations_reject_scalars() {
    let not_vector = ValueTypeError::NotVector("i32".to_string());
    assert_eq!(Mvt::I32.half_lanes(), Err(not_vector.clone()));
    assert_eq!(Mvt::I32.widen_integer_element(), Err(not_vector.clone()));
    assert_eq!(Mvt::I32.to_integer(), Err(not_vector.clone()));
    assert_eq!(Mvt::I32.vector_element_count(), Err(not_vector));
    assert_eq!(Mvt::INVALID.vector_num_elements(), Err(ValueTypeError::Invalid));
}

#[test]
fn derived_operations_fail_without_counterpart() {
    assert_eq!(
        Mvt::NXV1I32.half_lanes(),
        Err(ValueTypeError::Lanes(LaneError::InexactDivision {
            count: ElementCount::scalable(1),
            divisor: 2,
        }))
    );
    assert_eq!(
        Mvt::NXV4F32.widen_integer_element(),
        Err(ValueTypeError::NotIntegerVector("nxv4f32".to_string()))
    );
    assert_eq!(
        Mvt::V1I128.widen_integer_element(),
        Err(ValueTypeError::NoWiderInteger("v1i128".to_string()))
    );
    assert_eq!(
        Mvt::V1I1.widen_integer_element(),
        Err(ValueTypeError::NoWiderInteger("v1i1".to_string()))
    );
    // v3i32 exists, v3i64 does not
    assert_eq!(
        Mvt::V3I32.widen_integer_element(),
        Err(ValueTypeError::NotSimple("v3i64".to_string()))
    );
    assert_eq!(
        Mvt::V2F16.with_element_count((3, false)),
        Err(ValueTypeError::NotSimple("v3f16".to_string()))
    );
}

#[test]
fn lane_queries() {
    assert_eq!(Mvt::NXV8I64.vector_element_count(), Ok(ElementCount::scalable(8)));
    assert_eq!(Mvt::NXV8I64.vector_num_elements(), Ok(8));
    assert_eq!(Mvt::NXV8I64.vector_element_type(), Ok(Mvt::I64));
    assert_eq!(Mvt::F32.scalar_type(), Mvt::F32);
    assert_eq!(Mvt::V16I8.scalar_kind(), Some(ScalarKind::I8));
    assert_eq!(Mvt::INVALID.shape(), Shape::Invalid);
}

#[test]
fn sizes() {
    assert_eq!(Mvt::I32.scalar_size_in_bits(), Some(32));
    assert_eq!(Mvt::V4F32.size_in_bits(), Some(TypeSize::fixed(128)));
    assert_eq!(Mvt::NXV2I64.size_in_bits(), Some(TypeSize::scalable(128)));
    assert_eq!(Mvt::GLUE.size_in_bits(), None);
    assert_eq!(Mvt::INVALID.size_in_bits(), None);
}

#[test]
fn names_resolve_to_constants() {
    assert_eq!(Mvt::from_name("nxv4i32"), Some(Mvt::NXV4I32));
    assert_eq!(Mvt::from_name("v2048f32"), Some(Mvt::V2048F32));
    assert_eq!(Mvt::from_name("isvoid"), Some(Mvt::IS_VOID));
    assert_eq!(Mvt::from_name("invalid"), None);
    assert_eq!(Mvt::from_name("v3i17"), None);
    for vt in Mvt::all() {
        assert_eq!(Mvt::from_name(vt.name()), Some(vt));
        assert_eq!(Mvt::from_index(vt.index()), Some(vt));
    }
    assert_eq!(Mvt::from_index(200), None);
}

#[test]
fn scalar_constructors() {
    assert_eq!(Mvt::scalar(ScalarKind::BF16), Mvt::BF16);
    assert_eq!(Mvt::integer(128), Some(Mvt::I128));
    assert_eq!(Mvt::integer(17), None);
    assert_eq!(Mvt::vector(Mvt::V4I32, (2, false)), None);
}
