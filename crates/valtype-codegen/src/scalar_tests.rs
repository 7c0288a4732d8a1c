use crate::ScalarKind;
use valtype_core::FloatKind;

#[test]
fn integer_and_float_are_exclusive() {
    let all = [
        ScalarKind::I1,
        ScalarKind::I128,
        ScalarKind::F16,
        ScalarKind::BF16,
        ScalarKind::F80,
        ScalarKind::PpcF128,
        ScalarKind::Glue,
        ScalarKind::Metadata,
    ];
    for kind in all {
        assert!(!(kind.is_integer() && kind.is_floating_point()), "{kind:?}");
    }
    assert!(!ScalarKind::Other.is_numeric());
    assert!(ScalarKind::BF16.is_numeric());
}

#[test]
fn widening_doubles_integer_width() {
    assert_eq!(ScalarKind::I8.wider_integer(), Some(ScalarKind::I16));
    assert_eq!(ScalarKind::I16.wider_integer(), Some(ScalarKind::I32));
    assert_eq!(ScalarKind::I32.wider_integer(), Some(ScalarKind::I64));
    assert_eq!(ScalarKind::I64.wider_integer(), Some(ScalarKind::I128));
    assert_eq!(ScalarKind::I128.wider_integer(), None);
    assert_eq!(ScalarKind::I1.wider_integer(), None);
    assert_eq!(ScalarKind::F32.wider_integer(), None);
}

#[test]
fn integer_equivalent_keeps_width() {
    assert_eq!(ScalarKind::F16.integer_equivalent(), Some(ScalarKind::I16));
    assert_eq!(ScalarKind::BF16.integer_equivalent(), Some(ScalarKind::I16));
    assert_eq!(ScalarKind::F32.integer_equivalent(), Some(ScalarKind::I32));
    assert_eq!(ScalarKind::F64.integer_equivalent(), Some(ScalarKind::I64));
    assert_eq!(ScalarKind::F128.integer_equivalent(), Some(ScalarKind::I128));
    assert_eq!(ScalarKind::PpcF128.integer_equivalent(), Some(ScalarKind::I128));
    assert_eq!(ScalarKind::I8.integer_equivalent(), Some(ScalarKind::I8));
    assert_eq!(ScalarKind::F80.integer_equivalent(), None);
    assert_eq!(ScalarKind::Token.integer_equivalent(), None);
}

#[test]
fn float_kinds_map_both_ways() {
    for kind in FloatKind::ALL {
        let scalar = ScalarKind::from_float(kind);
        assert!(scalar.is_floating_point());
        assert_eq!(scalar.float_kind(), Some(kind));
        assert_eq!(scalar.bits(), Some(kind.bits()));
    }
    assert_eq!(ScalarKind::I32.float_kind(), None);
}

#[test]
fn non_numeric_kinds_have_no_width() {
    assert_eq!(ScalarKind::Untyped.bits(), None);
    assert_eq!(ScalarKind::IsVoid.bits(), None);
    assert_eq!(ScalarKind::integer_of_width(24), None);
    assert_eq!(ScalarKind::integer_of_width(64), Some(ScalarKind::I64));
}
