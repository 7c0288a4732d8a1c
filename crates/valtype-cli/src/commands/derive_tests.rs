use super::derive::{DeriveArgs, DeriveOp, render};

fn derive(name: &str, op: DeriveOp) -> String {
    render(&DeriveArgs {
        name: name.to_string(),
        op,
        json: false,
    })
    .unwrap()
}

#[test]
fn scalable_derivations() {
    assert_eq!(derive("nxv4i32", DeriveOp::Widen), "nxv4i32 -> nxv4i64\n");
    assert_eq!(derive("nxv4i32", DeriveOp::Half), "nxv4i32 -> nxv2i32\n");
    assert_eq!(derive("nxv2f64", DeriveOp::ToInteger), "nxv2f64 -> nxv2i64\n");
    assert_eq!(derive("nxv2i64", DeriveOp::Double), "nxv2i64 -> nxv4i64\n");
}

#[test]
fn derivations_leave_the_table() {
    assert_eq!(derive("v3i32", DeriveOp::Widen), "v3i32 -> v3i64\n");
    assert_eq!(derive("nxv16f32", DeriveOp::Double), "nxv16f32 -> nxv32f32\n");
    assert_eq!(derive("v6i17", DeriveOp::Half), "v6i17 -> v3i17\n");
}

#[test]
fn derivation_errors() {
    let err = render(&DeriveArgs {
        name: "nxv1i32".to_string(),
        op: DeriveOp::Half,
        json: false,
    })
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "vscale x 1 lanes cannot be divided evenly by 2"
    );

    let err = render(&DeriveArgs {
        name: "f32".to_string(),
        op: DeriveOp::Widen,
        json: false,
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "`f32` is not a vector type");
}

#[test]
fn derive_json() {
    let out = render(&DeriveArgs {
        name: "nxv2f64".to_string(),
        op: DeriveOp::ToInteger,
        json: true,
    })
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["op"], "to-int");
    assert_eq!(value["from"]["name"], "nxv2f64");
    assert_eq!(value["to"]["name"], "nxv2i64");
    assert_eq!(value["to"]["lanes"]["scalable"], true);
}
