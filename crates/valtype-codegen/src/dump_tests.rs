use indoc::indoc;
use serde_json::json;
use valtype_core::TypeContext;

use crate::{Colors, Evt, Mvt, TypeSummary, dump_table};

#[test]
fn dump_mixed_types() {
    let types = [Mvt::I32, Mvt::V4F32, Mvt::NXV2I64, Mvt::GLUE];

    let out = dump_table(types, Colors::OFF);

    insta::assert_snapshot!(out, @r"
    004  i32      int
    077  v4f32    float  4
    121  nxv2i64  int    vscale x 2
    015  glue     other
    ");
}

#[test]
fn dump_integer_scalars() {
    let out = dump_table(Mvt::integer_valuetypes(), Colors::OFF);

    insta::assert_snapshot!(out, @r"
    001  i1    int
    002  i8    int
    003  i16   int
    004  i32   int
    005  i64   int
    006  i128  int
    ");
}

#[test]
fn dump_scalable_f64() {
    let types = Mvt::fp_scalable_vector_valuetypes().filter(|vt| vt.scalar_type() == Mvt::F64);

    let out = dump_table(types, Colors::OFF);

    insta::assert_snapshot!(out, @r"
    141  nxv1f64  float  vscale x 1
    142  nxv2f64  float  vscale x 2
    143  nxv4f64  float  vscale x 4
    144  nxv8f64  float  vscale x 8
    ");
}

#[test]
fn dump_empty() {
    assert_eq!(dump_table(Vec::<Mvt>::new(), Colors::OFF), "");
}

#[test]
fn dump_colored() {
    let out = dump_table([Mvt::NXV1F64], Colors::ON);
    assert_eq!(
        out,
        "\x1b[2m141\x1b[0m  \x1b[34mnxv1f64\x1b[0m  float  \x1b[32mvscale x 1\x1b[0m\n"
    );

    let out = dump_table([Mvt::V4F32], Colors::ON);
    assert_eq!(out, "\x1b[2m077\x1b[0m  \x1b[34mv4f32\x1b[0m  float  4\n");
}

#[test]
fn colors_toggle() {
    assert!(Colors::new(true).is_enabled());
    assert!(!Colors::new(false).is_enabled());
    assert!(!Colors::default().is_enabled());
}

#[test]
fn summary_of_canonical_type() {
    let summary = TypeSummary::of(&Evt::from(Mvt::NXV4I32));

    assert_eq!(
        serde_json::to_value(&summary).unwrap(),
        json!({
            "name": "nxv4i32",
            "index": 116,
            "extended": false,
            "scalar": "i32",
            "integer": true,
            "floating_point": false,
            "vector": true,
            "scalable": true,
            "lanes": { "min": 4, "scalable": true },
            "bits": 128,
        })
    );
}

#[test]
fn summary_of_scalar_omits_lanes() {
    let summary = TypeSummary::of(&Evt::from(Mvt::GLUE));

    assert_eq!(
        serde_json::to_value(&summary).unwrap(),
        json!({
            "name": "glue",
            "index": 15,
            "extended": false,
            "scalar": "glue",
            "integer": false,
            "floating_point": false,
            "vector": false,
            "scalable": false,
        })
    );
}

#[test]
fn summary_display_of_extended_type() {
    let ctx = TypeContext::new();
    let vt = Evt::vector(&ctx, Mvt::F32, (3, true)).unwrap();

    let summary = TypeSummary::of(&vt);

    assert_eq!(
        summary.to_string(),
        indoc! {"
            name:    nxv3f32
            form:    extended
            scalar:  f32
            class:   float
            lanes:   vscale x 3
            bits:    vscale x 96
        "}
    );
}

#[test]
fn summary_display_of_canonical_scalar() {
    let summary = TypeSummary::of(&Evt::from(Mvt::I64));

    assert_eq!(
        summary.to_string(),
        indoc! {"
            name:    i64
            form:    canonical #5
            scalar:  i64
            class:   int
            bits:    64
        "}
    );
}
