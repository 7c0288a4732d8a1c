//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Params extraction: correct fields are extracted from ArgMatches
//! 2. Validation: clap rejects unknown sets and operations
//! 3. Help: every subcommand is listed

use super::*;
use crate::cli::commands::{bridge_command, derive_command, list_command, show_command};
use crate::commands::derive::DeriveOp;
use crate::commands::list::ListFilter;

#[test]
fn list_defaults() {
    let m = list_command().try_get_matches_from(["list"]).unwrap();
    let params = ListParams::from_matches(&m);

    assert_eq!(params.filter, ListFilter::All);
    assert!(!params.json);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn list_extracts_filter_and_flags() {
    let m = list_command()
        .try_get_matches_from(["list", "--filter", "fp-scalable", "--json", "--color", "never"])
        .unwrap();
    let params = ListParams::from_matches(&m);

    assert_eq!(params.filter, ListFilter::FpScalable);
    assert!(params.json);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn list_rejects_unknown_filter() {
    let result = list_command().try_get_matches_from(["list", "--filter", "bogus"]);
    assert!(result.is_err());
}

#[test]
fn show_requires_name() {
    assert!(show_command().try_get_matches_from(["show"]).is_err());

    let m = show_command()
        .try_get_matches_from(["show", "v3i17", "--json"])
        .unwrap();
    let params = ShowParams::from_matches(&m);
    assert_eq!(params.name, "v3i17");
    assert!(params.json);
}

#[test]
fn derive_extracts_operation() {
    let cases = [
        ("widen", DeriveOp::Widen),
        ("half", DeriveOp::Half),
        ("to-int", DeriveOp::ToInteger),
        ("double", DeriveOp::Double),
    ];
    for (text, op) in cases {
        let m = derive_command()
            .try_get_matches_from(["derive", "nxv4i32", text])
            .unwrap();
        let params = DeriveParams::from_matches(&m);
        assert_eq!(params.name, "nxv4i32");
        assert_eq!(params.op, op, "{text}");
    }
}

#[test]
fn derive_rejects_unknown_operation() {
    let result = derive_command().try_get_matches_from(["derive", "nxv4i32", "triple"]);
    assert!(result.is_err());
}

#[test]
fn bridge_extracts_name() {
    let m = bridge_command()
        .try_get_matches_from(["bridge", "nxv8i64"])
        .unwrap();
    let params = BridgeParams::from_matches(&m);
    assert_eq!(params.name, "nxv8i64");
    assert!(!params.json);
}

#[test]
fn color_choice_resolution() {
    assert!(ColorChoice::Always.should_colorize());
    assert!(!ColorChoice::Never.should_colorize());
}

#[test]
fn help_lists_subcommands() {
    let help = build_cli().render_help().to_string();
    for name in ["list", "show", "derive", "bridge"] {
        assert!(help.contains(name), "{name} missing from help");
    }
}

#[test]
fn cli_requires_subcommand() {
    assert!(build_cli().try_get_matches_from(["valtype"]).is_err());
}
