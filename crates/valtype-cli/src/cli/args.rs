//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use clap::{Arg, ArgAction};

/// Value type name (positional).
pub fn name_arg() -> Arg {
    Arg::new("name")
        .value_name("NAME")
        .required(true)
        .help("Value type name (i32, v8f32, nxv4i32, i17, nxv3f32, ...)")
}

/// Subset of the canonical table (--filter).
pub fn filter_arg() -> Arg {
    Arg::new("filter")
        .long("filter")
        .value_name("SET")
        .default_value("all")
        .value_parser([
            "all",
            "integer",
            "fp",
            "vector",
            "fixed",
            "scalable",
            "int-scalable",
            "fp-scalable",
        ])
        .help("Which value types to list")
}

/// Derived-type operation (positional).
pub fn op_arg() -> Arg {
    Arg::new("op")
        .value_name("OP")
        .required(true)
        .value_parser(["widen", "half", "to-int", "double"])
        .help("Operation to apply")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
