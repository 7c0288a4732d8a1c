//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("valtype")
        .about("Inspect code generation value types, including scalable vectors")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(list_command())
        .subcommand(show_command())
        .subcommand(derive_command())
        .subcommand(bridge_command())
}

/// List canonical value types.
pub fn list_command() -> Command {
    Command::new("list")
        .about("List canonical value types")
        .after_help(
            r#"SETS:
  integer, fp     scalar types only
  vector          every vector type
  fixed           fixed-length vectors
  scalable        scalable vectors (lane count is a multiple of vscale)

EXAMPLES:
  valtype list
  valtype list --filter int-scalable
  valtype list --filter fp --json"#,
        )
        .arg(filter_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Show properties of one value type.
pub fn show_command() -> Command {
    Command::new("show")
        .about("Show properties of a value type")
        .after_help(
            r#"Names outside the canonical table (i17, v3i17, nxv3f32) are built as
extended value types.

EXAMPLES:
  valtype show nxv4i32
  valtype show v3i17 --json"#,
        )
        .arg(name_arg())
        .arg(json_arg())
}

/// Apply a derived-type operation.
pub fn derive_command() -> Command {
    Command::new("derive")
        .about("Apply a derived-type operation to a vector type")
        .after_help(
            r#"OPERATIONS:
  widen     integer elements of twice the width
  half      half the lanes (lane count must be even)
  to-int    integer elements of the same width
  double    twice the lanes

EXAMPLES:
  valtype derive nxv4i32 widen
  valtype derive nxv2f64 to-int"#,
        )
        .arg(name_arg())
        .arg(op_arg())
        .arg(json_arg())
}

/// Round-trip a value type through the IR type bridge.
pub fn bridge_command() -> Command {
    Command::new("bridge")
        .about("Translate a value type to its IR type and back")
        .arg(name_arg())
        .arg(json_arg())
}
