//! Human-readable listings of value types.
//!
//! Table dump format, one entry per line:
//!
//! ```text
//! 004  i32       int
//! 116  nxv4i32   int    vscale x 4
//! ```
//!
//! Index width follows the largest index listed; the name column is padded
//! to the longest name.

use std::fmt::{self, Write as _};

use serde::Serialize;
use valtype_core::ElementCount;

use crate::{Evt, Mvt, ScalarKind};

/// ANSI color palette for terminal output.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub name: &'static str,
    pub scalable: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        name: "\x1b[34m",
        scalable: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        name: "",
        scalable: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Coarse class shown in listings.
fn class_of(kind: Option<ScalarKind>) -> &'static str {
    match kind {
        Some(kind) if kind.is_integer() => "int",
        Some(kind) if kind.is_floating_point() => "float",
        _ => "other",
    }
}

fn width_for_count(max_index: usize) -> usize {
    max_index.to_string().len().max(3)
}

/// Dump canonical value types in the order given.
pub fn dump_table(types: impl IntoIterator<Item = Mvt>, colors: Colors) -> String {
    let types: Vec<Mvt> = types.into_iter().collect();
    let max_index = types.iter().map(|vt| vt.index() as usize).max().unwrap_or(0);
    let index_width = width_for_count(max_index);
    let name_width = types.iter().map(|vt| vt.name().len()).max().unwrap_or(0);

    let mut out = String::new();
    for vt in types {
        let mut line = String::new();
        write!(
            line,
            "{}{:0iw$}{}  {}{:<nw$}{}  {:<5}",
            colors.dim,
            vt.index(),
            colors.reset,
            colors.name,
            vt.name(),
            colors.reset,
            class_of(vt.scalar_kind()),
            iw = index_width,
            nw = name_width,
        )
        .unwrap();
        if let Some(count) = vt.shape().element_count() {
            let color = if count.is_scalable() { colors.scalable } else { "" };
            let reset = if color.is_empty() { "" } else { colors.reset };
            write!(line, "  {color}{count}{reset}").unwrap();
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Serializable description of any value type, for `--json` output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeSummary {
    pub name: String,
    /// Table index for canonical types, `None` for extended ones.
    pub index: Option<u8>,
    pub extended: bool,
    pub scalar: String,
    pub integer: bool,
    pub floating_point: bool,
    pub vector: bool,
    pub scalable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lanes: Option<ElementCount>,
    /// Size in bits; the minimum size for scalable vectors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bits: Option<u64>,
}

impl TypeSummary {
    pub fn of(vt: &Evt<'_>) -> Self {
        Self {
            name: vt.to_string(),
            index: vt.simple().map(Mvt::index),
            extended: vt.is_extended(),
            scalar: vt.scalar_type().to_string(),
            integer: vt.is_integer(),
            floating_point: vt.is_floating_point(),
            vector: vt.is_vector(),
            scalable: vt.is_scalable_vector(),
            lanes: vt.vector_element_count().ok(),
            bits: vt.size_in_bits().map(|size| size.known_min_bits()),
        }
    }
}

impl fmt::Display for TypeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = match self.index {
            Some(index) => format!("canonical #{index}"),
            None => "extended".to_string(),
        };
        writeln!(f, "name:    {}", self.name)?;
        writeln!(f, "form:    {form}")?;
        writeln!(f, "scalar:  {}", self.scalar)?;
        let class = if self.integer {
            "int"
        } else if self.floating_point {
            "float"
        } else {
            "other"
        };
        writeln!(f, "class:   {class}")?;
        if let Some(lanes) = self.lanes {
            writeln!(f, "lanes:   {lanes}")?;
        }
        if let Some(bits) = self.bits {
            let prefix = if self.scalable { "vscale x " } else { "" };
            writeln!(f, "bits:    {prefix}{bits}")?;
        }
        Ok(())
    }
}
