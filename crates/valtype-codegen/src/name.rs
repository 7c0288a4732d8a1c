//! Parsing value type names.
//!
//! Accepts every canonical name (`i32`, `v8i32`, `nxv4f64`, `isvoid`) plus
//! the structural spellings of extended types: `i<bits>` for any integer
//! width and `v<n><element>` / `nxv<n><element>` for any numeric element.

use valtype_core::TypeContext;

use crate::{Evt, Mvt, Result, ValueTypeError};

/// Parse a value type name, interning extended types in `ctx`.
pub fn parse_value_type<'ctx>(ctx: &'ctx TypeContext, text: &str) -> Result<Evt<'ctx>> {
    let unknown = || ValueTypeError::UnknownName(text.to_string());

    if let Some(vt) = Mvt::from_name(text) {
        return Ok(vt.into());
    }
    if let Some(bits) = text.strip_prefix('i').and_then(parse_count) {
        return Evt::integer(ctx, bits);
    }

    let (scalable, rest) = match text.strip_prefix("nxv") {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('v').ok_or_else(unknown)?),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    let (min, element) = rest.split_at(digits);
    let min = parse_count(min).ok_or_else(unknown)?;
    if element.is_empty() || element.starts_with(['v', 'n']) {
        return Err(unknown());
    }

    let element = parse_value_type(ctx, element)?;
    Evt::vector(ctx, element, (min, scalable))
}

/// Decimal without sign or leading zeros.
fn parse_count(text: &str) -> Option<u32> {
    if text.is_empty() || text.starts_with('0') || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
