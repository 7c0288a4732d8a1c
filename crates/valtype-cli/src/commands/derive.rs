use serde::Serialize;
use tracing::debug;
use valtype_codegen::{Evt, Result, TypeContext, TypeSummary, parse_value_type};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeriveOp {
    Widen,
    Half,
    #[serde(rename = "to-int")]
    ToInteger,
    Double,
}

impl DeriveOp {
    pub fn apply<'ctx>(self, ctx: &'ctx TypeContext, vt: Evt<'ctx>) -> Result<Evt<'ctx>> {
        match self {
            Self::Widen => vt.widen_integer_element(ctx),
            Self::Half => vt.half_lanes(ctx),
            Self::ToInteger => vt.to_integer(ctx),
            Self::Double => {
                let count = vt.vector_element_count()?.double()?;
                vt.with_element_count(ctx, count)
            }
        }
    }
}

pub struct DeriveArgs {
    pub name: String,
    pub op: DeriveOp,
    pub json: bool,
}

#[derive(Serialize)]
struct Derivation {
    op: DeriveOp,
    from: TypeSummary,
    to: TypeSummary,
}

pub fn render(args: &DeriveArgs) -> Result<String> {
    let ctx = TypeContext::new();
    let from = parse_value_type(&ctx, &args.name)?;
    let to = args.op.apply(&ctx, from)?;
    debug!(op = ?args.op, %from, %to, "derived value type");

    if args.json {
        let report = Derivation {
            op: args.op,
            from: TypeSummary::of(&from),
            to: TypeSummary::of(&to),
        };
        return Ok(super::to_json(&report));
    }
    Ok(format!("{from} -> {to}\n"))
}

pub fn run(args: DeriveArgs) {
    match render(&args) {
        Ok(out) => print!("{}", out),
        Err(e) => super::fail(e),
    }
}
