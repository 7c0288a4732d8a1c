use valtype_codegen::{Result, TypeContext, TypeSummary, parse_value_type};

pub struct ShowArgs {
    pub name: String,
    pub json: bool,
}

pub fn render(args: &ShowArgs) -> Result<String> {
    let ctx = TypeContext::new();
    let vt = parse_value_type(&ctx, &args.name)?;
    let summary = TypeSummary::of(&vt);
    if args.json {
        return Ok(super::to_json(&summary));
    }
    Ok(summary.to_string())
}

pub fn run(args: ShowArgs) {
    match render(&args) {
        Ok(out) => print!("{}", out),
        Err(e) => super::fail(e),
    }
}
