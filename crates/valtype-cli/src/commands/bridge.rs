use serde::Serialize;
use valtype_codegen::{Result, TypeContext, parse_value_type, to_ir_type, to_value_type};

pub struct BridgeArgs {
    pub name: String,
    pub json: bool,
}

#[derive(Serialize)]
struct RoundTrip {
    value_type: String,
    ir_type: String,
    round_trip: String,
    exact: bool,
}

pub fn render(args: &BridgeArgs) -> Result<String> {
    let ctx = TypeContext::new();
    let vt = parse_value_type(&ctx, &args.name)?;
    let ir = to_ir_type(&vt, &ctx)?;
    let back = to_value_type(&ctx, ir)?;

    let report = RoundTrip {
        value_type: vt.to_string(),
        ir_type: ctx.display(ir).to_string(),
        round_trip: back.to_string(),
        exact: back == vt,
    };
    if args.json {
        return Ok(super::to_json(&report));
    }
    Ok(format!(
        "value type: {}\nIR type:    {}\nround trip: {}\n",
        report.value_type, report.ir_type, report.round_trip
    ))
}

pub fn run(args: BridgeArgs) {
    match render(&args) {
        Ok(out) => print!("{}", out),
        Err(e) => super::fail(e),
    }
}
