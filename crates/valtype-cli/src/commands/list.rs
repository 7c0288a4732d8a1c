use valtype_codegen::{Colors, Evt, Mvt, TypeSummary, dump_table};

/// Subsets of the canonical table the `list` command can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListFilter {
    All,
    /// Integer scalars.
    Integer,
    /// Floating-point scalars.
    Fp,
    Vector,
    Fixed,
    Scalable,
    IntScalable,
    FpScalable,
}

impl ListFilter {
    pub fn types(self) -> Vec<Mvt> {
        match self {
            Self::All => Mvt::all().collect(),
            Self::Integer => Mvt::integer_valuetypes().collect(),
            Self::Fp => Mvt::fp_valuetypes().collect(),
            Self::Vector => Mvt::vector_valuetypes().collect(),
            Self::Fixed => Mvt::fixed_vector_valuetypes().collect(),
            Self::Scalable => Mvt::scalable_vector_valuetypes().collect(),
            Self::IntScalable => Mvt::integer_scalable_vector_valuetypes().collect(),
            Self::FpScalable => Mvt::fp_scalable_vector_valuetypes().collect(),
        }
    }
}

pub struct ListArgs {
    pub filter: ListFilter,
    pub json: bool,
    pub color: bool,
}

pub fn render(args: &ListArgs) -> String {
    let types = args.filter.types();
    if args.json {
        let summaries: Vec<TypeSummary> = types
            .into_iter()
            .map(|vt| TypeSummary::of(&Evt::from(vt)))
            .collect();
        return super::to_json(&summaries);
    }
    dump_table(types, Colors::new(args.color))
}

pub fn run(args: ListArgs) {
    print!("{}", render(&args));
}
