//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but keep the raw color choice;
//! the `From` impls resolve it against the terminal.

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::bridge::BridgeArgs;
use crate::commands::derive::{DeriveArgs, DeriveOp};
use crate::commands::list::{ListArgs, ListFilter};
use crate::commands::show::ShowArgs;

pub struct ListParams {
    pub filter: ListFilter,
    pub json: bool,
    pub color: ColorChoice,
}

impl ListParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let filter = match m.get_one::<String>("filter").map(|s| s.as_str()) {
            Some("integer") => ListFilter::Integer,
            Some("fp") => ListFilter::Fp,
            Some("vector") => ListFilter::Vector,
            Some("fixed") => ListFilter::Fixed,
            Some("scalable") => ListFilter::Scalable,
            Some("int-scalable") => ListFilter::IntScalable,
            Some("fp-scalable") => ListFilter::FpScalable,
            _ => ListFilter::All,
        };
        Self {
            filter,
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<ListParams> for ListArgs {
    fn from(p: ListParams) -> Self {
        Self {
            filter: p.filter,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ShowParams {
    pub name: String,
    pub json: bool,
}

impl ShowParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            name: parse_name(m),
            json: m.get_flag("json"),
        }
    }
}

impl From<ShowParams> for ShowArgs {
    fn from(p: ShowParams) -> Self {
        Self {
            name: p.name,
            json: p.json,
        }
    }
}

pub struct DeriveParams {
    pub name: String,
    pub op: DeriveOp,
    pub json: bool,
}

impl DeriveParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let op = match m.get_one::<String>("op").map(|s| s.as_str()) {
            Some("half") => DeriveOp::Half,
            Some("to-int") => DeriveOp::ToInteger,
            Some("double") => DeriveOp::Double,
            _ => DeriveOp::Widen,
        };
        Self {
            name: parse_name(m),
            op,
            json: m.get_flag("json"),
        }
    }
}

impl From<DeriveParams> for DeriveArgs {
    fn from(p: DeriveParams) -> Self {
        Self {
            name: p.name,
            op: p.op,
            json: p.json,
        }
    }
}

pub struct BridgeParams {
    pub name: String,
    pub json: bool,
}

impl BridgeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            name: parse_name(m),
            json: m.get_flag("json"),
        }
    }
}

impl From<BridgeParams> for BridgeArgs {
    fn from(p: BridgeParams) -> Self {
        Self {
            name: p.name,
            json: p.json,
        }
    }
}

fn parse_name(m: &ArgMatches) -> String {
    m.get_one::<String>("name").cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
