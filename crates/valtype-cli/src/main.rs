mod cli;
mod commands;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{BridgeParams, DeriveParams, ListParams, ShowParams, build_cli};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("VALTYPE_LOG").unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_logging();
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("list", m)) => {
            let params = ListParams::from_matches(m);
            commands::list::run(params.into());
        }
        Some(("show", m)) => {
            let params = ShowParams::from_matches(m);
            commands::show::run(params.into());
        }
        Some(("derive", m)) => {
            let params = DeriveParams::from_matches(m);
            commands::derive::run(params.into());
        }
        Some(("bridge", m)) => {
            let params = BridgeParams::from_matches(m);
            commands::bridge::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
