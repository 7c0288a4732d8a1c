pub mod bridge;
pub mod derive;
pub mod list;
pub mod show;

#[cfg(test)]
mod derive_tests;

use std::fmt::Display;

/// Report a command failure and exit with status 1.
pub(crate) fn fail(err: impl Display) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}

/// Pretty-printed JSON followed by a newline.
pub(crate) fn to_json(value: &impl serde::Serialize) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(mut json) => {
            json.push('\n');
            json
        }
        Err(err) => fail(err),
    }
}
