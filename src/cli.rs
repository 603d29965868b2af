//! CLI domain: parse, route, output, and presentation only.
//! No hashing logic; the route dispatches to the hashing API.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::{map_error, usage};
pub use parse::{Cli, ModeArg};
pub use presentation::{format_outcome_json, format_outcome_text, HashOutcome};
pub use route::RunContext;
