//! CLI domain: parse, route, output, and presentation only.
//! No loading logic here; the route builds a `PropertyLoader` and formats its result.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use presentation::{format_properties_json, format_properties_text};
pub use route::{build_logging_config, RunContext, RESOURCES_DIR};
