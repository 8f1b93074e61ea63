//! CLI route: builds the loader from arguments and renders the result.

use crate::bundle::DirBundle;
use crate::cli::parse::Cli;
use crate::cli::presentation::{format_properties_json, format_properties_text};
use crate::error::PropertyError;
use crate::loader::{PropertyLoader, DEFAULT_NAMESPACE};
use crate::logging::{parse_module_level, LoggingConfig};
use tracing::info;

/// Bundled resources directory looked up next to the executable.
pub const RESOURCES_DIR: &str = "resources";

/// Runtime context for one CLI invocation.
pub struct RunContext {
    loader: PropertyLoader<DirBundle>,
}

impl RunContext {
    pub fn new(cli: &Cli) -> Result<Self, PropertyError> {
        let bundle = match &cli.resources {
            Some(dir) => DirBundle::new(dir),
            None => DirBundle::beside_executable(RESOURCES_DIR).map_err(|source| {
                PropertyError::UnreadableDefaults {
                    resource: RESOURCES_DIR.to_string(),
                    source,
                }
            })?,
        };
        let namespace = cli.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE);

        let mut loader = PropertyLoader::with_namespace(bundle, namespace);
        if let Some(dir) = &cli.workspace {
            loader = loader.working_dir(dir);
        }
        Ok(Self { loader })
    }

    pub fn loader(&self) -> &PropertyLoader<DirBundle> {
        &self.loader
    }

    /// Read `cli.name` and format it for stdout.
    pub fn execute(&self, cli: &Cli) -> Result<String, PropertyError> {
        let resolved = self.loader.read_with_origins(&cli.name)?;
        info!(
            name = %cli.name,
            namespace = self.loader.namespace(),
            entries = resolved.properties.len(),
            "Properties resolved"
        );

        let output = if cli.format == "json" {
            format_properties_json(&resolved, cli.origins)
        } else {
            format_properties_text(&resolved, cli.origins)
        };
        Ok(output)
    }
}

/// Build logging configuration from CLI flags.
/// Precedence: explicit flags override `--verbose` override defaults.
pub fn build_logging_config(cli: &Cli) -> Result<LoggingConfig, PropertyError> {
    let mut config = LoggingConfig::default();
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.parse()?;
    }
    if cli.no_color {
        config.color = false;
    }
    for arg in &cli.log_modules {
        let (target, level) = parse_module_level(arg)?;
        config.modules.insert(target, level);
    }
    Ok(config)
}
