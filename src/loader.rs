//! Layered property loading
//!
//! Reads `<name>.properties` from three layers and merges them, later layers
//! overwriting earlier ones:
//!
//! 1. bundled: `/<name>.properties` in the program's [`Bundle`] (mandatory)
//! 2. local:   `<name>.properties` in the working directory
//! 3. global:  `<home>/<namespace>/<name>.properties`
//!
//! A missing bundled resource aborts the read. Missing overrides are skipped.

use crate::bundle::Bundle;
use crate::error::PropertyError;
use crate::properties::Properties;
use std::path::PathBuf;

mod merge;
mod sources;

pub use merge::merge_policy::{Layer, LayerOutcome, LayerReport, Resolved};

/// Namespace used for the global layer when none is configured.
pub const DEFAULT_NAMESPACE: &str = "namespace-not-set";

const PROPERTIES_EXTENSION: &str = "properties";

/// `app` -> `app.properties`
fn properties_filename(name: &str) -> String {
    format!("{}.{}", name, PROPERTIES_EXTENSION)
}

/// Loads layered properties by logical name.
///
/// Holds no per-read state; `read` can be called any number of times.
#[derive(Debug, Clone)]
pub struct PropertyLoader<B> {
    bundle: B,
    namespace: String,
    working_dir: Option<PathBuf>,
    home_dir: Option<PathBuf>,
}

impl<B: Bundle> PropertyLoader<B> {
    /// Loader with the [`DEFAULT_NAMESPACE`] placeholder.
    ///
    /// The global layer then resolves to `<home>/namespace-not-set/`, which
    /// normally does not exist.
    pub fn new(bundle: B) -> Self {
        Self::with_namespace(bundle, DEFAULT_NAMESPACE)
    }

    pub fn with_namespace(bundle: B, namespace: impl Into<String>) -> Self {
        Self {
            bundle,
            namespace: namespace.into(),
            working_dir: None,
            home_dir: None,
        }
    }

    /// Resolve the local layer against `dir` instead of the process working directory.
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Resolve the global layer against `dir` instead of the user's home directory.
    pub fn home_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(dir.into());
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn local_path(&self, name: &str) -> PathBuf {
        sources::local_file::local_path(self.working_dir.as_deref(), &properties_filename(name))
    }

    /// `None` when no home directory is configured or discoverable.
    pub fn global_path(&self, name: &str) -> Option<PathBuf> {
        self.resolve_home().map(|home| {
            sources::global_file::global_path(&home, &self.namespace, &properties_filename(name))
        })
    }

    /// Read and merge all layers for `name`.
    pub fn read(&self, name: &str) -> Result<Properties, PropertyError> {
        self.read_with_origins(name).map(Resolved::into_properties)
    }

    /// Like [`read`](Self::read), also reporting which layer each value came from.
    pub fn read_with_origins(&self, name: &str) -> Result<Resolved, PropertyError> {
        let filename = properties_filename(name);
        let mut resolved = Resolved::new();

        sources::bundled::apply(&mut resolved, &self.bundle, &filename)?;
        sources::local_file::apply(&mut resolved, self.working_dir.as_deref(), &filename);
        let home = self.resolve_home();
        sources::global_file::apply(&mut resolved, home.as_deref(), &self.namespace, &filename);

        Ok(resolved)
    }

    fn resolve_home(&self) -> Option<PathBuf> {
        self.home_dir.clone().or_else(sources::global_file::user_home)
    }
}
