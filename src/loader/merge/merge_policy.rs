//! Merge rules: layer precedence, overwrite semantics, per-key origins.

use crate::properties::Properties;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, trace, warn};

/// A configuration source, in ascending precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Bundled,
    Local,
    Global,
}

impl Layer {
    fn label(self) -> &'static str {
        match self {
            Layer::Bundled => "Bundled",
            Layer::Local => "Local",
            Layer::Global => "Global",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Layer::Bundled => "bundled",
            Layer::Local => "local",
            Layer::Global => "global",
        })
    }
}

/// What happened to one layer during a read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LayerOutcome {
    Loaded { entries: usize },
    Skipped,
    Unreadable { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerReport {
    pub layer: Layer,
    pub location: String,
    pub outcome: LayerOutcome,
}

/// Merged properties together with where each value came from.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Resolved {
    pub properties: Properties,
    origins: BTreeMap<String, Layer>,
    reports: Vec<LayerReport>,
}

impl Resolved {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer whose value won for `key`.
    pub fn origin(&self, key: &str) -> Option<Layer> {
        self.origins.get(key).copied()
    }

    pub fn origins(&self) -> impl Iterator<Item = (&str, Layer)> {
        self.origins.iter().map(|(k, layer)| (k.as_str(), *layer))
    }

    pub fn reports(&self) -> &[LayerReport] {
        &self.reports
    }

    pub fn into_properties(self) -> Properties {
        self.properties
    }

    /// Merge a loaded layer over everything applied so far.
    pub fn apply(&mut self, layer: Layer, location: &str, loaded: Properties) {
        debug!(
            layer = %layer,
            location = location,
            entries = loaded.len(),
            "{} properties ({}):\n{}",
            layer.label(),
            location,
            loaded.render_aligned()
        );

        self.properties.merge(&loaded);
        for key in loaded.keys() {
            self.origins.insert(key.to_string(), layer);
        }
        self.reports.push(LayerReport {
            layer,
            location: location.to_string(),
            outcome: LayerOutcome::Loaded {
                entries: loaded.len(),
            },
        });
    }

    /// Record a layer whose source does not exist.
    pub fn skip(&mut self, layer: Layer, location: &str) {
        trace!(layer = %layer, location = location, "No {} properties ({})", layer, location);
        self.reports.push(LayerReport {
            layer,
            location: location.to_string(),
            outcome: LayerOutcome::Skipped,
        });
    }

    /// Record an override that exists but could not be read.
    pub fn skip_unreadable(&mut self, layer: Layer, location: &str, reason: String) {
        warn!(
            layer = %layer,
            location = location,
            reason = %reason,
            "Ignoring unreadable {} properties",
            layer
        );
        self.reports.push(LayerReport {
            layer,
            location: location.to_string(),
            outcome: LayerOutcome::Unreadable { reason },
        });
    }
}
