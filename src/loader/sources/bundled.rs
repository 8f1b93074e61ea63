//! Bundled defaults source: `/<name>.properties` inside the program's bundle.
//!
//! This layer is mandatory. Without it the read is an unsupported operation.

use crate::bundle::Bundle;
use crate::error::PropertyError;
use crate::loader::merge::merge_policy::{Layer, Resolved};
use crate::properties::Properties;
use std::io;
use tracing::trace;

/// Resource name for a properties file inside a bundle.
pub fn resource_name(filename: &str) -> String {
    format!("/{}", filename)
}

/// Merge the bundled defaults into `resolved`.
pub fn apply<B: Bundle + ?Sized>(
    resolved: &mut Resolved,
    bundle: &B,
    filename: &str,
) -> Result<(), PropertyError> {
    let resource = resource_name(filename);
    match bundle.open(&resource) {
        Ok(text) => {
            let loaded = Properties::parse_from(&text, &resource);
            resolved.apply(Layer::Bundled, &resource, loaded);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            trace!(location = %resource, "No bundled properties ({})", resource);
            Err(PropertyError::MissingDefaults { resource })
        }
        Err(source) => Err(PropertyError::UnreadableDefaults { resource, source }),
    }
}
