//! Layer sources: bundled defaults, local directory, per-user global directory.

use crate::loader::merge::merge_policy::{Layer, Resolved};
use crate::properties::Properties;
use std::io;
use std::path::Path;
use tracing::warn;

pub mod bundled;
pub mod global_file;
pub mod local_file;

/// Read an optional override file in one shot.
///
/// `Ok(None)` means the file does not exist. The handle is closed before
/// returning on every path. Invalid UTF-8 sequences become U+FFFD so the
/// rest of the file still loads.
pub(crate) fn read_override(path: &Path) -> io::Result<Option<String>> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                location = %path.display(),
                valid_up_to = e.utf8_error().valid_up_to(),
                "Replacing invalid UTF-8 in properties file"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    Ok(Some(text))
}

/// Merge an optional override file into `resolved`, or record why it was skipped.
pub(crate) fn apply_override(resolved: &mut Resolved, layer: Layer, path: &Path) {
    let location = path.display().to_string();
    match read_override(path) {
        Ok(Some(text)) => {
            let loaded = Properties::parse_from(&text, &location);
            resolved.apply(layer, &location, loaded);
        }
        Ok(None) => resolved.skip(layer, &location),
        Err(e) => resolved.skip_unreadable(layer, &location, e.to_string()),
    }
}
