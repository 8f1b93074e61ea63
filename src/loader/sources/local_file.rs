//! Local file source: `<name>.properties` in the working directory.

use crate::loader::merge::merge_policy::{Layer, Resolved};
use crate::loader::sources::apply_override;
use std::path::{Path, PathBuf};

/// Path of the local override.
///
/// Without an explicit directory the path stays relative and resolves against
/// the process working directory.
pub fn local_path(working_dir: Option<&Path>, filename: &str) -> PathBuf {
    match working_dir {
        Some(dir) => dir.join(filename),
        None => PathBuf::from(filename),
    }
}

/// Merge the local override into `resolved` if it exists.
pub fn apply(resolved: &mut Resolved, working_dir: Option<&Path>, filename: &str) {
    apply_override(resolved, Layer::Local, &local_path(working_dir, filename));
}
