//! Global file source: `<home>/<namespace>/<name>.properties`.

use crate::loader::merge::merge_policy::{Layer, Resolved};
use crate::loader::sources::apply_override;
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// The current user's home directory, if the platform reports one.
pub fn user_home() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Path of the global override under `home`.
pub fn global_path(home: &Path, namespace: &str, filename: &str) -> PathBuf {
    home.join(namespace).join(filename)
}

/// Merge the global override into `resolved` if it exists.
pub fn apply(resolved: &mut Resolved, home: Option<&Path>, namespace: &str, filename: &str) {
    match home {
        Some(home) => {
            apply_override(resolved, Layer::Global, &global_path(home, namespace, filename));
        }
        None => {
            let location = format!("~/{}/{}", namespace, filename);
            resolved.skip(Layer::Global, &location);
        }
    }
}
