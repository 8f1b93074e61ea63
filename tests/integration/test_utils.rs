//! Shared test utilities for integration tests
//!
//! Provides isolated directory layouts and serialized access to process-wide
//! state (HOME, working directory).

use propfile::{Bundle, EmbeddedBundle, PropertyLoader};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize HOME and working-directory changes across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Bundled defaults compiled into the test binary
pub const BUNDLED: &[(&str, &str)] = &[
    (
        "app.properties",
        include_str!("../fixtures/resources/app.properties"),
    ),
    (
        "service.properties",
        include_str!("../fixtures/resources/service.properties"),
    ),
];

/// Temporary working directory and home directory with a namespace subdirectory.
pub struct Layout {
    _root: TempDir,
    pub work: PathBuf,
    pub home: PathBuf,
    pub namespace: String,
}

impl Layout {
    pub fn new(namespace: &str) -> Self {
        let root = TempDir::new().unwrap();
        let work = root.path().join("work");
        let home = root.path().join("home");
        std::fs::create_dir_all(&work).unwrap();
        std::fs::create_dir_all(home.join(namespace)).unwrap();
        Self {
            _root: root,
            work,
            home,
            namespace: namespace.to_string(),
        }
    }

    pub fn write_local(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work.join(format!("{}.properties", name));
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn write_global(&self, name: &str, content: &str) -> PathBuf {
        let path = self
            .home
            .join(&self.namespace)
            .join(format!("{}.properties", name));
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn loader(&self) -> PropertyLoader<EmbeddedBundle> {
        self.loader_with(EmbeddedBundle::new(BUNDLED))
    }

    pub fn loader_with<B: Bundle>(&self, bundle: B) -> PropertyLoader<B> {
        PropertyLoader::with_namespace(bundle, self.namespace.as_str())
            .working_dir(&self.work)
            .home_dir(&self.home)
    }
}

/// HOME value captured on entry and put back on drop
struct HomeGuard {
    original: Option<String>,
}

impl HomeGuard {
    fn set(home: &Path) -> Self {
        let original = std::env::var("HOME").ok();
        std::env::set_var("HOME", home);
        Self { original }
    }
}

impl Drop for HomeGuard {
    fn drop(&mut self) {
        match &self.original {
            Some(orig) => std::env::set_var("HOME", orig),
            None => std::env::remove_var("HOME"),
        }
    }
}

/// Working directory captured on entry and put back on drop
struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    fn set(dir: &Path) -> Self {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        Self { original }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Run `f` with HOME pointing at `home`, restoring it afterwards (also on panic)
pub fn with_home_env<F, R>(home: &Path, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let _home = HomeGuard::set(home);
    f()
}

/// Run `f` with the process working directory set to `dir`, restoring it afterwards (also on panic)
pub fn with_current_dir<F, R>(dir: &Path, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let _cwd = CwdGuard::set(dir);
    f()
}
