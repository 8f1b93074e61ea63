//! Bundled resources
//!
//! Defaults that ship with the program itself rather than living on the
//! user's filesystem. Resources are addressed by name, with or without a
//! leading `/`.

use std::borrow::Cow;
use std::io;
use std::path::PathBuf;

/// A read-only set of named text resources packaged with the program.
pub trait Bundle {
    /// Open `resource` and return its full text.
    ///
    /// A missing resource is reported as `io::ErrorKind::NotFound`.
    fn open(&self, resource: &str) -> io::Result<Cow<'_, str>>;
}

fn normalize(resource: &str) -> &str {
    resource.trim_start_matches('/')
}

fn not_found(resource: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("resource not bundled: /{}", normalize(resource)),
    )
}

/// Resources compiled into the binary, typically with `include_str!`:
///
/// ```
/// use propfile::bundle::EmbeddedBundle;
///
/// const DEFAULTS: &[(&str, &str)] = &[("app.properties", "greeting=hello\n")];
/// let bundle = EmbeddedBundle::new(DEFAULTS);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedBundle {
    entries: &'static [(&'static str, &'static str)],
}

impl EmbeddedBundle {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }
}

impl Bundle for EmbeddedBundle {
    fn open(&self, resource: &str) -> io::Result<Cow<'_, str>> {
        let wanted = normalize(resource);
        self.entries
            .iter()
            .find(|&&(name, _)| normalize(name) == wanted)
            .map(|&(_, content)| Cow::Borrowed(content))
            .ok_or_else(|| not_found(resource))
    }
}

/// Resources read from a directory installed alongside the program.
#[derive(Debug, Clone)]
pub struct DirBundle {
    root: PathBuf,
}

impl DirBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<executable dir>/<dir_name>`.
    pub fn beside_executable(dir_name: &str) -> io::Result<Self> {
        let exe = std::env::current_exe()?;
        let exe_dir = exe.parent().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("executable has no parent directory: {}", exe.display()),
            )
        })?;
        Ok(Self::new(exe_dir.join(dir_name)))
    }
}

impl Bundle for DirBundle {
    fn open(&self, resource: &str) -> io::Result<Cow<'_, str>> {
        let path = self.root.join(normalize(resource));
        let bytes = std::fs::read(&path)?;
        String::from_utf8(bytes)
            .map(Cow::Owned)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
