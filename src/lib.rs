//! Propfile: Layered `.properties` Loading
//!
//! Reads a named `.properties` configuration from bundled defaults, a local
//! override in the working directory and a per-user global override, later
//! layers overwriting earlier ones.

pub mod bundle;
pub mod cli;
pub mod error;
pub mod loader;
pub mod logging;
pub mod properties;

pub use bundle::{Bundle, DirBundle, EmbeddedBundle};
pub use error::PropertyError;
pub use loader::{Layer, PropertyLoader, Resolved, DEFAULT_NAMESPACE};
pub use properties::Properties;
