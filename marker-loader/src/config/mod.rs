//! Configuration and dependency wiring for the marker loader.

mod dependencies;
mod logging;
mod settings;

pub use dependencies::Dependencies;
pub use logging::init_tracing;
pub use settings::{resolve_host_url, LoaderSettings};
