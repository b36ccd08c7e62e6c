//! Environment-driven settings.

use std::env;
use std::path::PathBuf;

use tracing::info;

/// Default search index host.
const DEFAULT_HOST: &str = "localhost";

/// Default port when the host is given without one.
const DEFAULT_PORT: u16 = 9200;

/// Default location of the marker CSV file.
const DEFAULT_CSV_PATH: &str = "data/markers.csv";

/// Settings for a loader run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderSettings {
    /// URL of the search index node.
    pub url: String,
    /// Path of the marker CSV file.
    pub csv_path: PathBuf,
}

impl LoaderSettings {
    /// Read settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ELASTICSEARCH_HOST`: Host name or full URL of the node (default: localhost)
    /// - `MARKER_CSV_PATH`: CSV file to load (default: data/markers.csv)
    ///
    /// `csv_arg`, the first command line argument, overrides `MARKER_CSV_PATH`.
    pub fn from_env(csv_arg: Option<String>) -> Self {
        let host = env::var("ELASTICSEARCH_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let csv_path = csv_arg
            .or_else(|| env::var("MARKER_CSV_PATH").ok())
            .unwrap_or_else(|| DEFAULT_CSV_PATH.to_string());

        let settings = Self {
            url: resolve_host_url(&host),
            csv_path: PathBuf::from(csv_path),
        };

        info!(
            url = %settings.url,
            csv_path = %settings.csv_path.display(),
            "Loaded settings"
        );
        settings
    }
}

/// Turn a host setting into a node URL.
///
/// A value with a scheme is used as is. A bare host gets `http://` and, when
/// it has no port, the default port 9200.
pub fn resolve_host_url(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    let host = if host.is_empty() { DEFAULT_HOST } else { host };

    if host.contains("://") {
        return host.to_string();
    }
    if host.rsplit_once(':').is_some_and(|(_, port)| port.parse::<u16>().is_ok()) {
        return format!("http://{}", host);
    }
    format!("http://{}:{}", host, DEFAULT_PORT)
}
