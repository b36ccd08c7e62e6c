//! Marker Loader Main Entry Point
//!
//! Loads the historical marker CSV into the `thc` search index.
//!
//! Usage: `marker-loader [csv_path]`

use dotenv::dotenv;
use marker_loader::config::init_tracing;
use marker_loader::source::CsvSource;
use marker_loader::{Dependencies, LoaderAppError, LoaderSettings};
use std::env;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), LoaderAppError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing("marker-loader");

    info!("Starting marker load");

    let settings = LoaderSettings::from_env(env::args().nth(1));
    let deps = Dependencies::new(&settings).await?;

    let mut source = match CsvSource::from_path(&settings.csv_path) {
        Ok(source) => source,
        Err(e) => {
            error!(error = %e, "Failed to open marker CSV");
            return Err(e.into());
        }
    };

    match deps.loader().run(source.records()).await {
        Ok(summary) => {
            info!(
                documents_written = summary.documents_written,
                rows_rejected = summary.rows_rejected,
                "Marker load completed successfully"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Marker load failed");
            Err(e.into())
        }
    }
}
