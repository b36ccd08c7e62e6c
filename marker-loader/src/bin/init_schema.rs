//! Drops and recreates the marker index with its geo_point mapping.
//!
//! Usage: `marker-init-schema`

use dotenv::dotenv;
use marker_loader::config::init_tracing;
use marker_loader::{Dependencies, IngestError, LoaderAppError, LoaderSettings};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), LoaderAppError> {
    dotenv().ok();

    init_tracing("marker-init-schema");

    let settings = LoaderSettings::from_env(None);
    let deps = Dependencies::new(&settings).await?;

    if let Err(e) = deps.index_manager().reset().await {
        error!(error = %e, "Failed to reset marker index");
        return Err(IngestError::from(e).into());
    }

    info!("Marker index initialized");
    Ok(())
}
