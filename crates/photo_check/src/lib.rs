pub mod database;
pub mod report;
pub mod types;

pub use database::{fetch_owner_photos, fetch_photos_with, Database};
pub use report::write_outcome;
pub use types::{Config, ConnectionString, PhotoSummary};

/// Loads the config from the environment and fetches the owner's photos.
/// Every failure, config included, comes back as the one error value.
pub async fn collect_photos() -> anyhow::Result<Vec<PhotoSummary>> {
    let config = Config::from_env()?;
    fetch_owner_photos(&config).await
}
