use photo_check::report::failure_reason;
use photo_check::{collect_photos, write_outcome};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    // stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!("🚀 Starting photo check");

    let outcome = collect_photos().await;
    if let Err(e) = &outcome {
        error!("Photo check failed: {}", failure_reason(e));
    }

    let stdout = std::io::stdout();
    if let Err(e) = write_outcome(&mut stdout.lock(), &outcome) {
        error!("Failed to write report: {}", e);
    }
}
