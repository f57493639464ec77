use std::sync::Arc;

use home_assist::config::ServerConfig;
use home_assist::server;
use home_assist::store::{JsonFileBackend, StorageBackend};
use home_assist::tasks::TaskStore;
use home_assist::workers::WorkerStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env();

    eprintln!("🏠 HomeAssist v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Workers API: http://0.0.0.0:{}/workers", config.port);
    eprintln!("   Tasks API:   http://0.0.0.0:{}/tasks", config.port);
    eprintln!("   Data dir:    {}", config.data_dir.display());
    eprintln!("   Frontend:    {}\n", config.public_dir.display());

    tokio::fs::create_dir_all(&config.data_dir).await?;

    let backend: Arc<dyn StorageBackend> = Arc::new(JsonFileBackend::new(config.data_dir.clone()));
    let workers = Arc::new(WorkerStore::new(Arc::clone(&backend)));
    let tasks = Arc::new(TaskStore::new(backend));

    let app = server::app(workers, tasks, &config.public_dir);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Server running on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
