use clap::Parser;
use formant::api::ApiState;
use formant::catalog::SchemaCatalog;
use formant::cli::Cli;
use formant::config::Settings;
use formant::watcher::SchemaWatcher;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting Formant Schema Playground on {}:{}", host, port);

    let catalog = SchemaCatalog::load(&settings.schemas.dir)?;
    let catalog = Arc::new(RwLock::new(catalog));

    // Reload the catalog when sample schemas change on disk
    let watch_dir = settings.schemas.dir.clone();
    let reload_dir = settings.schemas.dir.clone();
    let catalog_for_watcher = catalog.clone();
    let _watcher = SchemaWatcher::new(&watch_dir, move || {
        match SchemaCatalog::load(&reload_dir) {
            Ok(new_catalog) => {
                let mut w = catalog_for_watcher.blocking_write();
                *w = new_catalog;
                info!("Schema catalog reloaded successfully");
            }
            Err(e) => error!("Failed to reload schema catalog: {}", e),
        }
    })?;

    let app = formant::create_app(ApiState { catalog });

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
