use anyhow::Result;
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::Duration;
use tracing::{error, info, warn};

/// Watches the schema directory and invokes `on_change` after each change,
/// so edits to the sample documents show up without a restart.
pub struct SchemaWatcher {
    _watcher: RecommendedWatcher,
}

impl SchemaWatcher {
    pub fn new<F>(dir: &Path, on_change: F) -> Result<Self>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(tx, Config::default())?;

        if dir.exists() {
            watcher.watch(dir, RecursiveMode::Recursive)?;
            info!("Watching schema directory: {}", dir.display());
        } else {
            warn!(
                "Schema directory does not exist, skipping watch: {}",
                dir.display()
            );
        }

        std::thread::spawn(move || {
            loop {
                match rx.recv() {
                    Ok(Ok(_event)) => {
                        // Debounce slightly by waiting
                        std::thread::sleep(Duration::from_millis(100));
                        info!("Schema change detected, reloading...");
                        on_change();
                    }
                    Ok(Err(e)) => error!("Watch error: {:?}", e),
                    Err(e) => {
                        error!("Watch channel error: {:?}", e);
                        break;
                    }
                }
            }
        });

        Ok(Self { _watcher: watcher })
    }
}
