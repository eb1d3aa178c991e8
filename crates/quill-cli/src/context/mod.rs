use std::path::Path;

use anyhow::Context;
use quill_config::QuillConfig;
use quill_db::service::QuillService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: QuillService,
    pub config: QuillConfig,
}

impl AppContext {
    /// Open the configured database, creating its parent directory first.
    pub async fn init(config: QuillConfig) -> anyhow::Result<Self> {
        if !config.database.is_in_memory() {
            ensure_parent_dir(Path::new(&config.database.path))?;
        }

        let service = QuillService::from_config(&config.database)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;

        Ok(Self { service, config })
    }
}

fn ensure_parent_dir(db_path: &Path) -> anyhow::Result<()> {
    match db_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display())),
        _ => Ok(()),
    }
}
