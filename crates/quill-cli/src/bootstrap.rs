use quill_config::QuillConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (with `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<QuillConfig> {
    let mut config = QuillConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags)?;
    Ok(config)
}

fn apply_overrides(config: &mut QuillConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(db) = &flags.db {
        config.database.path.clone_from(db);
        config.validate()?;
    }
    Ok(())
}
