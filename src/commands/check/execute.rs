use crate::config::Settings;
use crate::utils::logger;

/// Resolution already happened while loading settings; reaching this point
/// means the declarations are valid.
pub fn execute(settings: &Settings) -> anyhow::Result<()> {
    let config = settings.config();
    logger::success(&format!(
        "Configuration is valid: base '{}', {} plugin(s), {} alias(es)",
        config.base_path(),
        config.plugins().len(),
        config.alias_map().len()
    ));
    Ok(())
}
