use std::path::PathBuf;

const APP_DIR_NAME: &str = "usage-heatmap";

/// `$XDG_CONFIG_HOME/usage-heatmap`, falling back to `$HOME/.config/usage-heatmap`.
pub fn config_dir() -> Result<PathBuf, String> {
    if let Some(base) = std::env::var_os("XDG_CONFIG_HOME").filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(base).join(APP_DIR_NAME));
    }
    let home = std::env::var("HOME").map_err(|err| format!("resolve HOME: {}", err))?;
    Ok(PathBuf::from(home).join(".config").join(APP_DIR_NAME))
}
