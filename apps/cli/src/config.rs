use std::fs;
use std::path::{Path, PathBuf};

use heatmap_app::HeatmapConfig;
use serde::{Deserialize, Serialize};

use crate::dirs::config_dir;

const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_PORT: u16 = 3333;
const DEFAULT_DATA_PATH: &str = "data.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub port: u16,
    pub data_path: PathBuf,
    pub heatmap: HeatmapConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            heatmap: HeatmapConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: CliConfig,
    pub file: PathBuf,
    pub created: bool,
}

/// Reads an explicit config file, or the per-user one (created with
/// defaults on first run). A `.json` file is a bare heatmap config.
pub fn load(explicit: Option<&Path>) -> Result<ConfigLoad, String> {
    match explicit {
        Some(path) => Ok(ConfigLoad {
            config: read_file(path)?,
            file: path.to_path_buf(),
            created: false,
        }),
        None => load_or_create(),
    }
}

fn read_file(path: &Path) -> Result<CliConfig, String> {
    if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
        let heatmap = HeatmapConfig::load(path).map_err(|err| err.to_string())?;
        return Ok(CliConfig {
            heatmap,
            ..CliConfig::default()
        });
    }
    let contents = fs::read_to_string(path)
        .map_err(|err| format!("read config {}: {}", path.display(), err))?;
    parse_toml(&contents).map_err(|err| format!("parse config {}: {}", path.display(), err))
}

pub fn parse_toml(contents: &str) -> Result<CliConfig, toml::de::Error> {
    toml::from_str(contents)
}

fn load_or_create() -> Result<ConfigLoad, String> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir)
        .map_err(|err| format!("create config dir {}: {}", dir.display(), err))?;
    let file = dir.join(CONFIG_FILE_NAME);

    if file.exists() {
        let config = read_file(&file)?;
        return Ok(ConfigLoad {
            config,
            file,
            created: false,
        });
    }

    let config = CliConfig::default();
    let contents =
        toml::to_string_pretty(&config).map_err(|err| format!("serialize config: {}", err))?;
    fs::write(&file, contents)
        .map_err(|err| format!("write config {}: {}", file.display(), err))?;

    Ok(ConfigLoad {
        config,
        file,
        created: true,
    })
}
