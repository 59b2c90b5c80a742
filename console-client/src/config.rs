use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "tictactoe_console.yaml";
const MAX_THINK_DELAY_MS: u64 = 5000;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub type ClientConfigManager =
    ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer>;

pub fn get_config_manager(path_override: Option<PathBuf>) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path_override.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub opponent_think_delay_ms: u64,
    #[serde(default = "default_show_scores")]
    pub show_scores: bool,
}

fn default_show_scores() -> bool {
    true
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.opponent_think_delay_ms > MAX_THINK_DELAY_MS {
            return Err(format!(
                "opponent_think_delay_ms must not exceed {}",
                MAX_THINK_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            opponent_think_delay_ms: 400,
            show_scores: true,
        }
    }
}
