use std::fs;
use std::path::Path;

use crate::constants::CONFIG_FILENAME;

use super::models::Config;

pub(super) fn load_from_path(path: &Path) -> Config {
    let mut current = path.to_path_buf();
    if current.is_file() {
        current.pop();
    }

    loop {
        let config_toml = current.join(CONFIG_FILENAME);
        if config_toml.exists() {
            if let Ok(content) = fs::read_to_string(&config_toml) {
                if let Ok(mut config) = toml::from_str::<Config>(&content) {
                    config.config_file_path = Some(config_toml);
                    return config;
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    Config::default()
}
