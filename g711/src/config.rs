use std::env;
use std::path::{Path, PathBuf};

use g711_core::Law;
use serde::Deserialize;
use thiserror::Error;

const FILE_NAME: &str = "g711.toml";

#[derive(Deserialize, Default, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    law: Option<Law>,
    block_size: Option<usize>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parsing {}: {source}", .path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
    #[error("locating config directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
}

fn set_env<T: ToString>(name: &str, value: T) {
    env::set_var(name, value.to_string());
}

fn set_env_option<T: ToString>(name: &str, value: Option<T>) {
    if let Some(value) = value {
        set_env(name, value)
    }
}

pub fn load_into_env(config: &Config) {
    set_env_option("G711_LAW", config.law);
    set_env_option("G711_BLOCK_SIZE", config.block_size);
}

fn parse(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

fn load_file(path: &Path) -> Result<Option<Config>, ConfigError> {
    log::debug!("looking for config in {}", path.display());

    let Ok(contents) = std::fs::read_to_string(path) else {
        return Ok(None);
    };

    let config = parse(&contents)
        .map_err(|source| ConfigError::Parse { path: path.to_owned(), source })?;

    log::info!("reading config from {}", path.display());
    Ok(Some(config))
}

pub fn read() -> Result<Option<Config>, ConfigError> {
    // try current directory first
    if let Some(config) = load_file(Path::new(FILE_NAME))? {
        return Ok(Some(config));
    }

    // otherwise try xdg config dirs
    let dirs = xdg::BaseDirectories::new()?;
    if let Some(path) = dirs.find_config_file(FILE_NAME) {
        return load_file(&path);
    }

    // found nothing
    Ok(None)
}
