use crate::error::{ContribError, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Token file looked up in the current working directory.
pub const TOKEN_FILE: &str = "token.txt";

/// Config file looked up in the home directory.
pub const CONFIG_FILE_NAME: &str = ".oss-contrib.yml";

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub github_token: Option<String>,
    pub exclude_orgs: Vec<String>,
}

impl Config {
    pub fn token(&self) -> Option<&str> {
        self.github_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

pub fn load_config() -> Result<Config> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            debug!("No home directory, using default config");
            Ok(Config::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{} not found, using default config", path.display());
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(ContribError::Auth(format!(
                "Cannot read {}: {e}",
                path.display()
            )))
        }
    };

    if contents.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(&contents)
        .map_err(|e| ContribError::Auth(format!("Cannot parse {}: {e}", path.display())))
}

/// Picks the access token: the flag, then `token_file`, then the config file.
pub fn resolve_token(flag: Option<&str>, token_file: &Path, config: &Config) -> Result<String> {
    if let Some(token) = flag.map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(token.to_string());
    }

    match fs::read_to_string(token_file) {
        Ok(contents) => {
            let token = contents.trim();
            if token.is_empty() {
                return Err(ContribError::Auth(format!(
                    "{} is empty",
                    token_file.display()
                )));
            }
            debug!("Using token from {}", token_file.display());
            return Ok(token.to_string());
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(ContribError::Auth(format!(
                "Cannot read {}: {e}",
                token_file.display()
            )))
        }
    }

    config.token().map(str::to_string).ok_or_else(|| {
        ContribError::Auth(format!(
            "No GitHub token found. Pass --token, create ./{TOKEN_FILE}, or set github_token in ~/{CONFIG_FILE_NAME}"
        ))
    })
}
