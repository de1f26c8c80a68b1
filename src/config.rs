use crate::cmds::Cmd;
use crate::error::{Error, ErrorKind, Result};
use crate::format::Formats;
use crate::ui::Theme;

use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use termion::event::Key;

pub type KeyMap = HashMap<Key, Cmd>;

const CONFIG_PATH_ENV_VAR: &str = "COSMOS_CONFIG_FILE";

pub fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("cosmos").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".cosmos.toml"));
    }

    locations
}

/// Loads the configuration from `path` if given, otherwise from the first
/// existing default location. Falls back to built-in defaults when no
/// file is found.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::from_file(path);
    }

    match find_configfile_locations().iter().find(|p| p.is_file()) {
        Some(path) => Config::from_file(path),
        None => {
            log::info!("no configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    tick_rate: u64,
    format: Formats,
    theme: Theme,
}

impl Default for ConfigFile {
    fn default() -> Self {
        ConfigFile {
            tick_rate: 1000,
            format: Formats::default(),
            theme: Theme::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub key_map: KeyMap,
    pub tick_rate: Duration,
    pub format: Formats,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Config {
        Config::from(ConfigFile::default())
    }
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Config {
        Config {
            key_map: default_key_map(),
            tick_rate: Duration::from_millis(file.tick_rate),
            format: file.format,
            theme: file.theme,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => Error::new(
                ErrorKind::ConfigMissing,
                &path.display().to_string(),
            ),
            _ => Error::from(err),
        })?;

        log::info!("loading configuration from {}", path.display());

        Config::from_toml_str(&content).map_err(|err| {
            let msg = format!(
                "{}: {}",
                path.display(),
                err.message.as_deref().unwrap_or_default()
            );
            err.with_msg(&msg)
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Config> {
        let file: ConfigFile = toml::from_str(content)?;

        if file.tick_rate == 0 {
            return Err(Error::new(
                ErrorKind::ConfigParse,
                "tick_rate must be greater than zero",
            ));
        }
        file.format.validate()?;
        file.theme.validate()?;

        Ok(Config::from(file))
    }
}

fn default_key_map() -> KeyMap {
    let mut key_map = KeyMap::new();

    key_map.insert(Key::Char('l'), Cmd::NextDay);
    key_map.insert(Key::Right, Cmd::NextDay);
    key_map.insert(Key::Char('h'), Cmd::PrevDay);
    key_map.insert(Key::Left, Cmd::PrevDay);
    key_map.insert(Key::Char('j'), Cmd::NextWeek);
    key_map.insert(Key::Down, Cmd::NextWeek);
    key_map.insert(Key::Char('k'), Cmd::PrevWeek);
    key_map.insert(Key::Up, Cmd::PrevWeek);
    key_map.insert(Key::Char('t'), Cmd::FocusToday);
    key_map.insert(Key::Char('\n'), Cmd::Select);
    key_map.insert(Key::Char(' '), Cmd::Select);
    key_map.insert(Key::Char('q'), Cmd::Exit);
    key_map.insert(Key::Esc, Cmd::Exit);
    key_map.insert(Key::Ctrl('c'), Cmd::Exit);

    key_map
}
