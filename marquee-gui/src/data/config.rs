use std::{
    fs::{self, File},
    io,
    path::PathBuf,
};

use druid::{Data, Lens};
use marquee_core::util::proxy_from_env;
use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};

use crate::data::MovieLink;

const APP_NAME: &str = "Marquee";
const CONFIG_FILENAME: &str = "config.json";

#[derive(Clone, Debug, Default, Data, Lens, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    pub last_movie: Option<MovieLink>,
}

impl Config {
    fn app_dirs() -> Option<AppDirs> {
        const USE_XDG_ON_MACOS: bool = false;

        AppDirs::new(Some(APP_NAME), USE_XDG_ON_MACOS)
    }

    fn config_dir() -> Option<PathBuf> {
        Self::app_dirs().map(|dirs| dirs.config_dir)
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILENAME))
    }

    pub fn load() -> Option<Config> {
        let path = Self::config_path()?;
        let file = File::open(&path).ok()?;
        log::info!("loading config: {:?}", &path);
        serde_json::from_reader(file)
            .map_err(|err| log::error!("failed to read config: {err}"))
            .ok()
    }

    pub fn save(&self) {
        if let Err(err) = self.try_save() {
            log::error!("failed to save config: {err}");
        }
    }

    fn try_save(&self) -> io::Result<()> {
        let (Some(dir), Some(path)) = (Self::config_dir(), Self::config_path()) else {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no config directory"));
        };
        fs::create_dir_all(dir)?;
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(file, self)?;
        log::info!("saved config: {:?}", &path);
        Ok(())
    }

    pub fn proxy() -> Option<String> {
        proxy_from_env()
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Data, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.last_movie, None);
    }

    #[test]
    fn remembers_last_movie() {
        let config: Config =
            serde_json::from_str(r#"{"theme": "Dark", "last_movie": {"id": 59748}}"#).unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.last_movie, Some(MovieLink { id: 59748 }));
    }
}
