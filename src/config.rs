use crate::radar::{self, RadarConfig};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

/// Screen corner the overlay sticks to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    #[strum(serialize = "top-left", serialize = "TopLeft", serialize = "tl")]
    TopLeft,
    #[strum(serialize = "top-right", serialize = "TopRight", serialize = "tr")]
    TopRight,
    #[strum(serialize = "bottom-left", serialize = "BottomLeft", serialize = "bl")]
    BottomLeft,
    #[default]
    #[strum(serialize = "bottom-right", serialize = "BottomRight", serialize = "br")]
    BottomRight,
}

impl Corner {
    pub fn is_top(&self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RadarSettings {
    pub frames: usize,
    pub speed: f64,
    /// Diameter in pixels. Unset means a third of the smaller monitor side.
    pub size: Option<f64>,
    pub inset: f64,
}

impl Default for RadarSettings {
    fn default() -> Self {
        Self {
            frames: radar::DEFAULT_SLOT_COUNT,
            speed: radar::DEFAULT_SPEED,
            size: None,
            inset: radar::DEFAULT_INSET,
        }
    }
}

impl RadarSettings {
    pub fn resolve(&self, viewport: Option<(f64, f64)>) -> RadarConfig {
        let size = self
            .size
            .or_else(|| viewport.map(|(w, h)| (w.min(h) / 3.0).floor()))
            .unwrap_or(radar::DEFAULT_SIZE);
        RadarConfig {
            slot_count: self.frames,
            speed: self.speed,
            size,
            inset: self.inset,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OverlaySettings {
    pub corner: Corner,
    pub margin: i32,
    pub show_on_start: bool,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            corner: Corner::BottomRight,
            margin: 20,
            show_on_start: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub radar: RadarSettings,
    #[serde(default)]
    pub overlay: OverlaySettings,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("dev", "lagradar", "lagradar").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(
            config::Environment::with_prefix("LAGRADAR")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                if is_reload_trigger(&event, &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

fn is_reload_trigger(event: &notify::Event, config_path: &std::path::Path) -> bool {
    let meaningful_event = matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    );
    meaningful_event && event.paths.iter().any(|p| p == config_path)
}
