use crate::events::AppEvent;
use async_channel::Sender;
use dialkit::{AttributeMap, Density, StyleConfig};
use directories::ProjectDirs;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::Deserialize;
use serde_with::DeserializeFromStr;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum Corner {
    #[strum(
        to_string = "top-left",
        serialize = "topleft",
        serialize = "tl",
        serialize = "nw"
    )]
    TopLeft,
    #[default]
    #[strum(
        to_string = "top-right",
        serialize = "topright",
        serialize = "tr",
        serialize = "ne"
    )]
    TopRight,
    #[strum(
        to_string = "bottom-left",
        serialize = "bottomleft",
        serialize = "bl",
        serialize = "sw"
    )]
    BottomLeft,
    #[strum(
        to_string = "bottom-right",
        serialize = "bottomright",
        serialize = "br",
        serialize = "se"
    )]
    BottomRight,
    #[strum(to_string = "center", serialize = "centre", serialize = "c")]
    Center,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Requested side length. Absent means the surface is unconstrained.
    pub size: Option<f64>,
    pub corner: Corner,
    pub margin: i32,
    pub density: f64,
    pub show_hands: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            size: Some(320.0),
            corner: Corner::default(),
            margin: 24,
            density: 1.0,
            show_hands: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    /// Raw style attributes, parsed during style resolution.
    #[serde(default)]
    pub style: HashMap<String, String>,
}

impl Config {
    /// Unusable densities (zero, negative, NaN) resolve to `1.0`.
    pub fn density(&self) -> Density {
        Density::uniform(self.window.density)
    }

    pub fn style_source(&self) -> AttributeMap {
        self.style.iter().collect()
    }

    pub fn resolve_style(&self) -> StyleConfig {
        StyleConfig::resolve(&self.style_source(), &self.density())
    }
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

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "clockface", "clockface")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// `CLOCKFACE_WINDOW__SIZE=400` overrides `[window] size`.
fn environment() -> config::Environment {
    config::Environment::with_prefix("CLOCKFACE")
        .prefix_separator("_")
        .separator("__")
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(environment())
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default(path: &Path) -> Config {
    if !path.exists() {
        log::info!("No config at {}, using defaults", path.display());
        return Config::default();
    }

    match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(())
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Editors tend to emit several events per save; they collapse into one reload.
const RELOAD_DEBOUNCE: Duration = Duration::from_millis(150);

fn is_config_change(event: &Event, config_path: &Path) -> bool {
    let relevant = matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    );
    relevant
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == config_path.file_name())
}

pub async fn run_async_watcher(config_path: PathBuf, tx: Sender<AppEvent>) {
    let Some(config_dir) = config_path.parent().map(Path::to_path_buf) else {
        return;
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
            log::error!("Failed to create config watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch {}: {}", config_dir.display(), e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                log::error!("Watch error: {}", e);
                continue;
            }
        };
        if !is_config_change(&event, &config_path) {
            continue;
        }

        while let Ok(Ok(_)) = tokio::time::timeout(RELOAD_DEBOUNCE, bridge_rx.recv()).await {}

        log::debug!("{} changed", config_path.display());
        if tx.send(AppEvent::ConfigReload).await.is_err() {
            break;
        }
    }
}
