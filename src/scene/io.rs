use super::types::{CliOptions, PersistedConfig};
use anyhow::{Context, bail};
use bevy::prelude::{KeyCode, Resource};
use ron::ser::PrettyConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub(super) enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum CliCommand {
    Run(CliOptions),
    Help,
}

pub(super) const CLI_HELP: &str = "Usage:\n  goal_scene [options]\n\nOptions:\n  -c, --config <path>  Scene config file (RON), created with defaults if missing\n  -h, --help           Show this help";

pub(super) fn parse_cli_options(
    args: impl IntoIterator<Item = String>,
) -> anyhow::Result<CliCommand> {
    let mut options = CliOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let value = args
                    .next()
                    .with_context(|| format!("{arg} expects a path"))?;
                options.config_path = PathBuf::from(value);
            }
            "--help" | "-h" => return Ok(CliCommand::Help),
            _ => bail!("unknown option: {arg}\n\n{CLI_HELP}"),
        }
    }

    Ok(CliCommand::Run(options))
}

/// Where the running configuration came from. Logged once the log subscriber
/// is up.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum ConfigSource {
    Loaded,
    WroteDefaults,
    Defaults { reason: String },
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub(super) struct ConfigReport {
    pub(super) path: PathBuf,
    pub(super) source: ConfigSource,
    pub(super) sanitized: Vec<&'static str>,
}

pub(super) fn read_persisted_config(path: &Path) -> Result<PersistedConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    ron::from_str::<PersistedConfig>(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn save_persisted_config(
    path: &Path,
    config: &PersistedConfig,
) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let serialized = ron::ser::to_string_pretty(config, PrettyConfig::default())?;
    fs::write(path, serialized).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the config at `path`, falling back to defaults. A missing file is
/// seeded with the defaults; a broken file is left alone.
pub(super) fn load_scene_config(path: &Path) -> (PersistedConfig, ConfigReport) {
    let (mut config, source) = if !path.exists() {
        let defaults = PersistedConfig::default();
        let source = match save_persisted_config(path, &defaults) {
            Ok(()) => ConfigSource::WroteDefaults,
            Err(err) => ConfigSource::Defaults {
                reason: err.to_string(),
            },
        };
        (defaults, source)
    } else {
        match read_persisted_config(path) {
            Ok(config) => (config, ConfigSource::Loaded),
            Err(err) => (
                PersistedConfig::default(),
                ConfigSource::Defaults {
                    reason: err.to_string(),
                },
            ),
        }
    };

    let sanitized = config.settings.sanitize();
    let report = ConfigReport {
        path: path.to_path_buf(),
        source,
        sanitized,
    };
    (config, report)
}

const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("KeyA", KeyCode::KeyA),
    ("KeyB", KeyCode::KeyB),
    ("KeyC", KeyCode::KeyC),
    ("KeyD", KeyCode::KeyD),
    ("KeyE", KeyCode::KeyE),
    ("KeyF", KeyCode::KeyF),
    ("KeyG", KeyCode::KeyG),
    ("KeyH", KeyCode::KeyH),
    ("KeyI", KeyCode::KeyI),
    ("KeyJ", KeyCode::KeyJ),
    ("KeyK", KeyCode::KeyK),
    ("KeyL", KeyCode::KeyL),
    ("KeyM", KeyCode::KeyM),
    ("KeyN", KeyCode::KeyN),
    ("KeyO", KeyCode::KeyO),
    ("KeyP", KeyCode::KeyP),
    ("KeyQ", KeyCode::KeyQ),
    ("KeyR", KeyCode::KeyR),
    ("KeyS", KeyCode::KeyS),
    ("KeyT", KeyCode::KeyT),
    ("KeyU", KeyCode::KeyU),
    ("KeyV", KeyCode::KeyV),
    ("KeyW", KeyCode::KeyW),
    ("KeyX", KeyCode::KeyX),
    ("KeyY", KeyCode::KeyY),
    ("KeyZ", KeyCode::KeyZ),
    ("Digit0", KeyCode::Digit0),
    ("Digit1", KeyCode::Digit1),
    ("Digit2", KeyCode::Digit2),
    ("Digit3", KeyCode::Digit3),
    ("Digit4", KeyCode::Digit4),
    ("Digit5", KeyCode::Digit5),
    ("Digit6", KeyCode::Digit6),
    ("Digit7", KeyCode::Digit7),
    ("Digit8", KeyCode::Digit8),
    ("Digit9", KeyCode::Digit9),
    ("Numpad0", KeyCode::Numpad0),
    ("Numpad1", KeyCode::Numpad1),
    ("Numpad2", KeyCode::Numpad2),
    ("Numpad3", KeyCode::Numpad3),
    ("Numpad4", KeyCode::Numpad4),
    ("Numpad5", KeyCode::Numpad5),
    ("Numpad6", KeyCode::Numpad6),
    ("Numpad7", KeyCode::Numpad7),
    ("Numpad8", KeyCode::Numpad8),
    ("Numpad9", KeyCode::Numpad9),
    ("NumpadAdd", KeyCode::NumpadAdd),
    ("NumpadSubtract", KeyCode::NumpadSubtract),
    ("Minus", KeyCode::Minus),
    ("Equal", KeyCode::Equal),
    ("ArrowUp", KeyCode::ArrowUp),
    ("ArrowDown", KeyCode::ArrowDown),
    ("ArrowLeft", KeyCode::ArrowLeft),
    ("ArrowRight", KeyCode::ArrowRight),
    ("Space", KeyCode::Space),
    ("Tab", KeyCode::Tab),
    ("Enter", KeyCode::Enter),
    ("Backspace", KeyCode::Backspace),
    ("PageUp", KeyCode::PageUp),
    ("PageDown", KeyCode::PageDown),
    ("F1", KeyCode::F1),
    ("F2", KeyCode::F2),
    ("F3", KeyCode::F3),
    ("F4", KeyCode::F4),
    ("F5", KeyCode::F5),
    ("F6", KeyCode::F6),
    ("F7", KeyCode::F7),
    ("F8", KeyCode::F8),
    ("F9", KeyCode::F9),
    ("F10", KeyCode::F10),
    ("F11", KeyCode::F11),
    ("F12", KeyCode::F12),
];

pub(super) fn keycode_to_name(key: KeyCode) -> String {
    format!("{key:?}")
}

pub(super) fn keycode_from_name(name: &str) -> Option<KeyCode> {
    NAMED_KEYS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, key)| *key)
}

pub(super) fn keycodes_to_names(keys: &[KeyCode]) -> String {
    keys.iter()
        .map(|key| keycode_to_name(*key))
        .collect::<Vec<_>>()
        .join("|")
}

pub(super) fn keycodes_from_names(raw: &str) -> Vec<KeyCode> {
    let mut out = Vec::new();
    for segment in raw.split('|') {
        let key_name = segment.trim();
        if key_name.is_empty() {
            continue;
        }
        if let Some(key) = keycode_from_name(key_name) {
            if !out.contains(&key) {
                out.push(key);
            }
        }
    }
    out
}

pub(super) fn keycode_to_label(key: KeyCode) -> String {
    match key {
        KeyCode::Minus => "-".into(),
        KeyCode::Equal => "=".into(),
        KeyCode::NumpadAdd => "Num +".into(),
        KeyCode::NumpadSubtract => "Num -".into(),
        KeyCode::ArrowUp => "Up".into(),
        KeyCode::ArrowDown => "Down".into(),
        KeyCode::ArrowLeft => "Left".into(),
        KeyCode::ArrowRight => "Right".into(),
        _ => {
            let name = keycode_to_name(key);
            if let Some(letter) = name.strip_prefix("Key") {
                letter.to_string()
            } else if let Some(digit) = name.strip_prefix("Digit") {
                digit.to_string()
            } else if let Some(numpad) = name.strip_prefix("Numpad") {
                format!("Num {numpad}")
            } else {
                name
            }
        }
    }
}
