// Persisted settings: which paste service to use and, for pastebin, the
// developer key. Stored as flat TOML at ~/.config/pastebincli/config.toml.

use crate::error::{PasteError, Result};
use crate::ui::{Output, Prompter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";

const BACKEND_CHOICES: [&str; 2] = ["pastebin", "pasters"];

/// Selected service. An API key exists exactly when pastebin is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Config {
    Pastebin { api_key: String },
    Pasters,
}

/// On-disk shape. Older files used `paster` instead of `backend`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default, alias = "paster", skip_serializing_if = "Option::is_none")]
    backend: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
}

impl ConfigFile {
    fn into_config(self) -> std::result::Result<Config, String> {
        match (self.backend.as_deref().unwrap_or("pasters"), self.api_key) {
            ("pastebin", Some(api_key)) => Ok(Config::Pastebin { api_key }),
            ("pastebin", None) => Err("backend \"pastebin\" needs an api_key".into()),
            ("pasters", None) => Ok(Config::Pasters),
            ("pasters", Some(_)) => Err("api_key is only used with backend \"pastebin\"".into()),
            (other, _) => Err(format!("unknown backend \"{other}\"")),
        }
    }
}

impl From<&Config> for ConfigFile {
    fn from(config: &Config) -> Self {
        match config {
            Config::Pastebin { api_key } => ConfigFile {
                backend: Some("pastebin".into()),
                api_key: Some(api_key.clone()),
            },
            Config::Pasters => ConfigFile {
                backend: Some("pasters".into()),
                api_key: None,
            },
        }
    }
}

/// Reads and writes the config document at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/config.toml`, or `~/.config/pastebincli/config.toml` without a dir.
    pub fn locate(dir: Option<&Path>) -> Self {
        let dir = match dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
                .join("pastebincli"),
        };
        Self::new(dir.join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Err(PasteError::ConfigMissing(self.path.clone()));
        }
        let corrupt = |reason: String| PasteError::ConfigCorrupt {
            path: self.path.clone(),
            reason,
        };
        let raw = fs::read_to_string(&self.path).map_err(|e| corrupt(e.to_string()))?;
        let file: ConfigFile = toml::from_str(&raw).map_err(|e| corrupt(e.to_string()))?;
        let config = file.into_config().map_err(corrupt)?;
        tracing::debug!(path = %self.path.display(), "loaded config");
        Ok(config)
    }

    /// Replace the document, creating its directory first.
    pub fn save(&self, config: &Config) -> Result<()> {
        let write_err = |source| PasteError::ConfigWrite {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        let doc = toml::to_string(&ConfigFile::from(config)).map_err(|e| {
            write_err(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;
        fs::write(&self.path, doc).map_err(write_err)?;
        tracing::debug!(path = %self.path.display(), "saved config");
        Ok(())
    }
}

/// First-run wizard: pick a service, collect the pastebin key if needed, save.
pub fn setup(store: &ConfigStore, prompt: &mut dyn Prompter, out: &mut dyn Output) -> Result<Config> {
    out.info("== First time setup for pastebincli ==");

    let choice = prompt.choose("Choose your pasting service", &BACKEND_CHOICES, 1)?;
    let config = if BACKEND_CHOICES.get(choice) == Some(&"pastebin") {
        out.info("Pastebin API key required. Find yours at https://pastebin.com/doc_api");
        let api_key = prompt.ask("API key", None)?;
        Config::Pastebin { api_key }
    } else {
        Config::Pasters
    };

    store.save(&config)?;
    out.success(&format!("Config saved at {}", store.path().display()));
    Ok(config)
}
