use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::model::config::MementoConfig;
use crate::repository::traits::ConfigRepository;

const CONFIG_DIR: &str = ".config/memento-mori";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Clone, Debug)]
pub struct FileConfigRepository {
    file_path: PathBuf,
}

impl FileConfigRepository {
    /// Uses `file_path` when given, otherwise `~/.config/memento-mori/config.json`.
    pub fn new(file_path: Option<PathBuf>) -> Result<Self> {
        let file_path = match file_path {
            Some(path) => path,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(CONFIG_DIR).join(CONFIG_FILE_NAME)
            }
        };

        Ok(FileConfigRepository { file_path })
    }

    pub fn exists(&self) -> bool {
        self.file_path.exists()
    }

    /// Writes the default configuration. An existing file is only replaced
    /// when `force` is set.
    pub fn write_defaults(&self, force: bool) -> Result<MementoConfig> {
        if self.exists() && !force {
            return Err(anyhow!(
                "Config file already exists at {} (use --force to overwrite)",
                self.file_path.display()
            ));
        }
        let config = MementoConfig::default();
        self.write_config(&config)?;
        Ok(config)
    }

    fn parse_config(&self, value: &Value) -> Result<MementoConfig> {
        MementoConfig::deserialize(value).map_err(|e| match invalid_field(value) {
            Some(field) => anyhow!(
                "Invalid value for '{}' in {}: {}",
                field,
                self.file_path.display(),
                e
            ),
            None => anyhow!("Invalid config {}: {}", self.file_path.display(), e),
        })
    }

    fn write_config(&self, config: &MementoConfig) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, config)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

/// First top-level key whose value alone fails to deserialize.
fn invalid_field(value: &Value) -> Option<&str> {
    value.as_object()?.iter().find_map(|(key, field)| {
        let mut single = Map::new();
        single.insert(key.clone(), field.clone());
        MementoConfig::deserialize(Value::Object(single))
            .err()
            .map(|_| key.as_str())
    })
}

impl ConfigRepository for FileConfigRepository {
    /// Missing file: defaults are written to disk and returned.
    /// Not JSON at all: defaults are returned and the file is left alone.
    /// Valid JSON with a bad value: an error naming the field.
    fn load(&self) -> Result<MementoConfig> {
        if !self.exists() {
            info!(path = %self.file_path.display(), "config not found, creating defaults");
            let config = MementoConfig::default();
            self.save(&config)?;
            return Ok(config);
        }

        let text = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Could not read config {}", self.file_path.display()))?;
        let value: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                warn!(
                    path = %self.file_path.display(),
                    error = %e,
                    "config is not valid JSON, using defaults"
                );
                return Ok(MementoConfig::default());
            }
        };

        let config = self.parse_config(&value)?;
        debug!(path = %self.file_path.display(), "loaded config");
        Ok(config)
    }

    /// Failing to persist is not fatal; the in-memory config is still usable.
    fn save(&self, config: &MementoConfig) -> Result<()> {
        if let Err(e) = self.write_config(config) {
            warn!(path = %self.file_path.display(), error = %e, "could not save config");
        }
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.file_path
    }
}
