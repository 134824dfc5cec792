use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use lexicon::{Tier, EN_LOCALE};

pub const CONFIG_FILE_NAME: &str = "censor.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct CensorConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub masking: MaskingConfig,
    #[serde(default)]
    pub words: WordsConfig,
    /// Extra locale dictionaries: locale id -> TOML file.
    #[serde(default)]
    pub locales: BTreeMap<String, PathBuf>,
}

impl CensorConfig {
    /// Read `<root>/censor.toml`, falling back to defaults when it is absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::from_file(&path)
        } else {
            tracing::info!(
                "No config file found at {}. Using CensorConfig::default().",
                path.display()
            );
            Ok(CensorConfig::default())
        }
    }

    /// Read an explicit config file. Relative locale paths resolve against
    /// the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let mut cfg = Self::from_toml_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        let root = path.parent().unwrap_or_else(|| Path::new("."));
        cfg.resolve_paths(root);
        Ok(cfg)
    }

    /// Parse without touching the filesystem; locale paths are left as written.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str::<CensorConfig>(text)?)
    }

    fn resolve_paths(&mut self, root: &Path) {
        for path in self.locales.values_mut() {
            *path = absolutize(root, path);
        }
    }
}

impl Default for CensorConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            masking: MaskingConfig::default(),
            words: WordsConfig::default(),
            locales: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "EngineConfig::default_locale")]
    pub locale: String,
    /// Tier ids (1..=5) switched off at startup.
    #[serde(default)]
    pub disabled_tiers: Vec<Tier>,
}

impl EngineConfig {
    fn default_locale() -> String {
        EN_LOCALE.to_string()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            disabled_tiers: vec![],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaskingConfig {
    /// Fixed replacement text; `None` keeps the default mask.
    #[serde(default)]
    pub mask: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordsConfig {
    #[serde(default)]
    pub add: BTreeMap<String, Tier>,
    #[serde(default)]
    pub remove: Vec<String>,
}

fn absolutize(root: &Path, value: &Path) -> PathBuf {
    if value.is_absolute() {
        value.to_path_buf()
    } else {
        root.join(value)
    }
}
