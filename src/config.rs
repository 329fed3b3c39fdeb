use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::outlook::DEFAULT_SHG_MEMBERS;
use crate::policy::AnalysisLayer;
use crate::preset::{Preset, BASELINE};

pub const CONFIG_FILE: &str = "agrigeo.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the preset evaluations run with.
    pub preset: String,
    pub presets: HashMap<String, Preset>,
    pub layers: HashMap<String, String>,
    pub ci: CiConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CiConfig {
    pub fail_below: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub shg_members: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            preset: BASELINE.to_string(),
            presets: HashMap::new(),
            layers: HashMap::new(),
            ci: CiConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            shg_members: DEFAULT_SHG_MEMBERS,
        }
    }
}

impl Config {
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let contents = std::fs::read_to_string(&config_path).map_err(|source| Error::Read {
            path: config_path.clone(),
            source,
        })?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// A `[presets.<name>]` table shadows the built-in preset of the same name.
    pub fn resolve_preset(&self, name_override: Option<&str>) -> Result<(String, Preset)> {
        let name = name_override.unwrap_or(&self.preset);
        if let Some(preset) = self.presets.get(name) {
            return Ok((name.to_string(), preset.clone()));
        }
        if name == BASELINE {
            return Ok((name.to_string(), Preset::default()));
        }
        Err(Error::UnknownPreset(name.to_string()))
    }

    pub fn is_layer_enabled(&self, layer: AnalysisLayer) -> bool {
        !matches!(self.layers.get(layer.tag()), Some(v) if v == "off")
    }
}
