use crate::error::{AquaFarmError, Result};
use crate::models::{AreaUnit, CropType, FieldSpec};
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    pub field: FieldConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub usage: UsageConfig,
}

/// Field used when the command line does not describe one
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub crop_type: String,
    pub area: f64,
    #[serde(default = "default_area_unit")]
    pub area_unit: String,
}

fn default_area_unit() -> String {
    "acres".into()
}

impl FieldConfig {
    pub fn to_field_spec(&self) -> Result<FieldSpec> {
        let area_unit = AreaUnit::from_str(&self.area_unit).ok_or_else(|| {
            AquaFarmError::Config(format!(
                "unknown area unit '{}' (expected acres, hectares or sqft)",
                self.area_unit
            ))
        })?;

        let mut spec = FieldSpec::new(
            CropType::from_str_lossy(&self.crop_type),
            self.area,
            area_unit,
        );
        spec.name = self.name.clone();
        Ok(spec)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: default_pretty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UsageConfig {
    #[serde(default = "default_period_days")]
    pub period_days: u32,
}

fn default_period_days() -> u32 {
    30
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            period_days: default_period_days(),
        }
    }
}

impl Config {
    /// Load from an explicit path, or search the standard locations.
    /// Without an explicit path, a missing file yields the defaults.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(AquaFarmError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p.to_path_buf()
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::info!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        tracing::info!(path = %config_path.display(), "Loading configuration");

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AquaFarmError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&config_str)
    }

    /// Parse YAML after `${VAR}` substitution
    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| AquaFarmError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Search for config.yaml in standard locations
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Then XDG config directory
        dirs::config_dir()
            .map(|dir| dir.join("aquafarm").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Default path for writing new config files (~/.config/aquafarm/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AquaFarmError::Config("Cannot determine config directory".into()))?
            .join("aquafarm");
        Ok(config_dir.join("config.yaml"))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.field.area.is_finite() || self.field.area <= 0.0 {
            return Err(AquaFarmError::Config(format!(
                "field.area must be positive, got {}",
                self.field.area
            )));
        }
        self.field.to_field_spec()?;

        if CropType::from_str(&self.field.crop_type).is_none() {
            tracing::warn!(
                crop_type = %self.field.crop_type,
                "Unknown crop type in config, the generic profile will be used"
            );
        }

        if self.usage.period_days == 0 {
            return Err(AquaFarmError::Config(
                "usage.period_days must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up AquaFarm!");
        println!();

        println!("Default Field");
        let name: String = Input::new()
            .with_prompt("  Field name")
            .default("Main Field".into())
            .interact_text()
            .map_err(|e| AquaFarmError::Config(format!("Input error: {}", e)))?;

        let crop_keys: Vec<&str> = CropType::all().iter().map(|c| c.key()).collect();
        let crop_index = Select::new()
            .with_prompt("  Crop type")
            .items(&crop_keys)
            .default(crop_keys.len() - 1)
            .interact()
            .map_err(|e| AquaFarmError::Config(format!("Input error: {}", e)))?;

        let area: f64 = Input::new()
            .with_prompt("  Area")
            .default(1.0)
            .validate_with(|v: &f64| {
                if *v > 0.0 {
                    Ok(())
                } else {
                    Err("area must be positive")
                }
            })
            .interact_text()
            .map_err(|e| AquaFarmError::Config(format!("Input error: {}", e)))?;

        let units = [AreaUnit::Acres, AreaUnit::Hectares, AreaUnit::Sqft];
        let unit_labels: Vec<&str> = units.iter().map(|u| u.as_str()).collect();
        let unit_index = Select::new()
            .with_prompt("  Area unit")
            .items(&unit_labels)
            .default(0)
            .interact()
            .map_err(|e| AquaFarmError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            field: FieldConfig {
                name: Some(name),
                crop_type: crop_keys[crop_index].to_string(),
                area,
                area_unit: unit_labels[unit_index].to_string(),
            },
            output: OutputConfig::default(),
            usage: UsageConfig::default(),
        };

        let config_path = Self::default_config_path()?;
        config.write_to(&config_path)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let content = format!(
            "# AquaFarm Configuration\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(path, content)?;
        Ok(())
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| AquaFarmError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            match std::env::var(var_name) {
                Ok(value) => result = result.replace(placeholder, &value),
                Err(_) => tracing::warn!(var = var_name, "Environment variable not set"),
            }
        }

        Ok(result)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field: FieldConfig {
                name: None,
                crop_type: "other".into(),
                area: 1.0,
                area_unit: default_area_unit(),
            },
            output: OutputConfig::default(),
            usage: UsageConfig::default(),
        }
    }
}
