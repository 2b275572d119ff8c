use crate::error::{GrowOpsError, Result};
use crate::models::{CropProfile, SystemType};
use crate::service::DEFAULT_CACHE_TTL_MINUTES;
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub farm: FarmConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FarmConfig {
    pub name: String,
    pub crop: String,
    pub system_type: String,
    /// Sow date of the current batch, ISO format (YYYY-MM-DD).
    pub sow_date: Option<chrono::NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DataConfig {
    /// Default log file consulted when a subcommand is run without --file.
    pub logs_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    pub ttl_minutes: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: DEFAULT_CACHE_TTL_MINUTES,
        }
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(GrowOpsError::Config(format!(
                "Config file not found at {:?}. Run `growops init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| GrowOpsError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| GrowOpsError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        // Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("growops").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        // Return XDG path as the default (will trigger "not found" in load)
        let default_path = dirs::config_dir()
            .ok_or_else(|| GrowOpsError::Config("Cannot determine config directory".into()))?
            .join("growops")
            .join("config.yaml");
        Ok(default_path)
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/growops/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| GrowOpsError::Config("Cannot determine config directory".into()))?
            .join("growops");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("No configuration found. Let's set up GrowOps!");
        println!();

        println!("Farm Profile");
        let farm_name: String = Input::new()
            .with_prompt("  Farm name")
            .default("Home Farm".into())
            .interact_text()
            .map_err(|e| GrowOpsError::Config(format!("Input error: {}", e)))?;

        let crop: String = Input::new()
            .with_prompt("  Crop (Lettuce, Basil, Microgreens, ...)")
            .default("Lettuce".into())
            .interact_text()
            .map_err(|e| GrowOpsError::Config(format!("Input error: {}", e)))?;

        let system_type: String = Input::new()
            .with_prompt("  System type (DWC, NFT, Kratky, Microgreens)")
            .default("DWC".into())
            .interact_text()
            .map_err(|e| GrowOpsError::Config(format!("Input error: {}", e)))?;

        let logs_path: String = Input::new()
            .with_prompt("  Log file path (blank to skip)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| GrowOpsError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            farm: FarmConfig {
                name: farm_name,
                crop,
                system_type,
                sow_date: None,
            },
            data: DataConfig {
                logs_path: if logs_path.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(logs_path))
                },
            },
            cache: CacheConfig::default(),
        };
        config.validate()?;

        // Write to default config path
        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| GrowOpsError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# GrowOps Configuration\n# Generated by `growops init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = match regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") {
            Ok(re) => re,
            Err(_) => return result,
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }

    /// Cross-field checks that serde cannot express: the crop must resolve
    /// to a profile and the system type must parse.
    pub fn validate(&self) -> Result<()> {
        if SystemType::from_str(&self.farm.system_type).is_none() {
            return Err(GrowOpsError::Config(format!(
                "Unknown system type '{}'",
                self.farm.system_type
            )));
        }
        if CropProfile::lookup(&self.farm.crop).is_none() {
            tracing::warn!(
                "crop '{}' has no built-in profile; the generic profile will be used",
                self.farm.crop
            );
        }
        if self.cache.ttl_minutes < 0 {
            return Err(GrowOpsError::Config(
                "cache.ttl_minutes cannot be negative".into(),
            ));
        }
        Ok(())
    }

    pub fn system_type(&self) -> Result<SystemType> {
        SystemType::from_str(&self.farm.system_type).ok_or_else(|| {
            GrowOpsError::Config(format!("Unknown system type '{}'", self.farm.system_type))
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            farm: FarmConfig {
                name: "Home Farm".into(),
                crop: "Lettuce".into(),
                system_type: "DWC".into(),
                sow_date: None,
            },
            data: DataConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}
