use super::{arm::ArmConfig, solver::SolverConfig, traits::ConfigSection};
use crate::error::SpatialArmError;
use crate::types::Pose;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `SPATIALARM__SOLVER__SEED=7`
pub const ENV_PREFIX: &str = "SPATIALARM";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub target: [f64; 3],
    pub arm: ArmConfig,
    pub solver: SolverConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target: [2.0, 1.0, 2.0],
            arm: ArmConfig::default(),
            solver: SolverConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), SpatialArmError> {
        self.arm.validate()?;
        self.solver.validate()?;
        if self.target.iter().any(|c| !c.is_finite()) {
            return Err(SpatialArmError::Configuration(
                "Target coordinates must be finite".to_string()
            ));
        }
        Ok(())
    }

    pub fn target_pose(&self) -> Pose {
        Pose::new(self.target[0], self.target[1], self.target[2])
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Layer defaults, the TOML file and environment overrides, in that order
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SpatialArmError> {
        let path = path.as_ref();
        log::debug!("Loading configuration from {}", path.display());

        let settings = ::config::Config::builder()
            .add_source(::config::Config::try_from(&AppConfig::default())?)
            .add_source(::config::File::from(path).format(::config::FileFormat::Toml))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;

        *self.write_lock()? = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SpatialArmError> {
        let config = self.get()?;
        let toml_str = toml::to_string_pretty(&config)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> Result<AppConfig, SpatialArmError> {
        self.config
            .read()
            .map(|config| config.clone())
            .map_err(|_| SpatialArmError::Configuration("Config lock poisoned".to_string()))
    }

    /// Apply `f` and keep the result only if it validates
    pub fn update<F>(&self, f: F) -> Result<(), SpatialArmError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.write_lock()?;
        let mut candidate = (*config).clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }

    fn write_lock(&self) -> Result<std::sync::RwLockWriteGuard<'_, AppConfig>, SpatialArmError> {
        self.config
            .write()
            .map_err(|_| SpatialArmError::Configuration("Config lock poisoned".to_string()))
    }
}
