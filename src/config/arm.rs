use super::traits::ConfigSection;
use crate::error::SpatialArmError;
use crate::types::LINK_COUNT;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmConfig {
    /// Length of each link, base first
    pub link_lengths: [f64; LINK_COUNT],
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            link_lengths: [3.0, 2.5, 2.0],
        }
    }
}

impl ConfigSection for ArmConfig {
    fn section_name() -> &'static str {
        "arm"
    }

    fn validate(&self) -> Result<(), SpatialArmError> {
        for (i, length) in self.link_lengths.iter().enumerate() {
            if !length.is_finite() || *length <= 0.0 {
                return Err(SpatialArmError::Configuration(format!(
                    "Link {} length must be positive, got {}",
                    i + 1,
                    length
                )));
            }
        }
        Ok(())
    }
}
