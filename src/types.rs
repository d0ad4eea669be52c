use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Number of links in the arm
pub const LINK_COUNT: usize = 3;

/// Swing angle range in degrees (horizontal plane)
pub const THETA_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Elevation angle range in degrees
pub const GAMMA_RANGE: RangeInclusive<f64> = 0.0..=180.0;

/// A point in 3D space
pub type Pose = nalgebra::Point3<f64>;

/// Which of the two angles of a link a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleKind {
    Theta, // Swing about the vertical axis
    Gamma, // Elevation about the horizontal axis
}

impl AngleKind {
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            AngleKind::Theta => THETA_RANGE,
            AngleKind::Gamma => GAMMA_RANGE,
        }
    }

    /// Saturate a value into the valid range of this angle
    pub fn clamp(self, value: f64) -> f64 {
        let range = self.range();
        value.clamp(*range.start(), *range.end())
    }
}

/// Angles of a single link, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JointAngles {
    pub theta: f64,
    pub gamma: f64,
}

impl JointAngles {
    pub const fn new(theta: f64, gamma: f64) -> Self {
        Self { theta, gamma }
    }

    /// `(theta, gamma)` in radians
    pub fn to_radians(self) -> (f64, f64) {
        (self.theta.to_radians(), self.gamma.to_radians())
    }

    pub fn is_finite(&self) -> bool {
        self.theta.is_finite() && self.gamma.is_finite()
    }

    pub fn clamped(self) -> Self {
        Self {
            theta: AngleKind::Theta.clamp(self.theta),
            gamma: AngleKind::Gamma.clamp(self.gamma),
        }
    }
}
