use crate::config::{ArmConfig, ConfigSection};
use crate::error::SpatialArmError;
use crate::types::{JointAngles, Pose, LINK_COUNT};
use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion};
use serde::{Deserialize, Serialize};

/// Positions of the chain for one set of joint angles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmPositions {
    /// Base origin followed by the end of each link
    pub joints: [Pose; LINK_COUNT + 1],
    pub end_effector: Pose,
}

/// Serial arm of three links, each driven by a swing and an elevation angle.
///
/// Every link starts from the frame of the previous one: rotate about the
/// vertical axis by `theta`, raise by `gamma` and extend along the local x axis.
/// All angles zero leaves the arm stretched along +x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arm {
    link_lengths: [f64; LINK_COUNT],
}

impl Arm {
    pub fn new(link_lengths: [f64; LINK_COUNT]) -> Result<Self, SpatialArmError> {
        ArmConfig { link_lengths }.validate()?;
        Ok(Self { link_lengths })
    }

    pub fn from_config(config: &ArmConfig) -> Result<Self, SpatialArmError> {
        Self::new(config.link_lengths)
    }

    pub fn link_lengths(&self) -> [f64; LINK_COUNT] {
        self.link_lengths
    }

    /// Distance of the fully stretched arm
    pub fn max_reach(&self) -> f64 {
        self.link_lengths.iter().sum()
    }

    /// Targets exactly at maximum reach count as reachable
    pub fn is_reachable(&self, target: &Pose) -> bool {
        target.coords.norm() <= self.max_reach()
    }

    /// Forward kinematics, angles as `(theta, gamma)` radian pairs
    pub fn forward(&self, angles: &[(f64, f64); LINK_COUNT]) -> ArmPositions {
        let mut frame: Isometry3<f64> = Isometry3::identity();
        let mut joints = [Point3::origin(); LINK_COUNT + 1];

        for (i, (&(theta, gamma), &length)) in angles.iter().zip(&self.link_lengths).enumerate() {
            // Negative pitch about y lifts the local x axis toward +z
            frame *= UnitQuaternion::from_euler_angles(0.0, -gamma, theta);
            frame *= Translation3::new(length, 0.0, 0.0);
            joints[i + 1] = frame * Point3::origin();
        }

        ArmPositions {
            joints,
            end_effector: joints[LINK_COUNT],
        }
    }

    /// Forward kinematics for angles given in degrees
    pub fn forward_degrees(&self, angles: &[JointAngles; LINK_COUNT]) -> ArmPositions {
        self.forward(&angles.map(JointAngles::to_radians))
    }
}
