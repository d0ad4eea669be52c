use super::arm::{Arm, ArmPositions};
use crate::engines::generation::Genome;
use crate::types::{JointAngles, Pose, LINK_COUNT};

/// Stateful view of an arm for interactive callers.
///
/// Holds the current angles (degrees) and the positions they produce.
/// Positions are recomputed from scratch on every change.
#[derive(Debug, Clone)]
pub struct ArmModel {
    arm: Arm,
    angles: [JointAngles; LINK_COUNT],
    positions: ArmPositions,
}

impl ArmModel {
    pub fn new(arm: Arm) -> Self {
        let angles = [JointAngles::default(); LINK_COUNT];
        let positions = arm.forward_degrees(&angles);
        Self {
            arm,
            angles,
            positions,
        }
    }

    pub fn arm(&self) -> &Arm {
        &self.arm
    }

    pub fn set_angles(&mut self, angles: [JointAngles; LINK_COUNT]) {
        self.angles = angles;
        self.positions = self.arm.forward_degrees(&self.angles);
    }

    /// Change a single link, keeping the others
    pub fn set_link_angles(&mut self, link: usize, angles: JointAngles) {
        if let Some(slot) = self.angles.get_mut(link) {
            *slot = angles;
            self.positions = self.arm.forward_degrees(&self.angles);
        }
    }

    pub fn apply_genome(&mut self, genome: &Genome) {
        self.set_angles(genome.angles());
    }

    pub fn angles(&self) -> [JointAngles; LINK_COUNT] {
        self.angles
    }

    pub fn joint_positions(&self) -> &[Pose; LINK_COUNT + 1] {
        &self.positions.joints
    }

    pub fn end_effector(&self) -> Pose {
        self.positions.end_effector
    }

    pub fn distance_to(&self, target: &Pose) -> f64 {
        (self.positions.end_effector - target).norm()
    }

    pub fn is_reachable(&self, target: &Pose) -> bool {
        self.arm.is_reachable(target)
    }

    /// First link pointing straight up, the rest in line with it
    pub fn reset_to_default(&mut self) {
        let mut angles = [JointAngles::default(); LINK_COUNT];
        angles[0].gamma = 90.0;
        self.set_angles(angles);
    }
}
