use crate::engines::generation::genome::{Genome, ScoredGenome};
use crate::engines::kinematics::Arm;
use crate::types::Pose;
use rayon::prelude::*;

/// Distance from the genome's end effector to `target`.
///
/// Non-finite angles or a non-finite result score `f64::INFINITY`, so such
/// individuals lose every tournament instead of poisoning comparisons.
pub fn evaluate(arm: &Arm, genome: &Genome, target: &Pose) -> f64 {
    if !genome.is_finite() {
        return f64::INFINITY;
    }

    let end_effector = arm.forward(&genome.to_radians()).end_effector;
    let distance = (end_effector - target).norm();

    if distance.is_finite() {
        distance
    } else {
        f64::INFINITY
    }
}

/// Scores genomes against one fixed target
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator {
    arm: Arm,
    target: Pose,
    parallel: bool,
}

impl FitnessEvaluator {
    pub fn new(arm: Arm, target: Pose) -> Self {
        Self {
            arm,
            target,
            parallel: true,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn arm(&self) -> &Arm {
        &self.arm
    }

    pub fn target(&self) -> &Pose {
        &self.target
    }

    pub fn evaluate(&self, genome: &Genome) -> f64 {
        evaluate(&self.arm, genome, &self.target)
    }

    pub fn score(&self, genome: Genome) -> ScoredGenome {
        ScoredGenome::new(genome, self.evaluate(&genome))
    }

    /// Score every genome, keeping input order
    pub fn score_all(&self, genomes: Vec<Genome>) -> Vec<ScoredGenome> {
        if self.parallel {
            genomes.into_par_iter().map(|genome| self.score(genome)).collect()
        } else {
            genomes.into_iter().map(|genome| self.score(genome)).collect()
        }
    }
}
