use super::traits::ConfigSection;
use crate::error::SpatialArmError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub population_size: usize,
    pub generation_count: usize,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    pub elite_count: usize,
    pub convergence_tolerance: f64,

    /// Random genomes injected each generation to backfill diversity
    pub immigrant_count: usize,
    pub seed: Option<u64>,
    /// Evaluate fitness across the rayon thread pool
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generation_count: 200,
            mutation_rate: 0.25,
            crossover_rate: 0.8,
            elite_count: 5,
            convergence_tolerance: 0.01,
            immigrant_count: 0,
            seed: None,
            parallel: true,
        }
    }
}

impl ConfigSection for SolverConfig {
    fn section_name() -> &'static str {
        "solver"
    }

    fn validate(&self) -> Result<(), SpatialArmError> {
        if self.generation_count == 0 {
            return Err(SpatialArmError::Configuration(
                "Generation count must be at least 1".to_string()
            ));
        }
        if self.population_size < self.elite_count + self.immigrant_count + 2 {
            return Err(SpatialArmError::Configuration(format!(
                "Population size {} is too small for {} elites and {} immigrants (need at least {})",
                self.population_size,
                self.elite_count,
                self.immigrant_count,
                self.elite_count + self.immigrant_count + 2
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SpatialArmError::Configuration(
                "Mutation rate must be between 0 and 1".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(SpatialArmError::Configuration(
                "Crossover rate must be between 0 and 1".to_string()
            ));
        }
        if !self.convergence_tolerance.is_finite() || self.convergence_tolerance < 0.0 {
            return Err(SpatialArmError::Configuration(
                "Convergence tolerance must be a finite non-negative number".to_string()
            ));
        }
        Ok(())
    }
}
