use crate::config::{ConfigSection, SolverConfig};
use crate::engines::evaluation::FitnessEvaluator;
use crate::engines::generation::{
    genome::{Genome, ScoredGenome},
    hall_of_fame::HallOfFame,
    population::Population,
};
use crate::engines::kinematics::Arm;
use crate::error::SpatialArmError;
use crate::types::Pose;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Distinct runners-up kept next to the global best
pub const HALL_OF_FAME_SIZE: usize = 5;

/// Where a solver currently is in its run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SolverState {
    Idle,
    Initializing,
    Evaluating,
    Converged,
    Exhausted,
    Cancelled,
    Unreachable,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Termination {
    /// Best distance dropped below the convergence tolerance
    Converged,
    /// Every generation ran; the best effort is still returned
    Exhausted,
    /// Stopped on request at the top of a generation
    Cancelled,
    /// Target is farther from the base than the arm can stretch
    Unreachable,
}

impl From<Termination> for SolverState {
    fn from(termination: Termination) -> Self {
        match termination {
            Termination::Converged => SolverState::Converged,
            Termination::Exhausted => SolverState::Exhausted,
            Termination::Cancelled => SolverState::Cancelled,
            Termination::Unreachable => SolverState::Unreachable,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub termination: Termination,
    pub target: Pose,
    /// Best genome of the whole run, `None` only for unreachable targets
    pub best: Option<ScoredGenome>,
    pub generations_run: usize,
    /// Global best distance after each generation
    pub best_fitness_history: Vec<f64>,
    pub hall_of_fame: Vec<ScoredGenome>,
}

impl SolveReport {
    fn unreachable(target: Pose) -> Self {
        Self {
            termination: Termination::Unreachable,
            target,
            best: None,
            generations_run: 0,
            best_fitness_history: Vec::new(),
            hall_of_fame: Vec::new(),
        }
    }

    pub fn best_genome(&self) -> Option<Genome> {
        self.best.map(|best| best.genome)
    }

    pub fn best_fitness(&self) -> Option<f64> {
        self.best.map(|best| best.fitness)
    }

    pub fn is_converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Cooperative stop signal shared with a running solve
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, _generation: usize) {}
    fn on_generation_complete(&mut self, generation: usize, best: &Genome, best_fitness: f64);
}

impl ProgressCallback for () {
    fn on_generation_complete(&mut self, _generation: usize, _best: &Genome, _best_fitness: f64) {}
}

impl<F> ProgressCallback for F
where
    F: FnMut(&Genome, f64, usize) + Send,
{
    fn on_generation_complete(&mut self, generation: usize, best: &Genome, best_fitness: f64) {
        self(best, best_fitness, generation)
    }
}

/// Genetic inverse kinematics solver for one arm
pub struct EvolutionEngine {
    arm: Arm,
    config: SolverConfig,
    rng: StdRng,
    state: SolverState,
}

impl EvolutionEngine {
    /// Configuration problems are reported here, never during a run
    pub fn new(arm: Arm, config: SolverConfig) -> Result<Self, SpatialArmError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            arm,
            config,
            rng,
            state: SolverState::Idle,
        })
    }

    pub fn arm(&self) -> &Arm {
        &self.arm
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    /// Best genome for `target`, or `None` when the target is out of reach
    pub fn solve(&mut self, target: Pose) -> Option<Genome> {
        self.run(target, (), &CancellationToken::new()).best_genome()
    }

    /// Run the evolution process
    pub fn run<C: ProgressCallback>(
        &mut self,
        target: Pose,
        mut callback: C,
        cancel: &CancellationToken,
    ) -> SolveReport {
        self.state = SolverState::Initializing;

        if !self.arm.is_reachable(&target) {
            log::warn!(
                "Target ({:.3}, {:.3}, {:.3}) is beyond maximum reach {:.3}",
                target.x,
                target.y,
                target.z,
                self.arm.max_reach()
            );
            self.state = SolverState::Unreachable;
            return SolveReport::unreachable(target);
        }

        log::info!(
            "Solving for target ({:.3}, {:.3}, {:.3}): population {}, generations {}",
            target.x,
            target.y,
            target.z,
            self.config.population_size,
            self.config.generation_count
        );

        let evaluator = FitnessEvaluator::new(self.arm, target).with_parallel(self.config.parallel);
        let mut population =
            Population::random(self.config.population_size, &evaluator, &mut self.rng);

        let mut hall_of_fame = HallOfFame::new(HALL_OF_FAME_SIZE);
        hall_of_fame.record(population.members());

        let mut history = Vec::with_capacity(self.config.generation_count);
        let mut termination = Termination::Exhausted;

        self.state = SolverState::Evaluating;

        for generation in 0..self.config.generation_count {
            if cancel.is_cancelled() {
                log::warn!("Solve cancelled before generation {}", generation + 1);
                termination = Termination::Cancelled;
                break;
            }

            callback.on_generation_start(generation);

            if hall_of_fame.record(population.members()) {
                log::debug!(
                    "Generation {}: new best distance {:.6}",
                    generation + 1,
                    hall_of_fame.best_fitness()
                );
            }

            let Some(best) = hall_of_fame.best().copied() else {
                break;
            };
            history.push(best.fitness);

            callback.on_generation_complete(generation, &best.genome, best.fitness);

            if best.fitness < self.config.convergence_tolerance {
                termination = Termination::Converged;
                break;
            }

            // Check termination
            if generation + 1 == self.config.generation_count {
                break;
            }

            population = population.next_generation(&self.config, &evaluator, &mut self.rng);
        }

        self.state = termination.into();

        let report = SolveReport {
            termination,
            target,
            best: hall_of_fame.best().copied(),
            generations_run: history.len(),
            best_fitness_history: history,
            hall_of_fame: hall_of_fame.get_all().to_vec(),
        };

        log::info!(
            "Solve finished: {:?} after {} generations, best distance {:.6}",
            report.termination,
            report.generations_run,
            report.best_fitness().unwrap_or(f64::INFINITY)
        );

        report
    }
}
