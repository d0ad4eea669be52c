pub mod config;
pub mod engines;
pub mod error;
pub mod services;
pub mod types;

pub use crate::config::{AppConfig, ArmConfig, ConfigManager, SolverConfig};
pub use engines::evaluation::{evaluate, FitnessEvaluator};
pub use engines::generation::{
    CancellationToken, EvolutionEngine, Genome, ProgressCallback, ScoredGenome, SolveReport,
    SolverState, Termination,
};
pub use engines::kinematics::{Arm, ArmModel, ArmPositions};
pub use error::{Result, SpatialArmError};
pub use services::SolveRunner;
pub use types::{JointAngles, Pose};
