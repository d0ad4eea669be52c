pub mod genome;
pub mod operators;
pub mod population;
pub mod hall_of_fame;
pub mod evolution_engine;
pub mod progress;

pub use genome::{Genome, ScoredGenome, GENE_COUNT};
pub use population::Population;
pub use hall_of_fame::HallOfFame;
pub use evolution_engine::{
    CancellationToken, EvolutionEngine, ProgressCallback, SolveReport, SolverState, Termination,
};
pub use progress::{ChannelProgressCallback, ConsoleProgressCallback, ProgressMessage};
