pub mod solve_runner;

pub use solve_runner::SolveRunner;
