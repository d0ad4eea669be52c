pub mod traits;
pub mod arm;
pub mod solver;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use arm::ArmConfig;
pub use solver::SolverConfig;
pub use traits::ConfigSection;
