pub mod arm;
pub mod model;

pub use arm::{Arm, ArmPositions};
pub use model::ArmModel;
