pub mod kinematics;
pub mod evaluation;
pub mod generation;
