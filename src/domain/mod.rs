pub mod policy;
pub mod simulation;
pub mod state;
