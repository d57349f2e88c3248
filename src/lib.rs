pub mod monitoring;
pub mod shared_data;
pub mod simulation_engine;
