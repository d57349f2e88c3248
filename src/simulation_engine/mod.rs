// simulation_engine/mod.rs
pub mod factory;
pub mod identifiers;
pub(crate) mod lane;
pub mod road;
pub mod simulation;
pub mod vehicles;
