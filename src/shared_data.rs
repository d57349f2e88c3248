// src/shared_data.rs

use crate::simulation_engine::road::Road;
use crate::simulation_engine::vehicles::VehicleKind;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since the Unix epoch.
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

/// State of one road after one tick, as written to the stats log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickRecord {
    pub timestamp: u64,
    pub tick: u64,
    pub road_id: u64,
    pub road_name: String,
    pub snapshot: String,
    pub occupied: usize,
    pub cars: usize,
    pub motorcycles: usize,
}

impl TickRecord {
    /// Reads the road's current occupancy into a record.
    pub fn collect(tick: u64, road: &Road) -> Self {
        let mut cars = 0;
        let mut motorcycles = 0;
        for index in 0..road.capacity() {
            match road.vehicle_at(index).map(|v| v.kind()) {
                Some(VehicleKind::Car) => cars += 1,
                Some(VehicleKind::Motorcycle) => motorcycles += 1,
                None => {}
            }
        }

        Self {
            timestamp: current_timestamp(),
            tick,
            road_id: road.identifier(),
            road_name: road.name().to_string(),
            snapshot: road.snapshot(),
            occupied: cars + motorcycles,
            cars,
            motorcycles,
        }
    }
}

/// End-of-run totals for a simulated road.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub road_id: u64,
    pub road_name: String,
    pub ticks: u64,
    pub final_occupied: usize,
    pub final_cars: usize,
    pub final_motorcycles: usize,
    pub average_occupancy: f64,
    pub final_snapshot: String,
}
