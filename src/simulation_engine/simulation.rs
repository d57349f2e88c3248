// simulation.rs
use crate::monitoring::stats_log;
use crate::shared_data::{SimulationSummary, TickRecord};
use crate::simulation_engine::factory::{VehicleFactory, VehicleSource};
use crate::simulation_engine::road::Road;
use std::path::PathBuf;

/// Settings for one simulation run.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub road_name: String,
    pub capacity: i64,
    pub reverse_flow: bool,
    pub ticks: u64,
    /// Seed for the arrival factory; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Where to append per-tick records, if anywhere.
    pub stats_path: Option<PathBuf>,
}

impl SimulationConfig {
    /// Default run length: enough ticks for a vehicle to cross the road
    /// three times over.
    pub fn default_ticks(capacity: i64) -> u64 {
        3 * capacity.max(0) as u64 + 2
    }
}

/// Drives a single road for the configured number of ticks, printing one
/// snapshot line per tick, and returns the end-of-run summary.
pub fn run_simulation(config: &SimulationConfig) -> SimulationSummary {
    let source: Box<dyn VehicleSource> = match config.seed {
        Some(seed) => Box::new(VehicleFactory::seeded(seed)),
        None => Box::new(VehicleFactory::new()),
    };
    let mut road = Road::with_source(
        config.road_name.clone(),
        config.capacity,
        config.reverse_flow,
        source,
    );
    log::info!("starting run: {:?}, {} ticks", road, config.ticks);

    println!("{} ({})", road.name(), road.flow().label());
    let mut records = Vec::with_capacity(config.ticks as usize);
    for tick in 0..config.ticks {
        road.tick();
        println!("{:2}: {}", tick, road.snapshot());

        let record = TickRecord::collect(tick, &road);
        if let Some(path) = &config.stats_path {
            if let Err(e) = stats_log::log_to_csv(path, &record) {
                log::warn!("could not append tick record to {}: {}", path.display(), e);
            }
        }
        records.push(record);
    }

    stats_log::summarize(&road, &records)
}
