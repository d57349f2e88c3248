use crate::shared_data::{SimulationSummary, TickRecord};
use crate::simulation_engine::road::Road;
use serde::Serialize;
use std::error::Error;
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Appends one record to a CSV file, writing the header only when the file
/// is created by this call.
pub fn log_to_csv<T: Serialize>(path: &Path, record: &T) -> Result<(), Box<dyn Error>> {
    let file_exists = path.exists();
    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);
    wtr.serialize(record)?;
    wtr.flush()?;
    Ok(())
}

/// Reads a stats log back into tick records.
pub fn read_tick_history(path: &Path) -> Result<Vec<TickRecord>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: TickRecord = result?;
        records.push(record);
    }
    Ok(records)
}

/// Folds a run's tick records and the road's final state into a summary.
pub fn summarize(road: &Road, records: &[TickRecord]) -> SimulationSummary {
    let last = TickRecord::collect(records.len() as u64, road);
    let average_occupancy = if records.is_empty() {
        0.0
    } else {
        let total: usize = records.iter().map(|r| r.occupied).sum();
        total as f64 / records.len() as f64
    };

    SimulationSummary {
        road_id: road.identifier(),
        road_name: road.name().to_string(),
        ticks: records.len() as u64,
        final_occupied: last.occupied,
        final_cars: last.cars,
        final_motorcycles: last.motorcycles,
        average_occupancy,
        final_snapshot: last.snapshot,
    }
}
