use crate::simulation_engine::vehicles::{Vehicle, VehicleKind};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Supplies the vehicles that arrive at the entry end of a road.
///
/// The lane tick pulls from this once per tick when its entry slot is open;
/// tests substitute their own implementations to control arrivals.
pub trait VehicleSource {
    /// Returns the next arriving vehicle, or `None` when nothing arrives
    /// this draw.
    fn next_random_vehicle(&mut self) -> Option<Vehicle>;
}

/// Random arrival process shared by all roads.
///
/// Draws are independent; each vehicle produced is freshly constructed with
/// its own identifier.
pub struct VehicleFactory {
    rng: SmallRng,
}

impl VehicleFactory {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Factory with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for VehicleFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleSource for VehicleFactory {
    fn next_random_vehicle(&mut self) -> Option<Vehicle> {
        // Car: 20%, Motorcycle: 5%, no arrival: 75%.
        let draw = self.rng.random_range(0..100);
        if draw < 20 {
            Some(Vehicle::new(VehicleKind::Car))
        } else if draw < 25 {
            Some(Vehicle::new(VehicleKind::Motorcycle))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn draw_distribution_matches_the_arrival_odds() {
        let mut factory = VehicleFactory::seeded(42);
        let draws = 1_000_000;
        let mut cars = 0u32;
        let mut motorcycles = 0u32;
        let mut absent = 0u32;

        for _ in 0..draws {
            match factory.next_random_vehicle().map(|v| v.kind()) {
                Some(VehicleKind::Car) => cars += 1,
                Some(VehicleKind::Motorcycle) => motorcycles += 1,
                None => absent += 1,
            }
        }

        let fraction = |count: u32| count as f64 / draws as f64;
        assert!((fraction(cars) - 0.20).abs() < 0.05);
        assert!((fraction(motorcycles) - 0.05).abs() < 0.05);
        assert!((fraction(absent) - 0.75).abs() < 0.05);
    }

    #[test]
    fn every_produced_vehicle_is_fresh() {
        let mut factory = VehicleFactory::seeded(7);
        let mut seen = HashSet::new();
        let mut produced = 0;

        while produced < 100 {
            if let Some(vehicle) = factory.next_random_vehicle() {
                assert!(seen.insert(vehicle.identifier()));
                produced += 1;
            }
        }
    }

    #[test]
    fn seeded_factories_repeat_their_stream() {
        let kinds = |seed: u64| -> Vec<Option<VehicleKind>> {
            let mut factory = VehicleFactory::seeded(seed);
            (0..200)
                .map(|_| factory.next_random_vehicle().map(|v| v.kind()))
                .collect()
        };
        assert_eq!(kinds(3), kinds(3));
    }
}
