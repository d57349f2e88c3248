// identifiers.rs
use std::sync::atomic::{AtomicU64, Ordering};

// One sequence shared by every vehicle kind, a separate one for roads.
// A road and a vehicle may therefore carry the same number; entities of
// the same kind never do.
static NEXT_VEHICLE_IDENTIFIER: AtomicU64 = AtomicU64::new(1);
static NEXT_ROAD_IDENTIFIER: AtomicU64 = AtomicU64::new(1);

/// Issues the next vehicle identifier, strictly increasing for the life of
/// the process.
pub fn next_vehicle_identifier() -> u64 {
    NEXT_VEHICLE_IDENTIFIER.fetch_add(1, Ordering::Relaxed)
}

/// Issues the next road identifier, independent of the vehicle sequence.
pub fn next_road_identifier() -> u64 {
    NEXT_ROAD_IDENTIFIER.fetch_add(1, Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_identifiers_strictly_increase() {
        let first = next_vehicle_identifier();
        let second = next_vehicle_identifier();
        let third = next_vehicle_identifier();
        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn road_identifiers_strictly_increase() {
        let first = next_road_identifier();
        let second = next_road_identifier();
        assert!(first < second);
    }

    #[test]
    fn sequences_never_repeat_within_a_run() {
        let issued: Vec<u64> = (0..100).map(|_| next_vehicle_identifier()).collect();
        let mut deduped = issued.clone();
        deduped.dedup();
        assert_eq!(issued, deduped);
    }
}
