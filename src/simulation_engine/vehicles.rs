use crate::simulation_engine::identifiers;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Different kinds of vehicles that can appear on a road.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Car,
    Motorcycle,
}

impl VehicleKind {
    /// Lowercase tag for this kind, as used in reports.
    pub fn label(self) -> &'static str {
        match self {
            VehicleKind::Car => "car",
            VehicleKind::Motorcycle => "motorcycle",
        }
    }

    /// First letter of the label, used to draw the vehicle in a snapshot.
    pub fn marker(self) -> char {
        match self {
            VehicleKind::Car => 'c',
            VehicleKind::Motorcycle => 'm',
        }
    }
}

/// A vehicle occupying one slot of a lane.
///
/// The identifier comes from the sequence shared by all kinds and never
/// changes, so two vehicles of the same kind are the same vehicle exactly
/// when their identifiers match. Vehicles of different kinds are never
/// equal, even if their identifiers coincide.
#[derive(Debug, Clone)]
pub struct Vehicle {
    identifier: u64,
    kind: VehicleKind,
    identity_hash: u64,
}

impl Vehicle {
    /// Creates a vehicle of the given kind with a freshly issued identifier.
    pub fn new(kind: VehicleKind) -> Self {
        Self::build(kind, identifiers::next_vehicle_identifier())
    }

    fn build(kind: VehicleKind, identifier: u64) -> Self {
        // The fields feeding the hash never change, so it is computed once
        // here and reused for the lifetime of the vehicle.
        let mut hasher = DefaultHasher::new();
        kind.label().hash(&mut hasher);
        identifier.hash(&mut hasher);
        Self {
            identifier,
            kind,
            identity_hash: hasher.finish(),
        }
    }

    /// Forges a vehicle with a chosen identifier, bypassing the registry.
    #[cfg(test)]
    pub(crate) fn with_identifier(kind: VehicleKind, identifier: u64) -> Self {
        Self::build(kind, identifier)
    }

    pub fn identifier(&self) -> u64 {
        self.identifier
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }
}

impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        // Identifiers are trusted to be unique within a kind.
        self.kind == other.kind && self.identifier == other.identifier
    }
}

impl Eq for Vehicle {}

impl Hash for Vehicle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.identity_hash);
    }
}
