use crate::simulation_engine::factory::{VehicleFactory, VehicleSource};
use crate::simulation_engine::identifiers;
use crate::simulation_engine::lane::Lane;
use crate::simulation_engine::vehicles::Vehicle;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Compass flow of a road. `NorthEast` is the conventional forward
/// direction; `SouthWest` is the reversed one. Display metadata only — the
/// lane never consults it to move vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowDirection {
    NorthEast,
    SouthWest,
}

impl FlowDirection {
    pub fn label(self) -> &'static str {
        match self {
            FlowDirection::NorthEast => "NE",
            FlowDirection::SouthWest => "SW",
        }
    }

    fn from_reverse_flag(reverse_flow: bool) -> Self {
        if reverse_flow {
            FlowDirection::SouthWest
        } else {
            FlowDirection::NorthEast
        }
    }
}

/// A road carrying one lane of vehicular traffic.
///
/// Equality trusts the identifier, which the registry keeps unique across
/// all roads; name, capacity and flow only feed the cached hash.
pub struct Road {
    identifier: u64,
    name: String,
    capacity: usize,
    flow: FlowDirection,
    identity_hash: u64,
    lane: Lane,
    source: Box<dyn VehicleSource>,
}

impl Road {
    /// Builds a road whose arrivals come from the random vehicle factory.
    /// A negative capacity is clamped to zero.
    pub fn new(name: impl Into<String>, capacity: i64, reverse_flow: bool) -> Self {
        Self::with_source(name, capacity, reverse_flow, Box::new(VehicleFactory::new()))
    }

    /// Like [`Road::new`] but with a caller-supplied arrival source, for
    /// seeded runs and stubbed tests.
    pub fn with_source(
        name: impl Into<String>,
        capacity: i64,
        reverse_flow: bool,
        source: Box<dyn VehicleSource>,
    ) -> Self {
        let identifier = identifiers::next_road_identifier();
        let name = name.into();
        let capacity = capacity.max(0) as usize;
        let flow = FlowDirection::from_reverse_flag(reverse_flow);

        // Hashed once here; none of these fields change afterwards.
        let mut hasher = DefaultHasher::new();
        identifier.hash(&mut hasher);
        name.hash(&mut hasher);
        capacity.hash(&mut hasher);
        flow.label().hash(&mut hasher);

        Self {
            identifier,
            name,
            capacity,
            flow,
            identity_hash: hasher.finish(),
            lane: Lane::new(capacity, reverse_flow),
            source,
        }
    }

    pub fn identifier(&self) -> u64 {
        self.identifier
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn flow(&self) -> FlowDirection {
        self.flow
    }

    /// Advances the road by one simulation step. The lane manages its own
    /// ticks.
    pub fn tick(&mut self) {
        self.lane.tick(self.source.as_mut());
    }

    /// Vehicle at an outside-facing slot index; index 0 is where travel
    /// begins from the caller's point of view.
    pub fn vehicle_at(&self, index: usize) -> Option<&Vehicle> {
        self.lane.vehicle_at(index)
    }

    /// One character per slot in external order: `'_'` for an empty slot,
    /// otherwise the marker of the occupying vehicle's kind.
    pub fn snapshot(&self) -> String {
        (0..self.capacity)
            .map(|index| self.vehicle_at(index).map_or('_', |v| v.kind().marker()))
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn lane_mut(&mut self) -> &mut Lane {
        &mut self.lane
    }
}

impl PartialEq for Road {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for Road {}

impl Hash for Road {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.identity_hash);
    }
}

impl fmt::Debug for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Road")
            .field("identifier", &self.identifier)
            .field("name", &self.name)
            .field("capacity", &self.capacity)
            .field("flow", &self.flow.label())
            .finish()
    }
}
