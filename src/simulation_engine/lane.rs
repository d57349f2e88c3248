use crate::simulation_engine::factory::VehicleSource;
use crate::simulation_engine::vehicles::Vehicle;

/// A single lane of traffic: a fixed row of slots, each holding at most one
/// vehicle.
///
/// Storage orientation is fixed: slot 0 is the entry end and the highest
/// slot the exit end, whichever way the owning road flows. `reverse_flow`
/// only changes how outside-facing indices map onto the slots; the
/// advancement scan never looks at it.
#[derive(Debug)]
pub(crate) struct Lane {
    slots: Vec<Option<Vehicle>>,
    reverse_flow: bool,
}

impl Lane {
    pub(crate) fn new(capacity: usize, reverse_flow: bool) -> Self {
        Self {
            slots: vec![None; capacity],
            reverse_flow,
        }
    }

    /// Advances the lane by one step.
    ///
    /// The scan starts at the outgoing end, so a vehicle moves up exactly
    /// when the slot ahead is free by the time its index is visited and a
    /// column of vehicles behind a gap rolls forward in the same tick. A
    /// vehicle on the exit slot has nowhere to go and stays put. After the
    /// scan, an open entry slot takes whatever `source` hands out.
    pub(crate) fn tick(&mut self, source: &mut dyn VehicleSource) {
        for i in (1..self.slots.len()).rev() {
            if self.slots[i].is_some() {
                // Occupied; the vehicle behind cannot advance into it.
                continue;
            }
            self.slots[i] = self.slots[i - 1].take();
        }

        if let Some(entry) = self.slots.first_mut() {
            if entry.is_none() {
                *entry = source.next_random_vehicle();
            }
        }
    }

    /// Vehicle at an outside-facing index, where index 0 is the end the
    /// caller perceives as the start of travel. Out-of-range indices read
    /// as empty.
    pub(crate) fn vehicle_at(&self, index: usize) -> Option<&Vehicle> {
        if index >= self.slots.len() {
            return None;
        }

        let slot = if self.reverse_flow {
            self.slots.len() - index - 1
        } else {
            index
        };
        self.slots[slot].as_ref()
    }

    /// Drops a vehicle straight into a storage slot.
    #[cfg(test)]
    pub(crate) fn place(&mut self, slot: usize, vehicle: Vehicle) {
        self.slots[slot] = Some(vehicle);
    }

    /// Identifiers by storage slot, for asserting on lane layout.
    #[cfg(test)]
    pub(crate) fn occupant_identifiers(&self) -> Vec<Option<u64>> {
        self.slots
            .iter()
            .map(|slot| slot.as_ref().map(|v| v.identifier()))
            .collect()
    }
}
