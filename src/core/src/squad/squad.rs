use crate::error::SimulationError;
use crate::squad::PositionKind;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub const SQUAD_SIZE: usize = 15;
pub const STARTING_SIZE: usize = 11;
pub const BENCH_SIZE: usize = SQUAD_SIZE - STARTING_SIZE;

/// One of the 15 original picks. Immutable for the whole simulation:
/// the squad never changes across gameweeks by design.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadSlot {
    pub player_id: u32,
    pub slot_position: u8,
    pub position_kind: PositionKind,
    pub is_captain: bool,
    pub is_vice_captain: bool,
}

impl SquadSlot {
    pub fn is_starter(&self) -> bool {
        (self.slot_position as usize) <= STARTING_SIZE
    }
}

/// A validated 15-slot squad, ordered by slot position. Construction is
/// the single validation point; the resolver relies on these invariants.
#[derive(Debug, Clone)]
pub struct Squad {
    slots: Vec<SquadSlot>,
}

impl Squad {
    pub fn new(mut slots: Vec<SquadSlot>) -> Result<Squad, SimulationError> {
        if slots.len() != SQUAD_SIZE {
            return Err(SimulationError::InvalidSquadSize {
                expected: SQUAD_SIZE,
                found: slots.len(),
            });
        }

        if let Some(slot) = slots
            .iter()
            .find(|s| s.slot_position < 1 || s.slot_position as usize > SQUAD_SIZE)
        {
            return Err(SimulationError::SlotOutOfRange(slot.slot_position));
        }

        if let Some(position) = slots.iter().map(|s| s.slot_position).duplicates().next() {
            return Err(SimulationError::DuplicateSlot(position));
        }

        if let Some(player_id) = slots.iter().map(|s| s.player_id).duplicates().next() {
            return Err(SimulationError::DuplicatePlayer(player_id));
        }

        let captains = slots.iter().filter(|s| s.is_captain).count();
        if captains != 1 {
            return Err(SimulationError::CaptainCount(captains));
        }

        let vice_captains = slots.iter().filter(|s| s.is_vice_captain).count();
        if vice_captains > 1 {
            return Err(SimulationError::ViceCaptainCount(vice_captains));
        }

        slots.sort_by_key(|s| s.slot_position);

        Ok(Squad { slots })
    }

    pub fn slots(&self) -> &[SquadSlot] {
        &self.slots
    }

    /// Nominal starters, slots 1-11 in slot order.
    pub fn starters(&self) -> &[SquadSlot] {
        &self.slots[..STARTING_SIZE]
    }

    /// Bench, slots 12-15. The order is the fixed substitution priority
    /// and is never re-derived.
    pub fn bench(&self) -> &[SquadSlot] {
        &self.slots[STARTING_SIZE..]
    }

    pub fn captain(&self) -> &SquadSlot {
        self.slots
            .iter()
            .find(|s| s.is_captain)
            .expect("validated squad has exactly one captain")
    }

    pub fn vice_captain(&self) -> Option<&SquadSlot> {
        self.slots.iter().find(|s| s.is_vice_captain)
    }
}
