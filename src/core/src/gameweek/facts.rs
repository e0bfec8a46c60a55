use crate::error::SimulationError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What a player actually did in one gameweek: minutes on the pitch and
/// raw, unmultiplied points. Supplied externally, immutable once fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerGameweekFact {
    pub minutes: u16,
    pub points: i32,
}

impl PlayerGameweekFact {
    pub fn new(minutes: u16, points: i32) -> Self {
        PlayerGameweekFact { minutes, points }
    }

    pub fn played(&self) -> bool {
        self.minutes > 0
    }
}

/// Facts for every relevant player in a single gameweek.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameweekFacts {
    facts: HashMap<u32, PlayerGameweekFact>,
}

impl GameweekFacts {
    pub fn new() -> Self {
        GameweekFacts::default()
    }

    pub fn insert(&mut self, player_id: u32, fact: PlayerGameweekFact) {
        self.facts.insert(player_id, fact);
    }

    pub fn get(&self, player_id: u32) -> Option<PlayerGameweekFact> {
        self.facts.get(&player_id).copied()
    }

    /// Facts missing for a referenced player are a precondition violation,
    /// not a default.
    pub fn require(
        &self,
        player_id: u32,
        gameweek: u8,
    ) -> Result<PlayerGameweekFact, SimulationError> {
        self.get(player_id)
            .ok_or(SimulationError::MissingFact { player_id, gameweek })
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl FromIterator<(u32, PlayerGameweekFact)> for GameweekFacts {
    fn from_iter<I: IntoIterator<Item = (u32, PlayerGameweekFact)>>(iter: I) -> Self {
        GameweekFacts {
            facts: iter.into_iter().collect(),
        }
    }
}

/// The historical facts feed: gameweek number to that week's facts.
/// A gameweek absent from this mapping has simply not been played yet.
pub type SeasonFacts = HashMap<u8, GameweekFacts>;
