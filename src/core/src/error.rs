use thiserror::Error;

/// Fatal conditions raised by the replay engine. A missing gameweek in the
/// facts input is not among them: that is a skip, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("squad must contain exactly {expected} slots, found {found}")]
    InvalidSquadSize { expected: usize, found: usize },

    #[error("slot position {0} is outside the 1-15 range")]
    SlotOutOfRange(u8),

    #[error("slot position {0} is assigned more than once")]
    DuplicateSlot(u8),

    #[error("player {0} occupies more than one squad slot")]
    DuplicatePlayer(u32),

    #[error("squad must designate exactly one captain, found {0}")]
    CaptainCount(usize),

    #[error("squad designates {0} vice-captains, at most one is allowed")]
    ViceCaptainCount(usize),

    #[error("no fact recorded for player {player_id} in gameweek {gameweek}")]
    MissingFact { player_id: u32, gameweek: u8 },

    #[error("manager {manager_id} has no recorded first active gameweek")]
    NoHistory { manager_id: u32 },

    #[error("invalid gameweek range: first {first}, current {current}")]
    InvalidGameweekRange { first: u8, current: u8 },
}
