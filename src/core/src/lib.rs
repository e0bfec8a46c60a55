pub mod error;
pub mod gameweek;
pub mod league;
pub mod lineup;
pub mod simulator;
pub mod squad;
pub mod utils;

pub use error::SimulationError;

// Re-export squad items
pub use squad::{
    PositionKind, Squad, SquadSlot,
    SQUAD_SIZE, STARTING_SIZE, BENCH_SIZE,
};

// Re-export gameweek items
pub use gameweek::{
    ChipEvent, ChipKind, ChipSchedule,
    Gameweek, GameweekFacts, PlayerGameweekFact, SeasonFacts,
    FINAL_GAMEWEEK,
};

pub use lineup::{LineupResolver, ResolvedLineup, ScoringPick};
pub use simulator::{ManagerSeason, SeasonSimulator, SimulationResult};
pub use league::{LeagueReplay, ManagerReplayResult};

pub use utils::*;
