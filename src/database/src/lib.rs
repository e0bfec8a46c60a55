pub mod generators;
pub mod loaders;

pub use generators::*;
pub use loaders::*;

use core::{Gameweek, ManagerSeason, SeasonFacts};

/// A full season of replay input: the calendar, every manager's frozen
/// squad and history, and the league-wide player facts.
pub struct SeasonDatabase {
    pub gameweeks: Vec<Gameweek>,
    pub managers: Vec<ManagerSeason>,
    pub facts: SeasonFacts,
}
