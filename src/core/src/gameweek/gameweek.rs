use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const FINAL_GAMEWEEK: u8 = 38;

/// One round of the season calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gameweek {
    pub number: u8,
    pub deadline: NaiveDateTime,
    pub finished: bool,
}

impl Gameweek {
    pub fn new(number: u8, deadline: NaiveDateTime, finished: bool) -> Self {
        Gameweek { number, deadline, finished }
    }

    /// The latest finished gameweek: the default replay horizon.
    pub fn latest_finished(gameweeks: &[Gameweek]) -> Option<u8> {
        gameweeks
            .iter()
            .filter(|gameweek| gameweek.finished)
            .map(|gameweek| gameweek.number)
            .max()
    }
}
