use serde::{Deserialize, Serialize};

/// A one-time special rule a manager may activate for a single gameweek.
/// Wildcard and Free Hit imply a squad change, which contradicts the
/// set-and-forget premise: the engine accepts them and ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChipKind {
    TripleCaptain,
    BenchBoost,
    Wildcard,
    #[serde(rename = "freehit")]
    FreeHit,
}

impl ChipKind {
    pub fn affects_scoring(&self) -> bool {
        matches!(self, ChipKind::TripleCaptain | ChipKind::BenchBoost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipEvent {
    pub kind: ChipKind,
    pub gameweek: u8,
}

/// Chip activations for one manager across the season.
#[derive(Debug, Clone, Default)]
pub struct ChipSchedule {
    events: Vec<ChipEvent>,
}

impl ChipSchedule {
    pub fn new(events: Vec<ChipEvent>) -> Self {
        ChipSchedule { events }
    }

    /// The chip played in the given gameweek, if any. At most one chip can
    /// be active per gameweek; the first recorded event wins.
    pub fn active(&self, gameweek: u8) -> Option<ChipKind> {
        self.events
            .iter()
            .find(|event| event.gameweek == gameweek)
            .map(|event| event.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_returns_the_chip_for_its_gameweek_only() {
        let schedule = ChipSchedule::new(vec![
            ChipEvent { kind: ChipKind::TripleCaptain, gameweek: 5 },
            ChipEvent { kind: ChipKind::BenchBoost, gameweek: 30 },
        ]);

        assert_eq!(schedule.active(5), Some(ChipKind::TripleCaptain));
        assert_eq!(schedule.active(30), Some(ChipKind::BenchBoost));
        assert_eq!(schedule.active(6), None);
    }

    #[test]
    fn only_triple_captain_and_bench_boost_affect_scoring() {
        assert!(ChipKind::TripleCaptain.affects_scoring());
        assert!(ChipKind::BenchBoost.affects_scoring());
        assert!(!ChipKind::Wildcard.affects_scoring());
        assert!(!ChipKind::FreeHit.affects_scoring());
    }
}
