use crate::error::SimulationError;
use crate::gameweek::SeasonFacts;
use crate::simulator::{ManagerSeason, SeasonSimulator, SimulationResult};
use crate::utils::Logging;
use itertools::Itertools;
use log::info;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;
use std::cmp::Reverse;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagerReplayResult {
    pub manager_id: u32,
    pub manager_name: String,
    pub result: SimulationResult,
}

pub struct LeagueReplay;

impl LeagueReplay {
    /// Replays every manager of a league. Managers share nothing, so they
    /// run in parallel; each keeps its own outcome and the caller decides
    /// whether a failed manager is skipped or fails the batch.
    pub fn run(
        managers: &[ManagerSeason],
        facts: &SeasonFacts,
    ) -> Vec<Result<ManagerReplayResult, SimulationError>> {
        info!("replaying league: {} managers", managers.len());

        managers
            .par_iter()
            .map(|manager| {
                let message = format!("replay manager {} ({})", manager.name, manager.manager_id);

                Logging::estimate_result(|| SeasonSimulator::simulate(manager, facts), &message)
                    .map(|result| ManagerReplayResult {
                        manager_id: manager.manager_id,
                        manager_name: manager.name.clone(),
                        result,
                    })
            })
            .collect()
    }

    /// Successful replays ordered by how far the frozen squad would have
    /// out- or under-scored the real season, best first.
    pub fn standings(
        outcomes: &[Result<ManagerReplayResult, SimulationError>],
    ) -> Vec<&ManagerReplayResult> {
        outcomes
            .iter()
            .flatten()
            .sorted_by_key(|replay| Reverse(replay.result.difference))
            .collect()
    }
}
