use crate::error::SimulationError;
use crate::gameweek::{ChipSchedule, FINAL_GAMEWEEK, SeasonFacts};
use crate::lineup::LineupResolver;
use crate::simulator::SimulationResult;
use crate::squad::Squad;
use log::debug;
use std::collections::HashMap;

/// Everything known about one manager entering the replay: identity, the
/// frozen squad, chip activations, and the real recorded weekly totals.
#[derive(Debug, Clone)]
pub struct ManagerSeason {
    pub manager_id: u32,
    pub name: String,
    pub first_active_gameweek: u8,
    pub current_gameweek: u8,
    pub squad: Squad,
    pub chips: ChipSchedule,
    pub actual_points: HashMap<u8, i32>,
}

pub struct SeasonSimulator;

impl SeasonSimulator {
    /// Replays the manager's first squad across every gameweek from their
    /// first active week to the current one, accumulating hypothetical
    /// points, substitutions and captain bonus into a single result.
    ///
    /// A gameweek absent from `facts` has not been played: it contributes
    /// nothing to either total. Any resolver error aborts the whole
    /// manager, partial season totals are not a meaningful result.
    pub fn simulate(
        manager: &ManagerSeason,
        facts: &SeasonFacts,
    ) -> Result<SimulationResult, SimulationError> {
        if manager.first_active_gameweek == 0 {
            return Err(SimulationError::NoHistory {
                manager_id: manager.manager_id,
            });
        }

        if manager.first_active_gameweek > manager.current_gameweek
            || manager.current_gameweek > FINAL_GAMEWEEK
        {
            return Err(SimulationError::InvalidGameweekRange {
                first: manager.first_active_gameweek,
                current: manager.current_gameweek,
            });
        }

        let mut total_hypothetical = 0;
        let mut total_actual = 0;
        let mut auto_subs_made: u32 = 0;
        let mut captain_points_gained = 0;

        for gameweek in manager.first_active_gameweek..=manager.current_gameweek {
            let Some(gameweek_facts) = facts.get(&gameweek) else {
                debug!(
                    "manager {}: gameweek {} has no facts yet, skipping",
                    manager.manager_id, gameweek
                );
                continue;
            };

            let chip = manager.chips.active(gameweek);

            let lineup = LineupResolver::resolve(&manager.squad, gameweek_facts, chip, gameweek)?;

            total_hypothetical += lineup.points();
            captain_points_gained += lineup.captain_bonus();
            auto_subs_made += lineup.auto_subs as u32;

            total_actual += manager.actual_points.get(&gameweek).copied().unwrap_or(0);
        }

        Ok(SimulationResult::new(
            total_hypothetical,
            total_actual,
            auto_subs_made,
            captain_points_gained,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameweek::{ChipEvent, ChipKind, GameweekFacts, PlayerGameweekFact};
    use crate::squad::{PositionKind, SQUAD_SIZE, SquadSlot};

    // 4-4-2 with a GK/DEF/MID/FWD bench, captain 109, vice 105.
    fn generate_test_squad() -> Squad {
        let kinds = [
            PositionKind::Goalkeeper,
            PositionKind::Defender,
            PositionKind::Defender,
            PositionKind::Defender,
            PositionKind::Defender,
            PositionKind::Midfielder,
            PositionKind::Midfielder,
            PositionKind::Midfielder,
            PositionKind::Midfielder,
            PositionKind::Forward,
            PositionKind::Forward,
            PositionKind::Goalkeeper,
            PositionKind::Defender,
            PositionKind::Midfielder,
            PositionKind::Forward,
        ];

        let slots = kinds
            .iter()
            .enumerate()
            .map(|(index, &position_kind)| SquadSlot {
                player_id: 100 + index as u32,
                slot_position: index as u8 + 1,
                position_kind,
                is_captain: index == 9,
                is_vice_captain: index == 5,
            })
            .collect();

        Squad::new(slots).unwrap()
    }

    fn generate_test_manager(first: u8, current: u8, chips: Vec<ChipEvent>) -> ManagerSeason {
        ManagerSeason {
            manager_id: 42,
            name: String::from("Set And Forget FC"),
            first_active_gameweek: first,
            current_gameweek: current,
            squad: generate_test_squad(),
            chips: ChipSchedule::new(chips),
            actual_points: HashMap::new(),
        }
    }

    // Everyone plays 90 minutes for 2 points.
    fn full_strength_week() -> GameweekFacts {
        (100..100 + SQUAD_SIZE as u32)
            .map(|player_id| (player_id, PlayerGameweekFact::new(90, 2)))
            .collect()
    }

    fn generate_season_facts(gameweeks: &[u8]) -> SeasonFacts {
        gameweeks
            .iter()
            .map(|&gameweek| (gameweek, full_strength_week()))
            .collect()
    }

    #[test]
    fn accumulates_every_gameweek_in_range() {
        let mut manager = generate_test_manager(1, 3, vec![]);
        manager.actual_points = HashMap::from([(1, 20), (2, 25), (3, 30)]);
        let facts = generate_season_facts(&[1, 2, 3]);

        let result = SeasonSimulator::simulate(&manager, &facts).unwrap();

        // 11 x 2 points with the captain doubled, per week
        assert_eq!(result.total_hypothetical_points, 72);
        assert_eq!(result.total_actual_points, 75);
        assert_eq!(result.difference, -3);
        assert_eq!(result.auto_subs_made, 0);
        assert_eq!(result.captain_points_gained, 6);
    }

    #[test]
    fn absent_gameweek_contributes_nothing_anywhere() {
        let mut manager = generate_test_manager(1, 3, vec![]);
        manager.actual_points = HashMap::from([(1, 10), (2, 99), (3, 10)]);
        let facts = generate_season_facts(&[1, 3]);

        let result = SeasonSimulator::simulate(&manager, &facts).unwrap();

        assert_eq!(result.total_hypothetical_points, 48);
        assert_eq!(result.total_actual_points, 20);
        assert_eq!(result.auto_subs_made, 0);
    }

    #[test]
    fn late_joiner_starts_at_their_first_active_gameweek() {
        let mut manager = generate_test_manager(3, 5, vec![]);
        manager.actual_points = HashMap::from([(1, 99), (3, 10), (4, 10), (5, 10)]);
        let facts = generate_season_facts(&[1, 2, 3, 4, 5]);

        let result = SeasonSimulator::simulate(&manager, &facts).unwrap();

        assert_eq!(result.total_hypothetical_points, 72);
        assert_eq!(result.total_actual_points, 30);
    }

    #[test]
    fn triple_captain_week_with_blank_captain_pays_the_vice() {
        let manager = generate_test_manager(
            1,
            1,
            vec![ChipEvent {
                kind: ChipKind::TripleCaptain,
                gameweek: 1,
            }],
        );

        let mut week = full_strength_week();
        week.insert(109, PlayerGameweekFact::new(0, 0));
        week.insert(105, PlayerGameweekFact::new(90, 10));
        let facts = SeasonFacts::from([(1, week)]);

        let result = SeasonSimulator::simulate(&manager, &facts).unwrap();

        // Vice scores 10 x 3, the bench defender covers the blank captain,
        // the other nine starters add 2 each.
        assert_eq!(result.total_hypothetical_points, 50);
        assert_eq!(result.captain_points_gained, 20);
        assert_eq!(result.auto_subs_made, 1);
    }

    #[test]
    fn bench_boost_week_adds_the_bench_at_single_multiplier() {
        let manager = generate_test_manager(
            1,
            2,
            vec![ChipEvent {
                kind: ChipKind::BenchBoost,
                gameweek: 2,
            }],
        );
        let facts = generate_season_facts(&[1, 2]);

        let result = SeasonSimulator::simulate(&manager, &facts).unwrap();

        // 24 for the plain week, 24 + 8 bench points for the boosted one
        assert_eq!(result.total_hypothetical_points, 56);
    }

    #[test]
    fn wildcard_and_freehit_events_do_not_change_the_result() {
        let facts = generate_season_facts(&[1, 2]);

        let plain = generate_test_manager(1, 2, vec![]);
        let with_ignored_chips = generate_test_manager(
            1,
            2,
            vec![
                ChipEvent {
                    kind: ChipKind::Wildcard,
                    gameweek: 1,
                },
                ChipEvent {
                    kind: ChipKind::FreeHit,
                    gameweek: 2,
                },
            ],
        );

        assert_eq!(
            SeasonSimulator::simulate(&plain, &facts).unwrap(),
            SeasonSimulator::simulate(&with_ignored_chips, &facts).unwrap()
        );
    }

    #[test]
    fn simulate_is_idempotent() {
        let mut manager = generate_test_manager(1, 4, vec![]);
        manager.actual_points = HashMap::from([(1, 30), (2, 40)]);
        let facts = generate_season_facts(&[1, 2, 4]);

        let first = SeasonSimulator::simulate(&manager, &facts).unwrap();
        let second = SeasonSimulator::simulate(&manager, &facts).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn manager_without_a_first_active_gameweek_cannot_be_simulated() {
        let manager = generate_test_manager(0, 5, vec![]);
        let facts = generate_season_facts(&[1]);

        assert_eq!(
            SeasonSimulator::simulate(&manager, &facts).unwrap_err(),
            SimulationError::NoHistory { manager_id: 42 }
        );
    }

    #[test]
    fn inverted_gameweek_range_is_rejected() {
        let manager = generate_test_manager(5, 4, vec![]);
        let facts = generate_season_facts(&[4, 5]);

        assert_eq!(
            SeasonSimulator::simulate(&manager, &facts).unwrap_err(),
            SimulationError::InvalidGameweekRange {
                first: 5,
                current: 4
            }
        );
    }

    #[test]
    fn resolver_error_aborts_the_whole_manager() {
        let manager = generate_test_manager(1, 3, vec![]);
        let mut facts = generate_season_facts(&[1, 2, 3]);

        // Gameweek 2 is present but silent about one squad player.
        let incomplete: GameweekFacts = (100..114)
            .map(|player_id| (player_id, PlayerGameweekFact::new(90, 2)))
            .collect();
        facts.insert(2, incomplete);

        assert_eq!(
            SeasonSimulator::simulate(&manager, &facts).unwrap_err(),
            SimulationError::MissingFact {
                player_id: 114,
                gameweek: 2
            }
        );
    }
}
