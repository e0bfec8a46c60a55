use crate::SeasonDatabase;
use chrono::{Duration, NaiveDate};
use core::{
    ChipEvent, ChipKind, ChipSchedule, FINAL_GAMEWEEK, Gameweek, GameweekFacts, ManagerSeason,
    PlayerGameweekFact, PositionKind, SeasonFacts, Squad, SquadSlot,
};
use log::debug;
use rand::prelude::*;

const MANAGER_COUNT: u32 = 20;

const GOALKEEPER_POOL: u32 = 8;
const DEFENDER_POOL: u32 = 20;
const MIDFIELDER_POOL: u32 = 20;
const FORWARD_POOL: u32 = 12;

const BLANK_PROBABILITY: f64 = 0.15;

// Legal starting shapes: defenders, midfielders, forwards.
const FORMATIONS: [(usize, usize, usize); 6] = [
    (4, 4, 2),
    (3, 5, 2),
    (4, 3, 3),
    (3, 4, 3),
    (5, 4, 1),
    (5, 3, 2),
];

pub struct SeasonGenerator;

impl SeasonGenerator {
    /// Builds a randomized but structurally valid season: a full calendar,
    /// a shared player pool with weekly facts covering every player, and a
    /// league of managers with legal frozen squads.
    pub fn generate() -> SeasonDatabase {
        let mut rng = rand::rng();

        let current_gameweek = rng.random_range(8..=FINAL_GAMEWEEK);
        let gameweeks = Self::generate_calendar(current_gameweek);
        let players = Self::generate_player_pool();
        let facts = Self::generate_facts(&mut rng, &players, current_gameweek);

        let managers = (1..=MANAGER_COUNT)
            .map(|manager_id| {
                Self::generate_manager(&mut rng, manager_id, &players, current_gameweek)
            })
            .collect();

        debug!(
            "generated season: {} managers, {} of {} gameweeks played",
            MANAGER_COUNT, current_gameweek, FINAL_GAMEWEEK
        );

        SeasonDatabase {
            gameweeks,
            managers,
            facts,
        }
    }

    fn generate_calendar(current_gameweek: u8) -> Vec<Gameweek> {
        let opening_deadline = NaiveDate::from_ymd_opt(2025, 8, 16)
            .unwrap()
            .and_hms_opt(11, 0, 0)
            .unwrap();

        (1..=FINAL_GAMEWEEK)
            .map(|number| {
                let deadline = opening_deadline + Duration::weeks(number as i64 - 1);

                Gameweek::new(number, deadline, number <= current_gameweek)
            })
            .collect()
    }

    fn generate_player_pool() -> Vec<(u32, PositionKind)> {
        let groups = [
            (PositionKind::Goalkeeper, GOALKEEPER_POOL),
            (PositionKind::Defender, DEFENDER_POOL),
            (PositionKind::Midfielder, MIDFIELDER_POOL),
            (PositionKind::Forward, FORWARD_POOL),
        ];

        let mut players = Vec::new();
        let mut next_id = 1;

        for (position, pool_size) in groups {
            for _ in 0..pool_size {
                players.push((next_id, position));
                next_id += 1;
            }
        }

        players
    }

    fn generate_facts(
        rng: &mut impl Rng,
        players: &[(u32, PositionKind)],
        current_gameweek: u8,
    ) -> SeasonFacts {
        (1..=current_gameweek)
            .map(|gameweek| {
                let week: GameweekFacts = players
                    .iter()
                    .map(|&(player_id, _)| {
                        let fact = if rng.random_bool(BLANK_PROBABILITY) {
                            PlayerGameweekFact::new(0, 0)
                        } else {
                            PlayerGameweekFact::new(
                                rng.random_range(1..=90),
                                rng.random_range(-1..=14),
                            )
                        };

                        (player_id, fact)
                    })
                    .collect();

                (gameweek, week)
            })
            .collect()
    }

    fn generate_manager(
        rng: &mut impl Rng,
        manager_id: u32,
        players: &[(u32, PositionKind)],
        current_gameweek: u8,
    ) -> ManagerSeason {
        let (defenders, midfielders, forwards) = *FORMATIONS.choose(rng).unwrap();

        // The fixed squad shape: 2 GK, 5 DEF, 5 MID, 3 FWD.
        let goalkeepers = Self::pick(rng, players, PositionKind::Goalkeeper, 2);
        let defence = Self::pick(rng, players, PositionKind::Defender, 5);
        let midfield = Self::pick(rng, players, PositionKind::Midfielder, 5);
        let attack = Self::pick(rng, players, PositionKind::Forward, 3);

        let mut starters: Vec<(u32, PositionKind)> = Vec::with_capacity(11);
        starters.push(goalkeepers[0]);
        starters.extend_from_slice(&defence[..defenders]);
        starters.extend_from_slice(&midfield[..midfielders]);
        starters.extend_from_slice(&attack[..forwards]);

        // Reserve goalkeeper first, then the leftover outfielders in a
        // random priority order.
        let mut bench: Vec<(u32, PositionKind)> = vec![goalkeepers[1]];
        let mut outfield_bench: Vec<(u32, PositionKind)> = defence[defenders..]
            .iter()
            .chain(&midfield[midfielders..])
            .chain(&attack[forwards..])
            .copied()
            .collect();
        outfield_bench.shuffle(rng);
        bench.extend(outfield_bench);

        let captain_index = rng.random_range(0..11);
        let vice_index = (captain_index + rng.random_range(1..11)) % 11;

        let slots = starters
            .iter()
            .chain(&bench)
            .enumerate()
            .map(|(index, &(player_id, position_kind))| SquadSlot {
                player_id,
                slot_position: index as u8 + 1,
                position_kind,
                is_captain: index == captain_index,
                is_vice_captain: index == vice_index,
            })
            .collect();

        let first_active_gameweek = if rng.random_bool(0.2) {
            rng.random_range(2..=5)
        } else {
            1
        };

        ManagerSeason {
            manager_id,
            name: format!("Manager {}", manager_id),
            first_active_gameweek,
            current_gameweek,
            squad: Squad::new(slots).expect("generated squad is always legal"),
            chips: ChipSchedule::new(Self::generate_chips(
                rng,
                first_active_gameweek,
                current_gameweek,
            )),
            actual_points: (first_active_gameweek..=current_gameweek)
                .map(|gameweek| (gameweek, rng.random_range(30..=85)))
                .collect(),
        }
    }

    fn pick(
        rng: &mut impl Rng,
        players: &[(u32, PositionKind)],
        position: PositionKind,
        count: usize,
    ) -> Vec<(u32, PositionKind)> {
        let pool: Vec<(u32, PositionKind)> = players
            .iter()
            .filter(|(_, kind)| *kind == position)
            .copied()
            .collect();

        pool.choose_multiple(rng, count).copied().collect()
    }

    // At most one chip per gameweek: each activation takes its own week.
    fn generate_chips(rng: &mut impl Rng, first: u8, current: u8) -> Vec<ChipEvent> {
        let mut weeks: Vec<u8> = (first..=current).collect();
        weeks.shuffle(rng);

        let chances = [
            (ChipKind::TripleCaptain, 0.7),
            (ChipKind::BenchBoost, 0.5),
            (ChipKind::Wildcard, 0.3),
        ];

        let mut events = Vec::new();

        for (kind, probability) in chances {
            if rng.random_bool(probability) {
                if let Some(gameweek) = weeks.pop() {
                    events.push(ChipEvent { kind, gameweek });
                }
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::LeagueReplay;

    #[test]
    fn generated_season_replays_without_errors() {
        let database = SeasonGenerator::generate();

        assert_eq!(database.managers.len(), MANAGER_COUNT as usize);
        assert_eq!(database.gameweeks.len(), FINAL_GAMEWEEK as usize);

        let outcomes = LeagueReplay::run(&database.managers, &database.facts);

        assert!(outcomes.iter().all(|outcome| outcome.is_ok()));
    }

    #[test]
    fn generated_facts_cover_every_squad_for_every_played_week() {
        let database = SeasonGenerator::generate();

        let played = database
            .gameweeks
            .iter()
            .filter(|gameweek| gameweek.finished)
            .count();
        assert_eq!(database.facts.len(), played);

        for (gameweek, facts) in &database.facts {
            for manager in &database.managers {
                for slot in manager.squad.slots() {
                    assert!(
                        facts.get(slot.player_id).is_some(),
                        "player {} has no fact in gameweek {}",
                        slot.player_id,
                        gameweek
                    );
                }
            }
        }
    }
}
