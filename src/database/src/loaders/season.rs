use crate::SeasonDatabase;
use chrono::NaiveDateTime;
use core::{
    ChipEvent, ChipSchedule, Gameweek, ManagerSeason, PlayerGameweekFact, PositionKind,
    SeasonFacts, Squad, SquadSlot,
};
use serde::Deserialize;

const STATIC_SEASON_JSON: &str = include_str!("../data/season.json");

#[derive(Deserialize)]
pub struct SeasonEntity {
    pub players: Vec<PlayerEntity>,
    pub gameweeks: Vec<GameweekEntity>,
    pub managers: Vec<ManagerEntity>,
    pub facts: Vec<GameweekFactsEntity>,
}

#[derive(Deserialize)]
pub struct PlayerEntity {
    pub id: u32,
    pub name: String,
    pub position: PositionKind,
}

#[derive(Deserialize)]
pub struct GameweekEntity {
    pub number: u8,
    pub deadline: NaiveDateTime,
    pub finished: bool,
}

#[derive(Deserialize)]
pub struct ManagerEntity {
    pub id: u32,
    pub name: String,
    pub first_active_gameweek: u8,
    pub picks: Vec<PickEntity>,
    pub chips: Vec<ChipEvent>,
    pub actual_points: Vec<ActualPointsEntity>,
}

#[derive(Deserialize)]
pub struct PickEntity {
    pub player_id: u32,
    pub slot_position: u8,
    pub is_captain: bool,
    pub is_vice_captain: bool,
}

#[derive(Deserialize)]
pub struct ActualPointsEntity {
    pub gameweek: u8,
    pub points: i32,
}

#[derive(Deserialize)]
pub struct GameweekFactsEntity {
    pub gameweek: u8,
    pub players: Vec<FactEntity>,
}

#[derive(Deserialize)]
pub struct FactEntity {
    pub player_id: u32,
    pub minutes: u16,
    pub points: i32,
}

pub struct SeasonLoader;

impl SeasonLoader {
    pub fn load() -> SeasonDatabase {
        let entity: SeasonEntity = serde_json::from_str(STATIC_SEASON_JSON).unwrap();

        Self::from_entity(entity)
    }

    fn from_entity(entity: SeasonEntity) -> SeasonDatabase {
        let gameweeks: Vec<Gameweek> = entity
            .gameweeks
            .iter()
            .map(|gameweek| Gameweek::new(gameweek.number, gameweek.deadline, gameweek.finished))
            .collect();

        let current_gameweek = Gameweek::latest_finished(&gameweeks)
            .expect("season dataset has no finished gameweek");

        let facts: SeasonFacts = entity
            .facts
            .iter()
            .map(|week| {
                (
                    week.gameweek,
                    week.players
                        .iter()
                        .map(|fact| {
                            (
                                fact.player_id,
                                PlayerGameweekFact::new(fact.minutes, fact.points),
                            )
                        })
                        .collect(),
                )
            })
            .collect();

        let managers = entity
            .managers
            .iter()
            .map(|manager| Self::convert_manager(manager, &entity.players, current_gameweek))
            .collect();

        SeasonDatabase {
            gameweeks,
            managers,
            facts,
        }
    }

    fn convert_manager(
        manager: &ManagerEntity,
        players: &[PlayerEntity],
        current_gameweek: u8,
    ) -> ManagerSeason {
        let slots = manager
            .picks
            .iter()
            .map(|pick| {
                let player = players
                    .iter()
                    .find(|player| player.id == pick.player_id)
                    .expect("pick references an unknown player");

                SquadSlot {
                    player_id: pick.player_id,
                    slot_position: pick.slot_position,
                    position_kind: player.position,
                    is_captain: pick.is_captain,
                    is_vice_captain: pick.is_vice_captain,
                }
            })
            .collect();

        ManagerSeason {
            manager_id: manager.id,
            name: manager.name.clone(),
            first_active_gameweek: manager.first_active_gameweek,
            current_gameweek,
            squad: Squad::new(slots).expect("invalid squad in season dataset"),
            chips: ChipSchedule::new(manager.chips.clone()),
            actual_points: manager
                .actual_points
                .iter()
                .map(|actual| (actual.gameweek, actual.points))
                .collect(),
        }
    }
}
