use crate::error::SimulationError;
use crate::gameweek::{ChipKind, GameweekFacts};
use crate::squad::{PositionKind, Squad, SquadSlot};
use log::{debug, warn};
use serde::Serialize;

const CAPTAIN_MULTIPLIER: u8 = 2;
const TRIPLE_CAPTAIN_MULTIPLIER: u8 = 3;

const MIN_DEFENDERS: usize = 3;
const MIN_FORWARDS: usize = 1;

/// One scoring entry of a resolved gameweek: raw points plus the
/// multiplier they are counted with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringPick {
    pub player_id: u32,
    pub position_kind: PositionKind,
    pub points: i32,
    pub multiplier: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLineup {
    pub picks: Vec<ScoringPick>,
    pub auto_subs: u8,
}

impl ResolvedLineup {
    pub fn points(&self) -> i32 {
        self.picks
            .iter()
            .map(|pick| pick.points * pick.multiplier as i32)
            .sum()
    }

    /// Points beyond what a single-multiplier pick would have earned.
    pub fn captain_bonus(&self) -> i32 {
        self.picks
            .iter()
            .map(|pick| pick.points * (pick.multiplier as i32 - 1))
            .sum()
    }
}

pub struct LineupResolver;

impl LineupResolver {
    /// Resolves one gameweek of a frozen squad: bench substitutions for
    /// starters who did not play, captain fallback, chip multipliers.
    pub fn resolve(
        squad: &Squad,
        facts: &GameweekFacts,
        chip: Option<ChipKind>,
        gameweek: u8,
    ) -> Result<ResolvedLineup, SimulationError> {
        // Every referenced player needs a fact row before anything scores.
        for slot in squad.slots() {
            facts.require(slot.player_id, gameweek)?;
        }

        let mut lineup: Vec<&SquadSlot> = squad.starters().iter().collect();
        let mut used_bench: Vec<u32> = Vec::new();
        let mut auto_subs: u8 = 0;

        // Blank starters are processed in slot order; each scans the bench
        // in priority order against the lineup left by prior swaps. First
        // fit wins, never a globally optimal assignment.
        for index in 0..lineup.len() {
            if facts.require(lineup[index].player_id, gameweek)?.played() {
                continue;
            }

            let blank = lineup[index];
            let replacement = squad.bench().iter().find(|candidate| {
                !used_bench.contains(&candidate.player_id)
                    && facts.get(candidate.player_id).is_some_and(|fact| fact.played())
                    && Self::keeps_legal_formation(&lineup, index, candidate)
            });

            match replacement {
                Some(candidate) => {
                    debug!(
                        "gameweek {}: {} {} in for {} {}",
                        gameweek,
                        candidate.position_kind.get_short_name(),
                        candidate.player_id,
                        blank.position_kind.get_short_name(),
                        blank.player_id
                    );

                    used_bench.push(candidate.player_id);
                    lineup[index] = candidate;
                    auto_subs += 1;
                }
                None => {
                    warn!(
                        "gameweek {}: no legal replacement for {} {}, slot stays blank",
                        gameweek,
                        blank.position_kind.get_short_name(),
                        blank.player_id
                    );
                }
            }
        }

        let multiplier = match chip {
            Some(ChipKind::TripleCaptain) => TRIPLE_CAPTAIN_MULTIPLIER,
            _ => CAPTAIN_MULTIPLIER,
        };

        let effective_captain = Self::effective_captain(squad, &lineup, facts);

        if effective_captain.is_none() {
            debug!("gameweek {}: neither captain nor vice played, multiplier lost", gameweek);
        }

        let mut picks: Vec<ScoringPick> = lineup
            .iter()
            .map(|slot| {
                let fact = facts
                    .get(slot.player_id)
                    .expect("facts validated for the full squad");

                ScoringPick {
                    player_id: slot.player_id,
                    position_kind: slot.position_kind,
                    // A slot nobody could legally fill stays blank and scores zero.
                    points: if fact.played() { fact.points } else { 0 },
                    multiplier: if effective_captain == Some(slot.player_id) {
                        multiplier
                    } else {
                        1
                    },
                }
            })
            .collect();

        if chip == Some(ChipKind::BenchBoost) {
            for slot in squad.slots() {
                if lineup.iter().any(|s| s.player_id == slot.player_id) {
                    continue;
                }

                let fact = facts
                    .get(slot.player_id)
                    .expect("facts validated for the full squad");

                picks.push(ScoringPick {
                    player_id: slot.player_id,
                    position_kind: slot.position_kind,
                    points: if fact.played() { fact.points } else { 0 },
                    multiplier: 1,
                });
            }
        }

        Ok(ResolvedLineup { picks, auto_subs })
    }

    /// The formation envelope with `candidate` standing in at
    /// `replaced_index`: exactly 1 GK, at least 3 DEF, at least 1 FWD.
    /// Goalkeeper-for-goalkeeper swaps fall out of the same check.
    fn keeps_legal_formation(
        lineup: &[&SquadSlot],
        replaced_index: usize,
        candidate: &SquadSlot,
    ) -> bool {
        let mut goalkeepers = 0;
        let mut defenders = 0;
        let mut forwards = 0;

        for (index, slot) in lineup.iter().enumerate() {
            let kind = if index == replaced_index {
                candidate.position_kind
            } else {
                slot.position_kind
            };

            match kind {
                PositionKind::Goalkeeper => goalkeepers += 1,
                PositionKind::Defender => defenders += 1,
                PositionKind::Midfielder => {}
                PositionKind::Forward => forwards += 1,
            }
        }

        goalkeepers == 1 && defenders >= MIN_DEFENDERS && forwards >= MIN_FORWARDS
    }

    /// Captain if they made the resolved eleven with minutes on the pitch,
    /// otherwise the vice-captain under the same condition, otherwise nobody.
    fn effective_captain(
        squad: &Squad,
        lineup: &[&SquadSlot],
        facts: &GameweekFacts,
    ) -> Option<u32> {
        [Some(squad.captain()), squad.vice_captain()]
            .into_iter()
            .flatten()
            .find(|slot| {
                lineup.iter().any(|s| s.player_id == slot.player_id)
                    && facts.get(slot.player_id).is_some_and(|fact| fact.played())
            })
            .map(|slot| slot.player_id)
    }
}
