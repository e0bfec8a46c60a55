use core::LeagueReplay;
use core::utils::TimeEstimation;
use database::{SeasonGenerator, SeasonLoader};
use env_logger::Env;
use log::{info, warn};
use std::env;

fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let is_generated_season = env::var("MODE") == Ok(String::from("GENERATE"));

    let (database, estimated) = if is_generated_season {
        TimeEstimation::estimate(SeasonGenerator::generate)
    } else {
        TimeEstimation::estimate(SeasonLoader::load)
    };

    info!("season data loaded: {} ms", estimated);

    let outcomes = LeagueReplay::run(&database.managers, &database.facts);

    for outcome in &outcomes {
        if let Err(error) = outcome {
            warn!("replay failed: {}", error);
        }
    }

    for (position, replay) in LeagueReplay::standings(&outcomes).iter().enumerate() {
        let result = &replay.result;

        info!(
            "{}. {}: set-and-forget {} vs actual {} ({:+}), {} auto-subs, captain +{}",
            position + 1,
            replay.manager_name,
            result.total_hypothetical_points,
            result.total_actual_points,
            result.difference,
            result.auto_subs_made,
            result.captain_points_gained
        );
    }
}
