use serde::Serialize;

/// Aggregate outcome of one manager's replayed season: what the frozen
/// gameweek-1 squad would have scored against what actually happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationResult {
    pub total_hypothetical_points: i32,
    pub total_actual_points: i32,
    pub difference: i32,
    pub auto_subs_made: u32,
    pub captain_points_gained: i32,
}

impl SimulationResult {
    pub fn new(
        total_hypothetical_points: i32,
        total_actual_points: i32,
        auto_subs_made: u32,
        captain_points_gained: i32,
    ) -> Self {
        SimulationResult {
            total_hypothetical_points,
            total_actual_points,
            difference: total_hypothetical_points - total_actual_points,
            auto_subs_made,
            captain_points_gained,
        }
    }
}
