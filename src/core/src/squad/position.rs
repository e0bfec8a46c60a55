use serde::{Deserialize, Serialize};

/// Position kind of a pick, fixed per player for the whole season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionKind {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl PositionKind {
    pub fn get_short_name(&self) -> &'static str {
        match self {
            PositionKind::Goalkeeper => "GK",
            PositionKind::Defender => "DEF",
            PositionKind::Midfielder => "MID",
            PositionKind::Forward => "FWD",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, PositionKind::Goalkeeper)
    }
}
