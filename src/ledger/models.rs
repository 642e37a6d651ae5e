use std::fmt;

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Column order of the persisted ledger file.
pub const CSV_HEADERS: [&str; 6] = [
    "player",
    "origin_title",
    "destination_title",
    "jump_count",
    "points",
    "timestamp",
];

/// Timestamp format used in the ledger file, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The fixed roster. Results naming anyone else never enter the ledger.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum Player {
    Alejandro,
    #[serde(rename = "Nicolás")]
    Nicolas,
}

impl Player {
    /// Display names of every roster member, in declaration order.
    pub fn roster() -> Vec<String> {
        Player::iter().map(|p| p.to_string()).collect()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Player::Alejandro => "Alejandro",
                Player::Nicolas => "Nicolás",
            }
        )
    }
}

impl TryFrom<&str> for Player {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "Alejandro" => Ok(Player::Alejandro),
            "Nicolás" => Ok(Player::Nicolas),
            _ => Err(s.to_string()),
        }
    }
}

/// One completed round as persisted in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub player: Player,
    pub origin_title: String,
    pub destination_title: String,
    pub jump_count: u32,
    pub points: u32,
    pub timestamp: DateTime<Utc>,
}

impl GameResult {
    /// Builds a result stamped with the current time, truncated to second
    /// precision to match the ledger format.
    pub fn recorded_now(
        player: Player,
        origin_title: impl Into<String>,
        destination_title: impl Into<String>,
        jump_count: u32,
        points: u32,
    ) -> Self {
        Self {
            player,
            origin_title: origin_title.into(),
            destination_title: destination_title.into(),
            jump_count,
            points,
            timestamp: Utc::now().trunc_subsecs(0),
        }
    }

    pub fn to_record(&self) -> csv::StringRecord {
        csv::StringRecord::from(vec![
            self.player.to_string(),
            self.origin_title.clone(),
            self.destination_title.clone(),
            self.jump_count.to_string(),
            self.points.to_string(),
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        ])
    }

    /// Parses one ledger row. Any missing or malformed field fails the row,
    /// never the whole ledger.
    pub fn from_record(record: &csv::StringRecord) -> Result<Self, String> {
        let field = |idx: usize, name: &str| -> Result<&str, String> {
            record.get(idx).ok_or_else(|| format!("missing {name}"))
        };

        let player = Player::try_from(field(0, "player")?)
            .map_err(|raw| format!("unknown player {raw:?}"))?;
        let origin_title = field(1, "origin_title")?.to_string();
        let destination_title = field(2, "destination_title")?.to_string();
        let raw_jumps = field(3, "jump_count")?;
        let jump_count: u32 = raw_jumps
            .parse()
            .map_err(|_| format!("non-numeric jump_count {raw_jumps:?}"))?;
        let raw_points = field(4, "points")?;
        let points: u32 = raw_points
            .parse()
            .map_err(|_| format!("non-numeric points {raw_points:?}"))?;
        let raw_timestamp = field(5, "timestamp")?;
        let timestamp = NaiveDateTime::parse_from_str(raw_timestamp, TIMESTAMP_FORMAT)
            .map_err(|_| format!("bad timestamp {raw_timestamp:?}"))?
            .and_utc();

        Ok(Self {
            player,
            origin_title,
            destination_title,
            jump_count,
            points,
            timestamp,
        })
    }
}
