use std::collections::BTreeMap;
use std::sync::Arc;

use crate::ledger::{GameResult, LedgerError, LedgerRepository};

use super::models::{PlayerSummary, SeriesPoint};
use super::PODIUM_LIMIT;

/// Per-player ranking over the whole ledger: games played, total points,
/// mean points, mean jumps. Ordered by total points descending, then player
/// name ascending so ties rank deterministically.
pub fn summarize(results: &[GameResult]) -> Vec<PlayerSummary> {
    struct Acc {
        games: u32,
        points: u64,
        jumps: u64,
    }

    let mut groups: BTreeMap<String, Acc> = BTreeMap::new();
    for result in results {
        let acc = groups.entry(result.player.to_string()).or_insert(Acc {
            games: 0,
            points: 0,
            jumps: 0,
        });
        acc.games += 1;
        acc.points += u64::from(result.points);
        acc.jumps += u64::from(result.jump_count);
    }

    let mut summaries: Vec<PlayerSummary> = groups
        .into_iter()
        .map(|(player, acc)| PlayerSummary {
            player,
            games_played: acc.games,
            total_points: acc.points as u32,
            mean_points: acc.points as f64 / acc.games as f64,
            mean_jumps: acc.jumps as f64 / acc.games as f64,
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.player.cmp(&b.player))
    });
    summaries
}

/// The last `limit` results by timestamp, newest first. Results sharing a
/// timestamp keep their ledger order relative to each other.
pub fn recent(results: &[GameResult], limit: usize) -> Vec<GameResult> {
    let mut rows = results.to_vec();
    rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    rows.truncate(limit);
    rows
}

/// Time-ordered (timestamp, points, player) points for the chart.
pub fn series(results: &[GameResult]) -> Vec<SeriesPoint> {
    let mut rows = results.to_vec();
    rows.sort_by_key(|r| r.timestamp);
    rows.into_iter()
        .map(|r| SeriesPoint {
            timestamp: r.timestamp,
            points: r.points,
            player: r.player.to_string(),
        })
        .collect()
}

/// Read-side service joining the aggregation functions to the ledger.
pub struct StatsService {
    ledger: Arc<dyn LedgerRepository>,
}

impl StatsService {
    pub fn new(ledger: Arc<dyn LedgerRepository>) -> Self {
        Self { ledger }
    }

    pub async fn summary(&self) -> Result<Vec<PlayerSummary>, LedgerError> {
        Ok(summarize(&self.ledger.read_all().await?))
    }

    pub async fn recent(&self, limit: usize) -> Result<Vec<GameResult>, LedgerError> {
        Ok(recent(&self.ledger.read_all().await?, limit))
    }

    pub async fn podium(&self) -> Result<Vec<GameResult>, LedgerError> {
        self.recent(PODIUM_LIMIT).await
    }

    pub async fn series(&self) -> Result<Vec<SeriesPoint>, LedgerError> {
        Ok(series(&self.ledger.read_all().await?))
    }
}
