use crate::error::{CoreError, Result};
use crate::predict::RatingPredictor;
use crate::progression::growth::next_season_ratings;
use crate::ratings::{RatingKey, RatingVector, compute_ovr};
use crate::roster::{Player, RatingSnapshot};
use crate::store::Store;
use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

const SEASON_RANGE: std::ops::RangeInclusive<i32> = 1900..=9999;
const MAX_HORIZON: u32 = 50;

#[derive(Debug, Clone, Serialize)]
pub struct PlayerFailure {
    pub player_id: String,
    pub message: String,
}

#[derive(Debug, Default, Serialize)]
pub struct ProgressionReport {
    pub players_processed: usize,
    pub snapshots_created: usize,
    /// Players not yet enrolled at the window start or missing an archetype.
    pub skipped: usize,
    pub failures: Vec<PlayerFailure>,
}

enum PlayerOutcome {
    Created(usize),
    Skipped,
}

/// Ages every player's ratings forward so a snapshot exists for each season
/// of the requested window. Existing snapshots are never rewritten: the walk
/// only fills gaps, which makes repeated invocations over the same window
/// no-ops.
pub struct ProgressionEngine;

impl ProgressionEngine {
    pub fn ensure_snapshots<S: Store + ?Sized>(
        store: &S,
        start_season: i32,
        horizon: u32,
    ) -> Result<ProgressionReport> {
        if !SEASON_RANGE.contains(&start_season) {
            return Err(CoreError::InvalidInput(format!(
                "start season {} outside {}..={}",
                start_season,
                SEASON_RANGE.start(),
                SEASON_RANGE.end()
            )));
        }
        if horizon > MAX_HORIZON {
            return Err(CoreError::InvalidInput(format!(
                "horizon {} exceeds maximum {}",
                horizon, MAX_HORIZON
            )));
        }

        let players = store.players()?;

        // Players are independent of each other; only the season chain within
        // one player is sequential.
        let outcomes: Vec<(String, Result<PlayerOutcome>)> = players
            .par_iter()
            .map(|player| {
                (
                    player.id.clone(),
                    Self::ensure_player(store, player, start_season, horizon),
                )
            })
            .collect();

        let mut report = ProgressionReport::default();
        for (player_id, outcome) in outcomes {
            report.players_processed += 1;
            match outcome {
                Ok(PlayerOutcome::Created(count)) => report.snapshots_created += count,
                Ok(PlayerOutcome::Skipped) => report.skipped += 1,
                Err(e) => {
                    // One player's failure never aborts the rest of the batch.
                    warn!("progression failed for player {}: {}", player_id, e);
                    report.failures.push(PlayerFailure {
                        player_id,
                        message: e.to_string(),
                    });
                }
            }
        }

        debug!(
            "progression window {}..={}: {} snapshots created, {} skipped, {} failed",
            start_season,
            start_season + horizon as i32,
            report.snapshots_created,
            report.skipped,
            report.failures.len()
        );

        Ok(report)
    }

    fn ensure_player<S: Store + ?Sized>(
        store: &S,
        player: &Player,
        start_season: i32,
        horizon: u32,
    ) -> Result<PlayerOutcome> {
        let end_season = start_season + horizon as i32;
        let mut created = 0usize;

        // Establish the chain start at `start_season`.
        let mut ratings: RatingVector = if let Some(snapshot) =
            store.snapshot(&player.id, start_season)?
        {
            snapshot.ratings
        } else if let Some(previous) = store.latest_snapshot_before(&player.id, start_season)? {
            // Walk forward year by year from the last known state.
            let mut ratings = previous.ratings;
            for season in previous.season + 1..=start_season {
                ratings = Self::advance(store, player, &ratings, season)?;
                created += 1;
            }
            ratings
        } else if player.enrollment_year <= start_season {
            let Some(archetype_id) = &player.archetype_id else {
                return Ok(PlayerOutcome::Skipped);
            };
            // No history at all: synthesize a baseline from the archetype
            // alone (empty subset) so the player appears at the window start.
            let prediction = RatingPredictor::predict_with_store(
                store,
                &player.position,
                archetype_id,
                &HashMap::new(),
                player.dev_trait,
                player.dev_cap,
            )?;
            store.create_snapshot(RatingSnapshot {
                player_id: player.id.clone(),
                season: start_season,
                ratings: prediction.ratings.clone(),
                ovr: prediction.ovr,
                predicted: true,
            })?;
            created += 1;
            prediction.ratings
        } else {
            // Not enrolled yet: eligible once the window reaches them.
            return Ok(PlayerOutcome::Skipped);
        };

        // Fill the rest of the window, season by season with no gaps.
        for season in start_season + 1..=end_season {
            if let Some(existing) = store.snapshot(&player.id, season)? {
                ratings = existing.ratings;
                continue;
            }
            ratings = Self::advance(store, player, &ratings, season)?;
            created += 1;
        }

        Ok(PlayerOutcome::Created(created))
    }

    /// Grow one season forward and persist the result as a predicted
    /// snapshot.
    fn advance<S: Store + ?Sized>(
        store: &S,
        player: &Player,
        current: &RatingVector,
        season: i32,
    ) -> Result<RatingVector> {
        let rs_offset = if player.redshirt { 1 } else { 0 };
        let years_since_enroll = season - player.enrollment_year - rs_offset;

        let mut next = next_season_ratings(
            current,
            &player.position,
            player.dev_trait,
            player.dev_cap,
            years_since_enroll,
        );
        let ovr = compute_ovr(&player.position, &next);
        next.set(RatingKey::Ovr, ovr);

        store.create_snapshot(RatingSnapshot {
            player_id: player.id.clone(),
            season,
            ratings: next.clone(),
            ovr,
            predicted: true,
        })?;

        Ok(next)
    }
}
