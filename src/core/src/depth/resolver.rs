use crate::depth::normalize::{family_of, normalize_player_position, normalize_slot_token};
use crate::depth::weights::curve_for;
use crate::error::{CoreError, Result};
use crate::roster::Side;
use crate::store::Store;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthView {
    Starters,
    Backups,
    Weighted,
}

impl FromStr for DepthView {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "starters" => Ok(DepthView::Starters),
            "backups" => Ok(DepthView::Backups),
            "weighted" => Ok(DepthView::Weighted),
            other => Err(CoreError::InvalidInput(format!(
                "unknown depth view '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DepthPlayer {
    pub id: String,
    pub name: String,
    /// "F.LAST" display form.
    pub short_name: String,
    pub ovr: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeightedContributor {
    pub id: String,
    pub name: String,
    pub ovr: u8,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SlotEntry {
    Starter { player: Option<DepthPlayer> },
    Backup { player: Option<DepthPlayer> },
    Weighted {
        players: Vec<WeightedContributor>,
        composite: Option<u8>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotAssignment {
    pub slot_key: String,
    /// Canonical group the slot was matched against.
    pub pos: String,
    pub x: f32,
    pub y: f32,
    #[serde(flatten)]
    pub entry: SlotEntry,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormationMeta {
    pub side: Side,
    pub name: String,
    pub variant: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DepthChart {
    pub formation: FormationMeta,
    pub season: i32,
    pub view: DepthView,
    pub slots: Vec<SlotAssignment>,
}

#[derive(Debug, Clone)]
struct Candidate {
    id: String,
    name: String,
    ovr: u8,
}

impl Candidate {
    fn to_depth_player(&self) -> DepthPlayer {
        DepthPlayer {
            id: self.id.clone(),
            name: self.name.clone(),
            short_name: abbreviate(&self.name),
            ovr: self.ovr,
        }
    }
}

fn abbreviate(full: &str) -> String {
    let parts: Vec<&str> = full.split_whitespace().collect();
    let initial = parts
        .first()
        .and_then(|first| first.chars().find(|c| c.is_ascii_alphabetic()))
        .map(|c| c.to_ascii_uppercase());
    match (initial, parts.last()) {
        (Some(initial), Some(last)) => format!("{}.{}", initial, last.to_uppercase()),
        _ => full.to_uppercase(),
    }
}

/// Resolves a formation's slots against the rating snapshots of one season.
/// Every call re-reads the store and carries its own uniqueness bookkeeping;
/// nothing leaks between resolutions.
pub struct DepthResolver;

impl DepthResolver {
    pub fn resolve<S: Store + ?Sized>(
        store: &S,
        formation_id: &str,
        season: i32,
        view: DepthView,
    ) -> Result<DepthChart> {
        Self::resolve_with_curve(store, formation_id, season, view, None)
    }

    /// Like [`resolve`](Self::resolve), with a caller-supplied weight curve
    /// replacing the global fallback for groups without a dedicated row.
    pub fn resolve_with_curve<S: Store + ?Sized>(
        store: &S,
        formation_id: &str,
        season: i32,
        view: DepthView,
        curve: Option<&[f64]>,
    ) -> Result<DepthChart> {
        let formation = store
            .formation(formation_id)?
            .ok_or_else(|| CoreError::NotFound(format!("formation {}", formation_id)))?;
        if formation.slots.is_empty() {
            return Err(CoreError::InvalidInput(format!(
                "formation {} has no slots",
                formation_id
            )));
        }

        // Identity and canonical group per player; only players holding a
        // snapshot for the requested season enter the pools.
        let roster: HashMap<String, (String, String)> = store
            .players()?
            .into_iter()
            .map(|p| {
                let group = normalize_player_position(&p.position);
                (p.id, (p.name, group))
            })
            .collect();

        let mut by_group: HashMap<String, Vec<Candidate>> = HashMap::new();
        let mut by_family: HashMap<&'static str, Vec<Candidate>> = HashMap::new();
        for snapshot in store.season_snapshots(season)? {
            let Some((name, group)) = roster.get(&snapshot.player_id) else {
                debug!("snapshot without a player record: {}", snapshot.player_id);
                continue;
            };
            let candidate = Candidate {
                id: snapshot.player_id,
                name: name.clone(),
                ovr: snapshot.ovr,
            };
            by_family
                .entry(family_of(group))
                .or_default()
                .push(candidate.clone());
            by_group.entry(group.clone()).or_default().push(candidate);
        }
        // Stable descending sort keeps insertion order between equal OVRs.
        let by_group: HashMap<String, Vec<Candidate>> = by_group
            .into_iter()
            .map(|(group, pool)| (group, rank_by_ovr(pool)))
            .collect();
        let by_family: HashMap<&'static str, Vec<Candidate>> = by_family
            .into_iter()
            .map(|(family, pool)| (family, rank_by_ovr(pool)))
            .collect();

        // Slots grouped by canonical label, first-appearance order. The
        // original slot index travels with each slot so the output can be
        // restored to formation order after per-group assignment.
        let slot_groups: Vec<String> = formation
            .slots
            .iter()
            .map(|slot| {
                let raw = slot
                    .position_hints
                    .first()
                    .map(String::as_str)
                    .unwrap_or(&slot.slot_key);
                normalize_slot_token(raw)
            })
            .collect();
        let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
        for (index, group) in slot_groups.iter().enumerate() {
            match groups.iter_mut().find(|(g, _)| g == group) {
                Some((_, indices)) => indices.push(index),
                None => groups.push((group.clone(), vec![index])),
            }
        }

        let mut assigned: Vec<(usize, SlotEntry)> = Vec::with_capacity(formation.slots.len());
        let mut used: HashSet<String> = HashSet::new();
        for (group, indices) in &groups {
            let pool = pool_for(&by_group, &by_family, group);
            match view {
                DepthView::Starters => {
                    fill_in_rank_order(indices, pool, 0, &mut used, &mut assigned, |player| {
                        SlotEntry::Starter { player }
                    });
                }
                DepthView::Backups => {
                    // Skip past the block of candidates the starters view
                    // would consume for this group.
                    let offset = indices.len();
                    fill_in_rank_order(indices, pool, offset, &mut used, &mut assigned, |player| {
                        SlotEntry::Backup { player }
                    });
                }
                DepthView::Weighted => {
                    let weights = curve_for(group, curve);
                    for &index in indices {
                        assigned.push((index, weighted_entry(pool, weights, indices.len())));
                    }
                }
            }
        }
        assigned.sort_by_key(|(index, _)| *index);

        let slots = assigned
            .into_iter()
            .map(|(index, entry)| {
                let slot = &formation.slots[index];
                SlotAssignment {
                    slot_key: slot.slot_key.clone(),
                    pos: slot_groups[index].clone(),
                    x: slot.x,
                    y: slot.y,
                    entry,
                }
            })
            .collect();

        Ok(DepthChart {
            formation: FormationMeta {
                side: formation.side,
                name: formation.name,
                variant: formation.variant,
            },
            season,
            view,
            slots,
        })
    }
}

fn rank_by_ovr(pool: Vec<Candidate>) -> Vec<Candidate> {
    pool.into_iter()
        .sorted_by_key(|c| Reverse(c.ovr))
        .collect()
}

/// Exact-group pool when it has anyone, else the family pool.
fn pool_for<'a>(
    by_group: &'a HashMap<String, Vec<Candidate>>,
    by_family: &'a HashMap<&'static str, Vec<Candidate>>,
    group: &str,
) -> &'a [Candidate] {
    match by_group.get(group) {
        Some(pool) if !pool.is_empty() => pool,
        _ => by_family
            .get(family_of(group))
            .map(Vec::as_slice)
            .unwrap_or(&[]),
    }
}

/// Walk the pool from `offset`, handing the next unused candidate to each
/// slot in order. Slots beyond the pool stay empty.
fn fill_in_rank_order(
    indices: &[usize],
    pool: &[Candidate],
    offset: usize,
    used: &mut HashSet<String>,
    assigned: &mut Vec<(usize, SlotEntry)>,
    make_entry: impl Fn(Option<DepthPlayer>) -> SlotEntry,
) {
    let mut remaining = pool.iter().skip(offset);
    for &index in indices {
        let pick = remaining.by_ref().find(|c| !used.contains(&c.id));
        if let Some(candidate) = pick {
            used.insert(candidate.id.clone());
            assigned.push((index, make_entry(Some(candidate.to_depth_player()))));
        } else {
            assigned.push((index, make_entry(None)));
        }
    }
}

/// The top `slot_count` candidates carry the curve's weights in rank order;
/// ranks past the end of the curve weigh 0.
fn weighted_entry(pool: &[Candidate], weights: &[f64], slot_count: usize) -> SlotEntry {
    let players: Vec<WeightedContributor> = pool
        .iter()
        .take(slot_count.max(1))
        .enumerate()
        .map(|(rank, candidate)| WeightedContributor {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            ovr: candidate.ovr,
            weight: weights.get(rank).copied().unwrap_or(0.0),
        })
        .collect();

    let weight_sum: f64 = players.iter().map(|c| c.weight).sum();
    let composite = if weight_sum > 0.0 {
        let mean = players
            .iter()
            .map(|c| c.weight * c.ovr as f64)
            .sum::<f64>()
            / weight_sum;
        Some(mean.round() as u8)
    } else {
        None
    };

    SlotEntry::Weighted { players, composite }
}
