use chalk_core::{
    Archetype, CoreError, Formation, Player, RatingSnapshot, Result, SnapshotOvr, Store,
};
use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU32, Ordering};

/// The in-process store. Constructed once at startup and shared behind an
/// `Arc` for the life of the process; all engine calls go through the
/// [`Store`] trait.
pub struct Database {
    archetypes: RwLock<Vec<Archetype>>,
    formations: RwLock<Vec<Formation>>,
    players: RwLock<Vec<Player>>,
    snapshots: RwLock<BTreeMap<(String, i32), RatingSnapshot>>,
    player_id_seq: AtomicU32,
}

fn poisoned<T>(_: T) -> CoreError {
    CoreError::Upstream("store lock poisoned".to_string())
}

impl Database {
    pub fn new() -> Self {
        Database {
            archetypes: RwLock::new(Vec::new()),
            formations: RwLock::new(Vec::new()),
            players: RwLock::new(Vec::new()),
            snapshots: RwLock::new(BTreeMap::new()),
            player_id_seq: AtomicU32::new(1),
        }
    }

    pub fn new_player_id(&self) -> String {
        format!("p-{}", self.player_id_seq.fetch_add(1, Ordering::SeqCst))
    }

    /// Insert or replace by (position, name), keeping the stored id when the
    /// archetype already exists so references stay valid across reseeds.
    pub fn upsert_archetype(&self, mut archetype: Archetype) -> Result<()> {
        let mut archetypes = self.archetypes.write().map_err(poisoned)?;
        match archetypes
            .iter_mut()
            .find(|a| a.position == archetype.position && a.name == archetype.name)
        {
            Some(existing) => {
                archetype.id = existing.id.clone();
                *existing = archetype;
            }
            None => archetypes.push(archetype),
        }
        Ok(())
    }

    /// Insert or replace by (side, name, variant). Replacing resets the slot
    /// list wholesale, which keeps reseeding idempotent.
    pub fn upsert_formation(&self, mut formation: Formation) -> Result<()> {
        let mut formations = self.formations.write().map_err(poisoned)?;
        match formations.iter_mut().find(|f| {
            f.side == formation.side && f.name == formation.name && f.variant == formation.variant
        }) {
            Some(existing) => {
                formation.id = existing.id.clone();
                *existing = formation;
            }
            None => formations.push(formation),
        }
        Ok(())
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for Database {
    fn archetype(&self, id: &str) -> Result<Option<Archetype>> {
        let archetypes = self.archetypes.read().map_err(poisoned)?;
        Ok(archetypes.iter().find(|a| a.id == id).cloned())
    }

    fn archetypes(&self) -> Result<Vec<Archetype>> {
        Ok(self.archetypes.read().map_err(poisoned)?.clone())
    }

    fn formation(&self, id: &str) -> Result<Option<Formation>> {
        let formations = self.formations.read().map_err(poisoned)?;
        Ok(formations.iter().find(|f| f.id == id).cloned())
    }

    fn formations(&self) -> Result<Vec<Formation>> {
        Ok(self.formations.read().map_err(poisoned)?.clone())
    }

    fn players(&self) -> Result<Vec<Player>> {
        Ok(self.players.read().map_err(poisoned)?.clone())
    }

    fn player(&self, id: &str) -> Result<Option<Player>> {
        let players = self.players.read().map_err(poisoned)?;
        Ok(players.iter().find(|p| p.id == id).cloned())
    }

    fn create_player(&self, player: Player) -> Result<()> {
        let mut players = self.players.write().map_err(poisoned)?;
        if players.iter().any(|p| p.id == player.id) {
            return Err(CoreError::Conflict(format!(
                "player {} already exists",
                player.id
            )));
        }
        players.push(player);
        Ok(())
    }

    fn snapshot(&self, player_id: &str, season: i32) -> Result<Option<RatingSnapshot>> {
        let snapshots = self.snapshots.read().map_err(poisoned)?;
        Ok(snapshots.get(&(player_id.to_string(), season)).cloned())
    }

    fn latest_snapshot_before(
        &self,
        player_id: &str,
        season: i32,
    ) -> Result<Option<RatingSnapshot>> {
        let snapshots = self.snapshots.read().map_err(poisoned)?;
        Ok(snapshots
            .range((player_id.to_string(), i32::MIN)..(player_id.to_string(), season))
            .next_back()
            .map(|(_, snapshot)| snapshot.clone()))
    }

    fn season_snapshots(&self, season: i32) -> Result<Vec<SnapshotOvr>> {
        let snapshots = self.snapshots.read().map_err(poisoned)?;
        Ok(snapshots
            .values()
            .filter(|s| s.season == season)
            .map(|s| SnapshotOvr {
                player_id: s.player_id.clone(),
                ovr: s.ovr,
            })
            .collect())
    }

    fn create_snapshot(&self, snapshot: RatingSnapshot) -> Result<()> {
        let key = (snapshot.player_id.clone(), snapshot.season);
        let mut snapshots = self.snapshots.write().map_err(poisoned)?;
        if snapshots.contains_key(&key) {
            return Err(CoreError::Conflict(format!(
                "snapshot already exists for player {} season {}",
                key.0, key.1
            )));
        }
        snapshots.insert(key, snapshot);
        Ok(())
    }
}
