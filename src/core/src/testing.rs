//! In-memory [`Store`] used by unit tests.

use crate::archetype::Archetype;
use crate::error::{CoreError, Result};
use crate::roster::{Formation, Player, RatingSnapshot, SnapshotOvr};
use crate::store::Store;
use std::collections::{BTreeMap, HashSet};
use std::sync::RwLock;

#[derive(Default)]
pub struct MemStore {
    archetypes: RwLock<Vec<Archetype>>,
    formations: RwLock<Vec<Formation>>,
    players: RwLock<Vec<Player>>,
    snapshots: RwLock<BTreeMap<(String, i32), RatingSnapshot>>,
    failing_writes: RwLock<HashSet<String>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_archetype(&self, archetype: Archetype) {
        self.archetypes.write().unwrap().push(archetype);
    }

    pub fn put_formation(&self, formation: Formation) {
        self.formations.write().unwrap().push(formation);
    }

    pub fn put_player(&self, player: Player) {
        self.players.write().unwrap().push(player);
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.read().unwrap().len()
    }

    /// Every later `create_snapshot` for this player fails with `Upstream`.
    pub fn fail_snapshot_writes_for(&self, player_id: &str) {
        self.failing_writes
            .write()
            .unwrap()
            .insert(player_id.to_string());
    }
}

impl Store for MemStore {
    fn archetype(&self, id: &str) -> Result<Option<Archetype>> {
        Ok(self
            .archetypes
            .read()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    fn archetypes(&self) -> Result<Vec<Archetype>> {
        Ok(self.archetypes.read().unwrap().clone())
    }

    fn formation(&self, id: &str) -> Result<Option<Formation>> {
        Ok(self
            .formations
            .read()
            .unwrap()
            .iter()
            .find(|f| f.id == id)
            .cloned())
    }

    fn formations(&self) -> Result<Vec<Formation>> {
        Ok(self.formations.read().unwrap().clone())
    }

    fn players(&self) -> Result<Vec<Player>> {
        Ok(self.players.read().unwrap().clone())
    }

    fn player(&self, id: &str) -> Result<Option<Player>> {
        Ok(self
            .players
            .read()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    fn create_player(&self, player: Player) -> Result<()> {
        self.players.write().unwrap().push(player);
        Ok(())
    }

    fn snapshot(&self, player_id: &str, season: i32) -> Result<Option<RatingSnapshot>> {
        Ok(self
            .snapshots
            .read()
            .unwrap()
            .get(&(player_id.to_string(), season))
            .cloned())
    }

    fn latest_snapshot_before(
        &self,
        player_id: &str,
        season: i32,
    ) -> Result<Option<RatingSnapshot>> {
        Ok(self
            .snapshots
            .read()
            .unwrap()
            .range((player_id.to_string(), i32::MIN)..(player_id.to_string(), season))
            .next_back()
            .map(|(_, snapshot)| snapshot.clone()))
    }

    fn season_snapshots(&self, season: i32) -> Result<Vec<SnapshotOvr>> {
        Ok(self
            .snapshots
            .read()
            .unwrap()
            .values()
            .filter(|s| s.season == season)
            .map(|s| SnapshotOvr {
                player_id: s.player_id.clone(),
                ovr: s.ovr,
            })
            .collect())
    }

    fn create_snapshot(&self, snapshot: RatingSnapshot) -> Result<()> {
        if self
            .failing_writes
            .read()
            .unwrap()
            .contains(&snapshot.player_id)
        {
            return Err(CoreError::Upstream("injected store failure".into()));
        }
        let key = (snapshot.player_id.clone(), snapshot.season);
        let mut snapshots = self.snapshots.write().unwrap();
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
