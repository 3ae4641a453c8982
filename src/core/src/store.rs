use crate::archetype::Archetype;
use crate::error::Result;
use crate::roster::{Formation, Player, RatingSnapshot, SnapshotOvr};

/// The persistent store the engine runs against. Constructed once at process
/// startup and passed by reference into every call; the engine itself holds
/// no durable state. The store owns the at-most-one-snapshot-per-(player,
/// season) invariant: `create_snapshot` must fail with `Conflict` on a
/// duplicate rather than relying on callers to check first.
pub trait Store: Send + Sync {
    fn archetype(&self, id: &str) -> Result<Option<Archetype>>;

    fn archetypes(&self) -> Result<Vec<Archetype>>;

    /// Formation with its ordered slots.
    fn formation(&self, id: &str) -> Result<Option<Formation>>;

    fn formations(&self) -> Result<Vec<Formation>>;

    fn players(&self) -> Result<Vec<Player>>;

    fn player(&self, id: &str) -> Result<Option<Player>>;

    fn create_player(&self, player: Player) -> Result<()>;

    fn snapshot(&self, player_id: &str, season: i32) -> Result<Option<RatingSnapshot>>;

    /// Latest snapshot strictly before `season`, if any.
    fn latest_snapshot_before(&self, player_id: &str, season: i32)
    -> Result<Option<RatingSnapshot>>;

    /// OVR projections of every snapshot stored for `season`.
    fn season_snapshots(&self, season: i32) -> Result<Vec<SnapshotOvr>>;

    fn create_snapshot(&self, snapshot: RatingSnapshot) -> Result<()>;
}
