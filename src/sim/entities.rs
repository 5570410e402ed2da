//! Entity registry for collectibles and hazards
//!
//! Tracks activation and spawn data independently of whatever the physics
//! engine keeps for the same entities. Collectibles are created once and only
//! toggled; hazards accumulate and are never removed.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Stable entity handle shared with the physics/rendering engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What an entity id refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Collectible,
    Hazard,
}

/// A star to collect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub id: EntityId,
    /// Where the collectible was created; restocks return here
    pub spawn: Vec2,
    /// Last position the core placed it at
    pub pos: Vec2,
    pub active: bool,
    /// Vertical bounce, rolled once at creation
    pub bounce_y: f32,
}

/// Spawn parameters for a new hazard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardSpec {
    pub spawn: Vec2,
    pub vel: Vec2,
}

/// A bouncing bomb
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub id: EntityId,
    pub spawn: Vec2,
    pub vel: Vec2,
    /// Always false: hazards move on inertia and bounce only
    pub gravity: bool,
}

/// Collectible and hazard collections, sorted by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRegistry {
    player: Option<EntityId>,
    collectibles: Vec<Collectible>,
    hazards: Vec<Hazard>,
    next_id: u32,
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRegistry {
    /// Ids start at 1
    pub fn new() -> Self {
        Self {
            player: None,
            collectibles: Vec::new(),
            hazards: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Register the player; a registry holds exactly one
    pub fn register_player(&mut self) -> EntityId {
        if let Some(id) = self.player {
            return id;
        }
        let id = self.next_entity_id();
        self.player = Some(id);
        id
    }

    pub fn player(&self) -> Option<EntityId> {
        self.player
    }

    /// Create an active collectible at `spawn`
    pub fn add_collectible(&mut self, spawn: Vec2, bounce_y: f32) -> EntityId {
        let id = self.next_entity_id();
        self.collectibles.push(Collectible {
            id,
            spawn,
            pos: spawn,
            active: true,
            bounce_y,
        });
        id
    }

    /// Append a hazard. Hazards are never removed.
    pub fn spawn_hazard(&mut self, spec: HazardSpec) -> EntityId {
        let id = self.next_entity_id();
        self.hazards.push(Hazard {
            id,
            spawn: spec.spawn,
            vel: spec.vel,
            gravity: false,
        });
        id
    }

    pub fn kind_of(&self, id: EntityId) -> Option<EntityKind> {
        if self.player == Some(id) {
            Some(EntityKind::Player)
        } else if self.collectible(id).is_some() {
            Some(EntityKind::Collectible)
        } else if self.hazard(id).is_some() {
            Some(EntityKind::Hazard)
        } else {
            None
        }
    }

    /// Fail unless `id` is registered as `expected`
    pub fn expect_kind(&self, id: EntityId, expected: EntityKind) -> GameResult<()> {
        match self.kind_of(id) {
            Some(kind) if kind == expected => Ok(()),
            Some(_) => Err(GameError::WrongEntityKind { id, expected }),
            None => Err(GameError::UnknownEntity { id }),
        }
    }

    pub fn collectible(&self, id: EntityId) -> Option<&Collectible> {
        self.collectibles
            .binary_search_by_key(&id, |c| c.id)
            .ok()
            .map(|i| &self.collectibles[i])
    }

    pub fn hazard(&self, id: EntityId) -> Option<&Hazard> {
        self.hazards
            .binary_search_by_key(&id, |h| h.id)
            .ok()
            .map(|i| &self.hazards[i])
    }

    pub fn collectibles(&self) -> &[Collectible] {
        &self.collectibles
    }

    pub fn hazards(&self) -> &[Hazard] {
        &self.hazards
    }

    /// Number of currently active entities of a kind
    pub fn count_active(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Player => usize::from(self.player.is_some()),
            EntityKind::Collectible => self.collectibles.iter().filter(|c| c.active).count(),
            EntityKind::Hazard => self.hazards.len(),
        }
    }

    /// Deactivate a collectible. Returns false if it was already inactive.
    pub fn deactivate(&mut self, id: EntityId) -> GameResult<bool> {
        self.expect_kind(id, EntityKind::Collectible)?;
        let collectible = self
            .collectibles
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(GameError::UnknownEntity { id })?;
        let was_active = collectible.active;
        collectible.active = false;
        Ok(was_active)
    }

    /// Reactivate every entity of `kind`, placing each where `reset` says.
    ///
    /// Only collectibles toggle; other kinds are left alone and report 0.
    /// Returns how many entities were reactivated.
    pub fn reactivate_all<F>(&mut self, kind: EntityKind, reset: F) -> usize
    where
        F: Fn(&Collectible) -> Vec2,
    {
        if kind != EntityKind::Collectible {
            return 0;
        }
        let mut count = 0;
        for collectible in &mut self.collectibles {
            collectible.pos = reset(collectible);
            if !collectible.active {
                collectible.active = true;
                count += 1;
            }
        }
        count
    }
}
