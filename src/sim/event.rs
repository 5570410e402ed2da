//! Physics events from the engine, routed to reactions
//!
//! The engine reports stars through overlap checks and bombs through its
//! collider, but routing only looks at what the two entities are.

use serde::{Deserialize, Serialize};

use super::command::Command;
use super::entities::{EntityId, EntityKind};
use super::reaction::{
    CollectReaction, HazardReaction, on_collectible_overlap, on_hazard_bounce, on_hazard_collision,
};
use super::state::{PlayerState, Session};
use crate::error::{GameError, GameResult};

/// One notification from the physics-resolution phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhysicsEvent {
    Overlap { a: EntityId, b: EntityId },
    Collision { a: EntityId, b: EntityId },
    HazardBounce { hazard: EntityId },
}

/// Result of routing one event
#[derive(Debug, Clone, PartialEq)]
pub enum Reaction {
    Collect(CollectReaction),
    Hazard(HazardReaction),
    Bounce(Vec<Command>),
    /// A pair the core has no reaction for (e.g. star against bomb)
    Ignored,
}

impl Reaction {
    /// Commands to hand to the engine
    pub fn commands(&self) -> &[Command] {
        match self {
            Reaction::Collect(r) => &r.commands,
            Reaction::Hazard(r) => &r.commands,
            Reaction::Bounce(commands) => commands,
            Reaction::Ignored => &[],
        }
    }
}

fn kind(session: &Session, id: EntityId) -> GameResult<EntityKind> {
    session
        .registry
        .kind_of(id)
        .ok_or(GameError::UnknownEntity { id })
}

/// Route a single event to its reaction
pub fn dispatch(session: &mut Session, event: PhysicsEvent, player: &PlayerState) -> GameResult<Reaction> {
    let (a, b) = match event {
        PhysicsEvent::Overlap { a, b } | PhysicsEvent::Collision { a, b } => (a, b),
        PhysicsEvent::HazardBounce { hazard } => {
            return on_hazard_bounce(session, hazard).map(Reaction::Bounce);
        }
    };

    match (kind(session, a)?, kind(session, b)?) {
        (EntityKind::Player, EntityKind::Collectible) => {
            on_collectible_overlap(session, b, player.pos).map(Reaction::Collect)
        }
        (EntityKind::Collectible, EntityKind::Player) => {
            on_collectible_overlap(session, a, player.pos).map(Reaction::Collect)
        }
        (EntityKind::Player, EntityKind::Hazard) => {
            on_hazard_collision(session, a, b).map(Reaction::Hazard)
        }
        (EntityKind::Hazard, EntityKind::Player) => {
            on_hazard_collision(session, b, a).map(Reaction::Hazard)
        }
        (ka, kb) => {
            log::trace!("No reaction for {ka:?} {a} / {kb:?} {b}");
            Ok(Reaction::Ignored)
        }
    }
}

/// Route every event of one physics step, strictly in order.
///
/// Stops at the first error; events after it are not processed.
pub fn dispatch_all<I>(session: &mut Session, events: I, player: &PlayerState) -> GameResult<Vec<Reaction>>
where
    I: IntoIterator<Item = PhysicsEvent>,
{
    events
        .into_iter()
        .map(|event| dispatch(session, event, player))
        .collect()
}
