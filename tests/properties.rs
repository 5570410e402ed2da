//! Session-level properties over arbitrary event sequences

use glam::Vec2;
use proptest::prelude::*;

use star_catcher::Settings;
use star_catcher::sim::{
    Direction, EntityId, EntityKind, MotionIntent, PlayerState, Session, bootstrap,
    on_collectible_overlap, on_frame_tick, on_hazard_collision,
};

fn star_ids(session: &Session) -> Vec<EntityId> {
    session.registry().collectibles().iter().map(|c| c.id).collect()
}

/// Collect every star, the last one with the player at `player_x`
fn clear_level(session: &mut Session, player_x: f32) {
    for id in star_ids(session) {
        on_collectible_overlap(session, id, Vec2::new(player_x, 450.0)).unwrap();
    }
}

proptest! {
    #[test]
    fn score_is_ten_per_distinct_collect(
        seed in any::<u64>(),
        picks in prop::collection::vec(0usize..12, 0..60),
    ) {
        let (mut session, _) = bootstrap(seed, Settings::default()).unwrap();
        let ids = star_ids(&session);
        let mut applied = 0u64;
        for pick in picks {
            // Stay below the last palette level
            if session.state().level() >= 6 {
                break;
            }
            let reaction = on_collectible_overlap(&mut session, ids[pick], Vec2::new(200.0, 450.0)).unwrap();
            if reaction.applied {
                applied += 1;
            }
            prop_assert_eq!(reaction.snapshot.score, 10 * applied);
        }
        prop_assert_eq!(session.state().collects(), applied);
        prop_assert_eq!(session.state().score() % 10, 0);
    }

    #[test]
    fn repeated_overlap_changes_nothing(seed in any::<u64>(), pick in 0usize..12) {
        let (mut session, _) = bootstrap(seed, Settings::default()).unwrap();
        let id = star_ids(&session)[pick];
        on_collectible_overlap(&mut session, id, Vec2::ZERO).unwrap();
        let before = session.snapshot();

        let again = on_collectible_overlap(&mut session, id, Vec2::ZERO).unwrap();
        prop_assert!(!again.applied);
        prop_assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn hazard_spawns_on_far_side(seed in any::<u64>(), player_x in 0.0f32..800.0) {
        let (mut session, _) = bootstrap(seed, Settings::default()).unwrap();
        clear_level(&mut session, player_x);

        let hazard = &session.registry().hazards()[0];
        if player_x < 400.0 {
            prop_assert!((400.0..=800.0).contains(&hazard.spawn.x));
        } else {
            prop_assert!((0.0..=400.0).contains(&hazard.spawn.x));
        }
        prop_assert!((-200.0..=200.0).contains(&hazard.vel.x));
        prop_assert_eq!(hazard.vel.y, 20.0);
    }

    #[test]
    fn one_clear_is_one_level_one_hazard(seed in any::<u64>(), clears in 1u32..=6) {
        let (mut session, _) = bootstrap(seed, Settings::default()).unwrap();
        for n in 1..=clears {
            clear_level(&mut session, 100.0);
            prop_assert_eq!(session.state().level(), n);
            prop_assert_eq!(session.registry().count_active(EntityKind::Collectible), 12);
            prop_assert_eq!(session.registry().hazards().len(), n as usize);
        }
    }

    #[test]
    fn game_over_freezes_everything(
        seed in any::<u64>(),
        left in any::<bool>(),
        jump in any::<bool>(),
        pick in 0usize..12,
    ) {
        let (mut session, _) = bootstrap(seed, Settings::default()).unwrap();
        clear_level(&mut session, 100.0);
        let hazard = session.registry().hazards()[0].id;
        let player = session.player();
        on_hazard_collision(&mut session, player, hazard).unwrap();
        let frozen = session.snapshot();
        prop_assert!(frozen.game_over);

        let intent = MotionIntent {
            direction: if left { Direction::Left } else { Direction::Right },
            jump_requested: jump,
        };
        let state = PlayerState { pos: Vec2::new(300.0, 500.0), touching_down: true };
        prop_assert!(on_frame_tick(&session, &intent, &state).is_hold());

        let id = star_ids(&session)[pick];
        let reaction = on_collectible_overlap(&mut session, id, Vec2::ZERO).unwrap();
        prop_assert!(!reaction.applied);
        prop_assert_eq!(session.snapshot(), frozen);
    }
}

#[test]
fn boundary_player_x_uses_left_half() {
    for seed in 0..50 {
        let (mut session, _) = bootstrap(seed, Settings::default()).unwrap();
        clear_level(&mut session, 400.0);
        let x = session.registry().hazards()[0].spawn.x;
        assert!((0.0..=400.0).contains(&x), "seed {seed}: x={x}");
    }
}

#[test]
fn sessions_are_independent() {
    let (mut a, _) = bootstrap(1, Settings::default()).unwrap();
    let (b, _) = bootstrap(1, Settings::default()).unwrap();
    clear_level(&mut a, 100.0);
    assert_eq!(a.snapshot().level, 1);
    assert_eq!(b.snapshot().level, 0);
    assert!(b.registry().hazards().is_empty());
}
