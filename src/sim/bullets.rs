//! Bullet lifecycle: spawn, advance, collide, expire

use super::events::GameEvent;
use super::state::{Bullet, Ship};
use crate::consts::MAX_BULLETS;

/// Fire a bullet from `ship` into `bullets`.
///
/// Returns `None` without touching the collection when the side already has
/// `MAX_BULLETS` in flight.
pub fn spawn(bullets: &mut Vec<Bullet>, ship: &Ship) -> Option<Bullet> {
    if bullets.len() >= MAX_BULLETS {
        return None;
    }
    let bullet = Bullet::fired_from(ship);
    bullets.push(bullet);
    Some(bullet)
}

/// Move every bullet one tick and resolve hits and exits.
///
/// Yellow bullets are processed before red ones, each in spawn order. A
/// bullet touching the opposing ship produces one hit event and is removed;
/// otherwise it is dropped silently once it has left the arena.
pub fn advance_and_resolve(
    yellow_bullets: &mut Vec<Bullet>,
    red_bullets: &mut Vec<Bullet>,
    yellow: &Ship,
    red: &Ship,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    advance_side(yellow_bullets, red, &mut events);
    advance_side(red_bullets, yellow, &mut events);
    events
}

fn advance_side(bullets: &mut Vec<Bullet>, target: &Ship, events: &mut Vec<GameEvent>) {
    bullets.retain_mut(|bullet| {
        bullet.advance();
        if target.rect.intersects(&bullet.rect) {
            log::debug!("{} bullet hit {}", bullet.owner.as_str(), target.side.as_str());
            events.push(GameEvent::hit(target.side));
            false
        } else {
            !bullet.has_exited()
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::collision::Rect;
    use crate::sim::state::{MatchState, Side};
    use proptest::prelude::*;

    fn bullet_at(owner: Side, x: i32, y: i32) -> Bullet {
        Bullet {
            owner,
            rect: Rect::new(x, y, BULLET_WIDTH, BULLET_HEIGHT),
        }
    }

    #[test]
    fn test_spawn_caps_at_max_bullets() {
        let state = MatchState::new();
        let mut bullets = Vec::new();

        for _ in 0..MAX_BULLETS {
            assert!(spawn(&mut bullets, &state.yellow).is_some());
        }
        let before = bullets.clone();
        assert!(spawn(&mut bullets, &state.yellow).is_none());
        assert_eq!(bullets, before);
    }

    #[test]
    fn test_hit_removes_bullet_and_emits_once() {
        let state = MatchState::new();
        // One step short of the red ship's left edge (800)
        let mut yellow_bullets = vec![bullet_at(Side::Yellow, 800 - BULLET_WIDTH - 3, 320)];
        let mut red_bullets = Vec::new();

        let events = advance_and_resolve(
            &mut yellow_bullets,
            &mut red_bullets,
            &state.yellow,
            &state.red,
        );
        assert_eq!(events, vec![GameEvent::RedHit]);
        assert!(yellow_bullets.is_empty());

        // Nothing left to hit on the next tick
        let events = advance_and_resolve(
            &mut yellow_bullets,
            &mut red_bullets,
            &state.yellow,
            &state.red,
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_exit_removes_silently() {
        let state = MatchState::new();
        let mut yellow_bullets = vec![bullet_at(Side::Yellow, ARENA_WIDTH - 3, 10)];
        let mut red_bullets = vec![bullet_at(Side::Red, 3, 10)];

        let events = advance_and_resolve(
            &mut yellow_bullets,
            &mut red_bullets,
            &state.yellow,
            &state.red,
        );
        assert!(events.is_empty());
        assert!(yellow_bullets.is_empty());
        assert!(red_bullets.is_empty());
    }

    #[test]
    fn test_hit_at_arena_edge_beats_exit() {
        let mut state = MatchState::new();
        state.yellow.rect = Rect::new(5, 300, SHIP_WIDTH, SHIP_HEIGHT);
        // Lands at x = -4: outside the arena but still over yellow
        let mut red_bullets = vec![bullet_at(Side::Red, 3, 310)];
        let mut yellow_bullets = Vec::new();

        let events = advance_and_resolve(
            &mut yellow_bullets,
            &mut red_bullets,
            &state.yellow,
            &state.red,
        );
        assert_eq!(events, vec![GameEvent::YellowHit]);
        assert!(red_bullets.is_empty());
    }

    #[test]
    fn test_bullets_pass_through_border() {
        let state = MatchState::new();
        let mut yellow_bullets = vec![bullet_at(Side::Yellow, BORDER_X - 5, 10)];
        let mut red_bullets = Vec::new();

        advance_and_resolve(
            &mut yellow_bullets,
            &mut red_bullets,
            &state.yellow,
            &state.red,
        );
        assert_eq!(yellow_bullets.len(), 1);
        assert_eq!(yellow_bullets[0].rect.x(), BORDER_X + 2);
    }

    #[test]
    fn test_adjacent_removals_do_not_skip() {
        let state = MatchState::new();
        // Two hitting bullets back to back, then a survivor
        let mut red_bullets = vec![
            bullet_at(Side::Red, 150, 310),
            bullet_at(Side::Red, 140, 320),
            bullet_at(Side::Red, 600, 320),
        ];
        let mut yellow_bullets = Vec::new();

        let events = advance_and_resolve(
            &mut yellow_bullets,
            &mut red_bullets,
            &state.yellow,
            &state.red,
        );
        assert_eq!(events, vec![GameEvent::YellowHit, GameEvent::YellowHit]);
        assert_eq!(red_bullets, vec![bullet_at(Side::Red, 593, 320)]);
    }

    #[test]
    fn test_yellow_events_come_first() {
        let state = MatchState::new();
        let mut yellow_bullets = vec![bullet_at(Side::Yellow, 790, 320)];
        let mut red_bullets = vec![bullet_at(Side::Red, 150, 320)];

        let events = advance_and_resolve(
            &mut yellow_bullets,
            &mut red_bullets,
            &state.yellow,
            &state.red,
        );
        assert_eq!(events, vec![GameEvent::RedHit, GameEvent::YellowHit]);
    }

    proptest! {
        #[test]
        fn prop_every_bullet_resolves_at_most_once(
            xs in prop::collection::vec(0..ARENA_WIDTH, 0..MAX_BULLETS),
            ys in prop::collection::vec(0..ARENA_HEIGHT, MAX_BULLETS),
        ) {
            let state = MatchState::new();
            let mut yellow_bullets: Vec<_> = xs
                .iter()
                .zip(&ys)
                .map(|(&x, &y)| bullet_at(Side::Yellow, x, y))
                .collect();
            let mut red_bullets = Vec::new();
            let spawned = yellow_bullets.len();

            let mut hits = 0;
            // Long enough for any bullet to cross the whole arena
            for _ in 0..(ARENA_WIDTH / BULLET_VELOCITY + 2) {
                hits += advance_and_resolve(
                    &mut yellow_bullets,
                    &mut red_bullets,
                    &state.yellow,
                    &state.red,
                )
                .len();
                prop_assert!(yellow_bullets.len() <= MAX_BULLETS);
            }
            prop_assert!(yellow_bullets.is_empty());
            prop_assert!(hits <= spawned);
        }
    }
}
