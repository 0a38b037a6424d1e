//! Fixed-step simulation tick
//!
//! Order within a tick matters: the vehicle toggle resolves first so the
//! right movement mode runs, and projectiles resolve last so hits are tested
//! against this tick's positions.

use super::input::Action;
use super::state::{GameState, SimEvent};
use crate::math::{Vector3, distance, normalize, rotate_by_yaw};

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) {
    state.time_ticks += 1;

    handle_interaction(state);

    if state.in_vehicle {
        drive_vehicle(state);
    } else {
        move_on_foot(state);
    }

    if state.input.was_pressed(Action::Shoot) {
        state.shoot();
    }

    resolve_projectiles(state);

    state.input.end_tick();
}

/// Toggle vehicle occupancy on a fresh Interact press
pub fn handle_interaction(state: &mut GameState) {
    if !state.input.was_pressed(Action::Interact) {
        return;
    }

    if state.in_vehicle {
        state.in_vehicle = false;
        state.record(SimEvent::ExitedVehicle);
        log::info!("Exited vehicle at {:?}", state.vehicle);
    } else if distance(state.player, state.vehicle) < state.tuning.enter_vehicle_radius {
        state.in_vehicle = true;
        state.record(SimEvent::EnteredVehicle);
        log::info!("Entered vehicle at {:?}", state.vehicle);
    }
}

/// Camera-local movement direction from held keys (-Z is forward)
fn held_direction(state: &GameState) -> Vector3 {
    let input = &state.input;
    let mut dir = Vector3::ZERO;
    if input.is_held(Action::MoveForward) {
        dir.z -= 1.0;
    }
    if input.is_held(Action::MoveBack) {
        dir.z += 1.0;
    }
    if input.is_held(Action::MoveLeft) {
        dir.x -= 1.0;
    }
    if input.is_held(Action::MoveRight) {
        dir.x += 1.0;
    }
    dir
}

/// Walk the player relative to the camera heading at constant speed
pub fn move_on_foot(state: &mut GameState) {
    let raw = held_direction(state);
    if raw.length() == 0.0 {
        return;
    }
    let world = rotate_by_yaw(normalize(raw), state.camera.yaw);
    state.player.x += world.x * state.tuning.walk_speed;
    state.player.z += world.z * state.tuning.walk_speed;
}

/// Drive the vehicle along world axes
///
/// Each held key contributes independently and the result is not
/// normalized, so diagonals are faster than straight lines.
pub fn drive_vehicle(state: &mut GameState) {
    let step = held_direction(state) * state.tuning.drive_speed;
    state.vehicle.x += step.x;
    state.vehicle.z += step.z;
}

/// Move bullets, resolve hits, respawn kills and drop the dead
pub fn resolve_projectiles(state: &mut GameState) {
    let speed = state.tuning.bullet_speed;
    let hit_radius = state.tuning.hit_radius;

    for bullet in state.bullets.iter_mut().filter(|b| b.alive) {
        bullet.advance(speed);
    }

    // Naive bullets x enemies scan; first enemy in spawn order wins.
    // Replacements join the list immediately, so later bullets can hit them.
    for b in 0..state.bullets.len() {
        if !state.bullets[b].alive {
            continue;
        }
        let bullet_pos = state.bullets[b].position;
        let Some(target) = state
            .enemies
            .iter()
            .position(|e| e.alive && distance(e.position, bullet_pos) < hit_radius)
        else {
            continue;
        };

        state.bullets[b].alive = false;
        let enemy = &mut state.enemies[target];
        if enemy.take_hit() {
            let position = enemy.position;
            state.record(SimEvent::EnemyKilled { position });
            log::debug!("Enemy killed at {:?}", position);
            state.spawn_enemy();
            state.score += 1;
        } else {
            let remaining_health = enemy.health;
            state.record(SimEvent::EnemyHit { remaining_health });
        }
    }

    if let Some(max_ticks) = state.tuning.bullet_max_ticks {
        let mut expired = 0;
        for bullet in state.bullets.iter_mut().filter(|b| b.alive) {
            if bullet.age_ticks >= max_ticks {
                bullet.alive = false;
                expired += 1;
                log::debug!("Bullet expired at {:?}", bullet.position);
            }
        }
        for _ in 0..expired {
            state.record(SimEvent::BulletExpired);
        }
    }

    state.bullets.retain(|b| b.alive);
    state.enemies.retain(|e| e.alive);
}
