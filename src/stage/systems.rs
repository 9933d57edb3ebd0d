//! Stage domain: movement, active event tracking, and the demo interaction.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use rand::Rng;

use crate::script::{PopupCommand, TargetSelector};
use crate::stage::{ActiveEvent, MapEvent, Player};

const PLAYER_SPEED: f32 = 220.0;
const INTERACT_RANGE: f32 = 56.0;

pub(crate) fn move_player(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut LinearVelocity, With<Player>>,
) {
    let mut axis = Vec2::ZERO;
    if keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowUp) || keyboard.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowDown) || keyboard.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }

    let velocity = axis.normalize_or_zero() * PLAYER_SPEED;
    for mut linear in &mut query {
        linear.0 = velocity;
    }
}

/// The nearest map event within interaction range is the "executing" one.
pub(crate) fn update_active_event(
    player: Query<&Transform, With<Player>>,
    events: Query<(Entity, &Transform), With<MapEvent>>,
    mut active: ResMut<ActiveEvent>,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    let nearest = events
        .iter()
        .map(|(entity, transform)| {
            (entity, transform.translation.truncate().distance(player_pos))
        })
        .filter(|(_, distance)| *distance <= INTERACT_RANGE)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(entity, _)| entity);

    if active.0 != nearest {
        active.0 = nearest;
    }
}

/// E pokes the active map event with a rolled critical hit, exercising the
/// scripted command path end to end.
pub(crate) fn poke_active_event(
    keyboard: Res<ButtonInput<KeyCode>>,
    active: Res<ActiveEvent>,
    mut commands_out: MessageWriter<PopupCommand>,
) {
    if !keyboard.just_pressed(KeyCode::KeyE) || active.0.is_none() {
        return;
    }
    let mut rng = rand::rng();
    commands_out.write(PopupCommand::Critical {
        target: TargetSelector::ActiveEvent,
        value: rng.random_range(10..=500),
        mirror: rng.random_bool(0.5),
    });
}
