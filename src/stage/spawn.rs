//! Stage domain: sandbox map setup.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::popup::{PendingPopups, PopupTrail};
use crate::stage::{FloorHazard, GameLayer, MapEvent, Player};
use crate::stats::{Health, Mana, Technique};

pub(crate) fn spawn_stage(mut commands: Commands) {
    // Player
    commands.spawn((
        Player,
        Health::new(500),
        Mana::new(120),
        Technique::new(100),
        PendingPopups::default(),
        PopupTrail::default(),
        Sprite {
            color: Color::srgb(0.3, 0.8, 0.5),
            custom_size: Some(Vec2::new(24.0, 32.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
        RigidBody::Dynamic,
        Collider::rectangle(22.0, 30.0),
        LockedAxes::ROTATION_LOCKED,
        LinearVelocity::default(),
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Player, [GameLayer::Npc, GameLayer::Hazard]),
    ));

    // Map event characters
    let npcs = [
        (1, Vec2::new(-200.0, 120.0), Color::srgb(0.85, 0.55, 0.3)),
        (2, Vec2::new(160.0, 90.0), Color::srgb(0.5, 0.55, 0.9)),
        (3, Vec2::new(220.0, -140.0), Color::srgb(0.7, 0.4, 0.7)),
    ];
    for (id, position, color) in npcs {
        commands.spawn((
            MapEvent { id },
            PendingPopups::default(),
            PopupTrail::default(),
            Sprite {
                color,
                custom_size: Some(Vec2::new(26.0, 34.0)),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 1.0),
            RigidBody::Static,
            Collider::rectangle(26.0, 34.0),
            CollisionLayers::new(GameLayer::Npc, [GameLayer::Player]),
        ));
    }

    // Damage floor strip
    commands.spawn((
        FloorHazard {
            hp_damage: 10,
            mp_damage: 0,
            tp_damage: 0,
        },
        Sprite {
            color: Color::srgba(0.9, 0.3, 0.2, 0.35),
            custom_size: Some(Vec2::new(240.0, 120.0)),
            ..default()
        },
        Transform::from_xyz(-40.0, -140.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(240.0, 120.0),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]),
    ));

    info!("stage ready: player, {} map events, 1 damage floor", npcs.len());
}
