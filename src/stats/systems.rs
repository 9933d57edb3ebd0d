//! Stats domain: stat application and the automatic popup triggers.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::SoundCueEvent;
use crate::config::PopupSettings;
use crate::popup::{
    AutoPopupState, PendingPopups, PopupRequest, StatKind, enqueue_popup, should_auto_popup,
};
use crate::stage::{FloorHazard, Player};
use crate::stats::components::{Health, Mana, OnDamageFloor, Technique};
use crate::stats::events::StatChangeEvent;

/// Seconds between floor damage applications while standing on a hazard.
const FLOOR_DAMAGE_INTERVAL: f32 = 0.5;

/// Applies scripted stat changes to the player and feeds approved deltas into
/// the popup queue. The popup value is the negated intended change, so a gain
/// arrives negative and renders as recovery.
pub(crate) fn apply_stat_changes(
    mut changes: MessageReader<StatChangeEvent>,
    mut cues: MessageWriter<SoundCueEvent>,
    settings: Res<PopupSettings>,
    auto_state: Res<AutoPopupState>,
    mut player: Query<(&mut Health, &mut Mana, &mut Technique, &mut PendingPopups), With<Player>>,
) {
    for change in changes.read() {
        let Ok((mut health, mut mana, mut technique, mut pending)) = player.single_mut() else {
            return;
        };
        match change.kind {
            StatKind::Hp => {
                health.apply(change.amount);
            }
            StatKind::Mp => {
                mana.apply(change.amount);
            }
            StatKind::Tp => {
                technique.apply(change.amount);
            }
        }

        let value = -change.amount;
        if !should_auto_popup(&settings, auto_state.suppressed, value, change.kind) {
            continue;
        }
        let request = match change.kind {
            StatKind::Mp => PopupRequest::mp(value, false, false),
            _ => PopupRequest::hp(value, false, false),
        };
        enqueue_popup(&mut pending, request, true, &settings, &mut cues);
    }
}

/// Tracks hazard floor contact on the player via collision events.
pub(crate) fn track_damage_floor_contact(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    mut ended: MessageReader<CollisionEnd>,
    hazards: Query<Entity, With<FloorHazard>>,
    player: Query<Entity, With<Player>>,
) {
    for event in started.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (body, floor) in pairs {
            if player.contains(body) && hazards.contains(floor) {
                commands.entity(body).insert(OnDamageFloor { hazard: floor });
            }
        }
    }
    for event in ended.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (body, floor) in pairs {
            if player.contains(body) && hazards.contains(floor) {
                commands.entity(body).remove::<OnDamageFloor>();
            }
        }
    }
}

/// Applies periodic floor damage while the player stands on a hazard, then
/// runs each stat's actual pre/post delta through the auto-popup gate
/// independently.
pub(crate) fn apply_floor_damage(
    time: Res<Time>,
    mut cues: MessageWriter<SoundCueEvent>,
    settings: Res<PopupSettings>,
    auto_state: Res<AutoPopupState>,
    hazards: Query<&FloorHazard>,
    mut cooldown: Local<f32>,
    mut player: Query<
        (
            &OnDamageFloor,
            &mut Health,
            &mut Mana,
            &mut Technique,
            &mut PendingPopups,
        ),
        With<Player>,
    >,
) {
    let Ok((on_floor, mut health, mut mana, mut technique, mut pending)) = player.single_mut()
    else {
        *cooldown = 0.0;
        return;
    };
    *cooldown -= time.delta_secs();
    if *cooldown > 0.0 {
        return;
    }
    *cooldown = FLOOR_DAMAGE_INTERVAL;

    let Ok(hazard) = hazards.get(on_floor.hazard) else {
        return;
    };
    let prev = (health.current, mana.current, technique.current);
    health.apply(-hazard.hp_damage);
    mana.apply(-hazard.mp_damage);
    technique.apply(-hazard.tp_damage);

    let deltas = [
        (StatKind::Hp, prev.0 - health.current),
        (StatKind::Mp, prev.1 - mana.current),
        (StatKind::Tp, prev.2 - technique.current),
    ];
    for (kind, delta) in deltas {
        if delta == 0 {
            continue;
        }
        if !should_auto_popup(&settings, auto_state.suppressed, delta, kind) {
            continue;
        }
        let request = match kind {
            StatKind::Mp => PopupRequest::mp(delta, false, false),
            _ => PopupRequest::hp(delta, false, false),
        };
        enqueue_popup(&mut pending, request, true, &settings, &mut cues);
    }
}
