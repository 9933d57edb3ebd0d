//! Script domain: tests for selector mapping and command dispatch.

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::commands::{PopupCommand, TargetSelector};
use crate::audio::SoundCueEvent;
use crate::config::PopupSettings;
use crate::popup::{AutoPopupState, PendingPopups, PopupTone, Tone};
use crate::stage::{ActiveEvent, MapEvent, Player};

// -----------------------------------------------------------------------------
// TargetSelector tests
// -----------------------------------------------------------------------------

#[test]
fn test_selector_from_raw_mapping() {
    assert_eq!(TargetSelector::from_raw(-1), TargetSelector::Player);
    assert_eq!(TargetSelector::from_raw(0), TargetSelector::ActiveEvent);
    assert_eq!(TargetSelector::from_raw(3), TargetSelector::Event(3));
}

#[test]
fn test_selector_clamps_below_minus_one_to_player() {
    assert_eq!(TargetSelector::from_raw(-7), TargetSelector::Player);
}

// -----------------------------------------------------------------------------
// Dispatch tests
// -----------------------------------------------------------------------------

struct DispatchFixture {
    app: App,
    player: Entity,
    npc: Entity,
}

fn dispatch_fixture() -> DispatchFixture {
    let mut app = App::new();
    app.insert_resource(PopupSettings::default())
        .init_resource::<ActiveEvent>()
        .init_resource::<AutoPopupState>()
        .init_resource::<PopupTone>()
        .add_message::<PopupCommand>()
        .add_message::<SoundCueEvent>()
        .add_systems(Update, super::systems::dispatch_popup_commands);

    let player = app
        .world_mut()
        .spawn((Player, PendingPopups::default()))
        .id();
    let npc = app
        .world_mut()
        .spawn((MapEvent { id: 7 }, PendingPopups::default()))
        .id();

    DispatchFixture { app, player, npc }
}

fn queued(app: &App, entity: Entity) -> usize {
    app.world().get::<PendingPopups>(entity).unwrap().len()
}

#[test]
fn test_player_selector_targets_the_player() {
    let mut fx = dispatch_fixture();
    fx.app.world_mut().write_message(PopupCommand::Damage {
        target: TargetSelector::Player,
        value: 120,
        mirror: false,
    });

    fx.app.update();

    assert_eq!(queued(&fx.app, fx.player), 1);
    assert_eq!(queued(&fx.app, fx.npc), 0);
}

#[test]
fn test_event_selector_targets_by_id() {
    let mut fx = dispatch_fixture();
    fx.app.world_mut().write_message(PopupCommand::MpCritical {
        target: TargetSelector::Event(7),
        value: 55,
        mirror: true,
    });

    fx.app.update();

    assert_eq!(queued(&fx.app, fx.npc), 1);
    let mut pending = fx.app.world_mut().get_mut::<PendingPopups>(fx.npc).unwrap();
    let request = pending.take_oldest().unwrap();
    assert_eq!(request.value, Some(55));
    assert!(request.critical);
    assert!(request.mp_damage);
    assert!(request.mirror);
}

#[test]
fn test_unknown_event_id_is_a_silent_noop() {
    let mut fx = dispatch_fixture();
    fx.app.world_mut().write_message(PopupCommand::Damage {
        target: TargetSelector::Event(99),
        value: 10,
        mirror: false,
    });

    fx.app.update();

    assert_eq!(queued(&fx.app, fx.player), 0);
    assert_eq!(queued(&fx.app, fx.npc), 0);
}

#[test]
fn test_active_event_selector_follows_the_resource() {
    let mut fx = dispatch_fixture();

    // Nothing executing: selector 0 is a no-op.
    fx.app.world_mut().write_message(PopupCommand::Miss {
        target: TargetSelector::ActiveEvent,
        mirror: false,
    });
    fx.app.update();
    assert_eq!(queued(&fx.app, fx.npc), 0);

    fx.app.world_mut().resource_mut::<ActiveEvent>().0 = Some(fx.npc);
    fx.app.world_mut().write_message(PopupCommand::Miss {
        target: TargetSelector::ActiveEvent,
        mirror: false,
    });
    fx.app.update();

    assert_eq!(queued(&fx.app, fx.npc), 1);
    let mut pending = fx.app.world_mut().get_mut::<PendingPopups>(fx.npc).unwrap();
    assert_eq!(pending.take_oldest().unwrap().value, None);
}

#[test]
fn test_auto_toggle_commands_flip_the_gate() {
    let mut fx = dispatch_fixture();

    fx.app.world_mut().write_message(PopupCommand::DisableAuto);
    fx.app.update();
    assert!(fx.app.world().resource::<AutoPopupState>().suppressed);

    fx.app.world_mut().write_message(PopupCommand::EnableAuto);
    fx.app.update();
    assert!(!fx.app.world().resource::<AutoPopupState>().suppressed);
}

#[test]
fn test_set_tone_command_updates_the_resource() {
    let mut fx = dispatch_fixture();
    let tone = Tone {
        red: 255,
        green: 0,
        blue: 0,
        gray: 255,
    };

    fx.app.world_mut().write_message(PopupCommand::SetTone(tone));
    fx.app.update();

    assert_eq!(fx.app.world().resource::<PopupTone>().0, Some(tone));
}

#[test]
fn test_popup_command_plays_exactly_one_cue() {
    let mut fx = dispatch_fixture();
    fx.app.world_mut().write_message(PopupCommand::Damage {
        target: TargetSelector::Player,
        value: 120,
        mirror: false,
    });

    fx.app.update();

    let cues = fx.app.world().resource::<Messages<SoundCueEvent>>();
    assert_eq!(cues.len(), 1);
}

#[test]
fn test_sound_gate_silences_cues() {
    let mut fx = dispatch_fixture();
    fx.app
        .world_mut()
        .resource_mut::<PopupSettings>()
        .play_se = false;
    fx.app.world_mut().write_message(PopupCommand::Damage {
        target: TargetSelector::Player,
        value: 120,
        mirror: false,
    });

    fx.app.update();

    assert_eq!(queued(&fx.app, fx.player), 1);
    let cues = fx.app.world().resource::<Messages<SoundCueEvent>>();
    assert!(cues.is_empty());
}
