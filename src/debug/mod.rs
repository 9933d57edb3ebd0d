//! Debug tools for exercising the popup engine (dev-tools feature).
//!
//! Hold Ctrl:
//! - J / K: rolled damage / critical popup on the player
//! - M / N: rolled MP damage / MP critical popup
//! - I: miss popup
//! - G / H: hurt / heal the player through the stat-change path
//! - P: drain MP, U: spend TP (stat-change path)
//! - L: toggle automatic popups
//! - T: cycle tone presets

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use rand::Rng;

use crate::popup::{AutoPopupState, StatKind, Tone};
use crate::script::{PopupCommand, TargetSelector};
use crate::stats::StatChangeEvent;

const TONE_PRESETS: [(&str, Tone); 4] = [
    (
        "neutral",
        Tone {
            red: 0,
            green: 0,
            blue: 0,
            gray: 0,
        },
    ),
    (
        "ember",
        Tone {
            red: 120,
            green: -40,
            blue: -80,
            gray: 0,
        },
    ),
    (
        "frost",
        Tone {
            red: -80,
            green: -20,
            blue: 120,
            gray: 0,
        },
    ),
    (
        "ashen",
        Tone {
            red: -60,
            green: -60,
            blue: -60,
            gray: 255,
        },
    ),
];

/// Resource tracking debug panel state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub tone_index: usize,
    /// Message to display temporarily, with seconds remaining
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}

/// Marker for the status message text
#[derive(Component, Debug)]
pub struct DebugStatusMessage;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_status_text)
            .add_systems(Update, (handle_debug_hotkeys, update_status_message).chain());
    }
}

fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    auto_state: Res<AutoPopupState>,
    mut debug_state: ResMut<DebugState>,
    mut popup_commands: MessageWriter<PopupCommand>,
    mut stat_changes: MessageWriter<StatChangeEvent>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }
    let mut rng = rand::rng();
    let player = TargetSelector::Player;

    if keyboard.just_pressed(KeyCode::KeyJ) {
        let value = rng.random_range(10..=999);
        popup_commands.write(PopupCommand::Damage {
            target: player,
            value,
            mirror: false,
        });
        debug_state.set_message(format!("Damage popup: {value}"), 2.0);
    }
    if keyboard.just_pressed(KeyCode::KeyK) {
        let value = rng.random_range(100..=1999);
        popup_commands.write(PopupCommand::Critical {
            target: player,
            value,
            mirror: rng.random_bool(0.5),
        });
        debug_state.set_message(format!("Critical popup: {value}"), 2.0);
    }
    if keyboard.just_pressed(KeyCode::KeyM) {
        let value = rng.random_range(5..=80);
        popup_commands.write(PopupCommand::MpDamage {
            target: player,
            value,
            mirror: false,
        });
        debug_state.set_message(format!("MP damage popup: {value}"), 2.0);
    }
    if keyboard.just_pressed(KeyCode::KeyN) {
        let value = rng.random_range(40..=160);
        popup_commands.write(PopupCommand::MpCritical {
            target: player,
            value,
            mirror: true,
        });
        debug_state.set_message(format!("MP critical popup: {value}"), 2.0);
    }
    if keyboard.just_pressed(KeyCode::KeyI) {
        popup_commands.write(PopupCommand::Miss {
            target: player,
            mirror: false,
        });
        debug_state.set_message("Miss popup", 2.0);
    }
    if keyboard.just_pressed(KeyCode::KeyG) {
        let amount = rng.random_range(20..=120);
        stat_changes.write(StatChangeEvent {
            kind: StatKind::Hp,
            amount: -amount,
        });
        debug_state.set_message(format!("HP -{amount}"), 2.0);
    }
    if keyboard.just_pressed(KeyCode::KeyH) {
        let amount = rng.random_range(20..=120);
        stat_changes.write(StatChangeEvent {
            kind: StatKind::Hp,
            amount,
        });
        debug_state.set_message(format!("HP +{amount}"), 2.0);
    }
    if keyboard.just_pressed(KeyCode::KeyP) {
        let amount = rng.random_range(5..=40);
        stat_changes.write(StatChangeEvent {
            kind: StatKind::Mp,
            amount: -amount,
        });
        debug_state.set_message(format!("MP -{amount}"), 2.0);
    }
    if keyboard.just_pressed(KeyCode::KeyU) {
        let amount = rng.random_range(5..=40);
        stat_changes.write(StatChangeEvent {
            kind: StatKind::Tp,
            amount: -amount,
        });
        debug_state.set_message(format!("TP -{amount}"), 2.0);
    }
    if keyboard.just_pressed(KeyCode::KeyL) {
        let command = if auto_state.suppressed {
            debug_state.set_message("Auto popups ON", 2.0);
            PopupCommand::EnableAuto
        } else {
            debug_state.set_message("Auto popups OFF", 2.0);
            PopupCommand::DisableAuto
        };
        popup_commands.write(command);
    }
    if keyboard.just_pressed(KeyCode::KeyT) {
        debug_state.tone_index = (debug_state.tone_index + 1) % TONE_PRESETS.len();
        let (name, tone) = TONE_PRESETS[debug_state.tone_index];
        popup_commands.write(PopupCommand::SetTone(tone));
        debug_state.set_message(format!("Tone: {name}"), 2.0);
        info!("[DEBUG] tone preset '{}'", name);
    }
}

fn update_status_message(
    time: Res<Time>,
    mut debug_state: ResMut<DebugState>,
    mut text_query: Query<&mut Text, With<DebugStatusMessage>>,
) {
    if let Some((_, ref mut duration)) = debug_state.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug_state.status_message = None;
        }
    }

    let Ok(mut text) = text_query.single_mut() else {
        return;
    };
    let message = debug_state
        .status_message
        .as_ref()
        .map(|(message, _)| message.as_str())
        .unwrap_or("");
    if **text != *message {
        **text = message.to_string();
    }
}

fn spawn_status_text(mut commands: Commands) {
    commands.spawn((
        DebugStatusMessage,
        Text::new(""),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.5, 0.9, 0.5)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            bottom: Val::Px(16.0),
            ..default()
        },
    ));
}
