//! Audio domain: named popup sound cues over Bevy's audio engine.

use bevy::audio::Volume;
use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use std::collections::HashMap;

use crate::config::PopupSettings;

/// Fixed playback profile for the dedicated MP-damage effect.
pub const MP_DAMAGE_SE_VOLUME: f32 = 0.9;
pub const MP_DAMAGE_SE_SPEED: f32 = 1.0;

/// A named sound effect request.
#[derive(Debug, Clone, PartialEq)]
pub enum SoundCue {
    Miss,
    Recovery,
    ActorDamage,
    EnemyDamage,
    /// A configured effect with its own playback profile.
    Static {
        name: String,
        volume: f32,
        speed: f32,
    },
}

#[derive(Debug)]
pub struct SoundCueEvent {
    pub cue: SoundCue,
}

impl Message for SoundCueEvent {}

/// Handles for the stock cues plus any configured extras.
#[derive(Resource, Debug, Default)]
pub struct SoundBank {
    pub miss: Handle<AudioSource>,
    pub recovery: Handle<AudioSource>,
    pub actor_damage: Handle<AudioSource>,
    pub enemy_damage: Handle<AudioSource>,
    pub named: HashMap<String, Handle<AudioSource>>,
}

pub struct PopupAudioPlugin;

impl Plugin for PopupAudioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundBank>()
            .add_message::<SoundCueEvent>()
            .add_systems(Startup, load_sound_bank)
            .add_systems(Update, play_sound_cues);
    }
}

fn load_sound_bank(
    mut bank: ResMut<SoundBank>,
    settings: Res<PopupSettings>,
    asset_server: Res<AssetServer>,
) {
    bank.miss = asset_server.load("audio/se/miss.ogg");
    bank.recovery = asset_server.load("audio/se/recovery.ogg");
    bank.actor_damage = asset_server.load("audio/se/actor_damage.ogg");
    bank.enemy_damage = asset_server.load("audio/se/enemy_damage.ogg");
    if let Some(name) = settings.mp_damage_se.as_ref() {
        bank.named
            .insert(name.clone(), asset_server.load(format!("audio/se/{name}.ogg")));
    }
}

fn play_sound_cues(
    mut commands: Commands,
    mut cues: MessageReader<SoundCueEvent>,
    bank: Res<SoundBank>,
) {
    for event in cues.read() {
        let (source, volume, speed) = match &event.cue {
            SoundCue::Miss => (bank.miss.clone(), 1.0, 1.0),
            SoundCue::Recovery => (bank.recovery.clone(), 1.0, 1.0),
            SoundCue::ActorDamage => (bank.actor_damage.clone(), 1.0, 1.0),
            SoundCue::EnemyDamage => (bank.enemy_damage.clone(), 1.0, 1.0),
            SoundCue::Static {
                name,
                volume,
                speed,
            } => {
                let Some(handle) = bank.named.get(name) else {
                    debug!("no sound loaded for '{name}', dropping cue");
                    continue;
                };
                (handle.clone(), *volume, *speed)
            }
        };
        commands.spawn((
            AudioPlayer::new(source),
            PlaybackSettings::DESPAWN
                .with_volume(Volume::Linear(volume))
                .with_speed(speed),
        ));
    }
}
