//! Stage domain: the sandbox map the popup engine runs on.

mod spawn;
mod systems;

use avian2d::prelude::*;
use bevy::prelude::*;

/// The player-controlled character.
#[derive(Component, Debug)]
pub struct Player;

/// A map event character, addressable from script commands by id.
#[derive(Component, Debug)]
pub struct MapEvent {
    pub id: u32,
}

/// A floor strip that damages whoever stands on it.
#[derive(Component, Debug)]
pub struct FloorHazard {
    pub hp_damage: i32,
    pub mp_damage: i32,
    pub tp_damage: i32,
}

/// The map event currently considered "executing": the one the player is
/// standing next to. Selector `0` resolves through this.
#[derive(Resource, Debug, Default)]
pub struct ActiveEvent(pub Option<Entity>);

#[derive(PhysicsLayer, Default, Debug, Clone, Copy)]
pub enum GameLayer {
    #[default]
    Default,
    Player,
    Npc,
    Hazard,
}

pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveEvent>()
            .add_systems(Startup, spawn::spawn_stage)
            .add_systems(
                Update,
                (
                    systems::move_player,
                    systems::update_active_event,
                    systems::poke_active_event,
                ),
            );
    }
}
