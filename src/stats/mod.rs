//! Stats domain: stat pools plugin wiring and public exports.

mod components;
mod events;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Health, Mana, OnDamageFloor, Technique};
pub use events::StatChangeEvent;

use bevy::prelude::*;

pub struct StatsPlugin;

impl Plugin for StatsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<StatChangeEvent>().add_systems(
            Update,
            (
                systems::apply_stat_changes,
                systems::track_damage_floor_contact,
                systems::apply_floor_damage,
            )
                .chain(),
        );
    }
}
