//! Script domain: command surface plugin wiring and public exports.

mod commands;
mod systems;

#[cfg(test)]
mod tests;

pub use commands::{PopupCommand, TargetSelector};

use bevy::prelude::*;

pub struct ScriptPlugin;

impl Plugin for ScriptPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PopupCommand>()
            .add_systems(Update, systems::dispatch_popup_commands);
    }
}
