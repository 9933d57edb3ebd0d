//! Core domain: camera and persisted popup state.

mod persist;

use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, persist::load_popup_state))
            .add_systems(Update, persist::save_popup_state_on_change);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
