//! UI domain: in-run HUD elements.

mod hud;

use bevy::prelude::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, hud::spawn_stat_hud)
            .add_systems(Update, hud::update_stat_hud);
    }
}
