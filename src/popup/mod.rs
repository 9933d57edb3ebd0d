//! Popup domain: the damage popup engine plugin wiring and public exports.

mod components;
mod glyphs;
mod motion;
mod policy;
mod systems;


pub use components::{
    AutoPopupState, DamagePopup, PendingPopups, PopupGlyph, PopupRequest, PopupTone, PopupTrail,
    Tone,
};
pub use motion::{GLYPH_LIFETIME_FRAMES, Motion, OrbitParams};
pub use policy::{StatKind, should_auto_popup};
pub use systems::enqueue_popup;

use bevy::prelude::*;

use crate::config::PopupSettings;

/// Shared numeral sheet image and cell geometry.
#[derive(Resource, Debug)]
pub struct NumeralSheet {
    pub image: Handle<Image>,
    pub cell_size: Vec2,
}

pub struct PopupPlugin;

impl Plugin for PopupPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PopupTone>()
            .init_resource::<AutoPopupState>()
            .add_systems(Startup, load_numeral_sheet)
            .add_systems(
                FixedUpdate,
                (
                    systems::spawn_requested_popups,
                    systems::advance_popup_glyphs,
                    systems::retire_finished_popups,
                )
                    .chain(),
            );
    }
}

fn load_numeral_sheet(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<PopupSettings>,
) {
    commands.insert_resource(NumeralSheet {
        image: asset_server.load("sprites/damage_numerals.png"),
        cell_size: Vec2::new(settings.cell_width, settings.cell_height),
    });
}
