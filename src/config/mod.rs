//! Config domain: static popup configuration loaded once at startup.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::{PopupConfigFile, PopupSettings};

use bevy::prelude::*;
use std::path::Path;

const SETTINGS_PATH: &str = "assets/data/popup.ron";

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let settings = match loader::load_settings_file(Path::new(SETTINGS_PATH)) {
            Ok(file) => PopupSettings::from_file(file),
            Err(e) => {
                warn!("{}; using default popup settings", e);
                PopupSettings::default()
            }
        };
        info!(
            "popup settings loaded: rotation={}, play_se={}",
            settings.rotation, settings.play_se
        );
        app.insert_resource(settings);
    }
}
