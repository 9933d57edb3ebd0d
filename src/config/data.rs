//! Config domain: popup settings file schema and the clamped runtime form.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// On-disk schema for `assets/data/popup.ron`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PopupConfigFile {
    pub play_se: bool,
    pub offset_x: i32,
    pub offset_y: i32,
    pub hp_auto_popup: bool,
    pub mp_auto_popup: bool,
    pub tp_auto_popup: bool,
    pub increase_auto_popup: bool,
    pub decrease_auto_popup: bool,
    pub mp_damage_se: Option<String>,
    pub rotation: bool,
    pub radius_x: f32,
    pub radius_y: f32,
    pub rotate_speed: f32,
    pub scale: f32,
    pub scale_delta: f32,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Default for PopupConfigFile {
    fn default() -> Self {
        Self {
            play_se: true,
            offset_x: 0,
            offset_y: 0,
            hp_auto_popup: true,
            mp_auto_popup: true,
            tp_auto_popup: true,
            increase_auto_popup: true,
            decrease_auto_popup: true,
            mp_damage_se: None,
            rotation: true,
            radius_x: 40.0,
            radius_y: 40.0,
            rotate_speed: 60.0,
            scale: 100.0,
            scale_delta: -10.0,
            cell_width: 32.0,
            cell_height: 32.0,
        }
    }
}

/// Validated runtime settings. Every numeric field is clamped at load so the
/// popup systems can trust the ranges.
#[derive(Resource, Debug, Clone)]
pub struct PopupSettings {
    pub play_se: bool,
    pub offset_x: i32,
    pub offset_y: i32,
    pub hp_auto_popup: bool,
    pub mp_auto_popup: bool,
    pub tp_auto_popup: bool,
    pub increase_auto_popup: bool,
    pub decrease_auto_popup: bool,
    pub mp_damage_se: Option<String>,
    pub rotation: bool,
    pub radius_x: f32,
    pub radius_y: f32,
    pub rotate_speed: f32,
    pub scale: f32,
    pub scale_delta: f32,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl PopupSettings {
    pub fn from_file(file: PopupConfigFile) -> Self {
        Self {
            play_se: file.play_se,
            offset_x: file.offset_x.clamp(-512, 512),
            offset_y: file.offset_y.clamp(-512, 512),
            hp_auto_popup: file.hp_auto_popup,
            mp_auto_popup: file.mp_auto_popup,
            tp_auto_popup: file.tp_auto_popup,
            increase_auto_popup: file.increase_auto_popup,
            decrease_auto_popup: file.decrease_auto_popup,
            mp_damage_se: file.mp_damage_se.filter(|name| !name.is_empty()),
            rotation: file.rotation,
            radius_x: file.radius_x.clamp(0.0, 512.0),
            radius_y: file.radius_y.clamp(0.0, 512.0),
            rotate_speed: file.rotate_speed.clamp(0.0, 3600.0),
            scale: file.scale.clamp(10.0, 1000.0),
            scale_delta: file.scale_delta.clamp(-100.0, 100.0),
            cell_width: file.cell_width.clamp(8.0, 128.0),
            cell_height: file.cell_height.clamp(8.0, 128.0),
        }
    }
}

impl Default for PopupSettings {
    fn default() -> Self {
        Self::from_file(PopupConfigFile::default())
    }
}
