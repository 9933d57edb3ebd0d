//! Core domain: saved popup state (auto-popup gate and tone) across runs.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::popup::{AutoPopupState, PopupTone, Tone};

const SAVE_PATH: &str = "saves/popup_state.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct PopupSaveFile {
    suppress_auto: bool,
    tone: Option<Tone>,
}

pub(crate) fn load_popup_state(
    mut auto_state: ResMut<AutoPopupState>,
    mut tone: ResMut<PopupTone>,
) {
    let path = Path::new(SAVE_PATH);
    if !path.exists() {
        return;
    }
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            warn!("failed to read {}: {}", SAVE_PATH, e);
            return;
        }
    };
    match serde_json::from_str::<PopupSaveFile>(&data) {
        Ok(saved) => {
            auto_state.suppressed = saved.suppress_auto;
            tone.0 = saved.tone;
            info!(
                "popup state restored (suppressed={}, tone set={})",
                saved.suppress_auto,
                saved.tone.is_some()
            );
        }
        Err(e) => warn!("corrupt save {}: {}", SAVE_PATH, e),
    }
}

pub(crate) fn save_popup_state_on_change(auto_state: Res<AutoPopupState>, tone: Res<PopupTone>) {
    if !auto_state.is_changed() && !tone.is_changed() {
        return;
    }
    // Resource insertion and the startup load both count as changes; nothing
    // worth writing yet on the first pass.
    if auto_state.is_added() || tone.is_added() {
        return;
    }

    let saved = PopupSaveFile {
        suppress_auto: auto_state.suppressed,
        tone: tone.0,
    };
    let json = match serde_json::to_string_pretty(&saved) {
        Ok(json) => json,
        Err(e) => {
            warn!("failed to encode popup state: {}", e);
            return;
        }
    };
    if let Err(e) = fs::create_dir_all("saves").and_then(|()| fs::write(SAVE_PATH, json)) {
        warn!("failed to write {}: {}", SAVE_PATH, e);
    }
}
