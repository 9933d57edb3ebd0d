//! Popup domain: per-character queue state and live popup components.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::popup::motion::{CriticalFlash, Motion};

/// One queued popup request.
///
/// `value: None` is a miss. Negative values render as recovery (color-shifted
/// digits, recovery sound); callers negate raw stat gains before queueing, so
/// an in-game HP increase arrives here as a negative value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupRequest {
    pub value: Option<i32>,
    pub critical: bool,
    pub mp_damage: bool,
    pub mirror: bool,
}

impl PopupRequest {
    /// HP/TP-style popup.
    pub fn hp(value: i32, critical: bool, mirror: bool) -> Self {
        Self {
            value: Some(value),
            critical,
            mp_damage: false,
            mirror,
        }
    }

    /// MP-style popup (alternate digit row, dedicated sound when configured).
    pub fn mp(value: i32, critical: bool, mirror: bool) -> Self {
        Self {
            value: Some(value),
            critical,
            mp_damage: true,
            mirror,
        }
    }

    pub fn miss(mirror: bool) -> Self {
        Self {
            value: None,
            critical: false,
            mp_damage: false,
            mirror,
        }
    }
}

/// Queue of popup requests waiting on a character, plus the cheap "has work"
/// flag the spawner polls each tick.
#[derive(Component, Debug, Default)]
pub struct PendingPopups {
    queue: VecDeque<PopupRequest>,
    requested: bool,
}

impl PendingPopups {
    pub fn push(&mut self, request: PopupRequest) {
        self.requested = true;
        self.queue.push_back(request);
    }

    /// Removes and returns the oldest queued request. Leaves the requested
    /// flag alone; callers acknowledge separately.
    pub fn take_oldest(&mut self) -> Option<PopupRequest> {
        self.queue.pop_front()
    }

    /// Clears the requested flag, but only once the queue has drained.
    /// A non-empty queue keeps the flag set so the next tick spawns again.
    pub fn acknowledge(&mut self) {
        if self.queue.is_empty() {
            self.requested = false;
        }
    }

    pub fn is_requested(&self) -> bool {
        self.requested
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Live popups over one character, oldest first. Only the head is ever
/// retired, so a burst of triggers reads as a decaying trail.
#[derive(Component, Debug, Default)]
pub struct PopupTrail {
    pub active: Vec<Entity>,
}

/// A spawned popup: one request expanded into child glyph sprites, anchored
/// at the position the character had when it spawned.
#[derive(Component, Debug)]
pub struct DamagePopup {
    /// First-created glyph; the whole popup retires when it stops playing.
    pub lead_glyph: Entity,
    pub mirror: bool,
    pub glyph_count: u32,
    pub motion: Motion,
    pub flash: CriticalFlash,
    /// Tone snapshot taken at creation; not live-updated afterwards.
    pub tint: Color,
}

/// One digit (or the miss icon) of a popup.
#[derive(Component, Debug)]
pub struct PopupGlyph {
    /// Position within the number, left to right.
    pub digit_index: u32,
    /// Ticks since spawn.
    pub frame: u32,
    pub playing: bool,
    /// Fall-motion state, screen coordinates (y grows downward).
    pub ry: f32,
    pub dy: f32,
    /// Layout x at creation; fall keeps it, orbit recomputes with scale.
    pub home_x: f32,
}

/// Color tone applied to glyphs created while it is set. Channels follow the
/// source tone convention: -255..=255 RGB shifts plus a 0..=255 gray amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tone {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
    pub gray: i32,
}

impl Tone {
    /// Folds the tone into a sprite tint. Multiplicative approximation of the
    /// additive tone: negative channels darken, the gray channel pulls the
    /// tint toward its own luminance.
    pub fn tint(&self) -> Color {
        let channel = |t: i32| ((255 + t).clamp(0, 255) as f32) / 255.0;
        let (r, g, b) = (
            channel(self.red),
            channel(self.green),
            channel(self.blue),
        );
        let gray = (self.gray.clamp(0, 255) as f32) / 255.0;
        let lum = 0.299 * r + 0.587 * g + 0.114 * b;
        Color::srgb(
            r + (lum - r) * gray,
            g + (lum - g) * gray,
            b + (lum - b) * gray,
        )
    }
}

/// Process-wide tone for newly created popups. Set by the tone command,
/// read once per popup at construction.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PopupTone(pub Option<Tone>);

/// Gate over automatic (stat-change driven) popups. Scripted popup commands
/// ignore it. Survives in the save file.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct AutoPopupState {
    pub suppressed: bool,
}
