//! Popup domain: per-glyph motion strategies and the critical flash.
//!
//! All positions here are screen-space offsets from the popup anchor, y
//! growing downward; the systems layer negates y into world space.

use crate::config::PopupSettings;

/// Frames a glyph stays alive.
pub const GLYPH_LIFETIME_FRAMES: u32 = 90;

/// Frames the critical flash takes to fade.
pub const FLASH_FRAMES: u32 = 60;
/// Peak flash alpha out of 255.
const FLASH_PEAK_ALPHA: f32 = 160.0;

/// Starting height of a falling glyph.
pub const FALL_START_Y: f32 = -40.0;

/// Motion strategy, fixed per popup at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Outward orbit with per-frame scale decay (or growth).
    Orbit(OrbitParams),
    /// Stock fall-and-bounce.
    Fall,
}

/// Snapshot of the rotation settings taken when a popup is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParams {
    pub radius_x: f32,
    pub radius_y: f32,
    pub rotate_speed: f32,
    pub scale: f32,
    pub scale_delta: f32,
}

impl OrbitParams {
    pub fn from_settings(settings: &PopupSettings) -> Self {
        Self {
            radius_x: settings.radius_x,
            radius_y: settings.radius_y,
            rotate_speed: settings.rotate_speed,
            scale: settings.scale,
            scale_delta: settings.scale_delta,
        }
    }
}

/// Integer screen offset of an orbiting glyph at frame `f`. The orbit starts
/// at the anchor and sweeps outward; `mirror` reverses its handedness.
pub fn orbit_offset(params: &OrbitParams, f: u32, mirror: bool) -> (f32, f32) {
    let angle = f as f32 / 3600.0 * params.rotate_speed;
    let mut rx = params.radius_x * (angle.cos() - 1.0);
    let ry = -params.radius_y * angle.sin();
    if mirror {
        rx = -rx;
    }
    (rx.round(), ry.round())
}

/// Uniform scale of an orbiting glyph at frame `f`.
pub fn orbit_scale(params: &OrbitParams, f: u32) -> f32 {
    (params.scale + f as f32 * params.scale_delta / 10.0) / 100.0
}

/// Horizontal stagger centering the digit cluster, scaled with the glyphs.
pub fn digit_stagger(digit_index: u32, glyph_count: u32, cell_width: f32, scale: f32) -> f32 {
    (digit_index as f32 - (glyph_count as f32 - 1.0) / 2.0) * cell_width * scale
}

/// One fall step: gravity, then a damped bounce when the glyph lands.
/// Returns the rounded screen-space y.
pub fn fall_step(ry: &mut f32, dy: &mut f32) -> f32 {
    *dy += 0.5;
    *ry += *dy;
    if *ry >= 0.0 {
        *ry = 0.0;
        *dy *= -0.6;
    }
    ry.round()
}

/// Red emphasis flash shared by all glyphs of a critical popup.
#[derive(Debug, Clone, Copy, Default)]
pub struct CriticalFlash {
    frames_left: u32,
}

impl CriticalFlash {
    pub fn new_critical() -> Self {
        Self {
            frames_left: FLASH_FRAMES,
        }
    }

    /// Advances the fade one frame and returns the mix strength in 0..=1.
    pub fn step(&mut self) -> f32 {
        if self.frames_left == 0 {
            return 0.0;
        }
        let strength = FLASH_PEAK_ALPHA * self.frames_left as f32 / FLASH_FRAMES as f32 / 255.0;
        self.frames_left -= 1;
        strength
    }

    pub fn is_active(&self) -> bool {
        self.frames_left > 0
    }
}
