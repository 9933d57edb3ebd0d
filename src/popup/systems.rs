//! Popup domain: fixed-tick spawn, advance, and retirement systems.

use bevy::color::Mix;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::audio::{MP_DAMAGE_SE_SPEED, MP_DAMAGE_SE_VOLUME, SoundCue, SoundCueEvent};
use crate::config::PopupSettings;
use crate::popup::NumeralSheet;
use crate::popup::components::{
    DamagePopup, PendingPopups, PopupGlyph, PopupRequest, PopupTone, PopupTrail, Tone,
};
use crate::popup::glyphs::{cell_rect, decompose};
use crate::popup::motion::{
    CriticalFlash, FALL_START_Y, GLYPH_LIFETIME_FRAMES, Motion, OrbitParams, digit_stagger,
    fall_step, orbit_offset, orbit_scale,
};

pub(crate) const POPUP_Z: f32 = 10.0;

/// Queues a popup on a character. When sound-on-trigger is enabled, exactly
/// one cue plays per call, chosen from this request alone.
pub fn enqueue_popup(
    pending: &mut PendingPopups,
    request: PopupRequest,
    is_player: bool,
    settings: &PopupSettings,
    cues: &mut MessageWriter<SoundCueEvent>,
) {
    if settings.play_se {
        cues.write(SoundCueEvent {
            cue: select_cue(&request, is_player, settings),
        });
    }
    pending.push(request);
}

/// Cue priority: miss, then recovery, then the dedicated MP-damage effect,
/// then actor/enemy damage by who was hit.
pub(crate) fn select_cue(
    request: &PopupRequest,
    is_player: bool,
    settings: &PopupSettings,
) -> SoundCue {
    match request.value {
        None => SoundCue::Miss,
        Some(value) if value < 0 => SoundCue::Recovery,
        Some(_) => {
            if request.mp_damage {
                if let Some(name) = settings.mp_damage_se.as_ref() {
                    return SoundCue::Static {
                        name: name.clone(),
                        volume: MP_DAMAGE_SE_VOLUME,
                        speed: MP_DAMAGE_SE_SPEED,
                    };
                }
            }
            if is_player {
                SoundCue::ActorDamage
            } else {
                SoundCue::EnemyDamage
            }
        }
    }
}

/// Drains one request per requested character into a live popup entity at the
/// character's position plus the configured offset.
pub(crate) fn spawn_requested_popups(
    mut commands: Commands,
    settings: Res<PopupSettings>,
    tone: Res<PopupTone>,
    sheet: Res<NumeralSheet>,
    mut characters: Query<(Entity, &Transform, &mut PendingPopups, &mut PopupTrail)>,
) {
    for (owner, transform, mut pending, mut trail) in &mut characters {
        if !pending.is_requested() {
            continue;
        }
        let Some(request) = pending.take_oldest() else {
            pending.acknowledge();
            continue;
        };
        let origin = transform.translation.truncate()
            + Vec2::new(settings.offset_x as f32, -settings.offset_y as f32);
        let popup = spawn_popup(&mut commands, &settings, tone.0, &sheet, origin, &request);
        trail.active.push(popup);
        pending.acknowledge();
        debug!("popup spawned for {owner:?}: {request:?}");
    }
}

fn spawn_popup(
    commands: &mut Commands,
    settings: &PopupSettings,
    tone: Option<Tone>,
    sheet: &NumeralSheet,
    origin: Vec2,
    request: &PopupRequest,
) -> Entity {
    let cells = decompose(request.value, request.mp_damage);
    let glyph_count = cells.len() as u32;
    let tint = tone.map_or(Color::WHITE, |t| t.tint());
    let motion = if settings.rotation {
        Motion::Orbit(OrbitParams::from_settings(settings))
    } else {
        Motion::Fall
    };
    let flash = if request.critical {
        CriticalFlash::new_critical()
    } else {
        CriticalFlash::default()
    };

    let popup = commands
        .spawn((
            Transform::from_translation(origin.extend(POPUP_Z)),
            Visibility::default(),
        ))
        .id();

    let mut lead_glyph = Entity::PLACEHOLDER;
    for cell in &cells {
        let home_x = digit_stagger(cell.digit_index, glyph_count, sheet.cell_size.x, 1.0);
        let glyph = commands
            .spawn((
                PopupGlyph {
                    digit_index: cell.digit_index,
                    frame: 0,
                    playing: true,
                    ry: FALL_START_Y,
                    dy: 0.0,
                    home_x,
                },
                Sprite {
                    image: sheet.image.clone(),
                    rect: Some(cell_rect(cell, sheet.cell_size)),
                    color: tint,
                    ..default()
                },
                Transform::from_xyz(home_x, 0.0, 0.0),
                ChildOf(popup),
            ))
            .id();
        if cell.digit_index == 0 {
            lead_glyph = glyph;
        }
    }

    commands.entity(popup).insert(DamagePopup {
        lead_glyph,
        mirror: request.mirror,
        glyph_count,
        motion,
        flash,
        tint,
    });
    popup
}

struct GlyphFrameContext {
    tint: Color,
    motion: Motion,
    mirror: bool,
    glyph_count: u32,
}

/// Steps every live glyph one frame: trajectory, scale, and tint. The flash
/// mix is reapplied every tick so it stays visible through the motion.
pub(crate) fn advance_popup_glyphs(
    sheet: Res<NumeralSheet>,
    mut popups: Query<(Entity, &mut DamagePopup)>,
    mut glyphs: Query<(&ChildOf, &mut PopupGlyph, &mut Transform, &mut Sprite)>,
) {
    let flash_color = Color::srgb(1.0, 0.0, 0.0);
    let mut contexts: HashMap<Entity, GlyphFrameContext> = HashMap::new();
    for (entity, mut popup) in &mut popups {
        let strength = popup.flash.step();
        let tint = if strength > 0.0 {
            popup.tint.mix(&flash_color, strength)
        } else {
            popup.tint
        };
        contexts.insert(
            entity,
            GlyphFrameContext {
                tint,
                motion: popup.motion,
                mirror: popup.mirror,
                glyph_count: popup.glyph_count,
            },
        );
    }

    for (child_of, mut glyph, mut transform, mut sprite) in &mut glyphs {
        let Some(ctx) = contexts.get(&child_of.parent()) else {
            continue;
        };
        if !glyph.playing {
            continue;
        }

        let f = glyph.frame;
        glyph.frame += 1;

        match ctx.motion {
            Motion::Orbit(params) => {
                let (rx, ry) = orbit_offset(&params, f, ctx.mirror);
                let scale = orbit_scale(&params, f);
                transform.translation.x = rx
                    + digit_stagger(glyph.digit_index, ctx.glyph_count, sheet.cell_size.x, scale);
                transform.translation.y = -ry;
                transform.scale = Vec3::new(scale, scale, 1.0);
            }
            Motion::Fall => {
                let (mut ry, mut dy) = (glyph.ry, glyph.dy);
                let y = fall_step(&mut ry, &mut dy);
                glyph.ry = ry;
                glyph.dy = dy;
                transform.translation.x = glyph.home_x;
                transform.translation.y = -y;
            }
        }
        sprite.color = ctx.tint;

        if glyph.frame >= GLYPH_LIFETIME_FRAMES {
            glyph.playing = false;
        }
    }
}

/// Retires the oldest popup over each character once its lead glyph stops
/// playing, regardless of the other glyphs.
pub(crate) fn retire_finished_popups(
    mut commands: Commands,
    mut characters: Query<&mut PopupTrail>,
    popups: Query<&DamagePopup>,
    glyphs: Query<&PopupGlyph>,
) {
    for mut trail in &mut characters {
        let Some(&oldest) = trail.active.first() else {
            continue;
        };
        let Ok(popup) = popups.get(oldest) else {
            trail.active.remove(0);
            continue;
        };
        let finished = glyphs
            .get(popup.lead_glyph)
            .map_or(true, |glyph| !glyph.playing);
        if finished {
            commands.entity(oldest).despawn();
            trail.active.remove(0);
        }
    }
}
