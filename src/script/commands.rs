//! Script domain: the closed popup command set and target selectors.

use bevy::ecs::message::Message;

use crate::popup::Tone;

/// Which character a command addresses, in the console's addressing scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSelector {
    /// `-1`: the player-controlled character.
    Player,
    /// `0`: the map event currently executing.
    ActiveEvent,
    /// `N >= 1`: the map event with that id.
    Event(u32),
}

impl TargetSelector {
    /// Maps the raw console argument. Values below -1 clamp to the player,
    /// matching the console's argument handling.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            raw if raw <= -1 => Self::Player,
            0 => Self::ActiveEvent,
            id => Self::Event(id as u32),
        }
    }
}

/// One popup command, already parsed by the console layer. Alias spelling
/// never reaches this crate; the console resolves it before dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupCommand {
    Damage {
        target: TargetSelector,
        value: i32,
        mirror: bool,
    },
    Critical {
        target: TargetSelector,
        value: i32,
        mirror: bool,
    },
    MpDamage {
        target: TargetSelector,
        value: i32,
        mirror: bool,
    },
    MpCritical {
        target: TargetSelector,
        value: i32,
        mirror: bool,
    },
    Miss {
        target: TargetSelector,
        mirror: bool,
    },
    DisableAuto,
    EnableAuto,
    SetTone(Tone),
}

impl Message for PopupCommand {}
