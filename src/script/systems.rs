//! Script domain: command dispatch onto characters and the popup globals.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::SoundCueEvent;
use crate::config::PopupSettings;
use crate::popup::{AutoPopupState, PendingPopups, PopupRequest, PopupTone, enqueue_popup};
use crate::script::commands::{PopupCommand, TargetSelector};
use crate::stage::{ActiveEvent, MapEvent, Player};

/// Applies each queued command. Popup variants resolve their target and
/// enqueue; unresolvable targets are silent no-ops.
pub(crate) fn dispatch_popup_commands(
    mut commands_in: MessageReader<PopupCommand>,
    mut cues: MessageWriter<SoundCueEvent>,
    settings: Res<PopupSettings>,
    mut auto_state: ResMut<AutoPopupState>,
    mut tone: ResMut<PopupTone>,
    active_event: Res<ActiveEvent>,
    mut characters: Query<(
        Entity,
        &mut PendingPopups,
        Option<&Player>,
        Option<&MapEvent>,
    )>,
) {
    for command in commands_in.read() {
        let (target, request) = match command {
            PopupCommand::Damage {
                target,
                value,
                mirror,
            } => (*target, PopupRequest::hp(*value, false, *mirror)),
            PopupCommand::Critical {
                target,
                value,
                mirror,
            } => (*target, PopupRequest::hp(*value, true, *mirror)),
            PopupCommand::MpDamage {
                target,
                value,
                mirror,
            } => (*target, PopupRequest::mp(*value, false, *mirror)),
            PopupCommand::MpCritical {
                target,
                value,
                mirror,
            } => (*target, PopupRequest::mp(*value, true, *mirror)),
            PopupCommand::Miss { target, mirror } => (*target, PopupRequest::miss(*mirror)),
            PopupCommand::DisableAuto => {
                auto_state.suppressed = true;
                info!("automatic popups disabled");
                continue;
            }
            PopupCommand::EnableAuto => {
                auto_state.suppressed = false;
                info!("automatic popups enabled");
                continue;
            }
            PopupCommand::SetTone(new_tone) => {
                tone.0 = Some(*new_tone);
                info!("popup tone set: {new_tone:?}");
                continue;
            }
        };

        let resolved = characters.iter().find_map(|(entity, _, player, event)| {
            let matches = match target {
                TargetSelector::Player => player.is_some(),
                TargetSelector::ActiveEvent => active_event.0 == Some(entity),
                TargetSelector::Event(id) => event.is_some_and(|e| e.id == id),
            };
            matches.then_some(entity)
        });
        let Some(entity) = resolved else {
            debug!("popup command target {target:?} resolved to no character");
            continue;
        };
        let Ok((_, mut pending, player, _)) = characters.get_mut(entity) else {
            continue;
        };
        enqueue_popup(&mut pending, request, player.is_some(), &settings, &mut cues);
    }
}
