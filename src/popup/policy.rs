//! Popup domain: the automatic popup gate.

use crate::config::PopupSettings;

/// Which stat pool changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Hp,
    Mp,
    Tp,
}

/// Decides whether an automatic stat-change popup fires.
///
/// `delta` follows the popup sign convention: callers pass the negated raw
/// change, so a stat gain arrives negative here (and renders as recovery
/// downstream). Negative deltas are gated by the increase switch, positive
/// ones by the decrease switch; zero never fires.
pub fn should_auto_popup(
    settings: &PopupSettings,
    suppressed: bool,
    delta: i32,
    kind: StatKind,
) -> bool {
    if suppressed {
        return false;
    }
    let stat_enabled = match kind {
        StatKind::Hp => settings.hp_auto_popup,
        StatKind::Mp => settings.mp_auto_popup,
        StatKind::Tp => settings.tp_auto_popup,
    };
    stat_enabled
        && ((settings.increase_auto_popup && delta < 0)
            || (settings.decrease_auto_popup && delta > 0))
}
