//! UI domain: player stat bars.

use bevy::prelude::*;

use crate::popup::StatKind;
use crate::stage::Player;
use crate::stats::{Health, Mana, Technique};

pub(crate) const HUD_BAR_WIDTH: f32 = 200.0;
pub(crate) const HUD_BAR_HEIGHT: f32 = 14.0;
pub(crate) const HUD_PADDING: f32 = 16.0;

/// Marker for the HUD root container
#[derive(Component)]
pub struct StatHudRoot;

/// Marker for one stat bar's fill element
#[derive(Component)]
pub struct StatBarFill(pub StatKind);

pub(crate) fn spawn_stat_hud(mut commands: Commands) {
    commands
        .spawn((
            StatHudRoot,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            for (label, kind) in [
                ("HP", StatKind::Hp),
                ("MP", StatKind::Mp),
                ("TP", StatKind::Tp),
            ] {
                parent
                    .spawn(Node {
                        flex_direction: FlexDirection::Row,
                        align_items: AlignItems::Center,
                        column_gap: Val::Px(8.0),
                        ..default()
                    })
                    .with_children(|row| {
                        row.spawn((
                            Text::new(label),
                            TextFont {
                                font_size: 12.0,
                                ..default()
                            },
                            TextColor(Color::srgb(0.9, 0.9, 0.9)),
                            Node {
                                width: Val::Px(22.0),
                                ..default()
                            },
                        ));
                        row.spawn((
                            Node {
                                width: Val::Px(HUD_BAR_WIDTH),
                                height: Val::Px(HUD_BAR_HEIGHT),
                                border: UiRect::all(Val::Px(2.0)),
                                ..default()
                            },
                            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
                            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
                        ))
                        .with_children(|bar| {
                            bar.spawn((
                                StatBarFill(kind),
                                Node {
                                    width: Val::Percent(100.0),
                                    height: Val::Percent(100.0),
                                    ..default()
                                },
                                BackgroundColor(Color::srgb(0.2, 0.8, 0.3)),
                            ));
                        });
                    });
            }
        });
}

pub(crate) fn update_stat_hud(
    player_query: Query<(&Health, &Mana, &Technique), With<Player>>,
    mut fill_query: Query<(&StatBarFill, &mut Node, &mut BackgroundColor)>,
) {
    let Ok((health, mana, technique)) = player_query.single() else {
        return;
    };

    for (fill, mut node, mut bg_color) in &mut fill_query {
        let percent = match fill.0 {
            StatKind::Hp => health.percent(),
            StatKind::Mp => mana.percent(),
            StatKind::Tp => technique.percent(),
        };
        node.width = Val::Percent(percent * 100.0);

        bg_color.0 = match fill.0 {
            // Health ramps green -> yellow -> red as it drains
            StatKind::Hp => {
                if percent > 0.5 {
                    let t = (percent - 0.5) * 2.0;
                    Color::srgb(1.0 - t * 0.8, 0.8, 0.3 * (1.0 - t))
                } else {
                    let t = percent * 2.0;
                    Color::srgb(0.9, 0.2 + t * 0.6, 0.2)
                }
            }
            StatKind::Mp => Color::srgb(0.3, 0.5, 0.9),
            StatKind::Tp => Color::srgb(0.9, 0.8, 0.3),
        };
    }
}
