mod audio;
mod config;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod popup;
mod script;
mod stage;
mod stats;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Damage Pop".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::ZERO))
    .insert_resource(Time::<Fixed>::from_hz(60.0))
    .add_plugins((
        core::CorePlugin,
        config::ConfigPlugin,
        audio::PopupAudioPlugin,
        stage::StagePlugin,
        stats::StatsPlugin,
        popup::PopupPlugin,
        script::ScriptPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
