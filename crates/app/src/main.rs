use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

#[cfg(target_arch = "wasm32")]
mod dom_mirror;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: cart::config::WINDOW_TITLE.to_string(),
            resolution: (1100.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            fit_canvas_to_parent: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(250)),
    })
    .insert_resource(ClearColor(Color::srgb(0.98, 0.96, 0.92)))
    // CartPlugin first: SavePlugin restores into its resources.
    .add_plugins((cart::CartPlugin, save::SavePlugin, ui::UiPlugin))
    .add_systems(Startup, spawn_camera);

    #[cfg(target_arch = "wasm32")]
    app.add_plugins(dom_mirror::DomMirrorPlugin);

    app.run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
