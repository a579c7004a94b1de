use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use cart::CartSet;

pub mod cart_panel;
pub mod menu_panel;
pub mod notice_modal;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Panels draw the freshly redrawn view; the actions they emit are
        // applied on the next frame. The side panel must be laid out before
        // the central one.
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_cafe_theme)
            .add_systems(
                Update,
                (
                    cart_panel::cart_panel_ui,
                    menu_panel::menu_panel_ui,
                    notice_modal::notice_modal_ui,
                )
                    .chain()
                    .after(CartSet::Redraw),
            );
    }
}
