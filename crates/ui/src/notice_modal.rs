use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use cart::PendingNotices;

/// Shows the oldest pending notice in a modal that blocks the rest of the UI
/// until it is acknowledged.
pub fn notice_modal_ui(mut contexts: EguiContexts, mut notices: ResMut<PendingNotices>) {
    let Some(notice) = notices.front().cloned() else {
        return;
    };

    let ctx = contexts.ctx_mut();
    let modal = egui::Modal::new(egui::Id::new("cart_notice")).show(ctx, |ui| {
        ui.set_width(300.0);
        ui.label(egui::RichText::new(&notice.text).size(16.0));
        ui.add_space(10.0);
        ui.vertical_centered(|ui| ui.button("OK").clicked()).inner
    });

    if modal.inner || modal.should_close() {
        notices.dismiss();
    }
}
