use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use cart::config::{CART_TITLE, CHECKOUT_LABEL, EMPTY_CART_TEXT};
use cart::{CartAction, CartActionEvent, CartView};

/// Right-hand cart panel: one row per line, the total and the checkout button.
pub fn cart_panel_ui(
    mut contexts: EguiContexts,
    view: Res<CartView>,
    mut actions: EventWriter<CartActionEvent>,
) {
    let ctx = contexts.ctx_mut();
    egui::SidePanel::right("cart_panel")
        .resizable(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.heading(CART_TITLE);
            ui.separator();

            if view.is_empty() {
                ui.label(egui::RichText::new(EMPTY_CART_TEXT).italics().weak());
            } else {
                egui::ScrollArea::vertical()
                    .max_height(ui.available_height() - 80.0)
                    .show(ui, |ui| {
                        for line in &view.lines {
                            ui.horizontal(|ui| {
                                ui.label(&line.name);
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.label(&line.subtotal_label);
                                        if ui.small_button("+").clicked() {
                                            actions.send(CartActionEvent(CartAction::Increase {
                                                id: line.id.clone(),
                                            }));
                                        }
                                        ui.label(line.quantity.to_string());
                                        if ui.small_button("−").clicked() {
                                            actions.send(CartActionEvent(CartAction::Decrease {
                                                id: line.id.clone(),
                                            }));
                                        }
                                    },
                                );
                            });
                        }
                    });
            }

            ui.separator();
            ui.label(egui::RichText::new(&view.total_label).strong().size(18.0));
            ui.add_space(6.0);
            if ui
                .add_sized([ui.available_width(), 32.0], egui::Button::new(CHECKOUT_LABEL))
                .clicked()
            {
                actions.send(CartActionEvent(CartAction::Checkout));
            }
        });
}
