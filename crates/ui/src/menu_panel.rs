//! Menu panel: category tabs on top, filtered entries with `−`/`+` controls
//! and the quantity already in the cart.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use cart::config::{ALL_CATEGORIES, ALL_CATEGORIES_LABEL, MENU_TITLE};
use cart::{format_price, ActiveCategory, CartAction, CartActionEvent, CartView, MenuCatalog};

/// One tab of the category bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTab {
    pub key: String,
    pub label: String,
}

/// "All" first, then the menu's categories in display order.
pub fn category_tabs(catalog: &MenuCatalog) -> Vec<CategoryTab> {
    std::iter::once(CategoryTab {
        key: ALL_CATEGORIES.to_string(),
        label: ALL_CATEGORIES_LABEL.to_string(),
    })
    .chain(catalog.categories().into_iter().map(|category| CategoryTab {
        key: category.key().to_string(),
        label: category.label().to_string(),
    }))
    .collect()
}

pub fn menu_panel_ui(
    mut contexts: EguiContexts,
    catalog: Res<MenuCatalog>,
    filter: Res<ActiveCategory>,
    view: Res<CartView>,
    mut actions: EventWriter<CartActionEvent>,
) {
    let ctx = contexts.ctx_mut();
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(MENU_TITLE);

        ui.horizontal_wrapped(|ui| {
            for tab in category_tabs(&catalog) {
                let selected = filter.key() == tab.key;
                if ui.selectable_label(selected, &tab.label).clicked() && !selected {
                    actions.send(CartActionEvent(CartAction::SelectCategory(tab.key)));
                }
            }
        });
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            for item in catalog.visible(&filter) {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&item.name).strong());
                        ui.label(
                            egui::RichText::new(format!(
                                "{} / {}",
                                format_price(item.price),
                                item.unit.label()
                            ))
                            .weak(),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("+").clicked() {
                            actions.send(CartActionEvent(CartAction::add_menu_item(item)));
                        }
                        ui.label(view.menu_quantity(&item.id).to_string());
                        if ui.button("−").clicked() {
                            actions.send(CartActionEvent(CartAction::Remove {
                                id: item.id.clone(),
                            }));
                        }
                    });
                });
                ui.separator();
            }
        });
    });
}
