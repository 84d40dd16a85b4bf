use eframe::egui;

use crate::catalog::{CatalogAction, CatalogState};

/// Product list with per-row Edit/Delete. Returns the actions clicked this frame.
pub fn render_products(ui: &mut egui::Ui, state: &CatalogState) -> Vec<CatalogAction> {
    let mut actions = Vec::new();

    let Some(items) = &state.items else {
        ui.centered_and_justified(|ui| {
            if state.loading {
                ui.spinner();
            } else {
                ui.label("No products loaded yet.");
            }
        });
        return actions;
    };

    if items.is_empty() {
        ui.label("No products found.");
        return actions;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("products_grid")
            .num_columns(5)
            .striped(true)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.strong("Title");
                ui.strong("Description");
                ui.strong("Price");
                ui.strong("Category");
                ui.strong("Actions");
                ui.end_row();

                for product in items {
                    ui.label(product.title.as_str());
                    ui.label(product.description.as_str());
                    ui.label(product.price.as_str());
                    ui.label(product.category.as_str());
                    ui.horizontal(|ui| {
                        if ui.button("✏ Edit").clicked() {
                            actions.push(CatalogAction::OpenEdit(product.clone()));
                        }
                        if ui.button("🗑 Delete").clicked() {
                            actions.push(CatalogAction::Remove(product.clone()));
                        }
                    });
                    ui.end_row();
                }
            });
    });

    actions
}
