use eframe::egui;
use std::sync::Arc;

use crate::catalog::{CatalogAction, CatalogView, ProductResource, ProductsService};
use crate::config::CatalogConfig;
use crate::ui::{render_products, DialogEvent, ModalHost, ProductDialog, ToastNotifier};
use crate::wasm_utils;

/// Main Product Catalog Application
pub struct CatalogApp {
    title: String,
    view: CatalogView,
    client: Arc<dyn ProductResource>,
    notifier: Arc<ToastNotifier>,
    modal: Arc<ModalHost>,
    dialog: Option<ProductDialog>,
    activated: bool,
}

impl CatalogApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: CatalogConfig) -> Self {
        wasm_utils::set_panic_hook();
        log::info!("Starting Product Catalog against {}", config.api.base_url);

        let client: Arc<dyn ProductResource> = Arc::new(ProductsService::with_options(
            &config.api.base_url,
            &config.api.client_options(),
        ));
        let notifier = Arc::new(ToastNotifier::new());
        let modal = Arc::new(ModalHost::new());
        let view = CatalogView::new(client.clone(), notifier.clone(), modal.clone());

        Self {
            title: config.window.title,
            view,
            client,
            notifier,
            modal,
            dialog: None,
            activated: false,
        }
    }

    fn dispatch(&self, action: CatalogAction) {
        log::debug!("Dispatching action: {}", action.description());

        match action {
            CatalogAction::Refresh => {
                let view = self.view.clone();
                wasm_utils::spawn_async(async move { view.refresh().await });
            }
            CatalogAction::OpenCreate => self.view.open_create(),
            CatalogAction::OpenEdit(product) => self.view.open_edit(&product),
            CatalogAction::Remove(product) => {
                let view = self.view.clone();
                wasm_utils::spawn_async(async move { view.remove(&product).await });
            }
        }
    }

    fn update_dialog(&mut self, ctx: &egui::Context) {
        if let Some(config) = self.modal.take_request() {
            self.dialog = Some(ProductDialog::open(
                self.client.clone(),
                self.notifier.clone(),
                config,
            ));
        }

        if let Some(dialog) = &mut self.dialog {
            match dialog.show(ctx) {
                DialogEvent::Submit => {
                    let form = dialog.form().clone();
                    wasm_utils::spawn_async(async move { form.submit().await });
                }
                DialogEvent::Cancel => dialog.close(),
                DialogEvent::None => {}
            }
        }

        // Closing never refreshes the list.
        if self.dialog.as_ref().is_some_and(|dialog| dialog.is_closed()) {
            self.dialog = None;
        }
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        if !self.activated {
            self.activated = true;
            let view = self.view.clone();
            wasm_utils::spawn_async(async move { view.activate().await });
        }

        let state = self.view.state();
        let mut actions = Vec::new();

        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.title.as_str());
                ui.separator();

                if ui.button("➕ Add Product").clicked() {
                    actions.push(CatalogAction::OpenCreate);
                }

                if ui.button("🔄 Refresh").clicked() {
                    actions.push(CatalogAction::Refresh);
                }

                if state.loading {
                    ui.spinner();
                    ui.label("Loading products...");
                }
            });
        });

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| {
            actions.extend(render_products(ui, &state));
        });

        for action in actions {
            self.dispatch(action);
        }

        self.update_dialog(ctx);
        self.notifier.render(ctx);
    }
}
