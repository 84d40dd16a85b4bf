use eframe::egui;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::catalog::{DialogConfig, DialogHandle, DialogHost, Notifier, ProductForm, ProductResource};

const FALLBACK_WIDTH_FRACTION: f32 = 0.4;

/// Dialog host backed by the egui frame loop: `open` only records the request,
/// the app turns it into a `ProductDialog` on the next frame.
#[derive(Default)]
pub struct ModalHost {
    pending: Mutex<Option<DialogConfig>>,
}

impl ModalHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_request(&self) -> Option<DialogConfig> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }
}

impl DialogHost for ModalHost {
    fn open(&self, config: DialogConfig) {
        log::debug!("Opening product dialog (width {})", config.width);
        *self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(config);
    }
}

#[derive(Default)]
pub struct FormDialogHandle {
    closed: AtomicBool,
}

impl FormDialogHandle {
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl DialogHandle for FormDialogHandle {
    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogEvent {
    None,
    Submit,
    Cancel,
}

/// An open product form and the modal window around it.
pub struct ProductDialog {
    form: ProductForm,
    handle: Arc<FormDialogHandle>,
    width_fraction: f32,
}

impl ProductDialog {
    pub fn open(
        client: Arc<dyn ProductResource>,
        notifier: Arc<dyn Notifier>,
        config: DialogConfig,
    ) -> Self {
        let handle = Arc::new(FormDialogHandle::default());
        let width_fraction = config.width_fraction().unwrap_or(FALLBACK_WIDTH_FRACTION);
        let form = ProductForm::new(client, notifier, handle.clone(), config.data);

        Self {
            form,
            handle,
            width_fraction,
        }
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn close(&self) {
        self.handle.close();
    }

    pub fn is_closed(&self) -> bool {
        self.handle.is_closed()
    }

    pub fn show(&mut self, ctx: &egui::Context) -> DialogEvent {
        let editing = self.form.is_editing();
        let title = if editing { "Edit Product" } else { "Add Product" };
        let width = ctx.screen_rect().width() * self.width_fraction;

        let mut event = DialogEvent::None;
        let mut open = true;

        egui::Window::new(title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(width)
            .min_width(width)
            .max_width(width)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                let fields = &mut self.form.fields;
                egui::Grid::new("product_form_grid")
                    .num_columns(2)
                    .spacing([10.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Title:");
                        ui.text_edit_singleline(&mut fields.title);
                        ui.end_row();

                        ui.label("Description:");
                        ui.text_edit_multiline(&mut fields.description);
                        ui.end_row();

                        ui.label("Price:");
                        ui.text_edit_singleline(&mut fields.price);
                        ui.end_row();

                        ui.label("Category:");
                        ui.text_edit_singleline(&mut fields.category);
                        ui.end_row();
                    });

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        event = DialogEvent::Cancel;
                    }
                    let label = if editing { "Update" } else { "Save" };
                    if ui.button(label).clicked() {
                        event = DialogEvent::Submit;
                    }
                });
            });

        if !open {
            event = DialogEvent::Cancel;
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_host_keeps_latest_request() {
        let host = ModalHost::new();
        assert!(host.take_request().is_none());

        host.open(DialogConfig::new());
        let edit = DialogConfig::new().with_data(crate::catalog::DialogData::new().insert("id", "9"));
        host.open(edit.clone());

        assert_eq!(host.take_request(), Some(edit));
        assert!(host.take_request().is_none());
    }

    #[test]
    fn handle_close_is_sticky() {
        let handle = FormDialogHandle::default();
        assert!(!handle.is_closed());
        handle.close();
        handle.close();
        assert!(handle.is_closed());
    }
}
