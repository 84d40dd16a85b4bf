use std::sync::Arc;

use super::client::ProductResource;
use super::dialog::{DialogData, DialogHandle};
use super::notifier::{self, Notification, Notifier};
use super::state::ProductFields;

/// Add/edit form hosted in the product dialog.
#[derive(Clone)]
pub struct ProductForm {
    client: Arc<dyn ProductResource>,
    notifier: Arc<dyn Notifier>,
    dialog: Arc<dyn DialogHandle>,
    data: Option<DialogData>,
    pub fields: ProductFields,
}

impl ProductForm {
    pub fn new(
        client: Arc<dyn ProductResource>,
        notifier: Arc<dyn Notifier>,
        dialog: Arc<dyn DialogHandle>,
        data: Option<DialogData>,
    ) -> Self {
        let fields = match &data {
            Some(data) if data.key_count() > 0 => ProductFields {
                title: data.text("title").unwrap_or_default(),
                description: data.text("description").unwrap_or_default(),
                price: data.text("price").unwrap_or_default(),
                category: data.text("category").unwrap_or_default(),
            },
            _ => ProductFields::default(),
        };

        Self {
            client,
            notifier,
            dialog,
            data,
            fields,
        }
    }

    /// True when the injected data has at least one key, even if every value is empty.
    pub fn is_editing(&self) -> bool {
        self.data.as_ref().is_some_and(|data| data.key_count() > 0)
    }

    pub fn value(&self) -> ProductFields {
        self.fields.clone()
    }

    pub fn patch_value(&mut self, fields: ProductFields) {
        self.fields = fields;
    }

    /// Creates or updates depending on `is_editing`; closes the dialog only on success.
    pub async fn submit(&self) {
        let mut product = self.value().into_product(None);

        let (result, success_message) = match self.data.as_ref() {
            Some(data) if data.key_count() > 0 => {
                product.id = data.text("id");
                (self.client.update(&product).await.map(|_| ()), notifier::UPDATED)
            }
            _ => (self.client.create(&product).await.map(|_| ()), notifier::ADDED),
        };

        match result {
            Ok(()) => {
                self.notifier.notify(Notification::transient(success_message));
                self.dialog.close();
            }
            Err(_) => {
                self.notifier
                    .notify(Notification::transient(notifier::SAVE_FAILED));
            }
        }
    }
}
