use std::sync::{Arc, Mutex, MutexGuard};

use super::client::ProductResource;
use super::dialog::{DialogConfig, DialogData, DialogHost};
use super::notifier::{self, Notification, Notifier};
use super::state::{CatalogState, Product};
use crate::http_client::RequestError;

/// Controller behind the product list.
///
/// Cheap to clone; clones share the same state, so a clone can be moved into
/// a spawned task while the renderer keeps reading.
#[derive(Clone)]
pub struct CatalogView {
    client: Arc<dyn ProductResource>,
    notifier: Arc<dyn Notifier>,
    dialogs: Arc<dyn DialogHost>,
    state: Arc<Mutex<CatalogState>>,
}

impl CatalogView {
    pub fn new(
        client: Arc<dyn ProductResource>,
        notifier: Arc<dyn Notifier>,
        dialogs: Arc<dyn DialogHost>,
    ) -> Self {
        Self {
            client,
            notifier,
            dialogs,
            state: Arc::new(Mutex::new(CatalogState::new())),
        }
    }

    /// Snapshot for rendering.
    pub fn state(&self) -> CatalogState {
        self.lock().clone()
    }

    pub fn items(&self) -> Option<Vec<Product>> {
        self.lock().items.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    /// First render of the view.
    pub async fn activate(&self) {
        log::info!("Catalog view activated");
        self.refresh().await;
    }

    /// Reloads the whole list. Overlapping calls race; the last response wins.
    pub async fn refresh(&self) {
        self.lock().set_loading(true);

        let result = self.client.list().await;

        match result {
            Ok(items) => {
                log::debug!("Loaded {} products", items.len());
                let mut state = self.lock();
                state.replace_items(items);
                state.set_loading(false);
            }
            Err(_) => {
                self.lock().set_loading(false);
                self.notifier
                    .notify(Notification::transient(notifier::LOAD_FAILED));
            }
        }
    }

    /// Opens an empty form. The list is not refreshed when it closes.
    pub fn open_create(&self) {
        self.dialogs.open(DialogConfig::new());
    }

    pub fn open_edit(&self, product: &Product) {
        self.dialogs
            .open(DialogConfig::new().with_data(DialogData::from(product)));
    }

    /// Deletes on the server only; `items` keeps the product until the next refresh.
    pub async fn remove(&self, product: &Product) {
        let result = match product.id.as_deref() {
            Some(id) if !id.is_empty() => self.client.delete(id).await.map(|_| ()),
            _ => Err(RequestError::MissingId),
        };

        let message = match result {
            Ok(()) => notifier::DELETED,
            Err(_) => notifier::DELETE_FAILED,
        };
        self.notifier.notify(Notification::transient(message));
    }

    fn lock(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            log::warn!("Catalog state lock was poisoned; recovering");
            poisoned.into_inner()
        })
    }
}
