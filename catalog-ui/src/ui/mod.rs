// egui side of the catalog.
//
// `table` holds pure render functions: they read a state snapshot and return
// actions for the app to dispatch, with no backend calls.
//
// `modal` and `toasts` are stateful: `ModalHost` and `ToastNotifier` implement
// the catalog collaborator traits, and `ProductDialog` owns a `ProductForm`
// whose submit goes to the products client.

pub mod modal;
pub mod table;
pub mod toasts;

pub use modal::{DialogEvent, ModalHost, ProductDialog};
pub use table::render_products;
pub use toasts::ToastNotifier;
