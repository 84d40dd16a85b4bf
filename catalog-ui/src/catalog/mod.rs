pub mod actions;
pub mod client;
pub mod dialog;
pub mod form;
pub mod notifier;
pub mod state;
pub mod view;


pub use actions::CatalogAction;
pub use client::{ProductResource, ProductsService};
pub use dialog::{DialogConfig, DialogData, DialogHandle, DialogHost};
pub use form::ProductForm;
pub use notifier::{Notification, Notifier};
pub use state::{CatalogState, Product, ProductFields};
pub use view::CatalogView;
