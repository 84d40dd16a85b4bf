use super::state::Product;

/// User intents raised by the catalog screen.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    Refresh,
    OpenCreate,
    OpenEdit(Product),
    Remove(Product),
}

impl CatalogAction {
    pub fn description(&self) -> &'static str {
        match self {
            CatalogAction::Refresh => "Refreshing product list",
            CatalogAction::OpenCreate => "Opening add product dialog",
            CatalogAction::OpenEdit(_) => "Opening edit product dialog",
            CatalogAction::Remove(_) => "Deleting product",
        }
    }
}
