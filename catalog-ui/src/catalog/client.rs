use async_trait::async_trait;
use serde_json::Value;

use super::state::Product;
use crate::http_client::{ClientOptions, HttpClient, RequestError, Result};

const PRODUCTS_PATH: &str = "products";

/// The four REST operations on the products collection.
///
/// Each call is a single request: no caching, no retries, no deduplication.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ProductResource: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>>;
    async fn create(&self, product: &Product) -> Result<Product>;
    async fn update(&self, product: &Product) -> Result<Product>;
    async fn delete(&self, id: &str) -> Result<Value>;
}

/// Products-specific wrapper around the generic HttpClient
#[derive(Clone)]
pub struct ProductsService {
    http: HttpClient,
}

impl ProductsService {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: HttpClient::new(base_url),
        }
    }

    pub fn with_options(base_url: &str, options: &ClientOptions) -> Self {
        Self {
            http: HttpClient::with_options(base_url, options),
        }
    }

    fn item_path(id: &str) -> String {
        format!("{}/{}", PRODUCTS_PATH, id)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ProductResource for ProductsService {
    async fn list(&self) -> Result<Vec<Product>> {
        self.http.get_request(PRODUCTS_PATH).await
    }

    async fn create(&self, product: &Product) -> Result<Product> {
        self.http.post_request(PRODUCTS_PATH, product).await
    }

    async fn update(&self, product: &Product) -> Result<Product> {
        let id = match product.id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => return Err(RequestError::MissingId),
        };
        self.http.put_request(&Self::item_path(id), product).await
    }

    async fn delete(&self, id: &str) -> Result<Value> {
        self.http.delete_request(&Self::item_path(id)).await
    }
}
