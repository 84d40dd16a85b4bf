use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A catalog entry as exchanged with the products API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_text_or_number"
    )]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    // Kept as text; never parsed.
    #[serde(default, deserialize_with = "text_or_number")]
    pub price: String,
    #[serde(default)]
    pub category: String,
}

impl Product {
    pub fn new(title: &str, description: &str, price: &str, category: &str) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            description: description.to_string(),
            price: price.to_string(),
            category: category.to_string(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn fields(&self) -> ProductFields {
        ProductFields {
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            category: self.category.clone(),
        }
    }
}

/// The four user-editable fields of a product form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: String,
}

impl ProductFields {
    pub fn into_product(self, id: Option<String>) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            category: self.category,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    // None until the first successful load
    pub items: Option<Vec<Product>>,
    pub loading: bool,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn replace_items(&mut self, items: Vec<Product>) {
        self.items = Some(items);
    }
}

/// Renders a JSON scalar the way a text input would show it.
pub(crate) fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Null => Ok(String::new()),
        Value::String(_) | Value::Number(_) => Ok(value_as_text(&value).unwrap_or_default()),
        other => Err(de::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}

fn optional_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Null => Ok(None),
        Value::String(_) | Value::Number(_) => Ok(value_as_text(&value)),
        other => Err(de::Error::custom(format!(
            "expected a string or number id, found {}",
            other
        ))),
    }
}
