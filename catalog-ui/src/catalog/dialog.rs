use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::state::{value_as_text, Product};

pub const DIALOG_WIDTH: &str = "40%";

/// Payload injected into the product form when its dialog opens.
///
/// Kept as a plain JSON object: the form decides between create and update by
/// counting its keys, so an object with only empty values still means "edit".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialogData(Map<String, Value>);

impl DialogData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_count(&self) -> usize {
        self.0.len()
    }

    pub fn insert(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Textual value of `key`, numbers included.
    pub fn text(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(value_as_text)
    }
}

impl From<Map<String, Value>> for DialogData {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<&Product> for DialogData {
    fn from(product: &Product) -> Self {
        match serde_json::to_value(product) {
            Ok(Value::Object(map)) => Self(map),
            _ => Self::default(),
        }
    }
}

/// Options passed to the modal host.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogConfig {
    pub data: Option<DialogData>,
    pub width: String,
}

impl DialogConfig {
    pub fn new() -> Self {
        Self {
            data: None,
            width: DIALOG_WIDTH.to_string(),
        }
    }

    pub fn with_data(mut self, data: DialogData) -> Self {
        self.data = Some(data);
        self
    }

    /// Width as a fraction of the viewport, if expressed as a percentage.
    pub fn width_fraction(&self) -> Option<f32> {
        let percent: f32 = self.width.trim().strip_suffix('%')?.trim().parse().ok()?;
        Some(percent / 100.0)
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Modal surface that hosts the product form.
pub trait DialogHost: Send + Sync {
    fn open(&self, config: DialogConfig);
}

/// Handle the form uses to close its own dialog. Carries no result back.
pub trait DialogHandle: Send + Sync {
    fn close(&self);
}
