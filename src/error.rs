use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid widget config: {0}")]
    Config(String),
}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        WidgetError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        WidgetError::Config(err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for WidgetError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        WidgetError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WidgetError>;
