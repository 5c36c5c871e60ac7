#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("Element #{id} is not {expected}")]
    WrongElement { id: String, expected: &'static str },
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error("Unknown toggle: {0}")]
    UnknownToggle(String),
}

impl From<wasm_bindgen::JsValue> for ViewError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ViewError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
