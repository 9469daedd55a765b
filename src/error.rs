use std::fmt;
use wasm_bindgen::JsValue;

/// Failures that abort a spin before the reel starts moving.
#[derive(Debug, Clone, PartialEq)]
pub enum ReelError {
    /// No element carries the configured container id.
    MissingContainer(String),
    /// Nothing matches the reel selector.
    MissingReel(String),
    /// The reel matched, but is not an `HTMLElement` with a style declaration.
    NotStylable(String),
    /// The browser refused the selector string.
    InvalidSelector(String),
    /// Writing a CSS property on the reel failed.
    StyleRejected(String),
    /// Moving a child inside the container failed.
    ReorderFailed(String),
    /// A configuration value is out of range or empty.
    InvalidConfig(String),
    /// The configuration JSON could not be deserialized.
    ConfigParse(String),
}

impl fmt::Display for ReelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReelError::MissingContainer(id) => write!(f, "No container element with id '{}'", id),
            ReelError::MissingReel(selector) => {
                write!(f, "No reel element matches '{}'", selector)
            }
            ReelError::NotStylable(selector) => write!(
                f,
                "Element matched by '{}' does not support inline styles",
                selector
            ),
            ReelError::InvalidSelector(selector) => write!(f, "Invalid selector '{}'", selector),
            ReelError::StyleRejected(property) => {
                write!(f, "Could not set style property '{}' on the reel", property)
            }
            ReelError::ReorderFailed(reason) => {
                write!(f, "Could not reorder container children: {}", reason)
            }
            ReelError::InvalidConfig(reason) => write!(f, "Invalid reel configuration: {}", reason),
            ReelError::ConfigParse(reason) => {
                write!(f, "Failed to parse reel configuration: {}", reason)
            }
        }
    }
}

impl std::error::Error for ReelError {}

impl From<ReelError> for JsValue {
    fn from(err: ReelError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
