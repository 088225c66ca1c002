//! Unified error handling for the reveal layer

use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Errors raised while configuring or wiring up visibility observation.
///
/// None of these reach the reader of the page. Callers log them and leave the
/// affected container in its hidden state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RevealError {
    /// Threshold outside `[0, 1]` or not a number.
    #[error("Invalid visibility threshold: {0}")]
    InvalidThreshold(f64),

    /// JavaScript interop error.
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    /// Site configuration could not be parsed or validated.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<JsValue> for RevealError {
    fn from(js_val: JsValue) -> Self {
        let message = js_val
            .as_string()
            .unwrap_or_else(|| "Unknown JavaScript error".to_string());
        RevealError::JavaScript(message)
    }
}

impl From<RevealError> for JsValue {
    fn from(err: RevealError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Result type for reveal operations
pub type RevealResult<T> = Result<T, RevealError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            RevealError::InvalidThreshold(1.5).to_string(),
            "Invalid visibility threshold: 1.5"
        );
        assert_eq!(
            RevealError::Config("missing field".into()).to_string(),
            "Configuration error: missing field"
        );
    }
}
