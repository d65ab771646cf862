use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    Dom(String),
    Storage(String),
    Config(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::Dom(msg) => write!(f, "DOM Error: {}", msg),
            ThemeError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            ThemeError::Config(msg) => write!(f, "Config Error: {}", msg),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<serde_json::Error> for ThemeError {
    fn from(error: serde_json::Error) -> Self {
        ThemeError::Config(error.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ThemeError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ThemeError::Dom(format!("{:?}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ThemeError::Dom("no body".into()).to_string(), "DOM Error: no body");
        assert_eq!(
            ThemeError::Storage("quota".into()).to_string(),
            "Storage Error: quota"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<u8>("nope").unwrap_err();
        assert!(matches!(ThemeError::from(err), ThemeError::Config(_)));
    }
}
