//! Model value object representing a generative model name

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generative models known to the system (Value Object)
///
/// Known Gemini releases get their own variant so defaults and fallback
/// lists read cleanly; any other name the provider lists is carried as
/// [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini15Pro,
    Gemini15Flash,
    Gemini20Flash,
    Gemini20FlashLite,
    Gemini25Flash,
    Gemini3FlashPreview,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini15Pro => "gemini-1.5-pro",
            Model::Gemini15Flash => "gemini-1.5-flash",
            Model::Gemini20Flash => "gemini-2.0-flash",
            Model::Gemini20FlashLite => "gemini-2.0-flash-lite",
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Gemini3FlashPreview => "gemini-3-flash-preview",
            Model::Custom(s) => s,
        }
    }

    /// Ordered preference list used when a requested model is unavailable
    pub fn default_fallbacks() -> Vec<Model> {
        vec![
            Model::Gemini3FlashPreview,
            Model::Gemini25Flash,
            Model::Gemini20Flash,
            Model::Gemini20FlashLite,
        ]
    }

    /// Check if this is a retired 1.x model name that providers now alias
    pub fn is_legacy(&self) -> bool {
        matches!(self, Model::Gemini15Pro | Model::Gemini15Flash)
    }
}

impl Default for Model {
    /// Returns the default main model (gemini-1.5-pro)
    fn default() -> Self {
        Model::Gemini15Pro
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // Provider listings prefix names with "models/"
        let s = s.strip_prefix("models/").unwrap_or(s);
        Ok(match s {
            "gemini-1.5-pro" => Model::Gemini15Pro,
            "gemini-1.5-flash" => Model::Gemini15Flash,
            "gemini-2.0-flash" => Model::Gemini20Flash,
            "gemini-2.0-flash-lite" => Model::Gemini20FlashLite,
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-3-flash-preview" => Model::Gemini3FlashPreview,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
