//! Model value object representing a completion backend model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Models offered by the completion backend (Value Object)
///
/// Identifiers follow the OpenRouter `vendor/model` naming. Anything not in
/// the catalogue is carried through as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Model {
    #[default]
    Mistral7bInstruct,
    Gpt35Turbo,
    Claude3Haiku,
    Gemma7bIt,
    Custom(String),
}

impl Model {
    /// Get the backend identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Mistral7bInstruct => "mistralai/mistral-7b-instruct",
            Model::Gpt35Turbo => "openai/gpt-3.5-turbo",
            Model::Claude3Haiku => "anthropic/claude-3-haiku",
            Model::Gemma7bIt => "google/gemma-7b-it",
            Model::Custom(s) => s,
        }
    }

    /// Human-readable label for model pickers
    pub fn label(&self) -> &str {
        match self {
            Model::Mistral7bInstruct => "Mistral 7B (Fast)",
            Model::Gpt35Turbo => "GPT-3.5 Turbo",
            Model::Claude3Haiku => "Claude 3 Haiku",
            Model::Gemma7bIt => "Gemma 7B",
            Model::Custom(s) => s,
        }
    }

    /// The catalogue of known models, default first
    pub fn catalogue() -> Vec<Model> {
        vec![
            Model::Mistral7bInstruct,
            Model::Gpt35Turbo,
            Model::Claude3Haiku,
            Model::Gemma7bIt,
        ]
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Model::Custom(_))
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
        Ok(match s.trim() {
            "mistralai/mistral-7b-instruct" => Model::Mistral7bInstruct,
            "openai/gpt-3.5-turbo" => Model::Gpt35Turbo,
            "anthropic/claude-3-haiku" => Model::Claude3Haiku,
            "google/gemma-7b-it" => Model::Gemma7bIt,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_roundtrip() {
        for model in Model::catalogue() {
            let parsed: Model = model.to_string().parse().unwrap();
            assert_eq!(model, parsed);
            assert!(!parsed.is_custom());
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "meta-llama/llama-3-8b-instruct".parse().unwrap();
        assert_eq!(
            model,
            Model::Custom("meta-llama/llama-3-8b-instruct".to_string())
        );
        assert_eq!(model.to_string(), "meta-llama/llama-3-8b-instruct");
        assert_eq!(model.label(), "meta-llama/llama-3-8b-instruct");
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::Mistral7bInstruct);
        assert_eq!(Model::catalogue()[0], Model::default());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Model::Mistral7bInstruct.label(), "Mistral 7B (Fast)");
        assert_eq!(Model::Claude3Haiku.label(), "Claude 3 Haiku");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&Model::Gpt35Turbo).unwrap();
        assert_eq!(json, "\"openai/gpt-3.5-turbo\"");
        let model: Model = serde_json::from_str("\"google/gemma-7b-it\"").unwrap();
        assert_eq!(model, Model::Gemma7bIt);
    }
}
