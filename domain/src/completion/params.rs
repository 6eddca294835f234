//! Generation parameters value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Upper bound accepted for sampling temperature
pub const MAX_TEMPERATURE: f32 = 2.0;

/// Sampling parameters sent with every completion request
///
/// Defaults are 1000 tokens at temperature 0.7.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 1000,
            temperature: 0.7,
        }
    }
}

impl GenerationParams {
    /// Create validated parameters
    pub fn new(max_tokens: u32, temperature: f32) -> Result<Self, DomainError> {
        let params = Self {
            max_tokens,
            temperature,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.max_tokens == 0 {
            return Err(DomainError::InvalidGenerationParams(
                "max_tokens must be at least 1".to_string(),
            ));
        }
        if !(0.0..=MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(DomainError::InvalidGenerationParams(format!(
                "temperature must be between 0.0 and {}, got {}",
                MAX_TEMPERATURE, self.temperature
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = GenerationParams::default();
        assert_eq!(params.max_tokens, 1000);
        assert!((params.temperature - 0.7).abs() < f32::EPSILON);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_tokens() {
        assert!(matches!(
            GenerationParams::new(0, 0.7),
            Err(DomainError::InvalidGenerationParams(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_temperature() {
        assert!(GenerationParams::new(100, -0.1).is_err());
        assert!(GenerationParams::new(100, 2.5).is_err());
        assert!(GenerationParams::new(100, f32::NAN).is_err());
        assert!(GenerationParams::new(100, 2.0).is_ok());
        assert!(GenerationParams::new(100, 0.0).is_ok());
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let params: GenerationParams = serde_json::from_str(r#"{"temperature": 0.2}"#).unwrap();
        assert_eq!(params.max_tokens, 1000);
        assert!((params.temperature - 0.2).abs() < f32::EPSILON);
    }
}
