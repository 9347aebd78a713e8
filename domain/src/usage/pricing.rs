//! Token estimation and the fixed price table.

/// Model name reported by the offline stand-in provider.
pub const STAND_IN_MODEL: &str = "stand-in";

/// Rough token count: one token per four characters, rounded up.
pub fn estimate_tokens(text: &str) -> u64 {
    (text.chars().count() as u64).div_ceil(4)
}

/// USD price per million tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPricing {
    pub input_per_million: f64,
    pub output_per_million: f64,
}

impl ModelPricing {
    pub const fn new(input_per_million: f64, output_per_million: f64) -> Self {
        Self {
            input_per_million,
            output_per_million,
        }
    }

    /// Look up the price for a model name. Unknown models are billed at the
    /// full-size rate so estimates err on the expensive side.
    pub fn for_model(model: &str) -> Self {
        let model = model.to_lowercase();
        // "flash" first: every "gemini-*" name also contains "mini".
        if model.starts_with(STAND_IN_MODEL) {
            Self::new(0.0, 0.0)
        } else if model.contains("flash") {
            Self::new(0.10, 0.40)
        } else if model.contains("mini") {
            Self::new(0.15, 0.60)
        } else {
            Self::new(2.50, 10.00)
        }
    }

    pub fn cost(&self, input_tokens: u64, output_tokens: u64) -> f64 {
        (input_tokens as f64 / 1_000_000.0) * self.input_per_million
            + (output_tokens as f64 / 1_000_000.0) * self.output_per_million
    }
}
