use ahash::HashSet;
use serde::Deserialize;
use serde_inline_default::serde_inline_default;
use validator::Validate;

use crate::error::MatchError;

/// Engine configuration. Thresholds and weights come from the caller, they
/// are validated once before any row is processed.
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct MatchConfig {
  /// Minimum product name similarity for the exact-match pass.
  #[serde_inline_default(0.85)]
  #[validate(range(min = 0.0, max = 1.0))]
  pub exact_product_threshold: f64,
  /// Minimum composite score for the exact-match pass.
  #[serde_inline_default(0.6)]
  #[validate(range(min = 0.0, max = 1.0))]
  pub exact_composite_threshold: f64,
  /// Minimum composite score for the similarity fallback pass.
  #[serde_inline_default(0.3)]
  #[validate(range(min = 0.0, max = 1.0))]
  pub similarity_accept_threshold: f64,
  #[serde_inline_default(0.6)]
  #[validate(range(min = 0.0))]
  pub product_weight: f64,
  #[serde_inline_default(0.2)]
  #[validate(range(min = 0.0))]
  pub color_weight: f64,
  #[serde_inline_default(0.2)]
  #[validate(range(min = 0.0))]
  pub size_weight: f64,
  /// Tokens marking a size string as junior/child sizing.
  #[serde(default = "default_junior_size_tokens")]
  pub junior_size_tokens: HashSet<String>,
  /// Noise keywords removed from product names as whole tokens.
  #[serde(default)]
  pub strip_keywords: HashSet<String>,
}

impl Default for MatchConfig {
  fn default() -> MatchConfig {
    MatchConfig {
      exact_product_threshold: 0.85,
      exact_composite_threshold: 0.6,
      similarity_accept_threshold: 0.3,
      product_weight: 0.6,
      color_weight: 0.2,
      size_weight: 0.2,
      junior_size_tokens: default_junior_size_tokens(),
      strip_keywords: HashSet::default(),
    }
  }
}

impl MatchConfig {
  pub fn validate(&self) -> Result<(), MatchError> {
    Validate::validate(self).map_err(|err| MatchError::ConfigError(err.to_string()))?;

    if self.weight_sum() <= 0.0 {
      return Err(MatchError::ConfigError("score weights must not all be zero".to_string()));
    }

    // Exact results must always clear the similarity acceptance bar.
    if self.exact_composite_threshold < self.similarity_accept_threshold {
      return Err(MatchError::ConfigError(
        "exact_composite_threshold must not be below similarity_accept_threshold".to_string(),
      ));
    }

    Ok(())
  }

  pub(crate) fn weight_sum(&self) -> f64 {
    self.product_weight + self.color_weight + self.size_weight
  }
}

fn default_junior_size_tokens() -> HashSet<String> {
  ["js", "jm", "jl", "jxl", "jxxl", "junior", "kids", "kid", "child", "toddler", "baby"]
    .into_iter()
    .map(str::to_string)
    .collect()
}
