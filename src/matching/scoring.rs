use crate::{
  config::MatchConfig,
  matching::{
    comparers::{best_similarity, similarity},
    normalize::{Cache, Normalizer, variants},
    sizes::{SizeMatch, size_match_variants},
  },
  model::ComponentScores,
};

/// Matchable fields of a row or catalog entry after normalization, with
/// multi-value option cells expanded.
pub(crate) struct NormalizedFields {
  pub product_name: String,
  pub colors: Vec<String>,
  pub sizes: Vec<String>,
}

impl NormalizedFields {
  pub(crate) fn of<C: Cache>(product_name: &str, color: &str, size: &str, normalizer: &Normalizer<'_, C>) -> NormalizedFields {
    NormalizedFields {
      product_name: normalizer.normalize(product_name),
      colors: variants(color).into_iter().map(|variant| normalizer.normalize(variant)).collect(),
      sizes: variants(size).into_iter().map(|variant| normalizer.normalize(variant)).collect(),
    }
  }
}

pub(crate) enum CandidateScore {
  /// Junior/adult size pairing, the candidate is out regardless of text.
  Blocked,
  Scored {
    composite: f64,
    components: ComponentScores,
    size: SizeMatch,
  },
}

/// Weighted composite of product name, color and size sub-scores. The size
/// comparison runs first so a blocked pairing returns before any string
/// similarity is computed.
pub(crate) fn score_candidate(lhs: &NormalizedFields, rhs: &NormalizedFields, config: &MatchConfig) -> CandidateScore {
  let size = size_match_variants(&lhs.sizes, &rhs.sizes, &config.junior_size_tokens);

  if size == SizeMatch::Blocked {
    return CandidateScore::Blocked;
  }

  let components = ComponentScores {
    product_name: similarity(&lhs.product_name, &rhs.product_name),
    color: best_similarity(&lhs.colors, &rhs.colors),
    size: size.score(),
  };

  // Normalizing by the weight sum keeps the composite in [0, 1] for any
  // valid weight configuration.
  let composite = (components.product_name * config.product_weight + components.color * config.color_weight + components.size * config.size_weight) / config.weight_sum();

  CandidateScore::Scored { composite, components, size }
}
