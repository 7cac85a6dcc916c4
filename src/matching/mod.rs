pub(crate) mod comparers;
pub(crate) mod normalize;
pub(crate) mod scoring;
pub(crate) mod sizes;

use rayon::prelude::*;

use crate::{
  config::MatchConfig,
  index::BrandIndex,
  matching::{
    normalize::{Cache, Normalizer},
    scoring::{CandidateScore, NormalizedFields},
    sizes::SizeMatch,
  },
  model::{CatalogEntry, ComponentScores, InputRow, MatchKind, MatchResult},
};

/// Per-row orchestration: brand bucket lookup, exact-match pass, similarity
/// fallback, best-composite selection with stable tie-breaks.
pub struct Matcher<'e, 'c, C: Cache> {
  index: &'e BrandIndex,
  config: &'c MatchConfig,
  normalizer: Normalizer<'c, C>,
}

struct Best<'e> {
  entry: &'e CatalogEntry,
  composite: f64,
  components: ComponentScores,
}

impl<'e, 'c, C: Cache> Matcher<'e, 'c, C> {
  pub fn new(index: &'e BrandIndex, config: &'c MatchConfig, cache: &'c C) -> Matcher<'e, 'c, C> {
    Matcher {
      index,
      config,
      normalizer: Normalizer::new(&config.strip_keywords, cache),
    }
  }

  /// Match one row against the catalog. Malformed or empty row fields score
  /// low and degrade to a NONE result, they never fail.
  pub fn match_row(&self, row: &InputRow) -> MatchResult<'e> {
    let candidates = self.index.lookup(&normalize::brand_key(&row.brand));

    // Brand is an exact filter. An unknown brand means no candidates, no
    // fuzzy fallback and no scoring work at all.
    if candidates.is_empty() {
      tracing::debug!(row = row.source_row_id, brand = %row.brand, "brand not in catalog");

      return MatchResult::none(row.source_row_id);
    }

    let fields = NormalizedFields::of(&row.product_name, &row.color, &row.size, &self.normalizer);

    let mut exact: Option<Best<'e>> = None;
    let mut fallback: Option<Best<'e>> = None;

    for entry in candidates {
      let entry_fields = NormalizedFields::of(&entry.product_name, &entry.color, &entry.size, &self.normalizer);

      let CandidateScore::Scored { composite, components, size } = scoring::score_candidate(&fields, &entry_fields, self.config) else {
        tracing::debug!(row = row.source_row_id, product = %entry.product_name, "blocked junior/adult size pairing");

        continue;
      };

      tracing::debug!(row = row.source_row_id, product = %entry.product_name, score = composite, "scored candidate");

      let qualifies_exact = components.product_name >= self.config.exact_product_threshold
        && matches!(size, SizeMatch::Exact | SizeMatch::Equivalent)
        && composite >= self.config.exact_composite_threshold;

      // Strictly-greater comparisons keep the earliest catalog entry on ties.
      if qualifies_exact && exact.as_ref().is_none_or(|best| composite > best.composite) {
        exact = Some(Best { entry, composite, components });
      }

      if fallback.as_ref().is_none_or(|best| composite > best.composite) {
        fallback = Some(Best { entry, composite, components });
      }
    }

    if let Some(best) = exact {
      return best.into_result(row.source_row_id, MatchKind::Exact);
    }

    match fallback {
      Some(best) if best.composite >= self.config.similarity_accept_threshold => best.into_result(row.source_row_id, MatchKind::Similarity),
      _ => MatchResult::none(row.source_row_id),
    }
  }

  /// Match a whole batch across worker threads. Rows are independent, the
  /// output is re-sorted because downstream writers expect sheet order back.
  pub fn match_rows(&self, rows: Vec<InputRow>) -> Vec<MatchResult<'e>> {
    let mut results = rows.into_par_iter().map(|row| self.match_row(&row)).collect::<Vec<_>>();

    results.sort_unstable_by_key(|result| result.source_row_id);

    results
  }
}

impl<'e> Best<'e> {
  fn into_result(self, source_row_id: usize, kind: MatchKind) -> MatchResult<'e> {
    MatchResult {
      source_row_id,
      matched_entry: Some(self.entry),
      kind,
      composite_score: self.composite,
      component_scores: self.components,
    }
  }
}
