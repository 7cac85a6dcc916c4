use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// A single reference record from the brand catalog. Immutable once loaded,
/// owned by the brand index for the duration of a run.
#[derive(Builder, Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CatalogEntry {
  #[builder(into)]
  pub brand: String,
  #[builder(into)]
  pub product_name: String,
  #[builder(into, default)]
  #[serde(default)]
  pub size: String,
  #[builder(into, default)]
  #[serde(default)]
  pub color: String,
  /// Remaining spreadsheet columns, carried through untouched in sheet order.
  #[builder(default)]
  #[serde(default)]
  pub attributes: Vec<(String, String)>,
}

impl CatalogEntry {
  pub(crate) fn validate(&self) -> Result<(), MatchError> {
    if self.brand.trim().is_empty() {
      return Err(MatchError::DataError("brand"));
    }

    if self.product_name.trim().is_empty() {
      return Err(MatchError::DataError("product name"));
    }

    Ok(())
  }
}

/// One uploaded spreadsheet row. Consumed once by the matcher.
#[derive(Builder, Clone, Debug, Deserialize, Serialize)]
pub struct InputRow {
  pub source_row_id: usize,
  #[builder(into, default)]
  #[serde(default)]
  pub brand: String,
  #[builder(into, default)]
  #[serde(default)]
  pub product_name: String,
  #[builder(into, default)]
  #[serde(default)]
  pub size: String,
  #[builder(into, default)]
  #[serde(default)]
  pub color: String,
  #[builder(default)]
  #[serde(default)]
  pub raw_fields: Vec<(String, String)>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
  Exact,
  Similarity,
  None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ComponentScores {
  pub product_name: f64,
  pub color: f64,
  pub size: f64,
}

/// Outcome for a single input row. The matched entry is borrowed from the
/// brand index, never owned by the result.
#[derive(Clone, Debug, Serialize)]
pub struct MatchResult<'e> {
  pub source_row_id: usize,
  pub matched_entry: Option<&'e CatalogEntry>,
  pub kind: MatchKind,
  pub composite_score: f64,
  pub component_scores: ComponentScores,
}

impl<'e> MatchResult<'e> {
  pub(crate) fn none(source_row_id: usize) -> MatchResult<'e> {
    MatchResult {
      source_row_id,
      matched_entry: None,
      kind: MatchKind::None,
      composite_score: 0.0,
      component_scores: ComponentScores::default(),
    }
  }
}
