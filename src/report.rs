use serde::Serialize;

use crate::model::{MatchKind, MatchResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MatchStats {
  pub total_rows: usize,
  pub exact: usize,
  pub similarity: usize,
  pub unmatched: usize,
  /// Success rates as percentages of the total row count.
  pub exact_rate: f64,
  pub similarity_rate: f64,
  pub match_rate: f64,
}

/// Batch outcome: three disjoint partitions whose union covers every input
/// row, plus summary statistics.
#[derive(Debug, Serialize)]
pub struct MatchReport<'e> {
  pub exact: Vec<MatchResult<'e>>,
  pub similarity: Vec<MatchResult<'e>>,
  pub unmatched: Vec<MatchResult<'e>>,
  pub stats: MatchStats,
  /// Catalog entries dropped at index build, carried here for the batch
  /// summary.
  pub skipped_entries: usize,
}

/// Partition results by kind. Pure: no hidden state, output depends on the
/// input sequence alone.
pub fn aggregate(results: Vec<MatchResult<'_>>) -> MatchReport<'_> {
  let total = results.len();

  let mut exact = Vec::new();
  let mut similarity = Vec::new();
  let mut unmatched = Vec::new();

  for result in results {
    match result.kind {
      MatchKind::Exact => exact.push(result),
      MatchKind::Similarity => similarity.push(result),
      MatchKind::None => unmatched.push(result),
    }
  }

  let percent = |count: usize| if total == 0 { 0.0 } else { count as f64 / total as f64 * 100.0 };

  let stats = MatchStats {
    total_rows: total,
    exact: exact.len(),
    similarity: similarity.len(),
    unmatched: unmatched.len(),
    exact_rate: percent(exact.len()),
    similarity_rate: percent(similarity.len()),
    match_rate: percent(exact.len() + similarity.len()),
  };

  MatchReport {
    exact,
    similarity,
    unmatched,
    stats,
    skipped_entries: 0,
  }
}
