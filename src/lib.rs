mod config;
mod error;
mod index;
mod matching;
mod model;
mod report;

use crate::{
  config::MatchConfig,
  error::MatchError,
  index::BrandIndex,
  matching::{Matcher, normalize::SharedCache},
  model::InputRow,
  report::{MatchReport, aggregate},
};

/// Match a whole uploaded batch against a catalog index: validate the
/// configuration up front, match rows in parallel, aggregate the
/// partitions. The only fatal condition is an invalid configuration,
/// individual bad rows or catalog entries degrade gracefully.
pub fn run<'e>(index: &'e BrandIndex, rows: Vec<InputRow>, config: &MatchConfig) -> Result<MatchReport<'e>, MatchError> {
  config.validate()?;

  let cache = SharedCache::default();
  let matcher = Matcher::new(index, config, &cache);

  let mut report = aggregate(matcher.match_rows(rows));
  report.skipped_entries = index.skipped();

  Ok(report)
}

pub mod prelude {
  pub use crate::{
    config::MatchConfig,
    error::MatchError,
    index::BrandIndex,
    matching::{
      Matcher,
      comparers::similarity,
      normalize::{Cache, NoCache, Normalizer, SharedCache},
      sizes::{SizeMatch, size_match},
    },
    model::{CatalogEntry, ComponentScores, InputRow, MatchKind, MatchResult},
    report::{MatchReport, MatchStats, aggregate},
    run,
  };
}
