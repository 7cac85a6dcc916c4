use ahash::{HashMap, HashMapExt};

use crate::{matching::normalize, model::CatalogEntry};

/// Catalog entries bucketed by exact normalized brand key. Brand is the
/// cheapest, highest-precision filter, so it narrows the candidate set
/// before any expensive scoring. Read-only after construction.
pub struct BrandIndex {
  buckets: HashMap<String, Vec<CatalogEntry>>,
  len: usize,
  skipped: usize,
}

impl BrandIndex {
  /// Build the index in one pass over the catalog. Malformed entries are
  /// skipped and counted, never fatal.
  pub fn build<I>(catalog: I) -> BrandIndex
  where
    I: IntoIterator<Item = CatalogEntry>,
  {
    let mut buckets: HashMap<String, Vec<CatalogEntry>> = HashMap::new();
    let mut len = 0;
    let mut skipped = 0;

    for entry in catalog {
      if let Err(err) = entry.validate() {
        tracing::warn!(brand = %entry.brand, product = %entry.product_name, "skipping catalog entry: {err}");
        skipped += 1;

        continue;
      }

      buckets.entry(normalize::brand_key(&entry.brand)).or_default().push(entry);
      len += 1;
    }

    tracing::debug!(entries = len, brands = buckets.len(), skipped = skipped, "brand index built");

    BrandIndex { buckets, len, skipped }
  }

  /// Candidates for an exact normalized brand key, in catalog insertion
  /// order. Unknown brands yield an empty slice, there is no fuzzy brand
  /// matching.
  pub fn lookup(&self, brand_key: &str) -> &[CatalogEntry] {
    self.buckets.get(brand_key).map(Vec::as_slice).unwrap_or_default()
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn brands(&self) -> usize {
    self.buckets.len()
  }

  /// Number of catalog entries dropped at build for missing required fields.
  pub fn skipped(&self) -> usize {
    self.skipped
  }
}
