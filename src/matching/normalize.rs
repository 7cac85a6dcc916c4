use std::sync::{LazyLock, Mutex};

use ahash::{HashMap, HashSet};
use itertools::Itertools;
use regex::Regex;

static PARENTHESES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^()]*\)").unwrap());
static BRACKETS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\[\]]*\]").unwrap());
static BRACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^{}]*\}").unwrap());
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Run-scoped memoization of raw to normalized strings. Implementations may
/// drop entries or lose a race on insert, a miss only costs a recomputation
/// since normalization is pure.
///
/// Entries are keyed by the raw string alone, so a cache instance must only
/// ever back normalizers sharing one strip-keyword set. Use a fresh cache per
/// configuration, as [`crate::run`] does.
pub trait Cache: Send + Sync {
  fn get(&self, raw: &str) -> Option<String>;
  fn put(&self, raw: &str, normalized: String);
}

/// Thread-safe cache usable across parallel matching workers.
#[derive(Default)]
pub struct SharedCache {
  entries: Mutex<HashMap<String, String>>,
}

impl Cache for SharedCache {
  fn get(&self, raw: &str) -> Option<String> {
    self.entries.lock().ok()?.get(raw).cloned()
  }

  fn put(&self, raw: &str, normalized: String) {
    if let Ok(mut entries) = self.entries.lock() {
      entries.entry(raw.to_string()).or_insert(normalized);
    }
  }
}

/// Null cache for callers that prefer recomputation over memoization.
pub struct NoCache;

impl Cache for NoCache {
  fn get(&self, _raw: &str) -> Option<String> {
    None
  }

  fn put(&self, _raw: &str, _normalized: String) {}
}

pub struct Normalizer<'c, C: Cache> {
  strip: HashSet<String>,
  cache: &'c C,
}

impl<'c, C: Cache> Normalizer<'c, C> {
  pub fn new(strip_keywords: &HashSet<String>, cache: &'c C) -> Normalizer<'c, C> {
    Normalizer {
      strip: strip_keywords.iter().map(|keyword| keyword.to_lowercase()).collect(),
      cache,
    }
  }

  /// Canonicalize a free-text field: lower-case, trim, drop parenthesized
  /// annotations, turn punctuation into spaces, collapse whitespace and
  /// remove configured keywords as whole tokens. Deterministic, idempotent
  /// and total: empty input normalizes to an empty string.
  pub fn normalize(&self, raw: &str) -> String {
    let raw = raw.trim();

    if raw.is_empty() {
      return String::new();
    }

    if let Some(hit) = self.cache.get(raw) {
      return hit;
    }

    let normalized = self.compute(raw);

    self.cache.put(raw, normalized.clone());

    normalized
  }

  fn compute(&self, raw: &str) -> String {
    let mut text = raw.to_lowercase();

    for pattern in [&PARENTHESES, &BRACKETS, &BRACES] {
      // Innermost-out so nested groups like (s(3~4)~xl(7~8)) disappear whole.
      loop {
        let stripped = pattern.replace_all(&text, "");

        if stripped == text {
          break;
        }

        text = stripped.into_owned();
      }
    }

    let text = PUNCTUATION.replace_all(&text, " ");
    let cleaned = text.split_whitespace().filter(|token| !self.strip.contains(*token)).join(" ");

    // Aggressive stripping can eat a short name whole, keep the original
    // signal in that case.
    if cleaned.chars().count() < 2 {
      return raw.to_lowercase();
    }

    cleaned
  }
}

/// Brand keys are compared by exact equality only, both sides of every
/// comparison go through this same canonicalization.
pub(crate) fn brand_key(raw: &str) -> String {
  raw.to_lowercase().split_whitespace().join(" ")
}

/// Option cells often pack several values into one field ("black/white",
/// "s, m, l"). Expand them so scoring can take the best pairing.
pub(crate) fn variants(field: &str) -> Vec<&str> {
  field.split([',', '/', '|']).map(str::trim).filter(|variant| !variant.is_empty()).collect()
}
