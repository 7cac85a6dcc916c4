use ahash::HashSet;

/// Outcome of comparing two size strings.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SizeMatch {
  /// Normalized size strings are identical.
  Exact,
  /// Sizes fall in the same equivalence class ("m" and "medium").
  Equivalent,
  Mismatch,
  /// Junior/child size paired with an adult one, never acceptable.
  Blocked,
}

impl SizeMatch {
  pub(crate) fn score(self) -> f64 {
    match self {
      SizeMatch::Exact => 1.0,
      SizeMatch::Equivalent => 0.8,
      SizeMatch::Mismatch | SizeMatch::Blocked => 0.0,
    }
  }
}

// Alias spellings as they come out of the normalizer.
const SIZE_CLASSES: &[(&str, &[&str])] = &[
  ("xs", &["xs", "x small", "xsmall", "extra small"]),
  ("s", &["s", "small"]),
  ("m", &["m", "med", "medium"]),
  ("l", &["l", "large"]),
  ("xl", &["xl", "x large", "xlarge", "extra large"]),
  ("xxl", &["xxl", "2xl", "xx large"]),
  ("xxxl", &["xxxl", "3xl", "xxx large"]),
  ("free", &["free", "f", "free size", "one size", "onesize", "os"]),
];

fn size_class(size: &str) -> Option<&'static str> {
  SIZE_CLASSES.iter().find(|(_, aliases)| aliases.contains(&size)).map(|(class, _)| *class)
}

pub(crate) fn is_junior(size: &str, junior_tokens: &HashSet<String>) -> bool {
  size.split_whitespace().any(|token| junior_tokens.contains(token))
}

/// Compare two normalized size strings. Junior blocking dominates: a pairing
/// across the junior/adult divide is rejected however close the text is.
pub fn size_match(lhs: &str, rhs: &str, junior_tokens: &HashSet<String>) -> SizeMatch {
  if lhs.is_empty() || rhs.is_empty() {
    return SizeMatch::Mismatch;
  }

  if is_junior(lhs, junior_tokens) != is_junior(rhs, junior_tokens) {
    return SizeMatch::Blocked;
  }

  if lhs == rhs {
    return SizeMatch::Exact;
  }

  if let (Ok(l), Ok(r)) = (lhs.parse::<i64>(), rhs.parse::<i64>()) {
    return if l.abs_diff(r) <= 5 { SizeMatch::Equivalent } else { SizeMatch::Mismatch };
  }

  match (size_class(lhs), size_class(rhs)) {
    (Some(l), Some(r)) if l == r => SizeMatch::Equivalent,
    _ => SizeMatch::Mismatch,
  }
}

/// Best comparison over size variants. A genuinely listed adult size is
/// honored even when a junior code shares the cell ("m" against "m|jm"
/// matches, "m" against "jm|js" is blocked).
pub(crate) fn size_match_variants(lhs: &[String], rhs: &[String], junior_tokens: &HashSet<String>) -> SizeMatch {
  let mut best = SizeMatch::Mismatch;
  let mut blocked = false;

  for l in lhs {
    for r in rhs {
      match size_match(l, r, junior_tokens) {
        SizeMatch::Exact => return SizeMatch::Exact,
        SizeMatch::Equivalent => best = SizeMatch::Equivalent,
        SizeMatch::Blocked => blocked = true,
        SizeMatch::Mismatch => {}
      }
    }
  }

  if best == SizeMatch::Mismatch && blocked {
    return SizeMatch::Blocked;
  }

  best
}
