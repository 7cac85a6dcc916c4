use strsim::normalized_levenshtein;

/// Bounded, commutative similarity between two normalized strings.
pub fn similarity(lhs: &str, rhs: &str) -> f64 {
  if lhs == rhs {
    return 1.0;
  }

  if lhs.is_empty() || rhs.is_empty() {
    return 0.0;
  }

  normalized_levenshtein(lhs, rhs)
}

/// Best pairwise similarity across two variant lists.
pub(crate) fn best_similarity(lhs: &[String], rhs: &[String]) -> f64 {
  let mut best = 0.0f64;

  for l in lhs {
    for r in rhs {
      best = best.max(similarity(l, r));

      if best >= 1.0 {
        return 1.0;
      }
    }
  }

  best
}

#[cfg(test)]
mod tests {
  use float_cmp::assert_approx_eq;

  use super::{best_similarity, similarity};

  #[test]
  fn identity_scores_one() {
    for s in ["", "m", "air max 90", "블라우스"] {
      assert_eq!(similarity(s, s), 1.0);
    }
  }

  #[test]
  fn commutative() {
    let pairs = [("air max 90", "air max ninety"), ("hoodie", "hood"), ("black", "white"), ("", "anything")];

    for (lhs, rhs) in pairs {
      assert_eq!(similarity(lhs, rhs), similarity(rhs, lhs));
    }
  }

  #[test]
  fn empty_scores_zero() {
    assert_eq!(similarity("", "air max"), 0.0);
    assert_eq!(similarity("air max", ""), 0.0);
  }

  #[test]
  fn bounded_and_graded() {
    let score = similarity("air max 90", "air max ninety");

    assert!(score > 0.3 && score < 0.85, "got {score}");
    assert_approx_eq!(f64, similarity("blouse", "blouze"), 1.0 - 1.0 / 6.0, epsilon = 1e-9);
  }

  #[test]
  fn best_of_variants() {
    let lhs = vec!["black".to_string()];
    let rhs = vec!["white".to_string(), "black".to_string()];

    assert_eq!(best_similarity(&lhs, &rhs), 1.0);
    assert_eq!(best_similarity(&lhs, &[]), 0.0);
    assert_eq!(best_similarity(&[], &rhs), 0.0);
  }
}
