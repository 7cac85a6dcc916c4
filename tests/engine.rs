use brandmatch::prelude::*;

fn catalog() -> BrandIndex {
  BrandIndex::build(vec![
    CatalogEntry::builder()
      .brand("Nike")
      .product_name("Air Max 90")
      .size("10")
      .color("Black")
      .attributes(vec![("wholesale".to_string(), "18000".to_string())])
      .build(),
    CatalogEntry::builder().brand("Nike").product_name("Air Force 1 Low").size("9").color("White").build(),
    CatalogEntry::builder().brand("Acme").product_name("Basic Hoodie").size("S/M/L").color("Black/Gray").build(),
    CatalogEntry::builder().brand("Acme Kids").product_name("Lovely Socks").size("JS|JM").color("Pink").build(),
    // Malformed: must be skipped and counted, not fatal.
    CatalogEntry::builder().brand("").product_name("Orphan Product").build(),
  ])
}

#[test]
fn end_to_end_batch() {
  let index = catalog();
  let config = MatchConfig::default();

  let rows = vec![
    InputRow::builder().source_row_id(1).brand("NIKE").product_name("Air Max 90").size("10").color("Black").build(),
    InputRow::builder().source_row_id(2).brand("Nike").product_name("Air Max Ninety").size("10").color("Black").build(),
    InputRow::builder().source_row_id(3).brand("Acme").product_name("Basic Hoodie").size("M").color("Gray").build(),
    InputRow::builder().source_row_id(4).brand("Acme Kids").product_name("Lovely Socks").size("S").color("Pink").build(),
    InputRow::builder().source_row_id(5).brand("Unknown Brand").product_name("Anything").build(),
  ];

  let report = run(&index, rows, &config).unwrap();

  assert_eq!(report.stats.total_rows, 5);
  assert_eq!(report.skipped_entries, 1);

  // Row 1: perfect match. Row 3: multi-valued option cells still line up.
  assert_eq!(report.exact.iter().map(|r| r.source_row_id).collect::<Vec<_>>(), vec![1, 3]);
  // Row 2: fuzzy product name falls back to the similarity pass.
  assert_eq!(report.similarity.iter().map(|r| r.source_row_id).collect::<Vec<_>>(), vec![2]);
  // Row 4: adult size against a junior-only entry is blocked. Row 5: brand
  // not in the catalog.
  assert_eq!(report.unmatched.iter().map(|r| r.source_row_id).collect::<Vec<_>>(), vec![4, 5]);

  assert_eq!(report.exact[0].composite_score, 1.0);
  assert_eq!(report.stats.exact, 2);
  assert_eq!(report.stats.similarity, 1);
  assert_eq!(report.stats.unmatched, 2);
  assert!((report.stats.match_rate - 60.0).abs() < 1e-9);

  for result in report.unmatched {
    assert_eq!(result.kind, MatchKind::None);
    assert_eq!(result.matched_entry, None);
  }
}

#[test]
fn every_row_yields_exactly_one_result() {
  let index = catalog();
  let config = MatchConfig::default();

  let rows = (0..200)
    .map(|id| {
      InputRow::builder()
        .source_row_id(id)
        .brand(if id % 3 == 0 { "Nike" } else { "Acme" })
        .product_name(if id % 2 == 0 { "Air Max 90" } else { "Basic Hoodie" })
        .size("10")
        .color("Black")
        .build()
    })
    .collect::<Vec<_>>();

  let report = run(&index, rows, &config).unwrap();

  assert_eq!(report.exact.len() + report.similarity.len() + report.unmatched.len(), 200);

  // Parallel dispatch must hand results back in source row order.
  let mut ids = report
    .exact
    .iter()
    .chain(report.similarity.iter())
    .chain(report.unmatched.iter())
    .map(|result| result.source_row_id)
    .collect::<Vec<_>>();

  ids.sort_unstable();

  assert_eq!(ids, (0..200).collect::<Vec<_>>());
}

#[test]
fn invalid_configuration_fails_fast() {
  let index = catalog();
  let config = MatchConfig {
    exact_product_threshold: 7.5,
    ..MatchConfig::default()
  };

  let rows = vec![InputRow::builder().source_row_id(1).brand("Nike").product_name("Air Max 90").build()];

  assert!(matches!(run(&index, rows, &config), Err(MatchError::ConfigError(_))));
}

#[test]
fn inverted_thresholds_fail_fast() {
  let index = catalog();

  // A color-heavy weighting with an exact bar below the similarity bar
  // would produce EXACT results under the acceptance threshold, so the
  // configuration is rejected before any row is scored.
  let config = MatchConfig {
    exact_composite_threshold: 0.1,
    similarity_accept_threshold: 0.5,
    color_weight: 1.0,
    ..MatchConfig::default()
  };

  let rows = vec![InputRow::builder().source_row_id(1).brand("Nike").product_name("Air Max 90").size("10").color("Neon Green").build()];

  assert!(matches!(run(&index, rows, &config), Err(MatchError::ConfigError(_))));
}

#[test]
fn exact_results_always_clear_the_similarity_threshold() {
  let index = catalog();
  let config = MatchConfig::default();

  let rows = (0..50)
    .map(|id| {
      InputRow::builder()
        .source_row_id(id)
        .brand("Nike")
        .product_name(if id % 2 == 0 { "Air Max 90" } else { "Air Force 1 Low" })
        .size(if id % 2 == 0 { "10" } else { "9" })
        .color(if id % 4 < 2 { "Black" } else { "White" })
        .build()
    })
    .collect::<Vec<_>>();

  let report = run(&index, rows, &config).unwrap();

  for result in report.exact.iter().chain(report.similarity.iter()) {
    assert!(result.composite_score >= config.similarity_accept_threshold);
    assert!((0.0..=1.0).contains(&result.composite_score));
    assert!(result.matched_entry.is_some());
  }
}
