//! Integration test: generated mock masters hold referential integrity.

use std::collections::{BTreeMap, BTreeSet};

use rand::SeedableRng;
use rand::rngs::StdRng;

use demeter_mock::{MockConfig, category_rows, product_rows, service_rows};

#[test]
fn every_combination_is_covered() {
    let mut rng = StdRng::seed_from_u64(1);
    let rows = product_rows(&MockConfig::default(), &mut rng).unwrap();

    let combos: BTreeSet<(i64, i64)> = rows
        .iter()
        .map(|r| (r.category_id, r.service_id))
        .collect();
    assert_eq!(combos.len(), 5 * 4);
}

#[test]
fn per_combination_counts_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(2);
    let rows = product_rows(&MockConfig::default(), &mut rng).unwrap();

    let mut counts: BTreeMap<(i64, i64), usize> = BTreeMap::new();
    for row in &rows {
        *counts.entry((row.category_id, row.service_id)).or_insert(0) += 1;
    }
    for ((category_id, service_id), count) in counts {
        assert!(
            (1..=3).contains(&count),
            "combination ({category_id}, {service_id}) has {count} products"
        );
    }
}

#[test]
fn product_rows_reference_real_masters() {
    let categories: BTreeMap<i64, String> = category_rows()
        .into_iter()
        .map(|c| (c.category_id, c.category_name))
        .collect();
    let services: BTreeMap<i64, String> = service_rows()
        .into_iter()
        .map(|s| (s.service_id, s.service_name))
        .collect();

    let mut rng = StdRng::seed_from_u64(3);
    let rows = product_rows(&MockConfig::default(), &mut rng).unwrap();

    for row in &rows {
        assert_eq!(categories.get(&row.category_id), Some(&row.category_name));
        assert_eq!(services.get(&row.service_id), Some(&row.service_name));
        assert!(row.product_name.contains(&row.service_name));
    }
}

#[test]
fn product_names_come_from_the_fixed_templates() {
    let mut rng = StdRng::seed_from_u64(4);
    let rows = product_rows(&MockConfig::default(), &mut rng).unwrap();

    for row in &rows {
        let expected = [
            format!("{} - {}", row.category_name, row.service_name),
            format!("{}ソリューション - {}", row.category_name, row.service_name),
            format!("{}パッケージ - {}", row.category_name, row.service_name),
        ];
        assert!(
            expected.contains(&row.product_name),
            "unexpected product name: {}",
            row.product_name
        );
    }
}

#[test]
fn repeated_runs_with_one_seed_are_identical() {
    let config = MockConfig::default();
    let a = product_rows(&config, &mut StdRng::seed_from_u64(10)).unwrap();
    let b = product_rows(&config, &mut StdRng::seed_from_u64(10)).unwrap();
    assert_eq!(a, b);
}
