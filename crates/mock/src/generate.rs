//! Seeded-random product generation.

use rand::Rng;

use crate::catalog::{CATEGORIES, N_TEMPLATES, SERVICES, product_name};
use crate::error::MockError;
use crate::row::{CategoryRow, ProductRow, ServiceRow};

/// Configuration for mock product generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockConfig {
    min_per_combo: u32,
    max_per_combo: u32,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            min_per_combo: 1,
            max_per_combo: 3,
        }
    }
}

impl MockConfig {
    /// Sets the per-combination product count range (inclusive).
    pub fn with_per_combo(mut self, min: u32, max: u32) -> Self {
        self.min_per_combo = min;
        self.max_per_combo = max;
        self
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::InvalidPerCombo`] unless `1 <= min <= max`.
    fn validate(&self) -> Result<(), MockError> {
        if self.min_per_combo == 0 || self.min_per_combo > self.max_per_combo {
            return Err(MockError::InvalidPerCombo {
                min: self.min_per_combo,
                max: self.max_per_combo,
            });
        }
        Ok(())
    }
}

/// Returns the fixed category master rows.
pub fn category_rows() -> Vec<CategoryRow> {
    CATEGORIES
        .iter()
        .map(|&(category_id, category_name)| CategoryRow {
            category_id,
            category_name: category_name.to_string(),
        })
        .collect()
}

/// Returns the fixed service master rows.
pub fn service_rows() -> Vec<ServiceRow> {
    SERVICES
        .iter()
        .map(|&(service_id, service_name)| ServiceRow {
            service_id,
            service_name: service_name.to_string(),
        })
        .collect()
}

/// Generates mock product rows over the category x service cross product.
///
/// For each combination (categories outer, services inner, catalog order)
/// a count is drawn from `[min_per_combo, max_per_combo]` and that many
/// templated products are emitted. `product_id` is assigned sequentially
/// from 1 in emission order, so ids are dense. Output depends only on the
/// RNG state: a seeded RNG gives identical rows across runs.
///
/// # Errors
///
/// Returns [`MockError::InvalidPerCombo`] if the configured count range
/// is invalid.
pub fn product_rows<R: Rng>(config: &MockConfig, rng: &mut R) -> Result<Vec<ProductRow>, MockError> {
    config.validate()?;

    let mut rows = Vec::new();
    let mut product_id: i64 = 1;

    for (category_id, category_name) in CATEGORIES {
        for (service_id, service_name) in SERVICES {
            let n_products = rng.random_range(config.min_per_combo..=config.max_per_combo);
            for _ in 0..n_products {
                let template = rng.random_range(0..N_TEMPLATES);
                rows.push(ProductRow {
                    product_id,
                    product_name: product_name(template, category_name, service_name),
                    category_id,
                    category_name: category_name.to_string(),
                    service_id,
                    service_name: service_name.to_string(),
                });
                product_id += 1;
            }
        }
    }

    Ok(rows)
}
