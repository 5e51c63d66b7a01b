//! # demeter-mock
//!
//! Mock master data for the warehouse: fixed category and service
//! catalogs, and seeded-random product generation over their cross
//! product. With a fixed RNG seed the generated rows are identical
//! across runs.
//!
//! ## Quick Start
//!
//! ```ignore
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use demeter_mock::{MockConfig, category_rows, product_rows, service_rows};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let products = product_rows(&MockConfig::default(), &mut rng).unwrap();
//!
//! // 5 categories x 4 services, 1..=3 products per combination.
//! assert!(products.len() >= 20 && products.len() <= 60);
//! assert_eq!(category_rows().len(), 5);
//! assert_eq!(service_rows().len(), 4);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `catalog` | Fixed category/service catalogs and name templates |
//! | `row` | Master table row models |
//! | `generate` | Seeded-random product generation |
//! | `error` | Error types |

mod catalog;
mod error;
mod generate;
mod row;

pub use error::MockError;
pub use generate::{MockConfig, category_rows, product_rows, service_rows};
pub use row::{CategoryRow, ProductRow, ServiceRow};
