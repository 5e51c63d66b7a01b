//! Fixed category/service catalogs and product name templates.
//!
//! The catalogs mirror the product management system's master tables;
//! ids are stable and 1-based.

/// Product categories, `(category_id, category_name)`.
pub(crate) const CATEGORIES: [(i64, &str); 5] = [
    (1, "クラウドサービス"),
    (2, "セキュリティ"),
    (3, "データ分析"),
    (4, "開発ツール"),
    (5, "インフラストラクチャ"),
];

/// Service plans, `(service_id, service_name)`.
pub(crate) const SERVICES: [(i64, &str); 4] = [
    (1, "基本プラン"),
    (2, "スタンダードプラン"),
    (3, "プレミアムプラン"),
    (4, "エンタープライズプラン"),
];

/// Number of product name templates.
pub(crate) const N_TEMPLATES: usize = 3;

/// Renders a product name from one of the fixed templates.
pub(crate) fn product_name(template: usize, category: &str, service: &str) -> String {
    match template {
        0 => format!("{category} - {service}"),
        1 => format!("{category}ソリューション - {service}"),
        _ => format!("{category}パッケージ - {service}"),
    }
}
