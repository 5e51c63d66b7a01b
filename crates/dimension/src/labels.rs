//! Monday-first weekday label table.

/// The built-in label table, Monday through Sunday.
///
/// These are the single-character Japanese weekday names the downstream
/// dbt project consumes; any other locale can be substituted through
/// configuration without touching row generation.
const DEFAULT_LABELS: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];

/// A table of exactly 7 weekday labels, indexed Monday = 0 … Sunday = 6.
///
/// Arity is enforced by the type: construction requires a `[String; 7]`,
/// so a malformed table cannot exist at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayLabels([String; 7]);

impl WeekdayLabels {
    /// Creates a label table from 7 Monday-first entries.
    pub fn new(labels: [String; 7]) -> Self {
        Self(labels)
    }

    /// Returns the label for a weekday index (Monday = 0 … Sunday = 6).
    ///
    /// # Panics
    ///
    /// Panics if `weekday_index > 6`. Indices produced by
    /// `CivilDate::weekday_index` are always in range.
    pub fn label(&self, weekday_index: usize) -> &str {
        &self.0[weekday_index]
    }
}

impl Default for WeekdayLabels {
    fn default() -> Self {
        Self(DEFAULT_LABELS.map(String::from))
    }
}
