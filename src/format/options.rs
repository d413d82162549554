use crate::catalog;
use crate::locale::DEFAULT_LOCALE;
use crate::units::UnitTable;

pub const DEFAULT_MAX_SIGNIFICANT_DIGITS: usize = 3;
pub const DEFAULT_MIN_SIGNIFICANT_DIGITS: usize = 1;

/// Options for [`format`](crate::format::format)
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    /// Breakpoints to pick from (default: the general `numbers` table)
    pub unit_table: UnitTable,
    /// Default 3
    pub max_significant_digits: usize,
    /// Default 1; clamped to `max_significant_digits` when larger
    pub min_significant_digits: usize,
    /// BCP-47 tag, default "en-US"
    pub locale: String,
    /// Default false
    pub use_grouping: bool,
    /// Placed between number and suffix, omitted for empty suffixes. Default ""
    pub unit_separator: String,
    /// Returned for missing or NaN input. Default ""
    pub empty_value: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            unit_table: catalog::NUMBERS.clone(),
            max_significant_digits: DEFAULT_MAX_SIGNIFICANT_DIGITS,
            min_significant_digits: DEFAULT_MIN_SIGNIFICANT_DIGITS,
            locale: DEFAULT_LOCALE.to_string(),
            use_grouping: false,
            unit_separator: String::new(),
            empty_value: String::new(),
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, table: impl Into<UnitTable>) -> Self {
        self.unit_table = table.into();
        self
    }

    pub fn with_max_significant_digits(mut self, digits: usize) -> Self {
        self.max_significant_digits = digits;
        self
    }

    pub fn with_min_significant_digits(mut self, digits: usize) -> Self {
        self.min_significant_digits = digits;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = use_grouping;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.unit_separator = separator.into();
        self
    }

    pub fn with_empty_value(mut self, empty_value: impl Into<String>) -> Self {
        self.empty_value = empty_value.into();
        self
    }
}
