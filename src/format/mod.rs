// Value formatting: pick a breakpoint, scale, render the number, append suffix

pub mod number;
pub mod options;

#[cfg(test)]
mod tests;

pub use number::NumberFormat;
pub use options::FormatOptions;

use crate::units::{normalize, NormalizedTable, Unit, UnitError};

/// Format `value` with the options' unit table.
///
/// `None` and NaN give `options.empty_value`; infinities give "Infinity" or
/// "-Infinity". Fails only when the unit table is empty or has a threshold
/// that is not positive.
///
/// ```
/// use unitfmt::{format, FormatOptions, catalog};
///
/// let options = FormatOptions::new().with_table(catalog::BYTES.clone());
/// assert_eq!(format(8_388_608.0, &options).unwrap(), "8.39MB");
/// ```
pub fn format(value: impl Into<Option<f64>>, options: &FormatOptions) -> Result<String, UnitError> {
    format_with_table(value, &options.unit_table, options)
}

/// Like [`format`], but with `table` in place of `options.unit_table`
pub fn format_with_table(
    value: impl Into<Option<f64>>,
    table: &[Unit],
    options: &FormatOptions,
) -> Result<String, UnitError> {
    let value = match finite_or_text(value.into(), options) {
        Ok(value) => value,
        Err(text) => return Ok(text),
    };

    let table = normalize(table)?;
    let number = number_format(options);
    Ok(render(value, &table, &number, &options.unit_separator))
}

/// Validates its table once and then formats any number of values
#[derive(Debug, Clone)]
pub struct UnitFormatter {
    table: NormalizedTable,
    number: NumberFormat,
    options: FormatOptions,
}

impl UnitFormatter {
    pub fn new(options: FormatOptions) -> Result<Self, UnitError> {
        let table = normalize(&options.unit_table)?;
        let number = number_format(&options);
        Ok(Self {
            table,
            number,
            options,
        })
    }

    pub fn format(&self, value: impl Into<Option<f64>>) -> String {
        match finite_or_text(value.into(), &self.options) {
            Ok(value) => render(value, &self.table, &self.number, &self.options.unit_separator),
            Err(text) => text,
        }
    }

    pub fn table(&self) -> &NormalizedTable {
        &self.table
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }
}

fn number_format(options: &FormatOptions) -> NumberFormat {
    NumberFormat::new(
        &options.locale,
        options.min_significant_digits,
        options.max_significant_digits,
        options.use_grouping,
    )
}

/// The finite value to format, or the final text for missing/non-finite input
fn finite_or_text(value: Option<f64>, options: &FormatOptions) -> Result<f64, String> {
    match value {
        None => Err(options.empty_value.clone()),
        Some(v) if v.is_nan() => Err(options.empty_value.clone()),
        Some(v) if v == f64::INFINITY => Err("Infinity".to_string()),
        Some(v) if v == f64::NEG_INFINITY => Err("-Infinity".to_string()),
        Some(v) => Ok(v),
    }
}

fn render(value: f64, table: &NormalizedTable, number: &NumberFormat, separator: &str) -> String {
    let unit = table.select(value.abs());
    // Thresholds are validated > 0, dividing the signed value keeps the sign
    let rendered = number.format(value / unit.threshold);

    if unit.suffix.is_empty() {
        rendered
    } else {
        format!("{}{}{}", rendered, separator, unit.suffix)
    }
}
