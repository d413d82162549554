use crate::locale::{self, Grouping, NumberSymbols};

/// Upper bound accepted for significant digits (same range as ECMA-402)
pub const MAX_SIGNIFICANT_DIGITS_LIMIT: usize = 21;

/// Locale-aware decimal formatter with significant-digit rounding
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    symbols: NumberSymbols,
    min_significant_digits: usize,
    max_significant_digits: usize,
    use_grouping: bool,
}

/// `digits[0].digits[1..] * 10^exponent`
#[derive(Debug, PartialEq)]
struct Rounded {
    digits: Vec<u8>,
    exponent: i32,
}

impl NumberFormat {
    /// Both digit counts are clamped into `1..=21`; a minimum above the
    /// maximum is lowered to the maximum.
    pub fn new(
        locale: &str,
        min_significant_digits: usize,
        max_significant_digits: usize,
        use_grouping: bool,
    ) -> Self {
        let max = max_significant_digits.clamp(1, MAX_SIGNIFICANT_DIGITS_LIMIT);
        let min = min_significant_digits.clamp(1, max);
        Self {
            symbols: locale::symbols(locale),
            min_significant_digits: min,
            max_significant_digits: max,
            use_grouping,
        }
    }

    pub fn max_significant_digits(&self) -> usize {
        self.max_significant_digits
    }

    pub fn min_significant_digits(&self) -> usize {
        self.min_significant_digits
    }

    /// Render a finite value. Negative values (and negative zero) get a
    /// leading "-".
    pub fn format(&self, value: f64) -> String {
        let mut rounded = round_significant(value.abs(), self.max_significant_digits);

        while rounded.digits.len() > self.min_significant_digits && rounded.digits.last() == Some(&0)
        {
            rounded.digits.pop();
        }

        let (integer, fraction) = split_digits(&rounded);
        let integer = if self.use_grouping {
            group_digits(&integer, self.symbols.group, self.symbols.grouping)
        } else {
            integer
        };

        let mut out = String::with_capacity(integer.len() + fraction.len() + 2);
        if value.is_sign_negative() {
            out.push('-');
        }
        out.push_str(&integer);
        if !fraction.is_empty() {
            out.push_str(self.symbols.decimal);
            out.push_str(&fraction);
        }
        out
    }
}

/// Round a non-negative finite value to `precision` significant digits,
/// ties away from zero.
///
/// Rounds the shortest decimal that round-trips to `magnitude`, so 1.005
/// rounds to 1.01 like the literal it was written as.
fn round_significant(magnitude: f64, precision: usize) -> Rounded {
    if magnitude == 0.0 {
        return Rounded {
            digits: vec![0; precision],
            exponent: 0,
        };
    }

    let expanded = format!("{:e}", magnitude);
    let (mantissa, exponent) = expanded.split_once('e').unwrap_or((expanded.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);
    let all: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    let mut digits: Vec<u8> = (0..precision)
        .map(|i| all.get(i).copied().unwrap_or(0))
        .collect();
    if all.get(precision).copied().unwrap_or(0) >= 5 {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            // 9.99 -> 10.0
            digits.insert(0, 1);
            digits.truncate(precision);
            exponent += 1;
        }
    }

    Rounded { digits, exponent }
}

/// Integer and fraction digit strings; integer positions past the kept
/// digits are zero filled
fn split_digits(rounded: &Rounded) -> (String, String) {
    let as_char = |d: &u8| char::from(b'0' + d);

    if rounded.exponent < 0 {
        let leading = "0".repeat((-rounded.exponent - 1) as usize);
        let fraction: String = rounded.digits.iter().map(as_char).collect();
        return ("0".to_string(), leading + &fraction);
    }

    let integer_len = rounded.exponent as usize + 1;
    let mut integer: String = rounded.digits.iter().take(integer_len).map(as_char).collect();
    while integer.len() < integer_len {
        integer.push('0');
    }
    let fraction: String = rounded.digits.iter().skip(integer_len).map(as_char).collect();
    (integer, fraction)
}

fn group_digits(integer: &str, separator: &str, grouping: Grouping) -> String {
    let secondary = match grouping {
        Grouping::Thousands => 3,
        Grouping::Indian => 2,
    };

    let mut groups = Vec::new();
    let mut end = integer.len();
    let mut size = 3;
    while end > size {
        groups.push(&integer[end - size..end]);
        end -= size;
        size = secondary;
    }
    groups.push(&integer[..end]);
    groups.reverse();
    groups.join(separator)
}
