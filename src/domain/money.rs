use thiserror::Error;

/// Money is represented as integer cents to avoid floating-point precision issues.
/// For USD, 1 unit = 100 cents, so $50.00 = 5000 cents.
pub type Cents = i64;

/// Format cents as a plain decimal string.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Parse a decimal string into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000
///
/// Sub-cent precision is refused unless the extra digits are all zero.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let (units_str, decimal_str) = match digits.split_once('.') {
        Some((units, decimal)) => (units, decimal),
        None => (digits, ""),
    };

    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    if !units_str.bytes().all(|b| b.is_ascii_digit())
        || !decimal_str.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str.parse().map_err(|_| ParseCentsError::OutOfRange)?
    };

    let (cent_digits, sub_cent_digits) = decimal_str.split_at(decimal_str.len().min(2));
    if sub_cent_digits.bytes().any(|b| b != b'0') {
        return Err(ParseCentsError::TooPrecise);
    }

    // Pad the fractional part to exactly two digits
    let decimal_cents: i64 = match cent_digits.len() {
        0 => 0,
        1 => cent_digits.parse::<i64>().map_err(|_| ParseCentsError::InvalidFormat)? * 10,
        _ => cent_digits
            .parse()
            .map_err(|_| ParseCentsError::InvalidFormat)?,
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(decimal_cents))
        .ok_or(ParseCentsError::OutOfRange)?;
    Ok(if negative { -cents } else { cents })
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCentsError {
    #[error("invalid money format")]
    InvalidFormat,

    #[error("amount is too large")]
    OutOfRange,

    #[error("amount has more than two decimal places")]
    TooPrecise,
}

/// Renders amounts the way a US locale does: symbol prefix, comma grouping,
/// two decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// Example: 123456 -> "$1,234.56", -500 -> "-$5.00"
    pub fn format(&self, cents: Cents) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        let abs_cents = cents.unsigned_abs();
        format!(
            "{}{}{}.{:02}",
            sign,
            self.symbol,
            group_thousands(abs_cents / 100),
            abs_cents % 100
        )
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new("$")
    }
}

fn group_thousands(units: u64) -> String {
    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
