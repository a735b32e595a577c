//! Price formatting.
//!
//! Prices travel as `f64` and are only ever formatted for display. The bare
//! `"$"` currency is formatted literally so the markup is identical on every
//! host; every other currency goes through a `CurrencyFormatter`, and a
//! formatter error degrades to `{currency}{amount:.2}`.

use std::fmt;

use crate::error::CatalogError;

/// Currency marker that skips locale formatting.
pub const DOLLAR: &str = "$";

/// Currencies with a known en-US display symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
    CHF,
    CNY,
    INR,
    MXN,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::CHF => "CHF",
            Currency::CNY => "CNY",
            Currency::INR => "INR",
            Currency::MXN => "MXN",
        }
    }

    /// Prefix used by en-US currency formatting, separator included.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
            Currency::CHF => "CHF\u{a0}",
            Currency::CNY => "CN\u{00a5}",
            Currency::INR => "\u{20b9}",
            Currency::MXN => "MX$",
        }
    }

    /// Parse a currency code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            "CHF" => Some(Currency::CHF),
            "CNY" => Some(Currency::CNY),
            "INR" => Some(Currency::INR),
            "MXN" => Some(Currency::MXN),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Locale-aware currency formatting.
pub trait CurrencyFormatter {
    /// Format `amount` in `currency`, or fail if the currency is not usable.
    fn format(&self, amount: f64, currency: &str) -> Result<String, CatalogError>;
}

/// en-US currency formatting with two fraction digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnUsFormatter;

impl CurrencyFormatter for EnUsFormatter {
    fn format(&self, amount: f64, currency: &str) -> Result<String, CatalogError> {
        if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(CatalogError::InvalidCurrencyCode(currency.to_string()));
        }
        if !amount.is_finite() {
            return Err(CatalogError::InvalidCurrencyCode(currency.to_string()));
        }

        let prefix = match Currency::from_code(currency) {
            Some(known) => known.symbol().to_string(),
            None => format!("{}\u{a0}", currency.to_ascii_uppercase()),
        };
        let sign = if amount < 0.0 { "-" } else { "" };

        Ok(format!("{}{}{}", sign, prefix, group_thousands(amount.abs())))
    }
}

/// Format a price for display using the en-US formatter.
pub fn format_price(amount: f64, currency: &str) -> String {
    format_price_with(&EnUsFormatter, amount, currency)
}

/// Format a price for display with a custom formatter.
///
/// Never fails: formatter errors fall back to the raw currency string.
pub fn format_price_with(formatter: &dyn CurrencyFormatter, amount: f64, currency: &str) -> String {
    if currency == DOLLAR {
        return format!("${:.2}", amount);
    }

    formatter
        .format(amount, currency)
        .unwrap_or_else(|_| format!("{}{:.2}", currency, amount))
}

/// `1234.5` -> `"1,234.50"`. Expects a finite, non-negative amount.
fn group_thousands(amount: f64) -> String {
    let fixed = format!("{:.2}", amount);
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}.{}", grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysFails;

    impl CurrencyFormatter for AlwaysFails {
        fn format(&self, _amount: f64, currency: &str) -> Result<String, CatalogError> {
            Err(CatalogError::InvalidCurrencyCode(currency.to_string()))
        }
    }

    #[test]
    fn test_dollar_is_literal() {
        assert_eq!(format_price(129.99, "$"), "$129.99");
        assert_eq!(format_price(199.0, "$"), "$199.00");
        assert_eq!(format_price(1234.5, "$"), "$1234.50");
        assert_eq!(format_price(9999.99, "$"), "$9999.99");
        assert_eq!(format_price(0.0, "$"), "$0.00");
        assert_eq!(format_price_with(&AlwaysFails, 5.0, "$"), "$5.00");
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(format_price(1234.5, "EUR"), "\u{20ac}1,234.50");
        assert_eq!(format_price(1234.5, "eur"), "\u{20ac}1,234.50");
        assert_eq!(format_price(18.5, "GBP"), "\u{00a3}18.50");
        assert_eq!(format_price(1.0, "CHF"), "CHF\u{a0}1.00");
        assert_eq!(format_price(999.0, "CAD"), "CA$999.00");
        assert_eq!(format_price(1_000_000.0, "USD"), "$1,000,000.00");
    }

    #[test]
    fn test_unknown_well_formed_code() {
        assert_eq!(format_price(12.0, "XYZ"), "XYZ\u{a0}12.00");
    }

    #[test]
    fn test_invalid_code_falls_back() {
        assert_eq!(format_price(12.0, "\u{20ac}"), "\u{20ac}12.00");
        assert_eq!(format_price(3.5, "US$"), "US$3.50");
        assert_eq!(format_price(3.5, ""), "3.50");
        assert_eq!(format_price_with(&AlwaysFails, 1234.5, "EUR"), "EUR1234.50");
    }

    #[test]
    fn test_formatter_reports_errors() {
        let err = EnUsFormatter.format(1.0, "EURO").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCurrencyCode(code) if code == "EURO"));
        assert!(EnUsFormatter.format(f64::NAN, "EUR").is_err());
    }

    #[test]
    fn test_negative_amount_sign_precedes_symbol() {
        assert_eq!(format_price(-5.0, "EUR"), "-\u{20ac}5.00");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(group_thousands(0.0), "0.00");
        assert_eq!(group_thousands(999.999), "1,000.00");
        assert_eq!(group_thousands(123456.789), "123,456.79");
    }
}
