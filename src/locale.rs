//! Culture-specific number formatting data.
//!
//! The presets mirror what desktop platforms report for each culture: symbol
//! placement, separators, and how negative currency amounts are written.

use crate::error::{Error, Result};

/// Where the currency symbol goes for non-negative amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyPositivePattern {
    /// `$n`
    SymbolNumber,
    /// `n$`
    NumberSymbol,
    /// `$ n`
    SymbolSpaceNumber,
    /// `n $`
    NumberSpaceSymbol,
}

/// How a negative currency amount is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyNegativePattern {
    /// `($n)`
    Parenthesized,
    /// `-$n`
    SignSymbolNumber,
    /// `$-n`
    SymbolSignNumber,
    /// `-n$`
    SignNumberSymbol,
    /// `-n $`
    SignNumberSpaceSymbol,
    /// `-$ n`
    SignSymbolSpaceNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentPattern {
    /// `n%`
    NumberSymbol,
    /// `n %`
    NumberSpaceSymbol,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    pub name: &'static str,
    pub currency_symbol: String,
    pub currency_decimal_digits: u8,
    pub currency_positive_pattern: CurrencyPositivePattern,
    pub currency_negative_pattern: CurrencyNegativePattern,
    pub decimal_separator: String,
    pub group_separator: String,
    /// Digits per group, counted from the decimal point.
    pub group_size: usize,
    pub negative_sign: String,
    pub percent_symbol: String,
    pub percent_pattern: PercentPattern,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::en_us()
    }
}

impl NumberFormat {
    pub fn invariant() -> Self {
        Self {
            name: "invariant",
            currency_symbol: "\u{00A4}".to_string(),
            currency_decimal_digits: 2,
            currency_positive_pattern: CurrencyPositivePattern::SymbolNumber,
            currency_negative_pattern: CurrencyNegativePattern::Parenthesized,
            decimal_separator: ".".to_string(),
            group_separator: ",".to_string(),
            group_size: 3,
            negative_sign: "-".to_string(),
            percent_symbol: "%".to_string(),
            percent_pattern: PercentPattern::NumberSpaceSymbol,
        }
    }

    pub fn en_us() -> Self {
        Self {
            name: "en-US",
            currency_symbol: "$".to_string(),
            percent_pattern: PercentPattern::NumberSymbol,
            currency_negative_pattern: CurrencyNegativePattern::SignSymbolNumber,
            ..Self::invariant()
        }
    }

    pub fn en_gb() -> Self {
        Self {
            name: "en-GB",
            currency_symbol: "\u{00A3}".to_string(),
            percent_pattern: PercentPattern::NumberSymbol,
            currency_negative_pattern: CurrencyNegativePattern::SignSymbolNumber,
            ..Self::invariant()
        }
    }

    pub fn de_de() -> Self {
        Self {
            name: "de-DE",
            currency_symbol: "\u{20AC}".to_string(),
            currency_positive_pattern: CurrencyPositivePattern::NumberSpaceSymbol,
            currency_negative_pattern: CurrencyNegativePattern::SignNumberSpaceSymbol,
            decimal_separator: ",".to_string(),
            group_separator: ".".to_string(),
            ..Self::invariant()
        }
    }

    pub fn fr_fr() -> Self {
        Self {
            name: "fr-FR",
            group_separator: "\u{202F}".to_string(),
            ..Self::de_de()
        }
    }

    /// Yen amounts carry no minor unit, so `C` defaults to zero decimals.
    pub fn ja_jp() -> Self {
        Self {
            name: "ja-JP",
            currency_symbol: "\u{FFE5}".to_string(),
            currency_decimal_digits: 0,
            currency_negative_pattern: CurrencyNegativePattern::SignSymbolNumber,
            percent_pattern: PercentPattern::NumberSymbol,
            ..Self::invariant()
        }
    }

    /// Look up a preset by culture name. Matching ignores ASCII case and
    /// accepts `_` in place of `-`; the empty string is the invariant culture.
    pub fn for_locale(id: &str) -> Result<Self> {
        let normalized = id.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "" | "invariant" => Ok(Self::invariant()),
            "en-us" | "en" => Ok(Self::en_us()),
            "en-gb" => Ok(Self::en_gb()),
            "de-de" | "de" => Ok(Self::de_de()),
            "fr-fr" | "fr" => Ok(Self::fr_fr()),
            "ja-jp" | "ja" => Ok(Self::ja_jp()),
            _ => Err(Error::UnknownLocale(id.to_string())),
        }
    }

    pub(crate) fn currency_positive(&self, number: &str) -> String {
        let sym = &self.currency_symbol;
        match self.currency_positive_pattern {
            CurrencyPositivePattern::SymbolNumber => format!("{sym}{number}"),
            CurrencyPositivePattern::NumberSymbol => format!("{number}{sym}"),
            CurrencyPositivePattern::SymbolSpaceNumber => format!("{sym} {number}"),
            CurrencyPositivePattern::NumberSpaceSymbol => format!("{number} {sym}"),
        }
    }

    pub(crate) fn currency_negative(&self, number: &str) -> String {
        let sym = &self.currency_symbol;
        let neg = &self.negative_sign;
        match self.currency_negative_pattern {
            CurrencyNegativePattern::Parenthesized => format!("({sym}{number})"),
            CurrencyNegativePattern::SignSymbolNumber => format!("{neg}{sym}{number}"),
            CurrencyNegativePattern::SymbolSignNumber => format!("{sym}{neg}{number}"),
            CurrencyNegativePattern::SignNumberSymbol => format!("{neg}{number}{sym}"),
            CurrencyNegativePattern::SignNumberSpaceSymbol => format!("{neg}{number} {sym}"),
            CurrencyNegativePattern::SignSymbolSpaceNumber => format!("{neg}{sym} {number}"),
        }
    }

    pub(crate) fn percent(&self, number: &str) -> String {
        match self.percent_pattern {
            PercentPattern::NumberSymbol => format!("{number}{}", self.percent_symbol),
            PercentPattern::NumberSpaceSymbol => format!("{number} {}", self.percent_symbol),
        }
    }
}
