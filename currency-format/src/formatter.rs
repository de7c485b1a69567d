//! Locale-aware currency formatting.

use crate::CurrencyInfo;
use crate::locale::{Grouping, Locale, SymbolPosition};

/// Formats plain amounts as currency strings for one locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrencyFormatter {
    locale: Locale,
}

impl CurrencyFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Formats `amount` in the currency `code`.
    ///
    /// The amount is rounded half to even to the currency's fraction digits.
    /// Codes missing from the table are written with the code itself as the
    /// symbol.
    pub fn format(&self, amount: f64, code: &str) -> String {
        let symbol = CurrencyInfo::lookup(code).map_or(code, |info| info.symbol);
        let digits = CurrencyInfo::fraction_digits_for(code);

        let (negative, number) = if amount.is_finite() {
            let digits_text = format!("{:.*}", usize::from(digits), amount.abs());
            let nonzero = digits_text.bytes().any(|b| b.is_ascii_digit() && b != b'0');
            (amount < 0.0 && nonzero, self.localize_number(&digits_text))
        } else if amount.is_nan() {
            (false, "NaN".to_string())
        } else {
            (amount < 0.0, "∞".to_string())
        };

        let sign = if negative { "-" } else { "" };
        match self.locale.symbol_position() {
            SymbolPosition::Prefix => format!("{sign}{symbol}{number}"),
            SymbolPosition::Suffix => format!("{sign}{number}\u{a0}{symbol}"),
        }
    }

    /// Rewrites a plain `1234.50` rendering with the locale's separators.
    fn localize_number(&self, plain: &str) -> String {
        let (int_part, frac_part) = match plain.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (plain, None),
        };

        let mut out = group_digits(
            int_part,
            self.locale.grouping(),
            self.locale.group_separator(),
        );
        if let Some(frac) = frac_part {
            out.push(self.locale.decimal_separator());
            out.push_str(frac);
        }
        out
    }
}

fn group_digits(digits: &str, grouping: Grouping, separator: char) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut groups: Vec<String> = Vec::new();

    let mut end = chars.len();
    let mut size = 3;
    while end > 0 {
        let start = end.saturating_sub(size);
        groups.push(chars[start..end].iter().collect());
        end = start;
        if grouping == Grouping::Indian {
            size = 2;
        }
    }

    groups.reverse();
    let mut sep = [0u8; 4];
    groups.join(separator.encode_utf8(&mut sep))
}
