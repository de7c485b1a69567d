//! Currency Metadata and Locale-Aware Formatting
//!
//! Presentation-layer helpers for turning a converted amount into a
//! currency string. Conversion itself lives elsewhere; this crate only
//! knows how a currency is written down.
//!
//! Currencies are declared with the `define_currencies!` macro, which
//! generates the lookup table used by [`CurrencyInfo::lookup`].
//!
//! # Adding a New Currency
//! Simply add a line to the `define_currencies!` macro invocation:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     KRW => ("₩", 0),
//! }
//! ```
//!
//! # Example
//! ```
//! use currency_format::{CurrencyFormatter, Locale};
//!
//! let formatter = CurrencyFormatter::new(Locale::EnUs);
//! assert_eq!(formatter.format(1234.5, "USD"), "$1,234.50");
//!
//! let formatter = CurrencyFormatter::new(Locale::DeDe);
//! assert_eq!(formatter.format(1234.5, "EUR"), "1.234,50\u{a0}€");
//! ```

mod formatter;
mod locale;

pub use formatter::CurrencyFormatter;
pub use locale::{Grouping, Locale, LocaleError, SymbolPosition};

/// How a currency is written: symbol and number of minor-unit digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub symbol: &'static str,
    pub fraction_digits: u8,
}

impl CurrencyInfo {
    /// Looks up a known currency by its exact ISO code.
    pub fn lookup(code: &str) -> Option<CurrencyInfo> {
        CURRENCIES.iter().find(|info| info.code == code).copied()
    }

    /// Number of fraction digits for `code`, 2 when the code is unknown.
    pub fn fraction_digits_for(code: &str) -> u8 {
        Self::lookup(code).map_or(2, |info| info.fraction_digits)
    }

    /// All currencies in the table.
    pub fn all() -> &'static [CurrencyInfo] {
        CURRENCIES
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines the currency table
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define the static currency table.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     CODE => ("SYMBOL", fraction_digits),
/// }
/// ```
macro_rules! define_currencies {
    (
        $(
            $code:ident => ($symbol:literal, $digits:expr)
        ),* $(,)?
    ) => {
        static CURRENCIES: &[CurrencyInfo] = &[
            $(
                CurrencyInfo {
                    code: stringify!($code),
                    symbol: $symbol,
                    fraction_digits: $digits,
                },
            )*
        ];
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS - Add new currencies here!
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    EUR => ("€", 2),
    USD => ("$", 2),
    GBP => ("£", 2),
    INR => ("₹", 2),
    JPY => ("¥", 0),
    CNY => ("CN¥", 2),
    KRW => ("₩", 0),
    CHF => ("CHF", 2),
    CAD => ("CA$", 2),
    AUD => ("A$", 2),
    NZD => ("NZ$", 2),
    HKD => ("HK$", 2),
    SGD => ("SGD", 2),
    SEK => ("SEK", 2),
    NOK => ("NOK", 2),
    DKK => ("DKK", 2),
    PLN => ("PLN", 2),
    CZK => ("CZK", 2),
    HUF => ("HUF", 2),
    RON => ("RON", 2),
    BGN => ("BGN", 2),
    TRY => ("TRY", 2),
    RUB => ("RUB", 2),
    UAH => ("UAH", 2),
    ILS => ("₪", 2),
    AED => ("AED", 2),
    SAR => ("SAR", 2),
    ZAR => ("ZAR", 2),
    BRL => ("R$", 2),
    MXN => ("MX$", 2),
    ARS => ("ARS", 2),
    CLP => ("CLP", 0),
    THB => ("THB", 2),
    IDR => ("IDR", 2),
    MYR => ("MYR", 2),
    PHP => ("₱", 2),
    VND => ("₫", 0),
    ISK => ("ISK", 0),
    XOF => ("XOF", 0),
    XAF => ("XAF", 0),
    XPF => ("XPF", 0),
    UGX => ("UGX", 0),
    PYG => ("₲", 0),
    RWF => ("RWF", 0),
    BIF => ("BIF", 0),
    DJF => ("DJF", 0),
    GNF => ("GNF", 0),
    KMF => ("KMF", 0),
    VUV => ("VUV", 0),
    KWD => ("KWD", 3),
    BHD => ("BHD", 3),
    JOD => ("JOD", 3),
    OMR => ("OMR", 3),
    TND => ("TND", 3),
}
