//! Conversion request value.

use crate::error::ConversionError;

pub(crate) const MISSING_INPUT: &str = "Missing one or more mandatory input parameters";

/// A request to convert `amount` from `source_currency` to `target_currency`.
///
/// Transient; built at the API boundary and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub source_currency: String,
    pub target_currency: String,
    pub amount: Option<f64>,
}

impl ConversionRequest {
    pub fn new(
        source_currency: impl Into<String>,
        target_currency: impl Into<String>,
        amount: impl Into<Option<f64>>,
    ) -> Self {
        Self {
            source_currency: source_currency.into(),
            target_currency: target_currency.into(),
            amount: amount.into(),
        }
    }

    /// Checks that both codes are non-blank and the amount is a number.
    ///
    /// Returns the amount so callers don't unwrap it again.
    pub fn ensure_complete(&self) -> Result<f64, ConversionError> {
        if self.source_currency.trim().is_empty() || self.target_currency.trim().is_empty() {
            return Err(ConversionError::InvalidInput(MISSING_INPUT.into()));
        }
        match self.amount {
            Some(amount) if !amount.is_nan() => Ok(amount),
            _ => Err(ConversionError::InvalidInput(MISSING_INPUT.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_request() {
        let req = ConversionRequest::new("USD", "GBP", 110.0);
        assert_eq!(req.ensure_complete().unwrap(), 110.0);
    }

    #[test]
    fn test_negative_amount_is_allowed() {
        let req = ConversionRequest::new("USD", "GBP", -5.5);
        assert_eq!(req.ensure_complete().unwrap(), -5.5);
    }

    #[test]
    fn test_blank_codes_rejected() {
        for (source, target) in [("", "USD"), ("USD", "   "), (" ", "")] {
            let result = ConversionRequest::new(source, target, 1.0).ensure_complete();
            assert!(matches!(result, Err(ConversionError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_missing_or_nan_amount_rejected() {
        let missing = ConversionRequest::new("USD", "GBP", None::<f64>).ensure_complete();
        assert!(matches!(missing, Err(ConversionError::InvalidInput(_))));

        let nan = ConversionRequest::new("USD", "GBP", f64::NAN).ensure_complete();
        assert!(matches!(nan, Err(ConversionError::InvalidInput(_))));
    }
}
