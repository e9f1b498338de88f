use serde::{Deserialize, Serialize};

/// Display label attached to monetary amounts, e.g. `kr` or `USD`.
///
/// The label is presentation only; no conversion or minor-unit logic hangs
/// off it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("kr")
    }
}

/// Formats an amount with two decimals and the currency label as a suffix.
pub fn format_amount(amount: f64, code: &CurrencyCode) -> String {
    format!("{:.2} {}", amount, code.as_str())
}
