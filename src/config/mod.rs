//! Membership plan configuration injected into the core.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;
use crate::errors::FamilyError;

/// Describes the membership product being shared: who sells it, what the
/// whole family pays upfront, and how long the term runs.
///
/// Every field has a default so a roster file may override any subset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MembershipPlan {
    #[serde(default = "MembershipPlan::default_provider")]
    pub provider: String,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default = "MembershipPlan::default_price")]
    pub price: f64,
    #[serde(default = "MembershipPlan::default_duration_days")]
    pub duration_days: i64,
}

impl Default for MembershipPlan {
    fn default() -> Self {
        Self {
            provider: Self::default_provider(),
            currency: CurrencyCode::default(),
            price: Self::default_price(),
            duration_days: Self::default_duration_days(),
        }
    }
}

impl MembershipPlan {
    pub fn new(
        provider: impl Into<String>,
        currency: CurrencyCode,
        price: f64,
        duration_days: i64,
    ) -> Self {
        Self {
            provider: provider.into(),
            currency,
            price,
            duration_days,
        }
    }

    /// Rejects plans the partitioner could not price.
    pub fn validate(&self) -> Result<(), FamilyError> {
        if self.provider.trim().is_empty() {
            return Err(FamilyError::InvalidPlan("provider must be named".into()));
        }
        if self.currency.as_str().is_empty() {
            return Err(FamilyError::InvalidPlan(
                "currency label must not be empty".into(),
            ));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(FamilyError::InvalidPlan(format!(
                "price must be positive, got {}",
                self.price
            )));
        }
        if self.duration_days <= 0 {
            return Err(FamilyError::InvalidPlan(format!(
                "duration must be at least one day, got {}",
                self.duration_days
            )));
        }
        Ok(())
    }

    /// First day no longer covered by a term starting at `term_start`.
    pub fn term_end(&self, term_start: NaiveDate) -> NaiveDate {
        term_start + Duration::days(self.duration_days)
    }

    fn default_provider() -> String {
        "Nintendo".into()
    }

    fn default_price() -> f64 {
        350.0
    }

    fn default_duration_days() -> i64 {
        365
    }
}
