//! Swap form state — app-owned, crate-provided update logic.

use super::{convert, Conversion, RateTable};
use crate::error::PairValidationError;
use crate::shared::CurrencyCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two linked amount fields of a swap form.
///
/// The app owns instances of this type and stores whatever the update methods
/// return. The field the user just edited is authoritative; the other one is
/// re-derived from it, and left alone when the conversion is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountPair {
    pub from_amount: Option<Decimal>,
    pub from_currency: Option<CurrencyCode>,
    pub to_amount: Option<Decimal>,
    pub to_currency: Option<CurrencyCode>,
}

impl Default for AmountPair {
    /// USD → ETH with both amounts empty.
    fn default() -> Self {
        Self::new("USD", "ETH")
    }
}

impl AmountPair {
    pub fn new(
        from_currency: impl Into<CurrencyCode>,
        to_currency: impl Into<CurrencyCode>,
    ) -> Self {
        Self {
            from_amount: None,
            from_currency: Some(from_currency.into()),
            to_amount: None,
            to_currency: Some(to_currency.into()),
        }
    }

    fn from_code(&self) -> Option<&str> {
        self.from_currency.as_ref().map(CurrencyCode::as_str)
    }

    fn to_code(&self) -> Option<&str> {
        self.to_currency.as_ref().map(CurrencyCode::as_str)
    }

    /// `from_amount` expressed in `to_currency`.
    pub fn forward(&self, table: &RateTable) -> Conversion {
        convert(self.from_amount, self.from_code(), self.to_code(), table)
    }

    /// `to_amount` expressed in `from_currency`.
    pub fn backward(&self, table: &RateTable) -> Conversion {
        convert(self.to_amount, self.to_code(), self.from_code(), table)
    }

    /// The user typed into the "from" field.
    pub fn with_from_amount(mut self, amount: Option<Decimal>, table: &RateTable) -> Self {
        self.from_amount = amount;
        self.to_amount = self.forward(table).or_keep(self.to_amount);
        self
    }

    /// The user typed into the "to" field.
    pub fn with_to_amount(mut self, amount: Option<Decimal>, table: &RateTable) -> Self {
        self.to_amount = amount;
        self.from_amount = self.backward(table).or_keep(self.from_amount);
        self
    }

    /// The user picked a new "from" currency; the "to" amount follows.
    pub fn with_from_currency(
        mut self,
        currency: impl Into<CurrencyCode>,
        table: &RateTable,
    ) -> Self {
        self.from_currency = Some(currency.into());
        self.to_amount = self.forward(table).or_keep(self.to_amount);
        self
    }

    /// The user picked a new "to" currency; the "from" amount follows.
    pub fn with_to_currency(
        mut self,
        currency: impl Into<CurrencyCode>,
        table: &RateTable,
    ) -> Self {
        self.to_currency = Some(currency.into());
        self.from_amount = self.backward(table).or_keep(self.from_amount);
        self
    }

    /// Exchange the currencies, keep `from_amount`, and re-derive `to_amount`
    /// under the new direction.
    pub fn swap(self, table: &RateTable) -> Self {
        let swapped = Self {
            from_amount: self.from_amount,
            from_currency: self.to_currency,
            to_amount: self.to_amount,
            to_currency: self.from_currency,
        };
        let to_amount = swapped.forward(table).or_keep(swapped.to_amount);
        Self {
            to_amount,
            ..swapped
        }
    }

    /// Submit-time checks: both currencies chosen and distinct, both amounts set.
    pub fn validate(&self) -> Result<(), PairValidationError> {
        let from = self
            .from_currency
            .as_ref()
            .filter(|c| !c.is_empty())
            .ok_or(PairValidationError::MissingFromCurrency)?;
        let to = self
            .to_currency
            .as_ref()
            .filter(|c| !c.is_empty())
            .ok_or(PairValidationError::MissingToCurrency)?;
        if from == to {
            return Err(PairValidationError::SameCurrency);
        }
        if self.from_amount.is_none() {
            return Err(PairValidationError::MissingFromAmount);
        }
        if self.to_amount.is_none() {
            return Err(PairValidationError::MissingToAmount);
        }
        Ok(())
    }
}
