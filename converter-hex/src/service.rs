//! Conversion Application Service
//!
//! Orchestrates validation, rate lookup and arithmetic through the rate store
//! port. Contains NO infrastructure logic - pure business orchestration.

use converter_types::{
    ConversionError, ConversionRequest, ConversionResponse, ConvertQuery, ExchangeRateStore,
    SupportedCurrencies,
};

/// Application service for currency conversion.
///
/// Generic over `S: ExchangeRateStore` - the adapter is injected at compile time.
/// Each conversion loads its own rate table from the store, so requests never
/// share a table that another request might be rebuilding.
pub struct ConversionService<S: ExchangeRateStore> {
    store: S,
    supported: SupportedCurrencies,
}

impl<S: ExchangeRateStore> ConversionService<S> {
    /// Creates a new conversion service.
    pub fn new(store: S, supported: SupportedCurrencies) -> Self {
        Self { store, supported }
    }

    /// Returns a reference to the underlying rate store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Converts `query.amount` from the source to the target currency.
    ///
    /// Steps run in order and stop at the first failure: shape validation,
    /// allow-list check, rate load and lookup, multiplication.
    pub async fn convert(&self, query: &ConvertQuery) -> Result<ConversionResponse, ConversionError> {
        let source = query.source_currency.as_deref().unwrap_or_default();
        let target = query.target_currency.as_deref().unwrap_or_default();
        let amount = query.amount.as_deref().unwrap_or_default();

        let result = self.try_convert(query).await;
        match &result {
            Ok(resp) => tracing::info!(
                source_currency = source,
                target_currency = target,
                amount,
                converted_amount = %resp.converted_amount,
                "Successful Currency Conversion"
            ),
            Err(ConversionError::UnsupportedCurrency(_)) => tracing::error!(
                source_currency = source,
                target_currency = target,
                amount,
                supported = %self.supported,
                "Invalid currency"
            ),
            Err(e) => tracing::error!(
                source_currency = source,
                target_currency = target,
                amount,
                error = %e,
                "Error in Currency Conversion"
            ),
        }
        result
    }

    async fn try_convert(&self, query: &ConvertQuery) -> Result<ConversionResponse, ConversionError> {
        let req = ConversionRequest::validate(query)?;

        if !self.supported.contains(req.source()) || !self.supported.contains(req.target()) {
            return Err(ConversionError::UnsupportedCurrency(self.supported.clone()));
        }

        tracing::info!(
            source_currency = req.source(),
            target_currency = req.target(),
            amount = %req.amount,
            "Requesting Currency Conversion"
        );

        let rates = self.store.load().await?;
        let exchange_rate = rates.get_rate(req.source(), req.target())?;

        let converted_amount = req
            .amount
            .checked_mul(exchange_rate)
            .ok_or(ConversionError::Overflow)?;

        Ok(ConversionResponse {
            exchange_rate,
            converted_amount,
        })
    }
}
