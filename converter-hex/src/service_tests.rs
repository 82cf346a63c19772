//! ConversionService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use converter_types::{
        AppError, ConversionError, ConvertQuery, ExchangeRateStore, RateError, RateTable,
        SupportedCurrencies,
    };

    use crate::ConversionService;

    /// What the mock store should do on the next load.
    pub enum MockBehavior {
        Rates(HashMap<String, Decimal>),
        MissingDirectory,
        MissingFile,
        Malformed,
    }

    /// In-memory rate store that counts loads.
    pub struct MockStore {
        behavior: Mutex<MockBehavior>,
        loads: AtomicUsize,
    }

    impl MockStore {
        pub fn with_rates(rates: &[(&str, Decimal)]) -> Self {
            Self::new(MockBehavior::Rates(
                rates.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            ))
        }

        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior: Mutex::new(behavior),
                loads: AtomicUsize::new(0),
            }
        }

        pub fn loads(&self) -> usize {
            self.loads.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ExchangeRateStore for MockStore {
        async fn load(&self) -> Result<RateTable, RateError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            match &*self.behavior.lock().unwrap() {
                MockBehavior::Rates(rates) => Ok(RateTable::new(rates.clone())),
                MockBehavior::MissingDirectory => {
                    Err(RateError::DirectoryMissing(PathBuf::from("ExchangeRateFile")))
                }
                MockBehavior::MissingFile => Err(RateError::FileMissing(PathBuf::from(
                    "ExchangeRateFile/exchangeRates.json",
                ))),
                MockBehavior::Malformed => {
                    Err(RateError::Deserialization("expected value at line 1".into()))
                }
            }
        }
    }

    fn supported() -> SupportedCurrencies {
        "USD,INR,EUR".parse().unwrap()
    }

    fn service(store: MockStore) -> ConversionService<MockStore> {
        ConversionService::new(store, supported())
    }

    fn default_service() -> ConversionService<MockStore> {
        service(MockStore::with_rates(&[
            ("USD_TO_EUR", dec!(0.85)),
            ("EUR_TO_INR", dec!(88)),
        ]))
    }

    #[tokio::test]
    async fn test_convert_usd_to_eur() {
        let service = default_service();

        let resp = service
            .convert(&ConvertQuery::new("USD", "EUR", "10.0"))
            .await
            .unwrap();

        assert_eq!(resp.exchange_rate, dec!(0.85));
        assert_eq!(resp.converted_amount, dec!(8.5));
    }

    #[tokio::test]
    async fn test_convert_eur_to_inr() {
        let service = default_service();

        let resp = service
            .convert(&ConvertQuery::new("EUR", "INR", "20"))
            .await
            .unwrap();

        assert_eq!(resp.exchange_rate, dec!(88));
        assert_eq!(resp.converted_amount, dec!(1760));
    }

    #[tokio::test]
    async fn test_convert_is_case_insensitive() {
        let service = default_service();

        let resp = service
            .convert(&ConvertQuery::new("usd", "eur", "2"))
            .await
            .unwrap();

        assert_eq!(resp.converted_amount, dec!(1.70));
    }

    #[tokio::test]
    async fn test_unsupported_currency_lists_allow_list() {
        let service = default_service();

        let err = service
            .convert(&ConvertQuery::new("USD", "ABC", "10.0"))
            .await
            .unwrap_err();

        assert!(matches!(err, ConversionError::UnsupportedCurrency(_)));
        assert_eq!(
            err.to_string(),
            "Invalid currency. Supported currency types are USD, INR, EUR"
        );
        assert_eq!(service.store().loads(), 0);
    }

    #[tokio::test]
    async fn test_negative_amount_rejected_before_lookup() {
        let service = default_service();

        let err = service
            .convert(&ConvertQuery::new("USD", "EUR", "-10.0"))
            .await
            .unwrap_err();

        assert!(matches!(err, ConversionError::Validation(_)));
        assert_eq!(service.store().loads(), 0);
    }

    #[tokio::test]
    async fn test_amount_precision_rejected_before_lookup() {
        let service = default_service();

        let err = service
            .convert(&ConvertQuery::new("USD", "EUR", "10.1237878768"))
            .await
            .unwrap_err();

        assert!(matches!(err, ConversionError::Validation(_)));
        assert_eq!(service.store().loads(), 0);
    }

    #[tokio::test]
    async fn test_missing_pair_is_not_found() {
        let service = default_service();

        let err = service
            .convert(&ConvertQuery::new("INR", "USD", "5"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid currency pair INR , USD");
        assert!(matches!(AppError::from(err), AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_no_inverse_pair_derivation() {
        let service = default_service();

        let err = service
            .convert(&ConvertQuery::new("EUR", "USD", "1"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ConversionError::Rate(RateError::RateNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_missing_rates_data_is_not_found() {
        for behavior in [MockBehavior::MissingDirectory, MockBehavior::MissingFile] {
            let service = service(MockStore::new(behavior));

            let err = service
                .convert(&ConvertQuery::new("USD", "EUR", "1"))
                .await
                .unwrap_err();

            assert!(matches!(AppError::from(err), AppError::NotFound(_)));
        }
    }

    #[tokio::test]
    async fn test_malformed_rates_is_bad_request() {
        let service = service(MockStore::new(MockBehavior::Malformed));

        let err = service
            .convert(&ConvertQuery::new("USD", "EUR", "1"))
            .await
            .unwrap_err();

        match AppError::from(err) {
            AppError::BadRequest(msg) => assert!(msg.contains("expected value")),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_overflow_is_bad_request() {
        let service = service(MockStore::with_rates(&[("USD_TO_EUR", Decimal::MAX)]));

        let err = service
            .convert(&ConvertQuery::new("USD", "EUR", "10"))
            .await
            .unwrap_err();

        assert!(matches!(err, ConversionError::Overflow));
    }

    #[tokio::test]
    async fn test_repeated_requests_are_identical() {
        let service = default_service();
        let query = ConvertQuery::new("USD", "EUR", "12.3456");

        let first = service.convert(&query).await.unwrap();
        let second = service.convert(&query).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.converted_amount, dec!(12.3456) * dec!(0.85));
        assert_eq!(service.store().loads(), 2);
    }

    #[tokio::test]
    async fn test_each_request_loads_fresh_rates() {
        let service = default_service();
        let query = ConvertQuery::new("USD", "EUR", "10");

        let before = service.convert(&query).await.unwrap();
        *service.store().behavior.lock().unwrap() =
            MockBehavior::Rates(HashMap::from([("USD_TO_EUR".to_string(), dec!(0.9))]));
        let after = service.convert(&query).await.unwrap();

        assert_eq!(before.exchange_rate, dec!(0.85));
        assert_eq!(after.exchange_rate, dec!(0.9));
    }
}
