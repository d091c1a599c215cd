//! Cross-module tests for the market crate
//! End-to-end construction scenarios and property checks.

#[cfg(test)]
mod scenario_tests {
    use crate::{Asset, AssetType, CommonError, Currency, Exchange, Money};
    use kernel::ErrorKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_qqq_listed_on_nasdaq_from_text_type() {
        let nasdaq = Exchange::new("NASDAQ", "Nasdaq", "America/New_York").unwrap();
        let asset = Asset::builder()
            .symbol("QQQ")
            .name("Invesco QQQ")
            .exchange(nasdaq)
            .asset_type_code("etf")
            .build()
            .unwrap();

        assert_eq!(asset.asset_type(), AssetType::Etf);
        assert_eq!(asset.exchange().timezone(), "America/New_York");
    }

    #[test]
    fn test_domain_errors_lift_into_common_error() {
        fn list(symbol: &str) -> Result<Asset, CommonError> {
            let exchange = Exchange::new("XNAS", "Nasdaq", "America/New_York")?;
            let asset = Asset::new(symbol, "Test", exchange, AssetType::Stock)?;
            Ok(asset)
        }

        assert!(list("MSFT").is_ok());
        let err = list("  ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
        assert_eq!(err.message(), "Asset symbol must be non-empty");
    }

    #[test]
    fn test_money_ledger_sum() {
        let entries = ["10.00", "5.50", "-2.25"];
        let total = entries
            .iter()
            .map(|amount| Money::parse(amount, Currency::Usd))
            .try_fold(Money::zero(Currency::Usd), |acc, entry| acc.try_add(&entry?))
            .unwrap();

        assert_eq!(total, Money::new(dec!(13.25), Currency::Usd));
        assert_eq!(total.to_string(), "13.25 USD");
    }
}

#[cfg(test)]
mod property_tests {
    use crate::{Asset, AssetType, Currency, Exchange, Money};
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn currency() -> impl Strategy<Value = Currency> {
        prop::sample::select(Currency::ALL.to_vec())
    }

    fn amount() -> impl Strategy<Value = Decimal> {
        (any::<i64>(), 0u32..=6).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
    }

    fn non_blank() -> impl Strategy<Value = String> {
        "[A-Za-z0-9/_ ]{0,8}[A-Za-z0-9][A-Za-z0-9/_ ]{0,8}"
    }

    proptest! {
        #[test]
        fn prop_same_currency_add_sub(a in amount(), b in amount(), c in currency()) {
            let lhs = Money::new(a, c);
            let rhs = Money::new(b, c);

            prop_assert_eq!((lhs + rhs).unwrap(), Money::new(a + b, c));
            prop_assert_eq!((lhs - rhs).unwrap(), Money::new(a - b, c));
        }

        #[test]
        fn prop_mismatched_currency_fails(a in amount(), b in amount(), c1 in currency(), c2 in currency()) {
            prop_assume!(c1 != c2);
            let err = (Money::new(a, c1) + Money::new(b, c2)).unwrap_err();
            prop_assert!(err.message().contains("Currency mismatch"));
        }

        #[test]
        fn prop_exchange_accepts_non_blank(id in non_blank(), name in non_blank(), tz in non_blank()) {
            prop_assert!(Exchange::new(id, name, tz).is_ok());
        }

        #[test]
        fn prop_exchange_rejects_blank(blank in "[ \t]{0,4}", field in 0usize..3) {
            let mut fields = ["XNAS".to_string(), "Nasdaq".to_string(), "UTC".to_string()];
            fields[field] = blank;
            let [id, name, tz] = fields;
            prop_assert!(Exchange::new(id, name, tz).is_err());
        }

        #[test]
        fn prop_asset_type_code_any_case(index in 0usize..4, upper in any::<bool>()) {
            let expected = AssetType::ALL[index];
            let code = if upper {
                expected.code().to_uppercase()
            } else {
                expected.code().to_string()
            };
            let exchange = Exchange::new("XNAS", "Nasdaq", "America/New_York").unwrap();
            let asset = Asset::builder()
                .symbol("SYM")
                .name("Name")
                .exchange(exchange)
                .asset_type_code(code)
                .build()
                .unwrap();
            prop_assert_eq!(asset.asset_type(), expected);
        }
    }
}
