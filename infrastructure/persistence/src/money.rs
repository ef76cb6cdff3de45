use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive};

use business::domain::errors::RepositoryError;

/// Prices are stored as NUMERIC(12, 2).
const PRICE_SCALE: i64 = 2;

pub(crate) fn price_to_decimal(price: f64) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_f64(price)
        .map(|d| d.round(PRICE_SCALE))
        .ok_or(RepositoryError::Persistence)
}

pub(crate) fn decimal_to_price(decimal: &BigDecimal) -> f64 {
    decimal.to_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_round_price_to_cents() {
        let decimal = price_to_decimal(2.499).unwrap();

        assert_eq!(decimal, BigDecimal::from_str("2.50").unwrap());
    }

    #[test]
    fn should_reject_non_finite_price() {
        assert!(matches!(
            price_to_decimal(f64::INFINITY).unwrap_err(),
            RepositoryError::Persistence
        ));
    }

    #[test]
    fn should_read_stored_numeric_as_float() {
        let stored = BigDecimal::from_str("18.50").unwrap();

        assert_eq!(decimal_to_price(&stored), 18.5);
    }
}
