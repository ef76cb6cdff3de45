use super::model::Sale;

/// Aggregated figures over a set of sales.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    pub sales_count: u64,
    pub units_sold: i64,
    /// Sum of `amount * price`, rounded to cents.
    pub revenue: f64,
}

pub fn summarize(sales: &[Sale]) -> SalesSummary {
    let units_sold = sales.iter().map(|s| i64::from(s.amount)).sum();
    let revenue: f64 = sales.iter().map(Sale::total).sum();

    SalesSummary {
        sales_count: sales.len() as u64,
        units_sold,
        revenue: (revenue * 100.0).round() / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use chrono::Utc;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn sale(amount: i32, price: f64) -> Sale {
        Sale::from_repository(
            Uuid::new_v4(),
            UserId::generate(),
            None,
            "Item".to_string(),
            None,
            amount,
            price,
            Utc::now(),
        )
    }

    #[test]
    fn should_return_zeroes_when_no_sales() {
        let summary = summarize(&[]);

        assert_eq!(
            summary,
            SalesSummary {
                sales_count: 0,
                units_sold: 0,
                revenue: 0.0,
            }
        );
    }

    #[test]
    fn should_sum_units_and_revenue() {
        let summary = summarize(&[sale(2, 1.5), sale(3, 10.0), sale(1, 0.1)]);

        assert_eq!(summary.sales_count, 3);
        assert_eq!(summary.units_sold, 6);
        assert_eq!(summary.revenue, 33.1);
    }

    proptest! {
        #[test]
        fn should_count_every_unit_sold(amounts in proptest::collection::vec(1i32..1000, 0..50)) {
            let sales: Vec<Sale> = amounts.iter().map(|a| sale(*a, 2.0)).collect();
            let summary = summarize(&sales);

            let expected: i64 = amounts.iter().map(|a| i64::from(*a)).sum();
            prop_assert_eq!(summary.units_sold, expected);
            prop_assert_eq!(summary.sales_count, amounts.len() as u64);
            prop_assert_eq!(summary.revenue, (expected * 2) as f64);
        }
    }
}
