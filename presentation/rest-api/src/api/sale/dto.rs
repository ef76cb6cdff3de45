use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::sale::model::Sale;
use business::domain::sale::summary::SalesSummary;

#[derive(Debug, Clone, Object)]
pub struct RecordSaleRequest {
    /// Owned product being sold
    pub product_id: Uuid,
    /// Units sold (> 0, at most the product's stock)
    pub amount: i32,
}

#[derive(Debug, Clone, Object)]
pub struct SaleResponse {
    pub id: String,
    /// Absent once the product has been deleted
    #[oai(skip_serializing_if_is_none)]
    pub product_id: Option<String>,
    /// Product name at the time of sale
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub amount: i32,
    /// Unit price at the time of sale
    pub price: f64,
    /// amount * price
    pub total: f64,
    pub sold_at: DateTime<Utc>,
}

impl From<Sale> for SaleResponse {
    fn from(sale: Sale) -> Self {
        let total = sale.total();
        Self {
            id: sale.id.to_string(),
            product_id: sale.product_id.map(|id| id.to_string()),
            name: sale.name,
            description: sale.description,
            amount: sale.amount,
            price: sale.price,
            total,
            sold_at: sale.sold_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SalesSummaryResponse {
    pub sales_count: u64,
    pub units_sold: i64,
    pub revenue: f64,
}

impl From<SalesSummary> for SalesSummaryResponse {
    fn from(summary: SalesSummary) -> Self {
        Self {
            sales_count: summary.sales_count,
            units_sold: summary.units_sold,
            revenue: summary.revenue,
        }
    }
}
