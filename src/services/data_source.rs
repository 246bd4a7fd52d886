//! Read-only report data access
//!
//! The dashboard reads every figure it shows through [`DataSource`], so a
//! real report backend can replace [`SampleData`] without touching view code.

use crate::model::page::Page;
use crate::model::sample::{ChartPoint, MetricCard, OrderRow};
use chrono::NaiveDate;

/// Read-only accessor for dashboard datasets
pub trait DataSource {
    /// Headline metric cards for the overview page
    fn metrics(&self) -> &[MetricCard];

    /// Reimbursements by dispute type over the last 30 days
    fn bar_series(&self) -> &[ChartPoint];

    /// Share of reimbursements by dispute type this year
    fn pie_series(&self) -> &[ChartPoint];

    /// Orders with payment received
    fn orders(&self) -> &[OrderRow];
}

/// Built-in sample figures
pub struct SampleData {
    metrics: Vec<MetricCard>,
    bar_series: Vec<ChartPoint>,
    pie_series: Vec<ChartPoint>,
    orders: Vec<OrderRow>,
}

impl Default for SampleData {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleData {
    pub fn new() -> Self {
        let order_date = NaiveDate::from_ymd_opt(2024, 7, 18).unwrap_or(NaiveDate::MIN);

        Self {
            metrics: vec![
                MetricCard::new("Previous Month Order", "3,458", Page::PreviousMonth),
                MetricCard::new("Order & Payment Received", "153", Page::Orders),
                MetricCard::new("Payment Pending", "229", Page::Payments),
                MetricCard::new("Tolerance rate breached", "3", Page::Tolerance),
                MetricCard::new("Return", "277", Page::Returns),
                MetricCard::new("Negative Payout", "666", Page::Negative),
            ],
            bar_series: vec![
                ChartPoint::new("Cost of Advertising", 2000.0),
                ChartPoint::new("FBA Inbound Pickup Service", 2500.0),
                ChartPoint::new("FBA Inventory Storage Fee", 3500.0),
            ],
            pie_series: vec![
                ChartPoint::new("Customer Return", 23188.40),
                ChartPoint::new("Customer Service Issue", 14868.69),
                ChartPoint::new("Damaged:Warehouse", 2197.21),
                ChartPoint::new("Lost:Inbound", 28073.20),
                ChartPoint::new("Fee Correction", 1357.91),
            ],
            orders: vec![
                OrderRow::new("171-0359154-XXXXXX", 1052, 1335, order_date, "Product A"),
                OrderRow::new("171-0828577-XXXXXX", 1030, 1320, order_date, "Product A"),
                OrderRow::new("171-0862578-XXXXXX", 1030, 1320, order_date, "Product A"),
                OrderRow::new("171-1021405-XXXXXX", 240, 347, order_date, "Product A"),
                OrderRow::new("171-1056871-XXXXXX", 1847, 2290, order_date, "Product A"),
            ],
        }
    }
}

impl DataSource for SampleData {
    fn metrics(&self) -> &[MetricCard] {
        &self.metrics
    }

    fn bar_series(&self) -> &[ChartPoint] {
        &self.bar_series
    }

    fn pie_series(&self) -> &[ChartPoint] {
        &self.pie_series
    }

    fn orders(&self) -> &[OrderRow] {
        &self.orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_order_ids_are_unique() {
        let data = SampleData::new();
        let ids: HashSet<&str> = data.orders().iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(ids.len(), data.orders().len());
        assert_eq!(data.orders().len(), 5);
    }

    #[test]
    fn test_metric_cards_link_to_pages() {
        let data = SampleData::new();
        let pages: Vec<Page> = data.metrics().iter().map(|m| m.page).collect();
        assert_eq!(
            pages,
            vec![
                Page::PreviousMonth,
                Page::Orders,
                Page::Payments,
                Page::Tolerance,
                Page::Returns,
                Page::Negative,
            ]
        );
    }

    #[test]
    fn test_series_sizes() {
        let data = SampleData::new();
        assert_eq!(data.bar_series().len(), 3);
        assert_eq!(data.pie_series().len(), 5);
    }

    #[test]
    fn test_sample_dates_resolve() {
        let data = SampleData::new();
        assert!(data
            .orders()
            .iter()
            .all(|r| r.formatted_date() == "July 18, 2024"));
    }
}
