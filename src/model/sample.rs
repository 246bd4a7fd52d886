//! Sample report records shown on the dashboard

use chrono::NaiveDate;
use super::page::Page;

/// A single order in the "Order & Payment Received" table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    pub order_id: String,
    pub net_amount: u64,
    pub invoice_amount: u64,
    pub order_date: NaiveDate,
    pub description: String,
}

impl OrderRow {
    pub fn new(
        order_id: &str,
        net_amount: u64,
        invoice_amount: u64,
        order_date: NaiveDate,
        description: &str,
    ) -> Self {
        Self {
            order_id: order_id.to_string(),
            net_amount,
            invoice_amount,
            order_date,
            description: description.to_string(),
        }
    }

    /// Order date as displayed, e.g. "July 18, 2024"
    pub fn formatted_date(&self) -> String {
        self.order_date.format("%B %-d, %Y").to_string()
    }

    /// Every field rendered as display text, in column order
    pub fn display_fields(&self) -> [String; 5] {
        [
            self.order_id.clone(),
            self.net_amount.to_string(),
            self.invoice_amount.to_string(),
            self.formatted_date(),
            self.description.clone(),
        ]
    }
}

/// A named value in a chart series
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

/// Headline metric card on the dashboard overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    /// Page opened when the card is activated
    pub page: Page,
}

impl MetricCard {
    pub fn new(title: &str, value: &str, page: Page) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            page,
        }
    }
}

/// Format a currency amount with thousands separators and two decimals
pub fn format_amount(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let negative = cents < 0;
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{:02}", if negative { "-" } else { "" }, grouped, frac)
}

/// Axis label for a bar value, e.g. 2500 -> "$2.5K"
pub fn format_thousands(value: f64) -> String {
    let k = value / 1000.0;
    if (k.fract()).abs() < f64::EPSILON {
        format!("${}K", k as i64)
    } else {
        format!("${}K", k)
    }
}
