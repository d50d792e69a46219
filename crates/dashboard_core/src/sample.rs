//! Canned sample data shown on the charts and data pages.

use chrono::{Duration, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use shared::{domain::PageId, error::DashboardError};

pub const DEFAULT_SEED: u64 = 42;
pub const SERIES_DAYS: usize = 30;

pub fn series_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub sales: u32,
    pub visits: u32,
}

/// Synthetic daily sales and visit counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySeries {
    rows: Vec<DailyRow>,
}

impl DailySeries {
    /// Draws `days` consecutive rows from `start`. Sales fall in
    /// `[1000, 5000)` and visits in `[500, 2000)`; the same seed always
    /// yields the same rows.
    pub fn generate(seed: u64, start: NaiveDate, days: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let sales: Vec<u32> = (0..days).map(|_| rng.gen_range(1000..5000)).collect();
        let visits: Vec<u32> = (0..days).map(|_| rng.gen_range(500..2000)).collect();
        let rows = sales
            .into_iter()
            .zip(visits)
            .enumerate()
            .map(|(offset, (sales, visits))| DailyRow {
                date: start + Duration::days(offset as i64),
                sales,
                visits,
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[DailyRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn tail(&self, n: usize) -> &[DailyRow] {
        &self.rows[self.rows.len().saturating_sub(n)..]
    }

    pub fn dates(rows: &[DailyRow]) -> Vec<String> {
        rows.iter().map(|row| row.date.to_string()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub label: &'static str,
    pub share: u32,
    pub color: &'static str,
}

pub const CATEGORY_BREAKDOWN: [Category; 5] = [
    Category { label: "Electronics", share: 35, color: "#3498db" },
    Category { label: "Clothing", share: 25, color: "#e74c3c" },
    Category { label: "Food", share: 20, color: "#2ecc71" },
    Category { label: "Books", share: 15, color: "#f39c12" },
    Category { label: "Other", share: 5, color: "#9b59b6" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StockStatus {
    Normal,
    Warning,
}

impl StockStatus {
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Normal => "Normal",
            StockStatus::Warning => "Warning",
        }
    }
}

/// Column-oriented product table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTable {
    pub names: Vec<String>,
    pub sales: Vec<u64>,
    pub inventory: Vec<u64>,
    pub status: Vec<StockStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub total_sales: u64,
    pub total_inventory: u64,
    pub product_count: usize,
}

impl ProductTable {
    pub const COLUMNS: [&'static str; 4] = ["Product", "Sales", "Inventory", "Status"];

    pub fn sample() -> Self {
        Self {
            names: ["Product A", "Product B", "Product C", "Product D", "Product E"]
                .into_iter()
                .map(String::from)
                .collect(),
            sales: vec![15000, 23000, 18000, 31000, 12000],
            inventory: vec![150, 230, 180, 310, 120],
            status: vec![
                StockStatus::Normal,
                StockStatus::Normal,
                StockStatus::Warning,
                StockStatus::Normal,
                StockStatus::Warning,
            ],
        }
    }

    /// Row count, or a render failure when the columns disagree on it.
    pub fn row_count(&self) -> Result<usize, DashboardError> {
        let rows = self.names.len();
        if self.sales.len() != rows || self.inventory.len() != rows || self.status.len() != rows {
            return Err(DashboardError::render(
                PageId::Data,
                format!(
                    "ragged product table: {} names, {} sales, {} inventory, {} status",
                    rows,
                    self.sales.len(),
                    self.inventory.len(),
                    self.status.len()
                ),
            ));
        }
        Ok(rows)
    }

    pub fn summary(&self) -> Result<TableSummary, DashboardError> {
        let product_count = self.row_count()?;
        Ok(TableSummary {
            total_sales: checked_total(&self.sales, "sales")?,
            total_inventory: checked_total(&self.inventory, "inventory")?,
            product_count,
        })
    }
}

fn checked_total(values: &[u64], column: &str) -> Result<u64, DashboardError> {
    values
        .iter()
        .try_fold(0u64, |acc, value| acc.checked_add(*value))
        .ok_or_else(|| DashboardError::render(PageId::Data, format!("{column} total overflows")))
}

/// `99000` -> `99,000`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "tests/sample_tests.rs"]
mod tests;
