use crate::core::models::{Category, Receipt, ReceiptItem};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Amount spent in one category across the receipt set.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct CategorySlice {
    pub category: Category,
    pub amount: f64,
}

/// One point of the daily trend series. `day` is the month-day portion of the
/// receipt date, so ordering only holds within a single year.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct TrendPoint {
    pub day: String,
    pub amount: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub current_month_total: f64,
    pub lifetime_total: f64,
    pub receipt_count: usize,
    pub top_category: Option<CategorySlice>,
    pub category_breakdown: Vec<CategorySlice>,
    pub daily_trend: Vec<TrendPoint>,
    pub last_scan_date: Option<NaiveDate>,
}

/// Items of one receipt that share a category.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryGroup {
    pub category: Category,
    pub items: Vec<ReceiptItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ReceiptBreakdown {
    pub receipt: Receipt,
    pub categories: Vec<CategoryGroup>,
}

/// Receipts that fall in one calendar month, newest first.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MonthlyGroup {
    pub label: String,
    pub receipts: Vec<ReceiptBreakdown>,
}

pub fn current_month_total(receipts: &[Receipt], today: NaiveDate) -> f64 {
    receipts
        .iter()
        .filter(|r| r.date.month() == today.month() && r.date.year() == today.year())
        .map(|r| r.total_amount)
        .sum()
}

pub fn lifetime_total(receipts: &[Receipt]) -> f64 {
    receipts.iter().map(|r| r.total_amount).sum()
}

/// Category → summed item price, in first-seen category order.
pub fn category_breakdown(receipts: &[Receipt]) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = Vec::new();
    for receipt in receipts {
        for item in &receipt.items {
            match slices.iter_mut().find(|s| s.category == item.category) {
                Some(slice) => slice.amount += item.unit_price,
                None => slices.push(CategorySlice {
                    category: item.category,
                    amount: item.unit_price,
                }),
            }
        }
    }
    slices
}

/// Highest-spend category; on equal amounts the later entry wins.
pub fn top_category(breakdown: &[CategorySlice]) -> Option<CategorySlice> {
    breakdown
        .iter()
        .fold(None::<&CategorySlice>, |best, slice| match best {
            Some(current) if current.amount > slice.amount => Some(current),
            _ => Some(slice),
        })
        .cloned()
}

/// Per-day summed totals keyed by the `MM-DD` slice of the date, sorted
/// lexicographically.
pub fn daily_trend(receipts: &[Receipt]) -> Vec<TrendPoint> {
    let mut days: BTreeMap<String, f64> = BTreeMap::new();
    for receipt in receipts {
        *days
            .entry(receipt.date.format("%m-%d").to_string())
            .or_insert(0.0) += receipt.total_amount;
    }
    days.into_iter()
        .map(|(day, amount)| TrendPoint { day, amount })
        .collect()
}

/// Partitions a receipt's items by category, preserving item order within
/// each group. Every item lands in exactly one group.
pub fn items_by_category(receipt: &Receipt) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for item in &receipt.items {
        match groups.iter_mut().find(|g| g.category == item.category) {
            Some(group) => group.items.push(item.clone()),
            None => groups.push(CategoryGroup {
                category: item.category,
                items: vec![item.clone()],
            }),
        }
    }
    groups
}

/// Groups receipts under month-year labels for the history view. Input is
/// expected newest-first; groups keep that encounter order.
pub fn monthly_groups(receipts: &[Receipt]) -> Vec<MonthlyGroup> {
    let mut groups: Vec<MonthlyGroup> = Vec::new();
    for receipt in receipts {
        let label = receipt.date.format("%B %Y").to_string();
        let breakdown = ReceiptBreakdown {
            receipt: receipt.clone(),
            categories: items_by_category(receipt),
        };
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.receipts.push(breakdown),
            None => groups.push(MonthlyGroup {
                label,
                receipts: vec![breakdown],
            }),
        }
    }
    groups
}

pub fn dashboard_stats(receipts: &[Receipt], today: NaiveDate) -> DashboardStats {
    let breakdown = category_breakdown(receipts);
    DashboardStats {
        current_month_total: current_month_total(receipts, today),
        lifetime_total: lifetime_total(receipts),
        receipt_count: receipts.len(),
        top_category: top_category(&breakdown),
        daily_trend: daily_trend(receipts),
        last_scan_date: receipts.first().map(|r| r.date),
        category_breakdown: breakdown,
    }
}
