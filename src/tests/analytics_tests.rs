use crate::core::analytics::{
    category_breakdown, current_month_total, daily_trend, dashboard_stats, items_by_category,
    lifetime_total, monthly_groups, top_category,
};
use crate::core::models::Category;
use crate::tests::{item, receipt};
use chrono::NaiveDate;

fn fixed_receipts() -> Vec<crate::core::models::Receipt> {
    // Newest transaction first, the order storage hands out.
    vec![
        receipt(
            "u1",
            "Starbucks",
            "2025-10-25",
            18.40,
            vec![
                item("Latte Grande", 5.45, Category::Dining),
                item("Croissant", 3.95, Category::Dining),
            ],
        ),
        receipt(
            "u1",
            "Whole Foods Market",
            "2025-10-02",
            42.85,
            vec![
                item("Organic Milk", 5.99, Category::Groceries),
                item("Sourdough Bread", 6.25, Category::Groceries),
                item("Kombucha", 3.99, Category::Dining),
            ],
        ),
        receipt(
            "u1",
            "Tech Haven",
            "2025-09-22",
            124.50,
            vec![
                item("USB-C Cable", 14.50, Category::Electronics),
                item("Wireless Mouse", 45.00, Category::Electronics),
            ],
        ),
    ]
}

#[test]
fn current_month_sum_only_counts_this_month() {
    let receipts = fixed_receipts();
    let today = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
    let total = current_month_total(&receipts, today);
    assert!((total - (18.40 + 42.85)).abs() < 1e-9);
}

#[test]
fn current_month_sum_is_year_aware() {
    let receipts = vec![receipt("u1", "Old Cafe", "2024-10-05", 9.99, vec![])];
    let today = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
    assert_eq!(current_month_total(&receipts, today), 0.0);
}

#[test]
fn lifetime_sum_counts_everything() {
    let receipts = fixed_receipts();
    let total = lifetime_total(&receipts);
    assert!((total - (18.40 + 42.85 + 124.50)).abs() < 1e-9);
}

#[test]
fn breakdown_partitions_every_item_exactly_once() {
    let receipts = fixed_receipts();
    let breakdown = category_breakdown(&receipts);

    let item_sum: f64 = receipts
        .iter()
        .flat_map(|r| r.items.iter())
        .map(|i| i.unit_price)
        .sum();
    let slice_sum: f64 = breakdown.iter().map(|s| s.amount).sum();
    assert!((item_sum - slice_sum).abs() < 1e-9);

    let dining = breakdown
        .iter()
        .find(|s| s.category == Category::Dining)
        .unwrap();
    assert!((dining.amount - (5.45 + 3.95 + 3.99)).abs() < 1e-9);
    // One slice per distinct category
    assert_eq!(breakdown.len(), 3);
}

#[test]
fn top_category_is_highest_spend() {
    let receipts = fixed_receipts();
    let breakdown = category_breakdown(&receipts);
    let top = top_category(&breakdown).unwrap();
    assert_eq!(top.category, Category::Electronics);
    assert!((top.amount - (14.50 + 45.00)).abs() < 1e-9);
}

#[test]
fn top_category_empty_breakdown_is_none() {
    assert!(top_category(&[]).is_none());
}

#[test]
fn trend_sums_per_day_and_sorts_lexicographically() {
    let receipts = vec![
        receipt("u1", "A", "2025-10-02", 10.0, vec![]),
        receipt("u1", "B", "2025-09-28", 5.0, vec![]),
        receipt("u1", "C", "2025-10-02", 2.5, vec![]),
    ];
    let trend = daily_trend(&receipts);
    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0].day, "09-28");
    assert_eq!(trend[1].day, "10-02");
    assert!((trend[1].amount - 12.5).abs() < 1e-9);
}

#[test]
fn monthly_groups_label_and_keep_order() {
    let receipts = fixed_receipts();
    let groups = monthly_groups(&receipts);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].label, "October 2025");
    assert_eq!(groups[0].receipts.len(), 2);
    assert_eq!(groups[1].label, "September 2025");
    assert_eq!(groups[1].receipts.len(), 1);
}

#[test]
fn items_by_category_never_duplicates_or_drops() {
    let receipts = fixed_receipts();
    let whole_foods = &receipts[1];
    let groups = items_by_category(whole_foods);

    let grouped_count: usize = groups.iter().map(|g| g.items.len()).sum();
    assert_eq!(grouped_count, whole_foods.items.len());
    for group in &groups {
        assert!(group.items.iter().all(|i| i.category == group.category));
    }
    assert_eq!(groups.len(), 2);
}

#[test]
fn dashboard_stats_compose() {
    let receipts = fixed_receipts();
    let today = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
    let stats = dashboard_stats(&receipts, today);

    assert_eq!(stats.receipt_count, 3);
    assert_eq!(
        stats.last_scan_date,
        Some(NaiveDate::from_ymd_opt(2025, 10, 25).unwrap())
    );
    assert_eq!(stats.top_category.unwrap().category, Category::Electronics);
    assert_eq!(stats.daily_trend.len(), 3);
}

#[test]
fn dashboard_stats_on_empty_set() {
    let today = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
    let stats = dashboard_stats(&[], today);
    assert_eq!(stats.receipt_count, 0);
    assert_eq!(stats.lifetime_total, 0.0);
    assert!(stats.top_category.is_none());
    assert!(stats.daily_trend.is_empty());
    assert!(stats.last_scan_date.is_none());
}
