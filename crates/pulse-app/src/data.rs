//! Built-in sample metric data
//!
//! Deterministic in-memory series for every period granularity. Should a
//! date or shape ever fail to line up, `DataSet::new` rejects the series
//! at build time instead of rendering garbage.

use chrono::{Days, NaiveDate};
use pulse_core::{percent_change, DataSet, Metric, Period, Result};
use std::collections::HashMap;

pub fn revenue_metric() -> Result<Metric> {
    let mut datasets = HashMap::new();
    datasets.insert(Period::Days, days()?);
    datasets.insert(Period::Weeks, weeks()?);
    datasets.insert(Period::Months, months()?);
    datasets.insert(Period::Quarters, quarters()?);
    datasets.insert(Period::Years, years()?);

    Metric::new("Revenue", datasets)
}

fn days() -> Result<DataSet> {
    let data = vec![96.0, 132.0, 118.0, 141.0, 156.0, 88.0, 74.0];
    let anchor = NaiveDate::from_ymd_opt(2025, 7, 28);
    let full_dates = (0..data.len() as u64)
        .filter_map(|i| anchor.and_then(|d| d.checked_add_days(Days::new(i))))
        .map(|d| d.format("%A, %B %-d, %Y").to_string())
        .collect();

    DataSet::new(
        strs(&["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]),
        full_dates,
        data.clone(),
        comparisons(&data),
        180.0,
    )
}

fn weeks() -> Result<DataSet> {
    let data = vec![410.0, 465.0, 430.0, 520.0, 585.0];
    let anchor = NaiveDate::from_ymd_opt(2025, 6, 30);
    let full_dates = (0..data.len() as u64)
        .filter_map(|i| anchor.and_then(|d| d.checked_add_days(Days::new(i * 7))))
        .map(|d| format!("Week of {}", d.format("%B %-d, %Y")))
        .collect();

    DataSet::new(
        strs(&["W1", "W2", "W3", "W4", "W5"]),
        full_dates,
        data.clone(),
        comparisons(&data),
        700.0,
    )
}

fn months() -> Result<DataSet> {
    let data = vec![
        350.0, 450.0, 400.0, 570.0, 510.0, 680.0, 610.0, 780.0, 850.0, 920.0,
    ];
    let full_dates = (1..=data.len() as u32)
        .filter_map(|m| NaiveDate::from_ymd_opt(2025, m, 1))
        .map(|d| d.format("%B %Y").to_string())
        .collect();

    DataSet::new(
        strs(&[
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct",
        ]),
        full_dates,
        data.clone(),
        comparisons(&data),
        1200.0,
    )
}

fn quarters() -> Result<DataSet> {
    let data = vec![1210.0, 1580.0, 1840.0, 2210.0];
    let full_dates = (0..data.len() as u32)
        .map(|q| format!("Q{} 2025", q + 1))
        .collect();

    DataSet::new(
        strs(&["Q1", "Q2", "Q3", "Q4"]),
        full_dates,
        data.clone(),
        comparisons(&data),
        2500.0,
    )
}

fn years() -> Result<DataSet> {
    let data = vec![6400.0, 7150.0, 8900.0, 10200.0, 12400.0];
    let full_dates = (2021..=2025)
        .filter_map(|y| NaiveDate::from_ymd_opt(y, 1, 1))
        .map(|d| d.format("Year %Y").to_string())
        .collect();

    DataSet::new(
        strs(&["2021", "2022", "2023", "2024", "2025"]),
        full_dates,
        data.clone(),
        comparisons(&data),
        14000.0,
    )
}

/// Per-point percentage deltas against the preceding point
fn comparisons(data: &[f64]) -> Vec<f64> {
    data.iter()
        .enumerate()
        .map(|(i, &value)| {
            if i == 0 {
                0.0
            } else {
                percent_change(value, data[i - 1])
            }
        })
        .collect()
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
